use prettyframe_formatting::CellFormatter;
use prettyframe_frame::Subset;
use std::sync::Arc;

/// A formatter paired with the cells it applies to.
///
/// The subset is resolved against the summarized frame at render time, so it
/// may name summary rows and columns.
#[derive(Debug, Clone)]
pub struct FormatterBinding {
    formatter: Arc<dyn CellFormatter>,
    subset: Subset,
}

impl FormatterBinding {
    pub fn new(formatter: Arc<dyn CellFormatter>, subset: Subset) -> Self {
        Self { formatter, subset }
    }

    pub fn formatter(&self) -> &dyn CellFormatter {
        self.formatter.as_ref()
    }

    pub fn subset(&self) -> &Subset {
        &self.subset
    }
}
