//! SVG sparklines
//!
//! ```
//! use prettyframe_sparkline::Sparkline;
//!
//! let svg = Sparkline::new([1.0, 4.0, 2.0, 8.0]).unwrap().render().unwrap();
//! assert!(svg.starts_with("<svg width=\"150\" height=\"20\""));
//! assert!(svg.contains("class=\"max\""));
//! ```

mod error;
mod multi;
mod sparkline;
mod templates;

pub use error::{Result, SparklineError};
pub use multi::MultiSparkline;
pub use sparkline::{
    Point, Sparkline, DEFAULT_HEIGHT, DEFAULT_LINE_COLOR, DEFAULT_MAX_COLOR, DEFAULT_MIN_COLOR,
    DEFAULT_OFFSET, DEFAULT_WIDTH,
};
