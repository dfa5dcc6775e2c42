//! Labeled table model for prettyframe
//!
//! A [`Frame`] is an ordered grid of [`CellValue`]s with a [`Label`] per row
//! and a name per column. Row labels may have several levels. Operations that
//! change a frame's shape return a new frame.
//!
//! # Examples
//!
//! ```
//! use prettyframe_frame::{CellValue, Frame, Label};
//!
//! let frame = Frame::from_rows(&["A", "B"], vec![vec![1, 2], vec![3, 4]]).unwrap();
//!
//! assert_eq!(frame.shape(), (2, 2));
//! assert_eq!(
//!     frame.get_by_label(&Label::from(1), "B").unwrap(),
//!     &CellValue::Int(4)
//! );
//! ```
//!
//! ## Multi-level labels
//!
//! ```
//! use prettyframe_frame::Frame;
//!
//! let frame = Frame::from_rows(&["A", "B", "C"], vec![vec![1, 3, 6], vec![2, 4, 7]])
//!     .unwrap()
//!     .set_index(&["A", "B"])
//!     .unwrap();
//!
//! assert!(frame.is_multi_level());
//! assert_eq!(frame.col_count(), 1);
//! ```

mod cell;
mod error;
mod frame;
mod json;
mod label;
mod subset;

/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export frame error types.
pub use error::{FrameError, Result};
/// Re-export frame type.
pub use frame::Frame;
/// Re-export label types.
pub use label::{Label, LabelPart};
/// Re-export cell selection types.
pub use subset::{CellPredicate, Subset};
