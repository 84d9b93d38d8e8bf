// File: crates/gnuplot-core/src/lib.rs
// Summary: Core library entry point; exports the public API for driving gnuplot over a pipe.

pub mod axis;
pub mod encoding;
pub mod error;
pub mod histogram;
pub mod series;
pub mod session;
pub mod terminal;

pub use axis::{AxisRange, AxisScale};
pub use error::{Error, Result};
pub use series::LineStyle;
pub use session::{Gnuplot, DEFAULT_EXECUTABLE};
pub use terminal::DumbMode;
