//! Widget components for the HUD window.
//!
//! - [`arrow`]: the rotated, colored wind indicator polygon
//! - [`labels`]: the GRIP/WIND/ROAD/AIR text rows
//!
//! Widgets are free functions generic over `DrawTarget<Color = Rgb565>`; the
//! caller owns layout and state, widgets only draw.

mod arrow;
mod labels;

pub use arrow::draw_arrow;
pub use labels::{LabelValues, draw_labels};
