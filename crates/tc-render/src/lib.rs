pub mod hit;
pub mod measure;
pub mod paint;

pub use hit::{hit_test, item_bounds};
pub use measure::{ApproxMeasure, TextMeasure};
pub use paint::{DrawOp, paint_scene};
