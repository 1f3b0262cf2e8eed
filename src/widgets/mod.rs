//! Reusable UI widgets.

mod input_box;

pub use input_box::InputBox;
