//! Built-in sub-sheets, registered on the skin's stylesheet builder.

mod bars;
mod buttons;
mod checkbox;
mod input_label;
mod window;

pub use bars::BarSheet;
pub use buttons::ButtonSheet;
pub use checkbox::CheckBoxSheet;
pub use input_label::InputLabelSheet;
pub use window::WindowSheet;
