//! Text rendering pieces shared by the composer and the sinks: operand values,
//! the printf-style template renderer, level colors, and the JSON helper.

mod color;
pub mod json;
pub mod printf;
mod value;

pub use color::{Color, colorize};
pub use json::to_json;
pub use printf::render;
pub use value::Value;
