pub mod input_line;

pub use input_line::{InputLine, InputLineWidget};
