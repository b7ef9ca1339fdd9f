mod lines;
mod scanner;

pub use lines::{split_lines, Line};
pub use scanner::scan_declarations;
