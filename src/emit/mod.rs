mod atomic;
pub mod json;
mod memory_image;
mod module;

pub use atomic::atomic_write;
pub use json::JsonReport;
pub use memory_image::write_memory_image;
pub use module::{readmemh_path, rewrite_module};
