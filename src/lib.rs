pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod generate;
pub mod scan;
pub mod types;

pub use config::{GeneratorConfig, NoMatchPolicy};
pub use error::{MemsplitError, Result};
pub use generate::{process, process_with_config, ImageArtifact, ProcessReport};
pub use types::{DeclarationMatch, LiteralToken, MemoryImage};
