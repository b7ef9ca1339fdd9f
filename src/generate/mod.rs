mod naming;
mod pipeline;

pub use naming::image_file_names;
pub use pipeline::{process, process_with_config, ImageArtifact, ProcessReport};
