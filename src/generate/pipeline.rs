//! Two-stage pipeline: write the memory images first, then rewrite the
//! module so each `$readmemh` points at an image that already exists.

use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use super::naming::image_file_names;
use crate::config::{GeneratorConfig, NoMatchPolicy};
use crate::emit::{atomic_write, readmemh_path, rewrite_module, write_memory_image};
use crate::error::{MemsplitError, Result};
use crate::extract::extract_image;
use crate::scan::scan_declarations;
use crate::types::MemoryImage;

/// One memory image written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageArtifact {
    /// Register array the image initializes
    pub array: String,
    pub path: PathBuf,
    /// Path as embedded in the `$readmemh` call
    pub readmemh_path: String,
    pub values: usize,
}

/// Outcome of `process`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport {
    pub source: PathBuf,
    pub dest_dir: PathBuf,
    pub module_path: PathBuf,
    pub images: Vec<ImageArtifact>,
}

impl ProcessReport {
    /// True when nothing matched and the module was passed through unchanged.
    pub fn is_noop(&self) -> bool {
        self.images.is_empty()
    }

    /// Path of the first (for single-block sources, the only) memory image.
    pub fn memory_image_path(&self) -> Option<&Path> {
        self.images.first().map(|img| img.path.as_path())
    }

    pub fn total_values(&self) -> usize {
        self.images.iter().map(|img| img.values).sum()
    }
}

/// Run the pipeline with default file names and policies.
pub fn process(source: &Path, dest_dir: &Path) -> Result<ProcessReport> {
    process_with_config(source, dest_dir, &GeneratorConfig::default())
}

pub fn process_with_config(
    source: &Path,
    dest_dir: &Path,
    config: &GeneratorConfig,
) -> Result<ProcessReport> {
    config.validate(Path::new("<config>"))?;

    fs::create_dir_all(dest_dir).map_err(|e| MemsplitError::io(dest_dir, e))?;

    let text = fs::read_to_string(source).map_err(|e| MemsplitError::InputNotFound {
        path: source.to_path_buf(),
        source: e,
    })?;

    let matches = scan_declarations(&text);
    debug!("{}: {} declaration block(s)", source.display(), matches.len());

    let module_path = dest_dir.join(&config.module_file_name);
    let mut report = ProcessReport {
        source: source.to_path_buf(),
        dest_dir: dest_dir.to_path_buf(),
        module_path,
        images: Vec::new(),
    };

    if matches.is_empty() {
        return match config.on_no_match {
            NoMatchPolicy::Error => Err(MemsplitError::NoMatchFound {
                path: source.to_path_buf(),
            }),
            NoMatchPolicy::Passthrough => {
                warn!(
                    "{}: nothing to extract, copying module unchanged",
                    source.display()
                );
                atomic_write(&report.module_path, text.as_bytes())?;
                Ok(report)
            }
        };
    }

    // Every block must extract cleanly before anything is written.
    let images = matches
        .iter()
        .map(|m| extract_image(m, source))
        .collect::<Result<Vec<MemoryImage>>>()?;

    let names = image_file_names(&config.image_file_name, &config.module_file_name, &matches);
    for ((m, image), name) in matches.iter().zip(&images).zip(names) {
        let path = dest_dir.join(name);
        write_memory_image(&path, image)?;
        report.images.push(ImageArtifact {
            array: m.name.clone(),
            readmemh_path: readmemh_path(&path, dest_dir),
            path,
            values: image.len(),
        });
    }

    let rewritten = rewrite_module(&text, &matches, |i, _| {
        report.images[i].readmemh_path.clone()
    });
    atomic_write(&report.module_path, rewritten.as_bytes())?;
    info!(
        "rewrote {} block(s) into {}",
        matches.len(),
        report.module_path.display()
    );

    Ok(report)
}
