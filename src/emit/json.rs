use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::generate::{ImageArtifact, ProcessReport};

#[derive(Serialize)]
pub struct JsonReport {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub dest_dir: String,
    pub module: String,
    pub noop: bool,
    pub total_values: usize,
    pub images: Vec<ImageOutput>,
}

#[derive(Serialize)]
pub struct ImageOutput {
    pub array: String,
    pub path: String,
    pub readmemh_path: String,
    pub values: usize,
}

impl From<&ImageArtifact> for ImageOutput {
    fn from(image: &ImageArtifact) -> Self {
        Self {
            array: image.array.clone(),
            path: image.path.display().to_string(),
            readmemh_path: image.readmemh_path.clone(),
            values: image.values,
        }
    }
}

impl JsonReport {
    pub fn from_report(report: &ProcessReport) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            source: report.source.display().to_string(),
            dest_dir: report.dest_dir.display().to_string(),
            module: report.module_path.display().to_string(),
            noop: report.is_noop(),
            total_values: report.total_values(),
            images: report.images.iter().map(ImageOutput::from).collect(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
