use anyhow::{Context, Result};
use console::{style, Emoji};
use std::path::Path;

use super::args::Args;
use crate::config::{GeneratorConfig, NoMatchPolicy};
use crate::emit::JsonReport;
use crate::generate::{process_with_config, ProcessReport};

static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "");

/// Config file first, then command-line overrides.
pub fn build_config(args: &Args) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(name) = &args.image_name {
        config = config.with_image_file_name(name);
    }
    if let Some(name) = &args.module_name {
        config = config.with_module_file_name(name);
    }
    if args.allow_no_match {
        config = config.with_no_match_policy(NoMatchPolicy::Passthrough);
    }

    config.validate(Path::new("<command line>"))?;
    Ok(config)
}

pub fn run(args: &Args) -> Result<()> {
    let config = build_config(args)?;

    let report = process_with_config(&args.source, &args.dest_dir, &config)
        .with_context(|| format!("failed to process {}", args.source.display()))?;

    if args.json {
        println!("{}", JsonReport::from_report(&report).to_json());
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn print_summary(report: &ProcessReport) {
    if report.is_noop() {
        println!(
            "{}No initialized register arrays in {}; copied to {}",
            INFO,
            style(report.source.display()).yellow(),
            style(report.module_path.display()).green()
        );
        return;
    }

    println!(
        "{}Rewrote {} -> {}",
        SUCCESS,
        style(report.source.display()).dim(),
        style(report.module_path.display()).green()
    );
    for image in &report.images {
        println!(
            "  {} {} ({} values)",
            style(&image.array).cyan(),
            image.path.display(),
            style(image.values).green()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("memsplit.toml");
        fs::write(
            &config_path,
            "image_file_name = \"file.mem\"\nmodule_file_name = \"file.v\"\n",
        )
        .unwrap();

        let args = Args::parse_from([
            "memsplit",
            "out",
            "in.v",
            "--config",
            config_path.to_str().unwrap(),
            "--image-name",
            "flag.mem",
            "--allow-no-match",
        ]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.image_file_name, "flag.mem");
        assert_eq!(config.module_file_name, "file.v");
        assert_eq!(config.on_no_match, NoMatchPolicy::Passthrough);
    }

    #[test]
    fn test_bad_override_rejected() {
        let args = Args::parse_from(["memsplit", "out", "in.v", "--module-name", "../x.v"]);
        assert!(build_config(&args).is_err());
    }
}
