use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "memsplit")]
#[command(author, version, about = "Move inline register-array initializers into $readmemh memory images")]
pub struct Args {
    /// Directory that receives the memory image and the rewritten module
    pub dest_dir: PathBuf,

    /// Verilog source containing `reg [..] name [..];` + `initial begin` blocks
    pub source: PathBuf,

    /// TOML file with image_file_name / module_file_name / on_no_match
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Memory image file name (overrides config)
    #[arg(long)]
    pub image_name: Option<String>,

    /// Rewritten module file name (overrides config)
    #[arg(long)]
    pub module_name: Option<String>,

    /// Copy the module through unchanged when nothing matches instead of failing
    #[arg(long)]
    pub allow_no_match: bool,

    /// Print a JSON run report
    #[arg(long)]
    pub json: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_order() {
        let args = Args::parse_from(["memsplit", "generated", "testcase.v"]);
        assert_eq!(args.dest_dir, PathBuf::from("generated"));
        assert_eq!(args.source, PathBuf::from("testcase.v"));
        assert!(!args.json);
        assert!(!args.allow_no_match);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "memsplit",
            "out",
            "in.v",
            "--image-name",
            "rom.hex",
            "--allow-no-match",
            "--json",
        ]);
        assert_eq!(args.image_name.as_deref(), Some("rom.hex"));
        assert!(args.allow_no_match);
        assert!(args.json);
    }
}
