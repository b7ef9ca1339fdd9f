use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::error::{MemsplitError, Result};
use crate::scan::split_lines;
use crate::types::{DeclarationMatch, LiteralToken, MemoryImage};

// mem[3] = 8'h0F;  captures "0F"; signed 8'shF0 captures "F0"
static HEX_ASSIGNMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\S+\s*\[[^\]]*\]\s*=\s*[^;\s']*'[sS]?[hH]([^;\s]+)\s*;\s*$").unwrap()
});

/// A block line that is neither blank nor a hex assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// Byte offset of the line within the block text
    pub offset: usize,
    pub line: String,
}

/// Pull the hex literals out of an initial block body, in line order.
///
/// Tokens are kept exactly as written: no case folding, no zero stripping.
/// Index values in the lvalue are ignored, so out-of-order indices stay in
/// textual order.
pub fn extract_values(block: &str) -> std::result::Result<Vec<LiteralToken>, MalformedLine> {
    let mut tokens = Vec::new();

    for line in split_lines(block) {
        if line.content.trim().is_empty() {
            continue;
        }
        match HEX_ASSIGNMENT_PATTERN.captures(line.content) {
            Some(cap) => tokens.push(LiteralToken::new(&cap[1])),
            None => {
                return Err(MalformedLine {
                    offset: line.start,
                    line: line.content.trim().to_string(),
                })
            }
        }
    }

    Ok(tokens)
}

/// Extract one match into its memory image, reporting malformed lines with
/// their absolute byte offset in `source`.
pub fn extract_image(m: &DeclarationMatch, source: &Path) -> Result<MemoryImage> {
    extract_values(&m.block)
        .map(MemoryImage::from_iter)
        .map_err(|bad| MemsplitError::MalformedAssignment {
            path: source.to_path_buf(),
            offset: m.block_start + bad.offset,
            line: bad.line,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan_declarations;

    fn tokens(block: &str) -> Vec<String> {
        extract_values(block)
            .unwrap()
            .into_iter()
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn test_values_in_line_order() {
        assert_eq!(tokens("  mem[0] = 4'hA;\n  mem[1] = 4'h3;\n"), vec!["A", "3"]);
    }

    #[test]
    fn test_tokens_kept_verbatim() {
        let block = "m[0] = 16'h00fF;\nm[1] = 16'HDEAD;\nm[2] = 'h0;\n";
        assert_eq!(tokens(block), vec!["00fF", "DEAD", "0"]);
    }

    #[test]
    fn test_signed_hex_literals() {
        let block = "m[0] = 4'shA;\nm[1] = 8'SHf0;\n";
        assert_eq!(tokens(block), vec!["A", "f0"]);
    }

    #[test]
    fn test_out_of_order_indices_keep_text_order() {
        let block = "m[1] = 4'h1;\nm[0] = 4'h0;\n";
        assert_eq!(tokens(block), vec!["1", "0"]);
    }

    #[test]
    fn test_empty_and_blank_blocks() {
        assert!(tokens("").is_empty());
        assert!(tokens("\n   \n").is_empty());
    }

    #[test]
    fn test_non_hex_value_is_malformed() {
        let block = "m[0] = 4'h1;\nm[1] = 4'b1010;\n";
        let err = extract_values(block).unwrap_err();
        assert_eq!(err.offset, "m[0] = 4'h1;\n".len());
        assert_eq!(err.line, "m[1] = 4'b1010;");
    }

    #[test]
    fn test_malformed_offset_is_absolute() {
        let text = "// header\nreg [3:0] m [0:1];\ninitial begin\nm[0] = 4'd9;\nend\n";
        let matches = scan_declarations(text);
        assert_eq!(matches.len(), 1);

        let err = extract_image(&matches[0], Path::new("top.v")).unwrap_err();
        match err {
            MemsplitError::MalformedAssignment { offset, line, .. } => {
                assert_eq!(offset, text.find("m[0]").unwrap());
                assert_eq!(line, "m[0] = 4'd9;");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_token_count_matches_assignments() {
        let text = "reg [7:0] m [0:3];\ninitial begin\nm[0] = 8'h00;\nm[1] = 8'h01;\nm[2] = 8'h02;\nm[3] = 8'h03;\nend\n";
        let matches = scan_declarations(text);
        let image = extract_image(&matches[0], Path::new("t.v")).unwrap();
        assert_eq!(image.len(), 4);
    }
}
