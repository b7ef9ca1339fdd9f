/// A source line with its byte position and terminator split off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub start: usize,
    pub end: usize,
    /// Line text without "\n" or "\r\n"
    pub content: &'a str,
    pub terminator: &'a str,
}

/// Split text into lines, keeping exact offsets so spans can be cut later.
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    let mut offset = 0;
    text.split_inclusive('\n')
        .map(|raw| {
            let start = offset;
            offset += raw.len();
            let content = match raw.strip_suffix('\n') {
                Some(s) => s.strip_suffix('\r').unwrap_or(s),
                None => raw,
            };
            Line {
                start,
                end: offset,
                content,
                terminator: &raw[content.len()..],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_cover_text() {
        let text = "a\nbb\r\nccc";
        let lines = split_lines(text);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].content, "bb");
        assert_eq!(lines[1].terminator, "\r\n");
        assert_eq!(lines[2].terminator, "");
        assert_eq!(lines[2].end, text.len());
        let rebuilt: String = lines
            .iter()
            .map(|l| format!("{}{}", l.content, l.terminator))
            .collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_empty_text() {
        assert!(split_lines("").is_empty());
    }
}
