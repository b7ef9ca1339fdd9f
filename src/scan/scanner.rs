//! Locates register arrays that are immediately followed by an
//! `initial begin` / `end` block of indexed assignments.
//!
//! The scanner walks the source line by line through three states:
//! - seeking a `reg [w] name [d];` declaration
//! - expecting `initial begin` on the very next line
//! - inside the block, accepting assignments until `end`
//!
//! Anything unexpected drops the candidate and the offending line is
//! examined again as a possible declaration.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::lines::{split_lines, Line};
use crate::types::DeclarationMatch;

// reg [3:0] mem [0:1];
static DECLARATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([ \t]*)reg\s*\[([^\]]*)\]\s*([A-Za-z_][A-Za-z0-9_$]*)\s*\[([^\]]*)\]\s*;\s*$")
        .unwrap()
});

static INITIAL_BEGIN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*initial\s+begin\s*$").unwrap());

static END_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*end\s*$").unwrap());

// mem[0] = 4'hA;
static ASSIGNMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[A-Za-z_][A-Za-z0-9_$]*\s*\[[^\]]*\]\s*=\s*[^;\s]+\s*;\s*$").unwrap()
});

struct Pending {
    indent: String,
    width: String,
    name: String,
    depth: String,
    newline: String,
    start: usize,
    block_start: usize,
}

enum State {
    SeekingDeclaration,
    SeekingInitBlock(Pending),
    InsideInitBlock(Pending),
}

/// Find every declaration + initial block, left to right, non-overlapping.
pub fn scan_declarations(text: &str) -> Vec<DeclarationMatch> {
    let lines = split_lines(text);
    let mut matches = Vec::new();
    let mut state = State::SeekingDeclaration;
    let mut i = 0;

    while i < lines.len() {
        let line = &lines[i];
        state = match state {
            State::SeekingDeclaration => {
                i += 1;
                match parse_declaration(line) {
                    Some(pending) => State::SeekingInitBlock(pending),
                    None => State::SeekingDeclaration,
                }
            }
            State::SeekingInitBlock(mut pending) => {
                if INITIAL_BEGIN_PATTERN.is_match(line.content) {
                    i += 1;
                    pending.block_start = line.end;
                    State::InsideInitBlock(pending)
                } else {
                    debug!(
                        "reg {} at byte {} has no initial block, skipping",
                        pending.name, pending.start
                    );
                    State::SeekingDeclaration
                }
            }
            State::InsideInitBlock(pending) => {
                if END_PATTERN.is_match(line.content) {
                    i += 1;
                    matches.push(finish(text, pending, line));
                    State::SeekingDeclaration
                } else if line.content.trim().is_empty()
                    || ASSIGNMENT_PATTERN.is_match(line.content)
                {
                    i += 1;
                    State::InsideInitBlock(pending)
                } else {
                    debug!(
                        "initial block of {} has a non-assignment line at byte {}, skipping",
                        pending.name, line.start
                    );
                    State::SeekingDeclaration
                }
            }
        };
    }

    if let State::InsideInitBlock(pending) = state {
        debug!("initial block of {} is never closed", pending.name);
    }

    matches
}

fn parse_declaration(line: &Line<'_>) -> Option<Pending> {
    let cap = DECLARATION_PATTERN.captures(line.content)?;
    let group = |i: usize| cap.get(i).map(|m| m.as_str()).unwrap_or("");
    Some(Pending {
        indent: group(1).to_string(),
        width: group(2).to_string(),
        name: group(3).to_string(),
        depth: group(4).to_string(),
        newline: line.terminator.to_string(),
        start: line.start,
        block_start: line.end,
    })
}

fn finish(text: &str, pending: Pending, end_line: &Line<'_>) -> DeclarationMatch {
    DeclarationMatch {
        indent: pending.indent,
        width: pending.width,
        name: pending.name,
        depth: pending.depth,
        newline: pending.newline,
        block: text[pending.block_start..end_line.start].to_string(),
        block_start: pending.block_start,
        start: pending.start,
        end: end_line.end,
        line_ending: end_line.terminator.to_string(),
    }
}
