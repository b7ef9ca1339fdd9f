use std::collections::HashSet;
use std::path::Path;

use crate::types::DeclarationMatch;

/// Pick one image file name per match.
///
/// A single match uses `base` as is. With several matches each array gets
/// `<stem>_<array>.<ext>`; clashes (with each other or with `reserved`)
/// get a numeric suffix.
pub fn image_file_names(base: &str, reserved: &str, matches: &[DeclarationMatch]) -> Vec<String> {
    if matches.len() == 1 {
        return vec![base.to_string()];
    }

    let path = Path::new(base);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(base);
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default();

    let mut used: HashSet<String> = HashSet::new();
    used.insert(reserved.to_string());

    let mut names = Vec::with_capacity(matches.len());
    for (i, m) in matches.iter().enumerate() {
        let mut candidate = format!("{}_{}{}", stem, m.name, ext);
        let mut suffix = i;
        while used.contains(&candidate) {
            candidate = format!("{}_{}_{}{}", stem, m.name, suffix, ext);
            suffix += 1;
        }
        used.insert(candidate.clone());
        names.push(candidate);
    }
    names
}
