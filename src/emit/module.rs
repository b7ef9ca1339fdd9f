use std::cmp::Reverse;
use std::path::Path;

use crate::types::DeclarationMatch;

/// Replace each matched span with the declaration plus a `$readmemh` load.
///
/// `image_path_for` receives the match index and the match, and returns the
/// path to embed. Spans are replaced from the last to the first so earlier
/// offsets stay valid; bytes outside the spans are copied unchanged.
pub fn rewrite_module<F>(text: &str, matches: &[DeclarationMatch], mut image_path_for: F) -> String
where
    F: FnMut(usize, &DeclarationMatch) -> String,
{
    let mut order: Vec<usize> = (0..matches.len()).collect();
    order.sort_by_key(|&i| Reverse(matches[i].start));

    let mut output = text.to_string();
    let mut limit = text.len();
    for i in order {
        let m = &matches[i];
        debug_assert!(m.end <= limit, "declaration spans overlap");
        limit = m.start;

        let replacement = load_statement(m, &image_path_for(i, m));
        output.replace_range(m.span(), &replacement);
    }
    output
}

fn load_statement(m: &DeclarationMatch, image_path: &str) -> String {
    format!(
        "{indent}reg [{width}] {name} [{depth}];{nl}{indent}$readmemh(\"{path}\", {name});{end}",
        indent = m.indent,
        width = m.width,
        name = m.name,
        depth = m.depth,
        nl = m.newline,
        path = escape_string(image_path),
        end = m.line_ending,
    )
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// The image path as embedded in the module: relative to `dest_dir`, with `/`
/// separators.
pub fn readmemh_path(image_path: &Path, dest_dir: &Path) -> String {
    let relative = match image_path.strip_prefix(dest_dir) {
        Ok(rel) => rel,
        Err(_) => image_path
            .file_name()
            .map(Path::new)
            .unwrap_or(image_path),
    };
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
