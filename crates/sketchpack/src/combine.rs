//! Banner construction and segment stitching.
//!
//! Every source file lands in the bundle wrapped in a visually obvious
//! banner naming its origin, so a human can locate the original file
//! boundaries inside the merged output.

use std::path::Path;

use cow_utils::CowUtils;

/// Number of decorative characters in a banner rule line.
const RULE_WIDTH: usize = 80;

/// Banner label for `path`.
///
/// Always uses forward slashes so the artifact is byte-identical across
/// host platforms.
pub fn display_path(path: &Path) -> String {
    let raw = path.display().to_string();
    raw.cow_replace('\\', "/").into_owned()
}

/// Render the banner marking where `path`'s content begins: a horizontal
/// rule, a `// FILE:` label line, and a closing rule identical to the
/// opening one.
pub fn banner(path: &Path) -> String {
    let rule = format!("//{}", "/".repeat(RULE_WIDTH));
    format!("{rule}\n// FILE: {label}\n{rule}\n", label = display_path(path))
}

/// Append one annotated file segment to the bundle buffer: banner, verbatim
/// content, exactly one blank line separator.
///
/// Content is copied as-is, no reformatting or comment stripping; the only
/// adjustment is guaranteeing a trailing newline so the separator is always
/// a single blank line regardless of how the source file ends.
pub fn push_segment(bundle: &mut String, path: &Path, content: &str) {
    bundle.push_str(&banner(path));
    bundle.push_str(content);
    if !content.ends_with('\n') {
        bundle.push('\n');
    }
    bundle.push('\n');
}
