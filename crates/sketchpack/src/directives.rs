//! Textual neutralization of preprocessor directives.
//!
//! Once every file lives in one compilation unit, `#pragma once` is
//! meaningless and a quoted include of a project-local file cannot resolve
//! in the simulator. Both are commented out rather than deleted, leaving a
//! visible record of where they were. This is deliberately line-prefix
//! string matching, not a preprocessor parse.

/// Compile-once pragma, matched as an exact token sequence.
const PRAGMA_ONCE: &str = "#pragma once";

/// Leading token of an inclusion directive.
const INCLUDE: &str = "#include";

/// Marker prefixed to a neutralized directive.
const COMMENT: &str = "// ";

/// True if `line` is a compile-once pragma, independent of surrounding
/// whitespace.
fn is_pragma_once(line: &str) -> bool {
    line.trim_start()
        .strip_prefix(PRAGMA_ONCE)
        .is_some_and(|tail| tail.is_empty() || tail.starts_with(char::is_whitespace))
}

/// True if `line` is a local (quoted) inclusion directive. Angle-bracket
/// includes name library headers and are left alone. The line is not
/// parsed for its target filename.
fn is_quoted_include(line: &str) -> bool {
    line.trim_start()
        .strip_prefix(INCLUDE)
        .is_some_and(|tail| tail.trim_start().starts_with('"'))
}

/// Comment out every compile-once pragma and quoted-include line in `text`,
/// preserving the original directive text after the marker.
///
/// The pass is idempotent: a neutralized line starts with `//`, so it no
/// longer matches either prefix and a second pass changes nothing.
///
/// Every quoted include is neutralized uniformly, even one referencing a
/// file that is not part of the bundle. A stricter tool would leave
/// genuinely external quoted includes untouched; this gap is inherited
/// from the workflow being replaced and kept on purpose.
pub fn neutralize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 64);
    for line in text.split_inclusive('\n') {
        if is_pragma_once(line) || is_quoted_include(line) {
            let indent_len = line.len() - line.trim_start().len();
            let (indent, directive) = line.split_at(indent_len);
            out.push_str(indent);
            out.push_str(COMMENT);
            out.push_str(directive);
        } else {
            out.push_str(line);
        }
    }
    out
}
