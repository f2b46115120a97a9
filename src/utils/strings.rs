//! String utility functions

/// Split file content into lines, keeping trailing blank lines.
///
/// A single final `\n` terminates the last line; every further `\n`
/// yields an empty line, so rewriting a file does not eat the blank
/// lines at its end the way `str::lines()` would.
///
/// ```
/// use exvar::utils::strings::split_lines_preserve_trailing;
///
/// assert_eq!(split_lines_preserve_trailing("a\nb"), vec!["a", "b"]);
/// assert_eq!(split_lines_preserve_trailing("a\n"), vec!["a"]);
/// assert_eq!(split_lines_preserve_trailing("a\n\n"), vec!["a", ""]);
/// assert_eq!(split_lines_preserve_trailing(""), Vec::<&str>::new());
/// ```
pub fn split_lines_preserve_trailing(s: &str) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }

    let body = s.strip_suffix('\n').unwrap_or(s);
    body.split('\n').collect()
}

/// Whether a user-supplied value fits on one declaration line
pub fn is_single_line(s: &str) -> bool {
    !s.contains(['\n', '\r'])
}
