//! Splitting of a raw command line into an argument vector.
//!
//! There is no quoting, escaping or substitution: a token is exactly the
//! literal text between two runs of delimiter characters.

/// Characters that separate tokens: space, tab, carriage return, newline and bell.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// Splits `line` on maximal runs of [`DELIMITERS`].
///
/// Leading and trailing delimiters never produce empty tokens, so an empty or
/// all-delimiter line yields an empty vector.
///
/// ```
/// use bsh::lexer::split_into_tokens;
/// assert_eq!(split_into_tokens("  ls\t-l  /tmp\n"), ["ls", "-l", "/tmp"]);
/// assert!(split_into_tokens(" \r\n").is_empty());
/// ```
pub fn split_into_tokens(line: &str) -> Vec<String> {
    line.split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
