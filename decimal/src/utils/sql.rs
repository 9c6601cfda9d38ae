//! SQL utility functions

use std::sync::OnceLock;

use regex::Regex;

/// Escape SQL LIKE metacharacters (%, _, \) in user input
///
/// Use this when building LIKE patterns from user input to prevent
/// unintended pattern matching.
///
/// # Example
///
/// ```
/// use attribute_decimal::utils::sql::escape_like_pattern;
///
/// let user_input = "100% match_test";
/// let pattern = format!("%{}%", escape_like_pattern(user_input));
/// assert_eq!(pattern, "%100\\% match\\_test%");
/// ```
pub fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Translate a `*` / `?` wildcard pattern into a LIKE pattern
///
/// Literal LIKE metacharacters are escaped first, so only `*` (any run) and
/// `?` (one character) match loosely. Use with `ESCAPE '\'`.
///
/// ```
/// use attribute_decimal::utils::sql::wildcard_to_like;
///
/// assert_eq!(wildcard_to_like("10*"), "10%");
/// assert_eq!(wildcard_to_like("9.?5"), "9._5");
/// assert_eq!(wildcard_to_like("100%*"), "100\\%%");
/// ```
pub fn wildcard_to_like(pattern: &str) -> String {
    escape_like_pattern(pattern)
        .replace('*', "%")
        .replace('?', "_")
}

/// Check whether a pattern uses `*` or `?` wildcards
pub fn has_wildcards(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Render a float as a SQL numeric literal
///
/// Always produces digits with an optional sign, fraction and exponent
/// (`5.0`, `-0.25`, `1e21`). Infinities clamp to the largest finite
/// value of the same sign; NaN renders as `0.0`.
pub fn float_literal(value: f64) -> String {
    if value.is_nan() {
        return "0.0".to_string();
    }
    format!("{:?}", value.clamp(f64::MIN, f64::MAX))
}

/// Check that a name is a plain, unquoted SQL identifier
pub fn is_identifier(name: &str) -> bool {
    static RE_IDENT: OnceLock<Regex> = OnceLock::new();
    let re = RE_IDENT.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid regex"));
    re.is_match(name)
}
