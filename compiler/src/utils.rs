/// Wraps `text` in double quotes, escaping backslashes, quotes and line breaks.
/// The result is a valid string literal in both Kotlin and Swift, except that
/// Kotlin also needs `$` escaped (see `gen_kotlin`).
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"'  => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}
