// File: crates/gnuplot-core/src/encoding.rs
// Summary: Text quoting and numeric formatting rules for the gnuplot command language.
//
// Numbers are written with Rust's default `f64` Display, which picks the
// shortest representation that round-trips. Gnuplot accepts any plain
// decimal or scientific literal, so integers print without a fractional
// part ("5", not "5.0") and nothing is lost to a fixed precision.

/// Escape `text` for use inside a single-quoted gnuplot argument.
///
/// Gnuplot treats a doubled single quote inside a single-quoted string as a
/// literal quote character. No other escaping is performed.
pub fn escape_single_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\'' {
            out.push_str("''");
        } else {
            out.push(c);
        }
    }
    out
}

/// Format one numeric value the way it appears in datablocks and commands.
pub fn format_number(value: f64) -> String {
    value.to_string()
}
