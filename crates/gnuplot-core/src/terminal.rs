// File: crates/gnuplot-core/src/terminal.rs
// Summary: Output-device selection commands (pngcairo, pdfcairo, svg, dumb, animated gif).

use crate::encoding::escape_single_quotes;

/// Default pixel size for raster/SVG terminals.
pub const DEFAULT_RASTER_SIZE: &str = "800,600";
/// Default physical size for the PDF terminal.
pub const DEFAULT_PDF_SIZE: &str = "16cm,12cm";
/// Default character-cell size for the dumb terminal.
pub const DEFAULT_DUMB_SIZE: (u32, u32) = (80, 50);

/// Color capability of the character-cell ("dumb") terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DumbMode {
    Mono,
    Ansi,
    Ansi256,
    AnsiRgb,
}

impl DumbMode {
    fn keyword(self) -> &'static str {
        match self {
            Self::Mono => "mono",
            Self::Ansi => "ansi",
            Self::Ansi256 => "ansi256",
            Self::AnsiRgb => "ansirgb",
        }
    }
}

pub(crate) fn png(path: &str, size: &str) -> String {
    format!(
        "set terminal pngcairo color enhanced size {size}\nset output '{}'",
        escape_single_quotes(path)
    )
}

pub(crate) fn pdf(path: &str, size: &str) -> String {
    format!(
        "set terminal pdfcairo color enhanced size {size}\nset output '{}'",
        escape_single_quotes(path)
    )
}

pub(crate) fn svg(path: &str, size: &str) -> String {
    format!(
        "set terminal svg enhanced mouse standalone size {size}\nset output '{}'",
        escape_single_quotes(path)
    )
}

pub(crate) fn dumb(path: Option<&str>, width: u32, height: u32, mode: DumbMode) -> String {
    let mut command = format!("set terminal dumb size {width} {height} {}", mode.keyword());
    if let Some(path) = path {
        if !path.is_empty() {
            command.push_str(&format!("\nset output '{}'", escape_single_quotes(path)));
        }
    }
    command
}

/// Gnuplot's gif delay is in centiseconds; `loop 0` repeats forever.
pub(crate) fn animated_gif(path: &str, size: &str, delay_ms: u32, loop_forever: bool) -> String {
    format!(
        "set terminal gif animate delay {}{} size {size}\nset output '{}'",
        delay_ms / 10,
        if loop_forever { " loop 0" } else { "" },
        escape_single_quotes(path)
    )
}
