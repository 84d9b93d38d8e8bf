// File: crates/gnuplot-core/src/series.rs
// Summary: Series model (style, label, column mapping) and the column-zipping row builder.

use crate::encoding::format_number;
use crate::error::{Error, Result};

/// How a series is drawn by gnuplot (`with <keyword>`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Dots,
    Lines,
    Points,
    LinesPoints,
    Steps,
    Boxes,
    XErrorBars,
    YErrorBars,
    XYErrorBars,
    Vectors,
}

impl LineStyle {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            Self::Dots => "dots",
            Self::Lines => "lines",
            Self::Points => "points",
            Self::LinesPoints => "linespoints",
            Self::Steps => "steps",
            Self::Boxes => "boxes",
            Self::XErrorBars => "xerrorbars",
            Self::YErrorBars => "yerrorbars",
            Self::XYErrorBars => "xyerrorbars",
            Self::Vectors => "vectors",
        }
    }
}

/// One pending drawable: serialized rows plus the clause pieces that
/// reference them in the composite plot command.
#[derive(Clone, Debug)]
pub(crate) struct Series {
    /// Whitespace-separated rows, newline-delimited, no trailing newline.
    pub(crate) data: String,
    pub(crate) style: LineStyle,
    pub(crate) label: String,
    /// 1-based `using` descriptor, e.g. "1:2" or "1:2:3:4".
    pub(crate) columns: String,
}

/// Zip equal-length columns row-wise into a datablock body and derive the
/// matching `using` descriptor.
///
/// The caller guarantees `columns` is non-empty and the primary column is
/// non-empty; every other column must match the primary's length.
pub(crate) fn zip_rows(columns: &[&[f64]]) -> Result<(String, String)> {
    let rows = columns[0].len();
    for col in &columns[1..] {
        if col.len() != rows {
            return Err(Error::LengthMismatch { expected: rows, got: col.len() });
        }
    }

    let mut data = String::new();
    for i in 0..rows {
        if i > 0 {
            data.push('\n');
        }
        for (k, col) in columns.iter().enumerate() {
            if k > 0 {
                data.push(' ');
            }
            data.push_str(&format_number(col[i]));
        }
    }

    let descriptor = (1..=columns.len())
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(":");

    Ok((data, descriptor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zips_columns_row_wise() {
        let (data, cols) = zip_rows(&[&[1.0, 2.0], &[10.0, 20.0], &[0.5, 0.5]]).unwrap();
        assert_eq!(data, "1 10 0.5\n2 20 0.5");
        assert_eq!(cols, "1:2:3");
    }

    #[test]
    fn rejects_ragged_columns() {
        let err = zip_rows(&[&[1.0, 2.0, 3.0], &[1.0]]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { expected: 3, got: 1 }));
    }
}
