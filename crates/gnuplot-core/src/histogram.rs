// File: crates/gnuplot-core/src/histogram.rs
// Summary: Equal-width histogram binning over [min, max].

use crate::error::{Error, Result};

/// Binning result: counts per bin plus the geometry needed to place them.
#[derive(Clone, Debug, PartialEq)]
pub struct Bins {
    pub min: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Bins {
    /// Center of bin `i`, the x value emitted for its row.
    pub fn center(&self, i: usize) -> f64 {
        self.min + self.bin_width * (i as f64 + 0.5)
    }
}

/// Bin `values` into `nbins` equal-width bins spanning their min..max.
/// `values` must be non-empty.
///
/// A value landing exactly on the upper edge belongs to the last bin (the
/// intervals are half-open except the final one). When every value is
/// identical the span is zero and the result collapses to a single bin
/// holding all of them, whatever `nbins` was asked for.
pub fn bin(values: &[f64], nbins: usize) -> Result<Bins> {
    if nbins == 0 {
        return Err(Error::InvalidBinCount);
    }
    debug_assert!(!values.is_empty());

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return Ok(Bins { min, bin_width: 0.0, counts: vec![values.len()] });
    }

    let bin_width = (max - min) / nbins as f64;
    let mut counts = vec![0usize; nbins];
    for &v in values {
        let mut index = ((v - min) / bin_width) as usize;
        if index >= nbins {
            index = nbins - 1;
        }
        counts[index] += 1;
    }

    Ok(Bins { min, bin_width, counts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_value_lands_in_last_bin() {
        let bins = bin(&[1.0, 2.0, 3.0, 4.0, 5.0], 2).unwrap();
        assert_eq!(bins.bin_width, 2.0);
        assert_eq!(bins.center(0), 2.0);
        assert_eq!(bins.center(1), 4.0);
        // 5.0 sits exactly on the upper edge and must be clamped down
        assert_eq!(bins.counts, vec![2, 3]);
        assert_eq!(bins.counts.iter().sum::<usize>(), 5);
    }

    #[test]
    fn zero_bins_is_rejected() {
        assert!(matches!(bin(&[1.0], 0), Err(Error::InvalidBinCount)));
    }

    #[test]
    fn constant_series_collapses_to_one_bin() {
        let bins = bin(&[3.0, 3.0, 3.0], 4).unwrap();
        assert_eq!(bins.counts, vec![3]);
        assert_eq!(bins.bin_width, 0.0);
        assert_eq!(bins.center(0), 3.0);
    }
}
