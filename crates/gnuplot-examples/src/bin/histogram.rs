// File: crates/gnuplot-examples/src/bin/histogram.rs
// Summary: Histogram of a sampled waveform, shown on the dumb terminal.

use anyhow::Result;
use gnuplot_core::{AxisRange, DumbMode, Gnuplot, LineStyle};

fn main() -> Result<()> {
    let values: Vec<f64> = (0..500).map(|i| (i as f64 * 0.13).sin() * 3.0).collect();

    let mut plt = Gnuplot::open()?;
    plt.redirect_to_dumb(None, 80, 40, DumbMode::Mono)?;

    plt.histogram(&values, 10, "Histogram", LineStyle::Boxes)?;
    plt.set_xlabel("Value")?;
    plt.set_ylabel("Number of counts")?;
    plt.set_xrange(AxisRange::bounded(-3.5, 3.5));
    plt.set_yrange(AxisRange::new(Some(0.0), None));

    plt.show(true)?;
    Ok(())
}
