// File: crates/gnuplot-examples/src/bin/basic.rs
// Summary: Minimal example: two series on one plot, rendered to a PNG.

use anyhow::Result;
use gnuplot_core::{terminal, Gnuplot, LineStyle};

fn main() -> Result<()> {
    let x = [1, 2, 4]; // integer inputs are fine
    let y1 = [3.1, -4.6, 5.1];
    let y2 = [1.3, 1.6, 4.1];

    let mut plt = Gnuplot::open()?;
    plt.redirect_to_png("basic.png", terminal::DEFAULT_RASTER_SIZE)?;

    // Just pass the set of y values
    plt.plot(&y1, "", LineStyle::Lines)?;

    // Or provide x values, a label, and a line style
    plt.plot_xy(&x, &y2, "Dataset #1", LineStyle::LinesPoints)?;

    // Now produce the plot
    plt.show(true)?;
    Ok(())
}
