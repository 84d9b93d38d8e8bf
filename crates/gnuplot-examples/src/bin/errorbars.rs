// File: crates/gnuplot-examples/src/bin/errorbars.rs
// Summary: 2x2 multiplot showing plain points and the three error-bar variants.

use anyhow::Result;
use gnuplot_core::{terminal, Gnuplot, LineStyle};

fn main() -> Result<()> {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [5.0, 2.0, 4.0, 1.0, 3.0];
    let xerr = [0.2, 0.2, 0.1, 0.1, 0.2];
    let yerr = [0.3, 0.4, 0.2, 0.6, 0.7];

    let mut plt = Gnuplot::open()?;
    plt.redirect_to_png("errorbars.png", terminal::DEFAULT_RASTER_SIZE)?;
    plt.multiplot(2, 2, "Error bars")?;

    // Cell #1: plain points
    plt.set_xlabel("X axis")?;
    plt.set_ylabel("Y axis")?;
    plt.plot_xy(&x, &y, "", LineStyle::Points)?;
    plt.show(true)?; // render once per cell

    // Cell #2: X error bars
    plt.plot_xerr(&x, &y, &xerr, "")?;
    plt.show(true)?;

    // Cell #3: Y error bars
    plt.plot_yerr(&x, &y, &yerr, "")?;
    plt.show(true)?;

    // Cell #4: both
    plt.plot_xyerr(&x, &y, &xerr, &yerr, "")?;
    plt.show(true)?;

    Ok(())
}
