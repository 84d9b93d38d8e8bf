// File: crates/gnuplot-examples/src/bin/animation.rs
// Summary: Animated GIF built one frame per render from a growing point buffer.

use anyhow::Result;
use gnuplot_core::{terminal, AxisRange, Gnuplot, LineStyle};

fn main() -> Result<()> {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [5.0, 2.0, 4.0, 1.0, 3.0];

    let mut plt = Gnuplot::open()?;
    plt.redirect_to_animated_gif("animation.gif", terminal::DEFAULT_RASTER_SIZE, 1000, true)?;

    for i in 0..x.len() {
        plt.add_point(x[i], y[i]);
        plt.plot_points("", LineStyle::LinesPoints)?;

        // In an animation it is advisable to force the ranges in advance
        plt.set_xrange(AxisRange::bounded(0.0, 6.0));
        plt.set_yrange(AxisRange::bounded(0.0, 6.0));

        plt.show(true)?; // adds one frame to the GIF
    }

    Ok(())
}
