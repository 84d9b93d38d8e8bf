// File: crates/gnuplot-examples/src/bin/vectors.rs
// Summary: 2D vector field pointing at the origin, sampled on a regular grid.

use anyhow::Result;
use gnuplot_core::{terminal, Gnuplot};

fn main() -> Result<()> {
    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut vx = Vec::new();
    let mut vy = Vec::new();

    // Small tilt so the grid never samples the origin itself
    let mut cur_x: f64 = -10.1;
    while cur_x <= 10.0 {
        let mut cur_y: f64 = -10.1;
        while cur_y <= 10.0 {
            let r = (cur_x * cur_x + cur_y * cur_y).sqrt();
            x.push(cur_x);
            y.push(cur_y);
            vx.push(-cur_x / r);
            vy.push(-cur_y / r);
            cur_y += 1.0;
        }
        cur_x += 1.0;
    }

    let mut plt = Gnuplot::open()?;
    plt.redirect_to_png("example-vec.png", terminal::DEFAULT_RASTER_SIZE)?;
    plt.plot_vectors(&x, &y, &vx, &vy, "")?;
    plt.show(true)?;
    Ok(())
}
