// File: crates/gnuplot-examples/src/bin/vectors3d.rs
// Summary: 3D vector field rendered with splot and fixed axis ranges.

use anyhow::Result;
use gnuplot_core::{terminal, AxisRange, Gnuplot};

fn main() -> Result<()> {
    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut z = Vec::new();
    let mut vx = Vec::new();
    let mut vy = Vec::new();
    let mut vz = Vec::new();

    let mut cur_x: f64 = -10.1;
    while cur_x <= 10.0 {
        let mut cur_y: f64 = -10.1;
        while cur_y <= 10.0 {
            let mut cur_z: f64 = -10.1;
            while cur_z <= 10.0 {
                let r = (cur_x * cur_x + cur_y * cur_y).sqrt();
                x.push(cur_x);
                y.push(cur_y);
                z.push(cur_z);
                vx.push(-cur_x / r);
                vy.push(-cur_y / r);
                vz.push(-cur_z / r);
                cur_z += 2.0;
            }
            cur_y += 2.0;
        }
        cur_x += 2.0;
    }

    let mut plt = Gnuplot::open()?;
    plt.redirect_to_png("example-vec3d.png", terminal::DEFAULT_RASTER_SIZE)?;
    plt.plot_vectors3d(&x, &y, &z, &vx, &vy, &vz, "")?;
    plt.set_xrange(AxisRange::bounded(-10.0, 10.0));
    plt.set_yrange(AxisRange::bounded(-10.0, 10.0));
    plt.set_zrange(AxisRange::bounded(-10.0, 10.0));
    plt.show(true)?;
    Ok(())
}
