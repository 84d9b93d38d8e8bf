// File: crates/demo/src/main.rs
// Summary: Demo loads an x/y CSV and renders it as PNG, SVG, and a terminal preview.

use anyhow::{Context, Result};
use gnuplot_core::{terminal, AxisRange, DumbMode, Gnuplot, LineStyle};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let raw = std::env::args().nth(1).unwrap_or_else(|| "samples.csv".to_string());
    let path = Path::new(&raw);
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }

    let (x, y) = load_xy_csv(path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} rows from {}", x.len(), path.display());

    if x.is_empty() {
        anyhow::bail!("no usable rows — check headers/delimiter.");
    }

    let mut plt = Gnuplot::open()?;

    // 1) PNG
    let out_png = out_name_with(path, "png");
    plt.redirect_to_png(out_png.to_str().unwrap(), terminal::DEFAULT_RASTER_SIZE)?;
    plt.set_xlabel("x")?;
    plt.set_ylabel("y")?;
    plt.plot_xy(&x, &y, "data", LineStyle::Lines)?;
    plt.show(true)?;
    println!("Wrote {}", out_png.display());

    // 2) SVG
    let out_svg = out_png.with_extension("svg");
    plt.redirect_to_svg(out_svg.to_str().unwrap(), terminal::DEFAULT_RASTER_SIZE)?;
    plt.plot_xy(&x, &y, "data", LineStyle::Lines)?;
    plt.show(true)?;
    println!("Wrote {}", out_svg.display());

    // 3) Histogram of y on the terminal
    plt.redirect_to_dumb(None, 100, 35, DumbMode::Ansi)?;
    plt.histogram(&y, 12, "y distribution", LineStyle::Boxes)?;
    plt.set_yrange(AxisRange::new(Some(0.0), None));
    plt.show(true)?;

    Ok(())
}

/// Output file name like target/out/plot_<stem>.png
fn out_name_with(input: &Path, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("plot");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("plot_{stem}.{ext}"));
    out
}

/// Load the first two numeric columns of a CSV, preferring columns whose
/// headers look like x/y (or time/value).
fn load_xy_csv(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };

    let i_x = idx(&["x", "time", "t", "timestamp", "index"]).unwrap_or(0);
    let i_y = idx(&["y", "value", "v", "close"]).unwrap_or(1);

    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut row_index = 0_f64;

    for rec in rdr.records() {
        let rec = rec?;
        let parse =
            |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.trim().parse::<f64>().ok()) };

        let yv = match parse(i_y) {
            Some(v) => v,
            None => continue,
        };
        let xv = parse(i_x).unwrap_or_else(|| {
            let v = row_index;
            row_index += 1.0;
            v
        });
        x.push(xv);
        y.push(yv);
    }
    Ok((x, y))
}
