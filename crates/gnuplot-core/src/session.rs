// File: crates/gnuplot-core/src/session.rs
// Summary: Gnuplot session: subprocess transport, axis state, pending series, render/reset.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::time::Duration;

use tracing::{debug, warn};

use crate::axis::{AxisRange, AxisScale};
use crate::encoding::escape_single_quotes;
use crate::error::{Error, Result};
use crate::histogram;
use crate::series::{zip_rows, LineStyle, Series};
use crate::terminal::{self, DumbMode};

/// Binary name used by [`Gnuplot::open`].
pub const DEFAULT_EXECUTABLE: &str = "gnuplot";

/// How long to let gnuplot finish its last render before scratch files are
/// removed on close.
const CLOSE_GRACE: Duration = Duration::from_secs(1);

enum Transport {
    Child { child: Child, stdin: ChildStdin },
    Writer(Box<dyn Write + Send>),
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PlotDomain {
    TwoD,
    ThreeD,
}

/// A live connection to a gnuplot process plus all accumulated-but-unrendered
/// series and axis state.
///
/// Commands flow one way: each call writes a line (or block) to the
/// subprocess's stdin and flushes immediately, so later commands always see
/// the effect of earlier ones. Nothing is read back; rendering happens
/// asynchronously in the external process.
///
/// A session is single-threaded by design. Share it across threads only with
/// external locking.
pub struct Gnuplot {
    transport: Transport,
    series: Vec<Series>,
    points: Vec<(f64, f64)>,
    temp_files: Vec<PathBuf>,
    domain: Option<PlotDomain>,
    x_range: AxisRange,
    y_range: AxisRange,
    z_range: AxisRange,
}

impl Gnuplot {
    /// Spawn the default `gnuplot` binary with `--persist`.
    pub fn open() -> Result<Self> {
        Self::open_with(DEFAULT_EXECUTABLE, true)
    }

    /// Spawn `executable` with its stdin piped from this session.
    ///
    /// With `persist`, gnuplot keeps interactive windows alive after its
    /// input closes. Baseline configuration (UTF-8 encoding, proper minus
    /// signs) is sent immediately.
    pub fn open_with(executable: &str, persist: bool) -> Result<Self> {
        let mut command = Command::new(executable);
        if persist {
            command.arg("--persist");
        }
        command.stdin(Stdio::piped());

        let mut child = command.spawn().map_err(|source| {
            warn!(executable, %source, "could not spawn gnuplot");
            Error::Spawn { executable: executable.to_string(), source }
        })?;
        let stdin = child.stdin.take().ok_or(Error::ConnectionClosed)?;

        let mut session = Self::from_transport(Transport::Child { child, stdin });
        session.init()?;
        Ok(session)
    }

    /// Build a session that writes its command stream to `writer` instead of
    /// a subprocess — useful for capturing a `.gp` script or testing the
    /// exact bytes that would reach gnuplot.
    pub fn with_writer(writer: impl Write + Send + 'static) -> Result<Self> {
        let mut session = Self::from_transport(Transport::Writer(Box::new(writer)));
        session.init()?;
        Ok(session)
    }

    fn from_transport(transport: Transport) -> Self {
        Self {
            transport,
            series: Vec::new(),
            points: Vec::new(),
            temp_files: Vec::new(),
            domain: None,
            x_range: AxisRange::AUTO,
            y_range: AxisRange::AUTO,
            z_range: AxisRange::AUTO,
        }
    }

    fn init(&mut self) -> Result<()> {
        // See https://stackoverflow.com/q/28152719 for the minus-sign setting
        self.send("set encoding utf8")?;
        self.send("set minussign")
    }

    /// True while the underlying command stream is open.
    pub fn is_alive(&self) -> bool {
        !matches!(self.transport, Transport::Closed)
    }

    /// Write one raw command (a trailing newline is appended) and flush.
    ///
    /// The flush is not optional: a later `plot` depends on an earlier
    /// `set output` having already been consumed by the process.
    pub fn send(&mut self, command: &str) -> Result<()> {
        let sink: &mut dyn Write = match &mut self.transport {
            Transport::Child { stdin, .. } => stdin,
            Transport::Writer(writer) => writer.as_mut(),
            Transport::Closed => {
                warn!(command, "dropping command: session is closed");
                return Err(Error::ConnectionClosed);
            }
        };
        debug!(command, "sending");
        sink.write_all(command.as_bytes())?;
        sink.write_all(b"\n")?;
        sink.flush()?;
        Ok(())
    }

    // ---- output targeting ----------------------------------------------

    /// Route output to a PNG file; `size` is in pixels, e.g. "800,600".
    pub fn redirect_to_png(&mut self, path: &str, size: &str) -> Result<()> {
        self.send(&terminal::png(path, size))
    }

    /// Route output to a PDF file; `size` uses physical units, e.g. "16cm,12cm".
    pub fn redirect_to_pdf(&mut self, path: &str, size: &str) -> Result<()> {
        self.send(&terminal::pdf(path, size))
    }

    /// Route output to a standalone interactive SVG file.
    pub fn redirect_to_svg(&mut self, path: &str, size: &str) -> Result<()> {
        self.send(&terminal::svg(path, size))
    }

    /// Route output to the character-cell terminal, or to a text file when
    /// `path` is given.
    pub fn redirect_to_dumb(
        &mut self,
        path: Option<&str>,
        width: u32,
        height: u32,
        mode: DumbMode,
    ) -> Result<()> {
        self.send(&terminal::dumb(path, width, height, mode))
    }

    /// Route output to an animated GIF; each subsequent render becomes one
    /// frame. `delay_ms` is rounded down to gnuplot's centisecond unit.
    pub fn redirect_to_animated_gif(
        &mut self,
        path: &str,
        size: &str,
        delay_ms: u32,
        loop_forever: bool,
    ) -> Result<()> {
        self.send(&terminal::animated_gif(path, size, delay_ms, loop_forever))
    }

    // ---- axis & label configuration --------------------------------------

    /// Set the X display range; takes effect at the next render.
    pub fn set_xrange(&mut self, range: AxisRange) {
        self.x_range = range;
    }

    /// Set the Y display range; takes effect at the next render.
    pub fn set_yrange(&mut self, range: AxisRange) {
        self.y_range = range;
    }

    /// Set the Z display range; unlike X and Y it survives [`Gnuplot::reset`].
    pub fn set_zrange(&mut self, range: AxisRange) {
        self.z_range = range;
    }

    pub fn set_xlabel(&mut self, label: &str) -> Result<()> {
        self.send(&format!("set xlabel '{}'", escape_single_quotes(label)))
    }

    pub fn set_ylabel(&mut self, label: &str) -> Result<()> {
        self.send(&format!("set ylabel '{}'", escape_single_quotes(label)))
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.send(&format!("set title '{}'", escape_single_quotes(title)))
    }

    pub fn set_logscale(&mut self, scale: AxisScale) -> Result<()> {
        self.send(scale.command())
    }

    /// Partition the display into a `rows` x `cols` grid. Cell sequencing is
    /// the caller's job: configure, add series, and render once per cell.
    pub fn multiplot(&mut self, rows: u32, cols: u32, title: &str) -> Result<()> {
        self.send(&format!(
            "set multiplot layout {rows}, {cols} title '{}'",
            escape_single_quotes(title)
        ))
    }

    // ---- series ingestion -------------------------------------------------

    /// Queue a 2D series of Y values against their 0-based index.
    pub fn plot<T>(&mut self, y: &[T], label: &str, style: LineStyle) -> Result<()>
    where
        T: Into<f64> + Copy,
    {
        let y = to_f64(y);
        let index: Vec<f64> = (0..y.len()).map(|i| i as f64).collect();
        self.push_series(&[&index, &y], style, label, PlotDomain::TwoD)
    }

    /// Queue a 2D series of (x, y) pairs.
    pub fn plot_xy<T, U>(&mut self, x: &[T], y: &[U], label: &str, style: LineStyle) -> Result<()>
    where
        T: Into<f64> + Copy,
        U: Into<f64> + Copy,
    {
        self.push_series(&[&to_f64(x), &to_f64(y)], style, label, PlotDomain::TwoD)
    }

    /// Queue a 2D series with horizontal error bars.
    pub fn plot_xerr<T, U, V>(&mut self, x: &[T], y: &[U], xerr: &[V], label: &str) -> Result<()>
    where
        T: Into<f64> + Copy,
        U: Into<f64> + Copy,
        V: Into<f64> + Copy,
    {
        self.push_series(
            &[&to_f64(x), &to_f64(y), &to_f64(xerr)],
            LineStyle::XErrorBars,
            label,
            PlotDomain::TwoD,
        )
    }

    /// Queue a 2D series with vertical error bars.
    pub fn plot_yerr<T, U, V>(&mut self, x: &[T], y: &[U], yerr: &[V], label: &str) -> Result<()>
    where
        T: Into<f64> + Copy,
        U: Into<f64> + Copy,
        V: Into<f64> + Copy,
    {
        self.push_series(
            &[&to_f64(x), &to_f64(y), &to_f64(yerr)],
            LineStyle::YErrorBars,
            label,
            PlotDomain::TwoD,
        )
    }

    /// Queue a 2D series with error bars on both axes.
    pub fn plot_xyerr<T, U, V, W>(
        &mut self,
        x: &[T],
        y: &[U],
        xerr: &[V],
        yerr: &[W],
        label: &str,
    ) -> Result<()>
    where
        T: Into<f64> + Copy,
        U: Into<f64> + Copy,
        V: Into<f64> + Copy,
        W: Into<f64> + Copy,
    {
        self.push_series(
            &[&to_f64(x), &to_f64(y), &to_f64(xerr), &to_f64(yerr)],
            LineStyle::XYErrorBars,
            label,
            PlotDomain::TwoD,
        )
    }

    /// Queue a 2D vector field: arrows from (x, y) with components (vx, vy).
    pub fn plot_vectors<T, U, V, W>(
        &mut self,
        x: &[T],
        y: &[U],
        vx: &[V],
        vy: &[W],
        label: &str,
    ) -> Result<()>
    where
        T: Into<f64> + Copy,
        U: Into<f64> + Copy,
        V: Into<f64> + Copy,
        W: Into<f64> + Copy,
    {
        self.push_series(
            &[&to_f64(x), &to_f64(y), &to_f64(vx), &to_f64(vy)],
            LineStyle::Vectors,
            label,
            PlotDomain::TwoD,
        )
    }

    /// Queue a 3D series of (x, y, z) triples; rendered with `splot`.
    pub fn plot3d<T, U, V>(
        &mut self,
        x: &[T],
        y: &[U],
        z: &[V],
        label: &str,
        style: LineStyle,
    ) -> Result<()>
    where
        T: Into<f64> + Copy,
        U: Into<f64> + Copy,
        V: Into<f64> + Copy,
    {
        self.push_series(
            &[&to_f64(x), &to_f64(y), &to_f64(z)],
            style,
            label,
            PlotDomain::ThreeD,
        )
    }

    /// Queue a 3D vector field.
    pub fn plot_vectors3d<T, U>(
        &mut self,
        x: &[T],
        y: &[T],
        z: &[T],
        vx: &[U],
        vy: &[U],
        vz: &[U],
        label: &str,
    ) -> Result<()>
    where
        T: Into<f64> + Copy,
        U: Into<f64> + Copy,
    {
        self.push_series(
            &[
                &to_f64(x),
                &to_f64(y),
                &to_f64(z),
                &to_f64(vx),
                &to_f64(vy),
                &to_f64(vz),
            ],
            LineStyle::Vectors,
            label,
            PlotDomain::ThreeD,
        )
    }

    /// Bin `values` into `nbins` equal-width bins and queue one
    /// (bin center, count) row per bin.
    pub fn histogram<T>(
        &mut self,
        values: &[T],
        nbins: usize,
        label: &str,
        style: LineStyle,
    ) -> Result<()>
    where
        T: Into<f64> + Copy,
    {
        if nbins == 0 {
            return Err(Error::InvalidBinCount);
        }
        if values.is_empty() {
            return Ok(());
        }

        let bins = histogram::bin(&to_f64(values), nbins)?;
        let centers: Vec<f64> = (0..bins.counts.len()).map(|i| bins.center(i)).collect();
        let counts: Vec<f64> = bins.counts.iter().map(|&c| c as f64).collect();
        self.push_series(&[&centers, &counts], style, label, PlotDomain::TwoD)
    }

    // ---- incremental point buffer ----------------------------------------

    /// Append one point to the session's point buffer.
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.points.push((x, y));
    }

    /// Append a point whose X is the buffer's current length.
    pub fn add_point_y(&mut self, y: f64) {
        let x = self.points.len() as f64;
        self.points.push((x, y));
    }

    /// Queue the accumulated point buffer as one 2D series. The buffer is
    /// kept, so an animation can replot it as it grows frame by frame; use
    /// [`Gnuplot::clear_points`] to start over.
    pub fn plot_points(&mut self, label: &str, style: LineStyle) -> Result<()> {
        let (x, y): (Vec<f64>, Vec<f64>) = self.points.iter().copied().unzip();
        self.push_series(&[&x, &y], style, label, PlotDomain::TwoD)
    }

    /// Empty the point buffer.
    pub fn clear_points(&mut self) {
        self.points.clear();
    }

    fn push_series(
        &mut self,
        columns: &[&[f64]],
        style: LineStyle,
        label: &str,
        domain: PlotDomain,
    ) -> Result<()> {
        let primary = match columns.first() {
            Some(c) => c,
            None => return Ok(()),
        };
        if primary.is_empty() {
            // An empty input is not worth a render clause, and not an error.
            return Ok(());
        }
        if let Some(current) = self.domain {
            if current != domain {
                return Err(Error::ModeMismatch);
            }
        }

        let (data, descriptor) = zip_rows(columns)?;
        self.series.push(Series {
            data,
            style,
            label: label.to_string(),
            columns: descriptor,
        });
        self.domain = Some(domain);
        Ok(())
    }

    // ---- render / reset -----------------------------------------------------

    /// Flush every pending series as one composite `plot`/`splot` command.
    ///
    /// Each series is written as an inline datablock first, then referenced
    /// by index from the composite command. A call with nothing pending is a
    /// successful no-op. On success with `reset_after`, the pending list and
    /// the X/Y ranges are cleared (see [`Gnuplot::reset`]).
    pub fn show(&mut self, reset_after: bool) -> Result<()> {
        if self.series.is_empty() {
            return Ok(());
        }

        let mut script = String::from("set style fill solid 0.5\n");
        for (i, series) in self.series.iter().enumerate() {
            script.push_str(&format!("$Datablock{i} << EOD\n{}\nEOD\n", series.data));
        }

        match self.domain {
            Some(PlotDomain::ThreeD) => script.push_str(&format!(
                "splot {} {} {} ",
                self.x_range.to_clause(),
                self.y_range.to_clause(),
                self.z_range.to_clause()
            )),
            _ => script.push_str(&format!(
                "plot {} {} ",
                self.x_range.to_clause(),
                self.y_range.to_clause()
            )),
        }

        let clauses: Vec<String> = self
            .series
            .iter()
            .enumerate()
            .map(|(i, series)| {
                format!(
                    "$Datablock{i} using {} with {} title '{}'",
                    series.columns,
                    series.style.keyword(),
                    escape_single_quotes(&series.label)
                )
            })
            .collect();
        script.push_str(&clauses.join(", "));

        self.send(&script)?;
        if reset_after {
            self.reset();
        }
        Ok(())
    }

    /// Drop all pending series and return the X/Y ranges to automatic.
    ///
    /// The Z range, log scale, labels, and title are deliberately left
    /// alone — they persist across plots until explicitly changed.
    pub fn reset(&mut self) {
        self.series.clear();
        self.x_range = AxisRange::AUTO;
        self.y_range = AxisRange::AUTO;
        self.domain = None;
    }

    // ---- teardown -----------------------------------------------------------

    /// Register a scratch file to be removed when the session closes.
    ///
    /// Removal happens only after the command stream has been closed and the
    /// subprocess has had a short grace period to finish consuming it.
    pub fn delete_on_close(&mut self, path: impl Into<PathBuf>) {
        self.temp_files.push(path.into());
    }

    /// Close the command stream, wait for the subprocess, then remove
    /// registered scratch files. Safe to call more than once; also runs on
    /// drop.
    ///
    /// The ordering is load-bearing: deleting a file before gnuplot has
    /// consumed it corrupts the in-flight render.
    pub fn close(&mut self) {
        match std::mem::replace(&mut self.transport, Transport::Closed) {
            Transport::Child { mut child, stdin } => {
                drop(stdin); // EOF: a non-persistent gnuplot exits here
                if let Err(err) = child.wait() {
                    warn!(%err, "failed to wait for gnuplot");
                }
                std::thread::sleep(CLOSE_GRACE);
            }
            Transport::Writer(mut writer) => {
                let _ = writer.flush();
            }
            Transport::Closed => return,
        }

        for path in self.temp_files.drain(..) {
            if let Err(err) = std::fs::remove_file(&path) {
                warn!(path = %path.display(), %err, "failed to remove scratch file");
            }
        }
    }
}

impl Drop for Gnuplot {
    fn drop(&mut self) {
        self.close();
    }
}

fn to_f64<T>(values: &[T]) -> Vec<f64>
where
    T: Into<f64> + Copy,
{
    values.iter().map(|&v| v.into()).collect()
}
