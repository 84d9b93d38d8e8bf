// File: crates/gnuplot-core/tests/common/mod.rs
// Purpose: Shared capture sink so tests can inspect the exact bytes sent to gnuplot.

// Not every test file uses every helper.
#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use gnuplot_core::Gnuplot;

/// Baseline configuration every new session emits first.
pub const INIT: &str = "set encoding utf8\nset minussign\n";

#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    /// Everything written after the session's baseline commands.
    pub fn after_init(&self) -> String {
        let all = self.contents();
        all.strip_prefix(INIT).map(str::to_string).unwrap_or(all)
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn capture_session() -> (Gnuplot, SharedBuf) {
    let buf = SharedBuf::default();
    let session = Gnuplot::with_writer(buf.clone()).expect("writer-backed session");
    (session, buf)
}

/// Extract the body rows of datablock `index` from a captured script.
pub fn datablock_rows(script: &str, index: usize) -> Vec<String> {
    let header = format!("$Datablock{index} << EOD");
    let mut rows = Vec::new();
    let mut inside = false;
    for line in script.lines() {
        if line == header {
            inside = true;
            continue;
        }
        if inside {
            if line == "EOD" {
                break;
            }
            rows.push(line.to_string());
        }
    }
    rows
}
