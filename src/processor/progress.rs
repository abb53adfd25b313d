//! Background progress reporting.
//!
//! A [`ProgressMonitor`] thread wakes up every interval, reads the shared
//! line counter of the reader and logs the position and the throughput
//! since the previous report. The thread stops when the monitor is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Sender, bounded, select, tick};
use log::info;

use crate::error::Result;

pub struct ProgressMonitor {
    stop: Option<Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ProgressMonitor {
    /// Report every `interval_secs` seconds; `0` disables reporting.
    pub fn start(interval_secs: u64, position: Arc<AtomicUsize>) -> Result<Option<Self>> {
        if interval_secs == 0 {
            return Ok(None);
        }
        Self::with_period(Duration::from_secs(interval_secs), position).map(Some)
    }

    /// Report every `period`.
    pub fn with_period(period: Duration, position: Arc<AtomicUsize>) -> Result<Self> {
        let (stop, stopped) = bounded::<()>(0);
        let ticker = tick(period);

        let handle = thread::Builder::new()
            .name("progress-monitor".to_string())
            .spawn(move || {
                let mut prev = position.load(Ordering::Relaxed);
                loop {
                    select! {
                        recv(ticker) -> _ => {
                            let cur = position.load(Ordering::Relaxed);
                            info!("line: {}, tps: {}", cur, throughput(prev, cur, period));
                            prev = cur;
                        }
                        recv(stopped) -> _ => break,
                    }
                }
            })?;

        Ok(ProgressMonitor {
            stop: Some(stop),
            handle: Some(handle),
        })
    }
}

impl Drop for ProgressMonitor {
    fn drop(&mut self) {
        // Closing the channel wakes the thread up.
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Lines per second between two positions.
pub fn throughput(prev: usize, cur: usize, period: Duration) -> usize {
    let secs = period.as_secs_f64();
    if secs <= 0.0 {
        return 0;
    }
    (cur.saturating_sub(prev) as f64 / secs) as usize
}
