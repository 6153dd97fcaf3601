//! Forwards a compact telemetry record to an external controller.
//!
//! Each [`Bridge::tick`] reads the status snapshot and the latest star
//! system. When either has moved on since the last record that went out, a
//! [`ControllerInfo`] is written to the sink as one line of JSON.

use std::{
    io::{self, Write},
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::Duration,
};

use jiff::Timestamp;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::logdir::{LogDir, LogDirError};

/// Consecutive failed ticks tolerated before giving up.
pub const DEFAULT_MAX_CONSECUTIVE_ERRORS: u32 = 20;

/// Errors that can occur while bridging.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("too many consecutive errors ({0})")]
    TooManyErrors(u32),

    #[error("could not encode record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("could not open serial port {port}: {source}")]
    Open {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("could not send record: {0}")]
    Send(#[source] io::Error),

    #[error(transparent)]
    LogDir(#[from] LogDirError),
}

/// The record sent to the controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControllerInfo {
    pub timestamp: Timestamp,
    #[serde(rename = "Flags")]
    pub flags: u32,
    #[serde(rename = "Pips")]
    pub pips: [i32; 3],
    #[serde(rename = "FireGroup")]
    pub fire_group: i32,
    #[serde(rename = "StarSystem")]
    pub star_system: String,
}

/// Somewhere records can be sent.
pub trait Sink {
    /// Sends one complete record, newline included.
    fn send(&mut self, record: &[u8]) -> Result<(), BridgeError>;
}

/// Wraps any writer as a sink, flushing after each record.
pub struct WriteSink<W>(pub W);

impl<W: Write> Sink for WriteSink<W> {
    fn send(&mut self, record: &[u8]) -> Result<(), BridgeError> {
        self.0.write_all(record).map_err(BridgeError::Send)?;
        self.0.flush().map_err(BridgeError::Send)
    }
}

/// A serial port, opened on first use.
///
/// A failed write drops the port, so the next send reopens it.
pub struct SerialLink {
    path: String,
    baud_rate: u32,
    port: Option<Box<dyn serialport::SerialPort>>,
}

impl SerialLink {
    pub fn new(path: impl Into<String>, baud_rate: u32) -> Self {
        Self {
            path: path.into(),
            baud_rate,
            port: None,
        }
    }

    fn connect(&mut self) -> Result<&mut Box<dyn serialport::SerialPort>, BridgeError> {
        if self.port.is_none() {
            let port = serialport::new(&self.path, self.baud_rate)
                .timeout(Duration::from_secs(2))
                .open()
                .map_err(|source| BridgeError::Open {
                    port: self.path.clone(),
                    source,
                })?;
            info!(port = %self.path, baud_rate = self.baud_rate, "connected to serial port");
            self.port = Some(port);
        }
        self.port.as_mut().ok_or_else(|| {
            BridgeError::Send(io::Error::new(io::ErrorKind::NotConnected, "serial port not connected"))
        })
    }
}

impl Sink for SerialLink {
    fn send(&mut self, record: &[u8]) -> Result<(), BridgeError> {
        let port = self.connect()?;
        if let Err(e) = port.write_all(record).and_then(|()| port.flush()) {
            self.port = None;
            return Err(BridgeError::Send(e));
        }
        Ok(())
    }
}

/// Outcome of a tick that didn't end the bridge.
#[derive(Debug)]
pub enum Tick {
    /// A record went out.
    Sent(ControllerInfo),
    /// Nothing changed since the last record.
    Unchanged,
    /// This tick failed; the bridge keeps going.
    Failed(BridgeError),
}

/// Polls the log directory and feeds a sink.
pub struct Bridge<S> {
    dir: LogDir,
    sink: S,
    max_consecutive_errors: u32,
    consecutive_errors: u32,
    last: Option<(Timestamp, String)>,
}

impl<S: Sink> Bridge<S> {
    pub fn new(dir: LogDir, sink: S) -> Self {
        Self {
            dir,
            sink,
            max_consecutive_errors: DEFAULT_MAX_CONSECUTIVE_ERRORS,
            consecutive_errors: 0,
            last: None,
        }
    }

    #[must_use]
    pub fn with_max_consecutive_errors(mut self, max: u32) -> Self {
        self.max_consecutive_errors = max;
        self
    }

    pub fn consecutive_errors(&self) -> u32 {
        self.consecutive_errors
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Runs one poll.
    ///
    /// Fails only with [`BridgeError::TooManyErrors`], once more than the
    /// allowed number of ticks in a row have failed. Any other failure is
    /// reported as [`Tick::Failed`].
    pub fn tick(&mut self) -> Result<Tick, BridgeError> {
        match self.poll() {
            Ok(tick) => {
                self.consecutive_errors = 0;
                Ok(tick)
            }
            Err(e) => {
                self.consecutive_errors += 1;
                warn!(error = %e, consecutive = self.consecutive_errors, "bridge tick failed");
                if self.consecutive_errors > self.max_consecutive_errors {
                    return Err(BridgeError::TooManyErrors(self.consecutive_errors));
                }
                Ok(Tick::Failed(e))
            }
        }
    }

    /// Ticks every `interval` until `running` is cleared or too many
    /// errors pile up.
    pub fn run(&mut self, interval: Duration, running: &AtomicBool) -> Result<(), BridgeError> {
        info!(dir = %self.dir.root().display(), ?interval, "bridge started");
        while running.load(Ordering::SeqCst) {
            self.tick()?;
            thread::sleep(interval);
        }
        info!("bridge stopped");
        Ok(())
    }

    fn poll(&mut self) -> Result<Tick, BridgeError> {
        let status = self.dir.status()?;
        let system = self.dir.latest_star_system()?;

        if let Some((timestamp, last_system)) = &self.last
            && *timestamp == status.timestamp
            && *last_system == system
        {
            return Ok(Tick::Unchanged);
        }

        let info = ControllerInfo {
            timestamp: status.timestamp,
            flags: status.raw_flags(),
            pips: status.pips,
            fire_group: status.fire_group,
            star_system: system,
        };
        let mut record = serde_json::to_vec(&info)?;
        record.push(b'\n');
        self.sink.send(&record)?;

        debug!(timestamp = %info.timestamp, system = %info.star_system, "record sent");
        self.last = Some((info.timestamp, info.star_system.clone()));
        Ok(Tick::Sent(info))
    }
}
