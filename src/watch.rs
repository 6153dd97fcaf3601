//! Change notifications for the log directory.
//!
//! The filesystem watcher pushes raw events onto a channel. One background
//! thread drains it, and after each burst of writes recomputes the value of
//! interest (by default the player's [`Location`]) from the journal. The
//! callback only sees values that differ from the last one it was given.
//!
//! ```text
//! Idle ──watch()──▶ Watching ──write──▶ Recomputing ──▶ Watching
//!                      │                                   │
//!                      └──────── stop() / backend gone ────┴──▶ Stopped
//! ```
//!
//! The callback runs on the watch thread, inside the loop. While it runs,
//! further writes queue up and are coalesced into the next recomputation.

use std::{
    io, iter,
    sync::{
        Arc,
        atomic::{AtomicU8, Ordering},
        mpsc::{self, Receiver, Sender},
    },
    thread::{self, JoinHandle},
};

use notify::{
    ErrorKind, EventKind, RecommendedWatcher, RecursiveMode, Watcher,
    event::{AccessKind, AccessMode, ModifyKind},
};
use tracing::{debug, info, warn};

use crate::logdir::{self, LogDir};
use crate::model::Location;

/// Errors that can occur while starting a watch.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("file watcher error: {0}")]
    Notify(#[from] notify::Error),

    #[error("could not start watch thread: {0}")]
    Spawn(#[from] io::Error),
}

/// Where a watch is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Watching,
    Recomputing,
    Stopped,
}

impl Phase {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Idle,
            1 => Self::Watching,
            2 => Self::Recomputing,
            _ => Self::Stopped,
        }
    }
}

/// What the watch thread receives.
enum Signal {
    Fs(notify::Result<notify::Event>),
    Stop,
}

/// Watches the log directory and reports location changes.
///
/// `on_change` is called with each new [`Location`] and never twice in a
/// row with the same one. Lookups that fail (no journal yet, file locked)
/// are dropped; the last reported location stays current.
pub fn watch<F>(dir: LogDir, on_change: F) -> Result<WatchHandle, WatchError>
where
    F: FnMut(&Location) + Send + 'static,
{
    watch_with(dir, LogDir::location, on_change)
}

/// Like [`watch`], for any value derived from the log directory.
pub fn watch_with<T, D, F>(dir: LogDir, derive: D, on_change: F) -> Result<WatchHandle, WatchError>
where
    T: PartialEq + Send + 'static,
    D: Fn(&LogDir) -> logdir::Result<T> + Send + 'static,
    F: FnMut(&T) + Send + 'static,
{
    let phase = Arc::new(AtomicU8::new(Phase::Idle as u8));
    let (tx, rx) = mpsc::channel();

    let fs_tx = tx.clone();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        // The receiver is gone only after shutdown; nothing left to tell.
        let _ = fs_tx.send(Signal::Fs(res));
    })?;
    watcher.watch(dir.root(), RecursiveMode::NonRecursive)?;
    phase.store(Phase::Watching as u8, Ordering::Release);
    info!(dir = %dir.root().display(), "watching log directory");

    let thread_phase = Arc::clone(&phase);
    let thread = thread::Builder::new()
        .name("flightlog-watch".into())
        .spawn(move || {
            let mut notifier = Notifier::new(derive, on_change);
            run(&dir, &rx, &mut notifier, &thread_phase);
        })?;

    Ok(WatchHandle {
        stop: tx,
        watcher: Some(watcher),
        thread: Some(thread),
        phase,
    })
}

/// A running watch. Dropping it stops the watch.
pub struct WatchHandle {
    stop: Sender<Signal>,
    watcher: Option<RecommendedWatcher>,
    thread: Option<JoinHandle<()>>,
    phase: Arc<AtomicU8>,
}

impl WatchHandle {
    pub fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::Acquire))
    }

    /// Releases the OS watch and waits for the watch thread to finish.
    ///
    /// Must not be called from inside the callback.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.watcher.take();
        let _ = self.stop.send(Signal::Stop);
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            warn!("watch thread panicked");
        }
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// The watch loop. Owns the last delivered value via `notifier`.
///
/// Ends on `Stop`, when the channel closes, or on a watcher error that
/// leaves nothing to watch.
fn run<T, D, F>(
    dir: &LogDir,
    rx: &Receiver<Signal>,
    notifier: &mut Notifier<T, D, F>,
    phase: &AtomicU8,
) where
    T: PartialEq,
    D: Fn(&LogDir) -> logdir::Result<T>,
    F: FnMut(&T),
{
    'recv: while let Ok(first) = rx.recv() {
        let mut wrote = false;
        for signal in iter::once(first).chain(rx.try_iter()) {
            match signal {
                Signal::Stop => break 'recv,
                Signal::Fs(Ok(event)) => wrote |= is_write(&event),
                Signal::Fs(Err(e)) if is_fatal(&e) => {
                    warn!(error = %e, "file watcher failed");
                    break 'recv;
                }
                Signal::Fs(Err(e)) => warn!(error = %e, "file watcher error"),
            }
        }
        if !wrote {
            continue;
        }

        phase.store(Phase::Recomputing as u8, Ordering::Release);
        notifier.on_write(dir);
        phase.store(Phase::Watching as u8, Ordering::Release);
    }

    phase.store(Phase::Stopped as u8, Ordering::Release);
    info!(dir = %dir.root().display(), "stopped watching log directory");
}

/// Writes, plus rescans: the backend dropped events and anything may have
/// changed.
fn is_write(event: &notify::Event) -> bool {
    event.need_rescan()
        || matches!(
            event.kind,
            EventKind::Create(_)
                | EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Any)
                | EventKind::Access(AccessKind::Close(AccessMode::Write))
        )
}

fn is_fatal(error: &notify::Error) -> bool {
    matches!(
        error.kind,
        ErrorKind::Generic(_)
            | ErrorKind::Io(_)
            | ErrorKind::PathNotFound
            | ErrorKind::WatchNotFound
    )
}

/// Recomputes the derived value and delivers it when it changed.
struct Notifier<T, D, F> {
    derive: D,
    on_change: F,
    last: Option<T>,
}

impl<T, D, F> Notifier<T, D, F>
where
    T: PartialEq,
    D: Fn(&LogDir) -> logdir::Result<T>,
    F: FnMut(&T),
{
    fn new(derive: D, on_change: F) -> Self {
        Self {
            derive,
            on_change,
            last: None,
        }
    }

    /// Returns true if the callback ran.
    fn on_write(&mut self, dir: &LogDir) -> bool {
        let value = match (self.derive)(dir) {
            Ok(value) => value,
            Err(e) => {
                // Deliberately dropped: keep the last good value.
                debug!(error = %e, "recompute failed");
                return false;
            }
        };
        if self.last.as_ref() == Some(&value) {
            return false;
        }
        let delivered = self.last.insert(value);
        (self.on_change)(delivered);
        true
    }
}
