use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::{anyhow, Context, Result};
use parking_lot::Mutex;

use wav_recorder_core::{RecorderConfig, RecorderError, RecorderSession, RecorderState};

use crate::command::{CommandKind, WorkerCommand, WorkerEvent};

/// Snapshot of the worker's progress, refreshed after every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkerStatus {
    pub state: RecorderState,
    /// Per-channel sample count currently buffered.
    pub frames: u64,
    pub records_accepted: u64,
    pub exports_completed: u64,
    pub commands_failed: u64,
    pub commands_ignored: u64,
}

/// Handle to a recorder running on a dedicated worker thread.
///
/// Commands are posted through an mpsc channel and run to completion in
/// arrival order; exports and failures come back on the event channel
/// returned by [`RecorderWorker::spawn`]. Dropping the handle closes the
/// command channel and joins the thread.
pub struct RecorderWorker {
    command_tx: Option<Sender<WorkerCommand>>,
    status: Arc<Mutex<WorkerStatus>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl RecorderWorker {
    /// Start the worker thread. Returns the handle and the event receiver.
    pub fn spawn() -> (Self, Receiver<WorkerEvent>) {
        let (event_tx, event_rx) = channel();
        let (command_tx, command_rx) = channel();
        let status = Arc::new(Mutex::new(WorkerStatus::default()));

        let thread_status = Arc::clone(&status);
        let handle = thread::Builder::new()
            .name("wav-recorder-worker".into())
            .spawn(move || worker_loop(command_rx, event_tx, thread_status))
            .expect("failed to spawn recorder worker thread");

        (
            Self {
                command_tx: Some(command_tx),
                status,
                thread_handle: Some(handle),
            },
            event_rx,
        )
    }

    /// Post a command to the worker thread.
    pub fn post(&self, command: WorkerCommand) -> Result<()> {
        let tx = self
            .command_tx
            .as_ref()
            .ok_or_else(|| anyhow!("No active worker"))?;
        tx.send(command)
            .map_err(|_| anyhow!("Failed to send command to worker"))
    }

    /// Parse a JSON message and post it.
    ///
    /// Messages with an unrecognized `command` tag still parse (as
    /// `Unknown`) and are ignored by the worker loop; malformed JSON is a
    /// host error and comes back to the caller.
    pub fn dispatch_json(&self, message: &str) -> Result<()> {
        let command: WorkerCommand =
            serde_json::from_str(message).context("Failed to parse worker command")?;
        self.post(command)
    }

    pub fn init(&self, config: RecorderConfig) -> Result<()> {
        self.post(WorkerCommand::Init { config })
    }

    pub fn record(&self, buffer: Vec<Vec<f32>>) -> Result<()> {
        self.post(WorkerCommand::Record { buffer })
    }

    pub fn export_wav(&self) -> Result<()> {
        self.post(WorkerCommand::ExportWav)
    }

    pub fn clear(&self) -> Result<()> {
        self.post(WorkerCommand::Clear)
    }

    /// Snapshot of the worker's state and counters.
    pub fn status(&self) -> WorkerStatus {
        *self.status.lock()
    }

    /// Close the command channel and join the worker thread.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.command_tx.take() {
            drop(tx);
        }
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for RecorderWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Worker thread body: owns the session, runs commands FIFO until the
/// command channel closes.
fn worker_loop(
    command_rx: Receiver<WorkerCommand>,
    event_tx: Sender<WorkerEvent>,
    status: Arc<Mutex<WorkerStatus>>,
) {
    let mut session = RecorderSession::new();

    while let Ok(command) = command_rx.recv() {
        match command {
            WorkerCommand::Init { config } => {
                if let Err(error) = session.init(config) {
                    report_failure(&event_tx, &status, CommandKind::Init, error);
                }
            }
            WorkerCommand::Record { buffer } => match session.record(buffer) {
                Ok(()) => status.lock().records_accepted += 1,
                Err(error) => report_failure(&event_tx, &status, CommandKind::Record, error),
            },
            WorkerCommand::ExportWav => match session.export_wav() {
                Ok(export) => {
                    status.lock().exports_completed += 1;
                    if event_tx.send(WorkerEvent::ExportReady(export)).is_err() {
                        log::error!("Failed to deliver export: event receiver is gone");
                    }
                }
                Err(error) => report_failure(&event_tx, &status, CommandKind::ExportWav, error),
            },
            WorkerCommand::Clear => {
                if let Err(error) = session.clear() {
                    report_failure(&event_tx, &status, CommandKind::Clear, error);
                }
            }
            WorkerCommand::Unknown => {
                log::warn!("Ignoring unrecognized worker command");
                status.lock().commands_ignored += 1;
            }
        }

        let mut snapshot = status.lock();
        snapshot.state = session.state();
        snapshot.frames = session.frames() as u64;
    }
}

fn report_failure(
    event_tx: &Sender<WorkerEvent>,
    status: &Mutex<WorkerStatus>,
    command: CommandKind,
    error: RecorderError,
) {
    log::warn!("{} command failed: {}", command.name(), error);
    status.lock().commands_failed += 1;
    let _ = event_tx.send(WorkerEvent::CommandFailed { command, error });
}
