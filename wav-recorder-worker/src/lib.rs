//! # wav-recorder-worker
//!
//! Threaded command surface around `wav-recorder-core`.
//!
//! A host drives the recorder by posting commands, typed or as JSON
//! messages, to a dedicated worker thread:
//! ```text
//! host ── WorkerCommand ──▶ [worker thread: RecorderSession]
//! host ◀── WorkerEvent ──── (exports, failures)
//! ```
//! Commands run to completion in arrival order. Unrecognized commands are
//! ignored; failures come back as events instead of stopping the thread.

pub mod command;
pub mod worker;

pub use command::{CommandKind, WorkerCommand, WorkerEvent};
pub use worker::{RecorderWorker, WorkerStatus};
