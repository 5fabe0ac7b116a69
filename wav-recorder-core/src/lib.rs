//! # wav-recorder-core
//!
//! Platform-agnostic WAV recorder core library.
//!
//! Provides per-channel sample buffering, channel interleaving, PCM16
//! quantization, and WAV encoding behind a command-driven `RecorderSession`.
//! Hosts that need an asynchronous surface wrap the session in the
//! `wav-recorder-worker` crate.
//!
//! ## Architecture
//!
//! ```text
//! wav-recorder-core (this crate)
//! ├── models/       ← RecorderError, RecorderState, RecorderConfig, WavExport
//! ├── processing/   ← SampleBuffer, interleaving, PCM16 quantization, WAV encoding
//! └── session/      ← RecorderSession (command orchestrator)
//! ```

pub mod models;
pub mod processing;
pub mod session;

// Re-export key types at crate root for convenience.
pub use models::config::RecorderConfig;
pub use models::error::RecorderError;
pub use models::export_result::{ExportMetadata, WavExport};
pub use models::state::RecorderState;
pub use processing::sample_buffer::SampleBuffer;
pub use processing::wav::{WAV_HEADER_LEN, WAV_MIME_TYPE};
pub use session::recorder::RecorderSession;
