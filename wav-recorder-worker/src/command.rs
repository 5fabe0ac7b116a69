use serde::{Deserialize, Serialize};

use wav_recorder_core::{RecorderConfig, RecorderError, WavExport};

/// A command posted to the worker thread.
///
/// The JSON wire shape uses a `command` tag with kebab-case names, so the
/// messages a host posts look like:
/// ```json
/// {"command": "init", "config": {"sampleRate": 44100, "numChannels": 2}}
/// {"command": "record", "buffer": [[0.5, -0.5], [0.25, -0.25]]}
/// {"command": "export-wav"}
/// {"command": "clear"}
/// ```
/// Messages with an unrecognized tag parse as `Unknown` and are ignored by
/// the worker loop rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum WorkerCommand {
    Init { config: RecorderConfig },
    Record { buffer: Vec<Vec<f32>> },
    ExportWav,
    Clear,
    #[serde(other)]
    Unknown,
}

/// Which command an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Init,
    Record,
    ExportWav,
    Clear,
}

impl CommandKind {
    /// Wire-format name of the command.
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Init => "init",
            CommandKind::Record => "record",
            CommandKind::ExportWav => "export-wav",
            CommandKind::Clear => "clear",
        }
    }
}

/// An event emitted by the worker thread.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerEvent {
    /// A completed export: WAV bytes plus metadata.
    ExportReady(WavExport),
    /// A command was received but could not be carried out.
    CommandFailed {
        command: CommandKind,
        error: RecorderError,
    },
}
