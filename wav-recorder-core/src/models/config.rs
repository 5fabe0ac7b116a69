use serde::{Deserialize, Serialize};

/// Configuration for a recording, supplied with the `init` command.
///
/// Immutable once applied; a later `init` replaces it wholesale. Serialized
/// field names use camelCase (`sampleRate`, `numChannels`) to match the
/// message payload the host posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecorderConfig {
    /// Output sample rate in Hz. Must be positive.
    pub sample_rate: u32,

    /// Number of buffered channels. Must be at least 1; export only defines
    /// an interleaving policy for 1 (mono) and 2 (stereo).
    pub num_channels: u16,
}

impl RecorderConfig {
    pub fn new(sample_rate: u32, num_channels: u16) -> Self {
        Self {
            sample_rate,
            num_channels,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.sample_rate == 0 {
            return Err("sample rate must be positive".into());
        }
        if self.num_channels == 0 {
            return Err("channel count must be at least 1".into());
        }
        Ok(())
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            num_channels: 2,
        }
    }
}
