use sha2::{Digest, Sha256};

use crate::models::config::RecorderConfig;
use crate::models::error::RecorderError;
use crate::models::export_result::{ExportMetadata, WavExport};
use crate::models::state::RecorderState;
use crate::processing::interleave;
use crate::processing::sample_buffer::SampleBuffer;
use crate::processing::wav;

/// Command-driven recording session.
///
/// Owns the configuration and the per-channel sample buffer, and implements
/// the four host commands (`init`, `record`, `export-wav`, `clear`) as plain
/// methods. Export data flow:
/// ```text
/// [SampleBuffer] → flatten per channel → [interleave] → [PCM16] → WAV bytes
/// ```
///
/// Everything except `init` requires a prior successful `init`; until then
/// commands fail with `NotInitialized`.
pub struct RecorderSession {
    config: Option<RecorderConfig>,
    buffer: SampleBuffer,
}

impl RecorderSession {
    pub fn new() -> Self {
        Self {
            config: None,
            buffer: SampleBuffer::new(0),
        }
    }

    pub fn state(&self) -> RecorderState {
        if self.config.is_some() {
            RecorderState::Ready
        } else {
            RecorderState::Uninitialized
        }
    }

    pub fn config(&self) -> Option<RecorderConfig> {
        self.config
    }

    /// Per-channel sample count buffered so far.
    pub fn frames(&self) -> usize {
        self.buffer.frames()
    }

    /// Apply a configuration. Transitions: uninitialized → ready.
    ///
    /// Also valid from ready: the previous configuration and any buffered
    /// audio are discarded, even when the new configuration is identical.
    pub fn init(&mut self, config: RecorderConfig) -> Result<(), RecorderError> {
        config
            .validate()
            .map_err(RecorderError::InvalidConfiguration)?;

        self.buffer = SampleBuffer::new(config.num_channels as usize);
        self.config = Some(config);
        Ok(())
    }

    /// Append one chunk of samples per channel.
    ///
    /// Chunks must match the configured channel count and agree on length;
    /// a rejected chunk leaves the buffer untouched.
    pub fn record(&mut self, chunks: Vec<Vec<f32>>) -> Result<(), RecorderError> {
        if self.config.is_none() {
            return Err(RecorderError::NotInitialized);
        }
        self.buffer.append(chunks)
    }

    /// Encode everything buffered so far into a complete WAV byte stream.
    ///
    /// Read-only: the buffer is left intact, and repeating the call without
    /// intervening commands yields byte-identical output. Only mono and
    /// stereo configurations can be exported; with no buffered audio the
    /// result is a valid header-only stream.
    pub fn export_wav(&self) -> Result<WavExport, RecorderError> {
        let config = self.config.ok_or(RecorderError::NotInitialized)?;

        let channels: Vec<Vec<f32>> = (0..self.buffer.num_channels())
            .map(|channel| self.buffer.flatten_channel(channel))
            .collect();
        let interleaved = interleave::interleave_channels(channels)?;
        let bytes = wav::encode_wav(&interleaved, config.sample_rate, config.num_channels)?;

        let checksum = checksum_hex(&bytes);
        let metadata = ExportMetadata::new(config, self.buffer.frames(), &checksum);
        Ok(WavExport { bytes, metadata })
    }

    /// Drop all buffered audio. The configuration stays in effect.
    pub fn clear(&mut self) -> Result<(), RecorderError> {
        if self.config.is_none() {
            return Err(RecorderError::NotInitialized);
        }
        self.buffer.clear();
        Ok(())
    }
}

impl Default for RecorderSession {
    fn default() -> Self {
        Self::new()
    }
}

fn checksum_hex(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
