use serde::{Deserialize, Serialize};

use super::config::RecorderConfig;
use crate::processing::wav::WAV_MIME_TYPE;

/// The binary result of an `export-wav` command: a complete, self-contained
/// WAV byte stream plus descriptive metadata for the host.
#[derive(Debug, Clone, PartialEq)]
pub struct WavExport {
    pub bytes: Vec<u8>,
    pub metadata: ExportMetadata,
}

/// Metadata labeling an exported byte stream.
///
/// Serializable so hosts can forward it alongside the binary payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub id: String,
    pub mime_type: String,
    pub sample_rate: u32,
    pub num_channels: u16,
    /// Per-channel sample count at export time.
    pub frames: usize,
    pub duration_secs: f64,
    /// SHA-256 hex digest of the full byte stream.
    pub checksum: String,
    pub created_at: String,
}

impl ExportMetadata {
    pub fn new(config: RecorderConfig, frames: usize, checksum: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            mime_type: WAV_MIME_TYPE.to_string(),
            sample_rate: config.sample_rate,
            num_channels: config.num_channels,
            frames,
            duration_secs: frames as f64 / config.sample_rate as f64,
            checksum: checksum.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
