use crate::models::error::RecorderError;
use crate::processing::pcm;

/// Size of the standard WAV RIFF header in bytes.
pub const WAV_HEADER_LEN: usize = 44;

/// MIME type labeling an exported byte stream.
pub const WAV_MIME_TYPE: &str = "audio/wav";

/// Bits per sample of the encoded data section. The container always holds
/// 16-bit PCM; other depths are out of scope.
const BITS_PER_SAMPLE: u16 = 16;

/// Build a 44-byte WAV RIFF header.
///
/// Format: PCM (format code 1), 16-bit, little-endian.
///
/// Callers must ensure the derived byte rate fits in u32; `encode_wav`
/// rejects combinations where it does not.
///
/// Layout:
/// ```text
/// [0-3]    "RIFF"
/// [4-7]    chunk size = 36 + data_len
/// [8-11]   "WAVE"
/// [12-15]  "fmt "
/// [16-19]  16 (PCM format chunk size)
/// [20-21]  1 (PCM format code)
/// [22-23]  num_channels
/// [24-27]  sample_rate
/// [28-31]  byte_rate = sample_rate * num_channels * 2
/// [32-33]  block_align = num_channels * 2
/// [34-35]  16 (bits per sample)
/// [36-39]  "data"
/// [40-43]  data_len
/// ```
pub fn wav_header(sample_rate: u32, num_channels: u16, data_len: u32) -> [u8; WAV_HEADER_LEN] {
    let bytes_per_frame = num_channels * (BITS_PER_SAMPLE / 8);
    let byte_rate = sample_rate * bytes_per_frame as u32;
    let chunk_size = 36 + data_len;

    let mut header = [0u8; WAV_HEADER_LEN];

    // RIFF chunk descriptor
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&chunk_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    // fmt sub-chunk
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes()); // PCM format size
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // PCM format code
    header[22..24].copy_from_slice(&num_channels.to_le_bytes());
    header[24..28].copy_from_slice(&sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&bytes_per_frame.to_le_bytes());
    header[34..36].copy_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data sub-chunk
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_len.to_le_bytes());

    header
}

/// Encode interleaved samples into a complete WAV byte stream.
///
/// Allocates exactly `44 + samples.len() * 2` bytes up front, then writes the
/// header followed by each sample quantized to little-endian PCM16. Pure:
/// the output depends only on the arguments.
///
/// Fails with `AllocationFailure` if the data section or the derived byte
/// rate would overflow the format's 32-bit fields, or if the allocation
/// itself is refused; a truncated or corrupt stream is never returned.
pub fn encode_wav(
    samples: &[f32],
    sample_rate: u32,
    num_channels: u16,
) -> Result<Vec<u8>, RecorderError> {
    let byte_rate = u64::from(sample_rate) * u64::from(num_channels) * 2;
    if byte_rate > u64::from(u32::MAX) {
        return Err(RecorderError::AllocationFailure(format!(
            "byte rate for {} Hz x {} channels exceeds the WAV header limit",
            sample_rate, num_channels
        )));
    }

    let data_len = samples
        .len()
        .checked_mul(2)
        .filter(|&len| len <= (u32::MAX - 36) as usize)
        .ok_or_else(|| {
            RecorderError::AllocationFailure(format!(
                "{} samples exceed the WAV size limit",
                samples.len()
            ))
        })?;

    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(WAV_HEADER_LEN + data_len)
        .map_err(|e| RecorderError::AllocationFailure(e.to_string()))?;

    bytes.extend_from_slice(&wav_header(sample_rate, num_channels, data_len as u32));
    for &sample in samples {
        bytes.extend_from_slice(&pcm::quantize(sample).to_le_bytes());
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_u16(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    fn read_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    #[test]
    fn header_magic_and_length() {
        let header = wav_header(48000, 2, 0);
        assert_eq!(header.len(), 44);
        assert_eq!(&header[0..4], b"RIFF");
        assert_eq!(&header[8..12], b"WAVE");
        assert_eq!(&header[12..16], b"fmt ");
        assert_eq!(&header[36..40], b"data");
    }

    #[test]
    fn header_pcm_format_fields() {
        let header = wav_header(48000, 2, 0);
        assert_eq!(read_u32(&header, 16), 16); // fmt chunk size
        assert_eq!(read_u16(&header, 20), 1); // PCM format code
        assert_eq!(read_u16(&header, 34), 16); // bits per sample
    }

    #[test]
    fn header_derived_fields_48khz_stereo() {
        let header = wav_header(48000, 2, 9600);
        assert_eq!(read_u16(&header, 22), 2);
        assert_eq!(read_u32(&header, 24), 48000);
        assert_eq!(read_u32(&header, 28), 192000); // 48000 * 2 * 2
        assert_eq!(read_u16(&header, 32), 4); // 2 channels * 2 bytes
        assert_eq!(read_u32(&header, 40), 9600);
        assert_eq!(read_u32(&header, 4), 36 + 9600);
    }

    #[test]
    fn header_sizes_44100_stereo_ten_samples() {
        let samples = vec![0.0f32; 10];
        let bytes = encode_wav(&samples, 44100, 2).unwrap();

        assert_eq!(bytes.len(), 64);
        assert_eq!(read_u32(&bytes, 4), 56); // 36 + 20
        assert_eq!(read_u32(&bytes, 40), 20); // 10 samples * 2 bytes
    }

    #[test]
    fn empty_input_is_header_only() {
        let bytes = encode_wav(&[], 16000, 1).unwrap();

        assert_eq!(bytes.len(), WAV_HEADER_LEN);
        assert_eq!(read_u32(&bytes, 4), 36);
        assert_eq!(read_u32(&bytes, 40), 0);
    }

    #[test]
    fn encode_rejects_unrepresentable_byte_rate() {
        // 2 GHz stereo would need a 8e9 byte rate; the header field is u32.
        let err = encode_wav(&[], 2_000_000_000, 2).unwrap_err();
        assert!(matches!(err, RecorderError::AllocationFailure(_)));

        // The largest stereo rate whose byte rate still fits stays encodable.
        let bytes = encode_wav(&[], 1_073_741_823, 2).unwrap();
        assert_eq!(read_u32(&bytes, 28), 4_294_967_292);
    }

    #[test]
    fn data_section_is_little_endian_pcm16() {
        let bytes = encode_wav(&[0.5, -0.5, 1.0, -1.0], 16000, 1).unwrap();

        assert_eq!(bytes.len(), 52);
        let data = &bytes[WAV_HEADER_LEN..];
        assert_eq!(i16::from_le_bytes([data[0], data[1]]), 0x4000);
        assert_eq!(i16::from_le_bytes([data[2], data[3]]), -16384);
        assert_eq!(i16::from_le_bytes([data[4], data[5]]), 0x7FFF);
        assert_eq!(i16::from_le_bytes([data[6], data[7]]), i16::MIN);
    }

    #[test]
    fn encode_is_pure() {
        let samples = [0.1f32, -0.2, 0.3];
        let first = encode_wav(&samples, 22050, 1).unwrap();
        let second = encode_wav(&samples, 22050, 1).unwrap();
        assert_eq!(first, second);
    }
}
