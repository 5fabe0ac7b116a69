use crate::models::error::RecorderError;

/// Interleave two equal-length channels into `[L0, R0, L1, R1, ...]`.
///
/// Callers must pass equal-length slices; the buffer invariant guarantees
/// this for flattened channels of one recording.
pub fn interleave(left: &[f32], right: &[f32]) -> Vec<f32> {
    debug_assert_eq!(left.len(), right.len());

    let mut stereo = Vec::with_capacity(left.len() + right.len());
    for (&l, &r) in left.iter().zip(right) {
        stereo.push(l);
        stereo.push(r);
    }
    stereo
}

/// Produce the export-order sample sequence for a set of flattened channels.
///
/// Mono moves the single channel out untouched; no interleave runs and no
/// copy is made. Stereo interleaves left/right. Other channel counts have
/// no defined layout and are rejected.
pub fn interleave_channels(mut channels: Vec<Vec<f32>>) -> Result<Vec<f32>, RecorderError> {
    match channels.len() {
        1 => Ok(channels.swap_remove(0)),
        2 => Ok(interleave(&channels[0], &channels[1])),
        n => Err(RecorderError::UnsupportedChannelCount(n)),
    }
}
