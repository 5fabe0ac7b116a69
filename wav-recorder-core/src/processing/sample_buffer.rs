use crate::models::error::RecorderError;

/// Growable per-channel sample accumulator.
///
/// Each channel holds an ordered list of chunks exactly as they were
/// delivered; nothing is copied until `flatten_channel` concatenates a
/// channel into one contiguous sequence. The per-channel sample count is
/// tracked incrementally (channel 0 is the canonical length source) so
/// flattening can pre-size its output in a single pass.
///
/// Invariant: every channel holds the same number of chunks, and
/// corresponding chunks have equal length. `append` validates this.
#[derive(Debug)]
pub struct SampleBuffer {
    /// `channels[ch]` is the chunk list for channel index `ch`.
    channels: Vec<Vec<Vec<f32>>>,
    frames: usize,
}

impl SampleBuffer {
    pub fn new(num_channels: usize) -> Self {
        Self {
            channels: vec![Vec::new(); num_channels],
            frames: 0,
        }
    }

    /// Append one chunk per channel.
    ///
    /// `chunks` must contain exactly one sample array per configured channel,
    /// all of equal length. Chunks are moved in, not copied. Empty chunks are
    /// legal and leave the frame count unchanged.
    pub fn append(&mut self, chunks: Vec<Vec<f32>>) -> Result<(), RecorderError> {
        if chunks.len() != self.channels.len() {
            return Err(RecorderError::ShapeMismatch(format!(
                "expected {} channel chunks, got {}",
                self.channels.len(),
                chunks.len()
            )));
        }

        let chunk_len = chunks.first().map(Vec::len).unwrap_or(0);
        for (channel, chunk) in chunks.iter().enumerate() {
            if chunk.len() != chunk_len {
                return Err(RecorderError::ShapeMismatch(format!(
                    "channel {} chunk has {} samples, channel 0 has {}",
                    channel,
                    chunk.len(),
                    chunk_len
                )));
            }
        }

        for (channel, chunk) in self.channels.iter_mut().zip(chunks) {
            channel.push(chunk);
        }
        self.frames += chunk_len;
        Ok(())
    }

    /// Concatenate all chunks of one channel, in append order, into a single
    /// contiguous sequence of length `frames`.
    ///
    /// The output is pre-sized from the tracked frame count, so this runs in
    /// one pass with one allocation. An out-of-range channel yields an empty
    /// sequence.
    pub fn flatten_channel(&self, channel: usize) -> Vec<f32> {
        let Some(chunks) = self.channels.get(channel) else {
            return Vec::new();
        };
        let mut flat = Vec::with_capacity(self.frames);
        for chunk in chunks {
            flat.extend_from_slice(chunk);
        }
        flat
    }

    /// Drop all buffered chunks, keeping the channel count.
    pub fn clear(&mut self) {
        for channel in &mut self.channels {
            channel.clear();
        }
        self.frames = 0;
    }

    /// Per-channel sample count accumulated so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames == 0
    }
}
