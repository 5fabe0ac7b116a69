/// Recorder state machine.
///
/// State transitions:
/// ```text
/// uninitialized → ready      (init)
/// ready         → ready      (init / record / export-wav / clear)
/// ```
///
/// `record`, `export-wav`, and `clear` are only valid in `Ready`; invoking
/// them while `Uninitialized` fails with `NotInitialized`. There is no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecorderState {
    #[default]
    Uninitialized,
    Ready,
}

impl RecorderState {
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Self::Uninitialized)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}
