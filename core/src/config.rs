/// Which `k` share records are consumed when a document holds more than `k`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    /// The first `k` records in document order. Later records are not
    /// validated at all.
    #[default]
    SourceOrder,
    /// Every coordinate is parsed, records are sorted by `x` ascending and the
    /// first `k` are decoded.
    AscendingX,
}

/// Knobs for a single recovery run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecoveryConfig {
    pub selection: Selection,
    /// Fail with [`RecoveryError::NonIntegralSecret`] instead of reporting a
    /// truncated value when the shares do not lie on an integer polynomial.
    ///
    /// [`RecoveryError::NonIntegralSecret`]: crate::error::RecoveryError::NonIntegralSecret
    pub require_integral_secret: bool,
}

impl RecoveryConfig {
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_integral_secret(mut self, required: bool) -> Self {
        self.require_integral_secret = required;
        self
    }
}
