use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = core::result::Result<T, CodecError>;

/// Error type for `StreamReader` and `StreamWriter`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum CodecError {
    /// The underlying stream transferred a different number of bytes than was requested, or it
    /// failed outright.
    ///
    /// This covers short reads, short writes, zero-byte transfers and end of stream alike. No
    /// partial value is returned alongside it, and the stream position is not restored: whatever
    /// the stream consumed or accepted before failing stays consumed.
    #[error("binary: invalid bytes")]
    InvalidBytes,
}

/// Collapses a transfer whose count did not match the request into `InvalidBytes`.
#[inline]
pub(crate) fn short_transfer(op: &'static str, requested: usize, transferred: usize) -> CodecError {
    #[cfg(feature = "tracing")]
    tracing::trace!(op, requested, transferred, "short transfer");
    #[cfg(not(feature = "tracing"))]
    let _ = (op, requested, transferred);
    CodecError::InvalidBytes
}

/// Collapses an error reported by the underlying stream into `InvalidBytes`.
#[inline]
pub(crate) fn stream_failed<E: core::fmt::Debug>(
    op: &'static str,
    requested: usize,
    error: E,
) -> CodecError {
    #[cfg(feature = "tracing")]
    tracing::trace!(op, requested, error = ?error, "stream error");
    #[cfg(not(feature = "tracing"))]
    let _ = (op, requested, error);
    CodecError::InvalidBytes
}
