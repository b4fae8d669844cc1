use thiserror::Error;

/// Errors surfaced by the checked entry points.
///
/// The hash itself cannot fail; these only report buffers handed over without a compile-time
/// length.
#[derive(Error, Debug)]
pub enum KeccakError {
    /// The output buffer is not exactly one digest long.
    #[error("output buffer must be 32 bytes, got {0}")]
    OutputLength(usize),

    /// A hex digest decoded to the wrong number of bytes.
    #[error("digest must be 32 bytes, got {0}")]
    DigestLength(usize),

    /// A hex digest was malformed.
    #[error("invalid hex digest: {0}")]
    Hex(#[from] hex::FromHexError),
}
