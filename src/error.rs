use thiserror::Error;

/// General bitstream reading errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A read or skip would consume bits beyond the end of the buffer.
    #[error("End of stream: {0}")]
    EndOfStream(String),
    /// A width or advancement request outside the accepted range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// An alignment-sensitive operation invoked while misaligned.
    #[error("Invalid state: {0}")]
    InvalidState(String),
    /// A coded form whose mapping this crate does not define.
    #[error("Unimplemented: {0}")]
    Unimplemented(String),
}

/// A specialised `Result` type for bitstream operations.
pub type Result<T> = ::std::result::Result<T, Error>;
