use thiserror::Error;

/// Errors returned by [`BitVector`](crate::BitVector) operations that
/// allocate.
///
/// Out-of-bounds bit indices are contract violations and panic instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The allocator could not provide storage for the requested words.
    #[error("failed to allocate storage for {words} words")]
    AllocationFailed {
        /// Requested capacity in words.
        words: usize,
    },
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
