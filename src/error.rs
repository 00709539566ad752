//! Error types for the Reed-Solomon codec.

use core::fmt;

/// Errors raised by [`Field`](crate::field::Field) construction,
/// [`Codec`](crate::codec::Codec) construction, and encode/decode calls.
///
/// Falls into three groups: configuration errors (invalid parameters at
/// construction), input-bounds errors (message/erasure counts out of
/// range), and decoding errors (the codeword could not be corrected).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Error {
    /// `nsym >= nsize`, or `nsize > 2^m - 1`, or `m` is out of `3..=16`.
    InvalidParams,
    /// No irreducible polynomial of the requested degree could be found.
    ///
    /// This should not happen for any `m` in `3..=16`; if it does, the
    /// caller supplied a degree that isn't actually achievable.
    NoPrimePolyFound,
    /// `message.len() + nsym` exceeds the field's maximum codeword length.
    MessageTooLong,
    /// A symbol in the input is `>= q` for the codec's field.
    SymbolOutOfRange,
    /// More erasure positions were supplied than `nsym` allows.
    TooManyErasures,
    /// Berlekamp-Massey produced an error-locator polynomial whose degree
    /// implies more errors than `2*e + v <= nsym` allows.
    TooManyErrors,
    /// Chien search found a different number of roots than the
    /// error-locator polynomial's degree.
    ChienMismatch,
    /// Forney's algorithm hit a zero formal-derivative denominator.
    ForneyDegenerate,
    /// The codeword's syndromes were still nonzero after correction.
    UncorrectableResidual,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParams => write!(f, "invalid codec parameters"),
            Error::NoPrimePolyFound => write!(f, "no irreducible polynomial found for this field width"),
            Error::MessageTooLong => write!(f, "message is too long for this codec's field"),
            Error::SymbolOutOfRange => write!(f, "symbol value is out of range for this codec's field"),
            Error::TooManyErasures => write!(f, "more erasures supplied than nsym allows"),
            Error::TooManyErrors => write!(f, "too many errors to correct"),
            Error::ChienMismatch => write!(f, "Chien search found an unexpected number of roots"),
            Error::ForneyDegenerate => write!(f, "Forney's algorithm hit a zero derivative"),
            Error::UncorrectableResidual => write!(f, "syndromes are still nonzero after correction"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
