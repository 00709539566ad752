//! A universal errors-and-erasures Reed-Solomon codec over a
//! runtime-configurable binary extension field `GF(2^m)`, `3 <= m <= 16`.
//!
//! Unlike a compile-time-specialized codec, every parameter here — field
//! width, irreducible polynomial, generator, chunk size, parity count —
//! is chosen when a [`Codec`] is constructed, not baked into the type.
//! The price of that flexibility is that field arithmetic always runs
//! through `u16` log/exp tables rather than const-evaluated lookup
//! tables; [`Codec`] is generic over its public symbol type
//! ([`Word`](word::Word), `u8` or `u16`) so callers working in `GF(2^8)`
//! still see a `u8`-typed API.
//!
//! ```
//! use rscodec::{Codec, CodecParams};
//!
//! let codec: Codec<u8> = Codec::new(CodecParams {
//!     nsize: 20,
//!     nsym: 10,
//!     ..CodecParams::default()
//! }).unwrap();
//!
//! let message: Vec<u8> = b"hello world".to_vec();
//! let mut codeword = codec.encode(&message, None).unwrap();
//! codeword[3] ^= 0xFF;
//! let decoded = codec.decode(&codeword, None, &[], false).unwrap();
//! assert_eq!(decoded, message);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod field;
pub mod generator;
pub mod poly;
pub mod word;

pub use codec::{Codec, CodecParams};
pub use error::Error;
pub use field::Field;
pub use word::Word;
