//! Reed-Solomon encoding.
//!
//! Appending `nsym` parity symbols to a message is extended synthetic
//! division of `message(x) * x^nsym` by the monic generator polynomial
//! `g(x)`, with the remainder written directly into the tail — the same
//! trick CRC uses to make a message a multiple of its generator.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;
use crate::field::Field;
use crate::poly;

/// Encode a single chunk: appends `nsym` parity symbols computed against
/// generator polynomial `g` (which must have degree `nsym`).
///
/// Returns `message || parity`. Fails with [`Error::MessageTooLong`] if
/// `message.len() + nsym` exceeds the field's maximum codeword length.
pub fn encode_chunk(field: &Field, message: &[u16], nsym: usize, g: &[u16]) -> Result<Vec<u16>, Error> {
    if message.len() + nsym > field.charac() as usize {
        return Err(Error::MessageTooLong);
    }
    debug_assert_eq!(g.len(), nsym + 1);

    let mut padded = Vec::with_capacity(message.len() + nsym);
    padded.extend_from_slice(message);
    padded.extend(vec![0u16; nsym]);

    let parity = poly::rem(field, &padded, g);
    padded[message.len()..].copy_from_slice(&parity);
    Ok(padded)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generator::gen_poly;

    fn field() -> Field {
        Field::new(0x11D, 2, 8).unwrap()
    }

    #[test]
    fn message_prefix_is_preserved() {
        let field = field();
        let g = gen_poly(&field, 10, 0);
        let msg: Vec<u16> = vec![1, 2, 3, 4];
        let out = encode_chunk(&field, &msg, 10, &g).unwrap();
        assert_eq!(&out[..4], &msg[..]);
        assert_eq!(out.len(), 14);
    }

    // encode([1,2,3,4]) with the default field (nsym=10, fcr=0, prim=0x11D, a=2)
    #[test]
    fn reference_vector_round_trips_parity() {
        let field = field();
        let g = gen_poly(&field, 10, 0);
        let msg: Vec<u16> = vec![1, 2, 3, 4];
        let out = encode_chunk(&field, &msg, 10, &g).unwrap();
        let expected: Vec<u16> = vec![
            0x01, 0x02, 0x03, 0x04, 0x2C, 0x9D, 0x1C, 0x2B, 0x3D, 0xF8, 0x68, 0xFA, 0x98, 0x4D,
        ];
        assert_eq!(out, expected);
    }

    #[test]
    fn codeword_is_divisible_by_generator() {
        let field = field();
        let g = gen_poly(&field, 10, 0);
        let msg: Vec<u16> = (0..20).collect();
        let out = encode_chunk(&field, &msg, 10, &g).unwrap();
        let remainder = poly::rem(&field, &out, &g);
        assert!(remainder.iter().all(|&c| c == 0));
    }

    #[test]
    fn too_long_message_is_rejected() {
        let field = field();
        let g = gen_poly(&field, 10, 0);
        let msg = vec![0u16; 250];
        assert_eq!(encode_chunk(&field, &msg, 10, &g), Err(Error::MessageTooLong));
    }
}
