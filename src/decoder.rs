//! Reed-Solomon decoding: syndrome calculation, Forney-syndrome erasure
//! folding, Berlekamp-Massey, Chien search, and Forney's algorithm.
//!
//! All polynomials here use the same high-degree-first convention as
//! `poly.rs` and `generator.rs`. The one place this module explicitly
//! crosses conventions is the Chien search: Berlekamp-Massey naturally
//! produces an error-locator polynomial whose roots sit at the
//! *reciprocals* of the error locations (`Λ(X_k^-1) = 0`), while the
//! Chien-search step evaluates directly at `generator^i` without taking
//! a reciprocal — so the locator is evaluated as its reversed
//! (reciprocal) polynomial there, and nowhere else. See
//! `chien_search` and DESIGN.md's Open Questions entry on this
//! polynomial convention crossing.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;
use crate::field::Field;
use crate::poly;

/// The result of decoding one chunk.
pub struct Decoded {
    /// The corrected message (without parity).
    pub message: Vec<u16>,
    /// The corrected message plus parity (the full codeword).
    pub codeword: Vec<u16>,
    /// Erasure positions (as supplied) followed by error positions found
    /// by Chien search in descending-position order. This ordering is
    /// not a guaranteed contract; only "erasures first" is.
    pub errata_positions: Vec<usize>,
}

/// Decode one chunk of length `r.len()` with `nsym` parity symbols.
///
/// `erase_pos` are known erasure positions (`<= nsym` of them). When
/// `only_erasures` is set, no search for unknown errors is performed;
/// only the supplied erasures are corrected.
pub fn decode_chunk(
    field: &Field,
    r: &[u16],
    nsym: usize,
    fcr: i64,
    erase_pos: &[usize],
    only_erasures: bool,
) -> Result<Decoded, Error> {
    if erase_pos.len() > nsym {
        return Err(Error::TooManyErasures);
    }

    let nmess = r.len();
    let mut r = r.to_vec();

    // step 1: zero-fill erasures so the locator doesn't depend on their values
    for &e in erase_pos {
        r[e] = 0;
    }

    // step 2: syndromes, with the conventional S[0] = 0 shift
    let s = syndromes(field, &r, nsym, fcr);
    if s.iter().all(|&x| x == 0) {
        let split = nmess - nsym;
        return Ok(Decoded {
            message: r[..split].to_vec(),
            codeword: r,
            errata_positions: erase_pos.to_vec(),
        });
    }

    let errata_positions: Vec<usize>;
    let errata_loc: Vec<u16>;

    if only_erasures {
        errata_positions = erase_pos.to_vec();
        errata_loc = errata_locator(field, nmess, &errata_positions);
    } else {
        // step 4: Forney syndromes fold erasure contributions out of S[1..]
        let fsynd = forney_syndromes(field, nmess, &s[1..], erase_pos);

        // step 5: Berlekamp-Massey on the Forney syndromes
        let iterations = nsym - erase_pos.len();
        let err_loc = berlekamp_massey(field, &fsynd[..iterations]);

        let errs = err_loc.len() - 1;
        let erasures = erase_pos.len();
        if (errs < erasures) || (errs - erasures) * 2 + erasures > nsym {
            return Err(Error::TooManyErrors);
        }

        // step 6: Chien search for the unknown error positions
        let err_positions = chien_search(field, nmess, &err_loc, errs);
        if err_positions.len() != errs {
            return Err(Error::ChienMismatch);
        }

        // step 7: errata = known erasures + found errors
        let mut positions = erase_pos.to_vec();
        positions.extend_from_slice(&err_positions);
        errata_positions = positions;

        // step 8: rebuild the locator over the full errata set
        errata_loc = errata_locator(field, nmess, &errata_positions);
    }

    // step 9: errata evaluator Omega = (S * Lambda_all) mod x^(nsym+1)
    let s_rev: Vec<u16> = s.iter().rev().copied().collect();
    let full = poly::mul(field, &s_rev, &errata_loc);
    let omega = full[full.len() - (nsym + 1)..].to_vec();

    // step 10: Forney magnitudes
    let mut delta = vec![0u16; nmess];
    for (i, &p_i) in errata_positions.iter().enumerate() {
        let x_i = field.pow(field.generator(), (nmess - 1 - p_i) as i64);
        let x_i_inv = field.inv(x_i);

        let mut lambda_prime = 1u16;
        for (j, &p_j) in errata_positions.iter().enumerate() {
            if i == j {
                continue;
            }
            let x_j = field.pow(field.generator(), (nmess - 1 - p_j) as i64);
            lambda_prime = field.mul(lambda_prime, field.sub(1, field.mul(x_i_inv, x_j)));
        }
        if lambda_prime == 0 {
            return Err(Error::ForneyDegenerate);
        }

        let y = field.mul(field.pow(x_i, 1 - fcr), poly::eval(field, &omega, x_i_inv));
        let magnitude = field.div(y, lambda_prime)?;
        delta[p_i] = magnitude;
    }

    // step 11: apply the correction and verify
    for (c, &d) in r.iter_mut().zip(delta.iter()) {
        *c = field.add(*c, d);
    }
    let residual = syndromes(field, &r, nsym, fcr);
    if !residual.iter().all(|&x| x == 0) {
        return Err(Error::UncorrectableResidual);
    }

    let split = nmess - nsym;
    Ok(Decoded {
        message: r[..split].to_vec(),
        codeword: r,
        errata_positions,
    })
}

/// `S[0] = 0`, `S[k+1] = eval(r, generator^(k+fcr))` for `k` in
/// `0..nsym`. Length `nsym + 1`.
fn syndromes(field: &Field, r: &[u16], nsym: usize, fcr: i64) -> Vec<u16> {
    let mut s = vec![0u16; nsym + 1];
    for k in 0..nsym {
        let root = field.pow(field.generator(), k as i64 + fcr);
        s[k + 1] = poly::eval(field, r, root);
    }
    s
}

/// Fold erasure contributions out of the tail of the syndrome vector
/// (`s_tail` is `S[1..]`), leaving it the same length.
fn forney_syndromes(field: &Field, nmess: usize, s_tail: &[u16], erase_pos: &[usize]) -> Vec<u16> {
    let mut f = s_tail.to_vec();
    for &e in erase_pos {
        let root = field.pow(field.generator(), (nmess - 1 - e) as i64);
        for j in 0..f.len() - 1 {
            f[j] = field.add(field.mul(f[j], root), f[j + 1]);
        }
    }
    f
}

/// The errata locator polynomial `prod_{e in positions} (1 + generator^(nmess-1-e) * x)`,
/// high-degree-first, monic... well, degree `positions.len()` with
/// leading coefficient equal to the product of the roots (not
/// necessarily 1, unlike the generator polynomial).
fn errata_locator(field: &Field, nmess: usize, positions: &[usize]) -> Vec<u16> {
    let mut loc = vec![1u16];
    for &p in positions {
        let root = field.pow(field.generator(), (nmess - 1 - p) as i64);
        loc = poly::mul(field, &loc, &[root, 1]);
    }
    loc
}

/// Berlekamp-Massey: find the shortest linear-feedback connection
/// polynomial (the error-locator polynomial) that generates `s`.
fn berlekamp_massey(field: &Field, s: &[u16]) -> Vec<u16> {
    let mut err_loc = vec![1u16];
    let mut old_loc = vec![1u16];

    for i in 0..s.len() {
        let mut delta = s[i];
        for j in 1..err_loc.len() {
            delta = field.add(delta, field.mul(err_loc[err_loc.len() - 1 - j], s[i - j]));
        }
        old_loc.push(0);

        if delta != 0 {
            if old_loc.len() > err_loc.len() {
                let mut new_loc = old_loc.clone();
                poly::scale(field, &mut new_loc, delta);
                let mut scaled = err_loc.clone();
                poly::scale(field, &mut scaled, field.inv(delta));
                old_loc = scaled;
                err_loc = new_loc;
            }
            let mut term = old_loc.clone();
            poly::scale(field, &mut term, delta);
            poly::add(field, &mut err_loc, &term);
        }
    }

    let zeros = err_loc.iter().take_while(|&&x| x == 0).count();
    err_loc.drain(0..zeros);
    err_loc
}

/// Brute-force search for the roots of `err_loc`'s *reciprocal*
/// polynomial among `generator^0 .. generator^(nmess-1)`: each root at
/// `generator^i` corresponds to an error at codeword position
/// `nmess - 1 - i`.
///
/// `err_loc` has roots at the reciprocals of the error locations
/// (`Λ(X_k^-1) = 0`); reversing its coefficients gives the reciprocal
/// polynomial, whose roots sit directly at the error locations
/// `X_k = generator^i`, letting this search evaluate forward without an
/// inversion per candidate.
fn chien_search(field: &Field, nmess: usize, err_loc: &[u16], expected: usize) -> Vec<usize> {
    let reversed: Vec<u16> = err_loc.iter().rev().copied().collect();
    let mut positions = Vec::with_capacity(expected);
    for i in 0..nmess {
        let x_i = field.pow(field.generator(), i as i64);
        if poly::eval(field, &reversed, x_i) == 0 {
            positions.push(nmess - 1 - i);
        }
    }
    positions
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::encoder::encode_chunk;
    use crate::generator::gen_poly;

    fn field() -> Field {
        Field::new(0x11D, 2, 8).unwrap()
    }

    fn encode_str(field: &Field, s: &[u8], nsym: usize) -> Vec<u16> {
        let msg: Vec<u16> = s.iter().map(|&b| u16::from(b)).collect();
        let g = gen_poly(field, nsym, 0);
        encode_chunk(field, &msg, nsym, &g).unwrap()
    }

    #[test]
    fn clean_codeword_decodes_trivially() {
        let field = field();
        let codeword = encode_str(&field, b"hello world", 10);
        let decoded = decode_chunk(&field, &codeword, 10, 0, &[], false).unwrap();
        assert_eq!(decoded.message, codeword[..11]);
        assert!(decoded.errata_positions.is_empty());
    }

    #[test]
    fn corrects_errors_within_bound() {
        let field = field();
        let mut codeword = encode_str(&field, b"hello world", 10);
        for &p in &[1usize, 4, 11] {
            codeword[p] = u16::from(b'X');
        }
        let decoded = decode_chunk(&field, &codeword, 10, 0, &[], false).unwrap();
        assert_eq!(&decoded.message, &encode_str(&field, b"hello world", 10)[..11]);
    }

    #[test]
    fn corrects_erasures_within_bound() {
        let field = field();
        let clean = encode_str(&field, b"hello world", 10);
        let mut codeword = clean.clone();
        let erasures = vec![1usize, 4, 11, 13];
        for &p in &erasures {
            codeword[p] = u16::from(b'X');
        }
        let decoded = decode_chunk(&field, &codeword, 10, 0, &erasures, false).unwrap();
        assert_eq!(decoded.message, clean[..11]);
    }

    #[test]
    fn only_erasures_mode_ignores_unknown_errors() {
        let field = field();
        let clean = encode_str(&field, b"hello world", 10);
        let mut codeword = clean.clone();
        let erasures = vec![0usize, 1, 2];
        for &p in &erasures {
            codeword[p] = u16::from(b'X');
        }
        let decoded = decode_chunk(&field, &codeword, 10, 0, &erasures, true).unwrap();
        assert_eq!(decoded.message, clean[..11]);
    }

    #[test]
    fn beyond_bound_fails_or_zero_syndrome() {
        let field = field();
        let mut codeword = encode_str(&field, b"hello world", 10);
        // 6 errors, 2e=12 > nsym=10
        for &p in &[1usize, 2, 3, 9, 13, 14] {
            codeword[p] = u16::from(b'X');
        }
        let result = decode_chunk(&field, &codeword, 10, 0, &[], false);
        match result {
            Err(_) => {}
            Ok(decoded) => {
                let s = syndromes(&field, &decoded.codeword, 10, 0);
                assert!(s.iter().all(|&x| x == 0));
            }
        }
    }

    #[test]
    fn erasure_locator_is_independent_of_placeholder_values() {
        let field = field();
        let positions = vec![1usize, 5, 9];
        let nmess = 21;
        let loc_a = errata_locator(&field, nmess, &positions);
        let loc_b = errata_locator(&field, nmess, &positions);
        assert_eq!(loc_a, loc_b);
    }
}
