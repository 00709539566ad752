//! The Reed-Solomon generator polynomial.
//!
//! `g(x) = prod_{i=0}^{nsym-1} (x - generator^(i+fcr))`, a monic
//! polynomial of degree `nsym` whose roots are `nsym` consecutive powers
//! of the field's generator starting at exponent `fcr`. Encoding appends
//! the remainder of `message(x) * x^nsym` divided by `g(x)`, which is
//! exactly what makes the codeword a multiple of `g(x)` (see
//! `encoder.rs`); decoding's syndromes are evaluations at those same
//! roots (see `decoder.rs`).

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::field::Field;
use crate::poly;

/// Build the degree-`nsym` generator polynomial, high-degree-first,
/// monic (leading coefficient `1`).
pub fn gen_poly(field: &Field, nsym: usize, fcr: i64) -> Vec<u16> {
    let mut g = vec![1u16];
    for i in 0..nsym {
        let root = field.pow(field.generator(), i as i64 + fcr);
        // multiply g by (x - root) == (x + root) in characteristic 2
        g = poly::mul(field, &g, &[1, root]);
    }
    g
}

/// Build every generator polynomial of degree `0..=n_max`, so that entry
/// `k` is `gen_poly(field, k, fcr)`. This supports variable-rate
/// encoding without re-deriving the polynomial from scratch on every
/// call.
pub fn gen_poly_all(field: &Field, n_max: usize, fcr: i64) -> Vec<Vec<u16>> {
    let mut all = Vec::with_capacity(n_max + 1);
    let mut g = vec![1u16];
    all.push(g.clone());
    for i in 0..n_max {
        let root = field.pow(field.generator(), i as i64 + fcr);
        g = poly::mul(field, &g, &[1, root]);
        all.push(g.clone());
    }
    all
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn degree_zero_is_one() {
        let field = Field::new(0x11D, 2, 8).unwrap();
        assert_eq!(gen_poly(&field, 0, 0), vec![1u16]);
    }

    #[test]
    fn is_monic_of_correct_degree() {
        let field = Field::new(0x11D, 2, 8).unwrap();
        let g = gen_poly(&field, 10, 0);
        assert_eq!(g.len(), 11);
        assert_eq!(g[0], 1);
    }

    #[test]
    fn has_roots_at_consecutive_powers() {
        let field = Field::new(0x11D, 2, 8).unwrap();
        let nsym = 10;
        let g = gen_poly(&field, nsym, 0);
        for i in 0..nsym {
            let root = field.pow(field.generator(), i as i64);
            assert_eq!(poly::eval(&field, &g, root), 0);
        }
    }

    #[test]
    fn all_matches_individual() {
        let field = Field::new(0x11D, 2, 8).unwrap();
        let all = gen_poly_all(&field, 20, 0);
        for k in 0..=20 {
            assert_eq!(all[k], gen_poly(&field, k, 0));
        }
    }
}
