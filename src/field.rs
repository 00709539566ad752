//! Binary extension field GF(2^m), 3 <= m <= 16.
//!
//! Builds exp/log tables under a runtime `(prim, generator, m)` and
//! exposes elementwise arithmetic. A `Field` is immutable once built;
//! there is no process-wide mutable table.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;

/// A binary extension field GF(2^m) with its exp/log tables.
#[derive(Debug, Clone)]
pub struct Field {
    m: u32,
    prim: u32,
    generator: u16,
    q: u32,
    charac: u32,
    // exp[i] = generator^i, doubled to length 2*charac so mul() never
    // needs a modulo: exp[i] == exp[i + charac] for all i.
    exp: Vec<u16>,
    // log[x] = i such that exp[i] == x, for x in 1..q. log[0] is a
    // sentinel and never read.
    log: Vec<u16>,
}

impl Field {
    /// Build the field's log/exp tables.
    ///
    /// `prim` must be an irreducible polynomial of degree `m` over GF(2)
    /// and `generator` must generate the multiplicative group of the
    /// resulting field; both are checked by construction (an
    /// insufficiently primitive pair fails to reach every nonzero
    /// element, which is detected and reported as
    /// [`Error::InvalidParams`]).
    pub fn new(prim: u32, generator: u16, m: u32) -> Result<Field, Error> {
        if !(3..=16).contains(&m) {
            return Err(Error::InvalidParams);
        }

        let q: u32 = 1 << m;
        let (exp, log) = build_tables(prim, generator, q).ok_or(Error::InvalidParams)?;

        let mut doubled = exp.clone();
        doubled.extend_from_slice(&exp);

        Ok(Field {
            m,
            prim,
            generator,
            q,
            charac: q - 1,
            exp: doubled,
            log,
        })
    }

    /// The field exponent `m`, i.e. this is GF(2^m).
    pub fn m(&self) -> u32 {
        self.m
    }

    /// `q = 2^m`, the number of elements in the field including zero.
    pub fn q(&self) -> u32 {
        self.q
    }

    /// `charac = q - 1`, the order of the multiplicative group and the
    /// maximum codeword length for this field.
    pub fn charac(&self) -> u32 {
        self.charac
    }

    /// The irreducible polynomial defining this field.
    pub fn prim(&self) -> u32 {
        self.prim
    }

    /// The multiplicative generator of this field.
    pub fn generator(&self) -> u16 {
        self.generator
    }

    /// `x XOR y`. Addition and subtraction coincide in characteristic 2.
    #[inline]
    pub fn add(&self, x: u16, y: u16) -> u16 {
        x ^ y
    }

    /// `x XOR y`. Addition and subtraction coincide in characteristic 2.
    #[inline]
    pub fn sub(&self, x: u16, y: u16) -> u16 {
        x ^ y
    }

    /// `-x = x`. Negation is the identity in characteristic 2.
    #[inline]
    pub fn neg(&self, x: u16) -> u16 {
        x
    }

    /// Multiply two field elements.
    #[inline]
    pub fn mul(&self, x: u16, y: u16) -> u16 {
        if x == 0 || y == 0 {
            return 0;
        }
        let i = self.log[x as usize] as usize + self.log[y as usize] as usize;
        self.exp[i]
    }

    /// Divide `x` by `y`.
    ///
    /// Returns [`Error::SymbolOutOfRange`] if `y == 0`. A zero divisor is
    /// an internal arithmetic invariant, never reachable from a valid
    /// public-API call, so it is folded into the same error kind a caller
    /// would see for any other malformed input.
    #[inline]
    pub fn div(&self, x: u16, y: u16) -> Result<u16, Error> {
        if y == 0 {
            return Err(Error::SymbolOutOfRange);
        }
        if x == 0 {
            return Ok(0);
        }
        let lx = self.log[x as usize] as u32;
        let ly = self.log[y as usize] as u32;
        let i = (lx + self.charac - ly) % self.charac;
        Ok(self.exp[i as usize])
    }

    /// Multiplicative inverse of `x`. `x` must be nonzero; callers must
    /// check this themselves (mirrors the field's low-level contract).
    #[inline]
    pub fn inv(&self, x: u16) -> u16 {
        debug_assert!(x != 0, "inv(0) is undefined");
        self.exp[(self.charac - self.log[x as usize] as u32) as usize]
    }

    /// `x ^ p`, interpreting `p` modulo `charac` (so negative exponents
    /// work once normalized into that range).
    pub fn pow(&self, x: u16, p: i64) -> u16 {
        if x == 0 {
            return 0;
        }
        let charac = i64::from(self.charac);
        let lx = i64::from(self.log[x as usize]);
        let e = (lx * p).rem_euclid(charac);
        self.exp[e as usize]
    }

    /// Search for an irreducible polynomial of degree `m` and, for each,
    /// implicitly a working generator (`generator` is fixed and checked
    /// for primitivity along with the candidate).
    ///
    /// Iterates candidates in `(q, 2q)`. When `fast` is set, only primes below `2q` are tried
    /// (a prime candidate polynomial is necessary, though not
    /// sufficient, for irreducibility, and this cuts the search space
    /// substantially for the field widths this codec supports). When
    /// `single` is set, search stops at the first success.
    pub fn find_prime_polys(generator: u16, m: u32, fast: bool, single: bool) -> Vec<u32> {
        let q: u32 = 1 << m;
        let mut found = Vec::new();

        let mut try_candidate = |prim: u32| build_tables(prim, generator, q).is_some();

        if fast {
            for prim in sieve_primes(q + 1, 2 * q) {
                if try_candidate(prim) {
                    found.push(prim);
                    if single {
                        break;
                    }
                }
            }
        } else {
            for prim in (q + 1)..(2 * q) {
                if try_candidate(prim) {
                    found.push(prim);
                    if single {
                        break;
                    }
                }
            }
        }

        found
    }
}

/// Build the (non-doubled) exp/log tables for a candidate `(prim,
/// generator)` pair, or `None` if the pair doesn't generate every
/// nonzero element of GF(2^m) exactly once (i.e. isn't primitive).
fn build_tables(prim: u32, generator: u16, q: u32) -> Option<(Vec<u16>, Vec<u16>)> {
    let charac = q - 1;
    let mut exp = vec![0u16; charac as usize];
    let mut log = vec![0u16; q as usize];
    let mut seen = vec![false; q as usize];

    let mut x: u32 = 1;
    for i in 0..charac {
        if x == 0 || x > charac || seen[x as usize] {
            return None;
        }
        exp[i as usize] = x as u16;
        seen[x as usize] = true;
        log[x as usize] = i as u16;

        x = carryless_mul(x, u32::from(generator));
        if x >= q {
            x ^= prim;
        }
    }
    if x != 1 {
        // a full primitive cycle returns to the identity after `charac` steps
        return None;
    }

    Some((exp, log))
}

/// Carryless (XOR, "Russian peasant") multiplication of two binary
/// polynomials represented as integers, unreduced.
fn carryless_mul(mut x: u32, mut y: u32) -> u32 {
    let mut r: u32 = 0;
    while y != 0 {
        if y & 1 != 0 {
            r ^= x;
        }
        y >>= 1;
        x <<= 1;
    }
    r
}

/// Sieve of Eratosthenes restricted to `[lo, hi)`, used by the `fast`
/// prime-polynomial search.
fn sieve_primes(lo: u32, hi: u32) -> Vec<u32> {
    if hi <= 2 {
        return Vec::new();
    }
    let mut is_composite = vec![false; hi as usize];
    let mut primes = Vec::new();
    for n in 2..hi {
        if !is_composite[n as usize] {
            if n >= lo {
                primes.push(n);
            }
            let mut k = n.saturating_mul(n);
            while k < hi {
                is_composite[k as usize] = true;
                k += n;
            }
        }
    }
    primes
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn gf256_defaults_build() {
        let f = Field::new(0x11D, 2, 8).unwrap();
        assert_eq!(f.q(), 256);
        assert_eq!(f.charac(), 255);
    }

    #[test]
    fn exp_table_is_doubled() {
        let f = Field::new(0x11D, 2, 8).unwrap();
        for i in 0..f.charac() as usize {
            assert_eq!(f.exp[i], f.exp[i + f.charac() as usize]);
        }
    }

    #[test]
    fn log_exp_are_inverse() {
        let f = Field::new(0x11D, 2, 8).unwrap();
        for x in 1..f.q() as u16 {
            let i = f.log[x as usize];
            assert_eq!(f.exp[i as usize], x);
        }
    }

    #[test]
    fn mul_inv_is_identity() {
        let f = Field::new(0x11D, 2, 8).unwrap();
        for x in 1..f.q() as u16 {
            assert_eq!(f.mul(x, f.inv(x)), 1);
        }
    }

    #[test]
    fn div_undoes_mul() {
        let f = Field::new(0x11D, 2, 8).unwrap();
        for x in 0..f.q() as u16 {
            for y in 1..f.q() as u16 {
                let p = f.mul(x, y);
                assert_eq!(f.div(p, y).unwrap(), x);
            }
        }
    }

    #[test]
    fn rejects_non_irreducible_prim() {
        // 0x100 is just x^8, trivially reducible
        assert!(Field::new(0x100, 2, 8).is_err());
    }

    #[test]
    fn find_prime_polys_recovers_default() {
        let found = Field::find_prime_polys(2, 8, true, false);
        assert!(found.contains(&0x11D));
    }

    #[test]
    fn adsb_uat_field_builds() {
        // fcr=120, prim=0x187 is the ADS-B UAT field
        let f = Field::new(0x187, 2, 8).unwrap();
        assert_eq!(f.charac(), 255);
    }
}
