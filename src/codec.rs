//! The `Codec` facade: chunking, generator-polynomial caching, and the
//! public encode/decode/check surface.
//!
//! This is the only public entry point most callers need; `field`,
//! `poly`, `generator`, `encoder`, and `decoder` are the pieces it wires
//! together per chunk.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::decoder::{self, Decoded};
use crate::encoder;
use crate::error::Error;
use crate::field::Field;
use crate::generator::{gen_poly, gen_poly_all};
use crate::word::Word;

/// The default irreducible polynomial, for GF(2^8) (`x^8 + x^4 + x^3 + x^2 + 1`).
pub const DEFAULT_PRIM: u32 = 0x11D;
/// The default multiplicative generator.
pub const DEFAULT_GENERATOR: u16 = 2;
/// The default field width, `GF(2^8)`.
pub const DEFAULT_C_EXP: u32 = 8;

/// Construction parameters for a [`Codec`].
///
/// `prim` and `c_exp` (the field width `m`) can both be left at their
/// defaults for the common `GF(2^8)` case; `Codec::new` auto-raises
/// `c_exp` when `nsize` doesn't fit in `GF(2^8)`, and auto-derives
/// `prim` by searching for an irreducible polynomial when `c_exp`
/// doesn't match its default but `prim` was left untouched.
#[derive(Debug, Clone)]
pub struct CodecParams {
    /// The full per-chunk codeword length (message + parity).
    pub nsize: usize,
    /// The default number of parity symbols per chunk, used by
    /// `encode`/`decode`/`check`/`maxerrata` whenever their own `nsym`
    /// argument is omitted. Individual calls may override it with any
    /// value in `0..nsize`.
    pub nsym: usize,
    /// The first consecutive root's exponent for the generator polynomial.
    pub fcr: i64,
    /// The field's irreducible polynomial.
    pub prim: u32,
    /// The field's multiplicative generator.
    pub generator: u16,
    /// The field width `m`, i.e. the field is `GF(2^c_exp)`.
    pub c_exp: u32,
    /// When `true`, only the degree-`nsym` generator polynomial is built
    /// at construction, and any other degree requested later by a
    /// per-call `nsym` override is rebuilt on demand. When `false`,
    /// every generator polynomial of degree `0..nsize` is precomputed up
    /// front, which costs more memory but makes every legal `nsym`
    /// override free of charge — useful for variable-rate encoding that
    /// changes `nsym` on most calls.
    pub single_gen: bool,
}

impl Default for CodecParams {
    fn default() -> Self {
        CodecParams {
            nsize: 255,
            nsym: 32,
            fcr: 0,
            prim: DEFAULT_PRIM,
            generator: DEFAULT_GENERATOR,
            c_exp: DEFAULT_C_EXP,
            single_gen: true,
        }
    }
}

#[derive(Debug)]
enum Generators {
    /// Caches just the construction-time degree; any other degree
    /// requested later is built on demand.
    Single { nsym: usize, g: Vec<u16> },
    /// Every degree `0..nsize` precomputed, so a per-call `nsym`
    /// override never rebuilds a generator from scratch.
    All(Vec<Vec<u16>>),
}

impl Generators {
    fn get(&self, field: &Field, fcr: i64, nsym: usize) -> Result<Vec<u16>, Error> {
        match self {
            Generators::Single { nsym: cached, g } => {
                if nsym == *cached {
                    Ok(g.clone())
                } else {
                    Ok(gen_poly(field, nsym, fcr))
                }
            }
            Generators::All(all) => all.get(nsym).cloned().ok_or(Error::InvalidParams),
        }
    }
}

/// A Reed-Solomon codec over a runtime-configured `GF(2^m)`, generic
/// over its public symbol type `W` (`u8` or `u16`).
#[derive(Debug)]
pub struct Codec<W: Word> {
    field: Field,
    nsize: usize,
    nsym: usize,
    fcr: i64,
    generators: Generators,
    _word: core::marker::PhantomData<W>,
}

impl<W: Word> Codec<W> {
    /// Build a codec from `params`.
    pub fn new(mut params: CodecParams) -> Result<Codec<W>, Error> {
        if params.nsym >= params.nsize {
            return Err(Error::InvalidParams);
        }

        // auto-raise the field width when the requested codeword doesn't
        // fit in GF(2^8)
        if params.c_exp <= 8 && params.nsize > 255 {
            let mut m = 9;
            while m <= 16 && (1u32 << m) - 1 < params.nsize as u32 {
                m += 1;
            }
            if m > 16 {
                return Err(Error::InvalidParams);
            }
            params.c_exp = m;
        }

        // auto-derive an irreducible polynomial when the field width
        // changed but the caller left `prim` at its GF(2^8) default
        if params.c_exp != DEFAULT_C_EXP && params.prim == DEFAULT_PRIM {
            let found = Field::find_prime_polys(params.generator, params.c_exp, true, true);
            params.prim = *found.first().ok_or(Error::NoPrimePolyFound)?;
        }

        let field = Field::new(params.prim, params.generator, params.c_exp)?;

        if params.nsize > field.charac() as usize {
            return Err(Error::InvalidParams);
        }
        // the public symbol type must be able to hold every element of
        // this field
        if W::from_elem(field.q() as u16 - 1).is_none() {
            return Err(Error::InvalidParams);
        }

        let generators = if params.single_gen {
            Generators::Single {
                nsym: params.nsym,
                g: gen_poly(&field, params.nsym, params.fcr),
            }
        } else {
            // every nsym in 0..nsize is a valid per-call override, so cache
            // every degree a caller could legally ask for
            Generators::All(gen_poly_all(&field, params.nsize - 1, params.fcr))
        };

        Ok(Codec {
            field,
            nsize: params.nsize,
            nsym: params.nsym,
            fcr: params.fcr,
            generators,
            _word: core::marker::PhantomData,
        })
    }

    /// The underlying field.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The per-chunk codeword length.
    pub fn nsize(&self) -> usize {
        self.nsize
    }

    /// The number of parity symbols per chunk.
    pub fn nsym(&self) -> usize {
        self.nsym
    }

    /// The maximum errors/erasures this codec can correct in one chunk
    /// under the Singleton bound `2*errors + erasures <= nsym`.
    ///
    /// `nsym` defaults to the construction-time parity count when
    /// omitted. With neither `errors` nor `erasures`, returns
    /// `(floor(nsym/2), nsym)` — the pure-errors and pure-erasures
    /// extremes. Fixing `erasures` solves for the matching error budget,
    /// and vice versa for `errors`; supplying a value that already
    /// exceeds `nsym` on its own is rejected with [`Error::InvalidParams`].
    pub fn maxerrata(
        &self,
        nsym: Option<usize>,
        errors: Option<usize>,
        erasures: Option<usize>,
    ) -> Result<(usize, usize), Error> {
        let nsym = self.resolve_nsym(nsym)?;
        match (errors, erasures) {
            (None, None) => Ok((nsym / 2, nsym)),
            (None, Some(v)) => {
                if v > nsym {
                    return Err(Error::InvalidParams);
                }
                Ok(((nsym - v) / 2, v))
            }
            (Some(e), None) => {
                if 2 * e > nsym {
                    return Err(Error::InvalidParams);
                }
                Ok((e, nsym - 2 * e))
            }
            (Some(e), Some(v)) => {
                if 2 * e + v > nsym {
                    return Err(Error::InvalidParams);
                }
                Ok((e, v))
            }
        }
    }

    /// Resolve an optional per-call `nsym` override to the construction-time
    /// default, rejecting anything that would violate `nsym < nsize`.
    fn resolve_nsym(&self, nsym: Option<usize>) -> Result<usize, Error> {
        let nsym = nsym.unwrap_or(self.nsym);
        if nsym >= self.nsize {
            return Err(Error::InvalidParams);
        }
        Ok(nsym)
    }

    /// Split a codeword of `total_len` symbols into `(start, len)` chunk
    /// boundaries: as many full-size `nsize` chunks as fit, followed by
    /// one shorter trailing chunk if `total_len` isn't a multiple of
    /// `nsize` (mirroring `encode`'s unpadded ragged last chunk).
    fn chunk_boundaries(&self, total_len: usize) -> Vec<(usize, usize)> {
        let full = total_len / self.nsize;
        let remainder = total_len % self.nsize;
        let mut bounds = Vec::with_capacity(full + (remainder != 0) as usize);
        for i in 0..full {
            bounds.push((i * self.nsize, self.nsize));
        }
        if remainder != 0 {
            bounds.push((full * self.nsize, remainder));
        }
        bounds
    }

    fn to_elems(&self, words: &[W]) -> Result<Vec<u16>, Error> {
        let q = self.field.q() as u16;
        let mut elems = Vec::with_capacity(words.len());
        for &w in words {
            let e = w.to_elem();
            if e >= q {
                return Err(Error::SymbolOutOfRange);
            }
            elems.push(e);
        }
        Ok(elems)
    }

    fn from_elems(&self, elems: &[u16]) -> Result<Vec<W>, Error> {
        elems
            .iter()
            .map(|&e| W::from_elem(e).ok_or(Error::SymbolOutOfRange))
            .collect()
    }

    /// Encode `message`, splitting it into `nsize - nsym`-symbol chunks
    /// and appending `nsym` parity symbols to each. `nsym` defaults to
    /// the construction-time parity count when omitted, enabling
    /// variable-rate encoding against a single codec instance.
    pub fn encode(&self, message: &[W], nsym: Option<usize>) -> Result<Vec<W>, Error> {
        let nsym = self.resolve_nsym(nsym)?;
        let elems = self.to_elems(message)?;
        let chunk_size = self.nsize - nsym;
        let g = self.generators.get(&self.field, self.fcr, nsym)?;

        let mut out = Vec::with_capacity((elems.len() / chunk_size + 1) * self.nsize);
        for chunk in elems.chunks(chunk_size) {
            let encoded = encoder::encode_chunk(&self.field, chunk, nsym, &g)?;
            out.extend_from_slice(&encoded);
        }
        self.from_elems(&out)
    }

    /// Decode `codeword`, correcting each `nsize`-symbol chunk
    /// independently. `erase_pos` holds known erasure positions as
    /// global indices into `codeword`. `nsym` defaults to the
    /// construction-time parity count when omitted.
    pub fn decode(
        &self,
        codeword: &[W],
        nsym: Option<usize>,
        erase_pos: &[usize],
        only_erasures: bool,
    ) -> Result<Vec<W>, Error> {
        let nsym = self.resolve_nsym(nsym)?;
        let elems = self.to_elems(codeword)?;
        let bounds = self.chunk_boundaries(elems.len());

        let mut erasures_by_chunk = vec![Vec::new(); bounds.len()];
        for &pos in erase_pos {
            let (chunk_idx, (start, _)) = bounds
                .iter()
                .enumerate()
                .find(|(_, &(start, len))| pos >= start && pos < start + len)
                .ok_or(Error::InvalidParams)?;
            erasures_by_chunk[chunk_idx].push(pos - start);
        }

        let mut message = Vec::with_capacity(elems.len());
        for (&(start, len), chunk_erasures) in bounds.iter().zip(erasures_by_chunk.iter()) {
            let Decoded { message: m, .. } = decoder::decode_chunk(
                &self.field,
                &elems[start..start + len],
                nsym,
                self.fcr,
                chunk_erasures,
                only_erasures,
            )?;
            message.extend_from_slice(&m);
        }
        self.from_elems(&message)
    }

    /// Report, per chunk, whether that chunk is already free of errors —
    /// a syndrome check, with no correction attempted. `nsym` defaults to
    /// the construction-time parity count when omitted.
    pub fn check(&self, codeword: &[W], nsym: Option<usize>) -> Result<Vec<bool>, Error> {
        let nsym = self.resolve_nsym(nsym)?;
        let elems = self.to_elems(codeword)?;
        let bounds = self.chunk_boundaries(elems.len());
        let mut clean = Vec::with_capacity(bounds.len());
        for (start, len) in bounds {
            let chunk = &elems[start..start + len];
            let is_clean = match decoder::decode_chunk(&self.field, chunk, nsym, self.fcr, &[], false) {
                Ok(Decoded { errata_positions, .. }) => errata_positions.is_empty(),
                Err(_) => false,
            };
            clean.push(is_clean);
        }
        Ok(clean)
    }
}
