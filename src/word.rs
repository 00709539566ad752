//! The public symbol type a [`Codec`](crate::codec::Codec) is generic over.
//!
//! A codec instance exposes exactly one symbol width: `u8` for fields with
//! `m <= 8` and `u16` for `m > 8`. Internally all arithmetic happens in
//! `u16` (the widest width supported, since `m <= 16`); `Word` is
//! purely the conversion at the public-API boundary, so there is never a
//! runtime-switched container involved.

use core::convert::TryFrom;

/// A symbol type usable as a `Codec`'s public element type.
pub trait Word: Copy + Default + core::fmt::Debug {
    /// Widen to the internal field-element representation.
    fn to_elem(self) -> u16;

    /// Narrow from the internal field-element representation.
    ///
    /// Returns `None` if `elem` doesn't fit in `Self`, which can only
    /// happen if a caller mixes a narrower `Word` with a wider field than
    /// it was built for.
    fn from_elem(elem: u16) -> Option<Self>;
}

impl Word for u8 {
    #[inline]
    fn to_elem(self) -> u16 {
        u16::from(self)
    }

    #[inline]
    fn from_elem(elem: u16) -> Option<Self> {
        u8::try_from(elem).ok()
    }
}

impl Word for u16 {
    #[inline]
    fn to_elem(self) -> u16 {
        self
    }

    #[inline]
    fn from_elem(elem: u16) -> Option<Self> {
        Some(elem)
    }
}
