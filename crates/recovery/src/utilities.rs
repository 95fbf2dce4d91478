//! Byte helpers for big-endian integer encodings.
use std::borrow::Cow;

/// Strips leading zero bytes from a big-endian encoding.
///
/// An all-zero (or empty) input yields an empty slice.
#[inline]
pub fn trim_leading_zeros(data: &[u8]) -> &[u8] {
    let first = data.iter().position(|&b| b != 0).unwrap_or(data.len());
    &data[first..]
}

/// Left-pads the given slice with zeroes until `LEN`.
///
/// Returns `None` if `data` is longer than `LEN`.
#[inline]
pub fn left_pad<const LEN: usize>(data: &[u8]) -> Option<Cow<'_, [u8; LEN]>> {
    if data.len() > LEN {
        return None;
    }
    if let Ok(exact) = <&[u8; LEN]>::try_from(data) {
        return Some(Cow::Borrowed(exact));
    }
    let mut padded = [0; LEN];
    padded[LEN - data.len()..].copy_from_slice(data);
    Some(Cow::Owned(padded))
}

/// Interprets a big-endian encoding of at most four significant bytes as a `u32`.
///
/// Leading zero bytes are ignored. Returns `None` if the value does not fit.
#[inline]
pub fn be_bytes_to_u32(data: &[u8]) -> Option<u32> {
    let padded = left_pad::<4>(trim_leading_zeros(data))?;
    Some(u32::from_be_bytes(*padded))
}
