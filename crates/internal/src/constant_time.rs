//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slices of different
/// lengths compare unequal immediately; lengths are not secret.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time equality of two bytes as a `Choice`
#[inline]
pub fn ct_eq_u8(a: u8, b: u8) -> Choice {
    a.ct_eq(&b)
}

/// Constant-time check that `lo <= x <= hi`
#[inline]
pub fn ct_in_range_u8(x: u8, lo: u8, hi: u8) -> Choice {
    !x.ct_lt(&lo) & !x.ct_gt(&hi)
}
