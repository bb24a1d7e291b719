//! Exact integer helpers used by the area and primitivity checks.

/// Greatest common divisor (Euclid).
///
/// `gcd(0, n) == n`, so zero acts as the identity.
#[inline]
pub fn gcd(mut x: u32, mut y: u32) -> u32 {
    while y != 0 {
        let r = x % y;
        x = y;
        y = r;
    }
    x
}

/// Greatest common divisor of three values, `gcd(gcd(x, y), z)`.
///
/// The result does not depend on argument order.
#[inline]
pub fn gcd3(x: u32, y: u32, z: u32) -> u32 {
    gcd(gcd(x, y), z)
}

/// Floor of the square root of `n`.
///
/// Newton iteration seeded from a power of two at or above the root, so the
/// sequence decreases monotonically and stops at the floor.
pub fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let bits = 128 - n.leading_zeros();
    let mut x: u128 = 1 << bits.div_ceil(2);
    let mut y = (x + n / x) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Returns the exact square root of `n` when `n` is a perfect square.
#[inline]
pub fn exact_sqrt(n: u128) -> Option<u128> {
    let r = isqrt(n);
    (r * r == n).then_some(r)
}
