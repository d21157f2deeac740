//! Overflow-safe modular arithmetic over `i64`.
//!
//! The power-sum query multiplies values that may sit anywhere in `i64`
//! under a caller-chosen modulus, so a plain `a * b % m` would overflow.
//! [`mul_mod`] uses Russian-peasant (binary) multiplication whose additions
//! and doublings are all subtraction-based, so intermediates never leave
//! `[0, m)` and no integer type wider than the operands is needed.
//!
//! All functions require `modulus > 0`; the public query API validates this
//! before reaching here, and the functions `debug_assert!` it.

/// Reduce `x` into `[0, modulus)`, correctly handling negative inputs.
pub fn norm_mod(x: i64, modulus: i64) -> i64 {
    debug_assert!(modulus > 0);
    let r = x % modulus;
    if r < 0 {
        r + modulus
    } else {
        r
    }
}

/// Compute `(a * b) mod modulus` without a wider accumulator type.
///
/// Binary multiplication: for each set bit of `b`, add the current `a`
/// into the accumulator, then double `a` under the modulus. Both operands
/// are normalized first, so negative inputs are fine.
pub fn mul_mod(mut a: i64, mut b: i64, modulus: i64) -> i64 {
    debug_assert!(modulus > 0);
    a = norm_mod(a, modulus);
    b = norm_mod(b, modulus);

    let mut res = 0i64;
    while b > 0 {
        if b & 1 == 1 {
            // res = (res + a) % modulus without signed overflow.
            if res >= modulus - a {
                res -= modulus - a;
            } else {
                res += a;
            }
        }
        // a = (2 * a) % modulus without signed overflow.
        if a >= modulus - a {
            a -= modulus - a;
        } else {
            a += a;
        }
        b >>= 1;
    }
    res
}

/// Compute `base^exp mod modulus` by binary exponentiation.
///
/// The accumulator starts at `1 % modulus`, so `exp == 0` yields
/// `1 mod modulus` (which is `0` when `modulus == 1`).
pub fn pow_mod(mut base: i64, mut exp: u64, modulus: i64) -> i64 {
    debug_assert!(modulus > 0);
    let mut res = 1 % modulus;
    base = norm_mod(base, modulus);
    while exp > 0 {
        if exp & 1 == 1 {
            res = mul_mod(res, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    res
}
