//! Arithmetic over GF(2^8) with the AES reduction polynomial.
//!
//! Everything here is a `const fn` so the substitution tables and round
//! constants can be computed at compile time.

/// Multiplies a field element by `x` (0x02), reducing modulo
/// x^8 + x^4 + x^3 + x + 1.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

/// Multiplies two bytes as polynomials over GF(2^8), reduced modulo 0x11b.
///
/// Total function; there are no error cases.
pub const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let hi_bit_set = a & 0x80;
        a <<= 1;
        if hi_bit_set != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
        i += 1;
    }
    product
}

/// Multiplicative inverse in GF(2^8); 0 maps to 0, matching the S-box
/// construction in FIPS-197.
pub const fn gf_inv(x: u8) -> u8 {
    // x^254 = x^2 * x^4 * ... * x^128. Every factor is zero when x is zero,
    // so the 0 -> 0 convention falls out of the chain without a special case.
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    gf_mul(y, x2)
}
