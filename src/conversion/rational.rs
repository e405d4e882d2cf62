//! Bounded-denominator rational approximation
//!
//! Finds the closest rational with a bounded denominator via the classic
//! continued-fraction construction, operating on the exact binary expansion
//! of the input float so that "nice" book prices round-trip exactly.

use num_rational::Rational64;

use crate::error::{OddsError, OddsResult};

/// Largest denominator considered when approximating a float as a fraction
pub const MAX_DENOMINATOR: i64 = 1000;

/// Return the closest rational to `value` with denominator at most
/// [`MAX_DENOMINATOR`].
///
/// Walks the convergents of the exact value until the denominator bound is
/// exceeded, then picks between the last convergent and the best
/// semiconvergent, preferring the convergent on exact ties.
pub fn limit_denominator(value: f64) -> OddsResult<Rational64> {
    approximate(value, MAX_DENOMINATOR)
}

fn approximate(value: f64, max_denominator: i64) -> OddsResult<Rational64> {
    if !value.is_finite() {
        return Err(OddsError::invalid_odds(format!(
            "Cannot approximate {} as a fraction",
            value
        )));
    }

    let (numer, denom) = integer_ratio(value).ok_or_else(|| {
        OddsError::invalid_odds(format!(
            "Odds value {} is out of range for rational approximation",
            value
        ))
    })?;

    let max_denominator = max_denominator as i128;
    if denom <= max_denominator {
        let numer = i64::try_from(numer).map_err(|_| {
            OddsError::invalid_odds(format!(
                "Odds value {} is out of range for rational approximation",
                value
            ))
        })?;
        return Ok(Rational64::new(numer, denom as i64));
    }

    // Convergents p0/q0, p1/q1 of the continued-fraction expansion
    let (mut p0, mut q0, mut p1, mut q1) = (0i128, 1i128, 1i128, 0i128);
    let (mut n, mut d) = (numer, denom);
    loop {
        let a = n.div_euclid(d);
        let q2 = q0 + a * q1;
        if q2 > max_denominator {
            break;
        }
        let p2 = p0 + a * p1;
        p0 = p1;
        q0 = q1;
        p1 = p2;
        q1 = q2;
        let r = n - a * d;
        n = d;
        d = r;
    }

    // Best semiconvergent under the bound, against the last full convergent
    let k = (max_denominator - q0) / q1;
    let semi = (p0 + k * p1, q0 + k * q1);
    let conv = (p1, q1);

    // Exact distance comparison by cross-multiplication
    let semi_error = (semi.0 * denom - numer * semi.1).abs() * conv.1;
    let conv_error = (conv.0 * denom - numer * conv.1).abs() * semi.1;
    let (best_numer, best_denom) = if conv_error <= semi_error { conv } else { semi };

    Ok(Rational64::new(best_numer as i64, best_denom as i64))
}

/// Decompose a finite f64 into an exact, reduced numerator/denominator pair.
///
/// The denominator is always a power of two. Magnitudes whose exact
/// denominator exceeds 2^64 are rounded to 64 fractional bits first; the
/// perturbation is far below anything that can move a best-approximation
/// choice under a four-digit denominator bound. Returns `None` when the
/// numerator cannot be represented.
fn integer_ratio(value: f64) -> Option<(i128, i128)> {
    let bits = value.to_bits();
    let negative = bits >> 63 == 1;
    let raw_exponent = ((bits >> 52) & 0x7ff) as i32;
    let raw_mantissa = (bits & ((1u64 << 52) - 1)) as i128;

    let (mut mantissa, mut exponent) = if raw_exponent == 0 {
        (raw_mantissa, -1074)
    } else {
        (raw_mantissa | (1i128 << 52), raw_exponent - 1075)
    };

    if mantissa == 0 {
        return Some((0, 1));
    }

    if exponent < 0 {
        let strip = (mantissa.trailing_zeros() as i32).min(-exponent);
        mantissa >>= strip;
        exponent += strip;
    }

    let signed = |n: i128| if negative { -n } else { n };

    if exponent >= 0 {
        // 53 mantissa bits plus this shift must stay inside i128
        if exponent > 73 {
            return None;
        }
        return Some((signed(mantissa << exponent), 1));
    }

    let scale = -exponent;
    if scale <= 64 {
        return Some((signed(mantissa), 1i128 << scale));
    }

    let extra = scale - 64;
    if extra > 54 {
        // Smaller than 2^-65: indistinguishable from zero under the bound
        return Some((0, 1));
    }
    let rounded = (mantissa + (1i128 << (extra - 1))) >> extra;
    if rounded == 0 {
        return Some((0, 1));
    }
    let strip = (rounded.trailing_zeros() as i32).min(64);
    Some((signed(rounded >> strip), 1i128 << (64 - strip)))
}
