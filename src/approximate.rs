// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::algorithms::{mediant_search, Search};
use crate::{Error, RationalApproximation, DEFAULT_MAX_DENOMINATOR};

/// 2^63, the first magnitude outside the range of `i64`.
const WHOLE_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Converts a fractional value (e.g. `44.25`) into a whole part and the
/// simplest fraction (`44 1/4`) with a denominator of at most one
/// million.
pub fn approximate(value: f64) -> Result<RationalApproximation, Error> {
    decompose(value, DEFAULT_MAX_DENOMINATOR)
}

/// Like [`approximate`], with an explicit bound on the denominator.
/// Smaller bounds give coarser, simpler fractions.
pub fn approximate_with(
    value: f64,
    max_denominator: u64,
) -> Result<RationalApproximation, Error> {
    decompose(value, max_denominator)
}

/// Rational approximation as a method on floating point numbers.
///
/// ```rust
/// use rink_rational::Rationalize;
/// # fn main() -> Result<(), rink_rational::Error> {
/// assert_eq!(4.25f32.rational_value()?.to_string(), "4 1/4");
/// assert_eq!(0.3f64.rational(3)?.to_string(), "1/3");
/// # Ok(())
/// # }
/// ```
pub trait Rationalize {
    fn rational(self, max_denominator: u64) -> Result<RationalApproximation, Error>;

    fn rational_value(self) -> Result<RationalApproximation, Error>
    where
        Self: Sized,
    {
        self.rational(DEFAULT_MAX_DENOMINATOR)
    }
}

impl Rationalize for f64 {
    fn rational(self, max_denominator: u64) -> Result<RationalApproximation, Error> {
        decompose(self, max_denominator)
    }
}

impl Rationalize for f32 {
    fn rational(self, max_denominator: u64) -> Result<RationalApproximation, Error> {
        decompose(f64::from(self), max_denominator)
    }
}

pub(crate) fn decompose(
    value: f64,
    max_denominator: u64,
) -> Result<RationalApproximation, Error> {
    if !value.is_finite() {
        return Err(Error::NonFinite(value));
    }
    if max_denominator == 0 {
        return Err(Error::ZeroMaxDenominator);
    }

    let magnitude = value.abs();
    let (whole, remainder) = if magnitude >= 1.0 {
        let truncated = value.trunc();
        if truncated < -WHOLE_LIMIT || truncated >= WHOLE_LIMIT {
            return Err(Error::WholeOutOfRange(value));
        }
        (truncated as i64, magnitude - truncated.abs())
    } else {
        (0, magnitude)
    };

    let Search { best, rounds } = mediant_search(remainder, max_denominator);

    // The search may settle on the upper bracket 1/1 for values just
    // below the next integer.
    let (whole, numerator, denominator) = if best.numer == best.denom {
        let carry = if value < 0.0 { -1 } else { 1 };
        let whole = whole
            .checked_add(carry)
            .ok_or(Error::WholeOutOfRange(value))?;
        (whole, 0, 1)
    } else {
        (whole, best.numer, best.denom)
    };

    let res = RationalApproximation::new(value, whole, numerator, denominator);
    log::debug!(
        "approximated {} as {} (max denominator {}, {} rounds)",
        value,
        res,
        max_denominator,
        rounds
    );
    Ok(res)
}
