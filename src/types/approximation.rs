// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::Error;
use num::{BigInt, BigRational};
use serde_derive::Serialize;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// A floating point value split into a whole part and a proper fraction,
/// e.g. `44.25` as `44 1/4`.
///
/// The numerator and denominator are never negative. The sign is carried
/// by `whole` when the value's magnitude is at least one, and otherwise
/// only by `fraction` (see [`RationalApproximation::is_negative`]).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RationalApproximation {
    fraction: f64,
    whole: i64,
    numerator: u64,
    denominator: u64,
}

impl RationalApproximation {
    pub(crate) fn new(
        fraction: f64,
        whole: i64,
        numerator: u64,
        denominator: u64,
    ) -> RationalApproximation {
        debug_assert!(numerator < denominator);
        RationalApproximation {
            fraction,
            whole,
            numerator,
            denominator,
        }
    }

    /// The value this approximation was made from.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Integer part, truncated toward zero.
    pub fn whole(&self) -> i64 {
        self.whole
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Always at least 1.
    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Whether the original value was negative. For values between -1 and
    /// 0 this is the only place the sign survives, since `whole` is zero.
    pub fn is_negative(&self) -> bool {
        self.fraction < 0.0
    }

    /// The approximated value, `whole + numerator / denominator` with the
    /// original sign.
    pub fn value(&self) -> f64 {
        let magnitude =
            self.whole.unsigned_abs() as f64 + self.numerator as f64 / self.denominator as f64;
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Absolute difference between the approximation and the original value.
    pub fn error(&self) -> f64 {
        (self.value() - self.fraction).abs()
    }

    /// The approximation as an exact rational number.
    pub fn to_ratio(&self) -> BigRational {
        let whole = BigRational::from_integer(BigInt::from(self.whole.unsigned_abs()));
        let part = BigRational::new(BigInt::from(self.numerator), BigInt::from(self.denominator));
        let magnitude = whole + part;
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl fmt::Display for RationalApproximation {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if self.whole != 0 {
            write!(
                fmt,
                "{} {}/{}",
                self.whole, self.numerator, self.denominator
            )
        } else if self.is_negative() && self.numerator != 0 {
            write!(fmt, "-{}/{}", self.numerator, self.denominator)
        } else {
            write!(fmt, "{}/{}", self.numerator, self.denominator)
        }
    }
}

fn parse_digits(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_whole(text: &str) -> Option<i64> {
    match text.strip_prefix('-') {
        Some(digits) => i64::try_from(-i128::from(parse_digits(digits)?)).ok(),
        None => i64::try_from(parse_digits(text)?).ok(),
    }
}

/// Parses the canonical form produced by `Display`: `"11 14/125"`,
/// `"-3 501/5005"`, `"1/3"` or `"-1/2"`.
impl FromStr for RationalApproximation {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        let malformed = |reason| Error::Malformed {
            input: input.to_owned(),
            reason,
        };

        let (whole, rest) = match input.split_once(' ') {
            Some((whole, rest)) => {
                let whole = parse_whole(whole).ok_or_else(|| malformed("invalid whole part"))?;
                if whole == 0 {
                    return Err(malformed("whole part of zero must be omitted"));
                }
                (whole, rest)
            }
            None => (0, input),
        };
        let (negative, rest) = match rest.strip_prefix('-') {
            Some(rest) if whole == 0 => (true, rest),
            _ => (whole < 0, rest),
        };

        let (numerator, denominator) = rest
            .split_once('/')
            .ok_or_else(|| malformed("expected numerator/denominator"))?;
        let numerator = parse_digits(numerator).ok_or_else(|| malformed("invalid numerator"))?;
        let denominator =
            parse_digits(denominator).ok_or_else(|| malformed("invalid denominator"))?;
        if denominator == 0 {
            return Err(malformed("denominator is zero"));
        }
        if numerator >= denominator {
            return Err(malformed("fraction is not proper"));
        }
        if negative && whole == 0 && numerator == 0 {
            return Err(malformed("zero has no sign"));
        }

        let magnitude = whole.unsigned_abs() as f64 + numerator as f64 / denominator as f64;
        let fraction = if negative { -magnitude } else { magnitude };
        Ok(RationalApproximation::new(
            fraction,
            whole,
            numerator,
            denominator,
        ))
    }
}
