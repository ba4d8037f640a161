// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `rink_rational` turns decimal quantities into readable fractions.
//!
//! Scaling by a power of ten gives exact but unhelpful answers, such as
//! `333333/1000000` for `0.333333`. The functions here walk the
//! Stern-Brocot tree instead and stop at the simplest fraction within a
//! maximum denominator, which gives `1/3`.
//!
//! The value is split into an integer whole part and a proper fraction
//! for the remainder.
//!
//! ## Example
//!
//! ```rust
//! # fn main() -> Result<(), rink_rational::Error> {
//! let res = rink_rational::approximate(-3.1000999)?;
//! assert_eq!(res.whole(), -3);
//! assert_eq!((res.numerator(), res.denominator()), (501, 5005));
//! assert_eq!(res.to_string(), "-3 501/5005");
//!
//! // A smaller bound gives a coarser fraction.
//! let res = rink_rational::approximate_with(11.112, 10)?;
//! assert_eq!(res.to_string(), "11 1/9");
//! # Ok(())
//! # }
//! ```
//!
//! Non-finite input and a maximum denominator of zero are rejected with
//! an [`Error`] before any work is done.

mod algorithms;
mod approximate;
mod error;
mod options;
mod types;

pub use crate::approximate::{approximate, approximate_with, Rationalize};
pub use crate::error::Error;
pub use crate::options::{Options, DEFAULT_MAX_DENOMINATOR};
pub use crate::types::RationalApproximation;
