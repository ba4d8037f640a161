// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use displaydoc::Display;
use thiserror::Error;

#[derive(Error, Display, Debug, Clone, PartialEq)]
pub enum Error {
    /// Cannot approximate non-finite value {0}
    NonFinite(f64),
    /// Maximum denominator must be at least 1
    ZeroMaxDenominator,
    /// Whole part of {0} does not fit in a 64-bit integer
    WholeOutOfRange(f64),
    /// Malformed fraction {input:?}: {reason}
    Malformed { input: String, reason: &'static str },
}

impl Error {
    /// True for errors caused by the arguments passed to an
    /// approximation call, as opposed to parse failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::NonFinite(_) | Error::ZeroMaxDenominator | Error::WholeOutOfRange(_)
        )
    }
}
