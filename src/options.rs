// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::approximate::decompose;
use crate::{Error, RationalApproximation};
use serde_derive::{Deserialize, Serialize};

/// Bound used by [`crate::approximate`] and [`Options::default`].
pub const DEFAULT_MAX_DENOMINATOR: u64 = 1_000_000;

/// Approximation settings, suitable for embedding as a section in an
/// application's config file.
///
/// ```toml
/// max_denominator = 64
/// ```
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Largest denominator an approximation may use. Must be at least 1.
    pub max_denominator: u64,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_denominator: DEFAULT_MAX_DENOMINATOR,
        }
    }
}

impl Options {
    pub fn with_max_denominator(max_denominator: u64) -> Options {
        Options { max_denominator }
    }

    pub fn approximate(&self, value: f64) -> Result<RationalApproximation, Error> {
        decompose(value, self.max_denominator)
    }
}
