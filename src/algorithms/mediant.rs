// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// A non-negative fraction used as one of the two search brackets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Fraction {
    pub(crate) numer: u64,
    pub(crate) denom: u64,
}

impl Fraction {
    pub(crate) const ZERO: Fraction = Fraction { numer: 0, denom: 1 };
    pub(crate) const ONE: Fraction = Fraction { numer: 1, denom: 1 };

    /// Result of taking `steps` consecutive mediants with `toward`,
    /// i.e. `self + steps * toward` component-wise. Callers keep the
    /// resulting denominator within the search bound.
    fn walk(self, toward: Fraction, steps: u64) -> Fraction {
        Fraction {
            numer: self.numer + toward.numer * steps,
            denom: self.denom + toward.denom * steps,
        }
    }

    fn is_below(self, target: f64) -> bool {
        below(self.numer as u128, self.denom as u128, target)
    }
}

fn below(numer: u128, denom: u128, target: f64) -> bool {
    (numer as f64) < target * denom as f64
}

pub(crate) struct Search {
    pub(crate) best: Fraction,
    /// Number of passes through the main loop, each of which applies one
    /// run of same-direction mediant steps.
    pub(crate) rounds: u32,
}

/// Finds the simplest fraction approximating `target` (which lies in
/// `[0, 1)`) whose denominator does not exceed `max_denominator`.
///
/// This is the Stern-Brocot walk: keep `low <= target <= high`, replace
/// one side by the mediant `(low + high)` and continue until the mediant's
/// denominator passes the bound. The best answer is then whichever bracket
/// the final comparison did not replace.
///
/// Stepping one mediant at a time is linear in
/// `max_denominator / denominator` for targets close to a simple fraction,
/// so consecutive steps that move the same bracket are applied as one run.
/// Bracket denominators grow at least as fast as the Fibonacci numbers
/// across rounds.
pub(crate) fn mediant_search(target: f64, max_denominator: u64) -> Search {
    debug_assert!(max_denominator >= 1);
    debug_assert!((0.0..1.0).contains(&target));

    let mut low = Fraction::ZERO;
    let mut high = Fraction::ONE;
    let mut rounds = 0;
    loop {
        rounds += 1;
        // Formed wide so that brackets near u64::MAX can't overflow.
        let numer = low.numer as u128 + high.numer as u128;
        let denom = low.denom as u128 + high.denom as u128;
        let is_below = below(numer, denom, target);
        log::trace!(
            "round {}: {}/{} < x < {}/{}, mediant {}/{}",
            rounds,
            low.numer,
            low.denom,
            high.numer,
            high.denom,
            numer,
            denom
        );
        if denom > max_denominator as u128 {
            let best = if is_below { high } else { low };
            return Search { best, rounds };
        }
        if is_below {
            let steps = run_length(low, high, target, max_denominator, true);
            low = low.walk(high, steps);
        } else {
            let steps = run_length(high, low, target, max_denominator, false);
            high = high.walk(low, steps);
        }
    }
}

/// Largest `j` such that the first `j` mediants of `moving` with `fixed`
/// all compare against `target` the same way (`is_below`) and stay within
/// the bound. The first mediant is known to satisfy both.
fn run_length(
    moving: Fraction,
    fixed: Fraction,
    target: f64,
    max_denominator: u64,
    is_below: bool,
) -> u64 {
    let mut lo = 1;
    let mut hi = (max_denominator - moving.denom) / fixed.denom;
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if moving.walk(fixed, mid).is_below(target) == is_below {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}
