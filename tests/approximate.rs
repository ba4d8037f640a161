// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use rink_rational::*;

fn check(value: f64, whole: i64, numerator: u64, denominator: u64, text: &str) {
    let res = approximate(value).unwrap();
    assert_eq!(res.fraction(), value);
    assert_eq!(res.whole(), whole, "whole part of {}", value);
    assert_eq!(res.numerator(), numerator, "numerator of {}", value);
    assert_eq!(res.denominator(), denominator, "denominator of {}", value);
    similar_asserts::assert_eq!(res.to_string().as_str(), text);
}

#[test]
fn test_third() {
    check(0.333333333, 0, 1, 3, "1/3");
}

#[test]
fn test_quarter() {
    check(4.25, 4, 1, 4, "4 1/4");
}

#[test]
fn test_negative() {
    check(-3.1000999, -3, 501, 5005, "-3 501/5005");
    check(-9.90, -9, 9, 10, "-9 9/10");
}

#[test]
fn test_thousandths() {
    check(11.112, 11, 14, 125, "11 14/125");
}

#[test]
fn test_zero() {
    check(0.0, 0, 0, 1, "0/1");
    check(-0.0, 0, 0, 1, "0/1");
}

#[test]
fn test_integers() {
    check(2.0, 2, 0, 1, "2 0/1");
    check(-1.0, -1, 0, 1, "-1 0/1");
}

#[test]
fn test_negative_sub_unity() {
    let pos = approximate(0.5).unwrap();
    let neg = approximate(-0.5).unwrap();
    assert_eq!(neg.whole(), 0);
    assert_eq!(
        (neg.numerator(), neg.denominator()),
        (pos.numerator(), pos.denominator())
    );
    assert!(neg.is_negative());
    assert!(!pos.is_negative());
    assert_eq!(neg.to_string(), "-1/2");
    assert_eq!(neg.value(), -0.5);

    check(-0.75, 0, 3, 4, "-3/4");
}

#[test]
fn test_bound_of_one() {
    let res = approximate_with(0.5, 1).unwrap();
    assert_eq!(res.whole(), 0);
    assert_eq!(res.numerator(), 0);
    assert_eq!(res.denominator(), 1);
    assert_eq!(res.to_string(), "0/1");
}

#[test]
fn test_coarse_bounds() {
    assert_eq!(approximate_with(11.112, 10).unwrap().to_string(), "11 1/9");
    assert_eq!(
        approximate_with(std::f64::consts::PI, 100).unwrap().to_string(),
        "3 1/7"
    );
    assert_eq!(
        approximate_with(std::f64::consts::PI, 1000)
            .unwrap()
            .to_string(),
        "3 16/113"
    );
}

#[test]
fn test_call_forms_agree() {
    for &value in &[0.333333333f64, 4.25, -3.1000999, 11.112, -0.2] {
        let expected = approximate(value).unwrap();
        assert_eq!(approximate_with(value, DEFAULT_MAX_DENOMINATOR).unwrap(), expected);
        assert_eq!(value.rational_value().unwrap(), expected);
        assert_eq!(Options::default().approximate(value).unwrap(), expected);
    }
    assert_eq!(
        Options::with_max_denominator(10).approximate(11.112).unwrap(),
        approximate_with(11.112, 10).unwrap()
    );
}

#[test]
fn test_invalid_arguments() {
    for &value in &[f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = approximate(value).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(err, Error::NonFinite(_)));
    }
    assert_eq!(approximate_with(4.25, 0), Err(Error::ZeroMaxDenominator));
    assert_eq!(
        Options::with_max_denominator(0).approximate(4.25),
        Err(Error::ZeroMaxDenominator)
    );
}

/// Deterministic spread of values over (-50, 50).
fn sample_values() -> impl Iterator<Item = f64> {
    (0..400).map(|i| (i as f64 * 0.754_877_666_246_692_7).fract() * 100.0 - 50.0)
}

const BOUNDS: [u64; 11] = [1, 2, 3, 5, 7, 10, 16, 100, 1000, 12345, 1_000_000];

#[test]
fn test_proper_fractions() {
    for value in sample_values() {
        for &bound in &BOUNDS {
            let res = approximate_with(value, bound).unwrap();
            assert!(res.denominator() >= 1);
            assert!(res.denominator() <= bound);
            assert!(
                res.numerator() < res.denominator(),
                "{} with bound {} gave {}",
                value,
                bound,
                res
            );
            if res.whole() != 0 {
                assert_eq!(res.whole() < 0, value < 0.0);
            }
        }
    }
}

#[test]
fn test_error_bound() {
    // The answer is one end of a Farey interval of width 1/(d * d'),
    // where d + d' exceeds the bound.
    for value in sample_values() {
        for &bound in &BOUNDS {
            let res = approximate_with(value, bound).unwrap();
            let d = res.denominator() as f64;
            let limit = 1.0 / (d * (bound as f64 + 1.0 - d));
            assert!(
                res.error() <= limit + 1e-12,
                "{} with bound {} gave {}, off by {}",
                value,
                bound,
                res,
                res.error()
            );
        }
    }
}

#[test]
fn test_error_shrinks_with_bound() {
    let values = [
        0.3,
        0.25,
        std::f64::consts::PI - 3.0,
        0.618_033_988_749_894_9,
        0.1,
        2.0 / 7.0,
        0.999,
        1e-9,
        0.123456789,
        std::f64::consts::E - 2.0,
        7.875,
        -2.2,
    ];
    for &value in &values {
        let mut prev = f64::INFINITY;
        for bound in 1..=500 {
            let err = approximate_with(value, bound).unwrap().error();
            assert!(
                err <= prev + 1e-15,
                "error for {} grew at bound {}",
                value,
                bound
            );
            prev = err;
        }
    }
}

#[test]
fn test_large_bounds() {
    let res = approximate_with(0.5, 1 << 31).unwrap();
    assert_eq!((res.numerator(), res.denominator()), (1, 2));
    let res = approximate_with(0.25, u64::MAX).unwrap();
    assert!(res.numerator() < res.denominator());
    assert!(res.error() < 1e-15);
}

#[test]
fn test_concurrent_callers() {
    let handles = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let value = i as f64 + 0.25;
                approximate(value).unwrap()
            })
        })
        .collect::<Vec<_>>();
    for (i, handle) in handles.into_iter().enumerate() {
        let res = handle.join().unwrap();
        assert_eq!(res.whole(), i as i64);
        assert_eq!((res.numerator(), res.denominator()), (1, 4));
    }
}
