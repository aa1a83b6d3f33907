//! Rational approximation of floats
//!
//! Photo metadata stores GPS values as unsigned rationals. This module finds
//! the best rational approximation of a float with a bounded denominator
//! using continued-fraction limiting.

use crate::constants::metadata::MAX_DENOMINATOR;
use serde::{Deserialize, Serialize};

/// An unsigned rational number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rational {
    pub numerator: u64,
    pub denominator: u64,
}

impl Rational {
    /// Create a new rational
    pub fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// A whole number over one
    pub fn whole(value: u64) -> Self {
        Self::new(value, 1)
    }

    /// Convert back to a float
    pub fn to_f64(&self) -> f64 {
        if self.denominator == 0 {
            return 0.0;
        }
        self.numerator as f64 / self.denominator as f64
    }
}

impl std::fmt::Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Best rational approximation of `abs(value)` with denominator <= 99999
///
/// Non-finite input yields `0/1`.
pub fn float_to_rational(value: f64) -> Rational {
    limit_denominator(value, MAX_DENOMINATOR)
}

/// Best rational approximation of `abs(value)` with denominator <= `max_denominator`
///
/// # Algorithm
/// Walks the continued-fraction expansion of the value, keeping the last two
/// convergents `p0/q0` and `p1/q1`. When the next convergent would exceed the
/// denominator bound, the answer is whichever is closer of the last
/// convergent and the largest admissible semiconvergent. Ties go to the
/// convergent.
pub fn limit_denominator(value: f64, max_denominator: u64) -> Rational {
    let x = value.abs();
    if !x.is_finite() || max_denominator == 0 {
        return Rational::new(0, 1);
    }

    let (mut p0, mut q0, mut p1, mut q1) = (0u64, 1u64, 1u64, 0u64);
    let mut frac = x;

    loop {
        let a = frac.floor();
        let a_int = a as u64;

        let q2 = a_int.checked_mul(q1).and_then(|v| v.checked_add(q0));
        match q2 {
            Some(q2) if q2 <= max_denominator => {
                let p2 = p0.saturating_add(a_int.saturating_mul(p1));
                (p0, q0, p1, q1) = (p1, q1, p2, q2);
            }
            _ => {
                // q1 >= 1 here: the first step always has q2 == q0 == 1
                let k = (max_denominator - q0) / q1;
                let bound1 = Rational::new(p0 + k * p1, q0 + k * q1);
                let bound2 = Rational::new(p1, q1);
                let err1 = (bound1.to_f64() - x).abs();
                let err2 = (bound2.to_f64() - x).abs();
                return if err2 <= err1 { bound2 } else { bound1 };
            }
        }

        let rem = frac - a;
        if rem == 0.0 || p1 as f64 / q1 as f64 == x {
            return Rational::new(p1, q1);
        }
        frac = 1.0 / rem;
    }
}
