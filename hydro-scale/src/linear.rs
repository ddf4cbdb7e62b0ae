//! Affine scale between a numeric domain and a pixel range.

use crate::ticks;
use crate::Scale;
use serde::{Deserialize, Serialize};

const NICE_ITERATIONS: usize = 10;
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Linear mapping from `domain` onto `range`.
///
/// Either end of the domain or range may be the larger one, so a y axis
/// that grows upwards is simply `domain = [max, min]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
    round: bool,
    clamp: bool,
}

impl LinearScale {
    /// Create an unrounded, unclamped scale.
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self {
            domain,
            range,
            round: false,
            clamp: false,
        }
    }

    /// Round mapped output to whole pixels.
    pub fn round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Restrict mapped output to the range.
    pub fn clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Map a domain value to the range.
    ///
    /// A zero-width domain maps everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let mut t = normalize(value, self.domain);
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        let out = interpolate(t, self.range);
        if self.round {
            out.round()
        } else {
            out
        }
    }

    /// Map a range coordinate back into the domain.
    pub fn invert(&self, px: f64) -> f64 {
        let mut t = normalize(px, self.range);
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        interpolate(t, self.domain)
    }

    /// Roughly `count` evenly spaced, human-friendly values in the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks::ticks(self.domain[0], self.domain[1], count)
    }

    /// Extend the domain outwards to tick boundaries.
    pub fn nice(self) -> Self {
        self.nice_with(DEFAULT_TICK_COUNT)
    }

    pub fn nice_with(mut self, count: usize) -> Self {
        let reverse = self.domain[1] < self.domain[0];
        let (mut lo, mut hi) = if reverse {
            (self.domain[1], self.domain[0])
        } else {
            (self.domain[0], self.domain[1])
        };
        let mut previous = None;
        for _ in 0..NICE_ITERATIONS {
            let step = ticks::tick_step(lo, hi, count);
            if step == 0.0 || previous == Some(step) {
                break;
            }
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
            previous = Some(step);
        }
        self.domain = if reverse { [hi, lo] } else { [lo, hi] };
        self
    }
}

impl Scale for LinearScale {
    type Domain = f64;

    fn map(&self, value: &f64) -> f64 {
        LinearScale::map(self, *value)
    }

    fn invert(&self, px: f64) -> Option<f64> {
        Some(LinearScale::invert(self, px))
    }
}

fn normalize(value: f64, [a, b]: [f64; 2]) -> f64 {
    let span = b - a;
    if span == 0.0 {
        0.5
    } else {
        (value - a) / span
    }
}

fn interpolate(t: f64, [a, b]: [f64; 2]) -> f64 {
    a + t * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_and_inverts() {
        let scale = LinearScale::new([0.0, 100.0], [0.0, 500.0]);
        assert_eq!(scale.map(50.0), 250.0);
        assert_eq!(scale.invert(250.0), 50.0);
    }

    #[test]
    fn reversed_domain_flips_output() {
        let scale = LinearScale::new([10.0, 0.0], [0.0, 200.0]);
        assert_eq!(scale.map(10.0), 0.0);
        assert_eq!(scale.map(0.0), 200.0);
        assert_eq!(scale.map(2.5), 150.0);
    }

    #[test]
    fn rounding_is_opt_in() {
        let scale = LinearScale::new([0.0, 3.0], [0.0, 10.0]);
        assert!((scale.map(1.0) - 3.333_333).abs() < 1e-5);
        assert_eq!(scale.round(true).map(1.0), 3.0);
    }

    #[test]
    fn clamp_limits_output() {
        let scale = LinearScale::new([0.0, 10.0], [0.0, 100.0]).clamp(true);
        assert_eq!(scale.map(20.0), 100.0);
        assert_eq!(scale.map(-5.0), 0.0);
        assert_eq!(scale.invert(150.0), 10.0);
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new([4.0, 4.0], [0.0, 100.0]);
        assert_eq!(scale.map(4.0), 50.0);
        assert_eq!(scale.map(1000.0), 50.0);
        assert_eq!(scale.invert(10.0), 4.0);
    }

    #[test]
    fn nice_extends_domain() {
        let scale = LinearScale::new([0.3, 9.6], [0.0, 100.0]).nice();
        assert_eq!(scale.domain(), [0.0, 10.0]);

        let flipped = LinearScale::new([96.0, 3.0], [0.0, 100.0]).nice();
        assert_eq!(flipped.domain(), [100.0, 0.0]);
    }

    #[test]
    fn ticks_follow_domain() {
        let scale = LinearScale::new([0.0, 1.0], [0.0, 100.0]);
        assert_eq!(scale.ticks(5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }
}
