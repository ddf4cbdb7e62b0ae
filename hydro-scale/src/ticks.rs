//! Human-friendly tick spacing (1, 2 or 5 times a power of ten).

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Step between roughly `count` ticks covering `[start, stop]`.
///
/// Returns 0.0 when the interval is empty or not finite.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let span = (stop - start).abs();
    if count == 0 || !span.is_finite() || span == 0.0 {
        return 0.0;
    }
    let raw = span / count as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Tick values inside `[start, stop]`, in the same direction as the input.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if start == stop && start.is_finite() && count > 0 {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let step = tick_step(lo, hi, count);
    if step == 0.0 {
        return Vec::new();
    }

    let mut values = if step >= 1.0 {
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect::<Vec<_>>()
    } else {
        // divide by the inverse step so 0.1 * 3 prints as 0.3
        let inverse = (1.0 / step).round();
        let first = (lo * inverse).ceil() as i64;
        let last = (hi * inverse).floor() as i64;
        (first..=last).map(|i| i as f64 / inverse).collect::<Vec<_>>()
    };
    if reverse {
        values.reverse();
    }
    values
}
