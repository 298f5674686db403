//! # Random Number Helpers
//!
//! Range helpers on top of `rand`. Each helper has a `_with` variant that
//! takes the generator explicitly so callers (and tests) can use a seeded
//! `StdRng`; the plain variants draw from the thread-local generator.

use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
/// # Random Range Error
///
/// Errors raised while drawing a random integer from a range.
pub enum RandomRangeError {
    /// One of the bounds is NaN or infinite.
    #[error("range bounds must be finite (min: {min}, max: {max})")]
    NonFiniteBound {
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },

    /// The drawn value does not fit in an `i64`.
    #[error("random value {0} does not fit in an i64")]
    OutOfRange(f64),
}

/// Returns a random float between `min` (inclusive) and `max` (exclusive).
///
/// Equal bounds return `min`. Reversed bounds are not an error; the result
/// then lies in `(max, min]`.
pub fn get_random_number(min: f64, max: f64) -> f64 {
    get_random_number_with(&mut rand::rng(), min, max)
}

/// Same as [`get_random_number`], drawing from `rng`.
pub fn get_random_number_with<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.random::<f64>() * (max - min) + min
}

/// # Get Random Int
///
/// Returns a random integer between `min` (inclusive) and `max` (exclusive).
/// `min` is rounded up and `max` rounded down before drawing. When the rounded
/// bounds coincide the result is that bound.
///
/// # Errors
/// See [`get_random_int_with`].
pub fn get_random_int(min: f64, max: f64) -> Result<i64, RandomRangeError> {
    get_random_int_with(&mut rand::rng(), min, max)
}

/// # Get Random Int With
///
/// Same as [`get_random_int`], drawing from `rng`.
///
/// # Errors
/// * [`RandomRangeError::NonFiniteBound`] if either bound is NaN or infinite.
/// * [`RandomRangeError::OutOfRange`] if the drawn value overflows `i64`.
pub fn get_random_int_with<R: Rng>(
    rng: &mut R,
    min: f64,
    max: f64,
) -> Result<i64, RandomRangeError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(RandomRangeError::NonFiniteBound { min, max });
    }
    let local_min = min.ceil();
    let local_max = max.floor();
    let value = (rng.random::<f64>() * (local_max - local_min) + local_min).floor();

    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(RandomRangeError::OutOfRange(value));
    }
    Ok(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_number_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let n = get_random_number_with(&mut rng, -2.5, 4.0);
            assert!((-2.5..4.0).contains(&n), "out of range: {}", n);
        }
    }

    #[test]
    fn test_random_number_equal_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(get_random_number_with(&mut rng, 3.0, 3.0), 3.0);
    }

    #[test]
    fn test_random_int_min_inclusive_max_exclusive() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 5];
        for _ in 0..2_000 {
            let n = get_random_int_with(&mut rng, 0.2, 5.9).unwrap();
            // ceil(0.2) = 1, floor(5.9) = 5
            assert!((1..5).contains(&n), "out of range: {}", n);
            seen[n as usize] = true;
        }
        assert_eq!(seen, [false, true, true, true, true]);
    }

    #[test]
    fn test_random_int_collapsed_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(get_random_int_with(&mut rng, 2.0, 2.0), Ok(2));
        assert_eq!(get_random_int_with(&mut rng, 1.5, 2.5), Ok(2));
    }

    #[test]
    fn test_random_int_rejects_bad_bounds() {
        assert!(matches!(
            get_random_int(f64::NAN, 1.0),
            Err(RandomRangeError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            get_random_int(0.0, f64::INFINITY),
            Err(RandomRangeError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            get_random_int(1e300, 1e300),
            Err(RandomRangeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_thread_rng_helpers() {
        let n = get_random_number(10.0, 20.0);
        assert!((10.0..20.0).contains(&n));
        let i = get_random_int(-3.0, 3.0).unwrap();
        assert!((-3..3).contains(&i));
    }
}
