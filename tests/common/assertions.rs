//! Test assertion helpers
//!
//! Provides utilities for robust test assertions, particularly for
//! floating-point comparisons that may vary slightly across platforms.

/// Assert that two floating-point values are approximately equal
///
/// Use this instead of `assert_eq!` for f64 comparisons to avoid
/// floating-point precision issues.
///
/// # Arguments
/// * `actual` - The actual value
/// * `expected` - The expected value
/// * `epsilon` - Maximum allowed difference
#[allow(dead_code)]
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Float values not approximately equal:\n  actual: {}\n  expected: {}\n  diff: {} (epsilon: {})",
        actual, expected, diff, epsilon
    );
}
