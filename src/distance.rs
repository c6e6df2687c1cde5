//! Scalar distance metrics between points given as coordinate slices.
//!
//! A point is an ordered slice of `f64` coordinates. [`manhattan_distance`]
//! and [`euclidean_distance`] accept slices of any (possibly differing)
//! lengths: when one point is shorter, its missing trailing coordinates are
//! treated as 0. [`octagonal_distance`] is a fast integer approximation that
//! only exists in 2D and rejects anything else with
//! [`InvalidDimensionError`].

use std::fmt;

/// Pair up coordinates index by index, treating missing trailing
/// coordinates of the shorter point as 0.
fn padded_pairs<'a>(x: &'a [f64], y: &'a [f64]) -> impl Iterator<Item = (f64, f64)> + 'a {
    (0..x.len().max(y.len())).map(move |i| {
        (
            x.get(i).copied().unwrap_or(0.0),
            y.get(i).copied().unwrap_or(0.0),
        )
    })
}

/// Manhattan (L1) distance between two points.
///
/// The shorter point is zero-padded, so differing lengths are not an error.
#[inline]
pub fn manhattan_distance(x: &[f64], y: &[f64]) -> f64 {
    padded_pairs(x, y).map(|(a, b)| (a - b).abs()).sum()
}

/// Euclidean (L2) distance between two points.
///
/// The shorter point is zero-padded, so differing lengths are not an error.
#[inline]
pub fn euclidean_distance(x: &[f64], y: &[f64]) -> f64 {
    padded_pairs(x, y)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}

/// Fast octagonal approximation of the Euclidean distance, 2D only.
///
/// Coordinate differences are truncated to integers, scaled by 1024,
/// combined with a linear correction term and rounded back down. The
/// truncation means fractional coordinates lose precision in this metric
/// (unlike [`manhattan_distance`] and [`euclidean_distance`]); callers
/// needing sub-cell precision should use one of those instead.
///
/// See: <http://www.flipcode.com/archives/Fast_Approximate_Distance_Functions.shtml>
pub fn octagonal_distance(x: &[f64], y: &[f64]) -> Result<f64, InvalidDimensionError> {
    check_2d("x", x)?;
    check_2d("y", y)?;
    let diff0 = (x[0] - y[0]).abs() as i64;
    let diff1 = (x[1] - y[1]).abs() as i64;
    let max_diff = diff0.max(diff1);
    let min_diff = diff0.min(diff1);
    // Fixed-point weights at scale 1024; the 40/1024 term trims the
    // overestimate when the two differences are close.
    let approximation = max_diff * 1007 + min_diff * 441;
    let correction = if max_diff < (min_diff << 4) {
        max_diff * 40
    } else {
        0
    };
    let corrected = approximation - correction;
    // Round to nearest by adding half a unit before the fixed-point shift.
    Ok(((corrected + 512) >> 10) as f64)
}

/// Scale applied to the logarithm of the underlying distance.
const LOG_SCALE: f64 = 6.0;

/// Substitute for a zero distance so the logarithm stays finite.
const MIN_DISTANCE: f64 = 1e-10;

/// Logarithmic distance over the default metric ([`octagonal_distance`]).
///
/// Equivalent to [`log_distance_with`] with the octagonal metric, so both
/// points must be 2-dimensional.
pub fn log_distance(x: &[f64], y: &[f64]) -> Result<f64, InvalidDimensionError> {
    log_distance_with(x, y, octagonal_distance)
}

/// Logarithmic distance over a caller-supplied metric.
///
/// Computes `6 * ln(metric(x, y))`, substituting `1e-10` for a zero
/// distance so coincident points map to a large negative value rather than
/// negative infinity.
pub fn log_distance_with<F>(x: &[f64], y: &[f64], metric: F) -> Result<f64, InvalidDimensionError>
where
    F: FnOnce(&[f64], &[f64]) -> Result<f64, InvalidDimensionError>,
{
    let mut distance = metric(x, y)?;
    if distance == 0.0 {
        distance = MIN_DISTANCE;
    }
    Ok(LOG_SCALE * distance.ln())
}

fn check_2d(arg: &'static str, point: &[f64]) -> Result<(), InvalidDimensionError> {
    if point.len() != 2 {
        return Err(InvalidDimensionError {
            arg,
            point: point.to_vec(),
        });
    }
    Ok(())
}

/// Error returned when [`octagonal_distance`] receives a point that is not
/// exactly 2-dimensional.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidDimensionError {
    /// Name of the offending parameter, `"x"` or `"y"`.
    pub arg: &'static str,
    /// The offending coordinates.
    pub point: Vec<f64>,
}

impl fmt::Display for InvalidDimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid point {} = {:?}: only 2-dimensional points are supported",
            self.arg, self.point
        )
    }
}

impl std::error::Error for InvalidDimensionError {}
