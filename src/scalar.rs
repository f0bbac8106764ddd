//! Preprocessing of per-vertex scalar data, like PET uptake or cortical thickness maps, before display.

use ndarray::{Array1, ArrayView1};
use ndarray_stats::QuantileExt;

use crate::error::{NeuroSmoothError, Result};

/// Default lower bound when clipping overlay values for display.
pub const DEFAULT_CLIP_MIN: f32 = 0.0;

/// Default upper bound when clipping overlay values for display.
pub const DEFAULT_CLIP_MAX: f32 = 10.0;


/// Limit all values to the range `[min, max]`. NaN values are kept as they are.
///
/// # Errors
///
/// If `min` is greater than `max`.
///
/// # Examples
///
/// ```
/// use ndarray::arr1;
/// let clipped = neurosmooth::clip_scalars(arr1(&[-1.0, 4.0, 12.0]).view(), 0.0, 10.0).unwrap();
/// assert_eq!(clipped, arr1(&[0.0, 4.0, 10.0]));
/// ```
pub fn clip_scalars(scalars: ArrayView1<f32>, min: f32, max: f32) -> Result<Array1<f32>> {
    if min > max {
        return Err(NeuroSmoothError::InvalidClipRange { min, max });
    }
    Ok(scalars.mapv(|v| {
        if v < min {
            min
        } else if v > max {
            max
        } else {
            v
        }
    }))
}


/// Get the smallest and largest value, ignoring NaN values. Returns `None` if there are no non-NaN values.
///
/// Useful as the bounds of a color scale.
pub fn scalar_range(scalars: ArrayView1<f32>) -> Option<(f32, f32)> {
    let min = *scalars.min_skipnan();
    let max = *scalars.max_skipnan();
    if min.is_nan() || max.is_nan() {
        None
    } else {
        Some((min, max))
    }
}
