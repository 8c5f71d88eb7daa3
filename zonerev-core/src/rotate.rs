//! Cyclic rotation of a zone path
//!
//! Reversing a zone moves the finish segment to the front of the path. The
//! point that used to sit at `finish_index` becomes point 0, and the new
//! finish index marks where the old first point ended up.

use crate::error::{Result, ZoneError};

/// Result of relocating the finish segment of a path
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation<T> {
    /// Rotated points
    pub points: Vec<T>,
    /// Finish index for the rotated path
    pub finish_index: i64,
}

/// Reduce a possibly negative or oversized shift into `0..len`.
///
/// Returns 0 for an empty sequence.
pub fn normalize_shift(shift: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    // i128 so that neither a huge length nor i64::MIN can overflow
    (i128::from(shift).rem_euclid(len as i128)) as usize
}

/// Rotate `points` left so that `new[i] == old[(i + shift) mod len]`.
pub fn rotate_left<T>(mut points: Vec<T>, shift: i64) -> Vec<T> {
    let mid = normalize_shift(shift, points.len());
    points.rotate_left(mid);
    points
}

/// Inverse of [`rotate_left`] for the same shift.
pub fn rotate_right<T>(mut points: Vec<T>, shift: i64) -> Vec<T> {
    let k = normalize_shift(shift, points.len());
    points.rotate_right(k);
    points
}

/// Rotate a path so the old finish segment comes first.
///
/// The new finish index is `len - finish_index`, computed from the value as
/// given. A `finish_index` of 0 therefore yields `len`, one past the end.
/// Fails when that difference does not fit in an `i64`.
pub fn reverse_path<T>(points: Vec<T>, finish_index: i64) -> Result<Rotation<T>> {
    let len = points.len();
    let new_index = i64::try_from(len)
        .ok()
        .and_then(|len| len.checked_sub(finish_index))
        .ok_or(ZoneError::FinishIndexOutOfRange { finish_index, len })?;
    Ok(Rotation {
        points: rotate_left(points, finish_index),
        finish_index: new_index,
    })
}
