//! Bilinear and trilinear interpolation on grid corners.

use super::{check_query, clamped_lerp, lerp, Interpolation, LinearInterpolation};
use crate::error::MathResult;
use crate::space::Point;

type Lerp = fn(f64, f64, f64, f64, f64) -> f64;

fn bilinear(query: &[f64], c: &[&Point], interp: Lerp) -> f64 {
    let (x, y) = (query[0], query[1]);
    let f_y0 = interp(x, c[0].coord(0), c[1].coord(0), c[0].value(), c[1].value());
    let f_y1 = interp(x, c[2].coord(0), c[3].coord(0), c[2].value(), c[3].value());
    interp(y, c[0].coord(1), c[2].coord(1), f_y0, f_y1)
}

fn trilinear(query: &[f64], c: &[&Point], interp: Lerp) -> f64 {
    let f_z0 = bilinear(query, &c[..4], interp);
    let f_z1 = bilinear(query, &c[4..8], interp);
    interp(query[2], c[0].coord(2), c[4].coord(2), f_z0, f_z1)
}

/// Bilinear interpolation over the four corners
/// `(x0,y0), (x1,y0), (x0,y1), (x1,y1)`.
///
/// Interpolates along `x` at `y0` and at `y1`, then along `y`. With fewer
/// than four corners it falls back to [`LinearInterpolation`] on `x`.
///
/// # Example
///
/// ```rust
/// use knot_math::interpolation::{BilinearInterpolation, Interpolation};
/// use knot_math::space::Point;
///
/// let c = [
///     Point::two(0.0, 0.0, 0.0),
///     Point::two(1.0, 0.0, 1.0),
///     Point::two(0.0, 1.0, 2.0),
///     Point::two(1.0, 1.0, 3.0),
/// ];
/// let corners: Vec<&Point> = c.iter().collect();
///
/// let v = BilinearInterpolation.value(&[0.5, 0.5], &corners).unwrap();
/// assert!((v - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BilinearInterpolation;

impl Interpolation for BilinearInterpolation {
    fn value(&self, query: &[f64], bounding: &[&Point]) -> MathResult<f64> {
        check_query(query, 2)?;
        if bounding.len() < 4 {
            return LinearInterpolation.value(&query[..1], bounding);
        }
        Ok(bilinear(query, bounding, clamped_lerp))
    }

    fn extrapolate(&self, query: &[f64], bounding: &[&Point]) -> MathResult<f64> {
        check_query(query, 2)?;
        if bounding.len() < 4 {
            return LinearInterpolation.extrapolate(&query[..1], bounding);
        }
        Ok(bilinear(query, bounding, lerp))
    }
}

/// Trilinear interpolation over eight corners ordered `x` fastest, then `y`,
/// then `z`.
///
/// Interpolates bilinearly on the `z0` and `z1` faces, then along `z`. With
/// fewer than eight corners it falls back to [`BilinearInterpolation`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrilinearInterpolation;

impl Interpolation for TrilinearInterpolation {
    fn value(&self, query: &[f64], bounding: &[&Point]) -> MathResult<f64> {
        check_query(query, 3)?;
        if bounding.len() < 8 {
            return BilinearInterpolation.value(&query[..2], bounding);
        }
        Ok(trilinear(query, bounding, clamped_lerp))
    }

    fn extrapolate(&self, query: &[f64], bounding: &[&Point]) -> MathResult<f64> {
        check_query(query, 3)?;
        if bounding.len() < 8 {
            return BilinearInterpolation.extrapolate(&query[..2], bounding);
        }
        Ok(trilinear(query, bounding, lerp))
    }
}
