//! Interpolated surfaces and volumes.

use super::{BilinearInterpolation, Interpolation, TrilinearInterpolation};
use crate::error::{MathError, MathResult};
use crate::extrapolation::ExtrapolationPolicy;
use crate::space::{Point, SurfaceSpace, VolumeSpace};

fn check_finite(query: &[f64]) -> MathResult<()> {
    if query.iter().any(|v| v.is_nan()) {
        return Err(MathError::invalid_input("query coordinate is NaN"));
    }
    Ok(())
}

/// A surface grid interpolated bilinearly.
///
/// Each axis is resolved independently against the extrapolation policy,
/// so a query can be clamped on one axis and extended on the other.
#[derive(Debug, Clone)]
pub struct InterpolatedSurface {
    space: SurfaceSpace,
    policy: ExtrapolationPolicy,
}

impl InterpolatedSurface {
    /// Wraps a surface space.
    #[must_use]
    pub fn new(space: SurfaceSpace, policy: ExtrapolationPolicy) -> Self {
        Self { space, policy }
    }

    /// Value at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InvalidInput` if a coordinate is NaN.
    pub fn value_at(&self, x: f64, y: f64) -> MathResult<f64> {
        let query = [x, y];
        check_finite(&query)?;

        let (lx, ly) = self.space.locate(x, y);
        let (bx, ex) = self.policy.resolve(lx, self.space.xs().len());
        let (by, ey) = self.policy.resolve(ly, self.space.ys().len());
        if bx.is_exact() && by.is_exact() {
            return Ok(self.space.value(bx.lower, by.lower));
        }

        let corners = self.space.corners(bx, by);
        let bounding: Vec<&Point> = corners.iter().collect();
        if ex || ey {
            BilinearInterpolation.extrapolate(&query, &bounding)
        } else {
            BilinearInterpolation.value(&query, &bounding)
        }
    }

    /// Value at a two-coordinate query.
    ///
    /// # Errors
    ///
    /// Returns `MathError::DimensionMismatch` unless `query` has exactly two
    /// coordinates.
    pub fn value_at_point(&self, query: &[f64]) -> MathResult<f64> {
        match query {
            [x, y] => self.value_at(*x, *y),
            _ => Err(MathError::dimension_mismatch(2, query.len())),
        }
    }

    /// The underlying space.
    pub fn space(&self) -> &SurfaceSpace {
        &self.space
    }

    /// The extrapolation policy.
    pub fn policy(&self) -> ExtrapolationPolicy {
        self.policy
    }
}

/// A volume grid interpolated trilinearly.
#[derive(Debug, Clone)]
pub struct InterpolatedVolume {
    space: VolumeSpace,
    policy: ExtrapolationPolicy,
}

impl InterpolatedVolume {
    /// Wraps a volume space.
    #[must_use]
    pub fn new(space: VolumeSpace, policy: ExtrapolationPolicy) -> Self {
        Self { space, policy }
    }

    /// Value at `(x, y, z)`.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InvalidInput` if a coordinate is NaN.
    pub fn value_at(&self, x: f64, y: f64, z: f64) -> MathResult<f64> {
        let query = [x, y, z];
        check_finite(&query)?;

        let lens = [self.space.xs().len(), self.space.ys().len(), self.space.zs().len()];
        let locations = self.space.locate(x, y, z);
        let mut extended = false;
        let brackets = [0, 1, 2].map(|axis| {
            let (bracket, ext) = self.policy.resolve(locations[axis], lens[axis]);
            extended |= ext;
            bracket
        });

        if brackets.iter().all(|b| b.is_exact()) {
            let [bx, by, bz] = brackets;
            return Ok(self.space.value(bx.lower, by.lower, bz.lower));
        }

        let corners = self.space.corners(brackets);
        let bounding: Vec<&Point> = corners.iter().collect();
        if extended {
            TrilinearInterpolation.extrapolate(&query, &bounding)
        } else {
            TrilinearInterpolation.value(&query, &bounding)
        }
    }

    /// Value at a three-coordinate query.
    ///
    /// # Errors
    ///
    /// Returns `MathError::DimensionMismatch` unless `query` has exactly
    /// three coordinates.
    pub fn value_at_point(&self, query: &[f64]) -> MathResult<f64> {
        match query {
            [x, y, z] => self.value_at(*x, *y, *z),
            _ => Err(MathError::dimension_mismatch(3, query.len())),
        }
    }

    /// The underlying space.
    pub fn space(&self) -> &VolumeSpace {
        &self.space
    }

    /// The extrapolation policy.
    pub fn policy(&self) -> ExtrapolationPolicy {
        self.policy
    }
}
