//! Wedge partition and pointer math shared by the renderer and the spin
//! controller.
//!
//! All angles are radians in screen convention: measured from the positive
//! x-axis, increasing clockwise because y grows downward. The selection
//! pointer sits at the top of the wheel, which in this convention is `3π/2`.
//! Both the painted pointer and the index readout derive from the single
//! [`POINTER_ANGLE`] constant; a renderer and a controller that disagree on
//! this constant would silently report a different wedge than the one drawn
//! under the pointer.

use crate::domain::errors::WheelError;
use std::f32::consts::{PI, TAU};

/// Screen angle of the fixed selection pointer (straight up from center).
pub const POINTER_ANGLE: f32 = 1.5 * PI;

/// Upper bound on wedges, equal to the number of distinct wedge colors the
/// design system provides. Validated at ring construction so color reuse
/// can never happen further down.
pub const MAX_WEDGES: usize = 12;

/// Wraps an angle into `[0, TAU)`.
///
/// `rem_euclid` alone is not enough: for tiny negative inputs the rounded
/// sum can land exactly on `TAU`, which must map back to `0`.
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// The fixed angular partition of the wheel face.
///
/// Wedge `i` spans `[i * wedge_angle, (i + 1) * wedge_angle)` in the wheel's
/// own (unrotated) frame, starting at angle 0. The ring never changes after
/// construction; resizing a wheel means building a new ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WedgeRing {
    wedge_count: usize,
}

impl WedgeRing {
    /// Builds a ring of `wedge_count` equal wedges.
    pub fn new(wedge_count: usize) -> Result<Self, WheelError> {
        if wedge_count < 2 {
            return Err(WheelError::TooFewWedges {
                wedges: wedge_count,
            });
        }
        if wedge_count > MAX_WEDGES {
            return Err(WheelError::TooManyWedges {
                wedges: wedge_count,
                max: MAX_WEDGES,
            });
        }
        Ok(Self { wedge_count })
    }

    pub fn wedge_count(&self) -> usize {
        self.wedge_count
    }

    /// Angular width of one wedge.
    pub fn wedge_angle(&self) -> f32 {
        TAU / self.wedge_count as f32
    }

    /// Start angle of wedge `index` in the wheel's own frame.
    pub fn wedge_start(&self, index: usize) -> f32 {
        index as f32 * self.wedge_angle()
    }

    /// Center angle of wedge `index` in the wheel's own frame. Labels are
    /// laid out along this direction.
    pub fn wedge_center(&self, index: usize) -> f32 {
        self.wedge_start(index) + self.wedge_angle() / 2.0
    }

    /// The wedge containing `angle` (wheel frame, any range).
    ///
    /// The `min` guards the half-open upper boundary: float division can
    /// round a near-`TAU` input up to exactly `wedge_count`.
    pub fn wedge_at(&self, angle: f32) -> usize {
        let idx = (normalize_angle(angle) / self.wedge_angle()).floor() as usize;
        idx.min(self.wedge_count - 1)
    }

    /// The wedge currently aligned with the fixed pointer when the wheel is
    /// rotated by `rotation`.
    ///
    /// Rotating the wheel clockwise by `rotation` moves wheel-frame content
    /// at angle `a` to screen angle `a + rotation`, so the wedge under the
    /// pointer is the one containing `POINTER_ANGLE - rotation` in the
    /// wheel frame. This is the readout inverse of the rotation the
    /// renderer applies when compositing.
    pub fn index_at_pointer(&self, rotation: f32) -> usize {
        self.wedge_at(POINTER_ANGLE - rotation)
    }

    /// The wedge diametrically opposite `index`, where the rotation policy
    /// performs its hidden substitutions.
    ///
    /// For odd counts `n/2` rounds down, so the result sits half a wedge
    /// short of exactly opposite. That bias is an accepted approximation;
    /// it still lands on the back of the wheel, which is all the
    /// substitution trick needs.
    pub fn antipode(&self, index: usize) -> usize {
        (index + self.wedge_count / 2) % self.wedge_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_angle_range() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!(normalize_angle(TAU) < TAU);
        assert!(normalize_angle(-0.1) >= 0.0);
        assert!(normalize_angle(-0.1) < TAU);
        assert!(normalize_angle(100.0) < TAU);
        // Tiny negative inputs round up to TAU inside rem_euclid; the wrap
        // must still land inside the half-open range.
        let wrapped = normalize_angle(-1.0e-10);
        assert!((0.0..TAU).contains(&wrapped));
    }

    #[test]
    fn test_ring_validation() {
        assert!(WedgeRing::new(8).is_ok());
        assert!(WedgeRing::new(7).is_ok());
        assert!(matches!(
            WedgeRing::new(0),
            Err(WheelError::TooFewWedges { wedges: 0 })
        ));
        assert!(matches!(
            WedgeRing::new(1),
            Err(WheelError::TooFewWedges { wedges: 1 })
        ));
        assert!(matches!(
            WedgeRing::new(14),
            Err(WheelError::TooManyWedges { wedges: 14, max: 12 })
        ));
    }

    #[test]
    fn test_wedge_at_boundaries() {
        let ring = WedgeRing::new(8).unwrap();
        let w = ring.wedge_angle();

        assert_eq!(ring.wedge_at(0.0), 0);
        assert_eq!(ring.wedge_at(w / 2.0), 0);
        assert_eq!(ring.wedge_at(w), 1);
        assert_eq!(ring.wedge_at(7.5 * w), 7);
        // Just below the wrap point stays in the last wedge.
        assert_eq!(ring.wedge_at(TAU - 1.0e-4), 7);
        assert_eq!(ring.wedge_at(TAU), 0);
    }

    #[test]
    fn test_index_at_pointer_unrotated() {
        // With no rotation the pointer (at 3π/2) sits exactly on the start
        // boundary of wedge 6 of 8, which owns its start angle.
        let ring = WedgeRing::new(8).unwrap();
        assert_eq!(ring.index_at_pointer(0.0), 6);
    }

    #[test]
    fn test_index_at_pointer_tracks_rotation() {
        let ring = WedgeRing::new(8).unwrap();
        let w = ring.wedge_angle();

        // Rotating clockwise by one wedge brings the previous wedge under
        // the pointer.
        assert_eq!(ring.index_at_pointer(w / 2.0), 5);
        assert_eq!(ring.index_at_pointer(w), 5);
        assert_eq!(ring.index_at_pointer(1.5 * w), 4);
        // A full turn is the identity.
        assert_eq!(ring.index_at_pointer(TAU + w / 2.0), 5);
    }

    #[test]
    fn test_pointer_and_wedge_lookup_agree() {
        // index_at_pointer must be wedge_at applied to the inverse-rotated
        // pointer for every rotation, not just special cases.
        let ring = WedgeRing::new(8).unwrap();
        let mut rotation = 0.0f32;
        while rotation < TAU {
            assert_eq!(
                ring.index_at_pointer(rotation),
                ring.wedge_at(POINTER_ANGLE - rotation)
            );
            rotation += 0.013;
        }
    }

    #[test]
    fn test_antipode() {
        let ring = WedgeRing::new(8).unwrap();
        assert_eq!(ring.antipode(0), 4);
        assert_eq!(ring.antipode(3), 7);
        assert_eq!(ring.antipode(4), 0);
        assert_eq!(ring.antipode(7), 3);

        let ring = WedgeRing::new(6).unwrap();
        assert_eq!(ring.antipode(1), 4);
        assert_eq!(ring.antipode(5), 2);
    }

    #[test]
    fn test_antipode_rounds_down_for_odd_counts() {
        let ring = WedgeRing::new(7).unwrap();
        // 7/2 rounds down to 3: half a wedge short of opposite, but still
        // on the far side of the wheel for every index.
        assert_eq!(ring.antipode(0), 3);
        assert_eq!(ring.antipode(4), 0);
        assert_eq!(ring.antipode(6), 2);
    }

    #[test]
    fn test_wedge_centers_cover_ring() {
        let ring = WedgeRing::new(6).unwrap();
        for i in 0..6 {
            assert_eq!(ring.wedge_at(ring.wedge_center(i)), i);
        }
    }
}
