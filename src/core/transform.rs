//! World/percent transform engine.
//!
//! Every function here is a pure function of its arguments. The per-axis
//! formulas are
//!
//! ```text
//! percent = offset + value * scale * direction
//! value   = (percent - offset) / (scale * direction)
//! ```
//!
//! with `direction = -1` when the axis is flipped. When a calibration swaps
//! its axes the world components are exchanged before the forward formula and
//! the results exchanged back after the inverse one.

use crate::{
    core::{
        calibration::Calibration,
        geo::{PercentPoint, WorldPoint},
    },
    traits::CoordinateTransform,
};

fn direction(flip: bool) -> f64 {
    if flip {
        -1.0
    } else {
        1.0
    }
}

/// Forward transform of a single axis value
pub fn world_to_percent(value: f64, offset: f64, scale: f64, flip: bool) -> f64 {
    offset + value * scale * direction(flip)
}

/// Inverse transform of a single axis value. `scale` must be non-zero.
pub fn percent_to_world(percent: f64, offset: f64, scale: f64, flip: bool) -> f64 {
    (percent - offset) / (scale * direction(flip))
}

/// Projects a world point into percent space
pub fn project(point: &WorldPoint, calib: &Calibration) -> PercentPoint {
    let source = if calib.swap_axes {
        point.swapped()
    } else {
        *point
    };

    PercentPoint::new(
        world_to_percent(source.x, calib.offset_x, calib.scale_x, calib.flip_x),
        world_to_percent(source.z, calib.offset_z, calib.scale_z, calib.flip_z),
    )
}

/// Converts a percent-space position back into world coordinates
pub fn unproject(percent: &PercentPoint, calib: &Calibration) -> WorldPoint {
    let world = WorldPoint::new(
        percent_to_world(percent.x, calib.offset_x, calib.scale_x, calib.flip_x),
        percent_to_world(percent.y, calib.offset_z, calib.scale_z, calib.flip_z),
    );

    if calib.swap_axes {
        world.swapped()
    } else {
        world
    }
}

impl CoordinateTransform for Calibration {
    fn project(&self, point: &WorldPoint) -> PercentPoint {
        project(point, self)
    }

    fn unproject(&self, point: &PercentPoint) -> WorldPoint {
        unproject(point, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn customs() -> Calibration {
        Calibration::new(65.2, 56.3, 0.094, 0.18, true, false, false)
    }

    #[test]
    fn test_axis_formulas() {
        assert_abs_diff_eq!(world_to_percent(100.0, 65.2, 0.094, true), 55.8, epsilon = 1e-9);
        assert_abs_diff_eq!(world_to_percent(50.0, 56.3, 0.18, false), 65.3, epsilon = 1e-9);
        assert_abs_diff_eq!(percent_to_world(55.8, 65.2, 0.094, true), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_customs_scenario() {
        let percent = customs().project(&WorldPoint::new(100.0, 50.0));
        assert_abs_diff_eq!(percent.x, 55.8, epsilon = 1e-9);
        assert_abs_diff_eq!(percent.y, 65.3, epsilon = 1e-9);
    }

    #[test]
    fn test_swap_exchanges_world_axes() {
        let mut swapped = customs();
        swapped.swap_axes = true;

        let a = project(&WorldPoint::new(10.0, 0.0), &swapped);
        let b = project(&WorldPoint::new(0.0, 10.0), &customs());
        assert_eq!(a, b);
    }

    #[test]
    fn test_round_trip_with_swap() {
        let calib = Calibration::new(51.1, 54.3, 0.76, 0.7, true, true, true);
        let world = WorldPoint::new(-37.25, 12.5);

        let back = unproject(&project(&world, &calib), &calib);
        assert_abs_diff_eq!(back.x, world.x, epsilon = 1e-9);
        assert_abs_diff_eq!(back.z, world.z, epsilon = 1e-9);
    }

    #[test]
    fn test_project_all_preserves_order() {
        let calib = Calibration::identity();
        let points = [WorldPoint::new(1.0, 2.0), WorldPoint::new(3.0, 4.0)];
        assert_eq!(
            calib.project_all(&points),
            vec![PercentPoint::new(1.0, 2.0), PercentPoint::new(3.0, 4.0)]
        );
    }
}
