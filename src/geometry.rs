use cgmath::Point2;

use crate::store::Point;

/// Width and height of the scene, in scene pixels.
pub const SCENE_SIZE: f32 = 600.0;
pub const GRID_SPACING: f32 = 20.0;
pub const MARKER_RADIUS: f32 = 3.0;

const HALF: f32 = SCENE_SIZE / 2.0;

/// Scene pixels (origin top-left, Y down) to the Cartesian frame
/// (origin at the center, Y up).
pub fn to_cartesian(scene: Point2<f32>) -> Point {
    Point::new(
        f64::from(scene.x - HALF),
        f64::from(HALF - scene.y)
    )
}

pub fn to_scene(point: Point) -> Point2<f32> {
    Point2::new(
        point.x() as f32 + HALF,
        HALF - point.y() as f32
    )
}

/// Scene pixels to wgpu clip space, which spans [-1, 1] with Y up.
pub fn scene_to_clip(scene: Point2<f32>) -> [f32; 2] {
    [
        scene.x / HALF - 1f32,
        1f32 - scene.y / HALF
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn center_is_origin() {
        assert_eq!(to_cartesian(Point2::new(300.0, 300.0)), Point::new(0.0, 0.0));
    }

    #[test]
    fn y_axis_points_up() {
        let point = to_cartesian(Point2::new(320.0, 260.0));
        assert_eq!(point, Point::new(20.0, 40.0));

        let point = to_cartesian(Point2::new(0.0, 600.0));
        assert_eq!(point, Point::new(-300.0, -300.0));
    }

    #[test]
    fn scene_round_trip() {
        for &(x, y) in &[(0.0, 0.0), (12.5, 587.25), (300.0, 300.0), (599.0, 1.0), (433.7, 91.3)] {
            let scene = Point2::new(x, y);
            let back = to_scene(to_cartesian(scene));

            assert_relative_eq!(back.x, scene.x, epsilon = 1e-4);
            assert_relative_eq!(back.y, scene.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn scene_corners_map_to_clip_corners() {
        assert_eq!(scene_to_clip(Point2::new(0.0, 0.0)), [-1.0, 1.0]);
        assert_eq!(scene_to_clip(Point2::new(600.0, 600.0)), [1.0, -1.0]);
        assert_eq!(scene_to_clip(Point2::new(300.0, 300.0)), [0.0, 0.0]);
    }
}
