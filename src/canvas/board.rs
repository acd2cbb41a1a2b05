use cgmath::Point2;

use crate::geometry;
use crate::store::Point;

/// What the canvas shows on top of the grid: one marker per plotted point,
/// kept in scene coordinates.
#[derive(Default)]
pub struct Board {
    markers: Vec<Point2<f32>>
}

impl Board {
    /// Drops every marker, leaving the bare grid.
    pub fn reset(&mut self) {
        self.markers.clear();
    }

    pub fn plot(&mut self, scene: Point2<f32>) {
        self.markers.push(scene);
    }

    /// Plots points received from the store.
    pub fn load(&mut self, points: &[Point]) {
        self.markers.extend(
            points.iter().copied().map(geometry::to_scene)
        );
    }

    pub fn markers(&self) -> impl Iterator<Item = &Point2<f32>> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_converts_to_scene() {
        let mut board = Board::default();
        board.load(&[Point::new(0.0, 0.0), Point::new(-100.0, 40.0)]);

        let markers = board.markers().copied().collect::<Vec<_>>();
        assert_eq!(markers, vec![Point2::new(300.0, 300.0), Point2::new(200.0, 260.0)]);
    }

    #[test]
    fn reset_clears_markers() {
        let mut board = Board::default();
        board.plot(Point2::new(10.0, 10.0));
        board.load(&[Point::new(1.0, 1.0)]);
        assert_eq!(board.len(), 2);

        board.reset();
        assert!(board.is_empty());
    }
}
