mod point;

pub use point::Point;

use std::sync::{Mutex, MutexGuard};

/// Backing storage for plotted points.
pub trait PointStore: Send + Sync {
    /// Appends `point` and returns every stored point, oldest first.
    fn append(&self, point: Point) -> Vec<Point>;

    /// Every stored point, oldest first.
    fn list(&self) -> Vec<Point>;
}

/// Keeps points in memory for the lifetime of the process.
#[derive(Default)]
pub struct MemoryStore {
    points: Mutex<Vec<Point>>
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic mid-push cannot leave the list half-written, so a poisoned
    // lock is still safe to read.
    fn points(&self) -> MutexGuard<'_, Vec<Point>> {
        self.points.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PointStore for MemoryStore {
    fn append(&self, point: Point) -> Vec<Point> {
        let mut points = self.points();
        points.push(point);
        points.clone()
    }

    fn list(&self) -> Vec<Point> {
        self.points().clone()
    }
}
