use serde::{Deserialize, Serialize};

/// A point in the Cartesian frame, origin at the canvas center.
/// Travels over the wire as a two-element array `[x, y]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    x: f64,
    y: f64
}

impl Default for Point {
    fn default() -> Self {
        Self { 
            x: 0f64, 
            y: 0f64 
        }
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_pair() {
        let json = serde_json::to_string(&Point::new(20.0, -40.5)).unwrap();
        assert_eq!(json, "[20.0,-40.5]");
    }

    #[test]
    fn deserializes_integer_pairs() {
        let point: Point = serde_json::from_str("[3, -7]").unwrap();
        assert_eq!(point, Point::new(3.0, -7.0));
    }
}
