use std::f32::consts::TAU;

use cgmath::{InnerSpace, Point2, Vector2};

use crate::geometry;

use super::super::vertex::Vertex;

pub(super) trait Meshable {
    fn vertices(&self) -> Vec<Vertex>;
    fn indices(&self) -> Vec<u32>;
}

/// A straight stroke between two scene positions.
pub(super) struct Line {
    pub(super) from: Point2<f32>,
    pub(super) to: Point2<f32>,
    pub(super) width: f32,
    pub(super) color: [f32; 3]
}

impl Meshable for Line {
    fn vertices(&self) -> Vec<Vertex> {
        let direction = (self.to - self.from).normalize();
        let offset = Vector2::new(-direction.y, direction.x) * (self.width * 0.5f32);

        [
            self.from + offset,
            self.from - offset,
            self.to - offset,
            self.to + offset
        ].into_iter().map(|corner| {
            let [x, y] = geometry::scene_to_clip(corner);

            Vertex {
                position: [x, y, 0f32],
                color: self.color
            }
        } ).collect()
    }

    fn indices(&self) -> Vec<u32> {
        vec![0, 1, 2, 2, 3, 0]
    }
}

/// A filled circle centered on a plotted point.
pub(super) struct Marker {
    pub(super) center: Point2<f32>,
    pub(super) radius: f32,
    pub(super) color: [f32; 3]
}

impl Marker {
    pub(super) const SEGMENTS: u32 = 32;
}

impl Meshable for Marker {
    fn vertices(&self) -> Vec<Vertex> {
        let vertex = |scene: Point2<f32>| {
            let [x, y] = geometry::scene_to_clip(scene);

            Vertex {
                position: [x, y, 0f32],
                color: self.color
            }
        };

        // Center first, then the rim starting at angle 0
        let mut vertices = vec![vertex(self.center)];
        for segment in 0..Self::SEGMENTS {
            let angle = segment as f32 * TAU / Self::SEGMENTS as f32;

            vertices.push(
                vertex(self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius)
            );
        }

        vertices
    }

    fn indices(&self) -> Vec<u32> {
        // One triangle per rim edge, the last one wrapping back to the first rim vertex
        (1..=Self::SEGMENTS).flat_map(|rim| {
            let next = rim % Self::SEGMENTS + 1;
            [rim, next, 0]
        } ).collect()
    }
}
