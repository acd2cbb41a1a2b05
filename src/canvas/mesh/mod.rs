mod meshable;

use cgmath::Point2;
use wgpu::util::DeviceExt;

use crate::geometry::{GRID_SPACING, MARKER_RADIUS, SCENE_SIZE};

use self::meshable::{Line, Marker, Meshable};

use super::board::Board;
use super::vertex::{self, Vertex};

const GRID_WIDTH: f32 = 1f32;
const AXIS_WIDTH: f32 = 2f32;

#[derive(Default)]
pub(crate) struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>
}

impl Mesh {
    /// Grid first, then the axes over it, then the markers on top.
    pub(crate) fn new(board: &Board) -> Self {
        let mut mesh = Self::default();

        let lines = (0..)
            .map(|step| step as f32 * GRID_SPACING)
            .take_while(|&offset| offset <= SCENE_SIZE);

        for offset in lines {
            mesh.push(&Line {
                from: Point2::new(offset, 0f32),
                to: Point2::new(offset, SCENE_SIZE),
                width: GRID_WIDTH,
                color: vertex::GRAY
            });
            mesh.push(&Line {
                from: Point2::new(0f32, offset),
                to: Point2::new(SCENE_SIZE, offset),
                width: GRID_WIDTH,
                color: vertex::GRAY
            });
        }

        let center = SCENE_SIZE * 0.5f32;
        mesh.push(&Line {
            from: Point2::new(0f32, center),
            to: Point2::new(SCENE_SIZE, center),
            width: AXIS_WIDTH,
            color: vertex::BLACK
        });
        mesh.push(&Line {
            from: Point2::new(center, 0f32),
            to: Point2::new(center, SCENE_SIZE),
            width: AXIS_WIDTH,
            color: vertex::BLACK
        });

        for &center in board.markers() {
            mesh.push(&Marker {
                center,
                radius: MARKER_RADIUS,
                color: vertex::RED
            });
        }

        mesh
    }

    fn push(&mut self, shape: &impl Meshable) {
        let offset = self.vertices.len() as u32;

        self.vertices.append(&mut shape.vertices());
        self.indices.extend(
            shape.indices().into_iter().map(|i| i + offset)
        );
    }

    pub(crate) fn count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub(crate) fn build_vertex_buffer(&self, device: &wgpu::Device) -> wgpu::Buffer {
        device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("canvas vertices"),
                contents: bytemuck::cast_slice(self.vertices.as_slice()),
                usage: wgpu::BufferUsages::VERTEX
            }
        )
    }

    pub(crate) fn build_index_buffer(&self, device: &wgpu::Device) -> wgpu::Buffer {
        device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("canvas indices"),
                contents: bytemuck::cast_slice(self.indices.as_slice()),
                usage: wgpu::BufferUsages::INDEX,
            }
        )
    }
}
