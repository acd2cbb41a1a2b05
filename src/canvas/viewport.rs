use cgmath::Point2;

use winit::dpi::{PhysicalPosition, PhysicalSize};

use crate::geometry::SCENE_SIZE;

/// Maps cursor positions in the window onto the scene.
pub(crate) struct Viewport {
    mouse_position: Option<PhysicalPosition<f64>>,
    size: PhysicalSize<u32>
}

impl Viewport {
    pub(crate) fn new(size: PhysicalSize<u32>) -> Self {
        Self {
            mouse_position: None,
            size
        }
    }

    pub(crate) fn handle_cursor(&mut self, position: PhysicalPosition<f64>) {
        self.mouse_position = Some(position);
    }

    pub(crate) fn handle_cursor_left(&mut self) {
        self.mouse_position = None;
    }

    pub(crate) fn handle_resize(&mut self, size: PhysicalSize<u32>) {
        self.size = size;
    }

    /// The cursor in scene pixels. The scene is stretched over the whole
    /// surface, so physical pixels are scaled by the scene/window ratio.
    pub(crate) fn scene_position(&self) -> Option<Point2<f32>> {
        let pos = self.mouse_position?;
        if self.size.width == 0 || self.size.height == 0 {
            return None;
        }

        Some(Point2::new(
            (pos.x * f64::from(SCENE_SIZE) / f64::from(self.size.width)) as f32,
            (pos.y * f64::from(SCENE_SIZE) / f64::from(self.size.height)) as f32
        ))
    }
}
