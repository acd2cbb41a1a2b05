mod board;
mod mesh;
mod state;
mod vertex;
mod viewport;

pub use board::Board;

use cgmath::Point2;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder
};

use crate::client::{ClientError, PointClient};
use crate::geometry::{self, SCENE_SIZE};
use crate::menu::{self, KeyLatch, MenuAction, Notifier};

use self::mesh::Mesh;
use self::state::State;
use self::viewport::Viewport;

pub const WINDOW_TITLE: &str = "Coordinate System";

#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("failed to open window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("no compatible graphics adapter")]
    NoAdapter,
    #[error("failed to acquire graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported texture format")]
    NoSurfaceFormat
}

/// Opens the canvas window and runs its event loop. Only returns if the
/// window could not be set up; closing the window exits the process.
pub async fn run(client: PointClient, notifier: impl Notifier + 'static) -> Result<(), CanvasError> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(SCENE_SIZE, SCENE_SIZE))
        .with_resizable(false)
        .build(&event_loop)?;

    // Startup does what "Home" does
    let mut board = Board::default();
    menu::home(&mut board, &client);

    let mut state = State::new(&window, &Mesh::new(&board)).await?;
    let mut viewport = Viewport::new(window.inner_size());
    let mut keys = KeyLatch::default();

    menu::log_bindings();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                match state.render() {
                    Ok(..) => {  },
                    Err(wgpu::SurfaceError::Lost) => state.redraw(),
                    Err(wgpu::SurfaceError::OutOfMemory) => *control_flow = ControlFlow::Exit,
                    Err(e) => log::error!("{:?}", e)
                }
            },
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => match event {
                // Handle close behavior
                WindowEvent::CloseRequested | WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(VirtualKeyCode::Escape),
                            ..
                        },
                    ..
                } => *control_flow = ControlFlow::Exit,

                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: key_state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => match key_state {
                    ElementState::Pressed => if keys.press(*key) {
                        if let Some(action) = MenuAction::from_key(*key) {
                            menu::perform(action, &mut board, &client, &notifier);

                            state.update(&Mesh::new(&board));
                            window.request_redraw();
                        }
                    },
                    ElementState::Released => keys.release(*key)
                },
                WindowEvent::Focused(..) => keys.clear(),

                WindowEvent::CursorMoved { position, .. } => {
                    viewport.handle_cursor(*position)
                },
                WindowEvent::CursorLeft { .. } => {
                    viewport.handle_cursor_left()
                },

                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => match viewport.scene_position() {
                    Some(scene) => {
                        plot(&mut board, &client, scene);

                        state.update(&Mesh::new(&board));
                        window.request_redraw();
                    },
                    None => log::debug!("Click ignored, cursor position not yet known")
                },

                WindowEvent::Resized(physical_size) => {
                    state.resize(*physical_size);
                    viewport.handle_resize(*physical_size);
                },
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    state.resize(**new_inner_size);
                    viewport.handle_resize(**new_inner_size);
                },
                _ => {}
            },
            _ => {}
        }
    });
}

/// Submits a click to the store and marks it on the board. The marker is
/// drawn whether or not the store accepted the point.
fn plot(board: &mut Board, client: &PointClient, scene: Point2<f32>) {
    let point = geometry::to_cartesian(scene);

    match client.save_point(point) {
        Ok(..) => log::info!("Point saved: ({:?}, {:?})", point.x(), point.y()),
        Err(ClientError::Status { body, .. }) => log::error!("Error saving point: {}", body),
        Err(e) => log::error!("Error connecting to backend: {}", e)
    }

    board.plot(scene);
}
