//! The canvas menu: "Home" redraws the canvas from the store, "Plotted
//! Points" lists the store's contents in a dialog.
//!
//! winit has no menu bar, so both actions are bound to keys.

use std::collections::HashSet;

use strum::IntoEnumIterator;
use winit::event::VirtualKeyCode;

use crate::canvas::Board;
use crate::client::{ClientError, PointClient};
use crate::store::Point;

pub const EMPTY_MESSAGE: &str = "No points have been plotted yet.";

#[derive(Copy, Clone, Debug, PartialEq, Eq, strum_macros::EnumIter, strum_macros::Display)]
pub enum MenuAction {
    #[strum(serialize = "Home")]
    Home,
    #[strum(serialize = "Plotted Points")]
    PlottedPoints
}

impl MenuAction {
    pub fn from_key(key: VirtualKeyCode) -> Option<Self> {
        match key {
            VirtualKeyCode::H | VirtualKeyCode::Home => Some(Self::Home),
            VirtualKeyCode::P => Some(Self::PlottedPoints),
            _ => None
        }
    }

    fn key_hint(&self) -> &'static str {
        match self {
            Self::Home => "H / Home",
            Self::PlottedPoints => "P"
        }
    }
}

/// Logs the key binding of every menu action.
pub fn log_bindings() {
    for action in MenuAction::iter() {
        log::info!("[{}] {}", action.key_hint(), action);
    }
}

/// Lets a held key act once: key repeat delivers further presses without a
/// release in between, and those are swallowed.
#[derive(Default)]
pub struct KeyLatch {
    held: HashSet<VirtualKeyCode>
}

impl KeyLatch {
    /// True only for the first press since the key was last released.
    pub fn press(&mut self, key: VirtualKeyCode) -> bool {
        self.held.insert(key)
    }

    pub fn release(&mut self, key: VirtualKeyCode) {
        self.held.remove(&key);
    }

    /// Releases go missing while another window (a dialog) has focus.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Where menu actions report to the user.
pub trait Notifier {
    fn info(&self, title: &str, body: &str);
    fn warning(&self, title: &str, body: &str);
    fn error(&self, title: &str, body: &str);
}

/// Modal message boxes from the platform's dialog service. The portal
/// backend needs a tokio reactor, so dialogs run on a private runtime.
pub struct DialogNotifier {
    runtime: tokio::runtime::Runtime
}

impl DialogNotifier {
    pub fn new() -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("dialogs")
            .enable_all()
            .build()?;

        Ok(Self { runtime })
    }

    fn show(&self, level: rfd::MessageLevel, title: &str, body: &str) {
        let dialog = rfd::AsyncMessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(body)
            .set_buttons(rfd::MessageButtons::Ok);

        self.runtime.block_on(dialog.show());
    }
}

impl Notifier for DialogNotifier {
    fn info(&self, title: &str, body: &str) {
        self.show(rfd::MessageLevel::Info, title, body);
    }

    fn warning(&self, title: &str, body: &str) {
        self.show(rfd::MessageLevel::Warning, title, body);
    }

    fn error(&self, title: &str, body: &str) {
        self.show(rfd::MessageLevel::Error, title, body);
    }
}

pub fn perform(
    action: MenuAction,
    board: &mut Board,
    client: &PointClient,
    notifier: &impl Notifier
) {
    log::debug!("Menu action: {}", action);

    match action {
        MenuAction::Home => home(board, client),
        MenuAction::PlottedPoints => show_plotted_points(client, notifier)
    }
}

/// Clears the board and replots every stored point. Failures are only
/// logged; the board is left with the bare grid.
pub fn home(board: &mut Board, client: &PointClient) {
    board.reset();

    match client.points() {
        Ok(points) => {
            board.load(&points);
            log::info!("Loaded points: {}", format_points(&points, ", "));
        },
        Err(ClientError::Status { body, .. }) => log::error!("Error loading points: {}", body),
        Err(e) => log::error!("Error connecting to backend: {}", e)
    }
}

pub fn show_plotted_points(client: &PointClient, notifier: &impl Notifier) {
    let title = MenuAction::PlottedPoints.to_string();

    match client.points() {
        Ok(points) => notifier.info(&title, &plotted_points_message(&points)),
        Err(ClientError::Status { body, .. }) => {
            notifier.warning("Error", &format!("Failed to load points: {}", body))
        },
        Err(e) => notifier.error("Error", &format!("Error connecting to backend: {}", e))
    }
}

/// Body of the "Plotted Points" dialog: one `(x, y)` line per point, or
/// the empty-state message.
pub fn plotted_points_message(points: &[Point]) -> String {
    if points.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    format!("Plotted Points:\n{}", format_points(points, "\n"))
}

// Debug formatting keeps the trailing `.0` on whole numbers
fn format_points(points: &[Point], separator: &str) -> String {
    points.iter()
        .map(|point| format!("({:?}, {:?})", point.x(), point.y()))
        .collect::<Vec<_>>()
        .join(separator)
}
