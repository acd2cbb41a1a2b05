#![allow(dead_code)]

use std::cell::RefCell;
use std::net::SocketAddr;
use std::sync::Arc;

use plotter::client::PointClient;
use plotter::menu::Notifier;
use plotter::server::{self, ServerHandle};
use plotter::store::MemoryStore;

/// A point store on an ephemeral port with a client pointed at it.
pub fn start() -> (ServerHandle, PointClient) {
    let handle = server::spawn(
        "127.0.0.1:0".parse().unwrap(),
        Arc::new(MemoryStore::new())
    ).unwrap();
    let client = PointClient::new(handle.url()).unwrap();

    (handle, client)
}

/// An address nothing is listening on.
pub fn closed_addr() -> SocketAddr {
    let (handle, _) = start();
    handle.addr()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub shown: RefCell<Vec<(Level, String, String)>>
}

impl RecordingNotifier {
    fn record(&self, level: Level, title: &str, body: &str) {
        self.shown.borrow_mut().push((level, title.to_string(), body.to_string()));
    }

    pub fn single(&self) -> (Level, String, String) {
        let shown = self.shown.borrow();
        assert_eq!(shown.len(), 1, "expected exactly one dialog, got {:?}", *shown);
        shown[0].clone()
    }
}

impl Notifier for RecordingNotifier {
    fn info(&self, title: &str, body: &str) {
        self.record(Level::Info, title, body);
    }

    fn warning(&self, title: &str, body: &str) {
        self.record(Level::Warning, title, body);
    }

    fn error(&self, title: &str, body: &str) {
        self.record(Level::Error, title, body);
    }
}
