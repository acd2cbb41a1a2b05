//! HTTP front of the point store.
//!
//! Two routes, both JSON:
//! - `POST /save_point` takes `{"x": .., "y": ..}` and answers with the
//!   confirmation message plus every stored point.
//! - `GET /get_points` answers with every stored point as `[[x, y], ..]`.

use std::net::SocketAddr;
use std::sync::{mpsc, Arc};
use std::thread;

use axum::{
    extract::State,
    routing::{get, post},
    Json,
    Router
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::store::{Point, PointStore};

pub const SAVED_MESSAGE: &str = "Point saved";

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to start the server runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to spawn the server thread: {0}")]
    Thread(#[source] std::io::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error
    },
    #[error("server thread exited before it started listening")]
    Startup,
    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error)
}

/// Body of `POST /save_point`.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct SavePoint {
    pub x: f64,
    pub y: f64
}

impl From<Point> for SavePoint {
    fn from(point: Point) -> Self {
        Self { x: point.x(), y: point.y() }
    }
}

/// Reply to `POST /save_point`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavedPoints {
    pub message: String,
    pub points: Vec<Point>
}

type SharedStore = Arc<dyn PointStore>;

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/save_point", post(save_point))
        .route("/get_points", get(get_points))
        .with_state(store)
}

async fn save_point(
    State(store): State<SharedStore>,
    Json(request): Json<SavePoint>
) -> Json<SavedPoints> {
    let point = Point::new(request.x, request.y);
    let points = store.append(point);

    log::info!("Point saved: ({:?}, {:?}), {} stored", point.x(), point.y(), points.len());

    Json(SavedPoints {
        message: SAVED_MESSAGE.to_string(),
        points
    })
}

async fn get_points(State(store): State<SharedStore>) -> Json<Vec<Point>> {
    let points = store.list();
    log::debug!("Listing {} points", points.len());

    Json(points)
}

async fn bind(addr: SocketAddr) -> Result<(TcpListener, SocketAddr), ServerError> {
    let listener = TcpListener::bind(addr).await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local_addr = listener.local_addr()
        .map_err(|source| ServerError::Bind { addr, source })?;

    log::info!("Point store listening on http://{}", local_addr);

    Ok((listener, local_addr))
}

/// Serves on the current runtime until the process exits.
pub async fn serve(addr: SocketAddr, store: SharedStore) -> Result<(), ServerError> {
    let (listener, _) = bind(addr).await?;

    axum::serve(listener, router(store)).await
        .map_err(ServerError::Serve)
}

/// A point store running on its own thread. Dropping the handle shuts the
/// server down and waits for the thread to finish.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<thread::JoinHandle<()>>
}

impl ServerHandle {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }

        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("Point store thread panicked");
            }
        }
    }
}

/// Starts the point store on a dedicated thread with a single-threaded
/// runtime and returns once the listener is bound. Port `0` binds an
/// ephemeral port; [`ServerHandle::addr`] reports the one chosen.
pub fn spawn(addr: SocketAddr, store: SharedStore) -> Result<ServerHandle, ServerError> {
    let (startup_tx, startup_rx) = mpsc::channel();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let thread = thread::Builder::new()
        .name("point-store".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    let _ = startup_tx.send(Err(ServerError::Runtime(e)));
                    return;
                }
            };

            runtime.block_on(async move {
                let listener = match bind(addr).await {
                    Ok((listener, local_addr)) => {
                        let _ = startup_tx.send(Ok(local_addr));
                        listener
                    },
                    Err(e) => {
                        let _ = startup_tx.send(Err(e));
                        return;
                    }
                };

                let server = axum::serve(listener, router(store))
                    .with_graceful_shutdown(async {
                        shutdown_rx.await.ok();
                    });

                if let Err(e) = server.await {
                    log::error!("{}", ServerError::Serve(e));
                }
            });
        })
        .map_err(ServerError::Thread)?;

    let addr = startup_rx.recv()
        .map_err(|_| ServerError::Startup)??;

    Ok(ServerHandle {
        addr,
        shutdown: Some(shutdown_tx),
        thread: Some(thread)
    })
}
