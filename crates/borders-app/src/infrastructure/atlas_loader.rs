//! Cancellable one-shot fetch of the world atlas.
//!
//! The atlas is the only asynchronous dependency of a session.  It is fetched
//! once on a Tokio task and kept in memory for the rest of the session.
//!
//! # Cancellation
//!
//! ```text
//!   AtlasLoader::spawn ──► task: select! { cancel signal, source.fetch() }
//!                                   │                 │
//!                               Cancelled        Ready / Failed
//! ```
//!
//! The task races the fetch against a `watch` channel.  When the loader is
//! cancelled (explicitly or by being dropped) the fetch future is dropped and
//! the state becomes `Cancelled`; a result that arrives after cancellation is
//! never stored.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use borders_core::{Atlas, AtlasError};
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Error type for atlas fetches.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The atlas file could not be read.
    #[error("could not read atlas at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The atlas was read but could not be decoded.
    #[error(transparent)]
    Atlas(#[from] AtlasError),
}

/// Where the atlas comes from.
#[async_trait]
pub trait AtlasSource: Send + Sync {
    /// Human-readable location, used in log messages.
    fn location(&self) -> String;

    /// Fetches and decodes the atlas.
    async fn fetch(&self) -> Result<Atlas, LoadError>;
}

/// Reads a TopoJSON/GeoJSON file from the local file system.
#[derive(Debug, Clone)]
pub struct FileAtlasSource {
    path: PathBuf,
}

impl FileAtlasSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AtlasSource for FileAtlasSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Atlas, LoadError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(Atlas::from_json(&text)?)
    }
}

/// Progress of an atlas load.
#[derive(Debug, Clone)]
pub enum LoadState {
    Pending,
    Ready(Arc<Atlas>),
    /// The fetch failed; the map stays hidden.
    Failed(String),
    Cancelled,
}

impl LoadState {
    pub fn is_finished(&self) -> bool {
        !matches!(self, LoadState::Pending)
    }
}

/// Handle to a running atlas fetch.
///
/// Dropping the handle cancels the fetch.
#[derive(Debug)]
pub struct AtlasLoader {
    cancel_tx: watch::Sender<bool>,
    state_rx: watch::Receiver<LoadState>,
    task: JoinHandle<()>,
}

impl AtlasLoader {
    /// Starts fetching from `source` on the current Tokio runtime.
    pub fn spawn(source: Arc<dyn AtlasSource>) -> Self {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);
        let (state_tx, state_rx) = watch::channel(LoadState::Pending);

        let task = tokio::spawn(async move {
            let location = source.location();
            debug!("fetching atlas from {location}");

            let state = tokio::select! {
                biased;
                _ = cancelled(&mut cancel_rx) => LoadState::Cancelled,
                result = source.fetch() => match result {
                    Ok(atlas) => {
                        info!("atlas loaded from {location}: {} countries", atlas.len());
                        LoadState::Ready(Arc::new(atlas))
                    }
                    Err(e) => {
                        warn!("atlas unavailable, map disabled: {e}");
                        LoadState::Failed(e.to_string())
                    }
                },
            };

            // A cancel that raced the fetch to completion still wins.
            let state = if *cancel_rx.borrow() {
                LoadState::Cancelled
            } else {
                state
            };
            if matches!(state, LoadState::Cancelled) {
                debug!("atlas fetch from {location} cancelled");
            }
            // The loader may already be gone; nothing to store then.
            let _ = state_tx.send(state);
        });

        Self {
            cancel_tx,
            state_rx,
            task,
        }
    }

    /// Requests cancellation.  Has no effect once the load has finished.
    pub fn cancel(&self) {
        self.cancel_tx.send_replace(true);
    }

    /// Current state without waiting.
    pub fn state(&self) -> LoadState {
        self.state_rx.borrow().clone()
    }

    /// The atlas, if it has been loaded.
    pub fn atlas(&self) -> Option<Arc<Atlas>> {
        match &*self.state_rx.borrow() {
            LoadState::Ready(atlas) => Some(Arc::clone(atlas)),
            _ => None,
        }
    }

    /// Waits until the load finishes and returns its final state.
    pub async fn wait(&self) -> LoadState {
        let mut rx = self.state_rx.clone();
        let state = match rx.wait_for(LoadState::is_finished).await {
            Ok(state) => state.clone(),
            // The task ended without reporting, e.g. it panicked.
            Err(_) => LoadState::Failed("atlas task ended unexpectedly".to_string()),
        };
        state
    }

    /// `true` once the background task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Resolves once cancellation is requested or the loader is gone.
async fn cancelled(rx: &mut watch::Receiver<bool>) {
    while !*rx.borrow_and_update() {
        if rx.changed().await.is_err() {
            return;
        }
    }
}

impl Drop for AtlasLoader {
    fn drop(&mut self) {
        self.cancel_tx.send_replace(true);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Notify;
    use uuid::Uuid;

    const TINY_GEOJSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": { "name": "Chad" },
            "geometry": { "type": "Polygon",
                          "coordinates": [[[14, 8], [15, 8], [15, 9], [14, 8]]] }
        }]
    }"#;

    // ── Test doubles ──────────────────────────────────────────────────────────

    /// Source that blocks until released, then records that it finished.
    #[derive(Default)]
    struct GatedSource {
        release: Notify,
        completed: AtomicBool,
    }

    #[async_trait]
    impl AtlasSource for GatedSource {
        fn location(&self) -> String {
            "gated".to_string()
        }

        async fn fetch(&self) -> Result<Atlas, LoadError> {
            self.release.notified().await;
            self.completed.store(true, Ordering::SeqCst);
            Ok(Atlas::from_json(TINY_GEOJSON)?)
        }
    }

    fn temp_file(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("borders_atlas_{}.json", Uuid::new_v4()));
        std::fs::write(&path, content).unwrap();
        path
    }

    // ── Tests ─────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_file_source_loads_atlas() {
        // Arrange
        let path = temp_file(TINY_GEOJSON);
        let loader = AtlasLoader::spawn(Arc::new(FileAtlasSource::new(&path)));

        // Act
        let state = loader.wait().await;

        // Assert
        assert!(matches!(state, LoadState::Ready(_)));
        assert!(loader.atlas().unwrap().get("Chad").is_some());

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_missing_file_fails_without_panicking() {
        let loader = AtlasLoader::spawn(Arc::new(FileAtlasSource::new(
            "/nonexistent/borders/atlas.json",
        )));

        let state = loader.wait().await;

        assert!(matches!(state, LoadState::Failed(ref msg) if msg.contains("could not read")));
        assert!(loader.atlas().is_none());
    }

    #[tokio::test]
    async fn test_malformed_file_fails() {
        let path = temp_file("not json");
        let loader = AtlasLoader::spawn(Arc::new(FileAtlasSource::new(&path)));

        assert!(matches!(loader.wait().await, LoadState::Failed(_)));

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_cancelled_load_never_stores_late_result() {
        // Arrange
        let source = Arc::new(GatedSource::default());
        let loader = AtlasLoader::spawn(source.clone());

        // Act: cancel while the fetch is still blocked, then release it.
        loader.cancel();
        let state = loader.wait().await;
        source.release.notify_one();
        tokio::task::yield_now().await;

        // Assert
        assert!(matches!(state, LoadState::Cancelled));
        assert!(loader.atlas().is_none());
        assert!(matches!(loader.state(), LoadState::Cancelled));
        assert!(!source.completed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_released_gate_completes_load() {
        let source = Arc::new(GatedSource::default());
        let loader = AtlasLoader::spawn(source.clone());
        assert!(matches!(loader.state(), LoadState::Pending));

        source.release.notify_one();

        assert!(matches!(loader.wait().await, LoadState::Ready(_)));
        assert!(source.completed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_cancel_after_completion_keeps_atlas() {
        let path = temp_file(TINY_GEOJSON);
        let loader = AtlasLoader::spawn(Arc::new(FileAtlasSource::new(&path)));
        loader.wait().await;

        loader.cancel();

        assert!(loader.atlas().is_some());
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_dropping_loader_stops_the_task() {
        let source = Arc::new(GatedSource::default());
        let loader = AtlasLoader::spawn(source.clone());
        let mut cancel_rx = loader.cancel_tx.subscribe();

        drop(loader);

        assert!(*cancel_rx.borrow_and_update());
        source.release.notify_one();
        tokio::task::yield_now().await;
        assert!(!source.completed.load(Ordering::SeqCst));
    }
}
