use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

use log::{debug, warn};
use tokio::runtime::{Builder, Runtime};

use crate::api::{ApiError, SearchBackend, SearchResult};
use crate::view::PendingSearch;

/// Something a background task finished.
#[derive(Debug)]
pub(crate) enum BackendEvent {
	SearchCompleted {
		id: u64,
		outcome: Result<Vec<SearchResult>, ApiError>,
	},
	ImageProbed {
		search_id: u64,
		index: usize,
		available: bool,
	},
	Saved {
		outcome: Result<PathBuf, ApiError>,
	},
}

/// Runs backend calls off the UI thread and hands their results back over a
/// channel that the event loop drains each frame.
pub(crate) struct SearchRuntime {
	runtime: Option<Runtime>,
	backend: Arc<dyn SearchBackend>,
	tx: Sender<BackendEvent>,
	rx: Receiver<BackendEvent>,
	in_flight: usize,
}

impl SearchRuntime {
	pub(crate) fn new(backend: Arc<dyn SearchBackend>) -> io::Result<Self> {
		let runtime = Builder::new_multi_thread()
			.worker_threads(2)
			.thread_name("maps4study-http")
			.enable_all()
			.build()?;
		let (tx, rx) = channel();
		Ok(Self {
			runtime: Some(runtime),
			backend,
			tx,
			rx,
			in_flight: 0,
		})
	}

	pub(crate) fn issue_search(&mut self, pending: PendingSearch) {
		let PendingSearch { id, request } = pending;
		let backend = Arc::clone(&self.backend);
		let tx = self.tx.clone();
		self.spawn(async move {
			let outcome = backend.search(&request).await;
			if let Err(err) = &outcome {
				warn!("search #{id} failed: {err}");
			}
			let _ = tx.send(BackendEvent::SearchCompleted { id, outcome });
		});
	}

	/// Check every image of search `search_id`, reporting one event per image.
	pub(crate) fn probe_images(&mut self, search_id: u64, images: Vec<String>) {
		for (index, image) in images.into_iter().enumerate() {
			let backend = Arc::clone(&self.backend);
			let tx = self.tx.clone();
			self.spawn(async move {
				let available = backend.probe_image(&image).await;
				if !available {
					debug!("image {image:?} is unavailable");
				}
				let _ = tx.send(BackendEvent::ImageProbed {
					search_id,
					index,
					available,
				});
			});
		}
	}

	pub(crate) fn save(&mut self, image: String, dest_dir: PathBuf) {
		let backend = Arc::clone(&self.backend);
		let tx = self.tx.clone();
		self.spawn(async move {
			let outcome = backend.download(&image, &dest_dir).await;
			let _ = tx.send(BackendEvent::Saved { outcome });
		});
	}

	pub(crate) fn try_recv(&mut self) -> Result<BackendEvent, TryRecvError> {
		let event = self.rx.try_recv()?;
		self.in_flight = self.in_flight.saturating_sub(1);
		Ok(event)
	}

	/// Whether any spawned task has yet to report back.
	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight > 0
	}

	pub(crate) fn shutdown(&mut self) {
		if let Some(runtime) = self.runtime.take() {
			runtime.shutdown_background();
		}
	}

	fn spawn<F>(&mut self, task: F)
	where
		F: std::future::Future<Output = ()> + Send + 'static,
	{
		if let Some(runtime) = &self.runtime {
			runtime.spawn(task);
			self.in_flight += 1;
		}
	}
}
