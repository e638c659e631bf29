//! Client for the external training service.
//!
//! The request is blocking, so it runs on its own thread and the result is
//! handed back to the UI thread through a channel polled every frame.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use serde::{Deserialize, Serialize};

use crate::editor::Dataset;
use crate::error::{PlaygroundError, Result};
use crate::model::LayerSpec;

#[derive(Debug, Clone, Serialize)]
pub struct TrainRequest {
    pub dataset: Dataset,
    pub layers: Vec<LayerSpec>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainResponse {
    #[serde(default)]
    pub dataset_name: Option<String>,
    pub num_layers: usize,
    pub neurons_per_layer: Vec<usize>,
    pub loss: f64,
}

#[derive(Debug, Clone)]
pub struct TrainingClient {
    endpoint: String,
}

impl TrainingClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn submit(&self, request: &TrainRequest) -> Result<TrainResponse> {
        log::info!(
            "submitting {} layers ({}) to {}",
            request.layers.len(),
            request.dataset.name,
            self.endpoint
        );
        ureq::post(&self.endpoint)
            .send_json(request)
            .map_err(PlaygroundError::Http)?
            .body_mut()
            .read_json()
            .map_err(PlaygroundError::Decode)
    }
}

/// A training request in flight.
pub struct TrainingJob {
    rx: Receiver<Result<TrainResponse>>,
}

impl TrainingJob {
    pub fn spawn(client: TrainingClient, request: TrainRequest) -> Self {
        Self::spawn_with(move || client.submit(&request))
    }

    pub fn spawn_with<F>(work: F) -> Self
    where
        F: FnOnce() -> Result<TrainResponse> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // the UI may have dropped the job; nothing to report then
            let _ = tx.send(work());
        });
        Self { rx }
    }

    /// `None` while the request is still running.
    pub fn poll(&self) -> Option<Result<TrainResponse>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(PlaygroundError::WorkerGone)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LossHistory {
    losses: Vec<f64>,
}

impl LossHistory {
    pub fn push(&mut self, loss: f64) {
        self.losses.push(loss);
    }

    pub fn latest(&self) -> Option<f64> {
        self.losses.last().copied()
    }

    pub fn len(&self) -> usize {
        self.losses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }

    /// `[run, loss]` pairs for plotting, runs numbered from 1.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.losses
            .iter()
            .enumerate()
            .map(|(i, &loss)| [(i + 1) as f64, loss])
            .collect()
    }
}
