use std::time::Duration;

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::config::AppConfig;
use crate::editor::{self, FormAction, NetworkDraft};
use crate::surface::NetworkSurface;
use crate::training::{LossHistory, TrainRequest, TrainingClient, TrainingJob};

const JOB_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct PlaygroundApp {
    status: String,
    draft: NetworkDraft,
    surface: NetworkSurface,
    client: TrainingClient,
    job: Option<TrainingJob>,
    losses: LossHistory,
    visualization_height: f32,
}

impl PlaygroundApp {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            status: "Select a dataset to start".into(),
            draft: NetworkDraft::default(),
            surface: NetworkSurface::new(config.seed),
            client: TrainingClient::new(config.endpoint.clone()),
            job: None,
            losses: LossHistory::default(),
            visualization_height: config.visualization_height,
        }
    }

    fn handle_form(&mut self, action: FormAction) {
        match action {
            FormAction::Generate => {
                if let Some(layers) = self.draft.generate() {
                    self.status = format!("Generated network with {} layers", layers.len());
                    self.surface.set_layers(layers);
                }
            }
            FormAction::Train => self.start_training(),
        }
    }

    fn start_training(&mut self) {
        if self.job.is_some() {
            return;
        }
        let (Some(dataset), Some(layers)) = (self.draft.dataset(), self.draft.submitted()) else {
            return;
        };
        let request = TrainRequest {
            dataset,
            layers: layers.to_vec(),
        };
        self.status = format!("Training on {}...", dataset.name);
        self.job = Some(TrainingJob::spawn(self.client.clone(), request));
    }

    fn poll_training(&mut self, ctx: &egui::Context) {
        let Some(job) = &self.job else {
            return;
        };
        match job.poll() {
            None => ctx.request_repaint_after(JOB_POLL_INTERVAL),
            Some(Ok(response)) => {
                log::info!(
                    "training finished: loss {:.4} over {:?}",
                    response.loss,
                    response.neurons_per_layer
                );
                self.losses.push(response.loss);
                self.status = format!("Loss: {:.4}", response.loss);
                self.job = None;
            }
            Some(Err(e)) => {
                log::error!("training failed: {e}");
                self.status = format!("Training failed: {e}");
                self.job = None;
            }
        }
    }

    fn draw_loss_history(&self, ui: &mut egui::Ui) {
        ui.heading("Loss History");
        match self.losses.latest() {
            Some(loss) => ui.label(format!("Latest loss: {loss:.4} ({} runs)", self.losses.len())),
            None => ui.label("No training runs yet"),
        };
        if !self.losses.is_empty() {
            Plot::new("loss_history")
                .height(160.0)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(PlotPoints::from(self.losses.points())));
                });
        }
    }
}

impl eframe::App for PlaygroundApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_training(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(&self.status);
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                editor::dataset_form(ui, &mut self.draft);
                ui.separator();
                if let Some(action) = editor::network_form(ui, &mut self.draft) {
                    self.handle_form(action);
                }
                if self.job.is_some() {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Waiting for the training service");
                    });
                }
                ui.separator();
                self.draw_loss_history(ui);
                ui.separator();
                let size = egui::vec2(ui.available_width(), self.visualization_height);
                ui.allocate_ui(size, |ui| {
                    ui.set_min_size(size);
                    self.surface.show(ui);
                });
            });
        });
    }
}
