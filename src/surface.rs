//! The visualization surface: owns the layout, the viewport and the
//! animation for as long as it is mounted, and paints them with egui.

use std::time::{Duration, Instant};

use eframe::egui;
use rand::rngs::StdRng;

use crate::animation::{AnimationController, AnimationState};
use crate::controls::{self, AnimationCommand, ZoomCommand};
use crate::geometry::{ScaleBounds, Size};
use crate::layout::Layout;
use crate::model::{LayerSpec, NeuronId, Point};
use crate::randomize;
use crate::scene::{ARROW_HEAD, Scene};
use crate::ticker::Ticker;
use crate::viewport::{self, ViewportController};

const OVERLAY_MARGIN: f32 = 12.0;
const OVERLAY_HEIGHT: f32 = 40.0;

pub struct NetworkSurface {
    layers: Vec<LayerSpec>,
    container: Size,
    generation: u64,
    layout: Option<Layout>,
    viewport: ViewportController,
    animation: AnimationController,
    ticker: Ticker,
    rng: StdRng,
}

impl NetworkSurface {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            layers: Vec::new(),
            container: Size::default(),
            generation: 0,
            layout: None,
            viewport: ViewportController::new(ScaleBounds::default()),
            animation: AnimationController::new(0),
            ticker: Ticker::new(),
            rng: randomize::make_rng(seed),
        }
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn animation(&self) -> &AnimationState {
        self.animation.state()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    /// Replaces the whole configuration. The layout and viewport fit are
    /// rebuilt first, then the animation is reset for the new network.
    pub fn set_layers(&mut self, layers: Vec<LayerSpec>) {
        log::info!(
            "network configuration: {:?}",
            layers.iter().map(|l| l.neurons).collect::<Vec<_>>()
        );
        self.layers = layers;
        self.rebuild();
        self.animation.set_layer_count(self.layers.len());
        self.ticker.stop();
        self.sync();
    }

    /// Rebuilds on any change of bounds. Animation progress is kept.
    pub fn set_container(&mut self, container: Size) {
        if container == self.container {
            return;
        }
        self.container = container;
        self.rebuild();
        self.sync();
    }

    fn rebuild(&mut self) {
        if self.container.is_degenerate() || self.layers.is_empty() {
            self.layout = None;
            return;
        }
        self.generation += 1;
        let layout = Layout::generate(&self.layers, self.container, self.generation, &mut self.rng);
        self.viewport.reset_to_fit(layout.dimensions, self.container);
        self.layout = Some(layout);
    }

    /// Pushes the current animation snapshot into the layout and the
    /// viewport lock.
    fn sync(&mut self) {
        self.viewport.set_locked(self.animation.is_playing());
        let frame = self.animation.frame();
        if let Some(layout) = &mut self.layout {
            layout.apply_frame(frame);
        }
    }

    pub fn play(&mut self, now: Instant) {
        self.animation.play();
        self.ticker.start(now);
        self.sync();
    }

    pub fn pause(&mut self) {
        self.animation.pause();
        self.ticker.stop();
        self.sync();
    }

    pub fn step(&mut self) {
        self.animation.step();
        self.sync();
    }

    /// Back to idle with fresh placeholder values.
    pub fn reset(&mut self) {
        self.animation.reset();
        self.ticker.stop();
        if let Some(layout) = &mut self.layout {
            layout.restamp(&mut self.rng);
        }
        self.sync();
    }

    /// Advances the animation when its interval has elapsed. Returns how long
    /// until the next step is due while playing.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        if !self.animation.is_playing() {
            return None;
        }
        let speed = self.animation.state().speed;
        if self.ticker.poll(now, speed) {
            self.step();
        }
        self.ticker.time_until_next(now, speed)
    }

    pub fn apply_animation(&mut self, command: AnimationCommand, now: Instant) {
        match command {
            AnimationCommand::Play => self.play(now),
            AnimationCommand::Pause => self.pause(),
            AnimationCommand::Step => self.step(),
            AnimationCommand::Reset => self.reset(),
            AnimationCommand::SlowDown => self.animation.slow_down(),
            AnimationCommand::SpeedUp => self.animation.speed_up(),
        }
    }

    pub fn apply_zoom(&mut self, command: ZoomCommand) {
        match command {
            ZoomCommand::In => self.viewport.zoom_in(),
            ZoomCommand::Out => self.viewport.zoom_out(),
            ZoomCommand::Reset => {
                if let Some(layout) = &self.layout {
                    self.viewport.reset_to_fit(layout.dimensions, self.container);
                }
            }
        }
    }

    fn neuron_under(&self, pointer: Point) -> Option<NeuronId> {
        let layout = self.layout.as_ref()?;
        let vp = self.viewport.viewport();
        let target = vp.to_layout(pointer);
        let radius = crate::layout::NEURON_RADIUS / vp.scale;
        layout
            .neurons
            .iter()
            .find(|n| {
                let dx = n.position.x - target.x;
                let dy = n.position.y - target.y;
                dx * dx + dy * dy <= radius * radius
            })
            .map(|n| n.id)
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::drag());
        self.set_container(Size::new(rect.width(), rect.height()));

        let painter = ui.painter_at(rect);
        let stroke = egui::Stroke::new(2.0, egui::Color32::DARK_GRAY);
        let corners = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
        ];
        for i in 0..corners.len() {
            painter.line_segment([corners[i], corners[(i + 1) % corners.len()]], stroke);
        }
        if self.layout.is_none() {
            return;
        }

        let local = |pos: egui::Pos2| Point::new(pos.x - rect.min.x, pos.y - rect.min.y);
        if let Some(pos) = response.hover_pos() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                // egui reports wheel-up as positive, the zoom curve expects the opposite
                self.viewport
                    .zoom_at(local(pos), viewport::wheel_factor(-scroll));
            }
            // wheel over the diagram never reaches an enclosing ScrollArea,
            // including the smoothed tail of earlier notches
            ui.input_mut(|i| {
                i.raw_scroll_delta = egui::Vec2::ZERO;
                i.smooth_scroll_delta = egui::Vec2::ZERO;
            });
        }
        if response.dragged() {
            let delta = response.drag_delta();
            self.viewport.pan(delta.x, delta.y);
        }

        let now = Instant::now();
        if let Some(wait) = self.tick(now) {
            ui.ctx().request_repaint_after(wait);
        }

        if let Some(layout) = &self.layout {
            let vp = self.viewport.viewport();
            let scene = Scene::build(layout, vp, self.animation.state().phase);
            paint_scene(&painter, &scene, rect.min, vp);
        }

        if let Some(id) = response.hover_pos().and_then(|pos| self.neuron_under(local(pos))) {
            if let Some(neuron) = self.layout.as_ref().and_then(|l| l.neurons.iter().find(|n| n.id == id)) {
                let info = format!(
                    "Neuron {}\nLayer: {}\nValue: {:.4}",
                    neuron.id, neuron.id.layer, neuron.value
                );
                response.clone().on_hover_text_at_pointer(info);
            }
        }

        let left = egui::Rect::from_min_max(
            egui::pos2(rect.left() + OVERLAY_MARGIN, rect.bottom() - OVERLAY_MARGIN - OVERLAY_HEIGHT),
            egui::pos2(rect.center().x, rect.bottom() - OVERLAY_MARGIN),
        );
        let animation_cmd = ui
            .scope_builder(egui::UiBuilder::new().max_rect(left), |ui| {
                controls::animation_controls(ui, self.animation.state())
            })
            .inner;

        let right = egui::Rect::from_min_max(
            egui::pos2(rect.center().x, rect.bottom() - OVERLAY_MARGIN - OVERLAY_HEIGHT),
            egui::pos2(rect.right() - OVERLAY_MARGIN, rect.bottom() - OVERLAY_MARGIN),
        );
        let zoom_cmd = ui
            .scope_builder(
                egui::UiBuilder::new()
                    .max_rect(right)
                    .layout(egui::Layout::right_to_left(egui::Align::Min)),
                |ui| controls::zoom_controls(ui, self.viewport.zoom_percent()),
            )
            .inner;

        if let Some(cmd) = animation_cmd {
            self.apply_animation(cmd, now);
            if self.animation.is_playing() {
                ui.ctx().request_repaint();
            }
        }
        if let Some(cmd) = zoom_cmd {
            self.apply_zoom(cmd);
        }
    }
}

fn paint_scene(painter: &egui::Painter, scene: &Scene, origin: egui::Pos2, vp: viewport::Viewport) {
    let to_screen = |p: Point| {
        let s = vp.to_screen(p);
        origin + egui::vec2(s.x, s.y)
    };

    for arrow in &scene.arrows {
        let color = arrow.color.gamma_multiply(arrow.opacity);
        let from = to_screen(arrow.from);
        let to = to_screen(arrow.to);
        let dir = (to - from).normalized();
        // stop at the neuron rim so the head stays visible
        let rim = crate::layout::NEURON_RADIUS;
        let tip = to - dir * rim;
        painter.line_segment([from, tip], egui::Stroke::new(arrow.width * vp.scale, color));

        let head = ARROW_HEAD * vp.scale;
        let normal = dir.rot90();
        let base = tip - dir * head;
        painter.add(egui::Shape::convex_polygon(
            vec![tip, base + normal * head * 0.5, base - normal * head * 0.5],
            color,
            egui::Stroke::NONE,
        ));
    }

    for neuron in &scene.neurons {
        painter.circle(
            to_screen(neuron.center),
            neuron.radius * vp.scale,
            neuron.fill,
            egui::Stroke::new(neuron.stroke_width * vp.scale, neuron.stroke),
        );
    }
}
