use eframe::egui;

use crate::animation::{AnimationState, MAX_SPEED, MIN_SPEED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationCommand {
    Play,
    Pause,
    Step,
    Reset,
    SlowDown,
    SpeedUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomCommand {
    In,
    Out,
    Reset,
}

pub fn speed_label(speed: f32) -> String {
    format!("{speed}x")
}

pub fn zoom_label(percent: i32) -> String {
    format!("{percent}%")
}

pub fn animation_controls(ui: &mut egui::Ui, state: &AnimationState) -> Option<AnimationCommand> {
    let mut command = None;
    egui::Frame::popup(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            let (label, cmd) = if state.is_playing {
                ("Pause", AnimationCommand::Pause)
            } else {
                ("Play", AnimationCommand::Play)
            };
            if ui.button(label).clicked() {
                command = Some(cmd);
            }
            if ui
                .add_enabled(!state.is_playing, egui::Button::new("Step"))
                .clicked()
            {
                command = Some(AnimationCommand::Step);
            }
            if ui.button("Reset").clicked() {
                command = Some(AnimationCommand::Reset);
            }
            ui.separator();
            if ui
                .add_enabled(state.speed > MIN_SPEED, egui::Button::new("-"))
                .on_hover_text("Slower")
                .clicked()
            {
                command = Some(AnimationCommand::SlowDown);
            }
            ui.label(speed_label(state.speed));
            if ui
                .add_enabled(state.speed < MAX_SPEED, egui::Button::new("+"))
                .on_hover_text("Faster")
                .clicked()
            {
                command = Some(AnimationCommand::SpeedUp);
            }
            ui.separator();
            ui.label(state.phase.to_string());
            ui.label(format!("Iteration: {}", state.iteration));
        });
    });
    command
}

pub fn zoom_controls(ui: &mut egui::Ui, percent: i32) -> Option<ZoomCommand> {
    let mut command = None;
    egui::Frame::popup(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            if ui.button("-").on_hover_text("Zoom Out").clicked() {
                command = Some(ZoomCommand::Out);
            }
            ui.label(zoom_label(percent));
            if ui.button("+").on_hover_text("Zoom In").clicked() {
                command = Some(ZoomCommand::In);
            }
            if ui.button("Reset View").on_hover_text("Reset Zoom").clicked() {
                command = Some(ZoomCommand::Reset);
            }
        });
    });
    command
}
