//! Forward/backward phase sequencing over the layers of the current network.
//!
//! The controller only tracks which layer is "in flight". Which neurons and
//! connections light up is derived from an [`ActivityFrame`] snapshot so both
//! sets are always recoloured from the same `(phase, layer)` pair.

use std::fmt;

pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 2.0;
pub const SPEED_STEP: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Forward,
    Backward,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Idle => "Ready",
            Phase::Forward => "Forward Pass",
            Phase::Backward => "Backward Pass",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub is_playing: bool,
    pub phase: Phase,
    pub current_layer: usize,
    pub speed: f32,
    pub iteration: u32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            is_playing: false,
            phase: Phase::Idle,
            current_layer: 0,
            speed: 1.0,
            iteration: 0,
        }
    }
}

/// Activation snapshot for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityFrame {
    pub phase: Phase,
    pub current_layer: usize,
    pub layer_count: usize,
}

impl ActivityFrame {
    /// Layer whose neurons are lit, if any.
    pub fn active_layer(&self) -> Option<usize> {
        match self.phase {
            Phase::Idle => None,
            Phase::Forward => Some(self.current_layer),
            Phase::Backward => self
                .layer_count
                .checked_sub(1)?
                .checked_sub(self.current_layer),
        }
    }

    /// The single layer-to-layer edge in flight, if any.
    ///
    /// Forward at layer 0 has none: nothing feeds the input layer.
    pub fn active_edge(&self) -> Option<(usize, usize)> {
        match self.phase {
            Phase::Idle => None,
            Phase::Forward => self
                .current_layer
                .checked_sub(1)
                .map(|from| (from, self.current_layer)),
            Phase::Backward => {
                let to = self
                    .layer_count
                    .checked_sub(1)?
                    .checked_sub(self.current_layer)?;
                to.checked_sub(1).map(|from| (from, to))
            }
        }
    }

    pub fn neuron_active(&self, layer: usize) -> bool {
        self.active_layer() == Some(layer)
    }

    pub fn connection_active(&self, from_layer: usize, to_layer: usize) -> bool {
        self.active_edge() == Some((from_layer, to_layer))
    }
}

#[derive(Debug, Clone)]
pub struct AnimationController {
    state: AnimationState,
    layer_count: usize,
}

impl AnimationController {
    pub fn new(layer_count: usize) -> Self {
        Self {
            state: AnimationState::default(),
            layer_count,
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// A new network invalidates whatever was in progress.
    pub fn set_layer_count(&mut self, layer_count: usize) {
        self.layer_count = layer_count;
        self.state = AnimationState::default();
    }

    /// Always restarts at the first forward layer; pausing is the only way
    /// to keep a position.
    pub fn play(&mut self) {
        self.state.is_playing = true;
        self.state.phase = Phase::Forward;
        self.state.current_layer = 0;
    }

    pub fn pause(&mut self) {
        self.state.is_playing = false;
    }

    pub fn toggle(&mut self) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advances one layer, wrapping forward into backward and backward into
    /// the next iteration. From `Idle` the first step enters the forward
    /// phase at layer 0 instead of advancing an idle layer index.
    pub fn step(&mut self) {
        if self.layer_count == 0 {
            return;
        }
        let next = self.state.current_layer + 1;
        let overflow = next >= self.layer_count;
        match self.state.phase {
            Phase::Idle => {
                self.state.phase = Phase::Forward;
                self.state.current_layer = 0;
            }
            Phase::Forward if overflow => {
                self.state.phase = Phase::Backward;
                self.state.current_layer = 0;
            }
            Phase::Backward if overflow => {
                self.state.phase = Phase::Forward;
                self.state.current_layer = 0;
                self.state.iteration += 1;
                log::debug!("animation iteration {} started", self.state.iteration);
            }
            Phase::Forward | Phase::Backward => self.state.current_layer = next,
        }
    }

    pub fn reset(&mut self) {
        self.state = AnimationState::default();
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.state.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    pub fn speed_up(&mut self) {
        self.set_speed(self.state.speed + SPEED_STEP);
    }

    pub fn slow_down(&mut self) {
        self.set_speed(self.state.speed - SPEED_STEP);
    }

    pub fn frame(&self) -> ActivityFrame {
        ActivityFrame {
            phase: self.state.phase,
            current_layer: self.state.current_layer,
            layer_count: self.layer_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(ctrl: &mut AnimationController, steps: usize) -> Vec<(Phase, usize, u32)> {
        (0..steps)
            .map(|_| {
                ctrl.step();
                let s = ctrl.state();
                (s.phase, s.current_layer, s.iteration)
            })
            .collect()
    }

    #[test]
    fn three_layers_cycle_forward_then_backward() {
        let mut ctrl = AnimationController::new(3);
        ctrl.play();
        assert_eq!(ctrl.state().phase, Phase::Forward);
        assert_eq!(ctrl.state().current_layer, 0);

        let seq = trace(&mut ctrl, 6);
        assert_eq!(
            seq,
            vec![
                (Phase::Forward, 1, 0),
                (Phase::Forward, 2, 0),
                (Phase::Backward, 0, 0),
                (Phase::Backward, 1, 0),
                (Phase::Backward, 2, 0),
                (Phase::Forward, 0, 1),
            ]
        );
    }

    #[test]
    fn five_steps_land_in_backward_layer_one() {
        let mut ctrl = AnimationController::new(3);
        ctrl.play();
        for _ in 0..5 {
            ctrl.step();
        }
        assert_eq!(ctrl.state().phase, Phase::Backward);
        assert_eq!(ctrl.state().current_layer, 1);
    }

    #[test]
    fn pause_keeps_position() {
        let mut ctrl = AnimationController::new(4);
        ctrl.play();
        ctrl.step();
        ctrl.step();
        ctrl.pause();
        let s = ctrl.state();
        assert!(!s.is_playing);
        assert_eq!((s.phase, s.current_layer), (Phase::Forward, 2));
    }

    #[test]
    fn play_restarts_from_first_layer() {
        let mut ctrl = AnimationController::new(4);
        ctrl.play();
        ctrl.step();
        ctrl.step();
        ctrl.pause();
        ctrl.play();
        assert_eq!(ctrl.state().current_layer, 0);
        assert_eq!(ctrl.state().phase, Phase::Forward);
    }

    #[test]
    fn toggle_flips_playing() {
        let mut ctrl = AnimationController::new(3);
        ctrl.toggle();
        assert!(ctrl.is_playing());
        ctrl.step();
        ctrl.toggle();
        assert!(!ctrl.is_playing());
        assert_eq!(ctrl.state().current_layer, 1);
    }

    #[test]
    fn reset_returns_to_defaults() {
        let mut ctrl = AnimationController::new(3);
        ctrl.play();
        ctrl.set_speed(2.0);
        trace(&mut ctrl, 7);
        ctrl.reset();
        assert_eq!(*ctrl.state(), AnimationState::default());
    }

    #[test]
    fn speed_is_clamped() {
        let mut ctrl = AnimationController::new(3);
        ctrl.set_speed(10.0);
        assert_eq!(ctrl.state().speed, MAX_SPEED);
        ctrl.set_speed(0.0);
        assert_eq!(ctrl.state().speed, MIN_SPEED);
        ctrl.slow_down();
        assert_eq!(ctrl.state().speed, MIN_SPEED);
        ctrl.speed_up();
        ctrl.speed_up();
        assert_eq!(ctrl.state().speed, 1.5);
    }

    #[test]
    fn speed_does_not_move_phase() {
        let mut ctrl = AnimationController::new(3);
        ctrl.play();
        ctrl.step();
        ctrl.set_speed(2.0);
        assert_eq!(ctrl.state().current_layer, 1);
        assert_eq!(ctrl.state().phase, Phase::Forward);
    }

    #[test]
    fn new_layer_count_discards_progress() {
        let mut ctrl = AnimationController::new(3);
        ctrl.play();
        trace(&mut ctrl, 4);
        ctrl.set_layer_count(5);
        assert_eq!(*ctrl.state(), AnimationState::default());
        assert_eq!(ctrl.frame().layer_count, 5);
    }

    #[test]
    fn step_from_idle_enters_forward_at_input() {
        let mut ctrl = AnimationController::new(3);
        ctrl.step();
        assert_eq!(ctrl.state().phase, Phase::Forward);
        assert_eq!(ctrl.state().current_layer, 0);
        assert!(!ctrl.is_playing());
    }

    #[test]
    fn current_layer_stays_in_range() {
        let mut ctrl = AnimationController::new(4);
        ctrl.play();
        for _ in 0..50 {
            ctrl.step();
            assert!(ctrl.state().current_layer < 4);
        }
    }

    #[test]
    fn forward_frame_lights_incoming_edge() {
        let frame = ActivityFrame {
            phase: Phase::Forward,
            current_layer: 0,
            layer_count: 3,
        };
        assert!(frame.neuron_active(0));
        assert_eq!(frame.active_edge(), None);

        let frame = ActivityFrame {
            current_layer: 2,
            ..frame
        };
        assert!(frame.neuron_active(2));
        assert!(frame.connection_active(1, 2));
        assert!(!frame.connection_active(0, 1));
    }

    #[test]
    fn backward_frame_walks_from_output() {
        let frame = ActivityFrame {
            phase: Phase::Backward,
            current_layer: 0,
            layer_count: 3,
        };
        assert!(frame.neuron_active(2));
        assert!(frame.connection_active(1, 2));

        let frame = ActivityFrame {
            current_layer: 2,
            ..frame
        };
        assert!(frame.neuron_active(0));
        assert_eq!(frame.active_edge(), None);
    }

    #[test]
    fn idle_frame_lights_nothing() {
        let frame = AnimationController::new(3).frame();
        assert_eq!(frame.active_layer(), None);
        assert_eq!(frame.active_edge(), None);
    }

    #[test]
    fn phase_labels() {
        assert_eq!(Phase::Idle.to_string(), "Ready");
        assert_eq!(Phase::Forward.to_string(), "Forward Pass");
        assert_eq!(Phase::Backward.to_string(), "Backward Pass");
    }
}
