/// Minimum horizontal distance between two adjacent layers.
pub const MIN_LAYER_SPACING: f32 = 80.0;
/// Minimum vertical room reserved per neuron in the tallest layer.
pub const MIN_NEURON_SPACING: f32 = 40.0;
/// Share of the container the diagram grows into when the network is small.
const FILL_RATIO: f32 = 0.8;
/// Margin left around the network by the initial fit.
const FIT_RATIO: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True before the first real measurement arrives.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Layout-space extent of the diagram.
///
/// Never smaller than the legible minimum for the given counts, and at least
/// 80% of the container on each axis.
pub fn network_dimensions(layer_count: usize, max_neurons: usize, container: Size) -> Size {
    let spacing_width = MIN_LAYER_SPACING * layer_count.saturating_sub(1) as f32;
    let spacing_height = MIN_NEURON_SPACING * max_neurons as f32;
    Size {
        width: spacing_width.max(container.width * FILL_RATIO),
        height: spacing_height.max(container.height * FILL_RATIO),
    }
}

/// Scale that fits `network` inside `container` with a 10% margin, keeping
/// the aspect ratio.
pub fn initial_scale(network: Size, container: Size) -> f32 {
    let scale_x = container.width / network.width;
    let scale_y = container.height / network.height;
    scale_x.min(scale_y) * FIT_RATIO
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    pub min: f32,
    pub max: f32,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self { min: 0.5, max: 3.0 }
    }
}

impl ScaleBounds {
    pub fn clamp(&self, scale: f32) -> f32 {
        scale.max(self.min).min(self.max)
    }

    pub fn contains(&self, scale: f32) -> bool {
        (self.min..=self.max).contains(&scale)
    }
}

/// Clamps to the default `[0.5, 3.0]` bounds.
pub fn clamp_scale(scale: f32) -> f32 {
    ScaleBounds::default().clamp(scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn small_network_fills_most_of_the_container() {
        let dims = network_dimensions(3, 4, Size::new(800.0, 600.0));
        assert_relative_eq!(dims.width, 640.0);
        assert_relative_eq!(dims.height, 480.0);
    }

    #[test]
    fn large_network_keeps_minimum_spacing() {
        let dims = network_dimensions(20, 30, Size::new(800.0, 600.0));
        assert_relative_eq!(dims.width, 80.0 * 19.0);
        assert_relative_eq!(dims.height, 40.0 * 30.0);
    }

    #[test]
    fn single_layer_uses_container_width() {
        let dims = network_dimensions(1, 2, Size::new(500.0, 300.0));
        assert_relative_eq!(dims.width, 400.0);
    }

    #[test]
    fn initial_scale_uses_tighter_axis() {
        let scale = initial_scale(Size::new(1000.0, 400.0), Size::new(800.0, 600.0));
        assert_relative_eq!(scale, 0.9 * 0.8);
    }

    #[test]
    fn degenerate_sizes() {
        assert!(Size::new(0.0, 600.0).is_degenerate());
        assert!(Size::new(800.0, 0.0).is_degenerate());
        assert!(Size::default().is_degenerate());
        assert!(!Size::new(1.0, 1.0).is_degenerate());
    }

    #[test]
    fn clamp_hits_both_bounds() {
        assert_eq!(clamp_scale(0.1), 0.5);
        assert_eq!(clamp_scale(9.0), 3.0);
        assert_eq!(clamp_scale(1.25), 1.25);
    }

    proptest! {
        #[test]
        fn clamp_is_idempotent_and_bounded(s in -100.0f32..100.0) {
            let once = clamp_scale(s);
            prop_assert_eq!(clamp_scale(once), once);
            prop_assert!(ScaleBounds::default().contains(once));
        }

        #[test]
        fn clamp_preserves_order(a in -10.0f32..10.0, b in -10.0f32..10.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(clamp_scale(lo) <= clamp_scale(hi));
        }
    }
}
