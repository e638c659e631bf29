//! Interactive builder and animated diagram for feed-forward network
//! topologies.
//!
//! The diagram is driven by three pieces of state: a [`layout::Layout`]
//! regenerated from the layer list and container size, a
//! [`viewport::ViewportController`] for pan and zoom, and an
//! [`animation::AnimationController`] stepping a schematic forward/backward
//! pass. [`surface::NetworkSurface`] ties them together for egui.

pub mod animation;
pub mod app;
pub mod config;
pub mod controls;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod randomize;
pub mod scene;
pub mod surface;
pub mod ticker;
pub mod training;
pub mod viewport;

pub use error::{PlaygroundError, Result};
