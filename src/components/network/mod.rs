//! Node-mesh background animation.
//!
//! Renders a decorative field of drifting nodes on a fullscreen HTML canvas,
//! linking nearby pairs with lines that fade with distance:
//! - Particles bounce off viewport edges and drift with fixed velocities
//! - The pointer pulls softly on particles within an attraction radius
//! - Narrow viewports get a reduced profile to bound per-frame cost
//!
//! No physics beyond those rules; each frame is a full redraw.

mod component;
pub mod config;
pub mod field;
pub mod links;
mod render;
pub mod theme;

pub use component::NetworkCanvas;
pub use config::NetworkConfig;
