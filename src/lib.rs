//! glow-engine: ambient glow-field background animation.
//!
//! A fixed population of soft gray glows drifts across an RGBA framebuffer.
//! Each frame the field advances, a smooth pseudo-noise signal flickers the
//! glow opacities, and a film-grain pass roughens every touched pixel. The
//! host owns the frame clock and the canvas: browser JS wraps the buffer in
//! an `ImageData` and blits it once per `requestAnimationFrame`; the native
//! `preview` binary blits it into a PNG instead.

mod noise;
mod post;
mod render;
mod sim;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use render::Framebuffer;
pub use sim::{BASE_OPACITY, GlowWorld, PARTICLE_COUNT, Particles};
