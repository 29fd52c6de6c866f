//! wgpu rendering module
//!
//! Sprites, health bars and text are all textured quads sampling one atlas.

pub mod font;
pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, FrameBuilder};
pub use pipeline::RenderState;
