//! State for an animated lissajous curve viewer. This library doesn't know about windows or
//! drawing. It holds two sine waves, the animation that traces the curve formed by plotting one
//! wave against the other, and the frequency controls. Every change is expressed as an [`Event`]
//! handled by [`App`], which answers with [`RenderCommand`]s for whatever is doing the drawing.

mod animator;
mod app;
mod config;
mod control;
mod model;
mod signal;
mod title;

pub use animator::*;
pub use app::*;
pub use config::*;
pub use control::*;
pub use model::*;
pub use signal::*;
pub use title::*;
