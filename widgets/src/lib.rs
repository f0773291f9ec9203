//! A library of graphical widgets. This library doesn't know about sine waves or animation. It
//! just handles drawing into a window and turning mouse input into widget values. The
//! `lissajous_app` crate is an executable that uses this library to show and control the curve.

mod button;
mod plot;
mod slider;
mod window;

pub use button::*;
pub use plot::*;
pub use slider::*;
pub use window::*;
