//! Core - drawing primitives shared by both simulations

pub mod color;
pub mod log;
pub mod rect;
pub mod surface;

pub use color::Rgb;
pub use rect::Rect;
pub use surface::PixelSurface;
