//! Driver for ILI9163 based 128 x 128 SPI colour LCD modules, and a snake game to run on it
//!
//! [`ili9163`] holds the controller protocol and the two pixel surfaces. [`snake`] only
//! needs an embedded-graphics draw target, so it runs on either surface.

pub mod ili9163;
pub mod snake;

pub use crate::ili9163::driver::{DisplayError, Ili9163};
pub use crate::ili9163::surface::{BufferedSurface, DirectSurface, PixelSurface};
