//! ILI9163 colour LCD Driver
//!
//! Used with the common 1.44" red-PCB TFT modules: a 128 x 128 pixel panel on an
//! ILI9163 controller, wired as a 4-pin SPI interface (SCL, SDA, CS, A0) plus a reset line.
//!
//! ### Usage
//! The driver offers two ways of putting pixels on the panel, both behind the
//! [`surface::PixelSurface`] contract:
//!
//! 1. [`surface::DirectSurface`] writes every pixel straight to the controller.
//!    Sequential writes along a row share a single address window.
//! 1. [`surface::BufferedSurface`] keeps a frame in memory and streams it to the
//!    controller on [`surface::PixelSurface::flush`].
//!
//! Both surfaces are built on top of an initialised [`driver::Ili9163`] session, and
//! both are embedded-graphics draw targets.
//!
//! ### Addressable area
//!
//! The controller RAM is larger than the visible glass. Everything that addresses the
//! whole grid (clear, flush, the window armed by a cursor miss) covers
//! [`WIDTH`] x [`HEIGHT`] = 130 x 129 cells, while [`driver::Ili9163::fill_rect`]
//! clips against the visible [`PANEL_WIDTH`] x [`PANEL_HEIGHT`].
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod color;
pub mod driver;
pub mod interface;
pub mod surface;

mod cmd;
mod cursor;
mod flag;

#[cfg(test)]
pub(crate) mod fakes;

pub use cmd::Cmd;
pub use flag::Flag;

/// Addressable grid width, in controller columns
pub const WIDTH: u16 = 130;

/// Addressable grid height, in controller pages
pub const HEIGHT: u16 = 129;

/// Visible panel width, pixels horizontally
pub const PANEL_WIDTH: u16 = 128;

/// Visible panel height, pixels vertically
pub const PANEL_HEIGHT: u16 = 128;

/// Number of cells in a full frame
pub const BUFFER_SIZE: usize = WIDTH as usize * HEIGHT as usize;

/// Last addressable column, inclusive end of a full-grid column window
pub const MAX_X: u16 = WIDTH - 1;

/// Last addressable page, inclusive end of a full-grid page window
pub const MAX_Y: u16 = HEIGHT - 1;
