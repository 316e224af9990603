//! Conversion from 24 bit colour to the 16 bit 5-6-5 words the controller stores.
//!
//! The panel on these modules is wired blue-first, so blue lands in the top five bits
//! and red in the bottom five. The conversion truncates, the low bits of every
//! channel are dropped and there is no way back.
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// Pack one 8 bit per channel colour into a controller word
pub const fn to_wire(r: u8, g: u8, b: u8) -> u16 {
    ((b as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | ((r as u16 & 0xF8) >> 3)
}

/// [`to_wire`] for an embedded-graphics colour
pub fn encode(color: Rgb888) -> u16 {
    to_wire(color.r(), color.g(), color.b())
}
