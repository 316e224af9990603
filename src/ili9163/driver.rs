//! ILI9163 Display Driver Implementation
//!
//! [`Ili9163`] is one display session: it owns the [`DisplayInterface`] and the
//! driver-side [`Cursor`], and turns pixel writes into as little SPI traffic as the
//! controller allows.
//!
//! ## Cursor tracking
//!
//! After a memory write start the controller stores every 16 bit word at its internal
//! pointer and moves one column right, wrapping to the window's first column on the
//! next page. Every address window puts the pointer at the window's top left. The
//! driver mirrors that pointer, so a write that continues where the
//! previous one stopped is just a `data16`. Anything else pays for a full address
//! window (columns, pages, memory write start).
//!
//! A cursor miss arms the window from the pixel to the bottom right of the
//! addressable grid rather than a single cell, which is what keeps the following
//! writes along the row cheap.
//!
//! ## Failure
//!
//! The bus is write only, so a failed write leaves the controller state unknown.
//! Errors are returned as they are and the cursor is forgotten. The session should be
//! rebuilt with [`Ili9163::new`], which resets the controller.
pub use display_interface::DisplayError;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

use crate::ili9163::cursor::Cursor;
use crate::ili9163::interface::DisplayInterface;
use crate::ili9163::{
    cmd::Cmd, flag::Flag, HEIGHT, MAX_X, MAX_Y, PANEL_HEIGHT, PANEL_WIDTH, WIDTH,
};

/// ILI9163 display session
///
/// ## Type Parameters
///
/// - `SPI` - SPI device for communication, owns chip select
/// - `DC` - Data/Command output pin
/// - `RST` - Reset output pin
pub struct Ili9163<SPI, DC, RST> {
    /// The display interface
    interface: DisplayInterface<SPI, DC, RST>,
    cursor: Cursor,
}

impl<SPI, DC, RST> Ili9163<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Reset and initialise the controller.
    ///
    /// The delay is only needed for the reset pulse and the sleep-out wait.
    pub fn new(spi: SPI, dc: DC, rst: RST, delay: &mut impl DelayNs) -> Result<Self, DisplayError> {
        let mut interface = DisplayInterface::new(spi, dc, rst);
        interface.reset(delay)?;
        interface.init(delay)?;

        Ok(Ili9163 {
            interface,
            cursor: Cursor::unknown(),
        })
    }

    /// Open an address window, inclusive bounds, and start a memory write.
    ///
    /// The cursor moves to the window's top left and wraps inside the window from
    /// then on, so a following [`Ili9163::write_pixel`] at (x1, y1) sends only data.
    pub fn set_address_window(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
    ) -> Result<(), DisplayError> {
        log::debug!("Address window ({}, {})..=({}, {})", x1, y1, x2, y2);
        self.cursor.invalidate();
        self.interface.set_address_window(x1, y1, x2, y2)?;
        self.cursor.place(x1, y1, x2, y2);
        Ok(())
    }

    /// Write one pixel word at (x, y), cells outside the addressable grid are ignored
    pub fn write_pixel(&mut self, x: u16, y: u16, color: u16) -> Result<(), DisplayError> {
        if x >= WIDTH || y >= HEIGHT {
            return Ok(());
        }
        let result = self.push_pixel(x, y, color);
        self.forget_cursor_on_error(result)
    }

    /// Paint every addressable cell, row by row.
    ///
    /// Starting from an unknown cursor this is a single address window followed by
    /// one word per cell.
    pub fn clear(&mut self, color: u16) -> Result<(), DisplayError> {
        log::debug!("Clearing display with 0x{:04X}", color);
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                self.write_pixel(x, y, color)?;
            }
        }
        Ok(())
    }

    /// Fill a rectangle of the visible panel.
    ///
    /// The size is clipped to the panel, a rectangle starting outside the panel draws
    /// nothing. The whole rectangle is one address window, once it is full the next
    /// pixel write opens a new one.
    pub fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: u16,
    ) -> Result<(), DisplayError> {
        if x >= PANEL_WIDTH || y >= PANEL_HEIGHT {
            log::debug!("Rectangle at ({}, {}) is outside the panel", x, y);
            return Ok(());
        }
        let (clipped_w, clipped_h) = (w.min(PANEL_WIDTH - x), h.min(PANEL_HEIGHT - y));
        if (clipped_w, clipped_h) != (w, h) {
            log::debug!(
                "Clipping {}x{} rectangle at ({}, {}) to {}x{}",
                w,
                h,
                x,
                y,
                clipped_w,
                clipped_h
            );
        }
        if clipped_w == 0 || clipped_h == 0 {
            return Ok(());
        }

        let result = self.stream_rect(x, y, clipped_w, clipped_h, color);
        self.forget_cursor_on_error(result)
    }

    /// A square "big pixel" of `size` x `size` with its top left at (x, y)
    pub fn draw_pixel(&mut self, x: u16, y: u16, size: u16, color: u16) -> Result<(), DisplayError> {
        if size == 1 {
            self.write_pixel(x, y, color)
        } else {
            self.fill_rect(x, y, size, size, color)
        }
    }

    /// Stream a full frame, row major, into a window covering the whole grid
    pub(crate) fn write_frame(&mut self, frame: &[u16]) -> Result<(), DisplayError> {
        log::debug!("Writing frame of {} cells", frame.len());
        let result = self.stream_frame(frame);
        // the buffered surface never relies on the hardware cursor after a flush
        self.cursor.invalidate();
        result
    }

    /// Enter sleep mode, the frame memory is kept
    pub fn sleep(&mut self) -> Result<(), DisplayError> {
        log::info!("ILI9163 entering sleep mode");
        self.interface.cmd(Cmd::ENTER_SLEEP_MODE)
    }

    /// Leave sleep mode and wait until the controller takes commands again
    pub fn wake_up(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        log::info!("Waking up ILI9163");
        self.interface.cmd(Cmd::EXIT_SLEEP_MODE)?;
        delay.delay_ms(Flag::EXIT_SLEEP_DELAY_MS);
        // the next pixel write has to open its own window
        self.cursor.invalidate();
        Ok(())
    }

    /// Switch the panel output on or off, the frame memory is untouched
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        let command = if on {
            Cmd::SET_DISPLAY_ON
        } else {
            Cmd::SET_DISPLAY_OFF
        };
        self.interface.cmd(command)
    }

    /// Give the bus and control lines back
    pub fn release(self) -> (SPI, DC, RST) {
        self.interface.release()
    }

    fn push_pixel(&mut self, x: u16, y: u16, color: u16) -> Result<(), DisplayError> {
        if !self.cursor.is_at(x, y) {
            self.set_address_window(x, y, MAX_X, MAX_Y)?;
        }
        self.interface.data16(color)?;
        self.cursor.advance();
        Ok(())
    }

    /// Fills the whole window, which leaves the cursor past its end
    fn stream_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: u16) -> Result<(), DisplayError> {
        self.set_address_window(x, y, x + w - 1, y + h - 1)?;
        for _ in 0..u32::from(w) * u32::from(h) {
            self.interface.data16(color)?;
            self.cursor.advance();
        }
        Ok(())
    }

    fn stream_frame(&mut self, frame: &[u16]) -> Result<(), DisplayError> {
        self.set_address_window(0, 0, MAX_X, MAX_Y)?;
        for &word in frame {
            self.interface.data16(word)?;
        }
        Ok(())
    }

    fn forget_cursor_on_error<T>(
        &mut self,
        result: Result<T, DisplayError>,
    ) -> Result<T, DisplayError> {
        if result.is_err() {
            self.cursor.invalidate();
        }
        result
    }
}
