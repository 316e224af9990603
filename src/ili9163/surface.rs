//! Pixel surfaces over an [`Ili9163`] session.
//!
//! Drawing code only needs three things: write a pixel, clear, flush. Both surfaces are
//! embedded-graphics [`DrawTarget`]s, `clear` is [`DrawTarget::clear`] and the other two
//! are on [`PixelSurface`].
//!
//! Only one surface can hold the session at a time. Use `release` to get the session
//! back and hand it to the other kind of surface.
use display_interface::DisplayError;
use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

use crate::ili9163::{color, driver::Ili9163, BUFFER_SIZE, HEIGHT, WIDTH};

/// The pixel surface contract drawing clients rely on
pub trait PixelSurface: DrawTarget<Color = Rgb888> {
    /// Set one pixel, points outside the addressable grid are ignored
    fn write(&mut self, point: Point, color: Rgb888) -> Result<(), Self::Error>;

    /// Make everything written so far visible
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Map a point onto the 130 x 129 grid
fn grid_cell(point: Point) -> Option<(u16, u16)> {
    let x = u16::try_from(point.x).ok().filter(|&x| x < WIDTH)?;
    let y = u16::try_from(point.y).ok().filter(|&y| y < HEIGHT)?;
    Some((x, y))
}

/// Every write goes straight to the controller, flush has nothing to do
pub struct DirectSurface<SPI, DC, RST> {
    driver: Ili9163<SPI, DC, RST>,
}

impl<SPI, DC, RST> DirectSurface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Reset and initialise the controller, then draw on it directly
    pub fn new(
        spi: SPI,
        dc: DC,
        rst: RST,
        delay: &mut impl embedded_hal::delay::DelayNs,
    ) -> Result<Self, DisplayError> {
        Ok(Self::from_driver(Ili9163::new(spi, dc, rst, delay)?))
    }

    /// Draw on an already initialised session
    pub fn from_driver(driver: Ili9163<SPI, DC, RST>) -> Self {
        DirectSurface { driver }
    }

    /// Access the session, e.g. for [`Ili9163::fill_rect`]
    pub fn driver(&mut self) -> &mut Ili9163<SPI, DC, RST> {
        &mut self.driver
    }

    /// Give the session back
    pub fn release(self) -> Ili9163<SPI, DC, RST> {
        self.driver
    }
}

impl<SPI, DC, RST> OriginDimensions for DirectSurface<SPI, DC, RST> {
    fn size(&self) -> Size {
        Size::new(u32::from(WIDTH), u32::from(HEIGHT))
    }
}

impl<SPI, DC, RST> DrawTarget for DirectSurface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    type Color = Rgb888;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.write(point, color)?;
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.driver.clear(color::encode(color))
    }
}

impl<SPI, DC, RST> PixelSurface for DirectSurface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    fn write(&mut self, point: Point, color: Rgb888) -> Result<(), Self::Error> {
        match grid_cell(point) {
            Some((x, y)) => self.driver.write_pixel(x, y, color::encode(color)),
            None => Ok(()),
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Writes land in a frame buffer, flush sends the whole frame in one window
pub struct BufferedSurface<SPI, DC, RST> {
    driver: Ili9163<SPI, DC, RST>,
    /// Row major, index = x + WIDTH * y
    buffer: Box<[u16]>,
}

impl<SPI, DC, RST> BufferedSurface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Reset and initialise the controller, then draw into a frame buffer
    pub fn new(
        spi: SPI,
        dc: DC,
        rst: RST,
        delay: &mut impl embedded_hal::delay::DelayNs,
    ) -> Result<Self, DisplayError> {
        Ok(Self::from_driver(Ili9163::new(spi, dc, rst, delay)?))
    }

    /// Draw on an already initialised session, the buffer starts out black
    pub fn from_driver(driver: Ili9163<SPI, DC, RST>) -> Self {
        BufferedSurface {
            driver,
            buffer: vec![0; BUFFER_SIZE].into_boxed_slice(),
        }
    }

    /// The frame as it will be sent on the next flush
    pub fn frame(&self) -> &[u16] {
        &self.buffer
    }

    /// Access the session
    pub fn driver(&mut self) -> &mut Ili9163<SPI, DC, RST> {
        &mut self.driver
    }

    /// Give the session back, unflushed writes are dropped
    pub fn release(self) -> Ili9163<SPI, DC, RST> {
        self.driver
    }
}

impl<SPI, DC, RST> OriginDimensions for BufferedSurface<SPI, DC, RST> {
    fn size(&self) -> Size {
        Size::new(u32::from(WIDTH), u32::from(HEIGHT))
    }
}

impl<SPI, DC, RST> DrawTarget for BufferedSurface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    type Color = Rgb888;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.write(point, color)?;
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buffer.fill(color::encode(color));
        Ok(())
    }
}

impl<SPI, DC, RST> PixelSurface for BufferedSurface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    fn write(&mut self, point: Point, color: Rgb888) -> Result<(), Self::Error> {
        if let Some((x, y)) = grid_cell(point) {
            let index = usize::from(x) + usize::from(WIDTH) * usize::from(y);
            if let Some(cell) = self.buffer.get_mut(index) {
                *cell = color::encode(color);
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        log::info!("Flushing frame buffer");
        self.driver.write_frame(&self.buffer)
    }
}
