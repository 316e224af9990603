//! Display interface using SPI
//!
//! Every write is one chip-select gated transaction on the [`SpiDevice`], with the
//! data/command line set before the transaction starts.
use crate::ili9163::{cmd::Cmd, flag::Flag};
use display_interface::DisplayError;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

/// How long the reset line is held low
const RESET_PULSE_MS: u32 = 1;
/// Settle time after releasing reset, before the first command
const RESET_SETTLE_MS: u32 = 20;

/// The wire protocol of the ILI9163: commands, parameters and pixel data over 4-wire SPI
pub struct DisplayInterface<SPI, DC, RST> {
    /// SPI device, owns the chip select line
    spi: SPI,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Reseting, active low
    rst: RST,
}

impl<SPI, DC, RST> DisplayInterface<SPI, DC, RST> {
    /// Wrap the bus and control lines, nothing is sent yet
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        DisplayInterface { spi, dc, rst }
    }

    /// Give the bus and control lines back
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST> DisplayInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Pulse the reset line and wait until the controller accepts commands
    pub(crate) fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        log::info!("Resetting ILI9163");
        self.rst.set_low().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    /// Send the power-on configuration: sleep out, pixel format, gamma, power, default
    /// window, display on
    pub(crate) fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        log::info!("Initializing ILI9163 with vendor sequence");

        self.cmd(Cmd::EXIT_SLEEP_MODE)?;
        delay.delay_ms(Flag::EXIT_SLEEP_DELAY_MS);

        for (command, params) in Flag::INIT_SEQUENCE {
            self.cmd(command)?;
            for &param in params {
                self.parameter(param)?;
            }
        }

        log::info!("ILI9163 initialized");
        Ok(())
    }

    /// Basic function for sending commands
    pub(crate) fn cmd(&mut self, command: u8) -> Result<(), DisplayError> {
        // low for commands
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;

        match self.spi.write(&[command]) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("SPI write error for command 0x{:02X}: {:?}", command, e);
                Err(DisplayError::BusWriteError)
            }
        }
    }

    /// Send one 8 bit command parameter
    pub(crate) fn parameter(&mut self, param: u8) -> Result<(), DisplayError> {
        self.data(param)
    }

    /// Send one byte of data
    pub(crate) fn data(&mut self, data: u8) -> Result<(), DisplayError> {
        self.write_data(&[data])
    }

    /// Send a 16 bit word, high byte first, both bytes in the same transaction
    pub(crate) fn data16(&mut self, word: u16) -> Result<(), DisplayError> {
        self.write_data(&word.to_be_bytes())
    }

    /// Open an address window and start a memory write.
    ///
    /// The order is fixed by the controller: columns, pages, then memory write.
    /// Bounds are inclusive.
    pub(crate) fn set_address_window(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
    ) -> Result<(), DisplayError> {
        self.cmd(Cmd::SET_COLUMN_ADDRESS)?;
        self.data16(x1)?;
        self.data16(x2)?;

        self.cmd(Cmd::SET_PAGE_ADDRESS)?;
        self.data16(y1)?;
        self.data16(y2)?;

        self.cmd(Cmd::WRITE_MEMORY_START)
    }

    fn write_data(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        // high for data
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;

        self.spi.write(bytes).map_err(|e| {
            log::error!("SPI write error for {} data bytes: {:?}", bytes.len(), e);
            DisplayError::BusWriteError
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ili9163::fakes::{Bus, Event};

    #[test]
    fn data16_is_one_big_endian_transaction() {
        let bus = Bus::new();
        let mut iface = bus.interface();

        iface.data16(0xABCD).unwrap();

        assert_eq!(bus.events(), vec![Event::Data(vec![0xAB, 0xCD])]);
    }

    #[test]
    fn command_then_parameter_toggle_dc() {
        let bus = Bus::new();
        let mut iface = bus.interface();

        iface.cmd(Cmd::SET_PIXEL_FORMAT).unwrap();
        iface.parameter(0x05).unwrap();
        iface.data(0x42).unwrap();

        assert_eq!(
            bus.events(),
            vec![
                Event::Command(0x3A),
                Event::Data(vec![0x05]),
                Event::Data(vec![0x42]),
            ]
        );
    }

    #[test]
    fn address_window_orders_columns_pages_then_memory_write() {
        let bus = Bus::new();
        let mut iface = bus.interface();

        iface.set_address_window(3, 4, 0x0102, 0x0203).unwrap();

        assert_eq!(
            bus.events(),
            vec![
                Event::Command(Cmd::SET_COLUMN_ADDRESS),
                Event::Data(vec![0x00, 0x03]),
                Event::Data(vec![0x01, 0x02]),
                Event::Command(Cmd::SET_PAGE_ADDRESS),
                Event::Data(vec![0x00, 0x04]),
                Event::Data(vec![0x02, 0x03]),
                Event::Command(Cmd::WRITE_MEMORY_START),
            ]
        );
    }

    #[test]
    fn reset_waits_before_first_command() {
        let bus = Bus::new();
        let mut iface = bus.interface();
        let mut delay = bus.delay();

        iface.reset(&mut delay).unwrap();
        iface.cmd(Cmd::NOP).unwrap();

        assert_eq!(
            bus.events(),
            vec![
                Event::Reset(false),
                Event::DelayNs(1_000_000),
                Event::Reset(true),
                Event::DelayNs(20_000_000),
                Event::Command(Cmd::NOP),
            ]
        );
    }

    #[test]
    fn init_sends_calibration_tables_in_order() {
        let bus = Bus::new();
        let mut iface = bus.interface();
        let mut delay = bus.delay();

        iface.init(&mut delay).unwrap();

        let events = bus.events();
        assert_eq!(events[0], Event::Command(Cmd::EXIT_SLEEP_MODE));
        assert_eq!(events[1], Event::DelayNs(5_000_000));

        let commands = bus.commands();
        assert_eq!(
            commands,
            vec![
                Cmd::EXIT_SLEEP_MODE,
                Cmd::SET_PIXEL_FORMAT,
                Cmd::SET_GAMMA_CURVE,
                Cmd::GAM_R_SEL,
                Cmd::POSITIVE_GAMMA_CORRECT,
                Cmd::NEGATIVE_GAMMA_CORRECT,
                Cmd::FRAME_RATE_CONTROL1,
                Cmd::DISPLAY_INVERSION,
                Cmd::POWER_CONTROL1,
                Cmd::POWER_CONTROL2,
                Cmd::VCOM_CONTROL1,
                Cmd::VCOM_OFFSET_CONTROL,
                Cmd::SET_COLUMN_ADDRESS,
                Cmd::SET_PAGE_ADDRESS,
                Cmd::SET_ADDRESS_MODE,
                Cmd::SET_DISPLAY_ON,
                Cmd::WRITE_MEMORY_START,
            ]
        );

        assert_eq!(
            bus.params_of(Cmd::POSITIVE_GAMMA_CORRECT),
            vec![
                0x3F, 0x25, 0x1C, 0x1E, 0x20, 0x12, 0x2A, 0x90, 0x24, 0x11, 0x00, 0x00, 0x00,
                0x00, 0x00
            ]
        );
        assert_eq!(
            bus.params_of(Cmd::NEGATIVE_GAMMA_CORRECT),
            vec![
                0x20, 0x20, 0x20, 0x20, 0x05, 0x00, 0x15, 0xA7, 0x3D, 0x18, 0x25, 0x2A, 0x2B,
                0x2B, 0x3A
            ]
        );
        assert_eq!(bus.params_of(Cmd::VCOM_CONTROL1), vec![0x50, 0x5B]);
        assert_eq!(bus.params_of(Cmd::SET_COLUMN_ADDRESS), vec![0, 0, 0, 0x7F]);
        assert!(bus.params_of(Cmd::SET_DISPLAY_ON).is_empty());
    }

    #[test]
    fn bus_failure_is_reported_as_write_error() {
        let bus = Bus::failing_after(0);
        let mut iface = bus.interface();

        assert!(matches!(iface.cmd(Cmd::NOP), Err(DisplayError::BusWriteError)));
        assert!(matches!(
            iface.data16(0xFFFF),
            Err(DisplayError::BusWriteError)
        ));
    }
}
