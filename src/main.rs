use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

use esp_idf_svc::hal::delay::{Delay, FreeRtos};
use esp_idf_svc::hal::gpio::{self, AnyInputPin, Input, PinDriver, Pull};
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::prelude::*;
use esp_idf_svc::hal::spi;

use ili9163_snake::snake::{Direction, Game, Outcome};
use ili9163_snake::{BufferedSurface, DirectSurface, PixelSurface};

const TICK_MS: u32 = 100;

type Button<'d> = PinDriver<'d, AnyInputPin, Input>;

/// Buttons pull the line low while pressed
fn button<'d>(pin: AnyInputPin) -> anyhow::Result<Button<'d>> {
    let mut driver = PinDriver::input(pin)?;
    driver.set_pull(Pull::Up)?;
    Ok(driver)
}

/// Last pressed button wins when several are held
fn read_turn(buttons: &[(Direction, Button<'_>)]) -> Option<Direction> {
    buttons
        .iter()
        .filter(|(_, pin)| pin.is_low())
        .map(|(direction, _)| *direction)
        .last()
}

// https://docs.esp-rs.org/esp-idf-svc/esp_idf_svc/
fn main() -> anyhow::Result<()> {
    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take()?;
    let pins = peripherals.pins;

    log::info!("Configuring SPI");
    let spi = spi::SpiDeviceDriver::new_single(
        peripherals.spi2,
        pins.gpio12,                    // SCL
        pins.gpio11,                    // SDA
        Option::<gpio::AnyIOPin>::None, // the panel never talks back
        Some(pins.gpio45),              // CS
        &spi::SpiDriverConfig::new().dma(spi::Dma::Disabled),
        &spi::SpiConfig::new().baudrate(10.MHz().into()),
    )?;
    let dc = PinDriver::output(pins.gpio46)?; // A0
    let rst = PinDriver::output(pins.gpio47)?;

    let buttons = [
        (Direction::Right, button(pins.gpio5.downgrade_input())?),
        (Direction::Left, button(pins.gpio1.downgrade_input())?),
        (Direction::Up, button(pins.gpio6.downgrade_input())?),
        (Direction::Down, button(pins.gpio4.downgrade_input())?),
    ];

    let mut delay = Delay::default();

    log::info!("Creating display driver");
    let mut direct = DirectSurface::new(spi, dc, rst, &mut delay)
        .map_err(|e| anyhow::anyhow!("Display init failed: {:?}", e))?;

    // Self test: white straight to the panel, then green through the frame buffer
    direct
        .clear(Rgb888::WHITE)
        .map_err(|e| anyhow::anyhow!("Direct clear failed: {:?}", e))?;
    let mut buffered = BufferedSurface::from_driver(direct.release());
    buffered
        .clear(Rgb888::GREEN)
        .map_err(|e| anyhow::anyhow!("Buffered clear failed: {:?}", e))?;
    buffered
        .flush()
        .map_err(|e| anyhow::anyhow!("Flush failed: {:?}", e))?;
    FreeRtos::delay_ms(1000);

    let mut screen = DirectSurface::from_driver(buffered.release());
    screen
        .clear(Rgb888::WHITE)
        .map_err(|e| anyhow::anyhow!("Clear failed: {:?}", e))?;

    // SAFETY: reads the hardware RNG, no preconditions
    let seed = unsafe { esp_idf_svc::sys::esp_random() };
    let mut game = Game::new(seed);
    game.draw(&mut screen)
        .map_err(|e| anyhow::anyhow!("Drawing the board failed: {:?}", e))?;

    log::info!("Game started");
    let outcome = loop {
        FreeRtos::delay_ms(TICK_MS);

        let turn = read_turn(&buttons);
        match game.step(&mut screen, turn) {
            Ok(Outcome::Running) => {}
            Ok(done) => break done,
            Err(e) => {
                log::error!("Drawing failed: {:?}", e);
                return Err(anyhow::anyhow!("Drawing failed: {:?}", e));
            }
        }
    };

    log::info!("Game over, {} at length {}", outcome, game.snake().len());
    let color = if outcome == Outcome::Won {
        Rgb888::BLUE
    } else {
        Rgb888::RED
    };
    screen
        .clear(color)
        .map_err(|e| anyhow::anyhow!("Clear failed: {:?}", e))?;

    Ok(())
}
