//! Recording transport for unit tests.
//!
//! SPI, the two control lines and the delay share one event log, so tests can check
//! ordering across all of them (reset edges before delays before commands).
//! [`capture_logs`] collects the `log` records a test produces.
use std::{cell::RefCell, convert::Infallible, rc::Rc, sync::Once};

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType as PinErrorType, OutputPin},
    spi::{ErrorKind, ErrorType as SpiErrorType, Operation, SpiDevice},
};

use crate::ili9163::{cmd::Cmd, driver::Ili9163, interface::DisplayInterface};

/// One observable thing on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Reset(bool),
    DelayNs(u64),
    Command(u8),
    Data(Vec<u8>),
}

#[derive(Default)]
struct State {
    dc_high: bool,
    events: Vec<Event>,
    writes: usize,
    fail_after: Option<usize>,
}

pub(crate) type FakeDriver = Ili9163<FakeSpi, FakeDc, FakeRst>;

/// Handle on the shared log, hands out the fake peripherals
#[derive(Clone, Default)]
pub(crate) struct Bus(Rc<RefCell<State>>);

pub(crate) struct FakeSpi(Rc<RefCell<State>>);
pub(crate) struct FakeDc(Rc<RefCell<State>>);
pub(crate) struct FakeRst(Rc<RefCell<State>>);
pub(crate) struct FakeDelay(Rc<RefCell<State>>);

impl Bus {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A bus that accepts `writes` transactions and then fails every one after
    pub(crate) fn failing_after(writes: usize) -> Self {
        let bus = Self::default();
        bus.0.borrow_mut().fail_after = Some(writes);
        bus
    }

    pub(crate) fn interface(&self) -> DisplayInterface<FakeSpi, FakeDc, FakeRst> {
        let (spi, dc, rst) = self.parts();
        DisplayInterface::new(spi, dc, rst)
    }

    pub(crate) fn parts(&self) -> (FakeSpi, FakeDc, FakeRst) {
        (
            FakeSpi(self.0.clone()),
            FakeDc(self.0.clone()),
            FakeRst(self.0.clone()),
        )
    }

    pub(crate) fn delay(&self) -> FakeDelay {
        FakeDelay(self.0.clone())
    }

    /// A driver that went through reset and init, with the log emptied afterwards
    pub(crate) fn driver(&self) -> FakeDriver {
        let (spi, dc, rst) = self.parts();
        let driver = Ili9163::new(spi, dc, rst, &mut self.delay()).unwrap();
        self.take();
        driver
    }

    /// Allow `writes` more transactions from now on, then fail
    pub(crate) fn fail_after(&self, writes: usize) {
        let mut state = self.0.borrow_mut();
        state.fail_after = Some(state.writes + writes);
    }

    /// Stop failing
    pub(crate) fn heal(&self) {
        self.0.borrow_mut().fail_after = None;
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub(crate) fn take(&self) -> Vec<Event> {
        std::mem::take(&mut self.0.borrow_mut().events)
    }

    pub(crate) fn commands(&self) -> Vec<u8> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Command(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    /// Parameter bytes that followed the first occurrence of `command`
    pub(crate) fn params_of(&self, command: u8) -> Vec<u8> {
        self.events()
            .into_iter()
            .skip_while(|e| *e != Event::Command(command))
            .skip(1)
            .take_while(|e| matches!(e, Event::Data(_)))
            .flat_map(|e| match e {
                Event::Data(bytes) => bytes,
                _ => Vec::new(),
            })
            .collect()
    }

    /// Every address window opened, as inclusive (x1, y1, x2, y2)
    pub(crate) fn windows(&self) -> Vec<(u16, u16, u16, u16)> {
        let events = self.events();
        let word = |e: Option<&Event>| match e {
            Some(Event::Data(bytes)) if bytes.len() == 2 => u16::from_be_bytes([bytes[0], bytes[1]]),
            _ => panic!("expected a 16 bit word, got {:?}", e),
        };
        events
            .iter()
            .enumerate()
            .filter(|(_, e)| **e == Event::Command(Cmd::SET_COLUMN_ADDRESS))
            .map(|(i, _)| {
                assert_eq!(events.get(i + 3), Some(&Event::Command(Cmd::SET_PAGE_ADDRESS)));
                assert_eq!(events.get(i + 6), Some(&Event::Command(Cmd::WRITE_MEMORY_START)));
                (
                    word(events.get(i + 1)),
                    word(events.get(i + 4)),
                    word(events.get(i + 2)),
                    word(events.get(i + 5)),
                )
            })
            .collect()
    }

    /// Pixel words streamed after a memory write start
    pub(crate) fn pixels(&self) -> Vec<u16> {
        let mut in_memory_write = false;
        let mut pixels = Vec::new();
        for event in self.events() {
            match event {
                Event::Command(c) => in_memory_write = c == Cmd::WRITE_MEMORY_START,
                Event::Data(bytes) if in_memory_write => {
                    assert_eq!(bytes.len(), 2, "pixel data is sent as 16 bit words");
                    pixels.push(u16::from_be_bytes([bytes[0], bytes[1]]));
                }
                _ => {}
            }
        }
        pixels
    }

    /// Raw bytes of every transaction, for comparing two streams
    pub(crate) fn wire(&self) -> Vec<(bool, Vec<u8>)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Command(c) => Some((false, vec![c])),
                Event::Data(bytes) => Some((true, bytes)),
                _ => None,
            })
            .collect()
    }
}

impl SpiErrorType for FakeSpi {
    type Error = ErrorKind;
}

impl SpiDevice for FakeSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        let mut state = self.0.borrow_mut();
        if state.fail_after.is_some_and(|limit| state.writes >= limit) {
            return Err(ErrorKind::Other);
        }
        state.writes += 1;

        let mut bytes = Vec::new();
        for op in operations.iter() {
            if let Operation::Write(buf) = op {
                bytes.extend_from_slice(buf);
            }
        }
        let event = if state.dc_high {
            Event::Data(bytes)
        } else {
            assert_eq!(bytes.len(), 1, "commands are a single byte");
            Event::Command(bytes[0])
        };
        state.events.push(event);
        Ok(())
    }
}

impl PinErrorType for FakeDc {
    type Error = Infallible;
}

impl OutputPin for FakeDc {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().dc_high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().dc_high = true;
        Ok(())
    }
}

impl PinErrorType for FakeRst {
    type Error = Infallible;
}

impl OutputPin for FakeRst {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().events.push(Event::Reset(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().events.push(Event::Reset(true));
        Ok(())
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().events.push(Event::DelayNs(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        self.0
            .borrow_mut()
            .events
            .push(Event::DelayNs(u64::from(us) * 1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0
            .borrow_mut()
            .events
            .push(Event::DelayNs(u64::from(ms) * 1_000_000));
    }
}

thread_local! {
    static CAPTURED: RefCell<Option<Vec<(log::Level, String)>>> = const { RefCell::new(None) };
}

/// Keeps records per thread, so parallel tests do not see each other's lines
struct ThreadLogger;

static LOGGER: ThreadLogger = ThreadLogger;

impl log::Log for ThreadLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        CAPTURED.with(|captured| {
            if let Some(lines) = captured.borrow_mut().as_mut() {
                lines.push((record.level(), record.args().to_string()));
            }
        });
    }

    fn flush(&self) {}
}

/// Run `f` and return what it logged on this thread
pub(crate) fn capture_logs(f: impl FnOnce()) -> Vec<(log::Level, String)> {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Debug);
        }
    });

    CAPTURED.with(|captured| *captured.borrow_mut() = Some(Vec::new()));
    f();
    CAPTURED.with(|captured| captured.borrow_mut().take().unwrap_or_default())
}
