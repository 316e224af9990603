//! Vendor calibration values for the ILI9163 panel.
//!
//! These are tuned for the 1.44" 128 x 128 glass and must be sent bit-exact,
//! approximations show up as washed out or banded colours.
use crate::ili9163::cmd::Cmd;

/// Parameter values and the initialisation table
pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    // Set Pixel Format (0x3A)
    pub const PIXEL_FORMAT_RGB565: u8 = 0x05;

    // Gamma curve select (0x26), GC3
    pub const GAMMA_CURVE_3: u8 = 0x04;

    // Gamma adjustment (0xF2)
    pub const GAMMA_ADJUSTMENT_ENABLE: u8 = 0x01;

    pub const POSITIVE_GAMMA: [u8; 15] = [
        0x3F, 0x25, 0x1C, 0x1E, 0x20, 0x12, 0x2A, 0x90, 0x24, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    pub const NEGATIVE_GAMMA: [u8; 15] = [
        0x20, 0x20, 0x20, 0x20, 0x05, 0x00, 0x15, 0xA7, 0x3D, 0x18, 0x25, 0x2A, 0x2B, 0x2B, 0x3A,
    ];

    // Frame Rate Control (0xB1): DIVA = 8, VPA = 8
    pub const FRAME_RATE: [u8; 2] = [0x08, 0x08];

    // Display Inversion (0xB4): NLA = NLB = NLC = 1, frame inversion everywhere
    pub const INVERSION_FRAME: u8 = 0x07;

    // Power Control 1 (0xC0): VRH = 10 -> GVDD 4.30V, VC = 2 -> VCI1 2.65V
    pub const POWER_CONTROL1: [u8; 2] = [0x0A, 0x02];

    // Power Control 2 (0xC1): BT = 2 -> AVDD 2xVCI1, VGH 5xVCI1, VGL -2xVCI1
    pub const POWER_CONTROL2: u8 = 0x02;

    // VCOM Control 1 (0xC5): VMH = 80 -> 4.5V, VML = 91 -> -0.225V
    pub const VCOM: [u8; 2] = [0x50, 0x5B];

    // VCOM Offset (0xC7): nVM = 0, VMF = 64
    pub const VCOM_OFFSET: u8 = 0x40;

    // Default window 0..=127 on both axes, high byte first
    pub const DEFAULT_COLUMNS: [u8; 4] = [0x00, 0x00, 0x00, 0x7F];
    pub const DEFAULT_PAGES: [u8; 4] = [0x00, 0x00, 0x00, 0x7F];

    // Set Address Mode (0x36): row/column order and colour order untouched
    pub const ADDRESS_MODE_DEFAULT: u8 = 0x00;

    /// Time the controller needs after leaving sleep before it takes commands
    pub const EXIT_SLEEP_DELAY_MS: u32 = 5;

    /// Everything issued after exit-sleep, in order. Each parameter byte is sent in its
    /// own transaction.
    pub const INIT_SEQUENCE: [(u8, &'static [u8]); 16] = [
        (Cmd::SET_PIXEL_FORMAT, &[Self::PIXEL_FORMAT_RGB565]),
        (Cmd::SET_GAMMA_CURVE, &[Self::GAMMA_CURVE_3]),
        (Cmd::GAM_R_SEL, &[Self::GAMMA_ADJUSTMENT_ENABLE]),
        (Cmd::POSITIVE_GAMMA_CORRECT, &Self::POSITIVE_GAMMA),
        (Cmd::NEGATIVE_GAMMA_CORRECT, &Self::NEGATIVE_GAMMA),
        (Cmd::FRAME_RATE_CONTROL1, &Self::FRAME_RATE),
        (Cmd::DISPLAY_INVERSION, &[Self::INVERSION_FRAME]),
        (Cmd::POWER_CONTROL1, &Self::POWER_CONTROL1),
        (Cmd::POWER_CONTROL2, &[Self::POWER_CONTROL2]),
        (Cmd::VCOM_CONTROL1, &Self::VCOM),
        (Cmd::VCOM_OFFSET_CONTROL, &[Self::VCOM_OFFSET]),
        (Cmd::SET_COLUMN_ADDRESS, &Self::DEFAULT_COLUMNS),
        (Cmd::SET_PAGE_ADDRESS, &Self::DEFAULT_PAGES),
        (Cmd::SET_ADDRESS_MODE, &[Self::ADDRESS_MODE_DEFAULT]),
        (Cmd::SET_DISPLAY_ON, &[]),
        (Cmd::WRITE_MEMORY_START, &[]),
    ];
}
