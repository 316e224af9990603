/// ILI9163 command opcodes.
///
/// Read commands are listed for completeness, the driver only ever writes
/// since MISO is not wired on this module.
pub struct Cmd;
#[allow(missing_docs)]
impl Cmd {
    // System
    pub const NOP: u8 = 0x00;
    pub const SOFT_RESET: u8 = 0x01;
    pub const GET_RED_CHANNEL: u8 = 0x06;
    pub const GET_GREEN_CHANNEL: u8 = 0x07;
    pub const GET_BLUE_CHANNEL: u8 = 0x08;
    pub const GET_POWER_MODE: u8 = 0x0A;
    pub const GET_ADDRESS_MODE: u8 = 0x0B;
    pub const GET_PIXEL_FORMAT: u8 = 0x0C;
    pub const GET_DISPLAY_MODE: u8 = 0x0D;
    pub const GET_SIGNAL_MODE: u8 = 0x0E;
    pub const GET_DIAGNOSTIC_RESULT: u8 = 0x0F;

    // Power and mode
    pub const ENTER_SLEEP_MODE: u8 = 0x10;
    pub const EXIT_SLEEP_MODE: u8 = 0x11;
    pub const ENTER_PARTIAL_MODE: u8 = 0x12;
    pub const ENTER_NORMAL_MODE: u8 = 0x13;
    pub const EXIT_INVERT_MODE: u8 = 0x20;
    pub const ENTER_INVERT_MODE: u8 = 0x21;
    pub const SET_GAMMA_CURVE: u8 = 0x26;
    pub const SET_DISPLAY_OFF: u8 = 0x28;
    pub const SET_DISPLAY_ON: u8 = 0x29;

    // Memory access
    pub const SET_COLUMN_ADDRESS: u8 = 0x2A;
    pub const SET_PAGE_ADDRESS: u8 = 0x2B;
    pub const WRITE_MEMORY_START: u8 = 0x2C;
    pub const WRITE_LUT: u8 = 0x2D;
    pub const READ_MEMORY_START: u8 = 0x2E;
    pub const SET_PARTIAL_AREA: u8 = 0x30;
    pub const SET_SCROLL_AREA: u8 = 0x33;
    pub const SET_TEAR_OFF: u8 = 0x34;
    pub const SET_TEAR_ON: u8 = 0x35;
    pub const SET_ADDRESS_MODE: u8 = 0x36;
    pub const SET_SCROLL_START: u8 = 0x37;
    pub const EXIT_IDLE_MODE: u8 = 0x38;
    pub const ENTER_IDLE_MODE: u8 = 0x39;
    pub const SET_PIXEL_FORMAT: u8 = 0x3A;
    pub const WRITE_MEMORY_CONTINUE: u8 = 0x3C;
    pub const READ_MEMORY_CONTINUE: u8 = 0x3E;
    pub const SET_TEAR_SCANLINE: u8 = 0x44;
    pub const GET_SCANLINE: u8 = 0x45;

    // Panel control
    pub const FRAME_RATE_CONTROL1: u8 = 0xB1;
    pub const FRAME_RATE_CONTROL2: u8 = 0xB2;
    pub const FRAME_RATE_CONTROL3: u8 = 0xB3;
    pub const DISPLAY_INVERSION: u8 = 0xB4;
    pub const SOURCE_DRIVER_DIRECTION: u8 = 0xB7;
    pub const GATE_DRIVER_DIRECTION: u8 = 0xB8;
    pub const POWER_CONTROL1: u8 = 0xC0;
    pub const POWER_CONTROL2: u8 = 0xC1;
    pub const POWER_CONTROL3: u8 = 0xC2;
    pub const POWER_CONTROL4: u8 = 0xC3;
    pub const POWER_CONTROL5: u8 = 0xC4;
    pub const VCOM_CONTROL1: u8 = 0xC5;
    pub const VCOM_CONTROL2: u8 = 0xC6;
    pub const VCOM_OFFSET_CONTROL: u8 = 0xC7;
    pub const WRITE_ID4_VALUE: u8 = 0xD3;
    pub const NV_MEMORY_FUNCTION1: u8 = 0xD7;
    pub const READ_ID1: u8 = 0xDA;
    pub const READ_ID2: u8 = 0xDB;
    pub const READ_ID3: u8 = 0xDC;
    pub const NV_MEMORY_FUNCTION2: u8 = 0xDE;
    pub const POSITIVE_GAMMA_CORRECT: u8 = 0xE0;
    pub const NEGATIVE_GAMMA_CORRECT: u8 = 0xE1;
    pub const GAM_R_SEL: u8 = 0xF2;
}
