//! The command set for the SSD1305.
//!
//! Note 1: unlike some controllers in this family, the SSD1305 takes command argument bytes in
//! *command* mode, so every command here serializes as a single command-mode transaction of the
//! opcode followed by its arguments. Only display RAM contents travel in data mode.

use crate::interface::DisplayInterface;

pub mod consts {
    //! Geometry of the SSD1305 display RAM as used by a 128x64 panel.

    /// Columns of each page that map to visible pixels.
    pub const PIXEL_WIDTH: usize = 128;
    /// Visible pixel rows.
    pub const PIXEL_HEIGHT: usize = 64;
    /// Pixel rows per page; one RAM byte is a vertical column of this many pixels.
    pub const PIX_PER_PAGE: usize = 8;
    /// Pages (8-pixel-tall bands) stacked top to bottom.
    pub const PAGE_COUNT: usize = PIXEL_HEIGHT / PIX_PER_PAGE;
    /// Columns of RAM per page: the visible columns plus four padding columns that are
    /// transmitted but never displayed on a 128-wide module.
    pub const BUFFER_WIDTH: usize = 132;
    /// Total RAM bytes, page-major.
    pub const BUFFER_SIZE: usize = PAGE_COUNT * BUFFER_WIDTH;

    pub const COLUMN_MAX: u8 = BUFFER_WIDTH as u8 - 1;
    pub const PAGE_MAX: u8 = PAGE_COUNT as u8 - 1;
    pub const LINE_MAX: u8 = PIXEL_HEIGHT as u8 - 1;
}

use self::consts::*;

/// The direction the RAM address pointer advances as image data is written.
#[derive(Clone, Copy)]
pub enum AddressMode {
    /// The column address increments after each byte, wrapping to the next page at the end of
    /// the column range, so a full-RAM write covers the display in one stream.
    Horizontal,
    /// The page address increments after each byte, wrapping to the next column at the end of
    /// the page range.
    Vertical,
    /// The column address increments and wraps within the current page; the page is selected
    /// separately. This is the chip's reset default.
    Page,
}

/// Setting of column-to-segment remapping. Changing this setting will mirror the image
/// horizontally; which value is correct depends on how the module wires the panel to the driver.
#[derive(Clone, Copy)]
pub enum SegmentRemap {
    /// Column address 0 drives SEG0.
    Forward,
    /// Column address 131 drives SEG0.
    Reverse,
}

/// Setting of the COM line scanning of rows. Changing this setting will flip the image
/// vertically.
#[derive(Clone, Copy)]
pub enum ComScanDirection {
    /// COM lines scan row addresses top to bottom, so that row address 0 is the first row of the
    /// display.
    RowZeroFirst,
    /// COM lines scan row addresses bottom to top, so that row address 0 is the last row of the
    /// display.
    RowZeroLast,
}

/// Power source for the panel drive, set via master configuration.
#[derive(Clone, Copy)]
pub enum VccSource {
    /// Panel supply is provided externally.
    External,
    /// Panel supply is generated internally.
    Internal,
}

/// Area color and power mode setting. The 128x64 monochrome modules this crate targets use the
/// mode as a power knob only.
#[derive(Clone, Copy)]
pub enum AreaColorMode {
    /// Monochrome drive at normal power.
    Normal,
    /// Monochrome drive in low power display mode.
    LowPower,
}

#[derive(Clone, Copy)]
pub enum Command {
    /// Set the low nibble of the column start address used in `AddressMode::Page`. Range 0-15.
    SetLowerColumnStart(u8),
    /// Set the high nibble of the column start address used in `AddressMode::Page`. Range 0-15.
    SetUpperColumnStart(u8),
    /// Set how the RAM address pointer advances when image data is written. See enum for
    /// details.
    SetMemoryAddressingMode(AddressMode),
    /// Set the column start and end address range when writing to the display RAM, and reset the
    /// column address pointer to the start. Used by `AddressMode::Horizontal` and
    /// `AddressMode::Vertical`. Range is 0-131.
    SetColumnAddress(u8, u8),
    /// Set the page start and end address range when writing to the display RAM, and reset the
    /// page address pointer to the start. Used by `AddressMode::Horizontal` and
    /// `AddressMode::Vertical`. Range is 0-7.
    SetPageAddress(u8, u8),
    /// Set the display start line. Setting this to e.g. 40 will cause the first row of pixels on
    /// the display to display row 40 of the display RAM, "rolling" the displayed image upwards.
    /// Range is 0-63.
    SetStartLine(u8),
    /// Set the bank-0 contrast current. Range 0-255.
    SetContrast(u8),
    /// Set the current drive pulse widths of bank 0 and color banks A-C, which act as a
    /// brightness look-up table. Each entry ranges 31-63 DCLKs.
    SetCurrentDriveLut(u8, u8, u8, u8),
    /// Set column-to-segment remapping. See enum for details.
    SetSegmentRemap(SegmentRemap),
    /// Override the RAM contents and light every pixel (`true`), or resume displaying the RAM
    /// contents (`false`).
    SetEntireDisplayOn(bool),
    /// Display the RAM contents with pixel values inverted (`true`) or normally (`false`).
    SetInverse(bool),
    /// Set the MUX ratio, which controls the number of COM lines that are active and thus the
    /// number of display pixel rows which are active. Range 16-64.
    SetMultiplexRatio(u8),
    /// Set the master configuration, selecting the panel supply source. See `VccSource`.
    SetMasterConfig(VccSource),
    /// Control sleep mode. Sleeping (`true`) switches the panel off and takes the chip to its
    /// low-power state; waking (`false`) switches the panel on.
    SetSleepMode(bool),
    /// Set the page the column pointer addresses in `AddressMode::Page`. Range 0-7.
    SetPageStart(u8),
    /// Set the COM line scan direction. See enum for details.
    SetComScanDirection(ComScanDirection),
    /// Set the display COM line offset, rolling the displayed image upwards as the values
    /// increase. Range is 0-63.
    SetDisplayOffset(u8),
    /// Set the oscillator frequency Fosc and the display clock divider. The frequency setting
    /// 0-15 is relative to the chip's nominal oscillator rate; the divide setting n from 0-15
    /// divides the oscillator by n+1 to produce DCLK, which indirectly determines the refresh
    /// rate.
    SetClockFoscDivset(u8, u8),
    /// Set area color and low power display modes. See `AreaColorMode`.
    SetAreaColorMode(AreaColorMode),
    /// Set the pre-charge period phase lengths. Both phases range 1-15 DCLKs. The display
    /// module datasheet should have appropriate values.
    SetPrechargePeriod(u8, u8),
    /// Set the COM pins hardware configuration: whether COM lines are wired to rows in the
    /// alternative (interleaved) arrangement, and whether left/right COM output is remapped.
    /// This is dictated by the module's wiring; see its datasheet.
    SetComPinsConfig(bool, bool),
    /// Set the VCOMH deselect voltage level as a fraction of Vcc. Range 0-63.
    SetVcomhDeselectLevel(u8),
}

macro_rules! ok_command {
    ($buf:ident, $cmd:expr,[]) => {{
        $buf[0] = $cmd;
        Ok(&$buf[..1])
    }};
    ($buf:ident, $cmd:expr,[$arg0:expr]) => {{
        $buf[0] = $cmd;
        $buf[1] = $arg0;
        Ok(&$buf[..2])
    }};
    ($buf:ident, $cmd:expr,[$arg0:expr, $arg1:expr]) => {{
        $buf[0] = $cmd;
        $buf[1] = $arg0;
        $buf[2] = $arg1;
        Ok(&$buf[..3])
    }};
    ($buf:ident, $cmd:expr,[$arg0:expr, $arg1:expr, $arg2:expr, $arg3:expr]) => {{
        $buf[0] = $cmd;
        $buf[1] = $arg0;
        $buf[2] = $arg1;
        $buf[3] = $arg2;
        $buf[4] = $arg3;
        Ok(&$buf[..5])
    }};
}

impl Command {
    /// Transmit the command and its arguments as one command-mode transaction (Note 1).
    /// Out-of-range arguments are rejected before anything touches the bus.
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), ()>
    where
        DI: DisplayInterface,
    {
        let mut arg_buf = [0u8; 5];
        let bytes: &[u8] = match self {
            Command::SetLowerColumnStart(nibble) => match nibble {
                0..=15 => ok_command!(arg_buf, nibble, []),
                _ => Err(()),
            },
            Command::SetUpperColumnStart(nibble) => match nibble {
                0..=15 => ok_command!(arg_buf, 0x10 | nibble, []),
                _ => Err(()),
            },
            Command::SetMemoryAddressingMode(mode) => {
                let m = match mode {
                    AddressMode::Horizontal => 0x00,
                    AddressMode::Vertical => 0x01,
                    AddressMode::Page => 0x02,
                };
                ok_command!(arg_buf, 0x20, [m])
            }
            Command::SetColumnAddress(start, end) => match (start, end) {
                (0..=COLUMN_MAX, 0..=COLUMN_MAX) => ok_command!(arg_buf, 0x21, [start, end]),
                _ => Err(()),
            },
            Command::SetPageAddress(start, end) => match (start, end) {
                (0..=PAGE_MAX, 0..=PAGE_MAX) => ok_command!(arg_buf, 0x22, [start, end]),
                _ => Err(()),
            },
            Command::SetStartLine(line) => match line {
                0..=LINE_MAX => ok_command!(arg_buf, 0x40 | line, []),
                _ => Err(()),
            },
            Command::SetContrast(contrast) => ok_command!(arg_buf, 0x81, [contrast]),
            Command::SetCurrentDriveLut(bank0, color_a, color_b, color_c) => {
                match (bank0, color_a, color_b, color_c) {
                    (31..=63, 31..=63, 31..=63, 31..=63) => {
                        ok_command!(arg_buf, 0x91, [bank0, color_a, color_b, color_c])
                    }
                    _ => Err(()),
                }
            }
            Command::SetSegmentRemap(remap) => ok_command!(
                arg_buf,
                match remap {
                    SegmentRemap::Forward => 0xA0,
                    SegmentRemap::Reverse => 0xA1,
                },
                []
            ),
            Command::SetEntireDisplayOn(ena) => ok_command!(
                arg_buf,
                match ena {
                    false => 0xA4,
                    true => 0xA5,
                },
                []
            ),
            Command::SetInverse(ena) => ok_command!(
                arg_buf,
                match ena {
                    false => 0xA6,
                    true => 0xA7,
                },
                []
            ),
            Command::SetMultiplexRatio(ratio) => match ratio {
                16..=64 => ok_command!(arg_buf, 0xA8, [ratio - 1]),
                _ => Err(()),
            },
            Command::SetMasterConfig(source) => ok_command!(
                arg_buf,
                0xAD,
                [match source {
                    VccSource::External => 0x8E,
                    VccSource::Internal => 0x8F,
                }]
            ),
            Command::SetSleepMode(ena) => ok_command!(
                arg_buf,
                match ena {
                    true => 0xAE,
                    false => 0xAF,
                },
                []
            ),
            Command::SetPageStart(page) => match page {
                0..=PAGE_MAX => ok_command!(arg_buf, 0xB0 | page, []),
                _ => Err(()),
            },
            Command::SetComScanDirection(direction) => ok_command!(
                arg_buf,
                match direction {
                    ComScanDirection::RowZeroFirst => 0xC0,
                    ComScanDirection::RowZeroLast => 0xC8,
                },
                []
            ),
            Command::SetDisplayOffset(line) => match line {
                0..=LINE_MAX => ok_command!(arg_buf, 0xD3, [line]),
                _ => Err(()),
            },
            Command::SetClockFoscDivset(fosc, divset) => match (fosc, divset) {
                (0..=15, 0..=15) => ok_command!(arg_buf, 0xD5, [fosc << 4 | divset]),
                _ => Err(()),
            },
            Command::SetAreaColorMode(mode) => ok_command!(
                arg_buf,
                0xD8,
                [match mode {
                    AreaColorMode::Normal => 0x00,
                    AreaColorMode::LowPower => 0x05,
                }]
            ),
            Command::SetPrechargePeriod(phase_1, phase_2) => match (phase_1, phase_2) {
                (1..=15, 1..=15) => ok_command!(arg_buf, 0xD9, [phase_2 << 4 | phase_1]),
                _ => Err(()),
            },
            Command::SetComPinsConfig(alternative, lr_remap) => {
                let alt = match alternative {
                    true => 0x10,
                    false => 0x00,
                };
                let lr = match lr_remap {
                    true => 0x20,
                    false => 0x00,
                };
                ok_command!(arg_buf, 0xDA, [0x02 | alt | lr])
            }
            Command::SetVcomhDeselectLevel(level) => match level {
                0..=63 => ok_command!(arg_buf, 0xDB, [level]),
                _ => Err(()),
            },
        }?;
        iface.send_commands(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::test_spy::{Sent, TestSpyInterface};

    #[test]
    fn set_column_start_nibbles() {
        let mut di = TestSpyInterface::new();
        Command::SetLowerColumnStart(3).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0x03)]);
        di.clear();
        Command::SetUpperColumnStart(3).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0x13)]);
        assert_eq!(Command::SetLowerColumnStart(16).send(&mut di), Err(()));
        assert_eq!(Command::SetUpperColumnStart(16).send(&mut di), Err(()));
    }

    #[test]
    fn set_memory_addressing_mode() {
        let mut di = TestSpyInterface::new();
        Command::SetMemoryAddressingMode(AddressMode::Horizontal)
            .send(&mut di)
            .unwrap();
        di.check_multi(&[cmds!(0x20, 0x00)]);
        di.clear();
        Command::SetMemoryAddressingMode(AddressMode::Vertical)
            .send(&mut di)
            .unwrap();
        di.check_multi(&[cmds!(0x20, 0x01)]);
        di.clear();
        Command::SetMemoryAddressingMode(AddressMode::Page)
            .send(&mut di)
            .unwrap();
        di.check_multi(&[cmds!(0x20, 0x02)]);
    }

    #[test]
    fn set_column_address() {
        let mut di = TestSpyInterface::new();
        Command::SetColumnAddress(23, 42).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0x21, 23, 42)]);
        assert_eq!(Command::SetColumnAddress(132, 42).send(&mut di), Err(()));
        assert_eq!(Command::SetColumnAddress(23, 255).send(&mut di), Err(()));
    }

    #[test]
    fn set_page_address() {
        let mut di = TestSpyInterface::new();
        Command::SetPageAddress(1, 6).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0x22, 1, 6)]);
        assert_eq!(Command::SetPageAddress(8, 6).send(&mut di), Err(()));
        assert_eq!(Command::SetPageAddress(1, 8).send(&mut di), Err(()));
    }

    #[test]
    fn set_start_line() {
        let mut di = TestSpyInterface::new();
        Command::SetStartLine(23).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0x40 | 23)]);
        assert_eq!(Command::SetStartLine(64).send(&mut di), Err(()));
    }

    #[test]
    fn set_contrast() {
        let mut di = TestSpyInterface::new();
        Command::SetContrast(0x8F).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0x81, 0x8F)]);
    }

    #[test]
    fn set_current_drive_lut() {
        let mut di = TestSpyInterface::new();
        Command::SetCurrentDriveLut(0x3F, 0x3F, 0x3F, 0x3F)
            .send(&mut di)
            .unwrap();
        di.check_multi(&[cmds!(0x91, 0x3F, 0x3F, 0x3F, 0x3F)]);
        assert_eq!(
            Command::SetCurrentDriveLut(30, 0x3F, 0x3F, 0x3F).send(&mut di),
            Err(())
        );
        assert_eq!(
            Command::SetCurrentDriveLut(0x3F, 0x3F, 0x3F, 64).send(&mut di),
            Err(())
        );
    }

    #[test]
    fn set_segment_remap() {
        let mut di = TestSpyInterface::new();
        Command::SetSegmentRemap(SegmentRemap::Forward)
            .send(&mut di)
            .unwrap();
        di.check_multi(&[cmds!(0xA0)]);
        di.clear();
        Command::SetSegmentRemap(SegmentRemap::Reverse)
            .send(&mut di)
            .unwrap();
        di.check_multi(&[cmds!(0xA1)]);
    }

    #[test]
    fn set_entire_display_on() {
        let mut di = TestSpyInterface::new();
        Command::SetEntireDisplayOn(false).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0xA4)]);
        di.clear();
        Command::SetEntireDisplayOn(true).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0xA5)]);
    }

    #[test]
    fn set_inverse() {
        let mut di = TestSpyInterface::new();
        Command::SetInverse(false).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0xA6)]);
        di.clear();
        Command::SetInverse(true).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0xA7)]);
    }

    #[test]
    fn set_multiplex_ratio() {
        let mut di = TestSpyInterface::new();
        Command::SetMultiplexRatio(64).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0xA8, 63)]);
        di.clear();
        Command::SetMultiplexRatio(16).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0xA8, 15)]);
        assert_eq!(Command::SetMultiplexRatio(15).send(&mut di), Err(()));
        assert_eq!(Command::SetMultiplexRatio(65).send(&mut di), Err(()));
    }

    #[test]
    fn set_master_config() {
        let mut di = TestSpyInterface::new();
        Command::SetMasterConfig(VccSource::External)
            .send(&mut di)
            .unwrap();
        di.check_multi(&[cmds!(0xAD, 0x8E)]);
        di.clear();
        Command::SetMasterConfig(VccSource::Internal)
            .send(&mut di)
            .unwrap();
        di.check_multi(&[cmds!(0xAD, 0x8F)]);
    }

    #[test]
    fn sleep_mode() {
        let mut di = TestSpyInterface::new();
        Command::SetSleepMode(true).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0xAE)]);
        di.clear();
        Command::SetSleepMode(false).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0xAF)]);
    }

    #[test]
    fn set_page_start() {
        let mut di = TestSpyInterface::new();
        Command::SetPageStart(5).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0xB0 | 5)]);
        assert_eq!(Command::SetPageStart(8).send(&mut di), Err(()));
    }

    #[test]
    fn set_com_scan_direction() {
        let mut di = TestSpyInterface::new();
        Command::SetComScanDirection(ComScanDirection::RowZeroFirst)
            .send(&mut di)
            .unwrap();
        di.check_multi(&[cmds!(0xC0)]);
        di.clear();
        Command::SetComScanDirection(ComScanDirection::RowZeroLast)
            .send(&mut di)
            .unwrap();
        di.check_multi(&[cmds!(0xC8)]);
    }

    #[test]
    fn set_display_offset() {
        let mut di = TestSpyInterface::new();
        Command::SetDisplayOffset(23).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0xD3, 23)]);
        assert_eq!(Command::SetDisplayOffset(64).send(&mut di), Err(()));
    }

    #[test]
    fn set_clock_fosc_divset() {
        let mut di = TestSpyInterface::new();
        Command::SetClockFoscDivset(10, 0).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0xD5, 0xA0)]);
        di.clear();
        Command::SetClockFoscDivset(15, 15).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0xD5, 0xFF)]);
        assert_eq!(Command::SetClockFoscDivset(16, 0).send(&mut di), Err(()));
        assert_eq!(Command::SetClockFoscDivset(0, 16).send(&mut di), Err(()));
    }

    #[test]
    fn set_area_color_mode() {
        let mut di = TestSpyInterface::new();
        Command::SetAreaColorMode(AreaColorMode::Normal)
            .send(&mut di)
            .unwrap();
        di.check_multi(&[cmds!(0xD8, 0x00)]);
        di.clear();
        Command::SetAreaColorMode(AreaColorMode::LowPower)
            .send(&mut di)
            .unwrap();
        di.check_multi(&[cmds!(0xD8, 0x05)]);
    }

    #[test]
    fn set_precharge_period() {
        let mut di = TestSpyInterface::new();
        Command::SetPrechargePeriod(2, 13).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0xD9, 0xD2)]);
        di.clear();
        Command::SetPrechargePeriod(15, 15).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0xD9, 0xFF)]);
        assert_eq!(Command::SetPrechargePeriod(0, 13).send(&mut di), Err(()));
        assert_eq!(Command::SetPrechargePeriod(2, 16).send(&mut di), Err(()));
    }

    #[test]
    fn set_com_pins_config() {
        let mut di = TestSpyInterface::new();
        Command::SetComPinsConfig(false, false)
            .send(&mut di)
            .unwrap();
        di.check_multi(&[cmds!(0xDA, 0x02)]);
        di.clear();
        Command::SetComPinsConfig(true, false)
            .send(&mut di)
            .unwrap();
        di.check_multi(&[cmds!(0xDA, 0x12)]);
        di.clear();
        Command::SetComPinsConfig(true, true).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0xDA, 0x32)]);
    }

    #[test]
    fn set_vcomh_deselect_level() {
        let mut di = TestSpyInterface::new();
        Command::SetVcomhDeselectLevel(0x34).send(&mut di).unwrap();
        di.check_multi(&[cmds!(0xDB, 0x34)]);
        assert_eq!(Command::SetVcomhDeselectLevel(64).send(&mut di), Err(()));
    }

    #[test]
    fn rejected_command_touches_nothing() {
        let mut di = TestSpyInterface::new();
        assert_eq!(Command::SetStartLine(200).send(&mut di), Err(()));
        di.check_multi(&[]);
    }
}
