//! Defines structs for storing register values of commands in the SSD1305 that are associated
//! with relatively-static configuration.

use crate::command::*;
use crate::interface;

/// The portion of the configuration which persists inside the `Display` because the orientation
/// registers may need to be re-sent after power events. This allows the rest of the `Config`
/// struct to be thrown away to save RAM after `Display::init` finishes.
pub(crate) struct PersistentConfig {
    segment_remap: SegmentRemap,
    com_scan_direction: ComScanDirection,
}

impl PersistentConfig {
    /// Transmit commands to the display at `iface` necessary to put that display into the
    /// orientation encoded in `self`.
    pub(crate) fn send<DI>(&self, iface: &mut DI) -> Result<(), ()>
    where
        DI: interface::DisplayInterface,
    {
        Command::SetSegmentRemap(self.segment_remap).send(iface)?;
        Command::SetComScanDirection(self.com_scan_direction).send(iface)
    }
}

/// A configuration for the display. Builder methods offer a declarative way to either send a
/// configuration command at init time, or to leave it at the chip's POR default.
pub struct Config {
    pub(crate) persistent_config: PersistentConfig,
    clock_fosc_divset_cmd: Option<Command>,
    master_config_cmd: Option<Command>,
    area_color_mode_cmd: Option<Command>,
    com_pins_config_cmd: Option<Command>,
    current_drive_lut_cmd: Option<Command>,
    contrast_cmd: Option<Command>,
    precharge_period_cmd: Option<Command>,
    vcomh_deselect_level_cmd: Option<Command>,
}

impl Config {
    /// Create a new configuration. Segment remap and COM scan direction are mandatory because a
    /// module wired the other way around shows a mirrored or flipped image, so they must be
    /// provided in the constructor. All other options can be optionally set by calling the
    /// provided builder methods on `Config`.
    pub fn new(segment_remap: SegmentRemap, com_scan_direction: ComScanDirection) -> Self {
        Config {
            persistent_config: PersistentConfig {
                segment_remap: segment_remap,
                com_scan_direction: com_scan_direction,
            },
            clock_fosc_divset_cmd: None,
            master_config_cmd: None,
            area_color_mode_cmd: None,
            com_pins_config_cmd: None,
            current_drive_lut_cmd: None,
            contrast_cmd: None,
            precharge_period_cmd: None,
            vcomh_deselect_level_cmd: None,
        }
    }

    /// Extend this `Config` to explicitly configure the display clock frequency and divider. See
    /// `Command::SetClockFoscDivset`.
    pub fn clock_fosc_divset(self, fosc: u8, divset: u8) -> Self {
        Self {
            clock_fosc_divset_cmd: Some(Command::SetClockFoscDivset(fosc, divset)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the panel supply source. See
    /// `Command::SetMasterConfig`.
    pub fn master_config(self, source: VccSource) -> Self {
        Self {
            master_config_cmd: Some(Command::SetMasterConfig(source)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure area color and low power display modes. See
    /// `Command::SetAreaColorMode`.
    pub fn area_color_mode(self, mode: AreaColorMode) -> Self {
        Self {
            area_color_mode_cmd: Some(Command::SetAreaColorMode(mode)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the COM pins hardware arrangement. See
    /// `Command::SetComPinsConfig`.
    pub fn com_pins_config(self, alternative: bool, lr_remap: bool) -> Self {
        Self {
            com_pins_config_cmd: Some(Command::SetComPinsConfig(alternative, lr_remap)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the current drive brightness look-up table.
    /// See `Command::SetCurrentDriveLut`.
    pub fn current_drive_lut(self, bank0: u8, color_a: u8, color_b: u8, color_c: u8) -> Self {
        Self {
            current_drive_lut_cmd: Some(Command::SetCurrentDriveLut(
                bank0, color_a, color_b, color_c,
            )),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the bank-0 contrast current. See
    /// `Command::SetContrast`.
    pub fn contrast(self, contrast: u8) -> Self {
        Self {
            contrast_cmd: Some(Command::SetContrast(contrast)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the pre-charge period phase lengths. See
    /// `Command::SetPrechargePeriod`.
    pub fn precharge_period(self, phase_1: u8, phase_2: u8) -> Self {
        Self {
            precharge_period_cmd: Some(Command::SetPrechargePeriod(phase_1, phase_2)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the VCOMH deselect voltage level. See
    /// `Command::SetVcomhDeselectLevel`.
    pub fn vcomh_deselect_level(self, level: u8) -> Self {
        Self {
            vcomh_deselect_level_cmd: Some(Command::SetVcomhDeselectLevel(level)),
            ..self
        }
    }

    /// Transmit commands to the display at `iface` necessary to put that display into the
    /// configuration encoded in `self`.
    pub(crate) fn send<DI>(&self, iface: &mut DI) -> Result<(), ()>
    where
        DI: interface::DisplayInterface,
    {
        self.clock_fosc_divset_cmd
            .map_or(Ok(()), |c| c.send(iface))?;
        self.master_config_cmd.map_or(Ok(()), |c| c.send(iface))?;
        self.area_color_mode_cmd.map_or(Ok(()), |c| c.send(iface))?;
        self.com_pins_config_cmd.map_or(Ok(()), |c| c.send(iface))?;
        self.current_drive_lut_cmd
            .map_or(Ok(()), |c| c.send(iface))?;
        self.contrast_cmd.map_or(Ok(()), |c| c.send(iface))?;
        self.precharge_period_cmd
            .map_or(Ok(()), |c| c.send(iface))?;
        self.vcomh_deselect_level_cmd
            .map_or(Ok(()), |c| c.send(iface))
    }
}
