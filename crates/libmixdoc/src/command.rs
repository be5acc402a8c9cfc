//! Typed widget commands and resolution from source-level identifiers.
//!
//! The bindings tables in the mixer sources refer to commands by enum name,
//! e.g. `CMD_MIXER_NEXT` or `CMD_WITH_ARG(CMD_MIXER_CONTROL_UP_N, 5)`. Those
//! raw names are parsed exactly once, here, into [`Command`] values; rendering
//! back to configuration syntax happens through [`std::fmt::Display`].

use std::fmt;

use crate::error::{MixdocError, Result};

/// The UI surface owning a command namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Widget {
    /// The main mixer view. It is the default and is left unnamed in `bind` lines.
    Mixer,
    /// Scrollable text windows such as the help screen.
    Textbox,
}

impl Widget {
    /// The widget name as written in a `bind` line.
    pub fn config_name(self) -> &'static str {
        match self {
            Self::Mixer => "",
            Self::Textbox => "textbox",
        }
    }
}

impl fmt::Display for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_name())
    }
}

/// Which controls the mixer displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Playback controls only.
    Playback,
    /// Capture controls only.
    Capture,
    /// Every control.
    All,
}

impl ViewMode {
    /// Parse a `VIEW_MODE_*` constant.
    pub fn parse(constant: &str) -> Result<Self> {
        match constant {
            "VIEW_MODE_PLAYBACK" => Ok(Self::Playback),
            "VIEW_MODE_CAPTURE" => Ok(Self::Capture),
            "VIEW_MODE_ALL" => Ok(Self::All),
            other => Err(MixdocError::UnknownViewMode(other.to_string())),
        }
    }

    /// Lowercase name used in the `mode_*` command.
    pub fn name(self) -> &'static str {
        match self {
            Self::Playback => "playback",
            Self::Capture => "capture",
            Self::All => "all",
        }
    }
}

/// Commands understood by the mixer widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MixerCommand {
    /// Show the help screen.
    Help,
    /// Show system information.
    SystemInformation,
    /// Open the sound card selection menu.
    SelectCard,
    /// Quit the mixer.
    Close,
    /// Switch to a view mode.
    SetViewMode(ViewMode),
    /// Cycle through the view modes.
    ToggleViewMode,
    /// Redraw the screen.
    Refresh,
    /// Focus the next control.
    Next,
    /// Focus the previous control.
    Previous,
    /// Balance left and right volume.
    BalanceControl,
    /// Lower both channels by a percentage.
    ControlDown(u16),
    /// Lower the left channel by a percentage.
    ControlDownLeft(u16),
    /// Lower the right channel by a percentage.
    ControlDownRight(u16),
    /// Raise both channels by a percentage.
    ControlUp(u16),
    /// Raise the left channel by a percentage.
    ControlUpLeft(u16),
    /// Raise the right channel by a percentage.
    ControlUpRight(u16),
    /// Toggle mute of both channels.
    ToggleMute,
    /// Toggle mute of the left channel.
    ToggleMuteLeft,
    /// Toggle mute of the right channel.
    ToggleMuteRight,
    /// Toggle capture of both channels.
    ToggleCapture,
    /// Toggle capture of the left channel.
    ToggleCaptureLeft,
    /// Toggle capture of the right channel.
    ToggleCaptureRight,
    /// Set the volume to a percentage.
    ControlSet(u16),
    /// Focus the control at a position.
    ControlFocus(u16),
}

impl MixerCommand {
    /// Parse a mixer command identifier (without the `CMD_MIXER_` prefix)
    /// together with its optional `CMD_WITH_ARG` argument.
    pub fn parse(ident: &str, arg: Option<&str>) -> Result<Self> {
        let numeric = || parse_argument(&format!("MIXER_{ident}"), arg);
        Ok(match ident {
            "HELP" => Self::Help,
            "SYSTEM_INFORMATION" => Self::SystemInformation,
            "SELECT_CARD" => Self::SelectCard,
            "CLOSE" => Self::Close,
            "SET_VIEW_MODE" => {
                let constant = arg
                    .ok_or_else(|| MixdocError::MissingArgument(format!("MIXER_{ident}")))?;
                Self::SetViewMode(ViewMode::parse(constant)?)
            }
            "TOGGLE_VIEW_MODE" => Self::ToggleViewMode,
            "REFRESH" => Self::Refresh,
            "NEXT" => Self::Next,
            "PREVIOUS" => Self::Previous,
            "BALANCE_CONTROL" => Self::BalanceControl,
            "CONTROL_DOWN_N" => Self::ControlDown(numeric()?),
            "CONTROL_DOWN_LEFT_N" => Self::ControlDownLeft(numeric()?),
            "CONTROL_DOWN_RIGHT_N" => Self::ControlDownRight(numeric()?),
            "CONTROL_UP_N" => Self::ControlUp(numeric()?),
            "CONTROL_UP_LEFT_N" => Self::ControlUpLeft(numeric()?),
            "CONTROL_UP_RIGHT_N" => Self::ControlUpRight(numeric()?),
            "TOGGLE_MUTE" => Self::ToggleMute,
            "TOGGLE_MUTE_LEFT" => Self::ToggleMuteLeft,
            "TOGGLE_MUTE_RIGHT" => Self::ToggleMuteRight,
            "TOGGLE_CAPTURE" => Self::ToggleCapture,
            "TOGGLE_CAPTURE_LEFT" => Self::ToggleCaptureLeft,
            "TOGGLE_CAPTURE_RIGHT" => Self::ToggleCaptureRight,
            "CONTROL_N_PERCENT" => Self::ControlSet(numeric()?),
            "CONTROL_FOCUS_N" => Self::ControlFocus(numeric()?),
            other => return Err(MixdocError::UnknownCommand(format!("MIXER_{other}"))),
        })
    }
}

impl fmt::Display for MixerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => f.write_str("help"),
            Self::SystemInformation => f.write_str("system_information"),
            Self::SelectCard => f.write_str("select_card"),
            Self::Close => f.write_str("close"),
            Self::SetViewMode(mode) => write!(f, "mode_{}", mode.name()),
            Self::ToggleViewMode => f.write_str("mode_toggle"),
            Self::Refresh => f.write_str("refresh"),
            Self::Next => f.write_str("next"),
            Self::Previous => f.write_str("previous"),
            Self::BalanceControl => f.write_str("balance_control"),
            Self::ControlDown(n) => write!(f, "control_down_{n}"),
            Self::ControlDownLeft(n) => write!(f, "control_down_left_{n}"),
            Self::ControlDownRight(n) => write!(f, "control_down_right_{n}"),
            Self::ControlUp(n) => write!(f, "control_up_{n}"),
            Self::ControlUpLeft(n) => write!(f, "control_up_left_{n}"),
            Self::ControlUpRight(n) => write!(f, "control_up_right_{n}"),
            Self::ToggleMute => f.write_str("toggle_mute"),
            Self::ToggleMuteLeft => f.write_str("toggle_mute_left"),
            Self::ToggleMuteRight => f.write_str("toggle_mute_right"),
            Self::ToggleCapture => f.write_str("toggle_capture"),
            Self::ToggleCaptureLeft => f.write_str("toggle_capture_left"),
            Self::ToggleCaptureRight => f.write_str("toggle_capture_right"),
            Self::ControlSet(n) => write!(f, "control_set_{n}"),
            Self::ControlFocus(n) => write!(f, "control_focus_{n}"),
        }
    }
}

/// Commands understood by the textbox widget. None of them take an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextboxCommand {
    /// Scroll to the top.
    Top,
    /// Scroll to the bottom.
    Bottom,
    /// Scroll up one line.
    Up,
    /// Scroll down one line.
    Down,
    /// Scroll left one column.
    Left,
    /// Scroll right one column.
    Right,
    /// Scroll up one page.
    PageUp,
    /// Scroll down one page.
    PageDown,
    /// Scroll left one page.
    PageLeft,
    /// Scroll right one page.
    PageRight,
    /// Close the textbox.
    Close,
}

impl TextboxCommand {
    /// Parse a textbox command identifier (without the `CMD_TEXTBOX_` prefix).
    pub fn parse(ident: &str) -> Result<Self> {
        Ok(match ident {
            "TOP" => Self::Top,
            "BOTTOM" => Self::Bottom,
            "UP" => Self::Up,
            "DOWN" => Self::Down,
            "LEFT" => Self::Left,
            "RIGHT" => Self::Right,
            "PAGE_UP" => Self::PageUp,
            "PAGE_DOWN" => Self::PageDown,
            "PAGE_LEFT" => Self::PageLeft,
            "PAGE_RIGHT" => Self::PageRight,
            "CLOSE" => Self::Close,
            other => return Err(MixdocError::UnknownCommand(format!("TEXTBOX_{other}"))),
        })
    }
}

impl fmt::Display for TextboxCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::PageUp => "page_up",
            Self::PageDown => "page_down",
            Self::PageLeft => "page_left",
            Self::PageRight => "page_right",
            Self::Close => "close",
        })
    }
}

/// A resolved command, tagged with the widget it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// A mixer widget command.
    Mixer(MixerCommand),
    /// A textbox widget command.
    Textbox(TextboxCommand),
}

impl Command {
    /// Resolve a command enum name as found after `CMD_` in the sources,
    /// e.g. `MIXER_CONTROL_UP_N` with argument `5`.
    ///
    /// The argument is only consulted for parametrized commands and for
    /// `SET_VIEW_MODE`, whose argument names a view mode constant.
    pub fn resolve(ident: &str, arg: Option<&str>) -> Result<Self> {
        let ident = ident.trim();
        let arg = arg.map(str::trim).filter(|a| !a.is_empty());

        if let Some(rest) = ident.strip_prefix("MIXER_") {
            MixerCommand::parse(rest, arg).map(Self::Mixer)
        } else if let Some(rest) = ident.strip_prefix("TEXTBOX_") {
            TextboxCommand::parse(rest).map(Self::Textbox)
        } else {
            Err(MixdocError::UnknownCommand(ident.to_string()))
        }
    }

    /// The widget owning this command.
    pub fn widget(&self) -> Widget {
        match self {
            Self::Mixer(_) => Widget::Mixer,
            Self::Textbox(_) => Widget::Textbox,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mixer(cmd) => fmt::Display::fmt(cmd, f),
            Self::Textbox(cmd) => fmt::Display::fmt(cmd, f),
        }
    }
}

/// Parse the numeric argument of a parametrized command. Arguments live in
/// the upper 9 bits of the packed command value.
fn parse_argument(command: &str, arg: Option<&str>) -> Result<u16> {
    let arg = arg.ok_or_else(|| MixdocError::MissingArgument(command.to_string()))?;
    arg.parse::<u16>()
        .ok()
        .filter(|n| *n < 512)
        .ok_or_else(|| MixdocError::InvalidArgument {
            command: command.to_string(),
            argument: arg.to_string(),
        })
}
