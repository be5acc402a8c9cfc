//! Static documentation tables for mixer commands, theme elements and options.

/// A bindable command as documented for users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    /// Identifier in the mixer sources, without the `CMD_<WIDGET>_` prefix.
    pub ident: &'static str,
    /// Command name used in configuration files. `<N>` stands for a numeric argument.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

/// A named, documented item: theme element or option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Name used in configuration files.
    pub name: &'static str,
    /// Human-readable description, may contain inline markup.
    pub description: &'static str,
}

/// A configurable option with the value written to the default configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionEntry {
    /// Option name used with `set`.
    pub name: &'static str,
    /// Default value.
    pub default: &'static str,
    /// Human-readable description, may contain inline markup.
    pub description: &'static str,
}

/// Shorthand constructor keeping the tables below readable.
const fn cmd(ident: &'static str, name: &'static str, description: &'static str) -> CommandEntry {
    CommandEntry {
        ident,
        name,
        description,
    }
}

/// Shorthand constructor for [`Entry`].
const fn entry(name: &'static str, description: &'static str) -> Entry {
    Entry { name, description }
}

/// Commands of the mixer widget, in documentation order.
pub static MIXER_COMMANDS: &[CommandEntry] = &[
    cmd("HELP", "help", "Display a window with keybindings"),
    cmd(
        "SYSTEM_INFORMATION",
        "system_information",
        "Display a menu with files containing information about alsa",
    ),
    cmd(
        "SELECT_CARD",
        "select_card",
        "Display a menu for selecting the soundcard",
    ),
    cmd("CLOSE", "close", "Close the application"),
    cmd("SET_VIEW_MODE", "mode_playback", "Display playback controls"),
    cmd("SET_VIEW_MODE", "mode_capture", "Display capture controls"),
    cmd("SET_VIEW_MODE", "mode_all", "Display all controls"),
    cmd(
        "TOGGLE_VIEW_MODE",
        "mode_toggle",
        "Switch between displaying playback/capture/all controls",
    ),
    cmd("REFRESH", "refresh", "Refresh the screen"),
    cmd("NEXT", "next", "Select next control"),
    cmd("PREVIOUS", "previous", "Select previous control"),
    cmd("BALANCE_CONTROL", "balance_control", "Balance control volumes"),
    cmd(
        "CONTROL_DOWN_N",
        "control_down_<N>",
        "Change control by <N> percent down",
    ),
    cmd(
        "CONTROL_DOWN_LEFT_N",
        "control_down_left_<N>",
        "Change left channel by <N> percent down",
    ),
    cmd(
        "CONTROL_DOWN_RIGHT_N",
        "control_down_right_<N>",
        "Change right channel by <N> percent down",
    ),
    cmd(
        "CONTROL_UP_N",
        "control_up_<N>",
        "Change control by <N> percent up",
    ),
    cmd(
        "CONTROL_UP_LEFT_N",
        "control_up_left_<N>",
        "Change left channel by <N> percent up",
    ),
    cmd(
        "CONTROL_UP_RIGHT_N",
        "control_up_right_<N>",
        "Change right channel by <N> percent up",
    ),
    cmd("TOGGLE_MUTE", "toggle_mute", "Toggle muting of control"),
    cmd(
        "TOGGLE_MUTE_LEFT",
        "toggle_mute_left",
        "Toggle muting left channel of control",
    ),
    cmd(
        "TOGGLE_MUTE_RIGHT",
        "toggle_mute_right",
        "Toggle muting right channel of control",
    ),
    cmd("TOGGLE_CAPTURE", "toggle_capture", "Toggle capturing of control"),
    cmd(
        "TOGGLE_CAPTURE_LEFT",
        "toggle_capture_left",
        "Toggle capturing left channel of control",
    ),
    cmd(
        "TOGGLE_CAPTURE_RIGHT",
        "toggle_capture_right",
        "Toggle capturing right channel of control",
    ),
    cmd(
        "CONTROL_N_PERCENT",
        "control_set_<N>",
        "Set control to <N> percent",
    ),
    cmd(
        "CONTROL_FOCUS_N",
        "control_focus_<N>",
        "Focus control number <N>",
    ),
];

/// Commands of the textbox widget, in documentation order.
pub static TEXTBOX_COMMANDS: &[CommandEntry] = &[
    cmd("TOP", "top", "Go to first line"),
    cmd("BOTTOM", "bottom", "Go to last line"),
    cmd("UP", "up", "Scroll text up by one line"),
    cmd("DOWN", "down", "Scroll text down by one line"),
    cmd("LEFT", "left", "Scroll text left by one column"),
    cmd("RIGHT", "right", "Scroll text right by one column"),
    cmd("PAGE_UP", "page_up", "Scroll text up by half a page"),
    cmd("PAGE_DOWN", "page_down", "Scroll text down by half a page"),
    cmd("PAGE_LEFT", "page_left", "Scroll text left by half a page"),
    cmd("PAGE_RIGHT", "page_right", "Scroll text right by half a page"),
    cmd("CLOSE", "close", "Close textbox"),
];

/// Colorable regions of the user interface.
pub static THEME_ELEMENTS: &[Entry] = &[
    entry("mixer_frame", "Frame around the mixer"),
    entry(
        "mixer_text",
        "Default text color (used for upper labels __Card:__, __Chip:__, ...)",
    ),
    entry("mixer_active", "Color of active labels (__[Playback]__)"),
    entry("ctl_frame", "Frame around the volume bar controls"),
    entry(
        "ctl_mute",
        "Text color for indicating the mute state (__MM__)",
    ),
    entry(
        "ctl_nomute",
        "Text color for indicating the unmute state (__OO__)",
    ),
    entry(
        "ctl_capture",
        "Text color for the capture label (__CAPTURE__)",
    ),
    entry(
        "ctl_nocapture",
        "Text color for disabled capture label (__-------__)",
    ),
    entry(
        "ctl_label",
        "Color of label underneath mixer controls (__Master__, __Headphone__, ...)",
    ),
    entry(
        "ctl_label_focus",
        "Color of label underneath focused mixer control",
    ),
    entry(
        "ctl_mark_focus",
        "Color of __<__ __>__ marks beside focused mixer label",
    ),
    entry("ctl_bar_lo", "Lower volume bar"),
    entry("ctl_bar_mi", "Middle volume bar"),
    entry("ctl_bar_hi", "Upper volume bar"),
    entry("ctl_inactive", "Color of inactive control"),
    entry("ctl_label_inactive", "Color for inactive label"),
    entry("errormsg", "Color used for error message textbox"),
    entry("infomsg", "Color used for information message textbox"),
    entry("textbox", "Color used for textbox (help screen)"),
    entry("textfield", "Color used for user input"),
    entry("menu", "Color used for menu"),
    entry("menu_selected", "Color used for selected entry in menu"),
];

/// Options settable with `set`.
pub static OPTIONS: &[OptionEntry] = &[
    OptionEntry {
        name: "mouse_wheel_step",
        default: "1",
        description: "Sets how many percent the volume changes using the mousewheel",
    },
    OptionEntry {
        name: "mouse_wheel_focuses_control",
        default: "1",
        description: "If enabled (__1__) the controls get refocused when a mousewheel event occurs. __0__ disables it.",
    },
];

/// Look up an option by its configuration name.
pub fn find_option(name: &str) -> Option<&'static OptionEntry> {
    OPTIONS.iter().find(|option| option.name == name)
}
