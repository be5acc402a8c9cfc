//! Manual page sections documenting the configuration file.

use crate::{
    catalog::{CommandEntry, Entry, MIXER_COMMANDS, OPTIONS, TEXTBOX_COMMANDS, THEME_ELEMENTS},
    markup::{MarkupStyle, render_markup},
};

/// Documentation body in inline markup. The `{...}` placeholders are filled
/// from the catalogs.
const DOCUMENTATION: &str = r#"
## FILES
Configuration is read from the following files:

__$XDG_CONFIG_HOME__/alsamixer.rc

__$HOME__/.config/alsamixer.rc

__$HOME__/.alsamixer.rc

After a file has been successfully read no further files are processed.

## CONFIGURATION

Comment char is '#'.

Everything after comment char is ignored.

No quoting allowed.

.TP
**color** __element__ __foreground__ __background__ [__attribute__...]

__element__: A theme element as listed in **THEME ELEMENTS**.

__foreground__/__background__: __red__, __green__, __yellow__, __blue__, __magenta__, __cyan__, __white__, __black__, __default__.

__attribute__:  __bold__, __normal__, __reverse__, __underline__, __dim__, __italic__, __blink__, __standout__.

.TP
**set** __option__ __value__

__mouse_wheel_step__ = __<number>__

.TP
**bind** __key__ [__widget__] __command__

__key__:
    - a single character
    - a combination with control and/or meta/alt key: __C-x__, __M-x__, __A-x__, __C-M-x__
    - a curses key constant as found in **getch(3)** (like __Up__, __Left__, __Home__, __F1__, __F12__, ...)
    - one of these aliases: __Escape__, __Del__, __Delete__, __Insert__, __PageDown__, __PageUp__, __Space__, __Tab__

__widget__:
    - __mixer__ (default),
    - __textbox__

### OPTIONS
{options}

### THEME ELEMENTS
{theme_elements}

### MIXER COMMANDS

{mixer_commands}

### TEXTBOX COMMANDS

{textbox_commands}
"#;

/// Render a documented item as a name line followed by its description.
fn describe(name: &str, description: &str) -> String {
    format!("__{name}__\n{description}")
}

/// Blank-line separated list of items.
fn entry_list<'a>(items: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    items
        .map(|(name, description)| describe(name, description))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Documented command list for one widget.
fn command_list(commands: &[CommandEntry]) -> String {
    entry_list(commands.iter().map(|c| (c.name, c.description)))
}

/// Documented theme element or option list.
fn plain_list(entries: &[Entry]) -> String {
    entry_list(entries.iter().map(|e| (e.name, e.description)))
}

/// The documentation body with catalogs filled in, still in inline markup.
pub fn documentation() -> String {
    let options = entry_list(OPTIONS.iter().map(|o| (o.name, o.description)));
    DOCUMENTATION
        .replace("{options}", &options)
        .replace("{theme_elements}", &plain_list(THEME_ELEMENTS))
        .replace("{mixer_commands}", &command_list(MIXER_COMMANDS))
        .replace("{textbox_commands}", &command_list(TEXTBOX_COMMANDS))
}

/// Render the configuration sections of the alsamixer manual page as troff.
pub fn render_manpage() -> String {
    render_markup(&documentation(), &MarkupStyle::TROFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        let page = render_manpage();
        for heading in [
            ".SH FILES",
            ".SH CONFIGURATION",
            ".SS OPTIONS",
            ".SS THEME ELEMENTS",
            ".SS MIXER COMMANDS",
            ".SS TEXTBOX COMMANDS",
        ] {
            assert!(page.contains(heading), "missing {heading}");
        }
        assert!(!page.contains("##"));
        assert!(!page.contains('{'));
    }

    #[test]
    fn test_markup_resolved() {
        let page = render_manpage();
        assert!(page.contains(r"\fBcolor\fP \fIelement\fP"));
        assert!(page.contains("\\fImixer_frame\\fP\nFrame around the mixer"));
        assert!(page.contains("\\fIcontrol_up_<N>\\fP\nChange control by <N> percent up"));
        assert!(!page.contains("**"));
    }

    #[test]
    fn test_command_sections_are_in_order() {
        let page = render_manpage();
        let mixer = page.find(".SS MIXER COMMANDS").unwrap();
        let textbox = page.find(".SS TEXTBOX COMMANDS").unwrap();
        let help = page.find(r"\fIhelp\fP").unwrap();
        let top = page.find(r"\fItop\fP").unwrap();
        assert!(mixer < help && help < textbox && textbox < top);
    }
}
