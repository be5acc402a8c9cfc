//! Rendering of the default `alsamixer.rc`.

use crate::{
    catalog::{OPTIONS, find_option},
    error::{MixdocError, Result},
};

/// First line of every generated configuration file.
pub const HEADER: &str = "# alsamixer.rc - Default configuration file for alsamixer(1)";

/// Comment character of the configuration format.
const COMMENT: &str = "#";

/// Lines of the three sections of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultConfig {
    /// `set` lines.
    pub options: Vec<String>,
    /// `bind` lines.
    pub bindings: Vec<String>,
    /// `color` lines.
    pub colors: Vec<String>,
}

impl DefaultConfig {
    /// Render the configuration file. With `commented` set every section line
    /// is prefixed with the comment character, so the file documents the
    /// defaults without overriding anything.
    pub fn render(&self, commented: bool) -> String {
        format!(
            "{HEADER}\n\n### Options ###\n{}\n\n### Key bindings ###\n{}\n\n### Colors ###\n{}\n",
            section(&self.options, commented),
            section(&self.bindings, commented),
            section(&self.colors, commented),
        )
    }
}

/// Join section lines. An empty section renders as an empty line, or a bare
/// comment character when commented.
fn section(lines: &[String], commented: bool) -> String {
    if commented {
        format!("{COMMENT}{}", lines.join(format!("\n{COMMENT}").as_str()))
    } else {
        lines.join("\n")
    }
}

/// `set` lines for every option, in catalog order. Values from `overrides`
/// replace the defaults; naming an unknown option is an error.
pub fn option_lines(overrides: &[(String, String)]) -> Result<Vec<String>> {
    for (name, _) in overrides {
        if find_option(name).is_none() {
            return Err(MixdocError::UnknownOption(name.clone()));
        }
    }

    Ok(OPTIONS
        .iter()
        .map(|option| {
            let value = overrides
                .iter()
                .rev()
                .find(|(name, _)| name == option.name)
                .map_or(option.default, |(_, value)| value.as_str());
            format!("set {} {}", option.name, value)
        })
        .collect())
}
