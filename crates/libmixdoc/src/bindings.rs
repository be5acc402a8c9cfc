//! Extraction of default key bindings from the mixer's bindings tables.
//!
//! The tables are C array initializers indexed by key:
//!
//! ```c
//! [KEY_UP] =     CMD_WITH_ARG(CMD_MIXER_CONTROL_UP_N, 1),
//! ['\t'] =       CMD_TEXTBOX_PAGE_RIGHT,
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace, warn};

use crate::{
    command::{Command, Widget},
    error::Result,
    keys::normalize_key,
    source::Source,
};

/// One array initializer entry: key expression, command enum and optional argument.
static BINDING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\[\s*(?P<key>.+?)\s*\]\s*=\s*(?:CMD_WITH_ARG\s*\(\s*CMD_(?P<with_arg>\w+)\s*,\s*(?P<arg>\w+)\s*\)|CMD_(?P<plain>\w+))",
    )
    .expect("binding pattern must compile")
});

/// A binding as written in the source, before command resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBinding {
    /// 1-based line number.
    pub line: usize,
    /// Key expression used as array index, e.g. `KEY_F(1)` or `'q'`.
    pub key: String,
    /// Command enum name without the `CMD_` prefix.
    pub command: String,
    /// Argument passed through `CMD_WITH_ARG`.
    pub argument: Option<String>,
}

/// A resolved default binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Key name as accepted by the configuration parser.
    pub key: String,
    /// Bound command.
    pub command: Command,
}

impl Binding {
    /// The widget the bound command belongs to.
    pub fn widget(&self) -> Widget {
        self.command.widget()
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bind {}\t\t{} {}", self.key, self.widget(), self.command)
    }
}

/// Collect every table entry in `source`, in source order. Lines that do not
/// look like an entry, comment lines and lines inside `#if 0` are skipped.
pub fn scan_bindings(source: &Source) -> Vec<RawBinding> {
    let mut found = Vec::new();

    for (line, text) in source.active_lines() {
        if text.trim_start().starts_with("//") {
            trace!(line, "skipping line");
            continue;
        }

        for caps in BINDING_RE.captures_iter(text) {
            let command = caps
                .name("with_arg")
                .or_else(|| caps.name("plain"))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            found.push(RawBinding {
                line,
                key: caps["key"].to_string(),
                command,
                argument: caps.name("arg").map(|m| m.as_str().to_string()),
            });
        }
    }

    found
}

/// Resolve a scanned entry into a [`Binding`].
pub fn resolve_binding(source: &Source, raw: &RawBinding) -> Result<Binding> {
    let command = Command::resolve(&raw.command, raw.argument.as_deref())
        .map_err(|e| e.at_line(source.path(), raw.line))?;
    Ok(Binding {
        key: normalize_key(&raw.key),
        command,
    })
}

/// Extract all default bindings from a bindings source, ordered by widget and
/// then by command name. Bindings that compare equal keep their source order.
pub fn extract_bindings(source: &Source) -> Result<Vec<Binding>> {
    let mut bindings = scan_bindings(source)
        .iter()
        .map(|raw| resolve_binding(source, raw))
        .collect::<Result<Vec<_>>>()?;

    if bindings.is_empty() {
        warn!(path = %source.path().display(), "no bindings found");
    }
    for binding in &bindings {
        debug!(key = %binding.key, widget = %binding.widget(), command = %binding.command, "binding");
    }

    bindings.sort_by_cached_key(|b| (b.widget(), b.command.to_string()));
    Ok(bindings)
}
