//! Extraction of the default color theme from the mixer's color setup code.
//!
//! Two kinds of lines matter. Color pair declarations, numbered in the order
//! they appear starting at 1:
//!
//! ```c
//! get_color_pair(COLOR_CYAN, COLOR_BLACK);
//! ```
//!
//! and element assignments referring to those pairs by number:
//!
//! ```c
//! attrs.mixer_active = A_BOLD | COLOR_PAIR(2);
//! ```
//!
//! Pair 0 is the terminal default and always resolves to `none none`.

use std::fmt;

use bitflags::bitflags;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::{
    error::{MixdocError, Result},
    source::Source,
};

/// `get_color_pair(FG, BG)` declarations.
static PAIR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"get_color_pair\s*\(\s*(?P<fg>\w+)\s*,\s*(?P<bg>\w+)\s*\)")
        .expect("color pair pattern must compile")
});

/// `attrs.ELEMENT = [A_FLAG |]* COLOR_PAIR(N)` assignments, also in the `attr_ELEMENT` spelling.
static ELEMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\battrs?[._](?P<element>\w+)\s*=\s*(?P<attrs>(?:A_\w+\s*\|\s*)*)COLOR_PAIR\s*\(\s*(?P<index>\d+)\s*\)",
    )
    .expect("element pattern must compile")
});

bitflags! {
    /// Text attributes accepted in `color` lines.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u8 {
        /// Extra bright or bold text.
        const BOLD = 1 << 0;
        /// No highlighting.
        const NORMAL = 1 << 1;
        /// Swapped foreground and background.
        const REVERSE = 1 << 2;
        /// Underlined text.
        const UNDERLINE = 1 << 3;
        /// Half bright text.
        const DIM = 1 << 4;
        /// Italic text.
        const ITALIC = 1 << 5;
        /// Blinking text.
        const BLINK = 1 << 6;
        /// The terminal's best highlighting mode.
        const STANDOUT = 1 << 7;
    }
}

impl Attributes {
    /// Parse a single curses attribute constant such as `A_BOLD`.
    pub fn from_constant(constant: &str) -> Result<Self> {
        constant
            .strip_prefix("A_")
            .and_then(Self::from_name)
            .ok_or_else(|| MixdocError::UnknownAttribute(constant.to_string()))
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .iter_names()
            .map(|(name, _)| name.to_lowercase())
            .collect();
        f.write_str(&names.join(" "))
    }
}

/// Attribute flags of one assignment, in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList(Vec<Attributes>);

impl AttributeList {
    /// Parse a `|`-separated list of curses attribute constants, e.g.
    /// `A_BOLD | A_REVERSE |`. Empty segments are ignored.
    pub fn parse(list: &str) -> Result<Self> {
        list.split('|')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(Attributes::from_constant)
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// All flags combined.
    pub fn flags(&self) -> Attributes {
        self.0.iter().fold(Attributes::empty(), |acc, flag| acc | *flag)
    }
}

impl fmt::Display for AttributeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&names.join(" "))
    }
}

/// A foreground/background combination, with color names as used in `color` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPair {
    /// Foreground color name.
    pub foreground: String,
    /// Background color name.
    pub background: String,
}

impl ColorPair {
    /// The implicit pair 0.
    pub fn none() -> Self {
        Self {
            foreground: "none".to_string(),
            background: "none".to_string(),
        }
    }

    /// Build a pair from curses constants such as `COLOR_WHITE`.
    pub fn from_constants(foreground: &str, background: &str) -> Self {
        Self {
            foreground: color_name(foreground),
            background: color_name(background),
        }
    }
}

/// `COLOR_WHITE` -> `white`.
fn color_name(constant: &str) -> String {
    constant
        .strip_prefix("COLOR_")
        .unwrap_or(constant)
        .to_lowercase()
}

/// An element assignment as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAssignment {
    /// 1-based line number.
    pub line: usize,
    /// Theme element name, without the `attrs.`/`attr_` prefix.
    pub element: String,
    /// Attribute constants preceding `COLOR_PAIR`, still `|`-joined.
    pub attributes: String,
    /// Referenced color pair number, as written.
    pub index: String,
}

/// Everything found in a colors source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScan {
    /// Declared pairs, indexed by pair number. Index 0 is [`ColorPair::none`].
    pub pairs: Vec<ColorPair>,
    /// Element assignments in source order.
    pub assignments: Vec<RawAssignment>,
}

/// A fully resolved theme entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorAssignment {
    /// Theme element name.
    pub element: String,
    /// Resolved color pair.
    pub pair: ColorPair,
    /// Attribute flags in source order.
    pub attributes: AttributeList,
}

impl fmt::Display for ColorAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = format!(
            "color\t{}\t{}\t{}\t{}",
            self.element, self.pair.foreground, self.pair.background, self.attributes
        );
        f.write_str(line.trim_end())
    }
}

/// Collect pair declarations and element assignments from `source`.
pub fn scan_colors(source: &Source) -> ColorScan {
    let mut pairs = vec![ColorPair::none()];
    let mut assignments = Vec::new();

    for (line, text) in source.active_lines() {
        for caps in PAIR_RE.captures_iter(text) {
            let pair = ColorPair::from_constants(&caps["fg"], &caps["bg"]);
            debug!(line, index = pairs.len(), fg = %pair.foreground, bg = %pair.background, "color pair");
            pairs.push(pair);
        }

        for caps in ELEMENT_RE.captures_iter(text) {
            assignments.push(RawAssignment {
                line,
                element: caps["element"].to_string(),
                attributes: caps["attrs"].to_string(),
                index: caps["index"].to_string(),
            });
        }
    }

    ColorScan { pairs, assignments }
}

impl ColorScan {
    /// Resolve one assignment against the declared pairs.
    pub fn resolve(&self, raw: &RawAssignment) -> Result<ColorAssignment> {
        let pair = raw
            .index
            .parse::<usize>()
            .ok()
            .and_then(|index| self.pairs.get(index))
            .cloned()
            .ok_or_else(|| MixdocError::ColorPairOutOfRange {
                element: raw.element.clone(),
                index: raw.index.clone(),
                defined: self.pairs.len() - 1,
            })?;
        Ok(ColorAssignment {
            element: raw.element.clone(),
            pair,
            attributes: AttributeList::parse(&raw.attributes)?,
        })
    }
}

/// Extract the default theme from a colors source, in assignment order.
pub fn extract_colors(source: &Source) -> Result<Vec<ColorAssignment>> {
    let scan = scan_colors(source);
    if scan.assignments.is_empty() {
        warn!(path = %source.path().display(), "no color assignments found");
    }

    scan.assignments
        .iter()
        .map(|raw| {
            scan.resolve(raw)
                .map_err(|e| e.at_line(source.path(), raw.line))
        })
        .collect()
}
