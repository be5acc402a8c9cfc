//! Lightweight inline markup used in documentation text, and its troff rendering.
//!
//! - `**text**` renders bold
//! - `__text__` renders italic, used for variables and literal values
//! - `###` starts a subsection, `##` a section

use once_cell::sync::Lazy;
use regex::Regex;

/// `**bold**` spans.
static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern must compile"));
/// `__italic__` spans.
static ITALIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__(.+?)__").expect("italic pattern must compile"));

/// Output-format equivalents of each markup element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupStyle {
    /// Opening and closing bold escapes.
    pub bold: (&'static str, &'static str),
    /// Opening and closing italic escapes.
    pub italic: (&'static str, &'static str),
    /// Section heading macro.
    pub section: &'static str,
    /// Subsection heading macro.
    pub subsection: &'static str,
}

impl MarkupStyle {
    /// Font escapes and heading macros for man pages.
    pub const TROFF: Self = Self {
        bold: (r"\fB", r"\fP"),
        italic: (r"\fI", r"\fP"),
        section: ".SH",
        subsection: ".SS",
    };
}

/// Translate markup in `text`. Bold is handled before italic, and the
/// `###` subsection marker before the `##` section marker it contains.
pub fn render_markup(text: &str, style: &MarkupStyle) -> String {
    let bold = format!("{}${{1}}{}", style.bold.0, style.bold.1);
    let italic = format!("{}${{1}}{}", style.italic.0, style.italic.1);

    let text = BOLD_RE.replace_all(text, bold.as_str());
    let text = ITALIC_RE.replace_all(&text, italic.as_str());
    text.replace("###", style.subsection)
        .replace("##", style.section)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn troff(text: &str) -> String {
        render_markup(text, &MarkupStyle::TROFF)
    }

    #[test]
    fn test_fonts() {
        assert_eq!(troff("**color**"), r"\fBcolor\fP");
        assert_eq!(troff("__element__: x"), r"\fIelement\fP: x");
        assert_eq!(
            troff("**bind** __key__ [__widget__]"),
            r"\fBbind\fP \fIkey\fP [\fIwidget\fP]"
        );
        assert_eq!(troff("__$HOME__/.alsamixer.rc"), r"\fI$HOME\fP/.alsamixer.rc");
    }

    #[test]
    fn test_headings() {
        assert_eq!(troff("## FILES\n### OPTIONS"), ".SH FILES\n.SS OPTIONS");
    }

    #[test]
    fn test_spans_do_not_cross_lines() {
        assert_eq!(troff("__a\nb__"), "__a\nb__");
    }

    #[test]
    fn test_unpaired_markers_left_alone() {
        assert_eq!(troff("snake__case"), "snake__case");
    }
}
