use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{MixdocError, Result};

/// The text of a mixer source file, read in full before extraction starts.
#[derive(Debug, Clone)]
pub struct Source {
    /// Path used when reporting errors.
    path: PathBuf,
    /// File contents.
    text: String,
}

impl Source {
    /// Read a source file. A missing file is reported as [`MixdocError::FileNotFound`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MixdocError::FileNotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "read source");
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Wrap in-memory text, labelled with `name` in error messages.
    pub fn from_text(name: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: name.into(),
            text: text.into(),
        }
    }

    /// Path or label of the source.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines paired with their 1-based line numbers.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.text.lines().enumerate().map(|(i, line)| (i + 1, line))
    }

    /// Like [`Source::numbered_lines`], but without preprocessor directives
    /// and without lines compiled out by `#if 0`.
    pub fn active_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        let mut regions = DisabledRegions::default();
        self.numbered_lines().filter(move |(line, text)| {
            let skip = regions.skip(text);
            if skip {
                tracing::trace!(line, "skipping preprocessor or disabled line");
            }
            !skip
        })
    }
}

/// Tracks `#if 0` regions so disabled table entries are not picked up.
#[derive(Debug, Default)]
struct DisabledRegions {
    /// Nesting depth inside a disabled region; zero when active.
    depth: usize,
}

impl DisabledRegions {
    /// Feed one line, returning whether it should be skipped.
    fn skip(&mut self, line: &str) -> bool {
        let Some(directive) = line.trim_start().strip_prefix('#') else {
            return self.depth > 0;
        };
        let directive = directive.trim_start();

        if self.depth > 0 {
            if directive.starts_with("if") {
                self.depth += 1;
            } else if directive.starts_with("endif") {
                self.depth -= 1;
            } else if self.depth == 1
                && (directive.starts_with("else") || directive.starts_with("elif"))
            {
                self.depth = 0;
            }
        } else if is_if_zero(directive) {
            self.depth = 1;
        }
        true
    }
}

/// `if 0`, optionally followed by a comment.
fn is_if_zero(directive: &str) -> bool {
    directive
        .strip_prefix("if")
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .and_then(|rest| rest.trim_start().strip_prefix('0'))
        .is_some_and(|rest| {
            let rest = rest.trim_start();
            rest.is_empty() || rest.starts_with("/*") || rest.starts_with("//")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("colors.c");
        fs::write(&path, "one\ntwo\n")?;

        let source = Source::open(&path)?;
        assert_eq!(source.path(), path.as_path());
        assert_eq!(
            source.numbered_lines().collect::<Vec<_>>(),
            vec![(1, "one"), (2, "two")]
        );

        assert!(matches!(
            Source::open(temp_dir.path().join("missing.c")),
            Err(MixdocError::FileNotFound(p)) if p.ends_with("missing.c")
        ));
        Ok(())
    }

    #[test]
    fn test_active_lines() {
        let source = Source::from_text(
            "bindings.c",
            "a\n#if 0\nb\n#ifdef X\nc\n#endif\nd\n#else\ne\n#endif\n#ifdef Y\nf\n#endif\n",
        );
        assert_eq!(
            source.active_lines().collect::<Vec<_>>(),
            vec![(1, "a"), (9, "e"), (12, "f")]
        );
    }

    #[test]
    fn test_if_zero_with_comment() {
        let source = Source::from_text(
            "bindings.c",
            "#if 0 /* disabled */\na\n#endif\n#if 0 // old\nb\n#endif\n#if 0//x\nc\n#endif\n\
             #if 0x1\nd\n#endif\n#if 01\ne\n#endif\n",
        );
        assert_eq!(
            source.active_lines().collect::<Vec<_>>(),
            vec![(11, "d"), (14, "e")]
        );
        assert!(is_if_zero("if\t0"));
        assert!(!is_if_zero("ifdef 0"));
    }
}
