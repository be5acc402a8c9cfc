use std::path::Path;

use tracing::info;

use super::{
    bindings::extract_bindings,
    colors::extract_colors,
    config::{DefaultConfig, option_lines},
    error::*,
    manpage::render_manpage,
    source::Source,
};

/// Mixdoc generates the configuration documentation of alsamixer from the
/// mixer's own sources.
///
/// Key bindings are read from the bindings tables (`bindings.c`) and the
/// default theme from the color setup (`colors.c`), so the generated manual
/// page and default configuration always match what the mixer actually does.
#[derive(Debug, Clone, Default)]
pub struct Mixdoc {
    /// Whether configuration lines are emitted commented out.
    commented: bool,

    /// Option values replacing the catalog defaults, in the order given.
    settings: Vec<(String, String)>,
}

impl Mixdoc {
    /// Creates a new Mixdoc instance with default configuration: uncommented
    /// output and catalog default option values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables commenting out every generated configuration line.
    pub fn with_commented(mut self, commented: bool) -> Self {
        self.commented = commented;
        self
    }

    /// Overrides the value written for an option. Unknown option names are
    /// reported when the configuration is rendered.
    pub fn with_setting(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.push((name.into(), value.into()));
        self
    }

    /// Collects the three configuration sections without rendering them.
    pub fn default_config(
        &self,
        bindings_source: impl AsRef<Path>,
        colors_source: impl AsRef<Path>,
    ) -> Result<DefaultConfig> {
        let options = option_lines(&self.settings)?;

        let bindings_source = Source::open(bindings_source)?;
        let bindings = extract_bindings(&bindings_source)?;
        info!(count = bindings.len(), path = %bindings_source.path().display(), "extracted bindings");

        let colors_source = Source::open(colors_source)?;
        let colors = extract_colors(&colors_source)?;
        info!(count = colors.len(), path = %colors_source.path().display(), "extracted colors");

        Ok(DefaultConfig {
            options,
            bindings: bindings.iter().map(ToString::to_string).collect(),
            colors: colors.iter().map(ToString::to_string).collect(),
        })
    }

    /// Renders the default configuration file.
    ///
    /// # Arguments
    /// * `bindings_source` - Path to the mixer's key bindings tables
    /// * `colors_source` - Path to the mixer's color setup code
    pub fn render_config(
        &self,
        bindings_source: impl AsRef<Path>,
        colors_source: impl AsRef<Path>,
    ) -> Result<String> {
        Ok(self
            .default_config(bindings_source, colors_source)?
            .render(self.commented))
    }

    /// Renders the configuration sections of the manual page as troff.
    pub fn render_manpage(&self) -> String {
        render_manpage()
    }
}
