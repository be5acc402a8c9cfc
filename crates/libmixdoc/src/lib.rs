//! Generates the alsamixer manual page and default configuration file from
//! the mixer's C sources.
//!
//! Default key bindings are scraped from the bindings tables and the default
//! theme from the color setup code, using line-oriented pattern matching.
//! Commands, theme elements and options are documented from static catalogs.

mod error;
mod mixdoc;
mod source;

pub mod bindings;
pub mod catalog;
pub mod colors;
pub mod command;
pub mod config;
pub mod keys;
pub mod manpage;
pub mod markup;

pub use crate::{
    bindings::{Binding, extract_bindings},
    colors::{AttributeList, Attributes, ColorAssignment, ColorPair, extract_colors},
    command::{Command, MixerCommand, TextboxCommand, ViewMode, Widget},
    config::DefaultConfig,
    error::{MixdocError, Result},
    keys::normalize_key,
    manpage::render_manpage,
    mixdoc::Mixdoc,
    source::Source,
};
