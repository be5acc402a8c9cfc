// Each integration test crate uses a different subset of these helpers.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path of a checked-in fixture source.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A scratch directory holding mixer sources written by a test.
pub struct Sources {
    dir: TempDir,
}

impl Sources {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Write `contents` to `name`, dedenting lines so tests can indent sources inline.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        let text: String = contents
            .lines()
            .map(|line| format!("{}\n", line.trim_start()))
            .collect();
        fs::write(&path, text).unwrap();
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

pub const EXPECTED_BINDINGS: &[&str] = &[
    "bind ESCAPE\t\t close",
    "bind F10\t\t close",
    "bind !\t\t control_focus_1",
    "bind 0\t\t control_set_0",
    "bind 1\t\t control_set_10",
    "bind Up\t\t control_up_1",
    "bind Ppage\t\t control_up_5",
    "bind F1\t\t help",
    "bind ?\t\t help",
    "bind F5\t\t mode_all",
    "bind F4\t\t mode_capture",
    "bind F3\t\t mode_playback",
    "bind TAB\t\t mode_toggle",
    "bind Right\t\t next",
    "bind C-L\t\t refresh",
    "bind SPACE\t\t toggle_capture",
    "bind '\t\t toggle_capture_right",
    "bind RETURN\t\ttextbox close",
    "bind ESCAPE\t\ttextbox close",
    "bind Down\t\ttextbox down",
    "bind j\t\ttextbox down",
    "bind Npage\t\ttextbox page_down",
    "bind SPACE\t\ttextbox page_down",
    "bind C-D\t\ttextbox page_down",
    "bind TAB\t\ttextbox page_right",
    "bind Home\t\ttextbox top",
    "bind Up\t\ttextbox up",
];

pub const EXPECTED_COLORS: &[&str] = &[
    "color\tmixer_frame\tcyan\tblack",
    "color\tmixer_active\tyellow\tblack\tbold",
    "color\tctl_nomute\twhite\tgreen\tbold",
    "color\tctl_capture\tred\tblack\tbold",
    "color\tctl_label_inactive\tnone\tnone\treverse",
];
