mod utils;

use libmixdoc::{
    Binding, MixdocError, Mixdoc, Source, Widget, extract_bindings, extract_colors,
};
use pretty_assertions::assert_eq;
use utils::*;

fn section(comment: &str, lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| format!("{comment}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn expected_document(comment: &str) -> String {
    format!(
        "# alsamixer.rc - Default configuration file for alsamixer(1)\n\n\
         ### Options ###\n{}\n\n\
         ### Key bindings ###\n{}\n\n\
         ### Colors ###\n{}\n",
        section(
            comment,
            &["set mouse_wheel_step 1", "set mouse_wheel_focuses_control 1"]
        ),
        section(comment, EXPECTED_BINDINGS),
        section(comment, EXPECTED_COLORS),
    )
}

#[test]
fn test_fixture_bindings() {
    let source = Source::open(fixture("bindings.c")).unwrap();
    let lines: Vec<String> = extract_bindings(&source)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(lines, EXPECTED_BINDINGS);
}

#[test]
fn test_fixture_binding_order_is_widget_major() {
    let source = Source::open(fixture("bindings.c")).unwrap();
    let bindings: Vec<Binding> = extract_bindings(&source).unwrap();
    for pair in bindings.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.widget() <= b.widget());
        if a.widget() == b.widget() {
            assert!(a.command.to_string() <= b.command.to_string());
        }
    }
    assert_eq!(bindings.first().map(Binding::widget), Some(Widget::Mixer));
    assert_eq!(bindings.last().map(Binding::widget), Some(Widget::Textbox));
}

#[test]
fn test_fixture_colors() {
    let source = Source::open(fixture("colors.c")).unwrap();
    let lines: Vec<String> = extract_colors(&source)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(lines, EXPECTED_COLORS);
}

#[test]
fn test_render_config() {
    let output = Mixdoc::new()
        .render_config(fixture("bindings.c"), fixture("colors.c"))
        .unwrap();
    assert_eq!(output, expected_document(""));
}

#[test]
fn test_render_config_commented() {
    let output = Mixdoc::new()
        .with_commented(true)
        .render_config(fixture("bindings.c"), fixture("colors.c"))
        .unwrap();
    assert_eq!(output, expected_document("#"));

    let sections = ["### Options ###", "### Key bindings ###", "### Colors ###"];
    let mut in_section = false;
    for line in output.lines().skip(1) {
        if sections.contains(&line) {
            in_section = true;
        } else if line.is_empty() {
            in_section = false;
        } else if in_section {
            assert!(line.starts_with('#'), "uncommented line: {line:?}");
        }
    }
}

#[test]
fn test_render_config_with_setting() {
    let output = Mixdoc::new()
        .with_setting("mouse_wheel_step", "5")
        .render_config(fixture("bindings.c"), fixture("colors.c"))
        .unwrap();
    assert!(output.contains("\nset mouse_wheel_step 5\n"));
    assert!(output.contains("\nset mouse_wheel_focuses_control 1\n"));

    let err = Mixdoc::new()
        .with_setting("volume", "11")
        .render_config(fixture("bindings.c"), fixture("colors.c"))
        .unwrap_err();
    assert!(matches!(err, MixdocError::UnknownOption(name) if name == "volume"));
}

#[test]
fn test_empty_sources() {
    let sources = Sources::new();
    let bindings = sources.write("bindings.c", "/* nothing here */");
    let colors = sources.write("colors.c", "");

    let output = Mixdoc::new()
        .with_commented(true)
        .render_config(&bindings, &colors)
        .unwrap();
    assert!(output.ends_with("### Key bindings ###\n#\n\n### Colors ###\n#\n"));
}

#[test]
fn test_missing_source() {
    let sources = Sources::new();
    let colors = sources.write("colors.c", "");

    let err = Mixdoc::new()
        .render_config(sources.path("bindings.c"), &colors)
        .unwrap_err();
    assert!(matches!(&err, MixdocError::FileNotFound(path) if path.ends_with("bindings.c")));
}

#[test]
fn test_errors_are_distinguishable() {
    let sources = Sources::new();
    let colors = sources.write("colors.c", "");

    let cases = [
        ("[KEY_UP] = CMD_MIXER_LAUNCH,", "unknown command"),
        (
            "[KEY_UP] = CMD_WITH_ARG(CMD_MIXER_SET_VIEW_MODE, VIEW_MODE_SURROUND),",
            "unknown view mode",
        ),
    ];
    for (line, what) in cases {
        let bindings = sources.write("bindings.c", line);
        let err = Mixdoc::new().render_config(&bindings, &colors).unwrap_err();
        let matched = match err.root() {
            MixdocError::UnknownCommand(_) => "unknown command",
            MixdocError::UnknownViewMode(_) => "unknown view mode",
            _ => "other",
        };
        assert_eq!(matched, what);
    }

    let bindings = sources.write("bindings.c", "");
    let colors = sources.write(
        "colors.c",
        "
        get_color_pair(COLOR_RED, COLOR_BLACK);
        attrs.menu = COLOR_PAIR(7);
        ",
    );
    let err = Mixdoc::new().render_config(&bindings, &colors).unwrap_err();
    assert!(err.to_string().contains("colors.c:3:"));
    assert!(matches!(
        err.root(),
        MixdocError::ColorPairOutOfRange { index, defined: 1, .. } if index == "7"
    ));
}
