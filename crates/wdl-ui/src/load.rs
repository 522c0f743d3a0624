use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use wdl_lang::{ParseOptions, parse_reader, parse_with};

use crate::builder::TreeBuilder;
use crate::document::Window;

/// Parse a `.wdl` source string into a [`Window`] tree.
pub fn parse_window(src: &str) -> Result<Window> {
    parse_window_with(src, &ParseOptions::default())
}

pub fn parse_window_with(src: &str, options: &ParseOptions) -> Result<Window> {
    let mut builder = TreeBuilder::new();
    parse_with(src, &mut builder, options)?;
    builder.into_window().context("document produced no window")
}

/// Read and parse the `.wdl` file at `path`.
///
/// The file handle is closed before this returns, on success and on error.
pub fn load_window(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Window> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    let mut builder = TreeBuilder::new();
    parse_reader(BufReader::new(file), &mut builder, options)
        .with_context(|| format!("parsing {}", path.display()))?;

    log::info!("loaded {}", path.display());
    builder.into_window().context("document produced no window")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use wdl_lang::{CommitMode, Error, Layout, TokenKind};

    use super::*;
    use crate::document::{RadioButton, Widget};

    #[test]
    fn parses_sample() {
        let window = parse_window(r#"window "Test" (100,100) layout flow: button "OK"; end."#).unwrap();
        assert_eq!(window.title, "Test");
        assert_eq!((window.width, window.height), (100, 100));
        assert_eq!(window.layout, Layout::Flow);
        assert_eq!(window.children, vec![Widget::Button { label: "OK".into() }]);
    }

    #[test]
    fn radio_group_shares_one_widget() {
        let window = parse_window(
            r#"window "R" (1,1) layout flow: group radio "A"; radio "B"; end; end."#,
        )
        .unwrap();
        assert_eq!(
            window.children,
            vec![Widget::RadioGroup {
                buttons: vec![RadioButton { label: "A".into() }, RadioButton { label: "B".into() }],
            }]
        );
    }

    #[test]
    fn printed_window_parses_back() {
        let src = r#"
            window "Calculator" (250, 300)
              layout grid(2, 1, 5, 5):
              textfield 20;
              panel layout grid(4, 3):
                button "7"; button "8"; button "9";
                panel layout flow: label "nested"; end;
              end;
              group radio "Deg"; radio "Rad"; end;
            end.
        "#;
        let window = parse_window(src).unwrap();
        let reparsed = parse_window(&window.to_string()).unwrap();
        assert_eq!(reparsed, window);
    }

    #[test]
    fn atomic_commit_builds_the_same_tree() {
        let src = r#"
            window "Nested" (400, 300) layout grid(2, 2, 4, 4):
              label "top";
              panel layout flow:
                panel layout grid(1, 2): button "A"; textfield 6; end;
                group radio "X"; radio "Y"; end;
              end;
            end.
        "#;
        let atomic = ParseOptions::new().commit(CommitMode::Atomic);
        let window = parse_window_with(src, &atomic).unwrap();
        assert_eq!(window, parse_window(src).unwrap());
        assert_eq!(parse_window(&window.to_string()).unwrap(), window);

        let broken = r#"window "Nested" (1, 1) layout flow: panel layout flow: end; end."#;
        let err = parse_window_with(broken, &atomic).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Syntax(_))));
    }

    #[test]
    fn syntax_error_is_reachable_through_anyhow() {
        let err = parse_window(r#"window "T" (1,1) layout flow: button "OK"; end"#).unwrap_err();
        match err.downcast_ref::<Error>() {
            Some(Error::Syntax(e)) => assert_eq!(e.expected, vec![TokenKind::Period]),
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "window \"File\" (320, 200)").unwrap();
        writeln!(file, "  layout flow:").unwrap();
        writeln!(file, "  label \"from disk\";").unwrap();
        writeln!(file, "end.").unwrap();

        let window = load_window(file.path(), &ParseOptions::default()).unwrap();
        assert_eq!(window.title, "File");
        assert_eq!(window.children, vec![Widget::Label { text: "from disk".into() }]);
    }

    #[test]
    fn load_error_names_the_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "window \"File\" (320, 200)\n  layot flow:").unwrap();

        let err = load_window(file.path(), &ParseOptions::default()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Lexical(e)) if e.line == 2));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_window(dir.path().join("absent.wdl"), &ParseOptions::default()).unwrap_err();
        assert!(err.to_string().starts_with("opening "));
    }
}
