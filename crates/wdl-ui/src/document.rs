use std::fmt;

use wdl_lang::{Gaps, Layout};

// ── Widget ────────────────────────────────────────────────────────────────

/// A widget described by a `.wdl` document.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Button { label: String },
    Label { text: String },
    /// A single-line text field `columns` characters wide.
    TextField { columns: i32 },
    Panel(Panel),
    /// Mutually exclusive radio buttons. Never empty when produced by the parser.
    RadioGroup { buttons: Vec<RadioButton> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadioButton {
    pub label: String,
}

/// A nested container with its own layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Panel {
    pub layout: Layout,
    pub children: Vec<Widget>,
}

// ── Window ────────────────────────────────────────────────────────────────

/// The top-level parse result for a `.wdl` source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub layout: Layout,
    pub children: Vec<Widget>,
}

impl Window {
    /// Every widget in the window, depth first, in source order.
    pub fn widgets(&self) -> Vec<&Widget> {
        let mut out = Vec::new();
        collect(&self.children, &mut out);
        out
    }
}

fn collect<'w>(children: &'w [Widget], out: &mut Vec<&'w Widget>) {
    for child in children {
        out.push(child);
        if let Widget::Panel(panel) = child {
            collect(&panel.children, out);
        }
    }
}

// ── Source printing ───────────────────────────────────────────────────────

const INDENT: &str = "    ";

struct LayoutSrc<'a>(&'a Layout);

impl fmt::Display for LayoutSrc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Layout::Flow => f.write_str("layout flow:"),
            Layout::Grid { rows, cols, gaps: None } => write!(f, "layout grid({rows}, {cols}):"),
            Layout::Grid { rows, cols, gaps: Some(Gaps { h, v }) } => {
                write!(f, "layout grid({rows}, {cols}, {h}, {v}):")
            }
        }
    }
}

fn write_widget(f: &mut fmt::Formatter<'_>, widget: &Widget, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    match widget {
        Widget::Button { label } => writeln!(f, "{pad}button \"{label}\";"),
        Widget::Label { text } => writeln!(f, "{pad}label \"{text}\";"),
        Widget::TextField { columns } => writeln!(f, "{pad}textfield {columns};"),
        Widget::Panel(panel) => {
            writeln!(f, "{pad}panel {}", LayoutSrc(&panel.layout))?;
            for child in &panel.children {
                write_widget(f, child, depth + 1)?;
            }
            writeln!(f, "{pad}end;")
        }
        Widget::RadioGroup { buttons } => {
            writeln!(f, "{pad}group")?;
            for b in buttons {
                writeln!(f, "{pad}{INDENT}radio \"{}\";", b.label)?;
            }
            writeln!(f, "{pad}end;")
        }
    }
}

/// Prints canonical `.wdl` source that parses back to an equal window.
impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "window \"{}\" ({}, {})", self.title, self.width, self.height)?;
        writeln!(f, "{INDENT}{}", LayoutSrc(&self.layout))?;
        for child in &self.children {
            write_widget(f, child, 1)?;
        }
        write!(f, "end.")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Window {
        Window {
            title: "Calc".into(),
            width: 200,
            height: 300,
            layout: Layout::Grid { rows: 2, cols: 1, gaps: Some(Gaps { h: 4, v: 2 }) },
            children: vec![
                Widget::TextField { columns: 12 },
                Widget::Panel(Panel {
                    layout: Layout::Grid { rows: 1, cols: 2, gaps: None },
                    children: vec![
                        Widget::Button { label: "1".into() },
                        Widget::Label { text: "x".into() },
                    ],
                }),
                Widget::RadioGroup {
                    buttons: vec![RadioButton { label: "Deg".into() }, RadioButton { label: "Rad".into() }],
                },
            ],
        }
    }

    #[test]
    fn prints_canonical_source() {
        let expected = "\
window \"Calc\" (200, 300)
    layout grid(2, 1, 4, 2):
    textfield 12;
    panel layout grid(1, 2):
        button \"1\";
        label \"x\";
    end;
    group
        radio \"Deg\";
        radio \"Rad\";
    end;
end.";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn widgets_are_listed_depth_first() {
        let window = sample();
        let kinds: Vec<&str> = window
            .widgets()
            .iter()
            .map(|w| match w {
                Widget::Button { .. } => "button",
                Widget::Label { .. } => "label",
                Widget::TextField { .. } => "textfield",
                Widget::Panel(_) => "panel",
                Widget::RadioGroup { .. } => "group",
            })
            .collect();
        assert_eq!(kinds, vec!["textfield", "panel", "button", "label", "group"]);
    }
}
