// ── Layout ────────────────────────────────────────────────────────────────

/// Horizontal and vertical spacing between grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gaps {
    pub h: i32,
    pub v: i32,
}

/// How a window or panel arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Left-to-right, wrapping.
    #[default]
    Flow,
    /// `rows` × `cols` cells, optionally spaced by `gaps`.
    Grid { rows: i32, cols: i32, gaps: Option<Gaps> },
}

// ── Handles ───────────────────────────────────────────────────────────────

/// Index-based container handle for renderers that keep their own arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Index-based radio group handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub usize);

// ── Renderer ──────────────────────────────────────────────────────────────

/// The backend the grammar engine streams a document into.
///
/// Calls arrive in source order as soon as each construct is recognised:
/// a container is always created before anything is added to it, and
/// [`show`](Renderer::show) is the last call of a successful parse.
///
/// A window is itself a container; `create_window` hands back the handle
/// its layout and children are attached to.
pub trait Renderer {
    type Container: Clone;
    type Group;

    fn create_window(&mut self, title: &str, width: i32, height: i32) -> Self::Container;

    fn set_layout(&mut self, container: &Self::Container, layout: &Layout);

    fn add_button(&mut self, container: &Self::Container, label: &str);

    fn add_label(&mut self, container: &Self::Container, text: &str);

    fn add_text_field(&mut self, container: &Self::Container, columns: i32);

    /// Create a panel and attach it to `parent`.
    fn begin_panel(&mut self, parent: &Self::Container) -> Self::Container;

    fn begin_radio_group(&mut self) -> Self::Group;

    /// Add a radio button to `container`, making it mutually exclusive with
    /// the other buttons of `group`.
    fn add_radio_button(&mut self, group: &Self::Group, container: &Self::Container, label: &str);

    fn show(&mut self, window: &Self::Container);
}
