use wdl_lang::{GroupId, Layout, NodeId, Renderer};

use crate::document::{Panel, RadioButton, Widget, Window};

// ── Arena ─────────────────────────────────────────────────────────────────

enum Slot {
    Widget(Widget),
    Panel(NodeId),
    Group(GroupId),
}

#[derive(Default)]
struct Container {
    layout: Layout,
    children: Vec<Slot>,
}

struct PendingWindow {
    title: String,
    width: i32,
    height: i32,
}

// ── TreeBuilder ───────────────────────────────────────────────────────────

/// A headless [`Renderer`] that assembles [`Window`] values.
///
/// Containers live in an arena until [`show`](Renderer::show), which turns
/// the window's container and everything reachable from it into an owned
/// tree. A radio group shows up as one [`Widget::RadioGroup`] at the
/// position where its first button was added.
#[derive(Default)]
pub struct TreeBuilder {
    containers: Vec<Container>,
    groups: Vec<Vec<RadioButton>>,
    pending: Vec<(NodeId, PendingWindow)>,
    shown: Vec<Window>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Windows finished by `show`, in order.
    pub fn windows(&self) -> &[Window] {
        &self.shown
    }

    /// The most recently shown window.
    pub fn into_window(mut self) -> Option<Window> {
        self.shown.pop()
    }

    fn push_container(&mut self) -> NodeId {
        self.containers.push(Container::default());
        NodeId(self.containers.len() - 1)
    }

    /// Children added through a handle this builder never issued are dropped.
    fn children_of(&mut self, id: NodeId) -> Option<&mut Vec<Slot>> {
        let found = self.containers.get_mut(id.0);
        if found.is_none() {
            log::warn!("ignoring call for unknown container {id:?}");
        }
        found.map(|c| &mut c.children)
    }

    fn assemble(&self, id: NodeId) -> (Layout, Vec<Widget>) {
        let Some(container) = self.containers.get(id.0) else {
            return (Layout::default(), Vec::new());
        };
        let children = container
            .children
            .iter()
            .map(|slot| match slot {
                Slot::Widget(w) => w.clone(),
                Slot::Panel(panel) => {
                    let (layout, children) = self.assemble(*panel);
                    Widget::Panel(Panel { layout, children })
                }
                Slot::Group(group) => Widget::RadioGroup {
                    buttons: self.groups.get(group.0).cloned().unwrap_or_default(),
                },
            })
            .collect();
        (container.layout, children)
    }
}

impl Renderer for TreeBuilder {
    type Container = NodeId;
    type Group = GroupId;

    fn create_window(&mut self, title: &str, width: i32, height: i32) -> NodeId {
        let id = self.push_container();
        self.pending.push((id, PendingWindow { title: title.to_string(), width, height }));
        id
    }

    fn set_layout(&mut self, container: &NodeId, layout: &Layout) {
        match self.containers.get_mut(container.0) {
            Some(c) => c.layout = *layout,
            None => log::warn!("ignoring layout for unknown container {container:?}"),
        }
    }

    fn add_button(&mut self, container: &NodeId, label: &str) {
        if let Some(children) = self.children_of(*container) {
            children.push(Slot::Widget(Widget::Button { label: label.to_string() }));
        }
    }

    fn add_label(&mut self, container: &NodeId, text: &str) {
        if let Some(children) = self.children_of(*container) {
            children.push(Slot::Widget(Widget::Label { text: text.to_string() }));
        }
    }

    fn add_text_field(&mut self, container: &NodeId, columns: i32) {
        if let Some(children) = self.children_of(*container) {
            children.push(Slot::Widget(Widget::TextField { columns }));
        }
    }

    /// A panel under an unknown parent is still created, but is never
    /// reachable from a window.
    fn begin_panel(&mut self, parent: &NodeId) -> NodeId {
        let id = self.push_container();
        if let Some(children) = self.children_of(*parent) {
            children.push(Slot::Panel(id));
        }
        id
    }

    fn begin_radio_group(&mut self) -> GroupId {
        self.groups.push(Vec::new());
        GroupId(self.groups.len() - 1)
    }

    fn add_radio_button(&mut self, group: &GroupId, container: &NodeId, label: &str) {
        let Some(buttons) = self.groups.get_mut(group.0) else {
            log::warn!("ignoring radio button for unknown group {group:?}");
            return;
        };
        if buttons.is_empty() {
            let Some(container) = self.containers.get_mut(container.0) else {
                log::warn!("ignoring radio button for unknown container {container:?}");
                return;
            };
            container.children.push(Slot::Group(*group));
        }
        buttons.push(RadioButton { label: label.to_string() });
    }

    fn show(&mut self, window: &NodeId) {
        let Some(pos) = self.pending.iter().position(|(id, _)| id == window) else {
            log::warn!("show called for unknown window {window:?}");
            return;
        };
        let (_, meta) = self.pending.remove(pos);
        let (layout, children) = self.assemble(*window);
        log::debug!("assembled window {:?} with {} top-level widgets", meta.title, children.len());
        self.shown.push(Window {
            title: meta.title,
            width: meta.width,
            height: meta.height,
            layout,
            children,
        });
    }
}
