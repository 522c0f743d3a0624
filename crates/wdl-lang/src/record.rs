use std::collections::HashMap;

use crate::render::{GroupId, Layout, NodeId, Renderer};

// ── RenderCall ────────────────────────────────────────────────────────────

/// One renderer call captured as data.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    CreateWindow { id: NodeId, title: String, width: i32, height: i32 },
    SetLayout { container: NodeId, layout: Layout },
    AddButton { container: NodeId, label: String },
    AddLabel { container: NodeId, text: String },
    AddTextField { container: NodeId, columns: i32 },
    BeginPanel { parent: NodeId, id: NodeId },
    BeginRadioGroup { id: GroupId },
    AddRadioButton { group: GroupId, container: NodeId, label: String },
    Show { window: NodeId },
}

// ── Recorder ──────────────────────────────────────────────────────────────

/// A headless [`Renderer`] that records every call it receives.
///
/// Container and group ids are minted sequentially from zero, so a recording
/// can be replayed onto any other renderer with [`Recorder::replay`].
#[derive(Debug, Default)]
pub struct Recorder {
    calls: Vec<RenderCall>,
    containers: usize,
    groups: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<RenderCall> {
        self.calls
    }

    /// Issue the recorded calls, in order, against `target`.
    ///
    /// Calls naming a container or group this recorder never handed out are
    /// skipped with a warning.
    pub fn replay<R: Renderer>(self, target: &mut R) {
        let mut containers: HashMap<NodeId, R::Container> = HashMap::with_capacity(self.containers);
        let mut groups: HashMap<GroupId, R::Group> = HashMap::with_capacity(self.groups);

        log::debug!("replaying {} recorded renderer calls", self.calls.len());
        for call in self.calls {
            match call {
                RenderCall::CreateWindow { id, title, width, height } => {
                    containers.insert(id, target.create_window(&title, width, height));
                }
                RenderCall::SetLayout { container, layout } => {
                    let Some(c) = lookup(&containers, container) else { continue };
                    target.set_layout(c, &layout);
                }
                RenderCall::AddButton { container, label } => {
                    let Some(c) = lookup(&containers, container) else { continue };
                    target.add_button(c, &label);
                }
                RenderCall::AddLabel { container, text } => {
                    let Some(c) = lookup(&containers, container) else { continue };
                    target.add_label(c, &text);
                }
                RenderCall::AddTextField { container, columns } => {
                    let Some(c) = lookup(&containers, container) else { continue };
                    target.add_text_field(c, columns);
                }
                RenderCall::BeginPanel { parent, id } => {
                    let Some(p) = lookup(&containers, parent) else { continue };
                    let panel = target.begin_panel(p);
                    containers.insert(id, panel);
                }
                RenderCall::BeginRadioGroup { id } => {
                    groups.insert(id, target.begin_radio_group());
                }
                RenderCall::AddRadioButton { group, container, label } => {
                    let Some(c) = lookup(&containers, container) else { continue };
                    let Some(g) = groups.get(&group) else {
                        log::warn!("replay: skipping call for unknown group {group:?}");
                        continue;
                    };
                    target.add_radio_button(g, c, &label);
                }
                RenderCall::Show { window } => {
                    let Some(w) = lookup(&containers, window) else { continue };
                    target.show(w);
                }
            }
        }
    }

    fn next_container(&mut self) -> NodeId {
        let id = NodeId(self.containers);
        self.containers += 1;
        id
    }
}

fn lookup<C>(containers: &HashMap<NodeId, C>, id: NodeId) -> Option<&C> {
    let found = containers.get(&id);
    if found.is_none() {
        log::warn!("replay: skipping call for unknown container {id:?}");
    }
    found
}

impl Renderer for Recorder {
    type Container = NodeId;
    type Group = GroupId;

    fn create_window(&mut self, title: &str, width: i32, height: i32) -> NodeId {
        let id = self.next_container();
        self.calls.push(RenderCall::CreateWindow { id, title: title.to_string(), width, height });
        id
    }

    fn set_layout(&mut self, container: &NodeId, layout: &Layout) {
        self.calls.push(RenderCall::SetLayout { container: *container, layout: *layout });
    }

    fn add_button(&mut self, container: &NodeId, label: &str) {
        self.calls.push(RenderCall::AddButton { container: *container, label: label.to_string() });
    }

    fn add_label(&mut self, container: &NodeId, text: &str) {
        self.calls.push(RenderCall::AddLabel { container: *container, text: text.to_string() });
    }

    fn add_text_field(&mut self, container: &NodeId, columns: i32) {
        self.calls.push(RenderCall::AddTextField { container: *container, columns });
    }

    fn begin_panel(&mut self, parent: &NodeId) -> NodeId {
        let id = self.next_container();
        self.calls.push(RenderCall::BeginPanel { parent: *parent, id });
        id
    }

    fn begin_radio_group(&mut self) -> GroupId {
        let id = GroupId(self.groups);
        self.groups += 1;
        self.calls.push(RenderCall::BeginRadioGroup { id });
        id
    }

    fn add_radio_button(&mut self, group: &GroupId, container: &NodeId, label: &str) {
        self.calls.push(RenderCall::AddRadioButton {
            group: *group,
            container: *container,
            label: label.to_string(),
        });
    }

    fn show(&mut self, window: &NodeId) {
        self.calls.push(RenderCall::Show { window: *window });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut rec = Recorder::new();
        let w = rec.create_window("W", 10, 20);
        let p = rec.begin_panel(&w);
        let q = rec.begin_panel(&p);
        let g = rec.begin_radio_group();
        assert_eq!((w, p, q, g), (NodeId(0), NodeId(1), NodeId(2), GroupId(0)));
    }

    #[test]
    fn replay_reproduces_the_recording() {
        let mut rec = Recorder::new();
        let w = rec.create_window("W", 10, 20);
        rec.set_layout(&w, &Layout::Flow);
        let p = rec.begin_panel(&w);
        rec.set_layout(&p, &Layout::Grid { rows: 1, cols: 2, gaps: None });
        let g = rec.begin_radio_group();
        rec.add_radio_button(&g, &p, "A");
        rec.add_text_field(&w, 8);
        rec.show(&w);
        let expected = rec.calls().to_vec();

        let mut copy = Recorder::new();
        rec.replay(&mut copy);
        assert_eq!(copy.into_calls(), expected);
    }

    #[test]
    fn replay_skips_foreign_handles() {
        let mut rec = Recorder::new();
        let w = rec.create_window("W", 1, 1);
        rec.set_layout(&NodeId(3), &Layout::Flow);
        let orphan = rec.begin_panel(&NodeId(7));
        rec.add_button(&orphan, "lost");
        rec.add_radio_button(&GroupId(2), &w, "lost");
        rec.add_label(&w, "kept");
        rec.show(&w);

        let mut copy = Recorder::new();
        rec.replay(&mut copy);
        assert_eq!(
            copy.into_calls(),
            vec![
                RenderCall::CreateWindow { id: NodeId(0), title: "W".into(), width: 1, height: 1 },
                RenderCall::AddLabel { container: NodeId(0), text: "kept".into() },
                RenderCall::Show { window: NodeId(0) },
            ]
        );
    }
}
