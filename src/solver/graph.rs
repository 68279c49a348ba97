use std::borrow::Cow;
use std::fs;
use std::process::Command;

use dot::{Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};
use fnv::FnvHashMap;

use crate::data::Dir;
use crate::state::PuzzleState;

type Nd = usize;
type Ed = (usize, usize, Dir);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Type {
    Queued,
    Visited,
    Goal,
}

/// Records the explored part of the state space so it can be rendered with
/// graphviz. Duplicate discoveries show up as extra edges into an existing
/// node.
#[derive(Debug)]
pub(crate) struct Graph {
    state_indices: FnvHashMap<PuzzleState, usize>,
    nodes: Vec<(PuzzleState, u32, Type)>,
    edges: Vec<Ed>,
}

impl Graph {
    pub(crate) fn new() -> Self {
        Self {
            state_indices: FnvHashMap::default(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, state: PuzzleState, depth: u32, prev: Option<(PuzzleState, Dir)>) {
        assert!(!self.state_indices.contains_key(&state));

        let index = self.nodes.len();
        self.state_indices.insert(state, index);
        self.nodes.push((state, depth, Type::Queued));

        if let Some((prev_state, dir)) = prev {
            let prev_index = self.state_indices[&prev_state];
            self.edges.push((prev_index, index, dir));
        }
    }

    pub(crate) fn add_duplicate_edge(&mut self, from: PuzzleState, to: PuzzleState, dir: Dir) {
        let from = self.state_indices[&from];
        let to = self.state_indices[&to];
        self.edges.push((from, to, dir));
    }

    pub(crate) fn mark_visited(&mut self, state: PuzzleState) {
        self.nodes[self.state_indices[&state]].2 = Type::Visited;
    }

    pub(crate) fn mark_goal(&mut self, state: PuzzleState) {
        self.nodes[self.state_indices[&state]].2 = Type::Goal;
    }

    pub(crate) fn draw(&self) {
        let mut writer = Vec::new();
        dot::render(self, &mut writer).unwrap();
        let rendered = String::from_utf8(writer).unwrap();
        fs::write("state-space.dot", &rendered).unwrap();

        let status = Command::new("dot")
            .args(&["-Tsvg", "-O", "state-space.dot"])
            .status()
            .unwrap();
        assert!(status.success());
    }
}

impl<'a> GraphWalk<'a, Nd, Ed> for Graph {
    fn nodes(&'a self) -> Nodes<'a, Nd> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&'a self) -> Edges<'a, Ed> {
        Cow::from(&self.edges)
    }

    fn source(&'a self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'a self, e: &Ed) -> Nd {
        e.1
    }
}

impl<'a> Labeller<'a, Nd, Ed> for Graph {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("G").unwrap()
    }

    fn node_id(&'a self, n: &Nd) -> Id<'a> {
        Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&'a self, n: &Nd) -> LabelText<'a> {
        let (state, depth, _) = self.nodes[*n];
        LabelText::EscStr(format!("d: {}\n{}", depth, state).into())
    }

    fn edge_label(&'a self, e: &Ed) -> LabelText<'a> {
        LabelText::LabelStr(e.2.to_string().into())
    }

    fn node_style(&'a self, n: &Nd) -> Style {
        if self.nodes[*n].2 == Type::Queued {
            Style::Solid
        } else {
            Style::Filled
        }
    }

    fn node_color(&'a self, n: &Nd) -> Option<LabelText<'a>> {
        Some(LabelText::LabelStr(
            match self.nodes[*n].2 {
                Type::Visited => "gray",
                Type::Goal => "green",
                Type::Queued => return None,
            }
            .into(),
        ))
    }
}
