use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use separator::Separatable;

use crate::data::Dir;
use crate::state::PuzzleState;

/// One discovered state plus the edge that produced it. Parent links point
/// backwards into the arena owned by the running search call.
#[derive(Clone, Copy)]
pub(crate) struct Node<'a> {
    pub(crate) state: PuzzleState,
    pub(crate) parent: Option<&'a Node<'a>>,
    pub(crate) dir: Option<Dir>,
    pub(crate) depth: u32,
}

impl<'a> Node<'a> {
    pub(crate) fn new(
        state: PuzzleState,
        parent: Option<&'a Node<'a>>,
        dir: Option<Dir>,
        depth: u32,
    ) -> Self {
        Node {
            state,
            parent,
            dir,
            depth,
        }
    }
}

// equality ignores the path that led to the state
impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Eq for Node<'_> {}

impl Hash for Node<'_> {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.state.hash(hasher);
    }
}

impl Debug for Node<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.dir {
            Some(dir) => write!(f, "{} {} (depth {})", dir, self.state, self.depth),
            None => write!(f, "{} (depth {})", self.state, self.depth),
        }
    }
}

/// Per-depth counters of the search frontier.
#[derive(Clone, PartialEq, Eq)]
pub struct Stats {
    created: Vec<u32>,
    visited: Vec<u32>,
    pruned: Vec<u32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats {
            created: vec![],
            visited: vec![],
            pruned: vec![],
        }
    }

    pub fn total_created(&self) -> u32 {
        self.created.iter().sum()
    }

    pub fn total_visited(&self) -> u32 {
        self.visited.iter().sum()
    }

    pub fn total_pruned(&self) -> u32 {
        self.pruned.iter().sum()
    }

    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created, depth)
    }

    pub(crate) fn add_visited(&mut self, depth: u32) -> bool {
        Self::add(&mut self.visited, depth)
    }

    pub(crate) fn add_pruned(&mut self, depth: u32) -> bool {
        Self::add(&mut self.pruned, depth)
    }

    fn add(counts: &mut Vec<u32>, depth: u32) -> bool {
        let mut ret = false;

        while depth as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth as usize] += 1;
        ret
    }

    fn at(counts: &[u32], depth: usize) -> u32 {
        counts.get(depth).copied().unwrap_or(0)
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "total created / visited / pruned duplicates:")?;
        writeln!(
            f,
            "{:<16}{:<17}{}",
            self.total_created().separated_string(),
            self.total_visited().separated_string(),
            self.total_pruned().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_visited();
        let pruned = self.total_pruned();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique states visited total: {}", visited.separated_string())?;
        writeln!(f, "Duplicates pruned total: {}", pruned.separated_string())?;
        writeln!(
            f,
            "Left in frontier total: {}",
            (created - visited).separated_string()
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Visited", "Pruned", "Left in frontier"
        )?;
        let depths = self
            .created
            .len()
            .max(self.visited.len())
            .max(self.pruned.len());
        for depth in 0..depths {
            let created = Self::at(&self.created, depth);
            let visited = Self::at(&self.visited, depth);
            let pruned = Self::at(&self.pruned, depth);
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                format!("{}:", depth),
                created.separated_string(),
                visited.separated_string(),
                pruned.separated_string(),
                (created - visited).separated_string()
            )?;
        }
        Ok(())
    }
}
