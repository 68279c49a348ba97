mod bfs;
#[cfg(feature = "graph")]
mod graph;

use std::collections::VecDeque;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::debug;
use typed_arena::Arena;

use crate::config::Limits;
use crate::solution::{Solution, Step};
use crate::state::PuzzleState;
use crate::Solve;

use self::bfs::Node;
pub use self::bfs::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    NodeLimit(usize),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::NodeLimit(max_nodes) => {
                write!(f, "Node limit of {} exceeded - search aborted", max_nodes)
            }
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// `None` means the goal is unreachable - an ordinary outcome, not an
    /// error.
    pub solution: Option<Solution>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(solution: Option<Solution>, stats: Stats) -> Self {
        Self { solution, stats }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.solution {
            None => writeln!(f, "No solution")?,
            Some(ref solution) => writeln!(f, "Moves: {}", solution.move_cnt())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for PuzzleState {
    fn solve(&self, limits: Limits, print_status: bool) -> Result<SolverOk, SolverErr> {
        search(self, limits, print_status)
    }
}

/// Breadth-first search from `initial` to the nearest goal state. The state
/// graph is unweighted so the first goal dequeued is move-optimal.
pub fn search(
    initial: &PuzzleState,
    limits: Limits,
    print_status: bool,
) -> Result<SolverOk, SolverErr> {
    debug!("Search called");

    let mut stats = Stats::new();

    let arena = Arena::new();
    let mut to_visit = VecDeque::new();
    let mut seen = FnvHashSet::default();

    #[cfg(feature = "graph")]
    let mut graph = graph::Graph::new();

    let root = &*arena.alloc(Node::new(*initial, None, None, 0));
    stats.add_created(root.depth);
    seen.insert(root.state);
    to_visit.push_back(root);
    #[cfg(feature = "graph")]
    graph.add(root.state, root.depth, None);
    if let Some(max_nodes) = limits.max_nodes {
        if stats.total_created() as usize > max_nodes {
            return Err(SolverErr::NodeLimit(max_nodes));
        }
    }

    while let Some(cur) = to_visit.pop_front() {
        if stats.add_visited(cur.depth) && print_status {
            println!("Visited new depth: {}", cur.depth);
            println!("{:?}", stats);
        }
        #[cfg(feature = "graph")]
        graph.mark_visited(cur.state);

        if cur.state.is_goal() {
            debug!("Solved, backtracking path");
            #[cfg(feature = "graph")]
            {
                graph.mark_goal(cur.state);
                graph.draw();
            }
            return Ok(SolverOk::new(Some(backtrack_path(cur)), stats));
        }

        for dir in cur.state.legal_moves() {
            let next_state = match cur.state.moved(dir) {
                Some(next_state) => next_state,
                None => continue,
            };

            if !seen.insert(next_state) {
                stats.add_pruned(cur.depth + 1);
                #[cfg(feature = "graph")]
                graph.add_duplicate_edge(cur.state, next_state, dir);
                continue;
            }

            let next = &*arena.alloc(Node::new(next_state, Some(cur), Some(dir), cur.depth + 1));
            stats.add_created(next.depth);
            #[cfg(feature = "graph")]
            graph.add(next.state, next.depth, Some((cur.state, dir)));
            if let Some(max_nodes) = limits.max_nodes {
                if stats.total_created() as usize > max_nodes {
                    return Err(SolverErr::NodeLimit(max_nodes));
                }
            }
            to_visit.push_back(next);
        }
    }

    debug!("Frontier exhausted, no solution");
    #[cfg(feature = "graph")]
    graph.draw();
    Ok(SolverOk::new(None, stats))
}

fn backtrack_path(goal: &Node<'_>) -> Solution {
    let mut steps = Vec::new();
    let mut next = Some(goal);
    while let Some(node) = next {
        steps.push(Step::new(node.dir, node.state));
        next = node.parent;
    }
    steps.reverse();
    Solution::new(steps)
}
