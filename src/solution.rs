use std::fmt::{self, Debug, Display, Formatter};
use std::slice;
use std::vec;

use crate::data::Dir;
use crate::state::PuzzleState;

/// One entry of a solution path. The root step carries no direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub dir: Option<Dir>,
    pub state: PuzzleState,
}

impl Step {
    pub(crate) fn new(dir: Option<Dir>, state: PuzzleState) -> Self {
        Step { dir, state }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.dir {
            Some(dir) => write!(f, "{} {}", dir, self.state),
            None => write!(f, "{}", self.state),
        }
    }
}

impl Debug for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A move-optimal path from the initial state to a goal state. Always
/// contains at least the root step.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Solution(Vec<Step>);

impl Solution {
    pub(crate) fn new(steps: Vec<Step>) -> Self {
        assert!(!steps.is_empty());
        Solution(steps)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len() - 1
    }

    pub fn initial_state(&self) -> PuzzleState {
        self.0[0].state
    }

    pub fn final_state(&self) -> PuzzleState {
        self.0[self.0.len() - 1].state
    }

    pub fn iter(&self) -> slice::Iter<'_, Step> {
        self.0.iter()
    }
}

impl IntoIterator for Solution {
    type Item = Step;
    type IntoIter = vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Step;
    type IntoIter = slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for step in &self.0 {
            writeln!(f, "{}", step)?;
        }
        Ok(())
    }
}

impl Debug for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
