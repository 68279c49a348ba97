/// Caps resource usage of a single search call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    /// Abort the search once more than this many nodes have been created.
    pub max_nodes: Option<usize>,
}

impl Limits {
    pub fn unlimited() -> Self {
        Limits::default()
    }

    pub fn max_nodes(max_nodes: usize) -> Self {
        Limits {
            max_nodes: Some(max_nodes),
        }
    }
}
