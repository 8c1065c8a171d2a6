use crate::network::StationIndex;

pub(crate) type NodeIndex = usize;

/// Expanded stations of a search, each linked to the node it was reached from.
/// Walking the parent links from any node gives its path back to the start.
#[derive(Default)]
pub(crate) struct SearchTree {
    nodes: Vec<(StationIndex, Option<NodeIndex>)>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, station: StationIndex, parent: Option<NodeIndex>) -> NodeIndex {
        self.nodes.push((station, parent));
        self.nodes.len() - 1
    }

    pub fn len(&self) -> usize { self.nodes.len() }

    /// Path from the start station to `station`, reached via `parent`.
    pub fn path_to(&self, station: StationIndex, parent: Option<NodeIndex>) -> Vec<StationIndex> {
        let mut path = vec![station];
        let mut current = parent;
        while let Some(node) = current {
            let (station, parent) = self.nodes[node];
            path.push(station);
            current = parent;
        }
        path.reverse();
        path
    }
}
