use core::ops::Index;
use std::collections::{hash_map::Entry, HashMap, HashSet};

use derive_more::Display;
use itertools::Itertools as _;
use log::debug;

use crate::record::{BlockRecord, Rank};

const TITLE_LENGTH: usize = 10;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display)]
pub struct NodeIndex(usize);

impl NodeIndex {
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug)]
pub struct Node<R> {
    record: R,
    title: String,
    // Filled in by the layout engine. `None` until then.
    position: Option<Position>,
}

impl<R: BlockRecord> Node<R> {
    fn new(record: R) -> Self {
        let title = record.hash().chars().take(TITLE_LENGTH).collect();

        Self {
            record,
            title,
            position: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        self.record.hash()
    }

    #[must_use]
    pub fn validator(&self) -> &str {
        self.record.validator()
    }

    #[must_use]
    pub fn era(&self) -> &str {
        self.record.key_block_hash()
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.record.rank()
    }
}

impl<R> Node<R> {
    #[must_use]
    pub const fn record(&self) -> &R {
        &self.record
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        self.position
    }

    // Laying out a graph again replaces the previous positions.
    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }
}

/// Directed edge from a block to one of its parents or justified blocks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub is_main_parent: bool,
    pub is_justification: bool,
    pub is_finalized: bool,
}

/// Blocks and the references between them, restricted to the blocks that are present.
///
/// References to blocks outside the input are dropped rather than reported.
/// The input is normally a window of a longer chain, so missing ancestors are expected.
#[derive(Clone, Debug)]
pub struct Graph<R> {
    nodes: Vec<Node<R>>,
    edges: Vec<Edge>,
    indices: HashMap<String, NodeIndex>,
    targets: HashMap<NodeIndex, HashSet<NodeIndex>>,
}

impl<R> Default for Graph<R> {
    fn default() -> Self {
        Self {
            nodes: vec![],
            edges: vec![],
            indices: HashMap::new(),
            targets: HashMap::new(),
        }
    }
}

impl<R> Index<NodeIndex> for Graph<R> {
    type Output = Node<R>;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index.get()]
    }
}

impl<R: BlockRecord> Graph<R> {
    /// Builds a graph with one node per distinct record hash.
    ///
    /// If several records share a hash, the first one is used and the rest are ignored.
    /// Nodes keep the order in which their records were first encountered.
    #[must_use]
    pub fn build(records: impl IntoIterator<Item = R>) -> Self {
        let mut nodes = vec![];
        let mut indices = HashMap::new();

        for record in records {
            match indices.entry(record.hash().to_owned()) {
                Entry::Occupied(occupied) => {
                    debug!("ignoring record with duplicate hash {}", occupied.key());
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(NodeIndex(nodes.len()));
                    nodes.push(Node::new(record));
                }
            }
        }

        let edges = (0..nodes.len())
            .map(NodeIndex)
            .flat_map(|source| outgoing_edges(source, &nodes, &indices))
            .collect_vec();

        let mut targets = HashMap::<_, HashSet<_>>::new();

        for edge in &edges {
            targets.entry(edge.source).or_default().insert(edge.target);
        }

        debug!(
            "built block graph (nodes: {}, edges: {})",
            nodes.len(),
            edges.len(),
        );

        Self {
            nodes,
            edges,
            indices,
            targets,
        }
    }

    #[must_use]
    pub fn node_by_id(&self, id: &str) -> Option<&Node<R>> {
        self.index_of(id).map(|index| &self[index])
    }
}

impl<R> Graph<R> {
    #[must_use]
    pub fn nodes(&self) -> &[Node<R>] {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.indices.get(id).copied()
    }

    #[must_use]
    pub fn source(&self, edge: &Edge) -> &Node<R> {
        &self[edge.source]
    }

    #[must_use]
    pub fn target(&self, edge: &Edge) -> &Node<R> {
        &self[edge.target]
    }

    #[must_use]
    pub fn has_target(&self, from: &str, to: &str) -> bool {
        let (Some(from), Some(to)) = (self.index_of(from), self.index_of(to)) else {
            return false;
        };

        self.targets
            .get(&from)
            .is_some_and(|targets| targets.contains(&to))
    }

    /// Returns `true` if `a` and `b` are the same node or are connected by an edge in either
    /// direction.
    ///
    /// Ids are compared as strings, so any id is its own neighbour even if it is not in the graph.
    #[must_use]
    pub fn are_neighbours(&self, a: &str, b: &str) -> bool {
        a == b || self.has_target(a, b) || self.has_target(b, a)
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node<R>] {
        &mut self.nodes
    }
}

fn outgoing_edges<R: BlockRecord>(
    source: NodeIndex,
    nodes: &[Node<R>],
    indices: &HashMap<String, NodeIndex>,
) -> Vec<Edge> {
    let record = nodes[source.get()].record();
    let parent_hashes = record.parent_hashes();
    let parent_set = parent_hashes.iter().collect::<HashSet<_>>();

    // Ballots are not finalized themselves, but their references to finalized blocks are shown as
    // finalized anyway.
    let source_carries_finality = record.is_finalized() || record.is_ballot();

    let edge_to = |target: NodeIndex, is_main_parent, is_justification| Edge {
        source,
        target,
        is_main_parent,
        is_justification,
        is_finalized: source_carries_finality && nodes[target.get()].record().is_finalized(),
    };

    let mut connected = HashSet::new();
    let mut edges = vec![];

    // Main parent status is positional. If the first parent is outside the window,
    // none of the remaining parents is promoted.
    for (position, parent_hash) in parent_hashes.iter().enumerate() {
        let Some(target) = indices.get(parent_hash).copied() else {
            continue;
        };

        if connected.insert(target) {
            edges.push(edge_to(target, position == 0, false));
        }
    }

    // The parent set is consulted before membership in the graph.
    // A justification of an absent parent is therefore dropped by the first check.
    for justification_hash in record.justification_hashes() {
        if parent_set.contains(justification_hash) {
            continue;
        }

        let Some(target) = indices.get(justification_hash).copied() else {
            continue;
        };

        if connected.insert(target) {
            edges.push(edge_to(target, false, true));
        }
    }

    edges
}
