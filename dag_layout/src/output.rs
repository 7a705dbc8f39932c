use block_dag::{hint, BlockRecord, Edge, Graph, Highlight, Lanes, Node, Rank};
use serde::Serialize;

#[derive(Serialize)]
pub struct LayoutDocument<'graph> {
    pub lanes: Vec<&'graph str>,
    pub nodes: Vec<NodeDocument<'graph>>,
    pub edges: Vec<EdgeDocument<'graph>>,
}

#[derive(Serialize)]
pub struct NodeDocument<'graph> {
    id: &'graph str,
    title: &'graph str,
    validator: &'graph str,
    era: &'graph str,
    rank: Rank,
    is_ballot: bool,
    is_finalized: bool,
    x: Option<f64>,
    y: Option<f64>,
    opacity: f64,
    label_shown: bool,
    hint: String,
}

#[derive(Serialize)]
pub struct EdgeDocument<'graph> {
    source: &'graph str,
    target: &'graph str,
    is_main_parent: bool,
    is_justification: bool,
    is_finalized: bool,
    opacity: f64,
}

impl<'graph> LayoutDocument<'graph> {
    pub fn new<R: BlockRecord>(graph: &'graph Graph<R>, highlight: &Highlight<R>) -> Self {
        let lanes = Lanes::new(graph.nodes()).validators().to_vec();

        let nodes = graph
            .nodes()
            .iter()
            .map(|node| NodeDocument::new(node, highlight))
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|edge| EdgeDocument::new(graph, edge, highlight))
            .collect();

        Self {
            lanes,
            nodes,
            edges,
        }
    }
}

impl<'graph> NodeDocument<'graph> {
    fn new<R: BlockRecord>(node: &'graph Node<R>, highlight: &Highlight<R>) -> Self {
        let style = highlight.node_style(node);
        let position = node.position();

        Self {
            id: node.id(),
            title: node.title(),
            validator: node.validator(),
            era: node.era(),
            rank: node.rank(),
            is_ballot: node.record().is_ballot(),
            is_finalized: node.record().is_finalized(),
            x: position.map(|position| position.x),
            y: position.map(|position| position.y),
            opacity: style.opacity,
            label_shown: style.label_shown,
            hint: hint(node),
        }
    }
}

impl<'graph> EdgeDocument<'graph> {
    fn new<R: BlockRecord>(graph: &'graph Graph<R>, edge: &Edge, highlight: &Highlight<R>) -> Self {
        Self {
            source: graph.source(edge).id(),
            target: graph.target(edge).id(),
            is_main_parent: edge.is_main_parent,
            is_justification: edge.is_justification,
            is_finalized: edge.is_finalized,
            opacity: highlight.edge_opacity(edge),
        }
    }
}
