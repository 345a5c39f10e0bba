use std::{collections::HashMap, hash::Hash};

use crate::grid::{Grid, Neighborhood, Position};

/// Adjacency lists keyed by node.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    edges: HashMap<N, Vec<N>>,
}

impl<N: Clone + Eq + Hash> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash> Graph<N> {
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    pub fn add_node(&mut self, node: N) {
        self.edges.entry(node).or_default();
    }

    /// Adds the directed edge `from -> to` once.
    pub fn add_edge(&mut self, from: N, to: N) {
        self.add_node(to.clone());
        let targets = self.edges.entry(from).or_default();
        if !targets.contains(&to) {
            targets.push(to);
        }
    }

    pub fn connect(&mut self, a: N, b: N) {
        self.add_edge(a.clone(), b.clone());
        self.add_edge(b, a);
    }

    pub fn neighbors(&self, node: &N) -> &[N] {
        self.edges.get(node).map(|targets| targets.as_slice()).unwrap_or(&[])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.edges.keys()
    }

    pub fn node_n(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_n(&self) -> usize {
        self.edges.values().map(|targets| targets.len()).sum()
    }

    /// Cuts every edge pointing at `node`, returning the nodes it was reachable from.
    ///
    /// The node keeps its own outgoing edges so [`Graph::restore`] can rebuild the cut ones.
    pub fn isolate(&mut self, node: &N) -> Vec<N> {
        let mut sources = Vec::new();
        for (source, targets) in self.edges.iter_mut() {
            if let Some(ind) = targets.iter().position(|target| target == node) {
                targets.swap_remove(ind);
                sources.push(source.clone());
            }
        }

        sources
    }

    /// Reconnects `node` from each of `sources`, undoing [`Graph::isolate`].
    pub fn restore(&mut self, node: &N, sources: &[N]) {
        for source in sources {
            self.add_edge(source.clone(), node.clone());
        }
    }
}

impl Graph<Position> {
    /// Builds the graph of passable grid cells.
    ///
    /// `passable` filters cells that become nodes, and `linked` decides whether an edge
    /// goes from a passable cell to a passable neighbor. A symmetric `linked` yields an
    /// undirected graph.
    pub fn from_grid<T>(
        grid: &Grid<T>,
        neighborhood: Neighborhood,
        passable: impl Fn(&T) -> bool,
        linked: impl Fn(&T, &T) -> bool,
    ) -> Self {
        let mut graph = Self::new();
        for (pos, tile) in grid.tiles().filter(|(_, tile)| passable(tile)) {
            graph.add_node(pos);
            for next_pos in grid.neighbors(&pos, neighborhood) {
                if let Some(next_tile) = grid.tile(&next_pos) {
                    if passable(next_tile) && linked(tile, next_tile) {
                        graph.add_edge(pos, next_pos);
                    }
                }
            }
        }

        graph
    }
}
