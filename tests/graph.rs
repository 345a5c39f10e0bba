use aoc2024::{
    graph::Graph,
    grid::{Grid, Neighborhood, Position},
};

const MAZE: &str = "\
#.###
#...#
###.#
#...#
#.###";

#[test]
fn undirected_adjacency_is_symmetric() {
    let grid = Grid::from_text(MAZE).unwrap();
    let graph = Graph::from_grid(&grid, Neighborhood::Orthogonal, |c| *c != '#', |_, _| true);

    assert_eq!(graph.node_n(), 9);
    for node in graph.nodes() {
        for next_node in graph.neighbors(node) {
            assert!(graph.neighbors(next_node).contains(node));
        }
    }
}

#[test]
fn directional_rule_keeps_one_way_edges() {
    let grid = Grid::new(1, 3, 0u32);
    let heights = grid.try_map(|pos, _| Ok::<_, ()>(pos.c as u32)).unwrap();
    let graph = Graph::from_grid(
        &heights,
        Neighborhood::Orthogonal,
        |_| true,
        |from, to| *to == from + 1,
    );

    assert_eq!(graph.neighbors(&Position::new(0, 0)), &[Position::new(0, 1)]);
    assert!(graph.neighbors(&Position::new(0, 2)).is_empty());
    assert_eq!(graph.edge_n(), 2);
}

#[test]
fn isolated_node_is_restored() {
    let mut graph = Graph::new();
    graph.connect('a', 'b');
    graph.connect('b', 'c');
    let edge_n = graph.edge_n();

    let sources = graph.isolate(&'b');
    assert!(!graph.neighbors(&'a').contains(&'b'));
    assert!(!graph.neighbors(&'c').contains(&'b'));
    assert_eq!(graph.neighbors(&'b').len(), 2);

    graph.restore(&'b', &sources);
    assert_eq!(graph.edge_n(), edge_n);
    assert!(graph.neighbors(&'a').contains(&'b'));
}
