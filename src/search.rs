//! Breadth-first and cost-relaxation searches over implicit graphs.
//!
//! Nodes are produced on demand by a successor closure, so the same routines serve
//! prebuilt [`Graph`](crate::graph::Graph)s, raw grids and compound states such as
//! position plus heading.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet, VecDeque},
    hash::Hash,
};

/// Step counts from `start` to every reachable node.
pub fn bfs_distances<N, I>(start: N, mut successors: impl FnMut(&N) -> I) -> HashMap<N, usize>
where
    N: Clone + Eq + Hash,
    I: IntoIterator<Item = N>,
{
    let mut distances = HashMap::from([(start.clone(), 0)]);
    let mut search_nodes = VecDeque::from([(start, 0)]);
    while let Some((cur_node, cur_steps_n)) = search_nodes.pop_front() {
        for next_node in successors(&cur_node) {
            if !distances.contains_key(&next_node) {
                distances.insert(next_node.clone(), cur_steps_n + 1);
                search_nodes.push_back((next_node, cur_steps_n + 1));
            }
        }
    }

    distances
}

/// Fewest steps from `start` to a node satisfying `is_goal`, `None` if unreachable.
pub fn bfs_steps<N, I>(
    start: N,
    is_goal: impl Fn(&N) -> bool,
    mut successors: impl FnMut(&N) -> I,
) -> Option<usize>
where
    N: Clone + Eq + Hash,
    I: IntoIterator<Item = N>,
{
    let mut searched_nodes = HashSet::from([start.clone()]);
    let mut search_nodes = VecDeque::from([(start, 0)]);
    while let Some((cur_node, cur_steps_n)) = search_nodes.pop_front() {
        if is_goal(&cur_node) {
            return Some(cur_steps_n);
        }

        for next_node in successors(&cur_node) {
            if searched_nodes.insert(next_node.clone()) {
                search_nodes.push_back((next_node, cur_steps_n + 1));
            }
        }
    }

    None
}

/// Minimal accumulated cost from any of `starts` to every reachable node.
///
/// Successors come with the cost of the edge leading to them. A node popped with a cost
/// above its settled one is stale and skipped.
pub fn min_costs<N, I>(
    starts: impl IntoIterator<Item = N>,
    mut successors: impl FnMut(&N) -> I,
) -> HashMap<N, usize>
where
    N: Clone + Eq + Hash + Ord,
    I: IntoIterator<Item = (N, usize)>,
{
    let mut costs = HashMap::new();
    let mut search_states = BinaryHeap::new();
    for start in starts {
        costs.insert(start.clone(), 0);
        search_states.push(Reverse((0, start)));
    }

    while let Some(Reverse((cur_cost, cur_node))) = search_states.pop() {
        if costs.get(&cur_node).is_some_and(|cost| cur_cost > *cost) {
            continue;
        }

        for (next_node, edge_cost) in successors(&cur_node) {
            let next_cost = cur_cost + edge_cost;
            if costs.get(&next_node).map_or(true, |cost| next_cost < *cost) {
                costs.insert(next_node.clone(), next_cost);
                search_states.push(Reverse((next_cost, next_node)));
            }
        }
    }

    costs
}

/// Number of distinct paths from `start` to nodes satisfying `is_goal`.
///
/// Successors must form a DAG; path counts of intermediate nodes are memoized.
pub fn count_paths<N, I>(
    start: &N,
    is_goal: &impl Fn(&N) -> bool,
    successors: &impl Fn(&N) -> I,
) -> usize
where
    N: Clone + Eq + Hash,
    I: IntoIterator<Item = N>,
{
    fn count_from<N, I>(
        node: &N,
        is_goal: &impl Fn(&N) -> bool,
        successors: &impl Fn(&N) -> I,
        counts: &mut HashMap<N, usize>,
    ) -> usize
    where
        N: Clone + Eq + Hash,
        I: IntoIterator<Item = N>,
    {
        if is_goal(node) {
            return 1;
        } else if let Some(count) = counts.get(node) {
            return *count;
        }

        let count = successors(node)
            .into_iter()
            .map(|next_node| count_from(&next_node, is_goal, successors, counts))
            .sum::<usize>();
        counts.insert(node.clone(), count);

        count
    }

    count_from(start, is_goal, successors, &mut HashMap::new())
}

/// Partitions `nodes` into connected components by flood fill.
///
/// Every node lands in exactly one component; components keep discovery order.
pub fn components<N, I>(
    nodes: impl IntoIterator<Item = N>,
    mut successors: impl FnMut(&N) -> I,
) -> Vec<Vec<N>>
where
    N: Clone + Eq + Hash,
    I: IntoIterator<Item = N>,
{
    let mut components = Vec::new();
    let mut searched_nodes = HashSet::new();
    for node in nodes {
        if !searched_nodes.insert(node.clone()) {
            continue;
        }

        let mut component = Vec::new();
        let mut search_nodes = VecDeque::from([node]);
        while let Some(cur_node) = search_nodes.pop_front() {
            for next_node in successors(&cur_node) {
                if searched_nodes.insert(next_node.clone()) {
                    search_nodes.push_back(next_node);
                }
            }
            component.push(cur_node);
        }
        components.push(component);
    }

    components
}
