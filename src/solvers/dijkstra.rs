use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap, HashSet},
};

use super::PathResult;
use crate::{
    error::{Error, Result},
    graph::{Graph, VertexKey},
};

/// Heap entry. `order` is a monotone insertion counter, so vertices with
/// equal tentative distance settle in first-seen order.
struct QueueEntry {
    distance: usize,
    order: usize,
    key: VertexKey,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.distance, self.order).cmp(&(other.distance, other.order))
    }
}

/// Dijkstra over the non-negative integer edge weights of `graph`.
///
/// Fails with [`Error::NotFound`] if either endpoint is absent, and with
/// [`Error::Unreachable`] if no sequence of edges connects them; the
/// backward reconstruction is bounded, so an unreachable finish can never
/// hang the query.
pub fn shortest_path(graph: &Graph, start: VertexKey, finish: VertexKey) -> Result<PathResult> {
    if !graph.contains(start) {
        return Err(Error::NotFound(start));
    }
    if !graph.contains(finish) {
        return Err(Error::NotFound(finish));
    }

    let mut distances: HashMap<VertexKey, usize> = HashMap::with_capacity(graph.len());
    let mut settled: HashSet<VertexKey> = HashSet::with_capacity(graph.len());
    let mut queue: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();
    let mut order = 0usize;

    distances.insert(start, 0);
    queue.push(Reverse(QueueEntry {
        distance: 0,
        order,
        key: start,
    }));

    while let Some(Reverse(entry)) = queue.pop() {
        if !settled.insert(entry.key) {
            continue;
        }
        let Some(vertex) = graph.vertex(entry.key) else {
            continue;
        };
        for edge in vertex.edges() {
            if settled.contains(&edge.to) {
                continue;
            }
            let tentative = entry.distance + edge.weight;
            if distances.get(&edge.to).is_none_or(|&known| tentative < known) {
                distances.insert(edge.to, tentative);
                order += 1;
                queue.push(Reverse(QueueEntry {
                    distance: tentative,
                    order,
                    key: edge.to,
                }));
            }
        }
    }

    let Some(&total_weight) = distances.get(&finish) else {
        return Err(Error::Unreachable { start, finish });
    };

    // Reconstruct backward from the finish: among the current vertex's
    // edges in list order, step to the neighbor minimizing edge weight plus
    // settled distance; the first edge wins ties. The step count is bounded
    // by the vertex count.
    let mut keys = vec![finish];
    let mut current = finish;
    for _ in 0..graph.len() {
        if current == start {
            break;
        }
        let vertex = graph.vertex(current).ok_or(Error::NotFound(current))?;
        let mut best: Option<(VertexKey, usize)> = None;
        for edge in vertex.edges() {
            let Some(&settled_distance) = distances.get(&edge.to) else {
                continue;
            };
            let via = settled_distance + edge.weight;
            if best.is_none_or(|(_, known)| via < known) {
                best = Some((edge.to, via));
            }
        }
        let Some((next, _)) = best else {
            return Err(Error::Unreachable { start, finish });
        };
        keys.push(next);
        current = next;
    }
    if current != start {
        return Err(Error::Unreachable { start, finish });
    }
    keys.reverse();

    Ok(PathResult {
        vertices: keys,
        total_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generators::generate, graph::build_graph};

    fn k(x: u16, y: u16) -> VertexKey {
        VertexKey::over(x, y)
    }

    #[test]
    fn fixture_path_respects_underways() {
        let grid = generate("123", 6, 6, 50, true, Some((2, 2))).expect("valid parameters");
        let graph = build_graph(&grid, (3, 3)).expect("start is inside the grid");

        let path = shortest_path(&graph, k(4, 1), k(4, 2)).expect("path exists");
        assert_eq!(
            path.vertices,
            vec![
                k(4, 1),
                k(3, 1),
                k(3, 0),
                k(4, 0),
                VertexKey::under(4, 1),
                k(4, 2),
            ]
        );
        assert_eq!(path.total_weight, 5);
    }

    #[test]
    fn path_weight_equals_edge_weight_sum() {
        for seed in ["123", "xyz", "q"] {
            let grid = generate(seed, 8, 8, 50, true, None).expect("valid parameters");
            let graph = build_graph(&grid, (4, 4)).expect("start is inside the grid");
            let path = shortest_path(&graph, k(0, 0), k(7, 7)).expect("path exists");

            assert_eq!(path.vertices.first(), Some(&k(0, 0)));
            assert_eq!(path.vertices.last(), Some(&k(7, 7)));
            let mut walked = 0;
            for pair in path.vertices.windows(2) {
                let vertex = graph.vertex(pair[0]).expect("path vertex exists");
                let edge = vertex
                    .edges()
                    .iter()
                    .find(|e| e.to == pair[1])
                    .expect("consecutive path keys share an edge");
                walked += edge.weight;
            }
            assert_eq!(walked, path.total_weight);
        }
    }

    #[test]
    fn start_equals_finish_is_a_zero_length_walk() {
        let grid = generate("123", 6, 6, 50, true, Some((2, 2))).expect("valid parameters");
        let graph = build_graph(&grid, (3, 3)).expect("start is inside the grid");
        let path = shortest_path(&graph, k(2, 2), k(2, 2)).expect("path exists");
        assert_eq!(path.vertices, vec![k(2, 2)]);
        assert_eq!(path.total_weight, 0);
    }

    #[test]
    fn missing_endpoints_fail_immediately() {
        let grid = generate("123", 6, 6, 50, true, Some((2, 2))).expect("valid parameters");
        let graph = build_graph(&grid, (3, 3)).expect("start is inside the grid");

        let absent = VertexKey::under(0, 0);
        assert_eq!(
            shortest_path(&graph, absent, k(2, 2)).err(),
            Some(Error::NotFound(absent))
        );
        assert_eq!(
            shortest_path(&graph, k(2, 2), absent).err(),
            Some(Error::NotFound(absent))
        );
    }

    #[test]
    fn disconnected_components_are_unreachable_not_a_hang() {
        let mut graph = Graph::new();
        graph.link(k(0, 0), k(1, 0), 1);
        graph.link(k(1, 0), k(2, 0), 1);
        graph.link(k(0, 5), k(1, 5), 1);

        assert_eq!(
            shortest_path(&graph, k(0, 0), k(1, 5)).err(),
            Some(Error::Unreachable {
                start: k(0, 0),
                finish: k(1, 5),
            })
        );
    }

    #[test]
    fn ties_resolve_by_edge_list_order() {
        // Two equal-cost routes around a square; reconstruction keeps the
        // first edge listed on the finish vertex.
        let mut graph = Graph::new();
        graph.link(k(0, 0), k(1, 0), 1);
        graph.link(k(0, 0), k(0, 1), 1);
        graph.link(k(1, 0), k(1, 1), 1);
        graph.link(k(0, 1), k(1, 1), 1);

        let path = shortest_path(&graph, k(0, 0), k(1, 1)).expect("path exists");
        assert_eq!(path.vertices, vec![k(0, 0), k(1, 0), k(1, 1)]);
        assert_eq!(path.total_weight, 2);
    }
}
