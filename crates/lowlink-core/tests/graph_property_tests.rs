//! Property-based checks of traversal results against brute-force references.
//!
//! Random small graphs are analyzed with the engine and compared with a
//! union-find component count, including the "remove one node" definition of
//! an articulation point.

use proptest::{
    collection::vec,
    prelude::{any, prop_assert, prop_assert_eq, Just, Strategy},
    proptest,
    test_runner::{Config as ProptestConfig, FileFailurePersistence},
};
use lowlink_core::{
    breadth_first, depth_first, Graph, GraphAnalyzer, GraphMode, GraphNode, TraversalConfig,
};

const GRAPH_PROP_CASES: u32 = 256;
const MAX_NODES: usize = 24;
const MAX_EDGES: usize = 48;

type EdgeList = Vec<(usize, usize)>;

fn graph_strategy() -> impl Strategy<Value = (usize, EdgeList)> {
    (1_usize..=MAX_NODES).prop_flat_map(|n| (Just(n), vec((0..n, 0..n), 0..=MAX_EDGES)))
}

fn graph_proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: GRAPH_PROP_CASES,
        failure_persistence: Some(Box::new(FileFailurePersistence::WithSource(
            "graph-property-regressions",
        ))),
        ..ProptestConfig::default()
    }
}

fn key(i: usize) -> GraphNode {
    GraphNode::new(format!("s{i}"))
}

fn build(n: usize, edges: &[(usize, usize)], mode: GraphMode) -> Graph {
    let mut graph = Graph::with_mode("G", mode);
    for i in 0..n {
        graph.add_node(key(i));
    }
    for &(u, v) in edges {
        graph.add_edge(key(u), key(v));
    }
    graph
}

fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}

/// Undirected component count over the nodes not equal to `removed`.
fn reference_components(n: usize, edges: &[(usize, usize)], removed: Option<usize>) -> usize {
    let mut parent: Vec<usize> = (0..n).collect();
    for &(u, v) in edges {
        if removed == Some(u) || removed == Some(v) {
            continue;
        }
        let (ru, rv) = (find(&mut parent, u), find(&mut parent, v));
        parent[ru] = rv;
    }
    (0..n)
        .filter(|&i| removed != Some(i))
        .filter(|&i| find(&mut parent, i) == i)
        .count()
}

proptest! {
    #![proptest_config(graph_proptest_config())]

    #[test]
    fn test_insertion_is_idempotent((n, edges) in graph_strategy(), directed in any::<bool>()) {
        let mode = GraphMode::from_directed(directed);
        let once = build(n, &edges, mode);
        let doubled: EdgeList = edges.iter().chain(edges.iter()).copied().collect();
        let twice = build(n, &doubled, mode);

        prop_assert_eq!(once.node_count(), n);
        prop_assert_eq!(once.node_count(), twice.node_count());
        prop_assert_eq!(once.edge_count(), twice.edge_count());
    }

    #[test]
    fn test_undirected_adjacency_is_symmetric((n, edges) in graph_strategy()) {
        let graph = build(n, &edges, GraphMode::Undirected);
        for u in graph.nodes() {
            for v in graph.neighbors(u).into_iter().flatten() {
                prop_assert!(graph.contains_edge(v, u), "missing mirror {} -> {}", v, u);
            }
        }
    }

    #[test]
    fn test_components_partition_nodes(
        (n, edges) in graph_strategy(),
        directed in any::<bool>(),
        start in 0_usize..MAX_NODES,
    ) {
        let graph = build(n, &edges, GraphMode::from_directed(directed));
        let start = key(start % n);
        let forest = depth_first(&graph, &start, &TraversalConfig::default()).unwrap();

        let total: usize = forest.components().iter().map(Graph::node_count).sum();
        prop_assert_eq!(total, n);
        for node in graph.nodes() {
            let index = forest.component_of(node).unwrap();
            prop_assert!(forest.components()[index].contains_node(node));
        }
        if !directed {
            prop_assert_eq!(forest.component_count(), reference_components(n, &edges, None));
        }
    }

    #[test]
    fn test_forest_shape(
        (n, edges) in graph_strategy(),
        directed in any::<bool>(),
    ) {
        let graph = build(n, &edges, GraphMode::from_directed(directed));
        let forest = depth_first(&graph, &key(0), &TraversalConfig::default()).unwrap();

        let nodes: usize = forest.trees().iter().map(Graph::node_count).sum();
        let tree_edges: usize = forest.trees().iter().map(Graph::edge_count).sum();
        prop_assert_eq!(nodes, n);
        prop_assert_eq!(tree_edges, n - forest.trees().len());
        prop_assert!(tree_edges <= graph.edge_count());
        prop_assert_eq!(forest.trees().len(), forest.component_count());

        for node in graph.nodes() {
            let low = forest.low(node).unwrap();
            prop_assert!(low <= forest.discovery(node).unwrap());
        }
    }

    #[test]
    fn test_articulation_matches_removal((n, edges) in graph_strategy(), start in 0_usize..MAX_NODES) {
        let graph = build(n, &edges, GraphMode::Undirected);
        let forest = depth_first(&graph, &key(start % n), &TraversalConfig::default()).unwrap();
        let baseline = reference_components(n, &edges, None);

        for v in 0..n {
            let expected = reference_components(n, &edges, Some(v)) > baseline;
            prop_assert_eq!(
                forest.articulation_nodes().contains(&key(v)),
                expected,
                "node s{}",
                v
            );
        }
    }

    #[test]
    fn test_bfs_distances_are_consistent(
        (n, edges) in graph_strategy(),
        directed in any::<bool>(),
        start in 0_usize..MAX_NODES,
    ) {
        let graph = build(n, &edges, GraphMode::from_directed(directed));
        let start = key(start % n);
        let outcome = breadth_first(&graph, &start).unwrap();

        prop_assert_eq!(outcome.distance(&start), Some(0));
        let leveled: usize = outcome.levels().iter().map(|level| level.len()).sum();
        prop_assert_eq!(leveled, outcome.reached_count());

        for u in graph.nodes() {
            let Some(du) = outcome.distance(u) else { continue };
            if let Some(p) = outcome.parent(u) {
                prop_assert_eq!(outcome.distance(p), Some(du - 1));
            }
            for v in graph.neighbors(u).into_iter().flatten() {
                let dv = outcome.distance(v);
                prop_assert!(dv.is_some_and(|dv| dv <= du + 1), "edge {} -> {} breaks BFS bound", u, v);
            }
        }
    }

    #[test]
    fn test_path_follows_graph_edges(
        (n, edges) in graph_strategy(),
        directed in any::<bool>(),
        start in 0_usize..MAX_NODES,
        end in 0_usize..MAX_NODES,
    ) {
        let graph = build(n, &edges, GraphMode::from_directed(directed));
        let (start, end) = (key(start % n), key(end % n));
        let outcome = breadth_first(&graph, &start).unwrap();

        match outcome.path_to(&end) {
            Some(path) => {
                prop_assert_eq!(path.first(), Some(&start));
                prop_assert_eq!(path.last(), Some(&end));
                prop_assert_eq!(Some(path.len() - 1), outcome.distance(&end));
                for step in path.windows(2) {
                    prop_assert!(graph.contains_edge(&step[0], &step[1]));
                }
            }
            None => {
                prop_assert!(!outcome.reaches(&end));
            }
        }
    }

    #[test]
    fn test_distances_satisfy_triangle_inequality(
        (n, edges) in graph_strategy(),
        a in 0_usize..MAX_NODES,
        b in 0_usize..MAX_NODES,
    ) {
        let graph = build(n, &edges, GraphMode::Undirected);
        let (a, b) = (key(a % n), key(b % n));
        let from_a = breadth_first(&graph, &a).unwrap();
        let from_b = breadth_first(&graph, &b).unwrap();

        let Some(ab) = from_a.distance(&b) else { return Ok(()) };
        for c in graph.nodes() {
            if let (Some(ac), Some(bc)) = (from_a.distance(c), from_b.distance(c)) {
                prop_assert!(ac <= ab + bc, "d({}, {}) > d({}, {}) + d({}, {})", a, c, a, b, b, c);
            }
        }
    }

    #[test]
    fn test_session_path_round_trip(
        (n, edges) in graph_strategy(),
        directed in any::<bool>(),
        start in 0_usize..MAX_NODES,
        end in 0_usize..MAX_NODES,
    ) {
        let graph = build(n, &edges, GraphMode::from_directed(directed));
        let (start, end) = (key(start % n), key(end % n));
        let mut analyzer = GraphAnalyzer::new(&graph);

        if let Some(path) = analyzer.shortest_path(&start, &end) {
            let expected = breadth_first(&graph, &start).unwrap().distance(&end);
            prop_assert_eq!(Some(path.len() - 1), expected);
            prop_assert_eq!(analyzer.distance(&end), expected);
            prop_assert_eq!(path.first(), Some(&start));
            prop_assert_eq!(path.last(), Some(&end));
        } else {
            prop_assert!(!breadth_first(&graph, &start).unwrap().reaches(&end));
        }
    }
}
