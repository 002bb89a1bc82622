use super::*;
use crate::graph::GraphData;

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

fn edge(a: &str, b: &str) -> (NodeId, NodeId) {
    (id(a), id(b))
}

/// Nodes {A,B,C,D}, edges {(A,B),(B,C),(C,D),(D,A)}.
fn square() -> Graph {
    Graph::from_data(&GraphData::new(
        vec![id("A"), id("B"), id("C"), id("D")],
        vec![
            edge("A", "B"),
            edge("B", "C"),
            edge("C", "D"),
            edge("D", "A"),
        ],
    ))
}

fn all_edges(g: &Graph) -> Vec<(NodeId, NodeId)> {
    g.edges().map(|(a, b)| (a.clone(), b.clone())).collect()
}

fn assert_complete_split(g: &Graph, p: &Partition) {
    assert_eq!(
        p.included_nodes.len() + p.excluded_nodes.len(),
        g.node_count()
    );
    assert_eq!(
        p.included_edges.len() + p.excluded_edges.len(),
        g.edge_count()
    );
    for e in &p.included_edges {
        assert!(!p.excluded_edges.contains(e));
    }
    for n in &p.included_nodes {
        assert!(!p.excluded_nodes.contains(n));
    }
    for e in all_edges(g) {
        assert!(p.included_edges.contains(&e) || p.excluded_edges.contains(&e));
    }
}

// ── SolutionType ──────────────────────────────────────────────────────────────

#[test]
fn test_solution_type_parse() {
    assert_eq!(SolutionType::parse("path").unwrap(), SolutionType::Path);
    assert_eq!(SolutionType::parse("set").unwrap(), SolutionType::Set);
    assert_eq!("set".parse::<SolutionType>().unwrap().as_str(), "set");
}

#[test]
fn test_solution_type_rejects_other_values() {
    for bad in ["Path", "SET", "", "tree", " path"] {
        let err = SolutionType::parse(bad).unwrap_err();
        assert!(matches!(err, VisualizerError::InvalidConfiguration(_)));
    }
    let err = SolutionType::parse("tree").unwrap_err();
    assert_eq!(
        err.to_string(),
        "solution_type must be 'path' or 'set', and not tree"
    );
}

// ── Implied edges ─────────────────────────────────────────────────────────────

#[test]
fn test_implied_edges_empty_and_single() {
    assert!(Solution::default().implied_edges().is_empty());
    assert!(Solution::from_iter(["A"]).implied_edges().is_empty());
}

#[test]
fn test_implied_edges_two_nodes_no_closing_edge() {
    let s = Solution::from_iter(["A", "B"]);
    assert_eq!(s.implied_edges(), vec![edge("A", "B")]);
}

#[test]
fn test_implied_edges_closes_cycle() {
    let s = Solution::from_iter(["A", "B", "C", "D"]);
    let edges = s.implied_edges();
    assert_eq!(edges.len(), s.len());
    assert_eq!(
        edges,
        vec![
            edge("A", "B"),
            edge("B", "C"),
            edge("C", "D"),
            edge("D", "A")
        ]
    );
}

#[test]
fn test_implied_edges_length_matches_for_longer_paths() {
    for n in 3..10 {
        let s: Solution = (0..n).map(NodeId::Int).collect();
        assert_eq!(s.implied_edges().len(), n as usize);
    }
}

#[test]
fn test_solution_from_json() {
    let s = Solution::from_json(r#"[3, "x", 1]"#).unwrap();
    assert_eq!(s.nodes(), &[NodeId::Int(3), id("x"), NodeId::Int(1)]);
    assert!(Solution::from_json(r#"{"a": 1}"#).is_err());
}

// ── Partition: path mode ──────────────────────────────────────────────────────

#[test]
fn test_path_full_cycle_includes_all_edges() {
    let g = square();
    let p = Partition::compute(&g, &Solution::from_iter(["A", "B", "C", "D"]), SolutionType::Path);
    assert_eq!(p.included_edges, all_edges(&g));
    assert!(p.excluded_edges.is_empty());
    assert_eq!(p.included_nodes.len(), 4);
    assert_complete_split(&g, &p);
}

#[test]
fn test_path_two_nodes() {
    let g = square();
    let p = Partition::compute(&g, &Solution::from_iter(["A", "B"]), SolutionType::Path);
    assert_eq!(p.included_edges, vec![edge("A", "B")]);
    assert_eq!(p.excluded_edges.len(), 3);
    assert_eq!(p.included_nodes, vec![id("A"), id("B")]);
    assert_eq!(p.excluded_nodes, vec![id("C"), id("D")]);
    assert_complete_split(&g, &p);
}

#[test]
fn test_path_matches_reverse_direction() {
    let g = square();
    // Walks the square backwards: every implied pair is reversed w.r.t. the graph.
    let p = Partition::compute(&g, &Solution::from_iter(["A", "D", "C", "B"]), SolutionType::Path);
    assert_eq!(p.included_edges.len(), 4);
    assert_complete_split(&g, &p);
}

#[test]
fn test_path_implied_pair_without_graph_edge() {
    let g = square();
    // A–C is implied but is not an edge of the square.
    let p = Partition::compute(&g, &Solution::from_iter(["A", "C"]), SolutionType::Path);
    assert!(p.included_edges.is_empty());
    assert_eq!(p.included_nodes, vec![id("A"), id("C")]);
    assert_complete_split(&g, &p);
}

#[test]
fn test_path_three_nodes_closing_edge_used() {
    let mut g = square();
    g.add_edge(&id("A"), &id("C"));
    let p = Partition::compute(&g, &Solution::from_iter(["A", "B", "C"]), SolutionType::Path);
    assert_eq!(
        p.included_edges,
        vec![edge("A", "B"), edge("B", "C"), edge("A", "C")]
    );
    assert_complete_split(&g, &p);
}

// ── Partition: set mode ───────────────────────────────────────────────────────

#[test]
fn test_set_non_adjacent_nodes_include_no_edges() {
    let g = square();
    let p = Partition::compute(&g, &Solution::from_iter(["A", "C"]), SolutionType::Set);
    assert!(p.included_edges.is_empty());
    assert_eq!(p.excluded_edges, all_edges(&g));
    assert_eq!(p.included_nodes, vec![id("A"), id("C")]);
    assert_complete_split(&g, &p);
}

#[test]
fn test_set_adjacent_nodes() {
    let g = square();
    let p = Partition::compute(&g, &Solution::from_iter(["C", "B", "D"]), SolutionType::Set);
    assert_eq!(p.included_edges, vec![edge("B", "C"), edge("C", "D")]);
    assert_complete_split(&g, &p);
}

#[test]
fn test_set_every_subset_is_complete_split() {
    let g = square();
    let names = ["A", "B", "C", "D"];
    for mask in 0u8..16 {
        let s: Solution = names
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, n)| *n)
            .collect();
        let p = Partition::compute(&g, &s, SolutionType::Set);
        assert_complete_split(&g, &p);
    }
}

// ── Unknown nodes ─────────────────────────────────────────────────────────────

#[test]
fn test_unknown_nodes_reported_not_drawn() {
    let g = square();
    let s = Solution::from_iter(["A", "Z", "B", "Z"]);
    let p = Partition::compute(&g, &s, SolutionType::Path);
    assert_eq!(p.unknown, vec![id("Z")]);
    assert!(!p.included_nodes.contains(&id("Z")));
    assert!(!p.excluded_nodes.contains(&id("Z")));
    assert_complete_split(&g, &p);
}

#[test]
fn test_empty_solution() {
    let g = square();
    let p = Partition::compute(&g, &Solution::default(), SolutionType::Path);
    assert!(p.included_nodes.is_empty());
    assert!(p.included_edges.is_empty());
    assert!(p.unknown.is_empty());
    assert_complete_split(&g, &p);
}
