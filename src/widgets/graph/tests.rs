//! Tests for the topology layout and its renderer.

use std::collections::HashSet;

use ratatui::{Terminal, backend::TestBackend};

use super::builders::{fnv1a, golden_angle};
use super::renderer::TopologyWidget;
use super::types::Topology;
use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, MAX_RADIUS};
use crate::domain::Transaction;
use crate::test_utils::{SellerMother, TransactionMother, buffer_to_string};
use crate::theme::Theme;

fn txn(id: &str, seller: &str, buyer: &str) -> Transaction {
    TransactionMother::basic(id, seller, buyer)
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_fnv1a_known_vectors() {
    assert_eq!(fnv1a(""), 0x811c_9dc5);
    assert_eq!(fnv1a("a"), 0xe40c_292c);
    assert_eq!(fnv1a("foobar"), 0xbf9c_f968);
}

#[test]
fn test_empty_input_yields_empty_graph() {
    let topology = Topology::build(&[], &[txn("t", "a", "b")]);
    assert!(topology.is_empty());
    assert!(topology.edges.is_empty());
    assert!(topology.hub().is_none());
}

#[test]
fn test_duplicate_sellers_collapse_to_one_active_node() {
    let sellers = vec![
        SellerMother::inactive("alpha"),
        SellerMother::active("alpha"),
        SellerMother::inactive("alpha"),
        SellerMother::inactive("beta"),
    ];
    let topology = Topology::build(&sellers, &[]);

    assert_eq!(topology.nodes.len(), 2);
    let ids: HashSet<&str> = topology.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, HashSet::from(["alpha", "beta"]));
    assert!(topology.node("alpha").unwrap().active);
    assert!(!topology.node("beta").unwrap().active);
}

#[test]
fn test_edges_aggregate_unordered_pairs_and_skip_self_loops() {
    let sellers = vec![
        SellerMother::active("alpha"),
        SellerMother::active("beta"),
        SellerMother::with_address("gamma", "0xABCDEF"),
    ];
    let txns = vec![
        txn("1", "alpha", "beta"),
        txn("2", "beta", "alpha"),
        txn("3", "alpha", "0xabcdef"),
        txn("4", "alpha", "alpha"),
        txn("5", "gamma", "0xAbCdEf"),
        txn("6", "alpha", "0xstranger"),
        txn("7", "unknown", "beta"),
    ];
    let topology = Topology::build(&sellers, &txns);

    let edges: Vec<(&str, &str, u32)> = topology
        .edges
        .iter()
        .map(|e| (e.a.as_str(), e.b.as_str(), e.weight))
        .collect();
    assert_eq!(edges, vec![("alpha", "beta", 2), ("alpha", "gamma", 1)]);
    assert!(topology.edges.iter().all(|e| e.a < e.b));

    let alpha = topology.node("alpha").unwrap();
    assert_eq!((alpha.in_count, alpha.out_count), (3, 1));
    assert_eq!(alpha.total_count, 4);
    assert_eq!(alpha.degree, 3);

    let beta = topology.node("beta").unwrap();
    assert_eq!((beta.in_count, beta.out_count), (1, 2));
    assert_eq!(beta.degree, 2);

    let gamma = topology.node("gamma").unwrap();
    assert_eq!((gamma.in_count, gamma.out_count), (0, 1));
    assert_eq!(gamma.degree, 1);

    assert_eq!(topology.hub().map(|n| n.id.as_str()), Some("alpha"));
    assert_eq!(topology.max_weight(), 2);
}

#[test]
fn test_isolated_sellers_still_get_positions() {
    let sellers = vec![SellerMother::active("lonely")];
    let topology = Topology::build(&sellers, &[]);
    let node = &topology.nodes[0];
    assert_eq!(node.degree, 0);
    assert!(node.x.is_finite() && node.y.is_finite());
    assert!(node.radius > 0.0);
}

#[test]
fn test_angles_strictly_increase_and_nodes_stay_on_canvas() {
    let sellers: Vec<_> = (0..120)
        .map(|i| {
            if i % 3 == 0 {
                SellerMother::inactive(&format!("seller-{i}"))
            } else {
                SellerMother::active(&format!("seller-{i}"))
            }
        })
        .collect();
    let topology = Topology::build(&sellers, &[]);
    let golden = golden_angle();

    for (i, pair) in topology.nodes.windows(2).enumerate() {
        assert!(
            pair[1].angle > pair[0].angle,
            "angle did not increase at index {i}"
        );
    }
    for (i, node) in topology.nodes.iter().enumerate() {
        let base = i as f64 * golden;
        assert!(node.angle >= base && node.angle < base + golden / 4.0);
        assert!(node.radius <= MAX_RADIUS);
        assert!((0.0..=CANVAS_WIDTH).contains(&node.x));
        assert!((0.0..=CANVAS_HEIGHT).contains(&node.y));
    }
}

#[test]
fn test_layout_is_deterministic_and_order_independent() {
    let forward = vec![
        SellerMother::active("a"),
        SellerMother::active("b"),
        SellerMother::inactive("c"),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();
    let txns = vec![txn("1", "a", "b"), txn("2", "c", "a")];

    assert_eq!(
        Topology::build(&forward, &txns),
        Topology::build(&reversed, &txns)
    );
}

#[test]
fn test_active_sellers_sit_closer_to_center() {
    let sellers: Vec<_> = (0..40)
        .map(|i| {
            let id = format!("s{i:02}");
            if i < 20 {
                SellerMother::active(&id)
            } else {
                SellerMother::inactive(&id)
            }
        })
        .collect();
    let topology = Topology::build(&sellers, &[]);
    let mean = |active: bool| {
        let radii: Vec<f64> = topology
            .nodes
            .iter()
            .filter(|n| n.active == active)
            .map(|n| n.radius)
            .collect();
        radii.iter().sum::<f64>() / radii.len() as f64
    };
    assert!(mean(true) < mean(false));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_empty_topology() {
    let topology = Topology::default();
    let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
    terminal
        .draw(|f| {
            f.render_widget(
                TopologyWidget::new(&topology, Theme::Dark.palette()),
                f.area(),
            );
        })
        .unwrap();
    assert!(buffer_to_string(terminal.backend().buffer()).contains("No sellers to plot yet"));
}

#[test]
fn test_render_legend_shows_counts_and_hub() {
    let sellers = vec![
        SellerMother::active("alpha"),
        SellerMother::active("beta"),
        SellerMother::inactive("gamma"),
    ];
    let topology = Topology::build(&sellers, &[txn("1", "alpha", "beta")]);
    let widget = TopologyWidget::new(&topology, Theme::Dark.palette());
    let legend: String = widget
        .legend()
        .spans
        .iter()
        .map(|s| s.content.as_ref())
        .collect();
    insta::assert_snapshot!(legend, @"● 2 active  ● 1 inactive  ─ 1 links  hub: alpha (1)");

    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal
        .draw(|f| f.render_widget(widget.without_hub_label(), f.area()))
        .unwrap();
    let rendered = buffer_to_string(terminal.backend().buffer());
    assert!(rendered.contains("2 active"));
    assert!(rendered.contains("hub: alpha (1)"));
}
