use std::f64::consts::PI;

use nuvemite_core::{
    compute_layout, compute_layout_tagged, LayoutError, LayoutVariant, PathSpec, Point,
};

fn labels(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("feature-{i}")).collect()
}

#[test]
fn node_count_matches_features_for_every_variant() {
    for variant in LayoutVariant::ALL {
        for count in [1, 2, 3, 8, 13] {
            let layout = compute_layout(&labels(count), variant, Point::new(400.0, 250.0), 250.0, 180.0)
                .unwrap();
            assert_eq!(layout.nodes.len(), count);
            for (i, node) in layout.nodes.iter().enumerate() {
                assert_eq!(node.label, format!("feature-{i}"));
                let expected = (i as f64 / count as f64) * 2.0 * PI - PI / 2.0;
                assert!((node.angle - expected).abs() < 1e-12);
            }
        }
    }
}

#[test]
fn molecule_scenario() {
    let layout = compute_layout(
        &["A", "B", "C", "D"],
        LayoutVariant::Molecule,
        Point::new(400.0, 250.0),
        220.0,
        180.0,
    )
    .unwrap();

    let positions = layout
        .nodes
        .iter()
        .map(|node| (node.x.round(), node.y.round()))
        .collect::<Vec<_>>();
    assert_eq!(
        positions,
        vec![(400.0, 70.0), (620.0, 250.0), (400.0, 430.0), (180.0, 250.0)]
    );

    match layout.nodes[1].connector {
        Some(PathSpec::Elbow { from, knee, to }) => {
            assert_eq!(from, Point::new(400.0, 250.0));
            assert_eq!(knee.x, 510.0);
            assert_eq!(to.x, 620.0);
            assert_eq!(knee.y, to.y);
        }
        other => panic!("expected elbow, got {other:?}"),
    }
}

#[test]
fn every_connector_runs_from_center_to_node() {
    let center = Point::new(10.0, -5.0);
    for variant in [LayoutVariant::Molecule, LayoutVariant::Blueprint, LayoutVariant::Radar] {
        let layout = compute_layout(&labels(7), variant, center, 30.0, 12.0).unwrap();
        assert_eq!(layout.paths().len(), 7);
        for node in &layout.nodes {
            let path = node.connector.expect("connector present");
            assert_eq!(path.start(), center);
            assert_eq!(path.end(), Point::new(node.x, node.y));
        }
    }
}

#[test]
fn empty_input_is_not_an_error() {
    let none: Vec<String> = Vec::new();
    for variant in LayoutVariant::ALL {
        assert!(compute_layout(&none, variant, Point::new(0.0, 0.0), 1.0, 1.0)
            .unwrap()
            .nodes
            .is_empty());
    }
}

#[test]
fn validation_errors() {
    assert!(matches!(
        compute_layout(&labels(3), LayoutVariant::Radar, Point::new(0.0, 0.0), -1.0, 10.0),
        Err(LayoutError::InvalidGeometry { .. })
    ));
    assert!(matches!(
        compute_layout_tagged(&labels(3), "HEXAGON", Point::new(0.0, 0.0), 10.0, 10.0),
        Err(LayoutError::InvalidVariant(tag)) if tag == "HEXAGON"
    ));
}

#[test]
fn identical_calls_give_identical_positions() {
    let features = labels(9);
    let a = compute_layout_tagged(&features, "blueprint", Point::new(400.0, 250.0), 280.0, 200.0)
        .unwrap();
    let b = compute_layout_tagged(&features, "BLUEPRINT", Point::new(400.0, 250.0), 280.0, 200.0)
        .unwrap();
    assert_eq!(a, b);
}
