use super::*;
use crate::error::GeomError;
use nalgebra::vector;
use proptest::prelude::*;

fn corner(radius: f64, facets: usize, turn_down: bool) -> Polygon {
    let end = if turn_down { -10.0 } else { 10.0 };
    Polygon::new(
        vec![
            Vertex::fixed(vector![0.0, 0.0]),
            Vertex::filleted(vector![10.0, 0.0], radius, facets).unwrap(),
            Vertex::fixed(vector![10.0, end]),
        ],
        false,
    )
    .unwrap()
}

fn regular(n: usize, circumradius: f64, radius: f64, facets: usize) -> Polygon {
    let step = std::f64::consts::TAU / n as f64;
    let verts = (0..n)
        .map(|k| {
            let a = k as f64 * step;
            Vertex::filleted(
                vector![circumradius * a.cos(), circumradius * a.sin()],
                radius,
                facets,
            )
            .unwrap()
        })
        .collect();
    Polygon::new(verts, true).unwrap()
}

#[test]
fn right_angle_fillet_is_tangent_to_both_edges() {
    let out = smooth(&corner(5.0, 4, false), FilletPolicy::KeepCorner).unwrap();
    let pts = out.polygon.points();
    assert_eq!(pts.len(), 7);
    assert_eq!(out.report.filleted, 1);
    assert!(out.report.skipped.is_empty());
    assert!((pts[1] - vector![5.0, 0.0]).norm() < 1e-9);
    assert!((pts[5] - vector![10.0, 5.0]).norm() < 1e-9);
    for p in &pts[1..6] {
        assert!(((p - vector![5.0, 5.0]).norm() - 5.0).abs() < 1e-9);
    }
    assert!(out.polygon.vertices().iter().all(|v| v.is_fixed()));
}

#[test]
fn clockwise_corner_sweeps_the_other_way() {
    let pts = corner(5.0, 2, true)
        .smoothed(FilletPolicy::KeepCorner)
        .unwrap()
        .points();
    assert!((pts[1] - vector![5.0, 0.0]).norm() < 1e-9);
    assert!((pts[3] - vector![10.0, -5.0]).norm() < 1e-9);
    // midpoint of the arc bulges toward the corner
    let mid = vector![5.0, -5.0] + vector![1.0, 1.0].normalize() * 5.0;
    assert!((pts[2] - mid).norm() < 1e-9);
}

#[test]
fn oversized_fillet_leaves_corner_sharp() {
    let input = corner(15.0, 4, false);
    let out = smooth(&input, FilletPolicy::KeepCorner).unwrap();
    assert_eq!(out.polygon.points(), input.points());
    assert!(out.polygon.vertices()[1].is_fixed());
    assert_eq!(out.report.filleted, 0);
    assert_eq!(out.report.skipped.len(), 1);
    match out.report.skipped[0].reason {
        SkipReason::Infeasible {
            tangent_length,
            edge_length,
        } => {
            assert!((tangent_length - 15.0).abs() < 1e-9);
            assert!((edge_length - 10.0).abs() < 1e-12);
        }
        other => panic!("unexpected reason {other:?}"),
    }
}

#[test]
fn abort_policy_surfaces_infeasible_fillet() {
    let err = smooth(&corner(15.0, 4, false), FilletPolicy::Abort).unwrap_err();
    assert!(matches!(
        err,
        GeomError::InfeasibleFillet { index: 1, radius, .. } if radius == 15.0
    ));
}

#[test]
fn smoothing_fixed_polygon_is_identity() {
    let p = Polygon::from_points(
        &[vector![0.0, 0.0], vector![3.0, 1.0], vector![2.0, 4.0]],
        true,
    )
    .unwrap();
    let once = smooth(&p, FilletPolicy::KeepCorner).unwrap();
    assert_eq!(once.polygon, p);
    assert_eq!(once.report.passes, 1);
    let twice = smooth(&once.polygon, FilletPolicy::KeepCorner).unwrap();
    assert_eq!(twice.polygon, p);
}

#[test]
fn closed_square_replaces_every_corner() {
    let p = regular(4, 10.0, 2.0, 6);
    let out = smooth(&p, FilletPolicy::KeepCorner).unwrap();
    assert_eq!(out.polygon.len(), 4 * 7);
    assert_eq!(out.report.filleted, 4);
    assert_eq!(out.report.passes, 2);
    assert!(out.polygon.closed());
}

#[test]
fn open_polygon_end_points_untouched() {
    let verts = vec![
        Vertex::filleted(vector![0.0, 0.0], 3.0, 5).unwrap(),
        Vertex::filleted(vector![100.0, 100.0], 50.0, 5).unwrap(),
        Vertex::filleted(vector![200.0, 0.0], 30.0, 10).unwrap(),
        Vertex::filleted(vector![300.0, 100.0], 5.0, 7).unwrap(),
        Vertex::filleted(vector![0.0, 100.0], 3.0, 5).unwrap(),
    ];
    let p = Polygon::new(verts.clone(), false).unwrap();
    let out = smooth(&p, FilletPolicy::KeepCorner).unwrap();
    let v = out.polygon.vertices();
    assert_eq!(v[0], verts[0]);
    assert_eq!(v[v.len() - 1], verts[4]);
    assert_eq!(out.report.filleted, 3);
    assert_eq!(v.len(), 2 + 6 + 11 + 8);
}

#[test]
fn later_fillet_sees_earlier_tangent_point() {
    // each fillet fits its edge alone (6 <= 10) but not both together
    let p = Polygon::new(
        vec![
            Vertex::fixed(vector![0.0, 0.0]),
            Vertex::filleted(vector![10.0, 0.0], 6.0, 3).unwrap(),
            Vertex::filleted(vector![10.0, 10.0], 6.0, 3).unwrap(),
            Vertex::fixed(vector![20.0, 10.0]),
        ],
        false,
    )
    .unwrap();
    let out = smooth(&p, FilletPolicy::KeepCorner).unwrap();
    assert_eq!(out.report.filleted, 1);
    assert_eq!(out.report.skipped.len(), 1);
    match out.report.skipped[0].reason {
        SkipReason::Infeasible { edge_length, .. } => assert!((edge_length - 4.0).abs() < 1e-9),
        other => panic!("unexpected reason {other:?}"),
    }
}

#[test]
fn straight_and_degenerate_corners_are_skipped() {
    let straight = Polygon::new(
        vec![
            Vertex::fixed(vector![0.0, 0.0]),
            Vertex::filleted(vector![5.0, 0.0], 1.0, 4).unwrap(),
            Vertex::fixed(vector![10.0, 0.0]),
        ],
        false,
    )
    .unwrap();
    let out = smooth(&straight, FilletPolicy::Abort).unwrap();
    assert_eq!(out.report.skipped[0].reason, SkipReason::Straight);
    assert_eq!(out.polygon.len(), 3);

    let dup = Polygon::new(
        vec![
            Vertex::fixed(vector![0.0, 0.0]),
            Vertex::filleted(vector![0.0, 0.0], 1.0, 4).unwrap(),
            Vertex::fixed(vector![10.0, 0.0]),
        ],
        false,
    )
    .unwrap();
    let out = smooth(&dup, FilletPolicy::KeepCorner).unwrap();
    assert_eq!(out.report.skipped[0].reason, SkipReason::Degenerate);
}

#[test]
fn constructors_validate_invariants() {
    assert!(matches!(
        Vertex::filleted(vector![0.0, 0.0], 1.0, 0),
        Err(GeomError::InvalidVertex { .. })
    ));
    assert!(matches!(
        Vertex::filleted(vector![0.0, 0.0], -1.0, 3),
        Err(GeomError::InvalidVertex { .. })
    ));
    assert!(Vertex::filleted(vector![0.0, 0.0], 0.0, 0).unwrap().is_fixed());
    assert!(matches!(
        Polygon::new(vec![Vertex::fixed(vector![0.0, 0.0])], false),
        Err(GeomError::InvalidPolygon { count: 1 })
    ));
}

#[test]
fn polygon_rejects_vertices_built_from_fields() {
    let with_mid = |mid: Vertex| {
        Polygon::new(
            vec![
                Vertex::fixed(vector![0.0, 0.0]),
                mid,
                Vertex::fixed(vector![10.0, 10.0]),
            ],
            false,
        )
    };
    let bad = [
        Vertex {
            p: vector![10.0, 0.0],
            radius: 5.0,
            facets: 0,
        },
        Vertex {
            p: vector![10.0, 0.0],
            radius: -5.0,
            facets: 2,
        },
        Vertex {
            p: vector![10.0, 0.0],
            radius: f64::INFINITY,
            facets: 2,
        },
        Vertex {
            p: vector![f64::NAN, 0.0],
            radius: 0.0,
            facets: 0,
        },
    ];
    for v in bad {
        assert!(
            matches!(with_mid(v), Err(GeomError::InvalidVertex { .. })),
            "accepted {v:?}"
        );
    }
    let ok = Vertex {
        p: vector![10.0, 0.0],
        radius: 5.0,
        facets: 2,
    };
    let out = smooth(&with_mid(ok).unwrap(), FilletPolicy::Abort).unwrap();
    assert!(out
        .polygon
        .points()
        .iter()
        .all(|p| p.x.is_finite() && p.y.is_finite()));
}

fn square_with_radii(radii: [f64; 4]) -> Polygon {
    let corners = [
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
    ];
    let verts = corners
        .iter()
        .zip(radii)
        .map(|(&p, r)| Vertex::filleted(p, r, 4).unwrap())
        .collect();
    Polygon::new(verts, true).unwrap()
}

fn skipped_edge_length(out: &Smoothed, index: usize) -> f64 {
    let s = out
        .report
        .skipped
        .iter()
        .find(|s| s.index == index)
        .unwrap_or_else(|| panic!("vertex {index} not skipped"));
    match s.reason {
        SkipReason::Infeasible { edge_length, .. } => edge_length,
        other => panic!("unexpected reason {other:?}"),
    }
}

#[test]
fn closed_square_alternating_fillets_when_radius_overlaps() {
    // r = 6 on side 10: fillets at 0 and 2 leave 4 units for 1 and 3
    let out = smooth(&square_with_radii([6.0; 4]), FilletPolicy::KeepCorner).unwrap();
    assert_eq!(out.report.filleted, 2);
    assert_eq!(out.report.skipped.len(), 2);
    assert!((skipped_edge_length(&out, 1) - 4.0).abs() < 1e-9);
    assert!((skipped_edge_length(&out, 3) - 4.0).abs() < 1e-9);
    assert_eq!(out.polygon.len(), 2 * 5 + 2);

    let pts = out.polygon.points();
    assert!((pts[0] - vector![0.0, 6.0]).norm() < 1e-9);
    assert!((pts[4] - vector![6.0, 0.0]).norm() < 1e-9);
    assert!(pts.contains(&vector![10.0, 0.0]));
    assert!(pts.contains(&vector![0.0, 10.0]));
}

#[test]
fn closing_edge_is_bounded_by_first_emitted_vertex() {
    // vertex 3 only fails because vertex 0's tangent point sits 4 units away
    let out = smooth(
        &square_with_radii([6.0, 0.0, 0.0, 6.0]),
        FilletPolicy::KeepCorner,
    )
    .unwrap();
    assert_eq!(out.report.filleted, 1);
    assert_eq!(out.report.skipped.len(), 1);
    assert!((skipped_edge_length(&out, 3) - 4.0).abs() < 1e-9);

    let strict = smooth(&square_with_radii([6.0, 0.0, 0.0, 6.0]), FilletPolicy::Abort);
    assert!(matches!(
        strict,
        Err(GeomError::InfeasibleFillet { index: 3, .. })
    ));
}

proptest! {
    #[test]
    fn feasible_fillets_replace_each_vertex_once(
        n in 3usize..12,
        radius in 0.1f64..4.5,
        facets in 1usize..16,
    ) {
        let p = regular(n, 10.0, radius, facets);
        let out = smooth(&p, FilletPolicy::Abort).unwrap();
        prop_assert_eq!(out.report.filleted, n);
        prop_assert_eq!(out.polygon.len(), n * (facets + 1));
        prop_assert!(out.report.passes <= 2);
    }

    #[test]
    fn smoothing_is_idempotent(
        n in 3usize..10,
        radius in 0.0f64..6.0,
        facets in 1usize..8,
    ) {
        let once = regular(n, 10.0, radius, facets)
            .smoothed(FilletPolicy::KeepCorner)
            .unwrap();
        let twice = once.smoothed(FilletPolicy::KeepCorner).unwrap();
        prop_assert_eq!(once, twice);
    }
}
