//! End-to-end tests across axis definitions and combinations.
//!
//! Each test builds an axis list, derives combinations from it, and checks
//! that the identifier, index and digest forms agree with each other.

use std::collections::{BTreeSet, HashMap};

use lattice_combination::{Combination, CombinationError, DEFAULT_NAME};
use lattice_foundation::{AxisList, DigestAlgorithm};
use lattice_tests::{init_test_logging, AxisFixture};

fn build_matrix() -> AxisFixture {
    AxisFixture::new(&[
        ("os", &["linux", "mac", "win"]),
        ("jdk", &["8", "11", "17"]),
        ("db", &["pg"]),
    ])
}

/// Canonical identifiers parse back to the same combination.
#[test]
fn test_canonical_round_trip() {
    init_test_logging();
    let matrix = build_matrix();

    for c in matrix.all() {
        let id = c.to_string();
        let back: Combination = id.parse().expect("canonical id parses");
        assert_eq!(back, c);
        assert_eq!(back.to_string(), id);
    }
}

/// The empty combination and the `default` sentinel map to each other.
#[test]
fn test_empty_sentinel() {
    init_test_logging();
    assert_eq!(Combination::empty().to_string(), DEFAULT_NAME);
    assert!(Combination::parse(DEFAULT_NAME).unwrap().is_empty());
}

/// Sizes [2, 3] give six combinations on indices 0..6.
#[test]
fn test_index_density() {
    init_test_logging();
    let matrix = AxisFixture::new(&[("x", &["1", "2"]), ("y", &["a", "b", "c"])]);

    let indices: BTreeSet<usize> = matrix
        .all()
        .iter()
        .map(|c| c.to_index(matrix.axes()).unwrap())
        .collect();
    assert_eq!(indices, (0..6).collect::<BTreeSet<_>>());

    let zero = matrix.combination(&["1", "a"]);
    assert_eq!(zero.to_index(matrix.axes()).unwrap(), 0);
    assert_eq!(Combination::from_index(matrix.axes(), 0).unwrap(), zero);
}

/// Fewer entries always sort first, then (key, value) pairs decide.
#[test]
fn test_ordering() {
    init_test_logging();
    let matrix = build_matrix();
    let mut all = matrix.all();
    all.reverse();
    all.push(Combination::from_pairs([("zzz", "zzz")]));
    all.sort();

    assert_eq!(all[0].to_string(), "zzz=zzz");
    assert!(all[1..].windows(2).all(|w| w[0] < w[1]));
    assert_eq!(all[1].to_string(), "db=pg,jdk=11,os=linux");
}

/// A single-entry combination rendered for a single-axis subset is just the value.
#[test]
fn test_single_axis_subset() {
    init_test_logging();
    let matrix = AxisFixture::new(&[("x", &["1", "2"])]);
    let c = matrix.combination(&["1"]);
    assert_eq!(c.to_string_subset([matrix.axis("x")]).unwrap(), "1");
}

/// Shared values keep their axis name in the compact form.
#[test]
fn test_compact_collisions() {
    init_test_logging();
    let matrix = AxisFixture::new(&[("x", &["A", "B"]), ("y", &["B", "C"])]);
    let c = matrix.combination(&["B", "C"]);
    assert_eq!(c.to_compact_string(matrix.axes()), "x=B,C");
}

/// Digests are stable, eight characters wide, and distinguish neighbours.
#[test]
fn test_digest_determinism() {
    init_test_logging();
    let x1 = Combination::parse("x=1").unwrap();
    let x2 = Combination::parse("x=2").unwrap();

    assert_eq!(x1.digest(), Combination::parse("x=1").unwrap().digest());
    assert_eq!(x1.digest().len(), 8);
    assert_ne!(x1.digest(), x2.digest());

    for algo in [DigestAlgorithm::Sha256, DigestAlgorithm::Fnv1a] {
        assert_eq!(x1.digest_with(algo.function()).len(), 8);
    }
}

/// Combinations can key a JSON results map and come back intact.
#[test]
fn test_results_keyed_by_combination() {
    init_test_logging();
    let matrix = build_matrix();
    let results: HashMap<Combination, bool> = matrix
        .all()
        .into_iter()
        .map(|c| {
            let ok = c.get("os") != Some("win");
            (c, ok)
        })
        .collect();

    let json = serde_json::to_string(&results).unwrap();
    let back: HashMap<Combination, bool> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, results);
}

/// Axis lists loaded from JSON drive the same enumeration.
#[test]
fn test_axes_from_json() {
    init_test_logging();
    let axes: AxisList = serde_json::from_str(
        r#"[{"name": "x", "values": ["1", "2"]}, {"name": "y", "values": ["a", "b", "c"]}]"#,
    )
    .unwrap();

    let c = Combination::from_values(&axes, ["2", "c"]).unwrap();
    assert_eq!(c.to_index(&axes).unwrap(), 5);
}

/// Malformed identifiers are rejected with the offending input.
#[test]
fn test_parse_errors() {
    init_test_logging();
    tracing::info!("expecting a rejected identifier below");
    let err = Combination::parse("os=linux,jdk").unwrap_err();
    assert_eq!(err.to_string(), "cannot parse os=linux,jdk");
    assert!(matches!(err, CombinationError::Parse { .. }));
}
