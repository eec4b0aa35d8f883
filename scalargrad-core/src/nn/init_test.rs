use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_uniform_stays_in_range() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(7);
    let node = graph.leaf(0.0);
    for _ in 0..1000 {
        uniform_(&mut graph, node, -1.0, 1.0, &mut rng)?;
        let value = graph.data(node)?;
        assert!((-1.0..=1.0).contains(&value), "value {} out of range", value);
    }
    Ok(())
}

#[test]
fn test_uniform_is_reproducible_with_seed() -> Result<(), ScalarGradError> {
    let mut graph: Graph<f32> = Graph::new();
    let a = graph.leaf(0.0);
    let b = graph.leaf(0.0);
    uniform_(&mut graph, a, -1.0, 1.0, &mut StdRng::seed_from_u64(42))?;
    uniform_(&mut graph, b, -1.0, 1.0, &mut StdRng::seed_from_u64(42))?;
    assert_eq!(graph.data(a)?, graph.data(b)?);
    Ok(())
}

#[test]
fn test_uniform_rejects_inverted_range() {
    let mut graph = Graph::new();
    let node = graph.leaf(0.5);
    let result = uniform_(&mut graph, node, 1.0, -1.0, &mut StdRng::seed_from_u64(0));
    assert!(matches!(result, Err(ScalarGradError::InternalError(_))));
    assert_eq!(graph.data(node), Ok(0.5));
}

#[test]
fn test_uniform_rejects_unbounded_ranges() {
    let mut graph: Graph<f64> = Graph::new();
    let node = graph.leaf(0.5);
    let mut rng = StdRng::seed_from_u64(0);
    for (low, high) in [
        (f64::NEG_INFINITY, f64::INFINITY),
        (-f64::MAX, f64::MAX),
        (0.0, f64::INFINITY),
        (f64::NAN, 1.0),
    ] {
        let result = uniform_(&mut graph, node, low, high, &mut rng);
        assert!(
            matches!(result, Err(ScalarGradError::InternalError(_))),
            "range [{}, {}] was accepted",
            low,
            high
        );
    }
    assert_eq!(graph.data(node), Ok(0.5));
}

#[test]
fn test_zeros_requires_leaf() -> Result<(), ScalarGradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(3.0);
    let b = graph.add(a, a)?;
    zeros_(&mut graph, a)?;
    assert_eq!(graph.data(a)?, 0.0);
    assert_eq!(zeros_(&mut graph, b), Err(ScalarGradError::NotALeaf { id: b }));
    Ok(())
}
