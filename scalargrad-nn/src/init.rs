use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use scalargrad_core::{GradError, Graph, NodeId, Scalar};

/// Pushes `n` leaves drawn uniformly from `[low, high)` using the supplied generator.
///
/// # Errors
/// Returns `GradError::InvalidArgument` if the range is empty or not finite.
pub fn uniform<T, R>(
    graph: &Graph<T>,
    n: usize,
    low: T,
    high: T,
    rng: &mut R,
) -> Result<Vec<NodeId>, GradError>
where
    T: Scalar + SampleUniform,
    R: Rng + ?Sized,
{
    if low >= high || !low.is_finite() || !high.is_finite() {
        return Err(GradError::InvalidArgument {
            operation: "init::uniform".to_string(),
            reason: format!("invalid range [{}, {})", low, high),
        });
    }
    let dist = Uniform::new(low, high);
    Ok((0..n).map(|_| graph.leaf(dist.sample(rng))).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_range_and_count() -> Result<(), GradError> {
        let graph: Graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(7);
        let ids = uniform(&graph, 100, -1.0, 1.0, &mut rng)?;
        assert_eq!(ids.len(), 100);
        for id in ids {
            let v = graph.data(id)?;
            assert!((-1.0..1.0).contains(&v));
            assert_eq!(graph.grad(id)?, 0.0);
        }
        Ok(())
    }

    #[test]
    fn test_uniform_is_reproducible() -> Result<(), GradError> {
        let g1: Graph = Graph::new();
        let g2: Graph = Graph::new();
        let a = uniform(&g1, 5, -1.0, 1.0, &mut StdRng::seed_from_u64(3))?;
        let b = uniform(&g2, 5, -1.0, 1.0, &mut StdRng::seed_from_u64(3))?;
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(g1.data(*x)?, g2.data(*y)?);
        }
        Ok(())
    }

    #[test]
    fn test_uniform_rejects_empty_range() {
        let graph: Graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(0);
        let result = uniform(&graph, 3, 1.0, 1.0, &mut rng);
        assert!(matches!(result, Err(GradError::InvalidArgument { .. })));
        assert!(graph.is_empty());
    }
}
