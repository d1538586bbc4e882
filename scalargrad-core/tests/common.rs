use scalargrad_core::{GradError, Graph, NodeId};

/// Leaves `a = 2`, `b = 3` and the output `c = a * b + b^2`.
#[allow(dead_code)]
pub fn polynomial_graph() -> Result<(Graph, NodeId, NodeId, NodeId), GradError> {
    let graph = Graph::new();
    let a = graph.leaf_labeled(2.0, "a");
    let b = graph.leaf_labeled(3.0, "b");
    let ab = graph.mul(a, b)?;
    let b2 = graph.pow(b, 2)?;
    let c = graph.add(ab, b2)?;
    Ok((graph, a, b, c))
}

/// Central finite difference of a one-input function, evaluated on fresh graphs.
#[allow(dead_code)]
pub fn numerical_derivative<F>(f: F, x: f64, eps: f64) -> Result<f64, GradError>
where
    F: Fn(&Graph, NodeId) -> Result<NodeId, GradError>,
{
    let eval = |x: f64| -> Result<f64, GradError> {
        let graph = Graph::new();
        let leaf = graph.leaf(x);
        let out = f(&graph, leaf)?;
        graph.data(out)
    };
    Ok((eval(x + eps)? - eval(x - eps)?) / (2.0 * eps))
}
