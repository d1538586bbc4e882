use crate::error::GradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::Scalar;
use approx::relative_eq;
use num_traits::NumCast;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64, // Use f64 for precision
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(GradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Value {0} cannot be represented in the graph's scalar type")]
    ConversionError(f64),
}

impl From<GradError> for GradCheckError {
    fn from(err: GradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Step and tolerance of the finite-difference check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Perturbation applied on each side of an input.
    pub epsilon: f64,
    /// Accepted absolute or relative difference between both gradients.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` builds a scalar output from the leaf handles it receives, one per entry of
/// `inputs`. The analytical gradients come from a single backward pass over a fresh graph;
/// each numerical gradient is \( \frac{f(x_i + \epsilon) - f(x_i - \epsilon)}{(x_i + \epsilon) - (x_i - \epsilon)} \),
/// the denominator being measured on the perturbed inputs as stored in `T`. Every
/// evaluation runs on its own fresh graph.
pub fn check_grad<T, F>(
    func: F,
    inputs: &[T],
    config: &GradCheckConfig,
) -> Result<(), GradCheckError>
where
    T: Scalar,
    F: Fn(&Graph<T>, &[NodeId]) -> Result<NodeId, GradError>,
{
    let epsilon = to_scalar::<T>(config.epsilon)?;

    // --- Analytical pass ---
    let graph = Graph::new();
    let leaves = graph.leaves(inputs.iter().copied());
    let output = func(&graph, &leaves)?;
    graph.backward(output)?;
    let analytical: Vec<f64> = leaves
        .iter()
        .map(|&id| graph.grad(id).map(to_f64))
        .collect::<Result<_, _>>()?;

    // --- Numerical pass, one input at a time ---
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let x_plus = inputs[i] + epsilon;
        let x_minus = inputs[i] - epsilon;
        let loss_plus = evaluate(&func, inputs, i, x_plus)?;
        let loss_minus = evaluate(&func, inputs, i, x_minus)?;
        // The step actually taken in `T`, which rounding may make differ from 2 * epsilon.
        let step = to_f64(x_plus) - to_f64(x_minus);
        let numerical_grad = (loss_plus - loss_minus) / step;

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.tolerance,
            max_relative = config.tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

/// Forward value of `func` with input `index` replaced by `value`.
fn evaluate<T, F>(func: &F, inputs: &[T], index: usize, value: T) -> Result<f64, GradCheckError>
where
    T: Scalar,
    F: Fn(&Graph<T>, &[NodeId]) -> Result<NodeId, GradError>,
{
    let graph = Graph::new();
    let leaves = graph.leaves(
        inputs
            .iter()
            .enumerate()
            .map(|(j, &x)| if j == index { value } else { x }),
    );
    let output = func(&graph, &leaves)?;
    Ok(to_f64(graph.data(output)?))
}

fn to_scalar<T: Scalar>(value: f64) -> Result<T, GradCheckError> {
    <T as NumCast>::from(value).ok_or(GradCheckError::ConversionError(value))
}

fn to_f64<T: Scalar>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_passes_for_polynomial() {
        // f(a, b) = a * b + b^2
        let func = |g: &Graph, x: &[NodeId]| {
            let ab = g.mul(x[0], x[1])?;
            let b2 = g.pow(x[1], 2)?;
            g.add(ab, b2)
        };
        let result = check_grad(func, &[2.0, 3.0], &GradCheckConfig::default());
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_check_grad_detects_wrong_gradient() {
        // The output is rebuilt from a constant leaf holding the input value, so the
        // analytical gradient is 0 while the function still varies with the input.
        let func = |g: &Graph, x: &[NodeId]| {
            let detached = g.leaf(g.data(x[0])?);
            g.mul(detached, 3.0)
        };
        let result = check_grad(func, &[1.0], &GradCheckConfig::default());
        match result {
            Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                ..
            }) => {
                assert_eq!(input_index, 0);
                assert_eq!(analytical_grad, 0.0);
                assert!((numerical_grad - 3.0).abs() < 1e-4);
            }
            other => panic!("expected GradientMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_reports_non_finite_numerical_grad() {
        // 1 / x at x = 0
        let func = |g: &Graph, x: &[NodeId]| g.pow(x[0], -1);
        let config = GradCheckConfig {
            epsilon: 0.0,
            tolerance: 1e-4,
        };
        let result = check_grad(func, &[0.0], &config);
        assert!(matches!(
            result,
            Err(GradCheckError::NumericalGradNaNOrInfinite { input_index: 0, .. })
        ));
    }

    #[test]
    fn test_check_grad_propagates_forward_errors() {
        let func = |g: &Graph, x: &[NodeId]| g.pow(x[0], x[1]);
        let result = check_grad(func, &[2.0, 3.0], &GradCheckConfig::default());
        assert!(matches!(
            result,
            Err(GradCheckError::ForwardPassError(GradError::InvalidArgument { .. }))
        ));
    }

    #[test]
    fn test_check_grad_f32_with_default_config() {
        // At x = 3 an f32 step of 1e-6 rounds to a multiple of 2^-22, far from 2e-6.
        let func = |g: &Graph<f32>, x: &[NodeId]| g.mul(x[0], 5.0f32);
        assert_eq!(
            check_grad(func, &[3.0f32], &GradCheckConfig::default()),
            Ok(())
        );
    }

    #[test]
    fn test_check_grad_f32() {
        let func = |g: &Graph<f32>, x: &[NodeId]| {
            let t = g.tanh(x[0])?;
            g.mul(t, x[1])
        };
        let config = GradCheckConfig {
            epsilon: 1e-2,
            tolerance: 1e-2,
        };
        assert_eq!(check_grad(func, &[0.3f32, -1.2], &config), Ok(()));
    }
}
