//! # One backward pass through a small MLP
//!
//! Builds an MLP 3 → [4, 4, 1] from a seeded RNG, evaluates it on four samples,
//! sums the squared errors against the targets and backpropagates once.
//!
//! ## Running
//! `cargo run -p scalargrad-nn --example mlp_backward`
//!
//! Set `RUST_LOG=debug` to see the engine's log lines.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::{GradError, Graph, NodeId, Operand};
use scalargrad_nn::{Mlp, Module};

fn main() -> Result<(), GradError> {
    let _ = env_logger::builder().is_test(false).try_init();

    let xs: [[f64; 3]; 4] = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let graph: Graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(&graph, 3, &[4, 4, 1], &mut rng)?;
    println!(
        "MLP 3 -> [4, 4, 1] with {} parameters",
        Module::<f64>::num_parameters(&mlp)
    );

    let mut loss: Option<NodeId> = None;
    for (x, &y) in xs.iter().zip(ys.iter()) {
        let inputs: Vec<Operand<f64>> = x.iter().map(|&v| v.into()).collect();
        let pred = mlp.forward(&graph, &inputs)?[0];
        println!("  x={:?} target={:+.1} pred={:+.6}", x, y, graph.data(pred)?);

        let diff = graph.sub(pred, y)?;
        let sq = graph.pow(diff, 2)?;
        loss = Some(match loss {
            Some(acc) => graph.add(acc, sq)?,
            None => sq,
        });
    }
    let loss = match loss {
        Some(loss) => loss,
        None => return Ok(()),
    };
    graph.set_label(loss, "loss")?;

    graph.backward(loss)?;
    println!("loss = {:.6} ({} nodes in graph)", graph.data(loss)?, graph.len());

    for (name, id) in Module::<f64>::named_parameters(&mlp) {
        println!(
            "  {:<24} data={:+.6} grad={:+.6}",
            name,
            graph.data(id)?,
            graph.grad(id)?
        );
    }
    Ok(())
}
