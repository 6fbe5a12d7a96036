// Trains a small MLP on a four-sample regression task.
//
// Loss is logged at info level every 10 steps. Run with
// `RUST_LOG=info cargo run -p valuegrad-nn --example train_mlp` to see it;
// without RUST_LOG only the final predictions are printed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use valuegrad_core::{Graph, Value};
use valuegrad_nn::{mse_loss, Init, Mlp, Module, NnError, Optimizer, Reduction, Sgd};

fn main() -> Result<(), NnError> {
    env_logger::init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(&graph, 3, &[4, 4, 1], Init::default(), &mut rng)?;
    let mut optim = Sgd::new(mlp.parameters(), 0.05)?;
    log::info!("MLP(3, [4, 4, 1]) with {} parameters", mlp.num_parameters());

    // Parameters live below the checkpoint; everything a step builds is dropped.
    let checkpoint = graph.checkpoint();
    for step in 0..100 {
        let predictions = xs
            .iter()
            .map(|x| -> Result<Value, NnError> {
                Ok(mlp.forward(&graph.leaves(x))?[0].clone())
            })
            .collect::<Result<Vec<Value>, NnError>>()?;
        let loss = mse_loss(&predictions, &ys, Reduction::Sum)?;

        optim.zero_grad()?;
        loss.try_backward()?;
        optim.step()?;

        if step % 10 == 0 {
            let nodes = graph.len();
            log::info!("step {:3}  loss {:.6}  nodes {}", step, loss.data(), nodes);
        }
        graph.rewind(checkpoint)?;
    }

    for (x, y) in xs.iter().zip(ys) {
        let prediction = mlp.forward(&graph.leaves(x))?[0].data();
        println!("{:?} -> {:+.4} (target {:+})", x, prediction, y);
    }
    Ok(())
}
