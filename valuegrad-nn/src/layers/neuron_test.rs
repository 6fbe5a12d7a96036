use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use valuegrad_core::AutogradError;

fn fixed_neuron(
    graph: &Graph,
    weights: &[f64],
    bias: f64,
    activation: Activation,
) -> Neuron {
    Neuron {
        weights: weights
            .iter()
            .enumerate()
            .map(|(i, &w)| graph.leaf_with_label(w, format!("w{}", i)))
            .collect(),
        bias: graph.leaf_with_label(bias, "b"),
        activation,
    }
}

#[test]
fn test_new_labels_and_counts() -> Result<(), NnError> {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(1);
    let neuron = Neuron::new(&graph, 3, Activation::Tanh, Init::default(), &mut rng)?;
    assert_eq!(neuron.nin(), 3);
    assert_eq!(neuron.num_parameters(), 4);
    assert_eq!(graph.len(), 4);

    let names: Vec<String> = neuron
        .named_parameters()
        .into_iter()
        .map(|(n, _)| n)
        .collect();
    assert_eq!(names, vec!["w0", "w1", "w2", "b"]);
    assert_eq!(neuron.weights()[2].label().as_deref(), Some("w2"));
    assert_eq!(neuron.bias().label().as_deref(), Some("b"));
    for p in neuron.parameters() {
        assert!(p.is_leaf());
        assert!((-1.0..1.0).contains(&p.data()));
    }
    Ok(())
}

#[test]
fn test_new_rejects_zero_inputs() {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(1);
    let result = Neuron::new(&graph, 0, Activation::Tanh, Init::default(), &mut rng);
    assert!(matches!(result, Err(NnError::InvalidArchitecture(_))));
}

#[test]
fn test_activate_tanh() -> Result<(), NnError> {
    let graph = Graph::new();
    let bias = 6.881_373_587_019_543;
    let neuron = fixed_neuron(&graph, &[-3.0, 1.0], bias, Activation::Tanh);
    let x = graph.leaves(&[2.0, 0.0]);
    let out = neuron.activate(&x)?;
    assert_relative_eq!(out.data(), 0.5f64.sqrt(), epsilon = 1e-6);

    out.backward();
    assert_relative_eq!(neuron.weights()[0].grad(), 1.0, epsilon = 1e-6);
    assert_relative_eq!(neuron.weights()[1].grad(), 0.0, epsilon = 1e-6);
    assert_relative_eq!(neuron.bias().grad(), 0.5, epsilon = 1e-6);
    assert_relative_eq!(x[0].grad(), -1.5, epsilon = 1e-6);
    Ok(())
}

#[test]
fn test_activate_identity() -> Result<(), NnError> {
    let graph = Graph::new();
    let neuron = fixed_neuron(&graph, &[0.5, -2.0], 1.0, Activation::Identity);
    let x = graph.leaves(&[4.0, 1.0]);
    let out = neuron.forward(&x)?;
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].data(), 1.0);
    assert_eq!(out[0].label().as_deref(), Some("wx+b"));
    Ok(())
}

#[test]
fn test_dot_export_shows_preactivation_label() -> Result<(), NnError> {
    let graph = Graph::new();
    let neuron = fixed_neuron(&graph, &[-3.0, 1.0], 1.0, Activation::Tanh);
    let x = graph.leaves(&[2.0, 0.0]);
    let out = neuron.activate(&x)?;
    let dot = valuegrad_core::viz::to_dot(&out);
    assert!(dot.contains("{ wx+b | data -5.00 |"));
    assert!(dot.contains("{ w0 | data -3.00 |"));
    assert!(dot.contains("{ b | data 1.00 |"));
    assert!(dot.contains("[label=\"tanh\"]"));
    Ok(())
}

#[test]
fn test_input_size_mismatch() {
    let graph = Graph::new();
    let neuron = fixed_neuron(&graph, &[1.0, 1.0], 0.0, Activation::Tanh);
    let x = graph.leaves(&[1.0]);
    assert_eq!(
        neuron.activate(&x).unwrap_err(),
        NnError::InputSizeMismatch {
            expected: 2,
            actual: 1,
        }
    );
}

#[test]
fn test_inputs_from_another_graph() {
    let graph = Graph::new();
    let other = Graph::new();
    let neuron = fixed_neuron(&graph, &[1.0], 0.0, Activation::Tanh);
    let x = other.leaves(&[1.0]);
    assert!(matches!(
        neuron.activate(&x),
        Err(NnError::Autograd(AutogradError::GraphMismatch { .. }))
    ));
}
