use super::*;
use approx::assert_relative_eq;
use valuegrad_core::Graph;

#[test]
fn test_reduction_from_str() {
    assert_eq!("sum".parse::<Reduction>(), Ok(Reduction::Sum));
    assert_eq!("Mean".parse::<Reduction>(), Ok(Reduction::Mean));
    assert_eq!(
        "none".parse::<Reduction>(),
        Err(NnError::UnsupportedReduction("none".to_string()))
    );
    assert_eq!(Reduction::Mean.to_string(), "mean");
}

#[test]
fn test_mse_sum_against_numbers() -> Result<(), NnError> {
    let graph = Graph::new();
    let preds = graph.leaves(&[0.5, -1.0, 2.0]);
    let loss = mse_loss(&preds, &[1.0, -1.0, 0.0], Reduction::Sum)?;
    assert_relative_eq!(loss.data(), 0.25 + 0.0 + 4.0, epsilon = 1e-12);
    assert_eq!(loss.label().as_deref(), Some("loss"));

    loss.backward();
    // d/dp (p - t)^2 = 2 (p - t)
    assert_relative_eq!(preds[0].grad(), -1.0, epsilon = 1e-12);
    assert_relative_eq!(preds[1].grad(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(preds[2].grad(), 4.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_mean() -> Result<(), NnError> {
    let graph = Graph::new();
    let preds = graph.leaves(&[3.0, 1.0]);
    let loss = mse_loss(&preds, &[1.0, 1.0], Reduction::Mean)?;
    assert_relative_eq!(loss.data(), 2.0, epsilon = 1e-12);
    loss.backward();
    assert_relative_eq!(preds[0].grad(), 2.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_mse_against_values() -> Result<(), NnError> {
    let graph = Graph::new();
    let preds = graph.leaves(&[2.0]);
    let targets = graph.leaves(&[5.0]);
    let loss = mse_loss(&preds, &targets, Reduction::Sum)?;
    assert_eq!(loss.data(), 9.0);
    loss.backward();
    assert_eq!(preds[0].grad(), -6.0);
    assert_eq!(targets[0].grad(), 6.0);
    Ok(())
}

#[test]
fn test_mse_empty_and_mismatched() {
    let graph = Graph::new();
    let empty: [f64; 0] = [];
    assert_eq!(
        mse_loss(&[], &empty, Reduction::Sum).unwrap_err(),
        NnError::EmptyInput {
            operation: "mse_loss".to_string(),
        }
    );

    let preds = graph.leaves(&[1.0, 2.0]);
    assert_eq!(
        mse_loss(&preds, &[1.0], Reduction::Mean).unwrap_err(),
        NnError::LengthMismatch {
            operation: "mse_loss".to_string(),
            predictions: 2,
            targets: 1,
        }
    );
}
