use denseml_core::Matrix;
use denseml_nn::{Activation, ActivationFunction, Layer, LayerConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn squared_error(prediction: &Matrix, target: &Matrix) -> f32 {
    prediction.minus(target).unwrap().sum_of(|d| d * d)
}

#[test]
fn gradient_descent_reduces_loss() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut layer = Layer::new(LayerConfig::new(3, 2), &mut rng).unwrap();

    let x = Matrix::of(&[0.5, -1.0, 2.0]).unwrap();
    let target = Matrix::of(&[1.0, -1.0]).unwrap();

    let initial = squared_error(&layer.forward(&x).unwrap(), &target);
    for _ in 0..50 {
        let y = layer.forward(&x).unwrap();
        // d(loss)/dy for 0.5 * ||y - t||^2
        let losses = y.minus(&target).unwrap();
        layer.backward(&losses).unwrap();
        layer.update(0.02).unwrap();
    }
    let trained = squared_error(&layer.forward(&x).unwrap(), &target);

    assert!(
        trained < initial,
        "loss did not decrease: {initial} -> {trained}"
    );
}

#[test]
fn stacked_layers_propagate_shapes() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut hidden = Layer::new(
        LayerConfig::new(4, 3).with_activation(Activation::Tanh),
        &mut rng,
    )
    .unwrap();
    let mut output = Layer::new(LayerConfig::new(3, 2), &mut rng).unwrap();

    let x = Matrix::of(&[1.0, 0.0, -1.0, 0.5]).unwrap();
    let h = hidden.forward(&x).unwrap();
    let h = hidden.activation().activate_matrix(&h);
    let y = output.forward(&h).unwrap();
    assert_eq!(y.shape(), (2, 1));

    let dh = output.backward(&Matrix::of(&[0.1, -0.1]).unwrap()).unwrap();
    assert_eq!(dh.shape(), (3, 1));
    let dx = hidden.backward(&dh).unwrap();
    assert_eq!(dx.shape(), (4, 1));

    hidden.update(0.1).unwrap();
    output.update(0.1).unwrap();
    assert_eq!(hidden.weights().shape(), (3, 4));
    assert_eq!(output.weights().shape(), (2, 3));
}

#[test]
fn same_seed_same_layer() {
    let a = Layer::new(LayerConfig::new(5, 5), &mut StdRng::seed_from_u64(1)).unwrap();
    let b = Layer::new(LayerConfig::new(5, 5), &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(a.weights(), b.weights());
}
