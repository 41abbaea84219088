use approx::assert_abs_diff_eq;
use cobalt_nn::{Network, Result, DEFAULT_LEARNING_RATE};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn or_dataset() -> Vec<(Vec<f64>, Vec<f64>)> {
    vec![
        (vec![0.0, 0.0], vec![0.0]),
        (vec![0.0, 1.0], vec![1.0]),
        (vec![1.0, 0.0], vec![1.0]),
        (vec![1.0, 1.0], vec![1.0]),
    ]
}

fn temp_model_path(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("cobalt-nn-{}-{}.json", std::process::id(), name))
        .to_str()
        .unwrap()
        .to_owned()
}

#[test]
fn learns_or_and_survives_a_save_load_round_trip() -> Result<()> {
    let data = or_dataset();
    let mut network = Network::with_rng(2, 2, 1, 0.1, &mut StdRng::seed_from_u64(42))?;
    network.train(&data, 10_000)?;

    let mut before = Vec::new();
    for (input, expected) in &data {
        let p = network.predict(input)?[0];
        if expected[0] == 1.0 {
            assert!(p > 0.5, "predict({input:?}) = {p}, expected above 0.5");
        } else {
            assert!(p < 0.5, "predict({input:?}) = {p}, expected below 0.5");
        }
        before.push(p);
    }

    let path = temp_model_path("or-gate");
    network.save_json(&path)?;
    let mut restored = Network::load_json(&path)?;
    std::fs::remove_file(&path).ok();

    assert_eq!(restored.input_size(), 2);
    assert_eq!(restored.hidden_size(), 2);
    assert_eq!(restored.output_size(), 1);

    for ((input, _), expected_p) in data.iter().zip(before) {
        let p = restored.predict(input)?[0];
        assert_abs_diff_eq!(p, expected_p, epsilon = 1e-9);
    }

    Ok(())
}

#[test]
fn a_loaded_model_keeps_its_persisted_learning_rate() -> Result<()> {
    let data = or_dataset();
    let mut network = Network::with_rng(2, 2, 1, 0.25, &mut StdRng::seed_from_u64(7))?;
    network.train(&data, 100)?;

    let path = temp_model_path("learning-rate");
    network.save_json(&path)?;
    let restored = Network::load_json(&path)?;
    std::fs::remove_file(&path).ok();

    assert_abs_diff_eq!(restored.learning_rate(), 0.25);
    Ok(())
}

#[test]
fn legacy_files_without_a_learning_rate_get_the_default() -> Result<()> {
    let path = temp_model_path("legacy");
    std::fs::write(
        &path,
        r#"{
            "weightsInputToHidden": [[0.1, -0.2], [0.3, 0.4]],
            "weightsHiddenToOutput": [[0.5], [-0.6]]
        }"#,
    )
    .map_err(cobalt_nn::NetworkError::Io)?;

    let restored = Network::load_json(&path)?;
    std::fs::remove_file(&path).ok();

    assert_abs_diff_eq!(restored.learning_rate(), DEFAULT_LEARNING_RATE);
    Ok(())
}
