use cobalt_nn::{Network, Result};

fn main() -> Result<()> {
    // Training data for the OR problem.
    let training_data = vec![
        (vec![0.0, 0.0], vec![0.0]),
        (vec![0.0, 1.0], vec![1.0]),
        (vec![1.0, 0.0], vec![1.0]),
        (vec![1.0, 1.0], vec![1.0]),
    ];

    let mut network = Network::new(2, 2, 1, 0.1)?;
    network.train_with_observer(&training_data, 10_000, &mut |stats| {
        if stats.epoch % 1000 == 0 {
            println!(
                "Epoch {}/{}: loss = {:.6}",
                stats.epoch, stats.total_epochs, stats.train_loss
            );
        }
    })?;

    network.save_json("model.json")?;
    let mut trained = Network::load_json("model.json")?;

    for (input, _) in &training_data {
        let prediction = trained.predict(input)?;
        println!("Input: {:?} -> Prediction: {:.4}", input, prediction[0]);
    }

    Ok(())
}
