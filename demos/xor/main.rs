use log::info;

use env_logger::Env;

use nevermind_mlp::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    info!("XOR demo starting...");

    // one-hot targets : [false, true]
    let dataset_train = vec![
        Instance::new(vec![0.0, 0.0], vec![1.0, 0.0]),
        Instance::new(vec![0.0, 1.0], vec![0.0, 1.0]),
        Instance::new(vec![1.0, 0.0], vec![0.0, 1.0]),
        Instance::new(vec![1.0, 1.0], vec![1.0, 0.0]),
    ];

    let cfg = TrainCfg {
        hidden_units: 4,
        learning_rate: 0.5,
        max_epoch: 5000,
    };

    let (hidden_ws, output_ws) = WeightsCfg::random(2, cfg.hidden_units, 2, 42).to_matrices()?;

    let net = Network::new(
        dataset_train.clone(),
        cfg.hidden_units,
        cfg.learning_rate,
        cfg.max_epoch,
        &hidden_ws,
        &output_ws,
    )?;

    let mut orchestra = Orchestra::new(net).test_dataset(dataset_train.clone());
    orchestra.train()?;

    info!("Now testing net !!!");

    let mut net = orchestra.into_network();

    for inst in dataset_train.iter() {
        let out = net.predict(inst)?;
        let class = net.classify(inst)?;
        info!("{} -> {:?}, class {}", inst.attributes, out, class);
    }

    Ok(())
}
