use log::info;

use clap::ArgMatches;

use nevermind_mlp::dataloader::*;
use nevermind_mlp::err::*;
use nevermind_mlp::net_cfg::TrainCfg;
use nevermind_mlp::network::Network;
use nevermind_mlp::orchestra::Orchestra;
use nevermind_mlp::weights::WeightsCfg;

pub fn required<'a, T>(args: &'a ArgMatches, id: &str) -> Result<&'a T, NetError>
where
    T: Clone + Send + Sync + 'static,
{
    args.get_one::<T>(id)
        .ok_or_else(|| NetError::WrongArg(format!("{} wasn't provided", id)))
}

/// Trains a network on the train dataset and reports its accuracy
pub fn train_net(args: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let class_count = *required::<usize>(args, "Classes")?;

    let cfg_path = required::<String>(args, "Cfg")?;
    let mut cfg = TrainCfg::from_file(cfg_path)?;

    if let Some(max_epoch) = args.get_one::<usize>("MaxEpoch") {
        info!("Max epoch : {}", max_epoch);
        cfg.max_epoch = *max_epoch;
    }

    if let Some(learning_rate) = args.get_one::<f64>("LearningRate") {
        info!("Learning rate : {}", learning_rate);
        cfg.learning_rate = *learning_rate;
    }

    let train_ds = required::<String>(args, "TrainData")?;
    let train_dl = SimpleDataLoader::from_csv_file(train_ds, class_count)?;

    let input_count = train_dl
        .instances()
        .first()
        .map(|inst| inst.attributes.len())
        .ok_or(NetError::EmptyDataset)?;

    let weights = match args.get_one::<String>("Weights") {
        Some(ws_file) => {
            info!("Loading initial weights : {}", ws_file);
            WeightsCfg::from_file(ws_file)?
        }
        None => {
            let seed = *required::<u64>(args, "Seed")?;
            info!("Using random initial weights, seed : {}", seed);
            WeightsCfg::random(input_count, cfg.hidden_units, class_count, seed)
        }
    };

    let (hidden_ws, output_ws) = weights.to_matrices()?;

    let net = Network::new(
        train_dl.into_instances(),
        cfg.hidden_units,
        cfg.learning_rate,
        cfg.max_epoch,
        &hidden_ws,
        &output_ws,
    )?;

    let mut orchestra = Orchestra::new(net);

    if let Some(test_ds) = args.get_one::<String>("TestData") {
        info!("Setting test data : {}", test_ds);
        let test_dl = SimpleDataLoader::from_csv_file(test_ds, class_count)?;
        orchestra = orchestra.test_dataset(test_dl.into_instances());
    }

    let test_report = orchestra.train()?;

    let train_set = orchestra.network().training_set().to_vec();
    let train_report = orchestra.evaluate(&train_set)?;

    info!("Train set accuracy : {}", train_report.accuracy);

    if let Some(test_report) = test_report {
        info!("Test set accuracy : {}", test_report.accuracy);
    }

    Ok(())
}

pub fn gen_init_weights(args: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let cfg_path = required::<String>(args, "Cfg")?;
    let cfg = TrainCfg::from_file(cfg_path)?;

    let input_count = *required::<usize>(args, "Inputs")?;
    let class_count = *required::<usize>(args, "Classes")?;
    let seed = *required::<u64>(args, "Seed")?;
    let out_file = required::<String>(args, "OutFile")?;

    let weights = WeightsCfg::random(input_count, cfg.hidden_units, class_count, seed);
    weights.to_file(out_file)?;

    info!(
        "Saved initial weights for {}-{}-{} network to file {}",
        input_count, cfg.hidden_units, class_count, out_file
    );

    Ok(())
}
