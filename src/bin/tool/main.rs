extern crate nevermind_mlp;

use clap::{value_parser, Arg, ArgAction, Command};

pub mod dataset_info;
pub mod train;

#[cfg(feature = "log_log4rs")]
fn init_logger() -> Result<(), Box<dyn std::error::Error>> {
    use log::LevelFilter;
    use log4rs::append::console::ConsoleAppender;
    use log4rs::append::file::FileAppender;
    use log4rs::config::{Appender, Config, Root};
    use log4rs::encode::pattern::PatternEncoder;

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::default()))
        .build("log.txt")?;

    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::default()))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .appender(Appender::builder().build("console", Box::new(console)))
        .build(
            Root::builder()
                .appender("console")
                .appender("logfile")
                .build(LevelFilter::Info),
        )?;

    log4rs::init_config(config)?;

    Ok(())
}

#[cfg(not(feature = "log_log4rs"))]
fn init_logger() -> Result<(), Box<dyn std::error::Error>> {
    use env_logger::Env;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    Ok(())
}

fn cli() -> Command<'static> {
    Command::new("nevermind-mlp tool")
        .version("0.1.0")
        .about("Single hidden layer network training tool")
        .subcommand_required(true)
        .subcommand(
            Command::new("train")
                .about("Train a network on a csv dataset")
                .arg(
                    Arg::new("TrainData")
                        .long("train_dataset")
                        .help("Provides a file path to train dataset (csv)")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(String))
                        .require_equals(true)
                        .required(true),
                )
                .arg(
                    Arg::new("TestData")
                        .long("test_dataset")
                        .help("Provides a file path to test dataset (csv)")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(String))
                        .require_equals(true),
                )
                .arg(
                    Arg::new("Classes")
                        .long("classes")
                        .help("Number of one-hot target columns at the end of each row")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(usize))
                        .require_equals(true)
                        .required(true),
                )
                .arg(
                    Arg::new("Cfg")
                        .long("cfg")
                        .help("Provide training configuration yaml file")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(String))
                        .require_equals(true)
                        .required(true),
                )
                .arg(
                    Arg::new("Weights")
                        .short('w')
                        .long("weights")
                        .help("Initial weights file (yaml or json). Random weights if not set")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(String))
                        .require_equals(true),
                )
                .arg(
                    Arg::new("Seed")
                        .long("seed")
                        .help("Seed for random initial weights")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(u64))
                        .require_equals(true)
                        .default_value("0"),
                )
                .arg(
                    Arg::new("MaxEpoch")
                        .long("max_epoch")
                        .help("Overrides max_epoch of the training configuration")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(usize))
                        .require_equals(true),
                )
                .arg(
                    Arg::new("LearningRate")
                        .long("learning_rate")
                        .help("Overrides learning_rate of the training configuration")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(f64))
                        .require_equals(true),
                ),
        )
        .subcommand(
            Command::new("gen_init_weights")
                .about("Generate initial weights (uniform random)")
                .arg(
                    Arg::new("Cfg")
                        .long("cfg")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(String))
                        .require_equals(true)
                        .required(true),
                )
                .arg(
                    Arg::new("Inputs")
                        .long("inputs")
                        .help("Number of attributes per instance")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(usize))
                        .require_equals(true)
                        .required(true),
                )
                .arg(
                    Arg::new("Classes")
                        .long("classes")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(usize))
                        .require_equals(true)
                        .required(true),
                )
                .arg(
                    Arg::new("Seed")
                        .long("seed")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(u64))
                        .require_equals(true)
                        .default_value("0"),
                )
                .arg(
                    Arg::new("OutFile")
                        .long("out")
                        .short('o')
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(String))
                        .require_equals(true)
                        .default_value("init_weights.yaml"),
                ),
        )
        .subcommand(
            Command::new("dataset_info")
                .about("Inspect dataset")
                .arg(
                    Arg::new("Data")
                        .long("dataset")
                        .short('d')
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(String))
                        .require_equals(true)
                        .required(true),
                )
                .arg(
                    Arg::new("Classes")
                        .long("classes")
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(usize))
                        .require_equals(true)
                        .required(true),
                ),
        )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger()?;

    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("train", args)) => train::train_net(args)?,
        Some(("gen_init_weights", args)) => train::gen_init_weights(args)?,
        Some(("dataset_info", args)) => dataset_info::dataset_info(args)?,
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn train_args_parse() {
        let m = cli()
            .try_get_matches_from([
                "tool",
                "train",
                "--train_dataset=train.csv",
                "--classes=3",
                "--cfg=net.yaml",
                "--max_epoch=10",
            ])
            .unwrap();

        let (name, args) = m.subcommand().unwrap();
        assert_eq!(name, "train");
        assert_eq!(args.get_one::<usize>("Classes"), Some(&3));
        assert_eq!(args.get_one::<usize>("MaxEpoch"), Some(&10));
        assert_eq!(args.get_one::<u64>("Seed"), Some(&0));
        assert_eq!(args.get_one::<String>("Weights"), None);
    }
}
