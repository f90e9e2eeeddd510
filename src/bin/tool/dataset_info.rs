use clap::ArgMatches;

use nevermind_mlp::dataloader::*;

use crate::train::required;

pub fn dataset_info(args: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let filepath = required::<String>(args, "Data")?;
    let class_count = *required::<usize>(args, "Classes")?;

    let loader = SimpleDataLoader::from_csv_file(filepath, class_count)?;

    println!("Dataset length : {}", loader.len());

    if let Some(first) = loader.instances().first() {
        println!("Attributes : {}", first.attributes.len());
    }

    for (class_idx, count) in loader.class_histogram(class_count).iter().enumerate() {
        println!("Class {} : {}", class_idx, count);
    }

    Ok(())
}
