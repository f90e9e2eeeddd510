use std::{error::Error, fs::File, io::Read};

use log::info;

use crate::dataloader::Instance;
use crate::err::NetError;
use crate::util::Float;

/// In-memory instance set, kept in file order
#[derive(Clone, Debug, Default)]
pub struct SimpleDataLoader {
    pub data: Vec<Instance>,
}

impl SimpleDataLoader {
    pub fn new(data: Vec<Instance>) -> Self {
        Self { data }
    }

    /// Loads a headerless csv file, where each row holds the attributes followed
    /// by `class_count` one-hot target columns
    pub fn from_csv_file(filepath: &str, class_count: usize) -> Result<Self, Box<dyn Error>> {
        let file = File::open(filepath)?;
        let loader = Self::from_csv_reader(file, class_count)?;

        info!(
            "Loaded {} instances from dataset {}",
            loader.len(),
            filepath
        );

        Ok(loader)
    }

    pub fn from_csv_reader<R: Read>(rdr: R, class_count: usize) -> Result<Self, Box<dyn Error>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(rdr);

        let mut data = Vec::new();

        for (row_idx, row) in rdr.records().enumerate() {
            let row = row?;

            if row.len() <= class_count {
                return Err(Box::new(NetError::InvalidFormat(format!(
                    "row {} has {} columns, expected attributes and {} target columns",
                    row_idx,
                    row.len(),
                    class_count
                ))));
            }

            let inp_len = row.len() - class_count;

            let mut inp_vec = Vec::with_capacity(inp_len);
            let mut out_vec = Vec::with_capacity(class_count);

            for val in row.iter().take(inp_len) {
                inp_vec.push(val.parse::<Float>()?);
            }

            for val in row.iter().skip(inp_len) {
                out_vec.push(val.parse::<Float>()?);
            }

            data.push(Instance::new(inp_vec, out_vec));
        }

        Ok(SimpleDataLoader::new(data))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn instances(&self) -> &[Instance] {
        &self.data
    }

    pub fn into_instances(self) -> Vec<Instance> {
        self.data
    }

    /// Instances count per class index
    pub fn class_histogram(&self, class_count: usize) -> Vec<usize> {
        let mut hist = vec![0; class_count];

        for inst in self.data.iter() {
            if let Some(idx) = inst.class_index() {
                if idx < class_count {
                    hist[idx] += 1;
                }
            }
        }

        hist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_rows_split_into_attributes_and_targets() {
        let csv = "0.5, 1.0, 0, 1\n-1.5,2.0,1,0\n";
        let loader = SimpleDataLoader::from_csv_reader(csv.as_bytes(), 2).unwrap();

        assert_eq!(loader.len(), 2);
        assert_eq!(
            loader.instances()[0],
            Instance::new(vec![0.5, 1.0], vec![0.0, 1.0])
        );
        assert_eq!(loader.instances()[1].class_index(), Some(0));
        assert_eq!(loader.class_histogram(2), vec![1, 1]);
    }

    #[test]
    fn rows_without_attributes_are_rejected() {
        let csv = "0,1\n";
        assert!(SimpleDataLoader::from_csv_reader(csv.as_bytes(), 2).is_err());
    }

    #[test]
    fn unparsable_values_are_rejected() {
        let csv = "0.5,abc,1,0\n";
        assert!(SimpleDataLoader::from_csv_reader(csv.as_bytes(), 2).is_err());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let csv = "0.5,0.1,1,0\n0.5,1,0\n";
        assert!(SimpleDataLoader::from_csv_reader(csv.as_bytes(), 2).is_err());
    }
}
