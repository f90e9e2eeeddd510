use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use log::{debug, error};

use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use serde::{Deserialize, Serialize};

use crate::err::{NetError, NetResult};
use crate::util::{Float, WsMat};

/// Initial weight matrices of a network as nested rows.
///
/// `hidden` rows are `[input_1, ..., input_n, bias]` for each hidden unit,
/// `output` rows are `[hidden_1, ..., hidden_m, bias]` for each output unit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightsCfg {
    pub hidden: Vec<Vec<Float>>,
    pub output: Vec<Vec<Float>>,
}

fn is_json(filepath: &str) -> bool {
    Path::new(filepath)
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
}

fn rows_to_mat(name: &'static str, rows: &[Vec<Float>]) -> NetResult<WsMat> {
    let cols = rows.first().map_or(0, |r| r.len());

    for row in rows.iter() {
        if row.len() != cols {
            error!("Ragged {} rows : {} and {} values", name, cols, row.len());
            return Err(NetError::InvalidShape {
                name,
                expected: (rows.len(), cols),
                actual: (rows.len(), row.len()),
            });
        }
    }

    let vals: Vec<Float> = rows.iter().flatten().copied().collect();

    WsMat::from_shape_vec((rows.len(), cols), vals)
        .map_err(|e| NetError::InvalidFormat(format!("{} : {}", name, e)))
}

fn mat_to_rows(ws: &WsMat) -> Vec<Vec<Float>> {
    ws.rows().into_iter().map(|r| r.to_vec()).collect()
}

impl WeightsCfg {
    pub fn from_matrices(hidden: &WsMat, output: &WsMat) -> Self {
        Self {
            hidden: mat_to_rows(hidden),
            output: mat_to_rows(output),
        }
    }

    /// Uniform(-0.1, 0.1) weights, the same seed gives the same weights
    pub fn random(input_count: usize, hidden_count: usize, output_count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let distr = Uniform::new(-0.1, 0.1);

        let hidden = WsMat::random_using((hidden_count, input_count + 1), distr, &mut rng);
        let output = WsMat::random_using((output_count, hidden_count + 1), distr, &mut rng);

        debug!(
            "Generated random weights for {}-{}-{} network with seed {}",
            input_count, hidden_count, output_count, seed
        );

        Self::from_matrices(&hidden, &output)
    }

    /// Returns `(hidden, output)` matrices
    pub fn to_matrices(&self) -> NetResult<(WsMat, WsMat)> {
        Ok((
            rows_to_mat("hidden weights", &self.hidden)?,
            rows_to_mat("output weights", &self.output)?,
        ))
    }

    /// Reads json for `.json` files, yaml otherwise
    pub fn from_file(filepath: &str) -> Result<Self, Box<dyn Error>> {
        let file = File::open(filepath)?;

        let ws: WeightsCfg = if is_json(filepath) {
            serde_json::from_reader(file)?
        } else {
            serde_yaml::from_reader(file)?
        };

        Ok(ws)
    }

    pub fn to_file(&self, filepath: &str) -> Result<(), Box<dyn Error>> {
        let out_str = if is_json(filepath) {
            serde_json::to_string_pretty(&self)?
        } else {
            serde_yaml::to_string(&self)?
        };

        let mut output = File::create(filepath)?;
        output.write_all(out_str.as_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn random_weights_have_network_shapes() {
        let ws = WeightsCfg::random(4, 3, 2, 7);
        let (hidden, output) = ws.to_matrices().unwrap();

        assert_eq!(hidden.dim(), (3, 5));
        assert_eq!(output.dim(), (2, 4));
        assert!(hidden.iter().chain(output.iter()).all(|w| *w >= -0.1 && *w < 0.1));
    }

    #[test]
    fn random_weights_depend_on_seed_only() {
        assert_eq!(WeightsCfg::random(2, 2, 2, 11), WeightsCfg::random(2, 2, 2, 11));
        assert_ne!(WeightsCfg::random(2, 2, 2, 11), WeightsCfg::random(2, 2, 2, 12));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let ws = WeightsCfg {
            hidden: vec![vec![0.1, 0.2, 0.3], vec![0.1, 0.2]],
            output: vec![vec![0.1, 0.2, 0.3]],
        };

        assert!(matches!(
            ws.to_matrices(),
            Err(NetError::InvalidShape {
                name: "hidden weights",
                ..
            })
        ));
    }

    #[test]
    fn yaml_layout() {
        let yaml = "hidden:\n  - [0.5, -0.3, 0.1]\noutput:\n  - [0.2, 0.4]\n  - [-0.1, 0.3]\n";
        let ws: WeightsCfg = serde_yaml::from_str(yaml).unwrap();
        let (hidden, output) = ws.to_matrices().unwrap();

        assert_eq!(hidden, array![[0.5, -0.3, 0.1]]);
        assert_eq!(output, array![[0.2, 0.4], [-0.1, 0.3]]);
    }

    #[test]
    fn json_extension_detection() {
        assert!(is_json("init.JSON"));
        assert!(!is_json("init.yaml"));
        assert!(!is_json("weights"));
    }
}
