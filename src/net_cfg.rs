use std::error::Error;
use std::fs::File;
use std::io::prelude::*;

use log::error;
use serde::{Deserialize, Serialize};

use crate::err::NetError;
use crate::util::Float;

/// Training hyperparameters, stored as yaml
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainCfg {
    pub hidden_units: usize,
    pub learning_rate: Float,
    pub max_epoch: usize,
}

impl Default for TrainCfg {
    fn default() -> Self {
        Self {
            hidden_units: 5,
            learning_rate: 1.0,
            max_epoch: 1,
        }
    }
}

impl TrainCfg {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: TrainCfg = serde_yaml::from_str(yaml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(filepath: &str) -> Result<Self, Box<dyn Error>> {
        let cfg_file = File::open(filepath)?;
        let cfg: TrainCfg = serde_yaml::from_reader(cfg_file)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_file(&self, filepath: &str) -> Result<(), Box<dyn Error>> {
        let yaml_str = serde_yaml::to_string(&self)?;

        let mut output = File::create(filepath)?;
        output.write_all(yaml_str.as_bytes())?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), NetError> {
        if self.hidden_units == 0 {
            error!("Training config has zero hidden units");
            return Err(NetError::InvalidConfig(
                "hidden_units must be positive".to_owned(),
            ));
        }

        Ok(())
    }
}
