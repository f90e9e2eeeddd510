use ndarray::Array;

use crate::util::{argmax, DataVec, Float};

/// Attribute vector with its one-hot class targets
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Instance {
    pub attributes: DataVec,
    pub targets: DataVec,
}

impl Instance {
    pub fn new(attributes: Vec<Float>, targets: Vec<Float>) -> Self {
        Self {
            attributes: Array::from_vec(attributes),
            targets: Array::from_vec(targets),
        }
    }

    /// Instance without targets, usable only for prediction
    pub fn unlabeled(attributes: Vec<Float>) -> Self {
        Self::new(attributes, Vec::new())
    }

    /// Position of the hot target value, `None` for an unlabeled instance
    pub fn class_index(&self) -> Option<usize> {
        argmax(self.targets.iter())
    }
}
