use ndarray::{Array1, Array2};

pub type Float = f64;
pub type DataVec = Array1<Float>;
pub type WsMat = Array2<Float>;
