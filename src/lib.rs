//! Fully-connected network with one sigmoid hidden layer, trained by online
//! backpropagation with a fixed learning rate and epoch count.

/// Folder
pub mod dataloader;
pub mod units;
pub mod util;

/// Files
pub mod activation;
pub mod err;
pub mod layers_storage;
pub mod net_cfg;
pub mod network;
pub mod orchestra;
pub mod weights;

pub mod prelude {
    pub use crate::dataloader::{Instance, SimpleDataLoader};
    pub use crate::err::{NetError, NetResult};
    pub use crate::net_cfg::TrainCfg;
    pub use crate::network::Network;
    pub use crate::orchestra::{EvalReport, Orchestra};
    pub use crate::weights::WeightsCfg;
}
