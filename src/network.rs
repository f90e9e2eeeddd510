use log::{debug, error, info, trace};

use crate::dataloader::Instance;
use crate::err::{NetError, NetResult};
use crate::layers_storage::LayersStorage;
use crate::util::{argmax, Float, WsMat};

/// Single hidden layer sigmoid network trained with online backpropagation.
///
/// The topology is fixed at construction, only weights and activations change
/// afterwards.
#[derive(Clone, Debug)]
pub struct Network {
    layers: LayersStorage,
    training_set: Vec<Instance>,
    learning_rate: Float,
    max_epoch: usize,
}

impl Network {
    /// Builds the network for `training_set`.
    ///
    /// Input and output sizes come from the first instance, every other instance must
    /// match them. `hidden_weights` is `hidden_count x (inputs + 1)` and `output_weights`
    /// is `outputs x (hidden_count + 1)`, the bias weight being the last column.
    pub fn new(
        training_set: Vec<Instance>,
        hidden_count: usize,
        learning_rate: Float,
        max_epoch: usize,
        hidden_weights: &WsMat,
        output_weights: &WsMat,
    ) -> NetResult<Self> {
        let first = training_set.first().ok_or_else(|| {
            error!("Can't build a network from an empty training set");
            NetError::EmptyDataset
        })?;

        let input_count = first.attributes.len();
        let output_count = first.targets.len();

        if hidden_count == 0 {
            error!("Can't build a network without hidden units");
            return Err(NetError::InvalidConfig(
                "hidden unit count must be positive".to_owned(),
            ));
        }

        if output_count == 0 {
            error!("Training instances have no target values");
            return Err(NetError::InvalidConfig(
                "instances have no target values".to_owned(),
            ));
        }

        for inst in training_set.iter() {
            if inst.attributes.len() != input_count {
                error!("Training instances differ in attributes count");
                return Err(NetError::InvalidSize {
                    name: "attributes",
                    expected: input_count,
                    actual: inst.attributes.len(),
                });
            }

            if inst.targets.len() != output_count {
                error!("Training instances differ in targets count");
                return Err(NetError::InvalidSize {
                    name: "targets",
                    expected: output_count,
                    actual: inst.targets.len(),
                });
            }
        }

        let layers = LayersStorage::new(
            input_count,
            hidden_count,
            output_count,
            hidden_weights,
            output_weights,
        )?;

        debug!("Created network {}", layers);

        Ok(Self {
            layers,
            training_set,
            learning_rate,
            max_epoch,
        })
    }

    /// Output activations for the attributes of `instance`, targets are ignored
    pub fn predict(&mut self, instance: &Instance) -> NetResult<Vec<Float>> {
        self.layers.propagate(&instance.attributes)
    }

    /// Index of the highest output, ties go to the lowest index
    pub fn classify(&mut self, instance: &Instance) -> NetResult<usize> {
        let out = self.predict(instance)?;

        argmax(out.iter()).ok_or(NetError::InvalidSize {
            name: "output layer",
            expected: self.layers.output_count(),
            actual: 0,
        })
    }

    /// Runs `max_epoch` passes over the training set, updating the weights after
    /// every instance
    pub fn train(&mut self) -> NetResult<()> {
        info!(
            "Training network {} : {} instances, {} epochs, learning rate {}",
            self.layers,
            self.training_set.len(),
            self.max_epoch,
            self.learning_rate
        );

        for epoch in 1..=self.max_epoch {
            for (idx, inst) in self.training_set.iter().enumerate() {
                self.layers.propagate(&inst.attributes)?;
                self.layers.backpropagate(&inst.targets, self.learning_rate)?;

                trace!("[ok] epoch {} instance {}", epoch, idx);
            }

            debug!("Finished epoch {} / {}", epoch, self.max_epoch);
        }

        info!("Training finished !");

        Ok(())
    }

    pub fn hidden_weights(&self) -> WsMat {
        self.layers.hidden_weights()
    }

    pub fn output_weights(&self) -> WsMat {
        self.layers.output_weights()
    }

    pub fn layers(&self) -> &LayersStorage {
        &self.layers
    }

    pub fn training_set(&self) -> &[Instance] {
        &self.training_set
    }

    pub fn learning_rate(&self) -> Float {
        self.learning_rate
    }

    pub fn max_epoch(&self) -> usize {
        self.max_epoch
    }

    pub fn input_count(&self) -> usize {
        self.layers.input_count()
    }

    pub fn hidden_count(&self) -> usize {
        self.layers.hidden_count()
    }

    pub fn output_count(&self) -> usize {
        self.layers.output_count()
    }
}
