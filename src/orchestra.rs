use std::time::Instant;

use log::info;

use crate::dataloader::Instance;
use crate::err::{NetError, NetResult};
use crate::network::Network;
use crate::util::{argmax, Float};

/// Accuracy and error of a network over an instance set
#[derive(Clone, Debug, PartialEq)]
pub struct EvalReport {
    /// Share of instances classified as their target class
    pub accuracy: Float,
    /// Mean per-instance root mean square error
    pub error: Float,
    pub count: usize,
}

/// Neural-Network learning orchestrator
pub struct Orchestra {
    net: Network,
    test_set: Option<Vec<Instance>>,
    show_accuracy: bool,
}

impl Orchestra {
    pub fn new(net: Network) -> Self {
        Self {
            net,
            test_set: None,
            show_accuracy: true,
        }
    }

    pub fn test_dataset(mut self, data: Vec<Instance>) -> Self {
        self.test_set = Some(data);
        self
    }

    pub fn show_accuracy(mut self, state: bool) -> Self {
        self.show_accuracy = state;
        self
    }

    /// Trains the network, then evaluates the test set if one was given
    pub fn train(&mut self) -> NetResult<Option<EvalReport>> {
        let now_time = Instant::now();

        self.net.train()?;

        info!(
            "Elapsed for training : {} ms",
            now_time.elapsed().as_millis()
        );

        let test_set = match self.test_set.take() {
            Some(test_set) => test_set,
            None => return Ok(None),
        };

        let report = self.evaluate(&test_set);
        self.test_set = Some(test_set);

        report.map(Some)
    }

    /// Test net and returns accuracy and an average error
    pub fn evaluate(&mut self, data: &[Instance]) -> NetResult<EvalReport> {
        if data.is_empty() {
            return Err(NetError::EmptyDataset);
        }

        let mut accuracy_cnt = 0.0;
        let mut err = 0.0;

        for inst in data.iter() {
            let out = self.net.predict(inst)?;

            if out.len() != inst.targets.len() {
                return Err(NetError::InvalidSize {
                    name: "targets",
                    expected: out.len(),
                    actual: inst.targets.len(),
                });
            }

            if inst.class_index() == argmax(out.iter()) {
                accuracy_cnt += 1.0;
            }

            let local_err: Float = out
                .iter()
                .zip(inst.targets.iter())
                .map(|(o, t)| (t - o).powi(2))
                .sum();

            err += (local_err / out.len() as Float).sqrt();
        }

        let report = EvalReport {
            accuracy: accuracy_cnt / data.len() as Float,
            error: err / data.len() as Float,
            count: data.len(),
        };

        if self.show_accuracy {
            info!(
                "Accuracy : {} ({} instances), error : {}",
                report.accuracy, report.count, report.error
            );
        }

        Ok(report)
    }

    pub fn network(&self) -> &Network {
        &self.net
    }

    pub fn into_network(self) -> Network {
        self.net
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn orchestra() -> Orchestra {
        let train = vec![
            Instance::new(vec![1.0, 0.0], vec![1.0, 0.0]),
            Instance::new(vec![0.0, 1.0], vec![0.0, 1.0]),
        ];
        let net = Network::new(
            train,
            1,
            0.1,
            0,
            &array![[0.5, -0.3, 0.1]],
            &array![[0.2, 0.4], [-0.1, 0.3]],
        )
        .unwrap();

        Orchestra::new(net)
    }

    #[test]
    fn evaluate_counts_matching_classes() {
        let mut orch = orchestra().show_accuracy(false);
        // the untrained network picks class 0 for both instances
        let data = orch.network().training_set().to_vec();

        let report = orch.evaluate(&data).unwrap();

        assert_eq!(report.count, 2);
        assert_eq!(report.accuracy, 0.5);
        assert!(report.error > 0.0 && report.error < 1.0);
    }

    #[test]
    fn evaluate_rejects_empty_set() {
        let mut orch = orchestra();
        assert_eq!(orch.evaluate(&[]).unwrap_err(), NetError::EmptyDataset);
    }

    #[test]
    fn train_reports_only_with_test_set() {
        let mut orch = orchestra();
        assert_eq!(orch.train().unwrap(), None);

        let test = vec![Instance::new(vec![1.0, 0.0], vec![1.0, 0.0])];
        let mut orch = orchestra().test_dataset(test);
        let report = orch.train().unwrap().unwrap();

        assert_eq!(report.accuracy, 1.0);
        assert_eq!(report.count, 1);

        let net = orch.into_network();
        assert_eq!(net.output_weights(), array![[0.2, 0.4], [-0.1, 0.3]]);
    }
}
