use std::fmt;

use log::error;

use crate::activation::sigmoid_deriv;
use crate::err::{NetError, NetResult};
use crate::units::{Connection, Unit, UnitKind};
use crate::util::{DataVec, Float, WsMat};

/// Input, hidden and output layers of a single hidden layer network.
///
/// The last unit of the input layer and of the hidden layer is a bias unit.
/// Connections point into the preceding layer by position.
#[derive(Clone, Debug)]
pub struct LayersStorage {
    input_layer: Vec<Unit>,
    hidden_layer: Vec<Unit>,
    output_layer: Vec<Unit>,
}

fn check_shape(name: &'static str, ws: &WsMat, expected: (usize, usize)) -> NetResult<()> {
    let actual = ws.dim();

    if actual != expected {
        error!(
            "Invalid {} shape {}x{}, expected {}x{}",
            name, actual.0, actual.1, expected.0, expected.1
        );
        return Err(NetError::InvalidShape {
            name,
            expected,
            actual,
        });
    }

    Ok(())
}

fn wire_layer(kind: UnitKind, ws: &WsMat) -> NetResult<Vec<Unit>> {
    let mut layer = Vec::with_capacity(ws.nrows() + 1);

    for row in ws.rows() {
        let incoming = row
            .iter()
            .enumerate()
            .map(|(src_idx, w)| Connection::new(src_idx, *w))
            .collect();

        layer.push(Unit::with_incoming(kind, incoming)?);
    }

    Ok(layer)
}

impl LayersStorage {
    /// Builds and wires the layers.
    ///
    /// `hidden_ws` has shape `(hidden_count, input_count + 1)` and `output_ws` has shape
    /// `(output_count, hidden_count + 1)`, the last column holding the bias weights.
    pub fn new(
        input_count: usize,
        hidden_count: usize,
        output_count: usize,
        hidden_ws: &WsMat,
        output_ws: &WsMat,
    ) -> NetResult<Self> {
        check_shape("hidden weights", hidden_ws, (hidden_count, input_count + 1))?;
        check_shape("output weights", output_ws, (output_count, hidden_count + 1))?;

        let mut input_layer = Vec::with_capacity(input_count + 1);
        input_layer.extend((0..input_count).map(|_| Unit::new(UnitKind::Input)));
        input_layer.push(Unit::new(UnitKind::BiasToHidden));

        let mut hidden_layer = wire_layer(UnitKind::Hidden, hidden_ws)?;
        hidden_layer.push(Unit::new(UnitKind::BiasToOutput));

        let output_layer = wire_layer(UnitKind::Output, output_ws)?;

        Ok(Self {
            input_layer,
            hidden_layer,
            output_layer,
        })
    }

    pub fn input_count(&self) -> usize {
        self.input_layer.len() - 1
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden_layer.len() - 1
    }

    pub fn output_count(&self) -> usize {
        self.output_layer.len()
    }

    pub fn input_layer(&self) -> &[Unit] {
        &self.input_layer
    }

    pub fn hidden_layer(&self) -> &[Unit] {
        &self.hidden_layer
    }

    pub fn output_layer(&self) -> &[Unit] {
        &self.output_layer
    }

    /// Forward pass, returns the output layer activations
    pub fn propagate(&mut self, attributes: &DataVec) -> NetResult<Vec<Float>> {
        if attributes.len() != self.input_count() {
            error!(
                "Invalid attributes count : {}, network has {} inputs",
                attributes.len(),
                self.input_count()
            );
            return Err(NetError::InvalidSize {
                name: "attributes",
                expected: self.input_count(),
                actual: attributes.len(),
            });
        }

        for (unit, val) in self.input_layer.iter_mut().zip(attributes.iter()) {
            unit.set_input(*val)?;
        }

        for unit in self.hidden_layer.iter_mut() {
            if unit.kind().is_computing() {
                unit.activate(&self.input_layer)?;
            }
        }

        let mut out = Vec::with_capacity(self.output_layer.len());

        for unit in self.output_layer.iter_mut() {
            out.push(unit.activate(&self.hidden_layer)?);
        }

        Ok(out)
    }

    /// Deltas of the output units against `targets`, uses the activations of the last forward pass
    pub fn output_deltas(&self, targets: &DataVec) -> NetResult<Vec<Float>> {
        if targets.len() != self.output_count() {
            return Err(NetError::InvalidSize {
                name: "targets",
                expected: self.output_count(),
                actual: targets.len(),
            });
        }

        let deltas = self
            .output_layer
            .iter()
            .zip(targets.iter())
            .map(|(unit, expected)| {
                let output = unit.activation();
                (expected - output) * sigmoid_deriv(output)
            })
            .collect();

        Ok(deltas)
    }

    /// Deltas of the hidden units (bias excluded), in hidden layer order.
    ///
    /// The weighted error is accumulated per hidden unit, keyed by the source of each
    /// output connection.
    pub fn hidden_deltas(&self, output_deltas: &[Float]) -> Vec<Float> {
        let mut sum_weight = vec![0.0; self.hidden_layer.len()];

        for (unit, delta) in self.output_layer.iter().zip(output_deltas) {
            for conn in unit.incoming() {
                sum_weight[conn.source()] += conn.weight() * delta;
            }
        }

        self.hidden_layer
            .iter()
            .zip(sum_weight)
            .filter(|(unit, _)| unit.kind().is_computing())
            .map(|(unit, sum)| sigmoid_deriv(unit.activation()) * sum)
            .collect()
    }

    /// Moves every weight along its delta. Activations are not recomputed, so
    /// all updates of a step see the values of the same forward pass.
    pub fn update_weights(
        &mut self,
        hidden_deltas: &[Float],
        output_deltas: &[Float],
        learning_rate: Float,
    ) {
        let hidden_units = self
            .hidden_layer
            .iter_mut()
            .filter(|unit| unit.kind().is_computing());

        for (unit, delta) in hidden_units.zip(hidden_deltas) {
            for conn in unit.incoming_mut() {
                let src_act = self.input_layer[conn.source()].activation();
                conn.set_weight(conn.weight() + learning_rate * src_act * delta);
            }
        }

        for (unit, delta) in self.output_layer.iter_mut().zip(output_deltas) {
            for conn in unit.incoming_mut() {
                let src_act = self.hidden_layer[conn.source()].activation();
                conn.set_weight(conn.weight() + learning_rate * src_act * delta);
            }
        }
    }

    /// Backward pass and weight update for the instance of the last forward pass
    pub fn backpropagate(&mut self, targets: &DataVec, learning_rate: Float) -> NetResult<()> {
        let output_deltas = self.output_deltas(targets)?;
        let hidden_deltas = self.hidden_deltas(&output_deltas);

        self.update_weights(&hidden_deltas, &output_deltas, learning_rate);

        Ok(())
    }

    pub fn hidden_weights(&self) -> WsMat {
        Self::layer_weights(&self.hidden_layer[..self.hidden_count()], self.input_layer.len())
    }

    pub fn output_weights(&self) -> WsMat {
        Self::layer_weights(&self.output_layer, self.hidden_layer.len())
    }

    /// Row per unit, column per source unit of the preceding layer
    fn layer_weights(layer: &[Unit], prev_size: usize) -> WsMat {
        let mut ws = WsMat::zeros((layer.len(), prev_size));

        for (neu_idx, unit) in layer.iter().enumerate() {
            for conn in unit.incoming() {
                ws[[neu_idx, conn.source()]] = conn.weight();
            }
        }

        ws
    }
}

impl fmt::Display for LayersStorage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.input_count(),
            self.hidden_count(),
            self.output_count()
        )
    }
}
