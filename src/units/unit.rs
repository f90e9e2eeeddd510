use std::convert::TryFrom;
use std::fmt;

use log::error;

use super::connection::Connection;
use crate::activation::sigmoid;
use crate::err::{NetError, NetResult};
use crate::util::Float;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitKind {
    Input,
    BiasToHidden,
    Hidden,
    BiasToOutput,
    Output,
}

impl UnitKind {
    pub fn is_bias(&self) -> bool {
        matches!(self, UnitKind::BiasToHidden | UnitKind::BiasToOutput)
    }

    /// Hidden and output units compute their activation from incoming connections
    pub fn is_computing(&self) -> bool {
        matches!(self, UnitKind::Hidden | UnitKind::Output)
    }
}

impl TryFrom<i32> for UnitKind {
    type Error = NetError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UnitKind::Input),
            1 => Ok(UnitKind::BiasToHidden),
            2 => Ok(UnitKind::Hidden),
            3 => Ok(UnitKind::BiasToOutput),
            4 => Ok(UnitKind::Output),
            _ => {
                error!("Incorrect value for unit kind : {}", value);
                Err(NetError::InvalidUnitKind(value))
            }
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind_str = match self {
            UnitKind::Input => "input",
            UnitKind::BiasToHidden => "bias_to_hidden",
            UnitKind::Hidden => "hidden",
            UnitKind::BiasToOutput => "bias_to_output",
            UnitKind::Output => "output",
        };

        write!(f, "{}", kind_str)
    }
}

#[derive(Clone, Debug)]
pub struct Unit {
    kind: UnitKind,
    activation: Float,
    weighted_sum: Float,
    incoming: Vec<Connection>,
}

impl Unit {
    pub fn new(kind: UnitKind) -> Self {
        let activation = if kind.is_bias() { 1.0 } else { 0.0 };

        Self {
            kind,
            activation,
            weighted_sum: 0.0,
            incoming: Vec::new(),
        }
    }

    /// Creates a unit from its numeric kind code, see [`UnitKind::try_from`]
    pub fn from_code(code: i32) -> NetResult<Self> {
        Ok(Unit::new(UnitKind::try_from(code)?))
    }

    pub fn with_incoming(kind: UnitKind, incoming: Vec<Connection>) -> NetResult<Self> {
        if !kind.is_computing() && !incoming.is_empty() {
            error!("Unit of kind {} can't have incoming connections", kind);
            return Err(NetError::UnsupportedOp {
                kind,
                op: "incoming connections",
            });
        }

        let mut unit = Unit::new(kind);
        unit.incoming = incoming;

        Ok(unit)
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Assigns the activation of an input unit. Any other kind is left untouched.
    pub fn set_input(&mut self, val: Float) -> NetResult<()> {
        if self.kind != UnitKind::Input {
            return Err(NetError::UnsupportedOp {
                kind: self.kind,
                op: "set_input",
            });
        }

        self.activation = val;
        Ok(())
    }

    /// Recomputes the weighted sum and the sigmoid activation of a hidden or output unit.
    ///
    /// `parents` is the preceding layer, its activations must already be current.
    pub fn activate(&mut self, parents: &[Unit]) -> NetResult<Float> {
        if !self.kind.is_computing() {
            return Err(NetError::UnsupportedOp {
                kind: self.kind,
                op: "activate",
            });
        }

        let mut sum = 0.0;

        for conn in self.incoming.iter() {
            let parent = parents.get(conn.source()).ok_or(NetError::InvalidSize {
                name: "parent layer",
                expected: conn.source() + 1,
                actual: parents.len(),
            })?;

            sum += conn.weight() * parent.activation();
        }

        self.weighted_sum = sum;
        self.activation = sigmoid(sum);

        Ok(self.activation)
    }

    pub fn activation(&self) -> Float {
        if self.kind.is_bias() {
            return 1.0;
        }

        self.activation
    }

    pub fn weighted_sum(&self) -> Float {
        self.weighted_sum
    }

    pub fn incoming(&self) -> &[Connection] {
        &self.incoming
    }

    pub fn incoming_mut(&mut self) -> &mut [Connection] {
        &mut self.incoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes_outside_range_are_rejected() {
        assert_eq!(UnitKind::try_from(2), Ok(UnitKind::Hidden));
        assert_eq!(UnitKind::try_from(5), Err(NetError::InvalidUnitKind(5)));
        assert!(matches!(
            Unit::from_code(-1),
            Err(NetError::InvalidUnitKind(-1))
        ));
    }

    #[test]
    fn bias_ignores_input() {
        let mut bias = Unit::new(UnitKind::BiasToHidden);

        for val in [0.0, -3.5, 42.0] {
            assert!(bias.set_input(val).is_err());
            assert_eq!(bias.activation(), 1.0);
        }

        let bias = Unit::new(UnitKind::BiasToOutput);
        assert_eq!(bias.activation(), 1.0);
    }

    #[test]
    fn set_input_only_on_input_units() {
        let mut inp = Unit::new(UnitKind::Input);
        inp.set_input(0.75).unwrap();
        assert_eq!(inp.activation(), 0.75);

        let mut hidden = Unit::new(UnitKind::Hidden);
        assert_eq!(
            hidden.set_input(0.75),
            Err(NetError::UnsupportedOp {
                kind: UnitKind::Hidden,
                op: "set_input",
            })
        );
        assert_eq!(hidden.activation(), 0.0);
    }

    #[test]
    fn activate_sums_parents() {
        let mut parents = vec![Unit::new(UnitKind::Input), Unit::new(UnitKind::Input)];
        parents[0].set_input(1.0).unwrap();
        parents[1].set_input(0.0).unwrap();
        parents.push(Unit::new(UnitKind::BiasToHidden));

        let incoming = vec![
            Connection::new(0, 0.5),
            Connection::new(1, -0.3),
            Connection::new(2, 0.1),
        ];
        let mut hidden = Unit::with_incoming(UnitKind::Hidden, incoming).unwrap();

        let out = hidden.activate(&parents).unwrap();

        assert!((hidden.weighted_sum() - 0.6).abs() < 1e-12);
        assert!((out - 0.6457).abs() < 1e-4);
        assert_eq!(out, hidden.activation());
    }

    #[test]
    fn activate_rejects_missing_parent() {
        let incoming = vec![Connection::new(3, 1.0)];
        let mut out = Unit::with_incoming(UnitKind::Output, incoming).unwrap();
        let parents = vec![Unit::new(UnitKind::BiasToOutput)];

        assert!(matches!(
            out.activate(&parents),
            Err(NetError::InvalidSize { .. })
        ));
    }

    #[test]
    fn activate_only_on_computing_units() {
        let mut inp = Unit::new(UnitKind::Input);
        assert!(inp.activate(&[]).is_err());

        let mut bias = Unit::new(UnitKind::BiasToOutput);
        assert!(bias.activate(&[]).is_err());
        assert_eq!(bias.activation(), 1.0);
    }

    #[test]
    fn incoming_rejected_for_input_and_bias() {
        let incoming = vec![Connection::new(0, 1.0)];

        assert!(Unit::with_incoming(UnitKind::Input, incoming.clone()).is_err());
        assert!(Unit::with_incoming(UnitKind::BiasToHidden, incoming).is_err());
    }
}
