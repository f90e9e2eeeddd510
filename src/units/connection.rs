use crate::util::Float;

/// Weighted edge from a unit of the preceding layer.
///
/// The source unit is referenced by its position in that layer, the layer itself
/// is owned by the network.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    source: usize,
    weight: Float,
}

impl Connection {
    pub fn new(source: usize, weight: Float) -> Self {
        Self { source, weight }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn weight(&self) -> Float {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Float) {
        self.weight = weight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_is_updated_in_place() {
        let mut conn = Connection::new(2, 0.25);
        conn.set_weight(conn.weight() - 0.5);

        assert_eq!(conn.weight(), -0.25);
        assert_eq!(conn.source(), 2);
    }
}
