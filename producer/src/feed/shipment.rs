//! Shipment record parsed from one feed row.

/// One shipment read from the feed.
///
/// The cost is rounded to 2 decimal places on construction and never changes
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    /// Shipment mode, taken verbatim from the first column
    pub mode: String,
    /// Shipment cost, rounded to 2 decimal places
    pub cost: f64,
}

impl Shipment {
    /// Create a shipment, rounding the raw cost to 2 decimal places.
    pub fn new(mode: impl Into<String>, raw_cost: f64) -> Self {
        Self {
            mode: mode.into(),
            cost: round_to_cents(raw_cost),
        }
    }
}

fn round_to_cents(cost: f64) -> f64 {
    (cost * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_rounded_to_two_places() {
        assert_eq!(Shipment::new("Air", 45.126).cost, 45.13);
        assert_eq!(Shipment::new("Air", 45.124).cost, 45.12);
        assert_eq!(Shipment::new("Air", 45.1).cost, 45.1);
    }

    #[test]
    fn test_rounding_can_cross_a_threshold() {
        assert_eq!(Shipment::new("Air", 99999.999).cost, 100000.0);
    }

    #[test]
    fn test_mode_kept_verbatim() {
        let shipment = Shipment::new(" Ground Freight ", 12.0);
        assert_eq!(shipment.mode, " Ground Freight ");
    }
}
