//! Resource conversion at the market

use super::Resource;

/// Converts one resource into another at the ratio of their values.
///
/// With `rate = value(output) / value(input)`:
/// - a cheaper output (`rate < 1`) yields `1 / rate` outputs per input
/// - a pricier output costs `rate` inputs per output
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceConverter {
    pub input: Resource,
    pub output: Resource,
    transactions: u32,
}

impl Default for ResourceConverter {
    fn default() -> Self {
        ResourceConverter {
            input: Resource::Lumber,
            output: Resource::Lumber,
            transactions: 1,
        }
    }
}

impl ResourceConverter {
    pub fn new(input: Resource, output: Resource) -> Self {
        ResourceConverter {
            input,
            output,
            transactions: 1,
        }
    }

    pub fn transactions(&self) -> u32 {
        self.transactions
    }

    /// Set the number of transactions (never below 1)
    pub fn set_transactions(&mut self, transactions: u32) {
        self.transactions = transactions.max(1);
    }

    pub fn conversion_rate(&self) -> f64 {
        if self.input == Resource::None || self.output == Resource::None {
            return 0.0;
        }
        self.output.value() as f64 / self.input.value() as f64
    }

    pub fn output_amount(&self) -> f64 {
        let rate = self.conversion_rate();
        if rate <= 0.0 {
            return 0.0;
        }
        let per = if rate < 1.0 { 1.0 / rate } else { 1.0 };
        self.transactions as f64 * per
    }

    pub fn input_amount(&self) -> f64 {
        let rate = self.conversion_rate();
        if rate <= 0.0 {
            return 0.0;
        }
        let per = if rate < 1.0 { 1.0 } else { rate };
        self.transactions as f64 * per
    }

    /// A trade is valid when both sides are real resources and whole numbers of cards
    pub fn is_valid(&self) -> bool {
        let output = self.output_amount();
        let input = self.input_amount();
        self.transactions > 0
            && self.input != Resource::None
            && self.output != Resource::None
            && output == output.floor()
            && input == input.floor()
    }

    pub fn reset(&mut self) {
        self.input = Resource::None;
        self.output = Resource::None;
        self.transactions = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cheap_to_expensive() {
        // Lumber (1) -> Gold (4): 4 lumber per gold
        let conv = ResourceConverter::new(Resource::Lumber, Resource::Gold);
        assert!((conv.conversion_rate() - 4.0).abs() < f64::EPSILON);
        assert!((conv.input_amount() - 4.0).abs() < f64::EPSILON);
        assert!((conv.output_amount() - 1.0).abs() < f64::EPSILON);
        assert!(conv.is_valid());
    }

    #[test]
    fn test_expensive_to_cheap() {
        // Gold (4) -> Rum (2): 1 gold gives 2 rum
        let mut conv = ResourceConverter::new(Resource::Gold, Resource::Rum);
        conv.set_transactions(3);
        assert!((conv.input_amount() - 3.0).abs() < f64::EPSILON);
        assert!((conv.output_amount() - 6.0).abs() < f64::EPSILON);
        assert!(conv.is_valid());
    }

    #[test]
    fn test_fractional_trade_is_invalid() {
        // Spices (3) -> Rum (2): 1 spice gives 1.5 rum
        let conv = ResourceConverter::new(Resource::Spices, Resource::Rum);
        assert!(!conv.is_valid());

        // Rum (2) -> Spices (3): 1.5 rum per spice
        let conv = ResourceConverter::new(Resource::Rum, Resource::Spices);
        assert!(!conv.is_valid());
    }

    #[test]
    fn test_none_side_is_invalid() {
        let mut conv = ResourceConverter::new(Resource::Iron, Resource::Gold);
        conv.reset();
        assert_eq!(conv.conversion_rate(), 0.0);
        assert_eq!(conv.output_amount(), 0.0);
        assert!(!conv.is_valid());
    }

    #[test]
    fn test_transactions_floor_at_one() {
        let mut conv = ResourceConverter::default();
        conv.set_transactions(0);
        assert_eq!(conv.transactions(), 1);
    }
}
