use crate::core::catalog::{COFFEE_PRICE, TEA_PRICE};
use crate::domain::ports::Component;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coffee {
    price: u64,
}

impl Coffee {
    pub fn new() -> Self {
        Self::with_price(COFFEE_PRICE)
    }

    pub fn with_price(price: u64) -> Self {
        Self { price }
    }
}

impl Default for Coffee {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Coffee {
    fn describe(&self) -> String {
        "Coffee".to_string()
    }

    fn cost(&self) -> u64 {
        self.price
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tea {
    price: u64,
}

impl Tea {
    pub fn new() -> Self {
        Self::with_price(TEA_PRICE)
    }

    pub fn with_price(price: u64) -> Self {
        Self { price }
    }
}

impl Default for Tea {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Tea {
    fn describe(&self) -> String {
        "Tea".to_string()
    }

    fn cost(&self) -> u64 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bases_have_fixed_results() {
        let coffee = Coffee::new();
        assert_eq!(coffee.describe(), "Coffee");
        assert_eq!(coffee.cost(), 5);

        let tea = Tea::new();
        assert_eq!(tea.describe(), "Tea");
        assert_eq!(tea.cost(), 4);
    }

    #[test]
    fn test_price_override() {
        assert_eq!(Coffee::with_price(7).cost(), 7);
        assert_eq!(Tea::with_price(0).cost(), 0);
    }
}
