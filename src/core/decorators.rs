//! Add-on wrappers. Each one owns exactly one inner component and is itself a
//! [`Component`], so they nest in any order and any multiplicity.

use crate::core::catalog::{
    CARAMEL_PRICE, LARGE_MULTIPLIER, MILK_PRICE, SUGAR_PRICE, WHIPPED_CREAM_PRICE,
};
use crate::domain::ports::Component;

/// Declares a decorator that appends ` + <label>` and adds a fixed price.
macro_rules! additive_decorator {
    ($(#[$meta:meta])* $name:ident, $label:literal, $default_price:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            inner: Box<dyn Component>,
            price: u64,
        }

        impl $name {
            pub fn new(inner: Box<dyn Component>) -> Self {
                Self::with_price(inner, $default_price)
            }

            pub fn with_price(inner: Box<dyn Component>, price: u64) -> Self {
                Self { inner, price }
            }

            pub fn inner(&self) -> &dyn Component {
                self.inner.as_ref()
            }
        }

        impl Component for $name {
            fn describe(&self) -> String {
                format!("{} + {}", self.inner.describe(), $label)
            }

            fn cost(&self) -> u64 {
                self.inner.cost().saturating_add(self.price)
            }
        }
    };
}

additive_decorator!(Milk, "Milk", MILK_PRICE);
additive_decorator!(Sugar, "Sugar", SUGAR_PRICE);
additive_decorator!(Caramel, "Caramel", CARAMEL_PRICE);
additive_decorator!(WhippedCream, "Whipped Cream", WHIPPED_CREAM_PRICE);

/// Size upgrade. Unlike the additive add-ons its position in the chain
/// changes the total: everything inside it is multiplied.
#[derive(Debug)]
pub struct Large {
    inner: Box<dyn Component>,
    multiplier: u64,
}

impl Large {
    pub fn new(inner: Box<dyn Component>) -> Self {
        Self::with_multiplier(inner, LARGE_MULTIPLIER)
    }

    pub fn with_multiplier(inner: Box<dyn Component>, multiplier: u64) -> Self {
        Self { inner, multiplier }
    }

    pub fn inner(&self) -> &dyn Component {
        self.inner.as_ref()
    }
}

impl Component for Large {
    fn describe(&self) -> String {
        format!("Large {}", self.inner.describe())
    }

    fn cost(&self) -> u64 {
        self.inner.cost().saturating_mul(self.multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::base::Coffee;

    fn coffee() -> Box<dyn Component> {
        Box::new(Coffee::new())
    }

    #[test]
    fn test_milk_appends_and_adds() {
        let drink = Milk::new(coffee());
        assert_eq!(drink.describe(), "Coffee + Milk");
        assert_eq!(drink.cost(), 7);
    }

    #[test]
    fn test_decorators_nest() {
        let drink = WhippedCream::new(Box::new(Sugar::new(Box::new(Caramel::new(coffee())))));
        assert_eq!(drink.describe(), "Coffee + Caramel + Sugar + Whipped Cream");
        assert_eq!(drink.cost(), 5 + 3 + 1 + 2);
    }

    #[test]
    fn test_inner_exposes_wrapped_link() {
        let drink = Milk::new(Box::new(Sugar::new(coffee())));
        assert_eq!(drink.inner().describe(), "Coffee + Sugar");
    }

    #[test]
    fn test_large_multiplies_everything_inside() {
        let inside = Large::new(Box::new(Milk::new(coffee())));
        assert_eq!(inside.describe(), "Large Coffee + Milk");
        assert_eq!(inside.cost(), 14);

        let outside = Milk::new(Box::new(Large::new(coffee())));
        assert_eq!(outside.describe(), "Large Coffee + Milk");
        assert_eq!(outside.cost(), 12);
    }

    #[test]
    fn test_costs_saturate() {
        let drink = Large::with_multiplier(Box::new(Milk::with_price(coffee(), u64::MAX)), 3);
        assert_eq!(drink.cost(), u64::MAX);
    }
}
