use crate::domain::model::{BaseKind, DecoratorKind};
use serde::{Deserialize, Serialize};

pub const COFFEE_PRICE: u64 = 5;
pub const TEA_PRICE: u64 = 4;
pub const MILK_PRICE: u64 = 2;
pub const SUGAR_PRICE: u64 = 1;
pub const CARAMEL_PRICE: u64 = 3;
pub const WHIPPED_CREAM_PRICE: u64 = 2;
pub const LARGE_MULTIPLIER: u64 = 2;

/// Price list the assembler consults when it instantiates chain links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub coffee: u64,
    pub tea: u64,
    pub milk: u64,
    pub sugar: u64,
    pub caramel: u64,
    pub whipped_cream: u64,
    pub large_multiplier: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            coffee: COFFEE_PRICE,
            tea: TEA_PRICE,
            milk: MILK_PRICE,
            sugar: SUGAR_PRICE,
            caramel: CARAMEL_PRICE,
            whipped_cream: WHIPPED_CREAM_PRICE,
            large_multiplier: LARGE_MULTIPLIER,
        }
    }
}

impl Catalog {
    pub fn base_price(&self, kind: BaseKind) -> u64 {
        match kind {
            BaseKind::Coffee => self.coffee,
            BaseKind::Tea => self.tea,
        }
    }

    /// Additive increment, or the multiplier for `Large`.
    pub fn decorator_value(&self, kind: DecoratorKind) -> u64 {
        match kind {
            DecoratorKind::Milk => self.milk,
            DecoratorKind::Sugar => self.sugar,
            DecoratorKind::Caramel => self.caramel,
            DecoratorKind::WhippedCream => self.whipped_cream,
            DecoratorKind::Large => self.large_multiplier,
        }
    }

    /// One line per entry, used by the session's `menu` command.
    pub fn menu_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for kind in BaseKind::ALL {
            lines.push(format!("base   {:<14}{}", kind.name(), self.base_price(kind)));
        }
        for kind in DecoratorKind::ALL {
            let value = self.decorator_value(kind);
            let shown = match kind {
                DecoratorKind::Large => format!("x{}", value),
                _ => format!("+{}", value),
            };
            lines.push(format!("add-on {:<14}{}", kind.name(), shown));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prices() {
        let catalog = Catalog::default();
        assert_eq!(catalog.base_price(BaseKind::Coffee), 5);
        assert_eq!(catalog.decorator_value(DecoratorKind::Milk), 2);
        assert_eq!(catalog.decorator_value(DecoratorKind::Caramel), 3);
        assert_eq!(catalog.decorator_value(DecoratorKind::Large), 2);
    }

    #[test]
    fn test_menu_lines_cover_every_kind() {
        let lines = Catalog::default().menu_lines();
        assert_eq!(lines.len(), BaseKind::ALL.len() + DecoratorKind::ALL.len());
        assert!(lines.iter().any(|l| l.contains("large") && l.ends_with("x2")));
        assert!(lines.iter().any(|l| l.contains("milk") && l.ends_with("+2")));
    }
}
