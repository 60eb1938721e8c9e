use crate::core::catalog::Catalog;
use crate::domain::model::{BaseKind, DecoratorKind};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_PRICE: u64 = 10_000;
pub const MAX_LARGE_MULTIPLIER: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    pub menu: MenuSection,
    pub prices: Option<PriceConfig>,
    pub sizing: Option<SizingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSection {
    pub name: String,
    pub base: Option<BaseKind>,
    pub selection: Option<Vec<DecoratorKind>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceConfig {
    pub coffee: Option<u64>,
    pub tea: Option<u64>,
    pub milk: Option<u64>,
    pub sugar: Option<u64>,
    pub caramel: Option<u64>,
    pub whipped_cream: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SizingConfig {
    pub large_multiplier: Option<u64>,
}

impl MenuConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("menu.name", &self.menu.name)?;

        if let Some(prices) = &self.prices {
            let entries = [
                ("prices.coffee", prices.coffee),
                ("prices.tea", prices.tea),
                ("prices.milk", prices.milk),
                ("prices.sugar", prices.sugar),
                ("prices.caramel", prices.caramel),
                ("prices.whipped_cream", prices.whipped_cream),
            ];
            for (field, value) in entries {
                if let Some(value) = value {
                    validate_range(field, value, 0, MAX_PRICE)?;
                }
            }
        }

        if let Some(multiplier) = self.sizing.as_ref().and_then(|s| s.large_multiplier) {
            validate_range("sizing.large_multiplier", multiplier, 1, MAX_LARGE_MULTIPLIER)?;
        }

        Ok(())
    }

    pub fn base_kind(&self) -> BaseKind {
        self.menu.base.unwrap_or(BaseKind::Coffee)
    }

    pub fn selection(&self) -> Vec<DecoratorKind> {
        self.menu.selection.clone().unwrap_or_default()
    }

    /// Default prices with the configured overrides applied.
    pub fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::default();
        if let Some(prices) = &self.prices {
            catalog.coffee = prices.coffee.unwrap_or(catalog.coffee);
            catalog.tea = prices.tea.unwrap_or(catalog.tea);
            catalog.milk = prices.milk.unwrap_or(catalog.milk);
            catalog.sugar = prices.sugar.unwrap_or(catalog.sugar);
            catalog.caramel = prices.caramel.unwrap_or(catalog.caramel);
            catalog.whipped_cream = prices.whipped_cream.unwrap_or(catalog.whipped_cream);
        }
        if let Some(multiplier) = self.sizing.as_ref().and_then(|s| s.large_multiplier) {
            catalog.large_multiplier = multiplier;
        }
        catalog
    }
}

impl Validate for MenuConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_menu() {
        let toml_content = r#"
[menu]
name = "house"
base = "tea"
selection = ["milk", "whipped_cream", "milk"]

[prices]
milk = 3

[sizing]
large_multiplier = 3
"#;

        let config = MenuConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.menu.name, "house");
        assert_eq!(config.base_kind(), BaseKind::Tea);
        assert_eq!(
            config.selection(),
            vec![DecoratorKind::Milk, DecoratorKind::WhippedCream, DecoratorKind::Milk]
        );

        let catalog = config.catalog();
        assert_eq!(catalog.milk, 3);
        assert_eq!(catalog.sugar, 1);
        assert_eq!(catalog.large_multiplier, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_menu_uses_defaults() {
        let config = MenuConfig::from_toml_str("[menu]\nname = \"plain\"\n").unwrap();
        assert_eq!(config.base_kind(), BaseKind::Coffee);
        assert!(config.selection().is_empty());
        assert_eq!(config.catalog(), Catalog::default());
    }

    #[test]
    fn test_unknown_decorator_is_a_parse_error() {
        let result = MenuConfig::from_toml_str(
            r#"
[menu]
name = "bad"
selection = ["soy"]
"#,
        );
        assert!(matches!(result, Err(DemoError::ConfigError { .. })));
    }

    #[test]
    fn test_config_validation() {
        let too_expensive = MenuConfig::from_toml_str(
            r#"
[menu]
name = "pricey"

[prices]
caramel = 20000
"#,
        )
        .unwrap();
        assert!(too_expensive.validate().is_err());

        let zero_multiplier = MenuConfig::from_toml_str(
            r#"
[menu]
name = "tiny"

[sizing]
large_multiplier = 0
"#,
        )
        .unwrap();
        assert!(zero_multiplier.validate().is_err());

        let blank_name = MenuConfig::from_toml_str("[menu]\nname = \" \"\n").unwrap();
        assert!(blank_name.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[menu]
name = "file-test"
selection = ["caramel"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = MenuConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.menu.name, "file-test");
        assert_eq!(config.selection(), vec![DecoratorKind::Caramel]);
    }

    #[test]
    fn test_toml_syntax_error_is_config_error() {
        let err = MenuConfig::from_toml_str("[menu\nname = \"broken\"").unwrap_err();
        assert!(matches!(
            err,
            DemoError::ConfigError { ref message } if message.starts_with("TOML parsing error")
        ));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = MenuConfig::from_file("/definitely/not/here/menu.toml");
        assert!(matches!(result, Err(DemoError::IoError(_))));
    }
}
