use crate::app::OutputFormat;
use crate::config::toml_config::MenuConfig;
use crate::core::catalog::Catalog;
use crate::domain::model::{BaseKind, DecoratorKind};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "decorator-showcase")]
#[command(about = "Wraps a beverage in add-on decorators and shows the composed result")]
pub struct CliConfig {
    /// Base beverage (coffee or tea); overrides the menu file
    #[arg(long)]
    pub base: Option<String>,

    /// Comma-separated add-ons, innermost first (e.g. milk,caramel,large)
    #[arg(long = "with", value_name = "ADDONS")]
    pub with: Option<String>,

    /// Path to a TOML menu file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format for one-shot rendering: text or json (use the `json` command in a session)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Start an interactive session on stdin
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn base_kind(&self) -> Result<Option<BaseKind>> {
        self.base.as_deref().map(str::parse).transpose()
    }

    pub fn selection(&self) -> Result<Option<Vec<DecoratorKind>>> {
        self.with.as_deref().map(DecoratorKind::parse_list).transpose()
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format
            .parse::<OutputFormat>()
            .map_err(|reason| DemoError::InvalidConfigValueError {
                field: "format".to_string(),
                value: self.format.clone(),
                reason,
            })
    }

    /// Base, selection and prices for the chain to show.
    ///
    /// `--base` and `--with` take precedence over the menu; without either
    /// source the chain is plain coffee. Prices only come from the menu.
    pub fn resolve(
        &self,
        menu: Option<&MenuConfig>,
    ) -> Result<(BaseKind, Vec<DecoratorKind>, Catalog)> {
        let base = self
            .base_kind()?
            .or_else(|| menu.map(MenuConfig::base_kind))
            .unwrap_or(BaseKind::Coffee);
        let selection = match self.selection()? {
            Some(selection) => selection,
            None => menu.map(MenuConfig::selection).unwrap_or_default(),
        };
        let catalog = menu.map(MenuConfig::catalog).unwrap_or_default();
        Ok((base, selection, catalog))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.base_kind()?;
        self.selection()?;
        let format = self.output_format()?;
        if self.interactive && format != OutputFormat::Text {
            return Err(DemoError::InvalidConfigValueError {
                field: "format".to_string(),
                value: self.format.clone(),
                reason: "--format only applies to one-shot output; use the 'json' command inside the session".to_string(),
            });
        }
        Ok(())
    }
}
