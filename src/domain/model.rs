use crate::utils::error::DemoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseKind {
    Coffee,
    Tea,
}

impl BaseKind {
    pub const ALL: [BaseKind; 2] = [BaseKind::Coffee, BaseKind::Tea];

    pub fn name(&self) -> &'static str {
        match self {
            BaseKind::Coffee => "coffee",
            BaseKind::Tea => "tea",
        }
    }
}

impl fmt::Display for BaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BaseKind {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coffee" => Ok(BaseKind::Coffee),
            "tea" => Ok(BaseKind::Tea),
            _ => Err(DemoError::UnknownBase {
                name: s.trim().to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecoratorKind {
    Milk,
    Sugar,
    Caramel,
    WhippedCream,
    Large,
}

impl DecoratorKind {
    pub const ALL: [DecoratorKind; 5] = [
        DecoratorKind::Milk,
        DecoratorKind::Sugar,
        DecoratorKind::Caramel,
        DecoratorKind::WhippedCream,
        DecoratorKind::Large,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DecoratorKind::Milk => "milk",
            DecoratorKind::Sugar => "sugar",
            DecoratorKind::Caramel => "caramel",
            DecoratorKind::WhippedCream => "whipped_cream",
            DecoratorKind::Large => "large",
        }
    }

    /// Parses a comma-separated list such as `"milk, sugar,milk"`.
    /// Empty entries are skipped.
    pub fn parse_list(input: &str) -> Result<Vec<DecoratorKind>, DemoError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl fmt::Display for DecoratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DecoratorKind {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "milk" => Ok(DecoratorKind::Milk),
            "sugar" => Ok(DecoratorKind::Sugar),
            "caramel" => Ok(DecoratorKind::Caramel),
            "whipped_cream" | "whip" | "cream" => Ok(DecoratorKind::WhippedCream),
            "large" | "size" => Ok(DecoratorKind::Large),
            _ => Err(DemoError::UnknownDecorator {
                name: s.trim().to_string(),
            }),
        }
    }
}

/// Output of one chain node, innermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub layer: String,
    pub description: String,
    pub cost: u64,
}

/// What the presentation layer shows for the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendering {
    pub base: BaseKind,
    pub layers: Vec<DecoratorKind>,
    pub description: String,
    pub cost: u64,
    pub steps: Vec<Step>,
}
