use crate::domain::model::Rendering;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unsupported format '{}', expected text or json", other)),
        }
    }
}

pub fn render(rendering: &Rendering, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(rendering)),
        OutputFormat::Json => render_json(rendering),
    }
}

/// Final description and cost, then one row per link with the running result.
pub fn render_text(rendering: &Rendering) -> String {
    let desc_width = rendering
        .steps
        .iter()
        .map(|s| s.description.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&rendering.description);
    out.push('\n');
    out.push_str(&format!("cost: {}\n", rendering.cost));
    for (i, step) in rendering.steps.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {:<14}{:<width$}  {:>4}\n",
            i,
            step.layer,
            step.description,
            step.cost,
            width = desc_width
        ));
    }
    out
}

pub fn render_json(rendering: &Rendering) -> Result<String> {
    Ok(serde_json::to_string_pretty(rendering)?)
}
