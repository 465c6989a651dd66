//! Output formatting for the CLI.

use crate::commands::CityPlan;
use crate::error::Result;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use tessera_budget::CategoryGates;
use tessera_domain::{Gates, VenueCaps};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format derived venue caps.
    pub fn format_caps(&self, caps: &VenueCaps) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(caps)?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Max count", "Per-tile max"]);
                builder.push_record([caps.max_count.to_string(), caps.per_tile_max.to_string()]);
                Ok(render(builder))
            }
        }
    }

    /// Format baseline gates and any per-category gates.
    pub fn format_gates(&self, base: &Gates, categories: &[CategoryGates]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "base": base,
                "categories": categories,
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Category", "Thin", "Min rating", "Min reviews"]);
                builder.push_record([
                    "(base)".to_string(),
                    "-".to_string(),
                    format_rating(base.min_rating),
                    base.min_reviews.to_string(),
                ]);
                for category in categories {
                    builder.push_record([
                        category.category.clone(),
                        yes_no(category.thin).to_string(),
                        format_rating(category.gates.min_rating),
                        category.gates.min_reviews.to_string(),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a single thin-category check.
    pub fn format_thin(&self, slug: &str, thin: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "category": slug,
                "thin": thin,
            }))?),
            OutputFormat::Table => Ok(if thin {
                format!("{} is a thin category", slug)
            } else {
                format!("{} is not a thin category", slug)
            }),
        }
    }

    /// Format the thin-category list.
    pub fn format_thin_list(&self, slugs: &[&str]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(slugs)?),
            OutputFormat::Table => Ok(slugs.join("\n")),
        }
    }

    /// Format city plans.
    pub fn format_plans(&self, plans: &[CityPlan]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(plans)?),
            OutputFormat::Table => {
                if plans.is_empty() {
                    return Ok("No cities found.".to_string());
                }

                let mut builder = Builder::default();
                builder.push_record([
                    "City",
                    "Max count",
                    "Per-tile max",
                    "Caps",
                    "Category",
                    "Min rating",
                    "Min reviews",
                    "Gates",
                ]);

                for plan in plans {
                    let budget = &plan.budget;
                    let mut rows = vec![("(base)".to_string(), budget.gates)];
                    rows.extend(
                        plan.categories
                            .iter()
                            .map(|category| (category.category.clone(), category.gates)),
                    );

                    for (category, gates) in rows {
                        builder.push_record([
                            budget.city.clone(),
                            budget.caps.max_count.to_string(),
                            budget.caps.per_tile_max.to_string(),
                            budget.caps_source.as_str().to_string(),
                            category,
                            format_rating(gates.min_rating),
                            gates.min_reviews.to_string(),
                            budget.gates_source.as_str().to_string(),
                        ]);
                    }
                }

                Ok(render(builder))
            }
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

/// Rating with one decimal.
fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
