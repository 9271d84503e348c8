//! List command - print the check registry

use crate::checks::registry::{self, Category};
use crate::checks::REGISTRY;
use crate::error::EngineError;
use anyhow::Result;
use console::style;
use serde::Serialize;

#[derive(Serialize)]
struct ListedCheck {
    category: &'static str,
    name: &'static str,
    weight: u32,
    description: &'static str,
}

/// Categories to list; an empty name means all of them, as in `check`
fn selected(category: Option<&str>) -> Result<Vec<&'static Category>> {
    match category.filter(|c| !c.is_empty()) {
        None => Ok(REGISTRY.iter().collect()),
        Some(name) => match registry::find_category(name) {
            Some(found) => Ok(vec![found]),
            None => Err(EngineError::UnknownCategory {
                category: name.to_string(),
                valid: registry::category_names(),
            }
            .into()),
        },
    }
}

fn listed(categories: &[&'static Category]) -> Vec<ListedCheck> {
    categories
        .iter()
        .flat_map(|c| c.checks.iter())
        .map(|d| ListedCheck {
            category: d.category,
            name: d.name,
            weight: d.weight,
            description: d.description,
        })
        .collect()
}

fn render_table(categories: &[&'static Category]) -> String {
    let mut out = String::new();
    let mut count = 0;
    let mut points = 0;
    for category in categories {
        out.push_str(&format!(
            "{} ({} pts)\n",
            style(category.name).bold(),
            category.total_weight()
        ));
        for def in category.checks {
            out.push_str(&format!(
                "  {:<32} {:>2}  {}\n",
                def.name, def.weight, def.description
            ));
        }
        out.push('\n');
        count += category.checks.len();
        points += category.total_weight();
    }
    out.push_str(&format!("{} checks, {} points\n", count, points));
    out
}

/// Run the list command
pub fn run(category: Option<&str>, json: bool) -> Result<()> {
    let categories = selected(category)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&listed(&categories))?);
    } else {
        print!("{}", render_table(&categories));
    }
    Ok(())
}
