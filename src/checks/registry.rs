//! Static check registry
//!
//! Categories and their checks in display order. The engine only walks this
//! table, so adding a check means adding one [`CheckDef`] to its category.

use super::{changelog, ci, deps, docs, pyproject, structure, tooling, CheckDef};

/// A named group of checks
#[derive(Debug)]
pub struct Category {
    pub name: &'static str,
    pub checks: &'static [CheckDef],
}

impl Category {
    pub fn total_weight(&self) -> u32 {
        self.checks.iter().map(|c| c.weight).sum()
    }
}

pub static REGISTRY: &[Category] = &[
    Category {
        name: "pyproject",
        checks: pyproject::CHECKS,
    },
    Category {
        name: "ci",
        checks: ci::CHECKS,
    },
    Category {
        name: "tooling",
        checks: tooling::CHECKS,
    },
    Category {
        name: "docs",
        checks: docs::CHECKS,
    },
    Category {
        name: "structure",
        checks: structure::CHECKS,
    },
    Category {
        name: "deps",
        checks: deps::CHECKS,
    },
    Category {
        name: "changelog",
        checks: changelog::CHECKS,
    },
];

/// Look up a category by name
pub fn find_category(name: &str) -> Option<&'static Category> {
    REGISTRY.iter().find(|c| c.name == name)
}

/// Sorted category names, for usage errors and help text
pub fn category_names() -> Vec<String> {
    let mut names: Vec<String> = REGISTRY.iter().map(|c| c.name.to_string()).collect();
    names.sort();
    names
}

/// Every registered check in registry order
pub fn all_checks() -> impl Iterator<Item = &'static CheckDef> {
    REGISTRY.iter().flat_map(|c| c.checks.iter())
}

pub fn find_check(name: &str) -> Option<&'static CheckDef> {
    all_checks().find(|c| c.name == name)
}

/// Sum of every registered weight
pub fn total_weight() -> u32 {
    REGISTRY.iter().map(Category::total_weight).sum()
}
