//! Documentation checks: MkDocs site and README

use super::{with_text, CheckDef, Outcome};
use std::path::Path;

const CATEGORY: &str = "docs";

pub(crate) const CHECKS: &[CheckDef] = &[
    CheckDef {
        name: "docs.mkdocs_exists",
        category: CATEGORY,
        weight: 3,
        description: "mkdocs.yml exists",
        predicate: check_mkdocs_exists,
    },
    CheckDef {
        name: "docs.diataxis_nav",
        category: CATEGORY,
        weight: 3,
        description: "Nav covers Tutorials, How-To, Reference, Explanation",
        predicate: check_diataxis_nav,
    },
    CheckDef {
        name: "docs.plugins",
        category: CATEGORY,
        weight: 3,
        description: "gen-files, literate-nav and mkdocstrings plugins",
        predicate: check_plugins,
    },
    CheckDef {
        name: "docs.gen_ref_pages",
        category: CATEGORY,
        weight: 2,
        description: "docs/gen_ref_pages.py generates the API reference",
        predicate: check_gen_ref_pages,
    },
    CheckDef {
        name: "docs.readme",
        category: CATEGORY,
        weight: 3,
        description: "README has Features, Installation, Development, License",
        predicate: check_readme,
    },
];

const PLUGINS: [&str; 3] = ["gen-files", "literate-nav", "mkdocstrings"];

/// (section, accepted lowercase spellings)
const DIATAXIS_SECTIONS: [(&str, &[&str]); 4] = [
    ("Tutorials", &["tutorial"]),
    ("How-To", &["how-to", "howto"]),
    ("Reference", &["reference"]),
    ("Explanation", &["explanation"]),
];

/// (section, lowercase heading prefix)
const README_SECTIONS: [(&str, &str); 4] = [
    ("Features", "## features"),
    ("Installation", "## install"),
    ("Development", "## develop"),
    ("License", "## license"),
];

const MKDOCS: &str = "mkdocs.yml";

fn check_mkdocs_exists(root: &Path) -> Outcome {
    with_text(
        root,
        MKDOCS,
        || {
            Outcome::fail(
                "mkdocs.yml not found",
                "Create mkdocs.yml with Material theme and Diátaxis navigation.",
            )
        },
        |_| Outcome::pass("mkdocs.yml found"),
    )
}

fn check_diataxis_nav(root: &Path) -> Outcome {
    with_text(
        root,
        MKDOCS,
        || {
            Outcome::fail(
                "mkdocs.yml not found",
                "Create mkdocs.yml with Diátaxis nav structure.",
            )
        },
        |content| {
            let content = content.to_lowercase();
            let (present, missing): (Vec<&str>, Vec<&str>) = DIATAXIS_SECTIONS
                .iter()
                .map(|(section, spellings)| {
                    (*section, spellings.iter().any(|s| content.contains(s)))
                })
                .fold((vec![], vec![]), |(mut present, mut missing), (section, found)| {
                    if found {
                        present.push(section);
                    } else {
                        missing.push(section);
                    }
                    (present, missing)
                });
            if missing.is_empty() {
                return Outcome::pass("Full Diátaxis nav structure");
            }
            Outcome::fail(
                format!("Diátaxis nav incomplete: missing {} section(s)", missing.len()),
                format!("Add {} section(s) to mkdocs.yml nav.", missing.join(", ")),
            )
            .with_detail(format!("Missing: {}", missing.join(", ")))
            .with_detail(format!("Present: {}", present.join(", ")))
        },
    )
}

fn check_plugins(root: &Path) -> Outcome {
    with_text(
        root,
        MKDOCS,
        || {
            Outcome::fail(
                "mkdocs.yml not found",
                "Create mkdocs.yml with gen-files, literate-nav, mkdocstrings plugins.",
            )
        },
        |content| {
            let missing: Vec<&str> = PLUGINS
                .iter()
                .copied()
                .filter(|plugin| !content.contains(plugin))
                .collect();
            if missing.is_empty() {
                return Outcome::pass("All plugins configured");
            }
            Outcome::fail(
                format!("Missing {} plugin(s)", missing.len()),
                format!("Add {} to mkdocs.yml plugins.", missing.join(", ")),
            )
            .with_detail(format!("Missing: {}", missing.join(", ")))
        },
    )
}

fn check_gen_ref_pages(root: &Path) -> Outcome {
    if !root.join("docs").join("gen_ref_pages.py").is_file() {
        return Outcome::fail(
            "docs/gen_ref_pages.py not found",
            "Create docs/gen_ref_pages.py for automatic API reference generation.",
        )
        .with_detail("Auto-gen script needed for mkdocstrings API reference");
    }
    Outcome::pass("gen_ref_pages.py found")
}

fn check_readme(root: &Path) -> Outcome {
    with_text(
        root,
        "README.md",
        || {
            Outcome::fail(
                "README.md not found",
                "Create README.md with Features, Installation, Development and License sections.",
            )
        },
        |content| {
            let content = content.to_lowercase();
            let missing: Vec<&str> = README_SECTIONS
                .iter()
                .filter(|(_, heading)| !content.contains(heading))
                .map(|(section, _)| *section)
                .collect();
            if missing.is_empty() {
                return Outcome::pass("README follows standard");
            }
            Outcome::fail(
                format!("README missing {} section(s)", missing.len()),
                format!("Add {} section(s) to README.md.", missing.join(", ")),
            )
            .with_detail(format!("Missing: {}", missing.join(", ")))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testutil::{empty_project, gold_project, write, write_bytes, NOT_UTF8};

    #[test]
    fn test_gold_passes_every_check() {
        let gold = gold_project();
        for def in CHECKS {
            let result = def.run(gold.path());
            assert!(result.passed, "{} failed on gold: {}", def.name, result.message);
        }
    }

    #[test]
    fn test_empty_fails_every_check_with_fix() {
        let empty = empty_project();
        for def in CHECKS {
            let result = def.run(empty.path());
            assert!(!result.passed, "{} passed on empty dir", def.name);
            assert!(!result.fix.is_empty(), "{} has no fix", def.name);
        }
    }

    #[test]
    fn test_diataxis_partial_nav() {
        let dir = empty_project();
        write(
            dir.path(),
            "mkdocs.yml",
            "nav:\n  - Tutorials: t.md\n  - Reference: r.md\n",
        );
        let outcome = check_diataxis_nav(dir.path());
        assert!(!outcome.passed);
        assert_eq!(
            outcome.details,
            vec!["Missing: How-To, Explanation", "Present: Tutorials, Reference"]
        );
    }

    #[test]
    fn test_diataxis_accepts_howto_spelling() {
        let dir = empty_project();
        write(
            dir.path(),
            "mkdocs.yml",
            "nav:\n  - tutorials/a.md\n  - howto/b.md\n  - reference/c.md\n  - explanation/d.md\n",
        );
        assert!(check_diataxis_nav(dir.path()).passed);
    }

    #[test]
    fn test_plugins_missing_one() {
        let dir = empty_project();
        write(dir.path(), "mkdocs.yml", "plugins:\n  - gen-files\n  - mkdocstrings\n");
        let outcome = check_plugins(dir.path());
        assert!(!outcome.passed);
        assert_eq!(outcome.details, vec!["Missing: literate-nav"]);
    }

    #[test]
    fn test_readme_headings_case_insensitive() {
        let dir = empty_project();
        write(
            dir.path(),
            "README.md",
            "# x\n\n## FEATURES\n\n## Install\n\n## Developing\n\n## license\n",
        );
        assert!(check_readme(dir.path()).passed);
    }

    #[test]
    fn test_readme_missing_sections() {
        let dir = empty_project();
        write(dir.path(), "README.md", "# x\n\n## Features\n");
        let outcome = check_readme(dir.path());
        assert!(!outcome.passed);
        assert_eq!(outcome.message, "README missing 3 section(s)");
        assert_eq!(outcome.details, vec!["Missing: Installation, Development, License"]);
    }

    #[test]
    fn test_unreadable_files_are_not_reported_missing() {
        let dir = empty_project();
        write_bytes(dir.path(), MKDOCS, NOT_UTF8);
        write_bytes(dir.path(), "README.md", NOT_UTF8);

        let readme = check_readme(dir.path());
        assert!(!readme.passed);
        assert_eq!(readme.message, "README.md exists but could not be read");
        assert!(readme.fix.starts_with("Re-save README.md"));

        for outcome in [
            check_mkdocs_exists(dir.path()),
            check_diataxis_nav(dir.path()),
            check_plugins(dir.path()),
        ] {
            assert!(!outcome.passed);
            assert_eq!(outcome.message, "mkdocs.yml exists but could not be read");
        }
    }
}
