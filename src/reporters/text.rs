//! Text (terminal) reporter with optional colors

use super::RenderOptions;
use crate::models::{CheckResult, Grade, ProjectResult};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";

/// Grade colors (ANSI escape codes)
fn grade_color(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "\x1b[32m", // Green
        Grade::B => "\x1b[92m", // Light green
        Grade::C => "\x1b[33m", // Yellow
        Grade::D => "\x1b[91m", // Light red
        Grade::F => "\x1b[31m", // Red
    }
}

/// Escape codes for one render; all empty when color is off
struct Palette {
    reset: &'static str,
    bold: &'static str,
    dim: &'static str,
    pass: &'static str,
    fail: &'static str,
    grade: &'static str,
}

impl Palette {
    fn new(color: bool, grade: Grade) -> Self {
        if color {
            Self {
                reset: RESET,
                bold: BOLD,
                dim: DIM,
                pass: GREEN,
                fail: RED,
                grade: grade_color(grade),
            }
        } else {
            Self {
                reset: "",
                bold: "",
                dim: "",
                pass: "",
                fail: "",
                grade: "",
            }
        }
    }
}

/// Render a plain report: compact unless `verbose`
pub fn render(result: &ProjectResult, verbose: bool) -> String {
    render_styled(
        result,
        RenderOptions {
            verbose,
            color: false,
        },
    )
}

/// Render a report with the given options
pub fn render_styled(result: &ProjectResult, options: RenderOptions) -> String {
    let p = Palette::new(options.color, result.grade());
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "{}📋 goldcheck: {}{}\n",
        p.bold,
        result.project_name(),
        p.reset
    ));
    out.push_str(&format!(
        "{}   Path: {}{}\n\n",
        p.dim,
        result.project_path().display(),
        p.reset
    ));

    for category in result.categories() {
        out.push_str(&format!(
            "  {}{}{} ({}/{})\n",
            p.bold, category.category, p.reset, category.earned, category.total
        ));

        if options.verbose {
            for check in result.checks_in(&category.category) {
                out.push_str(&check_line(check, &p));
            }
        } else {
            let passed = result
                .checks_in(&category.category)
                .filter(|c| c.passed)
                .count();
            if passed > 0 {
                out.push_str(&format!(
                    "    {}✅{} {} checks passed\n",
                    p.pass, p.reset, passed
                ));
            }
            for check in result.checks_in(&category.category).filter(|c| !c.passed) {
                out.push_str(&check_line(check, &p));
            }
        }
        out.push('\n');
    }

    let grade = result.grade();
    out.push_str(&format!(
        "  Score: {}{}/100{}  Grade: {}{}{}{} {}\n",
        p.bold,
        result.score(),
        p.reset,
        p.grade,
        p.bold,
        grade,
        p.reset,
        grade.emoji()
    ));

    let failures = result.failures();
    if !failures.is_empty() {
        out.push_str(&format!(
            "\n  {}📝 Failures ({}):{}\n\n",
            p.bold,
            failures.len(),
            p.reset
        ));
        for failure in failures {
            out.push_str(&format!(
                "  {}❌{} {} ({} pts)\n",
                p.fail, p.reset, failure.name, failure.weight
            ));
            out.push_str(&format!("     Problem: {}\n", failure.message));
            for detail in &failure.details {
                out.push_str(&format!("     {}{}{}\n", p.dim, detail, p.reset));
            }
            out.push_str(&format!("     Fix:     {}\n\n", failure.fix));
        }
    }

    out
}

fn check_line(check: &CheckResult, p: &Palette) -> String {
    let (mark, color) = if check.passed {
        ("✅", p.pass)
    } else {
        ("❌", p.fail)
    };
    let points = format!("{}/{}", check.earned(), check.weight);
    format!(
        "    {color}{mark}{} {:<30} {:>5}  {}\n",
        p.reset, check.name, points, check.message
    )
}
