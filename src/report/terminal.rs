use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{DependencyRecord, LicenseCategory, Risk, ScanResult};

const BOX_INNER_WIDTH: usize = 52;
/// Visible text width inside the box borders and margins.
const BOX_TEXT_WIDTH: usize = BOX_INNER_WIDTH - 3;

/// One summary box line. `symbol` may carry color codes and must be one
/// visible character wide (or empty); padding is applied to `text` only.
fn box_row(symbol: &str, text: &str) -> String {
    if symbol.is_empty() {
        return format!(" │  {:<1$} │", text, BOX_TEXT_WIDTH);
    }
    format!(" │  {}  {:<2$} │", symbol, text, BOX_TEXT_WIDTH - 3)
}

/// Render a colored terminal report listing at most `limit` entries per
/// category that needs review.
pub fn render(result: &ScanResult, path: &Path, limit: usize, quiet: bool) {
    if quiet {
        println!("{}", summary_line(result));
        return;
    }

    let s = &result.summary;

    println!(
        "\n {} v{}",
        "dep-license-scanner".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Workspace: {}  ({} projects)\n", path.display(), s.projects);

    println!(" ┌{}┐", "─".repeat(BOX_INNER_WIDTH));
    println!(
        " │  {} │",
        format!("{:<1$}", "LICENSE SCANNER SUMMARY", BOX_TEXT_WIDTH).bold()
    );
    println!("{}", box_row("", &format!("Total dependencies : {}", s.total_scanned)));
    println!(
        "{}",
        box_row(
            &"✓".green().to_string(),
            &format!("Permissive      : {:>4}", s.permissive)
        )
    );
    println!(
        "{}",
        box_row(
            &"⚠".yellow().to_string(),
            &format!("Copyleft        : {:>4}", s.copyleft)
        )
    );
    println!(
        "{}",
        box_row(
            &"✗".red().to_string(),
            &format!("Unknown         : {:>4}", s.unknown)
        )
    );
    if s.proprietary > 0 {
        println!(
            "{}",
            box_row(
                &"●".magenta().to_string(),
                &format!("Proprietary     : {:>4}", s.proprietary)
            )
        );
    }
    println!(" └{}┘\n", "─".repeat(BOX_INNER_WIDTH));

    if !result.copyleft.is_empty() {
        println!(
            " {} Copyleft licenses (may have restrictions):\n",
            "[COPYLEFT]".yellow().bold()
        );
        print_entries(&result.copyleft, limit);
    }

    if !result.unknown.is_empty() {
        println!(" {} Unknown licenses:\n", "[UNKNOWN]".red().bold());
        print_entries(&result.unknown, limit);
    }

    if !result.proprietary.is_empty() {
        println!(
            " {} Proprietary licenses:\n",
            "[PROPRIETARY]".magenta().bold()
        );
        print_entries(&result.proprietary, limit);
    }
}

/// One-line summary used by `--quiet`.
pub fn summary_line(result: &ScanResult) -> String {
    let s = &result.summary;
    let mut line = format!(
        "Total: {}  Permissive: {}  Copyleft: {}  Unknown: {}",
        s.total_scanned,
        s.permissive.to_string().green(),
        s.copyleft.to_string().yellow(),
        s.unknown.to_string().red(),
    );
    if s.proprietary > 0 {
        line.push_str(&format!(
            "  Proprietary: {}",
            s.proprietary.to_string().magenta()
        ));
    }
    line
}

fn print_entries(entries: &[DependencyRecord], limit: usize) {
    println!("{}", entries_table(entries, limit));
    if entries.len() > limit {
        println!(" … and {} more\n", entries.len() - limit);
    } else {
        println!();
    }
}

/// Table of the first `limit` entries.
pub fn entries_table(entries: &[DependencyRecord], limit: usize) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Package").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("Project").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Risk").add_attribute(Attribute::Bold),
            Cell::new("Commercial").add_attribute(Attribute::Bold),
        ]);

    for dep in entries.iter().take(limit) {
        let license_color = match dep.category {
            LicenseCategory::Permissive => Color::Green,
            LicenseCategory::Copyleft => Color::Yellow,
            LicenseCategory::Proprietary => Color::Magenta,
            LicenseCategory::Unknown => Color::Red,
        };

        let risk_color = match dep.risk {
            Risk::Low => Color::Green,
            Risk::Medium => Color::Yellow,
            Risk::High => Color::Red,
        };

        let commercial = if dep.commercial { "yes" } else { "no" };

        table.add_row(vec![
            Cell::new(&dep.package),
            Cell::new(&dep.version),
            Cell::new(&dep.project),
            Cell::new(&dep.license).fg(license_color),
            Cell::new(dep.risk.to_string()).fg(risk_color),
            Cell::new(commercial).set_alignment(CellAlignment::Center),
        ]);
    }

    table
}
