use std::io::{self, Write};

use radmc_tools::{BundleReport, DiskModel};

const INDENT: &str = "      ";
const KEY_WIDTH: usize = 16;
const VALUE_WIDTH: usize = 32;

pub fn print_model_summary(model: &DiskModel) {
    let grid = model.grid();
    let (nr, nth, nphi) = grid.shape();
    let names = |names: Vec<&str>| {
        if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        }
    };

    let rows = vec![
        ("Grid (r×θ×φ)", format!("{nr} × {nth} × {nphi}")),
        ("Cells", grid.cell_count().to_string()),
        ("Molecules", names(model.molecules().names().collect())),
        ("Dust species", names(model.dust().names().collect())),
        (
            "Midplane",
            if grid.brackets_midplane() {
                "on grid".to_string()
            } else {
                "not on grid".to_string()
            },
        ),
    ];

    print_kv_table(&mut io::stderr().lock(), "Model Summary", &rows);
}

pub fn print_bundle_summary(report: &BundleReport) {
    let rows = vec![
        ("Directory", report.output_dir.display().to_string()),
        ("Files written", report.written.len().to_string()),
        ("Tables staged", report.staged.len().to_string()),
    ];

    print_kv_table(&mut io::stderr().lock(), "Bundle", &rows);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let k_line = "─".repeat(KEY_WIDTH + 2);
    let v_line = "─".repeat(VALUE_WIDTH + 2);

    let _ = writeln!(out, "{INDENT}┌─ {title} ─┐");
    let _ = writeln!(out, "{INDENT}┌{k_line}┬{v_line}┐");
    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<kw$} │ {:>vw$} │",
            key,
            truncate(val, VALUE_WIDTH),
            kw = KEY_WIDTH,
            vw = VALUE_WIDTH
        );
    }
    let _ = writeln!(out, "{INDENT}└{k_line}┴{v_line}┘");
    let _ = writeln!(out);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_values() {
        assert_eq!(truncate("out", 10), "out");
    }

    #[test]
    fn truncate_marks_cut_values() {
        assert_eq!(truncate("silicate, carbon", 8), "silicat…");
    }
}
