//! Plain-text report formatting.
//!
//! A pure `format_report` returning `Vec<String>` (testable, no I/O) plus a
//! `print_report` wrapper that writes to stdout. Column widths and headers
//! are presentation only, not a machine-parseable contract.
//!
//! ```text
//! Source: public/blackpiston-logo.png
//!   Dimensions : 2048x2048
//!   Mode       : Rgba8
//!   File size  : 489.2 KB
//!
//! ======================================================================
//! OPTIMIZATION RESULTS
//! ======================================================================
//! Variant                    WebP        PNG   WebP Sav    PNG Sav
//! ----------------------------------------------------------------------
//!   1024px (master      )    84.1 KB   312.6 KB   +82.8%   +36.1%
//!   ...
//! ```
//!
//! Reduction percentages always carry an explicit sign and go negative when
//! an artifact outgrew the source.

use crate::pipeline::PipelineReport;

const RULE_WIDTH: usize = 70;

fn kb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

/// Format the full report. Pure — no I/O, no side effects.
pub fn format_report(report: &PipelineReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Source: {}", report.source_path.display()));
    lines.push(format!(
        "  Dimensions : {}x{}",
        report.source.width, report.source.height
    ));
    lines.push(format!("  Mode       : {}", report.source.color_mode));
    lines.push(format!("  File size  : {:.1} KB", kb(report.source.bytes)));
    lines.push(String::new());

    lines.push("=".repeat(RULE_WIDTH));
    lines.push("OPTIMIZATION RESULTS".to_string());
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(format!(
        "{:<20} {:>10} {:>10} {:>10} {:>10}",
        "Variant", "WebP", "PNG", "WebP Sav", "PNG Sav"
    ));
    lines.push("-".repeat(RULE_WIDTH));

    for r in &report.records {
        lines.push(format!(
            "  {}px ({:<12}) {:>7.1} KB {:>7.1} KB {:>+7.1}% {:>+7.1}%",
            r.spec.px,
            r.spec.label,
            kb(r.webp.bytes),
            kb(r.png.bytes),
            r.webp_reduction,
            r.png_reduction,
        ));
    }

    lines.push("-".repeat(RULE_WIDTH));
    lines.push(format!(
        "  favicon.ico          {:>7.1} KB",
        kb(report.favicon.bytes)
    ));
    lines.push(String::new());
    lines.push(format!(
        "Original source      : {:.1} KB",
        kb(report.source.bytes)
    ));

    // Headline metric: the first (largest) entry's WebP against the original.
    if let Some(master) = report.records.first() {
        lines.push(format!(
            "Master WebP ({}px) : {:.1} KB  ({:+.1}% from original)",
            master.spec.px,
            kb(master.webp.bytes),
            master.webp_reduction,
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "All files written to: {}",
        report.output_dir.display()
    ));
    lines.push("[OK] Optimization complete -- no visual degradation.".to_string());

    lines
}

/// Print the report to stdout.
pub fn print_report(report: &PipelineReport) {
    for line in format_report(report) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SizeSpec;
    use crate::imaging::SourceInfo;
    use crate::pipeline::{OutputArtifact, ResultRecord, reduction_percent};
    use std::path::PathBuf;

    fn record(px: u32, label: &'static str, webp: u64, png: u64, source: u64) -> ResultRecord {
        ResultRecord {
            spec: SizeSpec { px, label },
            webp_reduction: reduction_percent(webp, source),
            png_reduction: reduction_percent(png, source),
            webp: OutputArtifact {
                path: PathBuf::from(format!("out/logo-{px}.webp")),
                bytes: webp,
            },
            png: OutputArtifact {
                path: PathBuf::from(format!("out/logo-{px}.png")),
                bytes: png,
            },
        }
    }

    fn sample_report() -> PipelineReport {
        let source_bytes = 512_000;
        PipelineReport {
            source_path: PathBuf::from("public/blackpiston-logo.png"),
            source: SourceInfo {
                width: 2048,
                height: 2048,
                color_mode: "Rgba8".to_string(),
                bytes: source_bytes,
            },
            records: vec![
                record(1024, "master", 86_118, 320_102, source_bytes),
                record(512, "header", 30_515, 768_000, source_bytes),
                record(256, "ui", 10_240, 40_960, source_bytes),
                record(64, "favicon-base", 1_843, 4_915, source_bytes),
            ],
            favicon: OutputArtifact {
                path: PathBuf::from("out/favicon.ico"),
                bytes: 18_022,
            },
            output_dir: PathBuf::from("/abs/public/optimized"),
        }
    }

    #[test]
    fn report_starts_with_source_metadata() {
        let lines = format_report(&sample_report());
        assert_eq!(lines[0], "Source: public/blackpiston-logo.png");
        assert_eq!(lines[1], "  Dimensions : 2048x2048");
        assert_eq!(lines[2], "  Mode       : Rgba8");
        assert_eq!(lines[3], "  File size  : 500.0 KB");
    }

    #[test]
    fn report_rows_in_table_order() {
        let lines = format_report(&sample_report());
        let rows: Vec<&String> = lines.iter().filter(|l| l.contains("px (")).collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].starts_with("  1024px (master"));
        assert!(rows[1].starts_with("  512px (header"));
        assert!(rows[2].starts_with("  256px (ui"));
        assert!(rows[3].starts_with("  64px (favicon-base"));
    }

    #[test]
    fn report_shows_negative_reduction_with_sign() {
        let lines = format_report(&sample_report());
        // 512 row's PNG is larger than the source: -50.0%.
        let row = lines.iter().find(|l| l.contains("512px")).unwrap();
        assert!(row.contains("-50.0%"), "row was: {row}");
        // Positive reductions carry an explicit plus.
        let master = lines.iter().find(|l| l.contains("1024px")).unwrap();
        assert!(master.contains("+83.2%"), "row was: {master}");
    }

    #[test]
    fn report_headline_uses_first_record() {
        let lines = format_report(&sample_report());
        let headline = lines
            .iter()
            .find(|l| l.starts_with("Master WebP"))
            .unwrap();
        assert!(headline.starts_with("Master WebP (1024px) : 84.1 KB"));
        assert!(headline.contains("+83.2% from original"));
    }

    #[test]
    fn report_includes_favicon_and_output_dir() {
        let lines = format_report(&sample_report());
        assert!(lines.iter().any(|l| l.starts_with("  favicon.ico")));
        assert!(
            lines
                .iter()
                .any(|l| l == "All files written to: /abs/public/optimized")
        );
        assert_eq!(
            lines.last().unwrap(),
            "[OK] Optimization complete -- no visual degradation."
        );
    }
}
