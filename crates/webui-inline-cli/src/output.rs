//! Terminal summary of an embed run.

use std::path::Path;

use console::style;
use webui_inline_core::pipeline::EmbedReport;

/// `[1/2] Loading embed config`
pub fn print_step(step: u32, total: u32, text: &str) {
    println!("{} {}", style(format!("[{step}/{total}]")).dim(), text);
}

/// Print the `Wrote <path>` line followed by payload and placeholder details.
pub fn print_report(report: &EmbedReport, settings: &Path) {
    for line in report_lines(report, settings) {
        println!("{line}");
    }
}

/// Placeholders left unfilled end up on a yellow `[WARN]` line naming the
/// settings file they were looked up in.
fn report_lines(report: &EmbedReport, settings: &Path) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} Wrote {}",
            style("[OK]").green().bold(),
            style(report.output.display()).bold()
        ),
        format!("  {} {} bytes", style("payload:").dim(), report.payload_bytes),
        format!("  {} R\"{}(", style("delimiter:").dim(), report.delimiter),
        format!("  {} {}", style("placeholders filled:").dim(), report.substitutions),
    ];

    if !report.unresolved.is_empty() {
        lines.push(format!(
            "{} no value in {} for {}",
            style("[WARN]").yellow().bold(),
            settings.display(),
            report.unresolved.join(", ")
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report(unresolved: &[&str]) -> EmbedReport {
        EmbedReport {
            output: PathBuf::from("build/hockey_stick.ino"),
            delimiter: "HS_WEB_UI_1".into(),
            payload_bytes: 2048,
            substitutions: 3,
            unresolved: unresolved.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn plain(lines: Vec<String>) -> Vec<String> {
        lines
            .iter()
            .map(|l| console::strip_ansi_codes(l).into_owned())
            .collect()
    }

    #[test]
    fn test_report_summary() {
        let lines = plain(report_lines(&report(&[]), Path::new(".env")));
        assert_eq!(
            lines,
            vec![
                "[OK] Wrote build/hockey_stick.ino",
                "  payload: 2048 bytes",
                "  delimiter: R\"HS_WEB_UI_1(",
                "  placeholders filled: 3",
            ]
        );
    }

    #[test]
    fn test_report_lists_unfilled_placeholders() {
        let lines = plain(report_lines(
            &report(&["{{PASS}}", "{{SSID}}"]),
            Path::new("config/.env"),
        ));
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "[WARN] no value in config/.env for {{PASS}}, {{SSID}}");
    }
}
