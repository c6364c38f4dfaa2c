//! Analyze command: load, analyze, write both reports.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textstat_core::config::Config;
use textstat_core::report::{self, Labels};
use textstat_core::source::{self, LoadOutcome};
use textstat_core::{TextStats, analysis};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    #[arg(default_value = "poem.txt")]
    pub file: Utf8PathBuf,

    /// Where to write the text report (default from config: analyz.txt).
    #[arg(long, value_name = "PATH")]
    pub text_out: Option<Utf8PathBuf>,

    /// Where to write the JSON report (default from config: analyz.json).
    #[arg(long, value_name = "PATH")]
    pub json_out: Option<Utf8PathBuf>,

    /// Label set for report field names.
    #[arg(long, value_enum)]
    pub labels: Option<Labels>,
}

/// Run the full pipeline on one file.
///
/// A missing input file is reported as a warning (unless `quiet`); empty
/// reports are still written and the command succeeds. Every other I/O
/// failure is fatal.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let labels = args.labels.unwrap_or(config.labels);
    let text_out = args.text_out.unwrap_or_else(|| config.text_report.clone());
    let json_out = args.json_out.unwrap_or_else(|| config.json_report.clone());
    debug!(%text_out, %json_out, %labels, "executing analyze command");

    let outcome = source::load_text(&args.file, config.input_limit())
        .with_context(|| format!("failed to load {}", args.file))?;
    if let LoadOutcome::Missing { ref path } = outcome
        && !quiet
    {
        eprintln!(
            "{} file {} not found, writing empty reports",
            "warning:".yellow().bold(),
            path
        );
    }

    let stats = analysis::analyze(&outcome.into_text());

    report::write_text_report(&text_out, stats.as_ref(), labels)
        .with_context(|| format!("failed to write text report to {text_out}"))?;
    report::write_json_report(&json_out, stats.as_ref(), labels)
        .with_context(|| format!("failed to write JSON report to {json_out}"))?;

    if global_json {
        println!("{}", report::render_json(stats.as_ref(), labels)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    if let Some(ref s) = stats {
        print_summary(s);
    } else {
        println!("\n  {}", "No text to analyze.".dimmed());
    }
    println!("\n  {} {text_out}, {json_out}", "Reports:".cyan());

    Ok(())
}

fn print_summary(stats: &TextStats) {
    println!(
        "\n  {} {} characters, {} letters",
        "Characters:".cyan(),
        stats.total_characters,
        stats.total_letters,
    );
    println!(
        "\n  {} {} total, {} repeated",
        "Words:".cyan(),
        stats.total_words,
        stats.repeated_words.len(),
    );
    println!(
        "\n  {} {} total, {} non-empty",
        "Lines:".cyan(),
        stats.total_lines,
        stats.non_empty_lines,
    );

    let mut top: Vec<_> = stats.repeated_words.iter().collect();
    top.sort_by(|a, b| b.1.cmp(&a.1));
    if !top.is_empty() {
        let listed: Vec<_> = top
            .iter()
            .take(5)
            .map(|(word, count)| format!("\"{word}\" ({count})"))
            .collect();
        println!("\n  {} {}", "Most repeated:".cyan(), listed.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(dir: &camino::Utf8Path, file: &str) -> AnalyzeArgs {
        AnalyzeArgs {
            file: dir.join(file),
            text_out: Some(dir.join("out.txt")),
            json_out: Some(dir.join("out.json")),
            labels: None,
        }
    }

    fn utf8_dir(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap()
    }

    #[test]
    fn writes_reports_for_existing_file() {
        let tmp = TempDir::new().unwrap();
        let dir = utf8_dir(&tmp);
        std::fs::write(dir.join("poem.txt"), "Hello hello world").unwrap();

        cmd_analyze(args(&dir, "poem.txt"), false, false, &Config::default()).unwrap();

        let text = std::fs::read_to_string(dir.join("out.txt")).unwrap();
        assert!(text.contains("total words: 3\n"));
        assert!(text.contains("repeated words:\n    hello: 2\n"));
    }

    #[test]
    fn missing_file_still_succeeds() {
        let tmp = TempDir::new().unwrap();
        let dir = utf8_dir(&tmp);

        cmd_analyze(args(&dir, "absent.txt"), true, false, &Config::default()).unwrap();

        assert_eq!(std::fs::read_to_string(dir.join("out.txt")).unwrap(), "");
        assert_eq!(
            std::fs::read_to_string(dir.join("out.json")).unwrap().trim(),
            "{}"
        );
    }

    #[test]
    fn config_labels_apply_unless_overridden() {
        let tmp = TempDir::new().unwrap();
        let dir = utf8_dir(&tmp);
        std::fs::write(dir.join("poem.txt"), "раз два").unwrap();
        let config = Config {
            labels: Labels::Ru,
            ..Config::default()
        };

        cmd_analyze(args(&dir, "poem.txt"), false, false, &config).unwrap();
        let text = std::fs::read_to_string(dir.join("out.txt")).unwrap();
        assert!(text.starts_with("Всего символов: 7\n"));

        let mut overridden = args(&dir, "poem.txt");
        overridden.labels = Some(Labels::En);
        cmd_analyze(overridden, false, false, &config).unwrap();
        let text = std::fs::read_to_string(dir.join("out.txt")).unwrap();
        assert!(text.starts_with("total characters: 7\n"));
    }

    #[test]
    fn input_limit_is_enforced() {
        let tmp = TempDir::new().unwrap();
        let dir = utf8_dir(&tmp);
        std::fs::write(dir.join("poem.txt"), "a".repeat(100)).unwrap();
        let config = Config {
            max_input_bytes: Some(10),
            ..Config::default()
        };

        let err = cmd_analyze(args(&dir, "poem.txt"), false, false, &config).unwrap_err();
        assert!(format!("{err:#}").contains("input too large"));
        assert!(!dir.join("out.txt").exists());
    }
}
