//! CLI entry point for healthgate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `healthgate-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use healthgate_app::{
    format_explanation, format_not_found, parse_report_json, run_assess, run_explain,
    serialize_report, to_renderable, verdict_exit_code, AssessError, AssessInput, ExplainOutput,
    GateMode, EXIT_INVALID_INPUT,
};
use healthgate_domain::FactStore;
use healthgate_render::{
    render_github_annotations, render_github_outputs, render_markdown, render_text,
};

#[derive(Parser, Debug)]
#[command(
    name = "healthgate",
    version,
    about = "CI applicability gate for U.S. health-data regulations"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the answers document and write artifacts.
    Assess {
        /// Path to the answers JSON document.
        #[arg(long, default_value = "healthgate.answers.json")]
        answers: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/healthgate/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/healthgate/report.md")]
        markdown_out: Utf8PathBuf,

        /// Report warnings without failing the gate.
        #[arg(long)]
        warn_only: bool,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/healthgate/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/healthgate/report.json")]
        report: Utf8PathBuf,
    },

    /// Explain a rule id with its obligations and resources.
    Explain {
        /// The rule id (e.g., "law.hipaa") to explain.
        identifier: String,
    },

    /// Print the JSON Schema of the answers document.
    Schema,

    /// Write a starter answers document with every question answered "no".
    Init {
        /// Where to write the answers document.
        #[arg(long, default_value = "healthgate.answers.json")]
        answers: Utf8PathBuf,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Assess {
            answers,
            report_out,
            write_markdown,
            markdown_out,
            warn_only,
        } => cmd_assess(answers, report_out, write_markdown, markdown_out, warn_only),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report } => cmd_annotations(report),
        Commands::Explain { identifier } => cmd_explain(&identifier),
        Commands::Schema => cmd_schema(),
        Commands::Init { answers, force } => cmd_init(answers, force),
    }
}

fn cmd_assess(
    answers: Utf8PathBuf,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
    warn_only: bool,
) -> anyhow::Result<()> {
    let answers_text = match std::fs::read_to_string(&answers) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("healthgate error: read answers {}: {}", answers, err);
            std::process::exit(EXIT_INVALID_INPUT);
        }
    };

    let mode = if warn_only {
        GateMode::WarnOnly
    } else {
        GateMode::Enforce
    };

    let output = match run_assess(AssessInput {
        answers_text: &answers_text,
        mode,
    }) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("healthgate error: {}", err);
            if let AssessError::Answers(answers_err) = &err {
                for problem in answers_err.problems() {
                    eprintln!("  - {}", problem);
                }
            }
            std::process::exit(EXIT_INVALID_INPUT);
        }
    };

    write_report_file(&report_out, &output.report).context("write report json")?;

    let renderable = to_renderable(&output.report);
    if write_markdown {
        write_text_file(&markdown_out, &render_markdown(&renderable)).context("write markdown")?;
    }

    print!("{}", render_text(&renderable));

    append_github_outputs(&render_github_outputs(&renderable))
        .context("append step outputs to GITHUB_OUTPUT")?;

    let code = verdict_exit_code(output.report.verdict);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Append gate signals to the file named by `$GITHUB_OUTPUT`, when set.
fn append_github_outputs(lines: &[String]) -> anyhow::Result<()> {
    let Ok(path) = std::env::var("GITHUB_OUTPUT") else {
        return Ok(());
    };
    if path.is_empty() {
        return Ok(());
    }

    use std::io::Write;
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path))?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    Ok(())
}

fn write_report_file(path: &camino::Utf8Path, report: &healthgate_types::GateReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_github_annotations(&to_renderable(&report)) {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
        } => {
            eprint!("{}", format_not_found(&identifier, available_rule_ids));
            std::process::exit(1);
        }
    }
}

fn cmd_schema() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(FactStore);
    let json = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    println!("{}", json);
    Ok(())
}

fn cmd_init(answers: Utf8PathBuf, force: bool) -> anyhow::Result<()> {
    if answers.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", answers);
    }

    let template = FactStore::default();
    let mut json = serde_json::to_vec_pretty(&template).context("serialize template")?;
    json.push(b'\n');

    if let Some(parent) = answers.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(&answers, json).with_context(|| format!("write answers: {}", answers))?;

    eprintln!(
        "healthgate: wrote {} (every answer \"false\"; edit it to match your tool)",
        answers
    );
    Ok(())
}
