use std::io::{self, BufRead, Read, Write};

use anyhow::{bail, Context};
use colored::Colorize;
use poslist_merge::{MergeOutcome, Merger};
use poslist_types::PositionalRecord;

use crate::cli::*;
use crate::config::CliConfig;

/// Record shape accepted on the command line: values are arbitrary JSON.
pub type Record = PositionalRecord<serde_json::Value>;

const STDIN: &str = "-";
const EXAMPLE: &str = r#"[{"positions": [0, 5], "values": [1, 2]}]"#;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let mut config = CliConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Merge(args) => {
            config.apply_overrides(&args);
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut stdout = io::stdout().lock();
            cmd_merge(&args, &config, cli.format, &mut input, &mut io::stderr(), &mut stdout)
        }
        Command::Config => cmd_config(&config, &mut io::stdout().lock()),
    }
}

fn cmd_merge(
    args: &MergeArgs,
    config: &CliConfig,
    format: OutputFormat,
    input: &mut dyn BufRead,
    prompt: &mut dyn Write,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let (left, right) = read_lists(args, input, prompt)?;
    let outcome = Merger::new(config.merge.clone())
        .merge_with_stats(left, right)
        .context("merging lists")?;
    render(&outcome, format, out)
}

/// Resolve both input lists from paths, stdin, or interactive prompts.
fn read_lists(
    args: &MergeArgs,
    input: &mut dyn BufRead,
    prompt: &mut dyn Write,
) -> anyhow::Result<(Vec<Record>, Vec<Record>)> {
    let Some(left) = args.left.as_deref() else {
        writeln!(prompt, "Enter List 1 in JSON format: {EXAMPLE}")?;
        let left = prompt_list(input, "List 1")?;
        writeln!(prompt, "Enter List 2 in JSON format:")?;
        let right = prompt_list(input, "List 2")?;
        return Ok((left, right));
    };

    if left == STDIN && args.right.as_deref() == Some(STDIN) {
        bail!("only one list can be read from stdin");
    }

    let left = read_source(left, input, "List 1")?;
    let right = match args.right.as_deref() {
        Some(source) => read_source(source, input, "List 2")?,
        None => Vec::new(),
    };
    Ok((left, right))
}

fn read_source(source: &str, input: &mut dyn BufRead, name: &str) -> anyhow::Result<Vec<Record>> {
    let text = if source == STDIN {
        let mut text = String::new();
        input
            .read_to_string(&mut text)
            .with_context(|| format!("reading {name} from stdin"))?;
        text
    } else {
        std::fs::read_to_string(source).with_context(|| format!("reading {name} from {source}"))?
    };
    parse_list(&text, name)
}

fn prompt_list(input: &mut dyn BufRead, name: &str) -> anyhow::Result<Vec<Record>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_context(|| format!("reading {name}"))?;
    if read == 0 {
        bail!("unexpected end of input while reading {name}");
    }
    parse_list(&line, name)
}

fn parse_list(text: &str, name: &str) -> anyhow::Result<Vec<Record>> {
    let records: Vec<Record> =
        serde_json::from_str(text).with_context(|| format!("parsing {name} as JSON"))?;
    tracing::debug!(list = name, records = records.len(), "parsed list");
    Ok(records)
}

fn render(
    outcome: &MergeOutcome<serde_json::Value>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&outcome.records)?;
    match format {
        OutputFormat::Json => writeln!(out, "{json}")?,
        OutputFormat::Text => {
            writeln!(out, "Combined List: {json}")?;
            let stats = outcome.stats;
            writeln!(
                out,
                "{} {} records in, {} out, {} fused",
                "✓".green().bold(),
                stats.input_records,
                stats.output_records.to_string().bold(),
                stats.fusions.to_string().yellow(),
            )?;
        }
    }
    Ok(())
}

fn cmd_config(config: &CliConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let text = toml::to_string_pretty(config).context("serializing config")?;
    write!(out, "{text}")?;
    Ok(())
}
