use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "poslist",
    about = "Merge positional record lists by span overlap",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with a `[merge]` table
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge two JSON record lists
    Merge(MergeArgs),
    /// Show the effective merge configuration
    Config,
}

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// First list (path, or `-` for stdin). Prompts for both lists when omitted.
    pub left: Option<String>,
    /// Second list (path, or `-` for stdin). Empty when omitted.
    pub right: Option<String>,
    /// Grow a fused record's span to cover both inputs
    #[arg(long)]
    pub expand_span: bool,
    /// Reject records whose span has left > right
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_merge_with_paths() {
        let cli = Cli::try_parse_from(["poslist", "merge", "a.json", "b.json"]).unwrap();
        match cli.command {
            Command::Merge(args) => {
                assert_eq!(args.left.as_deref(), Some("a.json"));
                assert_eq!(args.right.as_deref(), Some("b.json"));
                assert!(!args.expand_span);
                assert!(!args.strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "poslist", "merge", "--strict", "--expand-span", "--format", "json", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Command::Merge(args) => {
                assert!(args.strict);
                assert!(args.expand_span);
                assert!(args.left.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::try_parse_from(["poslist", "--config", "p.toml", "config"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("p.toml")));
        assert!(matches!(cli.command, Command::Config));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["poslist", "--format", "yaml", "config"]).is_err());
    }
}
