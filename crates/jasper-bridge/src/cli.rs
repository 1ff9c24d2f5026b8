//! Command line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "JASPER_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Log level, overriding the configured one
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Pretty debug output with span timings, ignoring the logging config
    #[arg(long, global = true)]
    pub dev_logging: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a template and its properties files to disk
    Resolve(ResolveArgs),
}

/// Arguments of `resolve`
#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Report name, used as the cache key
    #[arg(short, long)]
    pub name: String,

    /// JRXML template to materialize
    #[arg(short, long)]
    pub template: PathBuf,

    /// JSON array of `{language, source, value}` objects
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Directory to write into instead of a new temporary one
    #[arg(short, long)]
    pub work_dir: Option<PathBuf>,

    /// Registered subreport names, e.g. `jasper_reports.invoice_lines`.
    /// When given, every subreport the template references must be listed.
    #[arg(long = "subreport")]
    pub subreports: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::try_parse_from([
            "jasper-bridge",
            "resolve",
            "--name",
            "sale.order",
            "--template",
            "sale_order.jrxml",
            "--subreport",
            "jasper_reports.lines",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(!cli.dev_logging);
        let Command::Resolve(args) = cli.command;
        assert_eq!(args.name, "sale.order");
        assert_eq!(args.template, PathBuf::from("sale_order.jrxml"));
        assert_eq!(args.subreports, vec!["jasper_reports.lines"]);
        assert!(args.work_dir.is_none());
    }

    #[test]
    fn test_parse_dev_logging_after_subcommand() {
        let cli = Cli::try_parse_from([
            "jasper-bridge",
            "resolve",
            "--name",
            "sale.order",
            "--template",
            "sale_order.jrxml",
            "--dev-logging",
        ])
        .unwrap();
        assert!(cli.dev_logging);
    }
}
