//! CLI argument definitions for the vetmock servers.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vetmock",
    version,
    about = "Mock veterinary clinic API servers",
    long_about = "Serve the veterinary clinic demo dataset over REST and GraphQL.\n\n\
                  Fixture data is held in memory and regenerated on every start;\n\
                  pass --seed to make the generated schedule reproducible."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the REST and GraphQL facades concurrently.
    Serve(ServeArgs),

    /// Serve only the REST facade.
    ServeRest(ServeRestArgs),

    /// Serve only the GraphQL facade.
    ServeGraphql(ServeGraphqlArgs),

    /// Print the generated fixture dataset.
    Fixtures(FixturesArgs),
}

#[derive(Parser)]
pub struct ServeArgs {
    /// Interface to bind both servers on.
    #[arg(long = "host", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port for the REST facade.
    #[arg(long = "rest-port", default_value_t = 4000)]
    pub rest_port: u16,

    /// Port for the GraphQL facade.
    #[arg(long = "graphql-port", default_value_t = 4001)]
    pub graphql_port: u16,

    /// Seed for the appointment generator (random when omitted; the chosen
    /// seed is logged either way).
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

#[derive(Parser)]
pub struct ServeRestArgs {
    /// Interface to bind on.
    #[arg(long = "host", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port for the REST facade.
    #[arg(long = "port", default_value_t = 4000)]
    pub port: u16,

    /// Seed for the appointment generator.
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

#[derive(Parser)]
pub struct ServeGraphqlArgs {
    /// Interface to bind on.
    #[arg(long = "host", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port for the GraphQL facade.
    #[arg(long = "port", default_value_t = 4001)]
    pub port: u16,

    /// Seed for the appointment generator.
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

#[derive(Parser)]
pub struct FixturesArgs {
    /// Show one day's schedule (YYYY-MM-DD) instead of the overview.
    #[arg(long = "date", value_name = "DATE")]
    pub date: Option<String>,

    /// Seed for the appointment generator.
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults_match_the_published_ports() {
        let cli = Cli::try_parse_from(["vetmock", "serve"]).expect("parse");
        let Command::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.rest_port, 4000);
        assert_eq!(args.graphql_port, 4001);
        assert!(args.seed.is_none());
    }
}
