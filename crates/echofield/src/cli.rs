use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Theme stylesheet generator for the echofield blog.
#[derive(Debug, Parser)]
#[command(name = "echofield", version, about)]
pub struct Cli {
    /// Config file (default: ./echofield.yaml, if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the theme stylesheet
    Generate {
        /// Output path, overriding the configured one
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Run pre-build hooks, then the bundle command
    Build,

    /// List the registered themes
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show one theme's palette and derived values
    Show {
        /// Theme id, e.g. mocha
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Resolve the theme a page would render with
    Resolve {
        /// Value held in key-value storage
        #[arg(long, value_name = "ID")]
        stored: Option<String>,

        /// Cookie header, e.g. "lang=en; theme=nord"
        #[arg(long, value_name = "HEADER")]
        cookie: Option<String>,
    },

    /// Verify a generated stylesheet against the registry
    Check {
        /// Stylesheet path (default: configured output)
        path: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::try_parse_from(["echofield", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::List { json: false }));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["echofield", "generate", "-o", "out.css", "--config", "x.yaml"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.yaml")));
        match cli.command {
            Command::Generate { output } => assert_eq!(output, Some(PathBuf::from("out.css"))),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn resolve_flags() {
        let cli = Cli::try_parse_from([
            "echofield",
            "resolve",
            "--stored",
            "nord",
            "--cookie",
            "theme=latte",
        ])
        .unwrap();
        match cli.command {
            Command::Resolve { stored, cookie } => {
                assert_eq!(stored.as_deref(), Some("nord"));
                assert_eq!(cookie.as_deref(), Some("theme=latte"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn show_requires_id() {
        assert!(Cli::try_parse_from(["echofield", "show"]).is_err());
    }
}
