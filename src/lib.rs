pub mod commands;
pub mod config;
pub mod state;
pub mod store;
pub mod utils;

use clap::Parser;
use commands::Commands;

#[derive(Debug, Parser)]
#[clap(
    name = "tracecat",
    about = "Drive Tracecat workflows and secrets from the command line",
    version,
    author
)]
pub struct CLI {
    #[clap(subcommand)]
    pub commands: Commands,

    #[clap(
        long = "token",
        help = "Bearer token for the public API",
        global = true
    )]
    pub token: Option<String>,

    #[clap(
        short = 'u',
        long = "user-id",
        help = "User to act on behalf of when reading secrets",
        global = true
    )]
    pub user_id: Option<String>,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Print more information",
        global = true
    )]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli() {
        CLI::command().debug_assert();
    }

    #[test]
    fn test_create_accepts_file_and_title() {
        let cli = CLI::try_parse_from([
            "tracecat",
            "workflows",
            "create",
            "--title",
            "ignored",
            "--file",
            "workflow.yaml",
        ])
        .unwrap();

        assert!(matches!(
            cli.commands,
            Commands::Workflows(commands::workflows::Options {
                commands: commands::workflows::Commands::Create(_)
            })
        ));
    }

    #[test]
    fn test_global_flags() {
        let cli = CLI::try_parse_from([
            "tracecat", "secrets", "get", "a", "b", "--user-id", "user-1", "-v",
        ])
        .unwrap();

        assert_eq!(cli.user_id.as_deref(), Some("user-1"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_config_default_user_is_separate_from_override() {
        let cli = CLI::try_parse_from([
            "tracecat",
            "config",
            "--default-user-id",
            "stored",
            "--user-id",
            "override",
        ])
        .unwrap();

        assert_eq!(cli.user_id.as_deref(), Some("override"));

        match cli.commands {
            Commands::Config(options) => {
                assert_eq!(options.default_user_id.as_deref(), Some("stored"));
            }
            other => panic!("expected the config command, got {other:?}"),
        }
    }
}
