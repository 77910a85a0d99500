use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::api::Client;
use crate::commands::{run_create, run_list, run_remove, run_show};
use crate::config::Config;
use crate::content::ContentKind;
use crate::logging;
use crate::output::OutputFormat;
use crate::ui;

#[derive(Debug, Parser)]
#[command(name = "labctl", version, about = "Manage authored content on the labs platform")]
pub struct Cli {
    /// Output encoding of command results.
    #[arg(long, short, global = true, value_enum, default_value_t = OutputFormat::Yaml)]
    output: OutputFormat,
    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(long, short, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage challenges, tutorials, courses and skill paths.
    #[command(subcommand)]
    Content(ContentCommands),
}

#[derive(Debug, Subcommand)]
enum ContentCommands {
    /// List authored content, possibly filtered by kind.
    #[command(visible_alias = "ls")]
    List {
        /// Content kind to filter by - one of challenge, tutorial, course (an empty string means all)
        #[arg(long, default_value = "", hide_default_value = true, value_name = ContentKind::TYPE)]
        kind: ContentKind,
    },
    /// Create a new piece of content.
    Create {
        #[arg(value_name = ContentKind::TYPE)]
        kind: ContentKind,
        name: String,
        /// Start from the sample template.
        #[arg(long)]
        sample: bool,
    },
    /// Show a single piece of content.
    Show {
        #[arg(value_name = ContentKind::TYPE)]
        kind: ContentKind,
        name: String,
    },
    /// Remove a piece of content.
    #[command(visible_alias = "rm")]
    Remove {
        #[arg(value_name = ContentKind::TYPE)]
        kind: ContentKind,
        name: String,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        force: bool,
    },
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupted, cancelling pending requests");
            on_signal.cancel();
        }
    });

    match execute(cli, &cancel).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli, cancel: &CancellationToken) -> Result<()> {
    let config = Config::load().context("cannot load configuration")?;
    let client = Client::new(config.client_config())?;
    let mut out = std::io::stdout();

    match cli.command {
        Commands::Content(command) => match command {
            ContentCommands::List { kind } => {
                run_list(&client, cancel, kind, cli.output, &mut out).await?;
            }
            ContentCommands::Create { kind, name, sample } => {
                run_create(&client, cancel, kind, &name, sample, cli.output, &mut out).await?;
            }
            ContentCommands::Show { kind, name } => {
                run_show(&client, cancel, kind, &name, cli.output, &mut out).await?;
            }
            ContentCommands::Remove { kind, name, force } => {
                if run_remove(&client, cancel, kind, &name, force).await? {
                    eprintln!("Removed {} {}", kind, name);
                } else {
                    eprintln!("Aborted");
                }
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_accepts_alias_and_empty_kind() {
        let cli = Cli::try_parse_from(["labctl", "content", "ls", "--kind", ""]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Content(ContentCommands::List {
                kind: ContentKind::All
            })
        ));

        let cli = Cli::try_parse_from(["labctl", "content", "list"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Content(ContentCommands::List {
                kind: ContentKind::All
            })
        ));
    }

    #[test]
    fn list_parses_kind_filter() {
        let cli = Cli::try_parse_from(["labctl", "-o", "json", "content", "list", "--kind", "course"])
            .unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Commands::Content(ContentCommands::List {
                kind: ContentKind::Course
            })
        ));
    }

    #[test]
    fn list_rejects_unknown_kind_and_positionals() {
        assert!(Cli::try_parse_from(["labctl", "content", "list", "--kind", "lesson"]).is_err());
        assert!(Cli::try_parse_from(["labctl", "content", "list", "extra"]).is_err());
    }

    #[test]
    fn remove_parses_alias_and_force() {
        let cli =
            Cli::try_parse_from(["labctl", "content", "rm", "skill-path", "sp1", "--force"]).unwrap();
        match cli.command {
            Commands::Content(ContentCommands::Remove { kind, name, force }) => {
                assert_eq!(kind, ContentKind::SkillPath);
                assert_eq!(name, "sp1");
                assert!(force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
