use clap::{Parser, Subcommand};
use grimoire_cli::CliContext;
use grimoire_cli::commands;
use grimoire_cli::readline;
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let ctx = CliContext::new();

    loop {
        let line = readline()?;
        if line.is_empty() {
            // stdin closed
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "storyteller companion")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Players,
    Add {
        name: Vec<String>,
    },
    Recall {
        name: Vec<String>,
    },
    Remove {
        seat: usize,
    },
    Rename {
        seat: usize,
        name: Vec<String>,
    },
    Clear,
    Seed,
    History,
    Forget {
        name: Vec<String>,
    },
    Assign {
        seat: usize,
        role: Vec<String>,
    },
    Unassign {
        seat: usize,
    },
    Reset,
    Roles {
        affiliation: Option<String>,
    },
    RolesFor {
        seat: usize,
        affiliation: Option<String>,
    },
    Table,
    Tap {
        seat: usize,
    },
    Config,
    SetTable {
        width: f32,
        height: f32,
    },
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "grimoire".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Players) => commands::list_players(ctx).await,
        Some(Commands::Add { name }) => commands::add_player(ctx, &name.join(" ")).await,
        Some(Commands::Recall { name }) => commands::recall_player(ctx, &name.join(" ")).await,
        Some(Commands::Remove { seat }) => commands::remove_player(ctx, *seat).await,
        Some(Commands::Rename { seat, name }) => {
            commands::rename_player(ctx, *seat, &name.join(" ")).await
        }
        Some(Commands::Clear) => commands::clear_players(ctx).await,
        Some(Commands::Seed) => commands::seed_players(ctx).await,
        Some(Commands::History) => commands::show_history(ctx).await,
        Some(Commands::Forget { name }) => commands::forget_name(ctx, &name.join(" ")).await,
        Some(Commands::Assign { seat, role }) => {
            commands::assign_role(ctx, *seat, &role.join(" ")).await
        }
        Some(Commands::Unassign { seat }) => commands::unassign_role(ctx, *seat).await,
        Some(Commands::Reset) => commands::reset_assignments(ctx).await,
        Some(Commands::Roles { affiliation }) => {
            commands::list_available_roles(ctx, affiliation.as_deref()).await
        }
        Some(Commands::RolesFor { seat, affiliation }) => {
            commands::list_roles_for(ctx, *seat, affiliation.as_deref()).await
        }
        Some(Commands::Table) => commands::show_table(ctx).await,
        Some(Commands::Tap { seat }) => commands::tap_seat(ctx, *seat).await,
        Some(Commands::Config) => commands::show_settings(ctx).await,
        Some(Commands::SetTable { width, height }) => {
            commands::set_table(ctx, *width, *height).await
        }
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
