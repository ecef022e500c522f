use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use savings_engine::api::{AppState, create_router};
use savings_engine::config::ConfigLoader;
use savings_engine::data::shared;
use savings_engine::display::{calculation_notes, info_rows};
use savings_engine::models::OrganizationKind;
use savings_engine::session::CalculatorSession;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "savings-engine")]
#[command(about = "Staffing savings calculator for health systems and hospitals", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory containing calculator.yaml
    #[arg(long, env = "SAVINGS_ENGINE_CONFIG", default_value = "./config", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Address to bind, overriding the configured one
        #[arg(long, env = "SAVINGS_ENGINE_BIND")]
        bind: Option<String>,
    },
    /// Calculate savings for one organization
    Calculate {
        /// Which table the organization comes from
        #[arg(value_enum)]
        kind: KindArg,

        /// Health-system ID or hospital CCN
        id: String,

        /// Edited staff labor rate
        staff_rate: Option<String>,

        /// Edited agency labor rate
        agency_rate: Option<String>,

        /// Edited estimated RN need
        rn_need: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    /// A health system, keyed by health-system ID
    #[value(alias = "health_system")]
    HealthSystem,
    /// A hospital, keyed by CCN
    Hospital,
}

impl From<KindArg> for OrganizationKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::HealthSystem => OrganizationKind::HealthSystem,
            KindArg::Hospital => OrganizationKind::Hospital,
        }
    }
}

/// Edited input values, in argument order.
struct Edits {
    staff_rate: Option<String>,
    agency_rate: Option<String>,
    rn_need: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let outcome = match cli.command {
        Commands::Serve { bind } => serve(&cli.config, bind).await,
        Commands::Calculate {
            kind,
            id,
            staff_rate,
            agency_rate,
            rn_need,
        } => calculate(
            &cli.config,
            kind.into(),
            &id,
            Edits {
                staff_rate,
                agency_rate,
                rn_need,
            },
        ),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config_dir: &Path, bind: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::load(config_dir)?;
    let state = AppState::from_config(&config)?;
    let bind_addr = bind.unwrap_or_else(|| config.server().bind_address.clone());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(bind_addr = %bind_addr, "Listening");
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

fn calculate(
    config_dir: &Path,
    kind: OrganizationKind,
    id: &str,
    edits: Edits,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::load(config_dir)?;
    let data = shared(&config)?;
    let organization = data.organization(kind, id)?;

    for row in info_rows(&organization) {
        println!("{}: {}", row.label, row.value);
    }

    let notes = calculation_notes(&organization, config.notes());
    let mut session = CalculatorSession::new(organization);
    if let Some(text) = &edits.staff_rate {
        session.edit_staff_rate(text);
    }
    if let Some(text) = &edits.agency_rate {
        session.edit_agency_rate(text);
    }
    if let Some(text) = &edits.rn_need {
        session.edit_rn_need(text);
    }

    let result = session.evaluate()?;
    println!();
    println!("[{}] {}", result.display.badge, result.display.savings);
    println!("{}", result.display.inputs_summary);
    for note in notes {
        println!("- {note}");
    }
    Ok(())
}
