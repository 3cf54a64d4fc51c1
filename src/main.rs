use tracing::{error, info};

use jobdesk::{Config, Database, VerificationService};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = jobdesk::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        jobdesk::logging::init_console_only(&config.logging.level);
    }

    info!("jobdesk - Job Board Verification & Moderation Backend");

    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to open database {}: {e}", config.database.path);
            std::process::exit(1);
        }
    };

    match db.schema_version().await {
        Ok(version) => info!("Database ready (schema version {version})"),
        Err(e) => {
            error!("Failed to read schema version: {e}");
            std::process::exit(1);
        }
    }

    let verification = VerificationService::new(&db);
    match (
        verification.pending_applicant_verifications().await,
        verification.pending_employer_verifications().await,
    ) {
        (Ok(applicants), Ok(employers)) => {
            info!(
                "Verification queues: {} applicant(s), {} employer(s) pending",
                applicants.len(),
                employers.len()
            );
        }
        (Err(e), _) | (_, Err(e)) => {
            error!("Failed to read verification queues: {e}");
            std::process::exit(1);
        }
    }
}
