//! Fellowship - prints the roster and runs a bounded refresh.

use std::sync::Arc;

use fellowship_domain::Ring;
use fellowship_engine::{BuiltInRoster, RosterConfig, RosterService, SystemClock};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fellowship_engine=info,fellowship=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RosterConfig::from_env();
    tracing::info!(
        update_timeout_ms = config.update_timeout.as_millis() as u64,
        "Starting Fellowship roster"
    );

    let service = RosterService::with_parts(
        Arc::new(BuiltInRoster::new()),
        Arc::new(SystemClock::new()),
        config,
    )?;

    for (position, member) in service.fellowship().iter().enumerate() {
        tracing::info!(position = position + 1, "{}", member);
    }
    for ring in Ring::all() {
        if let Some(bearer) = service.ring_bearer(*ring) {
            tracing::info!(ring = %ring, bearer = %bearer.name(), "Ring bearer");
        }
    }

    let report = service.update()?;
    tracing::info!(
        members = report.members_checked,
        ring_bearers = report.ring_bearers_checked,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "Roster refreshed"
    );

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
