use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;

use warehouse_pulse::snapshot::{MySqlSnapshotStore, SnapshotStore};
use warehouse_pulse::{AuditConfig, Auditor};

/// Audit the storage footprint of a metastore-backed SQL warehouse
#[derive(Parser)]
#[command(name = "warehouse-pulse", version)]
struct Args {
    /// Path to the audit configuration file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Run the full traversal but print entries instead of persisting them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    info!("Starting Warehouse Pulse");

    let config = AuditConfig::from_yaml_file(&args.config)?;
    let snapshot_config = config.snapshot.clone();

    let auditor = Auditor::builder(config).build().await?;
    let snapshot = auditor.run().await?;

    if args.dry_run {
        for entry in &snapshot.entries {
            println!("{}\n", entry);
        }
        info!(
            "Dry run, not persisting entries={} captured_on={}",
            snapshot.entries.len(),
            snapshot.captured_on
        );
        return Ok(());
    }

    let snapshot_config = snapshot_config
        .ok_or("config has no snapshot section; use --dry-run to skip persistence")?;
    let store = MySqlSnapshotStore::connect(&snapshot_config.dsn, snapshot_config.table).await?;
    store.record(&snapshot).await?;

    Ok(())
}
