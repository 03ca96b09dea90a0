// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Hitch — declarative plugin-attachment management
//
//  Engine:     hitch-core (normalize / drift / encode / identity)
//  Transport:  hitch-admin (gateway admin API over reqwest)
//  Lifecycle:  hitch-reconcile (create / read / update / delete)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::HitchConfig;
use hitch_admin::AdminHttpClient;
use hitch_core::attachment::{AttachmentSpec, ScopedConfigSpec};
use hitch_core::normalize;
use hitch_reconcile::{plugin, scoped};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "hitch", version, about = "Declarative gateway plugin-attachment management")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "hitch.yaml")]
    config: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage plugin attachments (global / service / route / consumer scope)
    Plugin {
        #[command(subcommand)]
        command: PluginCommand,
    },
    /// Manage per-consumer plugin configs
    Scoped {
        #[command(subcommand)]
        command: ScopedCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PluginCommand {
    /// Create the attachment described by a manifest, or update it in place
    /// when --id is given
    Apply {
        manifest: PathBuf,
        /// Existing attachment id to update instead of creating
        #[arg(long)]
        id: Option<String>,
    },
    /// Read an attachment and print its observed state
    Get { id: String },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
enum ScopedCommand {
    /// Create the scoped config described by a manifest (this kind has no
    /// in-place update; re-apply after delete to change it)
    Apply { manifest: PathBuf },
    /// Read a scoped config by its composite consumer|plugin|id identifier
    Get { id: String },
    Delete { id: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ── Tracing ──
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_target(false)
        .init();

    // ── Config ──
    let config = if cli.config.exists() {
        info!(path = %cli.config.display(), "Loading config file");
        HitchConfig::load(&cli.config)?
    } else {
        info!("No config file found, using defaults");
        HitchConfig::default()
    };

    let mut admin = AdminHttpClient::new(&config.admin.url)
        .with_timeout(Duration::from_secs(config.admin.timeout_secs));
    if let Some(key) = &config.admin.api_key {
        admin = admin.with_api_key(key);
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(run(cli.command, &admin))
}

async fn run(command: Command, admin: &AdminHttpClient) -> anyhow::Result<()> {
    match command {
        Command::Plugin { command } => run_plugin(command, admin).await,
        Command::Scoped { command } => run_scoped(command, admin).await,
    }
}

async fn run_plugin(command: PluginCommand, admin: &AdminHttpClient) -> anyhow::Result<()> {
    match command {
        PluginCommand::Apply { manifest, id } => {
            let spec: AttachmentSpec = load_manifest(&manifest)?;
            validate_declared_blob(spec.config.config_json.as_deref())?;
            let state = match id {
                Some(id) => plugin::update(admin, &id, &spec).await?,
                None => plugin::create(admin, &spec).await?,
            };
            match state {
                Some(state) => print_state(&state)?,
                None => warn!("attachment vanished before read-back; re-apply to recreate"),
            }
        }
        PluginCommand::Get { id } => match plugin::read(admin, &id).await? {
            Some(state) => print_state(&state)?,
            None => warn!(id = %id, "attachment no longer exists on the gateway; local identity cleared"),
        },
        PluginCommand::Delete { id } => plugin::delete(admin, &id).await?,
    }
    Ok(())
}

async fn run_scoped(command: ScopedCommand, admin: &AdminHttpClient) -> anyhow::Result<()> {
    match command {
        ScopedCommand::Apply { manifest } => {
            let spec: ScopedConfigSpec = load_manifest(&manifest)?;
            validate_declared_blob(spec.config.config_json.as_deref())?;
            let state = scoped::create(admin, &spec).await?;
            print_state(&state)?;
        }
        ScopedCommand::Get { id } => print_state(&scoped::read(admin, &id).await?)?,
        ScopedCommand::Delete { id } => scoped::delete(admin, &id).await?,
    }
    Ok(())
}

fn load_manifest<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading manifest {}", path.display()))?;
    serde_yaml::from_str(&raw).with_context(|| format!("parsing manifest {}", path.display()))
}

/// Schema-boundary check: a declared config blob must be a well-formed JSON
/// object before anything is sent to the gateway.
fn validate_declared_blob(blob: Option<&str>) -> anyhow::Result<()> {
    if let Some(blob) = blob.filter(|b| !b.is_empty()) {
        normalize::validate(blob).context("config_json in manifest")?;
    }
    Ok(())
}

fn print_state<T: serde::Serialize>(state: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(state)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn manifest_with_mapping_config_parses() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(
            tmpfile,
            "name: rate-limiting\nservice_id: s1\nconfig:\n  minute: \"10\"\n"
        )
        .unwrap();
        let spec: AttachmentSpec = load_manifest(tmpfile.path()).unwrap();
        assert_eq!(spec.name, "rate-limiting");
        assert_eq!(spec.config.config.unwrap()["minute"], "10");
    }

    #[test]
    fn manifest_blob_is_validated_at_the_boundary() {
        assert!(validate_declared_blob(Some(r#"{"minute":10}"#)).is_ok());
        assert!(validate_declared_blob(Some("")).is_ok());
        assert!(validate_declared_blob(None).is_ok());
        assert!(validate_declared_blob(Some("[1,2]")).is_err());
    }
}
