//! `authctl` — drive the auth session library from the terminal.
//!
//! Sessions persist in the file vault between invocations, so
//! `authctl login` followed by `authctl update` behaves like the
//! browser flow it mirrors.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use authkit::net::api::HttpAuthClient;
use authkit::net::types::{LoginCredentials, ProfileUpdate, RegisterCredentials};
use authkit::vault::{FileVault, SessionVault};
use authkit::{AuthConfig, AuthError, SessionStore, StorageError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Auth(#[from] AuthError),
    #[error("vault error: {0}")]
    Storage(#[from] StorageError),
    #[error("output encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Please provide all the values!")]
    MissingValues,
}

#[derive(Parser, Debug)]
#[command(name = "authctl", about = "Auth session CLI")]
struct Cli {
    #[arg(long, env = "AUTHKIT_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "AUTHKIT_VAULT_DIR")]
    vault_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account and start a session.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in with existing credentials.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Update profile fields on the current session.
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Drop the in-memory session; `--purge` also clears the vault.
    Logout {
        #[arg(long, default_value_t = false)]
        purge: bool,
    },
    /// Print the hydrated session's user.
    Whoami,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = AuthConfig::new(&cli.base_url);
    config.vault_dir = cli.vault_dir;

    let dir = match &config.vault_dir {
        Some(dir) => dir.clone(),
        None => FileVault::default_dir()?,
    };
    let vault = SessionVault::new(Arc::new(FileVault::new(dir)));
    let api = Arc::new(HttpAuthClient::new(&config, vault.clone())?);
    let mut store = SessionStore::with_parts(api, vault.clone());

    match cli.command {
        Command::Register { name, email, password } => {
            store
                .register(&RegisterCredentials { name, email, password })
                .await?;
            print_outcome(&store)?;
        }
        Command::Login { email, password } => {
            store.login(&LoginCredentials { email, password }).await?;
            print_outcome(&store)?;
        }
        Command::Update { name, email, last_name, location } => {
            let fields = ProfileUpdate { name, email, last_name, location };
            if fields.is_empty() {
                store.alert_missing_values();
                return Err(CliError::MissingValues);
            }
            store.update(&fields).await?;
            print_outcome(&store)?;
        }
        Command::Logout { purge } => {
            store.logout();
            if purge {
                vault.clear()?;
                println!("logged out, vault cleared");
            } else {
                println!("logged out");
            }
        }
        Command::Whoami => match store.user() {
            Some(user) => println!("{}", serde_json::to_string_pretty(user)?),
            None => println!("not logged in"),
        },
    }

    Ok(())
}

fn print_outcome(store: &SessionStore) -> Result<(), CliError> {
    println!("{}", store.state().alert.text);
    if let Some(user) = store.user() {
        println!("{}", serde_json::to_string_pretty(user)?);
    }
    Ok(())
}
