//! Semantix SEO - Main Server
//!
//! Semantic SEO analysis API with token-protected admin routes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use semantix_seo::auth::jwt::{encode_jwt, TokenSubject, MANAGE_OPTIONS};
use semantix_seo::auth::nonce::{create_nonce, REST_ACTION};
use semantix_seo::schema::{projects_table_ddl, DEFAULT_CHARSET_COLLATE};
use semantix_seo::Config;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "semantix")]
#[command(about = "Semantix SEO Analyzer Server")]
struct Cli {
    /// Path to the YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Mint a bearer token and a matching request nonce
    IssueToken {
        /// Numeric user id
        #[arg(long)]
        user_id: u64,

        /// Display name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Capabilities to grant (repeatable)
        #[arg(long = "capability", default_value = MANAGE_OPTIONS)]
        capabilities: Vec<String>,

        /// Token lifetime in seconds (defaults to the configured expiry)
        #[arg(long)]
        expiry_secs: Option<u64>,
    },

    /// Print the projects table DDL
    Schema {
        /// Table name prefix
        #[arg(long, default_value = "wp_")]
        prefix: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,semantix_seo=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_yaml_and_env(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server_port = port;
            }
            semantix_seo::start_server(config).await
        }
        Commands::IssueToken {
            user_id,
            name,
            email,
            capabilities,
            expiry_secs,
        } => issue_token(&config, user_id, &name, &email, &capabilities, expiry_secs),
        Commands::Schema { prefix } => {
            println!("{}", projects_table_ddl(&prefix, DEFAULT_CHARSET_COLLATE));
            Ok(())
        }
    }
}

fn issue_token(
    config: &Config,
    user_id: u64,
    name: &str,
    email: &str,
    capabilities: &[String],
    expiry_secs: Option<u64>,
) -> Result<()> {
    let auth = config
        .auth_config
        .as_ref()
        .context("No auth section configured; set SEMANTIX_JWT_SECRET or add `auth:` to config.yaml")?;

    let subject = TokenSubject {
        user_id,
        email,
        name,
        capabilities,
    };
    let token = encode_jwt(
        &subject,
        &auth.jwt_secret,
        expiry_secs.unwrap_or(auth.jwt_expiry_secs),
    )?;
    let nonce = create_nonce(
        auth.nonce_secret(),
        REST_ACTION,
        &user_id.to_string(),
        chrono::Utc::now().timestamp(),
        auth.nonce_lifetime_secs,
    );

    tracing::info!("Issued token for user {} ({:?})", user_id, capabilities);

    let output = serde_json::json!({
        "token": token,
        "nonce": nonce,
        "api_url": config.api_url(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
