//! Semantix SEO - CLI Tool
//!
//! Command-line interface for the analysis API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use semantix_seo::client::view::{self, EntityFilter, ViewMode};
use semantix_seo::client::{ApiClient, ClientContext, ClientError};
use semantix_seo::seo::{ClusterRequest, NewProject};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "semantix-cli")]
#[command(about = "CLI for the Semantix SEO Analyzer")]
struct Cli {
    /// API root, e.g. https://example.com/wp-json/semantix/v1/
    #[arg(long, env = "SEMANTIX_API_URL")]
    api_url: Option<String>,

    /// Request nonce
    #[arg(long, env = "SEMANTIX_NONCE")]
    nonce: Option<String>,

    /// Bearer token
    #[arg(long, env = "SEMANTIX_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Projects and recent activity
    Dashboard,

    /// Project operations
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Recent analysis activity
    Activities,

    /// Browse content entities
    Entities {
        /// Match against title or description
        #[arg(short, long)]
        search: Option<String>,

        /// Only entities of this type
        #[arg(long = "type")]
        entity_type: Option<String>,

        /// Only entities with this status
        #[arg(long)]
        status: Option<String>,
    },

    /// Generate a topic cluster
    Clusters {
        /// Core topic
        #[arg(short, long)]
        topic: String,

        #[arg(long)]
        region: Option<String>,

        /// Content format
        #[arg(long)]
        format: Option<String>,

        /// Cluster depth
        #[arg(long)]
        depth: Option<u32>,

        #[arg(long, value_enum, default_value_t = ViewMode::Tree)]
        view: ViewMode,

        /// Collapse the node with this id (repeatable)
        #[arg(long)]
        collapse: Vec<String>,
    },
}

#[derive(Subcommand)]
enum ProjectAction {
    /// List all projects
    List,

    /// Create a new project
    Create {
        /// Project name
        #[arg(short, long)]
        name: String,

        /// Site URL
        #[arg(short, long)]
        url: String,

        /// Project description
        #[arg(short, long)]
        desc: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,semantix_seo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut context = ClientContext::from_env();
    if let Some(api_url) = cli.api_url {
        context.api_url = api_url;
    }
    if let Some(nonce) = cli.nonce {
        context.nonce = nonce;
    }
    let mut client = ApiClient::new(context);
    if let Some(token) = cli.token {
        client = client.with_bearer_token(token);
    }

    let (result, failure) = match cli.command {
        Commands::Dashboard => (dashboard(&client).await, "Error loading data"),
        Commands::Projects { action } => match action {
            ProjectAction::List => (list_projects(&client).await, "Error loading data"),
            ProjectAction::Create { name, url, desc } => (
                create_project(&client, name, url, desc).await,
                "Failed to create project. Please try again.",
            ),
        },
        Commands::Activities => (list_activities(&client).await, "Error loading data"),
        Commands::Entities {
            search,
            entity_type,
            status,
        } => {
            let filter = EntityFilter {
                query: search,
                entity_type,
                status,
            };
            (
                list_entities(&client, &filter).await,
                "Error loading entities",
            )
        }
        Commands::Clusters {
            topic,
            region,
            format,
            depth,
            view,
            collapse,
        } => {
            let request = ClusterRequest {
                core_topic: topic,
                region,
                format,
                depth,
            };
            (
                clusters(&client, &request, view, &collapse).await,
                "Error generating clusters",
            )
        }
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{}", view::error_banner(&format!("{}: {}", failure, e)));
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn dashboard(client: &ApiClient) -> Result<(), ClientError> {
    let (projects, activities) =
        futures::try_join!(client.list_projects(), client.list_activities())?;

    println!("Projects");
    println!("{}", view::render_projects(&projects));
    println!();
    println!("Recent Activity");
    println!("{}", view::render_activities(&activities));
    Ok(())
}

async fn list_projects(client: &ApiClient) -> Result<(), ClientError> {
    let projects = client.list_projects().await?;
    println!("{}", view::render_projects(&projects));
    Ok(())
}

async fn create_project(
    client: &ApiClient,
    name: String,
    url: String,
    description: Option<String>,
) -> Result<(), ClientError> {
    let project = client
        .create_project(&NewProject {
            name,
            url,
            description,
        })
        .await?;

    println!("Created project: {} ({})", project.name, project.id);
    Ok(())
}

async fn list_activities(client: &ApiClient) -> Result<(), ClientError> {
    let activities = client.list_activities().await?;
    println!("{}", view::render_activities(&activities));
    Ok(())
}

async fn list_entities(client: &ApiClient, filter: &EntityFilter) -> Result<(), ClientError> {
    let entities = client.list_entities().await?;
    println!("{}", view::render_entities(&filter.apply(&entities)));
    Ok(())
}

async fn clusters(
    client: &ApiClient,
    request: &ClusterRequest,
    mode: ViewMode,
    collapse: &[String],
) -> Result<(), ClientError> {
    let mut root = client.generate_clusters(request).await?;
    for id in collapse {
        if !root.set_expanded(id, false) {
            tracing::warn!("No cluster node with id '{}'", id);
        }
    }

    println!("{}", view::render_cluster(&root, mode));
    Ok(())
}
