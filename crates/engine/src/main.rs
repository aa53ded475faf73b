//! Group Contact Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use groupcontact_engine::{
    api,
    infrastructure::{
        directory::InMemoryDirectory, ports::ContactDirectory, settings::SkillSettings,
    },
    App,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may be started from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "groupcontact_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Group Contact Engine");

    // Load configuration
    let settings = SkillSettings::from_env();
    tracing::info!(
        skill_path = %settings.skill_path,
        number_policy = %settings.number_policy,
        "Skill configured"
    );

    let directory: Arc<dyn ContactDirectory> = Arc::new(InMemoryDirectory::seeded());
    tracing::info!(contacts = directory.count().await?, "Contact directory seeded");

    let app = Arc::new(App::new(directory, &settings));

    let router = api::http::routes(&settings.skill_path)
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = format!("{}:{}", settings.server_host, settings.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
