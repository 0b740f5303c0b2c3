//! Frontend entry-point: log in, mount the task list view once, print it.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use frontend::{HttpTasksApi, TaskListView};

/// Fetch and display the current user's tasks.
#[derive(Debug, Parser)]
#[command(name = "tasks", about = "Display the authenticated user's task list")]
struct Args {
    /// Base URL of the backend.
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    base_url: Url,
    /// Username for session login.
    #[arg(long, default_value = "admin")]
    username: String,
    /// Password for session login.
    #[arg(long, default_value = "password")]
    password: String,
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        tracing::warn!(error = %e, "tracing init failed");
    }

    let args = Args::parse();
    let api = match HttpTasksApi::new(args.base_url) {
        Ok(api) => api,
        Err(error) => {
            tracing::error!(%error, "failed to build HTTP client");
            return std::process::ExitCode::FAILURE;
        }
    };

    if let Err(error) = api.login(&args.username, &args.password).await {
        tracing::error!(%error, "login failed");
        return std::process::ExitCode::FAILURE;
    }

    let mut view = TaskListView::new();
    view.mount(&api).await;
    println!("{}", view.render());
    std::process::ExitCode::SUCCESS
}
