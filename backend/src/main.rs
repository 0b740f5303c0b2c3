//! Backend entry-point: wires REST endpoints and OpenAPI docs.

use std::env;
use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::{App, HttpServer, web};
use chrono::{Duration, Utc};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;

use backend::domain::UserId;
use backend::domain::ports::{FIXTURE_USER_ID, FixtureLoginService, TaskRepository};
use backend::domain::{TaskStatus, TaskTitle};
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::tasks::list_tasks;
use backend::inbound::http::users::login;
use backend::outbound::persistence::{InMemoryTaskRepository, TaskDraft, TaskListQuery};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    let key = match std::fs::read(&key_path) {
        Ok(bytes) => Key::derive_from(&bytes),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Key::generate()
            } else {
                return Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )));
            }
        }
    };

    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let repository = Arc::new(InMemoryTaskRepository::new());
    if env::var("TASKS_SEED_DEMO").ok().as_deref() == Some("1") {
        seed_demo_tasks(&repository).map_err(std::io::Error::other)?;
    }
    let state = HttpState::new(
        Arc::new(FixtureLoginService),
        Arc::new(TaskListQuery::new(repository as Arc<dyn TaskRepository>)),
    );

    let health_state = web::Data::new(HealthState::new());
    // Clone for server factory so readiness probe remains accessible.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(
            server_health_state.clone(),
            state.clone(),
            key.clone(),
            cookie_secure,
        )
    })
    .bind(("0.0.0.0", 8080))?;

    health_state.mark_ready();
    server.run().await
}

fn build_app(
    health_state: web::Data<HealthState>,
    state: HttpState,
    key: Key,
    cookie_secure: bool,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build();

    let api = web::scope("/api")
        .wrap(session)
        .app_data(web::Data::new(state))
        .service(login)
        .service(list_tasks);

    let app = App::new()
        .app_data(health_state)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.route(
        "/api-docs/openapi.json",
        web::get().to(|| async { web::Json(backend::ApiDoc::openapi()) }),
    );

    app
}

/// Seed a handful of rows for the fixture principal so a fresh server has
/// something to list.
fn seed_demo_tasks(repository: &InMemoryTaskRepository) -> Result<(), String> {
    let owner = UserId::new(FIXTURE_USER_ID).map_err(|e| e.to_string())?;
    let now = Utc::now();
    let drafts = [
        ("Set up project board", TaskStatus::Done, 3),
        ("Write the quarterly report", TaskStatus::InProgress, 2),
        ("Review open pull requests", TaskStatus::Pending, 1),
    ];
    for (title, status, hours_ago) in drafts {
        repository
            .insert(TaskDraft {
                title: TaskTitle::new(title).map_err(|e| e.to_string())?,
                status,
                owner_id: owner.clone(),
                created_at: now - Duration::hours(hours_ago),
            })
            .map_err(|e| e.to_string())?;
    }
    Ok(())
}
