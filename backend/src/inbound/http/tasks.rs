//! Tasks API handlers.
//!
//! ```text
//! GET /api/tasks
//! ```
//!
//! Returns the authenticated principal's tasks, newest first. Callers
//! without a session principal receive `401 Unauthorized` before the store
//! is touched.

use actix_web::{get, web};

use crate::domain::Task;
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// List the current user's tasks.
///
/// Scoping happens inside the store query (owner id pushed down into the
/// repository read), so the response never materialises another
/// principal's rows and the work done is proportional to the caller's own
/// tasks.
#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "Tasks owned by the caller, newest first", body = [Task]),
        (status = 401, description = "No authenticated principal", body = crate::domain::Error),
        (status = 500, description = "Internal server error", body = crate::domain::Error),
        (status = 503, description = "Task store unavailable", body = crate::domain::Error)
    ),
    tags = ["tasks"],
    operation_id = "listTasksForCurrentUser"
)]
#[get("/tasks")]
pub async fn list_tasks(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Task>>> {
    let user_id = session.require_user_id()?;
    let tasks = state.tasks.list_tasks_for_user(&user_id).await?;
    Ok(web::Json(tasks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        FIXTURE_USER_ID, FixtureLoginService, MockTasksQuery, TaskRepository, TasksQuery,
    };
    use crate::domain::{Error, TaskId, TaskStatus, TaskTitle, UserId};
    use crate::outbound::persistence::{InMemoryTaskRepository, TaskDraft, TaskListQuery};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_app(
        tasks: Arc<dyn TasksQuery>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState::new(Arc::new(FixtureLoginService), tasks);
        App::new()
            .app_data(web::Data::new(state))
            .wrap(crate::inbound::http::test_utils::test_session_middleware())
            .service(
                web::scope("/api")
                    .service(crate::inbound::http::users::login)
                    .service(list_tasks),
            )
    }

    async fn login_and_get_cookie(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    ) -> actix_web::cookie::Cookie<'static> {
        let login_req = actix_test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "username": "admin", "password": "password" }))
            .to_request();
        let login_res = actix_test::call_service(app, login_req).await;
        assert!(login_res.status().is_success());
        login_res
            .response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("session cookie")
            .into_owned()
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0)
            .single()
            .expect("valid time")
    }

    fn seed(
        repository: &InMemoryTaskRepository,
        title: &str,
        status: TaskStatus,
        owner: &UserId,
        created_at: DateTime<Utc>,
    ) {
        repository
            .insert(TaskDraft {
                title: TaskTitle::new(title).expect("valid title"),
                status,
                owner_id: owner.clone(),
                created_at,
            })
            .expect("seed insert");
    }

    /// Counting wrapper that fails the test if the store is ever queried.
    struct CountingQuery {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl TasksQuery for CountingQuery {
        async fn list_tasks_for_user(
            &self,
            _authenticated_user: &UserId,
        ) -> Result<Vec<crate::domain::Task>, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    #[actix_web::test]
    async fn rejects_without_session_and_never_touches_the_store() {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = actix_test::init_service(test_app(Arc::new(CountingQuery {
            calls: calls.clone(),
        })))
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/tasks").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Unauthenticated")
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn returns_only_the_callers_tasks_newest_first() {
        let owner = UserId::new(FIXTURE_USER_ID).expect("fixture id");
        let stranger = UserId::random();
        let repository = Arc::new(InMemoryTaskRepository::new());
        seed(&repository, "B", TaskStatus::Done, &owner, at(8));
        seed(&repository, "other", TaskStatus::Pending, &stranger, at(12));
        seed(&repository, "A", TaskStatus::Pending, &owner, at(10));

        let query = Arc::new(TaskListQuery::new(
            repository.clone() as Arc<dyn TaskRepository>
        ));
        let app = actix_test::init_service(test_app(query)).await;
        let cookie = login_and_get_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/tasks")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let value: Value = actix_test::read_body_json(response).await;
        let rows = value.as_array().expect("array body");
        let titles: Vec<&str> = rows
            .iter()
            .filter_map(|row| row.get("title").and_then(Value::as_str))
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert!(
            rows.iter()
                .all(|row| row.get("ownerId").and_then(Value::as_str) == Some(FIXTURE_USER_ID))
        );
    }

    #[actix_web::test]
    async fn zero_owned_tasks_is_an_empty_success() {
        let query = Arc::new(TaskListQuery::new(
            Arc::new(InMemoryTaskRepository::new()) as Arc<dyn TaskRepository>,
        ));
        let app = actix_test::init_service(test_app(query)).await;
        let cookie = login_and_get_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/tasks")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value, json!([]));
    }

    #[actix_web::test]
    async fn store_outage_is_a_service_error_not_an_empty_list() {
        let mut query = MockTasksQuery::new();
        query
            .expect_list_tasks_for_user()
            .return_once(|_| Err(Error::service_unavailable("task store unreachable")));

        let app = actix_test::init_service(test_app(Arc::new(query))).await;
        let cookie = login_and_get_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/tasks")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("service_unavailable")
        );
    }

    #[actix_web::test]
    async fn handler_receives_the_session_principal() {
        let owner = UserId::new(FIXTURE_USER_ID).expect("fixture id");
        let mut query = MockTasksQuery::new();
        query
            .expect_list_tasks_for_user()
            .withf(move |requested| *requested == owner)
            .times(1)
            .return_once(|_| Ok(Vec::new()));

        let app = actix_test::init_service(test_app(Arc::new(query))).await;
        let cookie = login_and_get_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/tasks")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn serialises_rows_camel_case() {
        let owner = UserId::new(FIXTURE_USER_ID).expect("fixture id");
        let row = crate::domain::Task {
            id: TaskId::new(1),
            title: TaskTitle::new("Write report").expect("valid title"),
            status: TaskStatus::InProgress,
            owner_id: owner,
            created_at: at(9),
        };
        let mut query = MockTasksQuery::new();
        query
            .expect_list_tasks_for_user()
            .return_once(move |_| Ok(vec![row]));

        let app = actix_test::init_service(test_app(Arc::new(query))).await;
        let cookie = login_and_get_cookie(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/tasks")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let value: Value = actix_test::read_body_json(response).await;
        let first = value.as_array().and_then(|rows| rows.first()).expect("one row");
        assert_eq!(
            first.get("status").and_then(Value::as_str),
            Some("in-progress")
        );
        assert!(first.get("createdAt").is_some());
        assert!(first.get("created_at").is_none());
    }
}
