//! Router-level tests for the job board, backed by an in-memory repository

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use auth::{AuthConfig, TokenService, UserRole};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{Duration, Utc};
use kernel::filter::ListFilter;
use kernel::id::{JobId, UserId};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::domain::entity::{Job, NewJob};
use crate::domain::repository::JobRepository;
use crate::domain::value_object::JobStatus;
use crate::error::{JobError, JobResult};
use crate::presentation::router::{jobs_admin_router_generic, jobs_router_generic};

// ============================================================================
// Fixtures
// ============================================================================

const ADMIN_ID: i64 = 1;
const POSTER_ID: i64 = 2;

#[derive(Clone)]
struct InMemoryJobRepository {
    jobs: Arc<Mutex<Vec<Job>>>,
    usernames: Arc<HashMap<i64, String>>,
}

impl Default for InMemoryJobRepository {
    fn default() -> Self {
        let usernames = HashMap::from([
            (ADMIN_ID, "admin".to_string()),
            (POSTER_ID, "user1".to_string()),
        ]);
        Self {
            jobs: Arc::default(),
            usernames: Arc::new(usernames),
        }
    }
}

impl InMemoryJobRepository {
    fn sorted(mut jobs: Vec<Job>) -> Vec<Job> {
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.job_id.cmp(&a.job_id)));
        jobs
    }
}

impl JobRepository for InMemoryJobRepository {
    async fn list_approved(&self, filter: &ListFilter) -> JobResult<Vec<Job>> {
        let jobs = self.jobs.lock().unwrap();
        Ok(Self::sorted(
            jobs.iter()
                .filter(|j| j.status.is_approved() && filter.matches(&j.title, &j.category))
                .cloned()
                .collect(),
        ))
    }

    async fn list_pending(&self) -> JobResult<Vec<Job>> {
        let jobs = self.jobs.lock().unwrap();
        Ok(Self::sorted(
            jobs.iter()
                .filter(|j| !j.status.is_approved())
                .cloned()
                .collect(),
        ))
    }

    async fn create(&self, job: &NewJob) -> JobResult<Job> {
        let owner_username = self
            .usernames
            .get(&job.owner_id.value())
            .cloned()
            .ok_or_else(|| JobError::Internal("unknown owner".into()))?;

        let mut jobs = self.jobs.lock().unwrap();
        let next_id = jobs.iter().map(|j| j.job_id.value()).max().unwrap_or(0) + 1;
        let stored = Job {
            job_id: JobId::new(next_id),
            title: job.title.clone(),
            description: job.description.clone(),
            salary: job.salary.clone(),
            category: job.category.clone(),
            company: job.company.clone(),
            owner_id: job.owner_id,
            owner_username,
            status: JobStatus::Pending,
            created_at: Utc::now() + Duration::milliseconds(next_id),
        };
        jobs.push(stored.clone());
        Ok(stored)
    }

    async fn approve(&self, job_id: JobId) -> JobResult<Option<Job>> {
        let mut jobs = self.jobs.lock().unwrap();
        Ok(jobs.iter_mut().find(|j| j.job_id == job_id).map(|j| {
            j.status = JobStatus::Approved;
            j.clone()
        }))
    }

    async fn delete(&self, job_id: JobId) -> JobResult<Option<JobStatus>> {
        let mut jobs = self.jobs.lock().unwrap();
        let position = jobs.iter().position(|j| j.job_id == job_id);
        Ok(position.map(|i| jobs.remove(i).status))
    }
}

struct Board {
    public: Router,
    admin: Router,
    admin_auth: String,
    user_auth: String,
}

fn board() -> Board {
    let tokens = Arc::new(TokenService::new(&AuthConfig::new("test-secret")));
    let repo = InMemoryJobRepository::default();

    let admin_token = tokens
        .issue(UserId::new(ADMIN_ID), "admin", UserRole::Admin)
        .unwrap();
    let user_token = tokens
        .issue(UserId::new(POSTER_ID), "user1", UserRole::User)
        .unwrap();

    Board {
        public: jobs_router_generic(repo.clone(), tokens.clone()),
        admin: jobs_admin_router_generic(repo, tokens),
        admin_auth: format!("Bearer {admin_token}"),
        user_auth: format!("Bearer {user_token}"),
    }
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn request(method: &str, uri: &str, auth: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn posting(title: &str, category: &str) -> Value {
    json!({
        "title": title,
        "description": "Полный день, официальное оформление",
        "salary": "от 80 000 руб.",
        "category": category,
        "company": "СтройМонтаж",
    })
}

async fn post_job(board: &Board, title: &str, category: &str) -> i64 {
    let (status, body) = call(
        &board.public,
        request("POST", "/", Some(&board.user_auth), Some(posting(title, category))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_i64().unwrap())
        .collect()
}

// ============================================================================
// Posting
// ============================================================================

#[tokio::test]
async fn test_create_requires_token() {
    let board = board();

    let (status, body) = call(
        &board.public,
        request("POST", "/", None, Some(posting("Прораб", "Строительство"))),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "no token provided");
}

#[tokio::test]
async fn test_created_job_is_pending_with_poster_username() {
    let board = board();

    let (status, body) = call(
        &board.public,
        request(
            "POST",
            "/",
            Some(&board.user_auth),
            Some(posting("Прораб", "Строительство")),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["approved"], false);
    assert_eq!(body["user_id"], POSTER_ID);
    assert_eq!(body["username"], "user1");
    assert_eq!(body["title"], "Прораб");
}

#[tokio::test]
async fn test_create_requires_all_fields() {
    let board = board();

    let (status, body) = call(
        &board.public,
        request(
            "POST",
            "/",
            Some(&board.user_auth),
            Some(json!({ "title": "Прораб", "company": "  " })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "all fields are required");
}

// ============================================================================
// Moderation
// ============================================================================

#[tokio::test]
async fn test_pending_job_is_hidden_until_approved() {
    let board = board();
    let id = post_job(&board, "Прораб", "Строительство").await;

    let (_, public) = call(&board.public, request("GET", "/", None, None)).await;
    assert!(ids(&public).is_empty());

    let (status, pending) = call(
        &board.admin,
        request("GET", "/", Some(&board.admin_auth), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&pending), [id]);

    let (status, approved) = call(
        &board.admin,
        request("PUT", &format!("/{id}/approve"), Some(&board.admin_auth), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["approved"], true);
    assert_eq!(approved["username"], "user1");

    let (_, public) = call(&board.public, request("GET", "/", None, None)).await;
    assert_eq!(ids(&public), [id]);

    let (_, pending) = call(
        &board.admin,
        request("GET", "/", Some(&board.admin_auth), None),
    )
    .await;
    assert!(ids(&pending).is_empty());
}

#[tokio::test]
async fn test_approve_is_idempotent_and_unknown_id_is_not_found() {
    let board = board();
    let id = post_job(&board, "Прораб", "Строительство").await;
    let uri = format!("/{id}/approve");

    for _ in 0..2 {
        let (status, body) = call(
            &board.admin,
            request("PUT", &uri, Some(&board.admin_auth), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["approved"], true);
    }

    let (status, body) = call(
        &board.admin,
        request("PUT", "/999/approve", Some(&board.admin_auth), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "job not found");
}

#[tokio::test]
async fn test_delete_removes_from_both_listings() {
    let board = board();
    let pending_id = post_job(&board, "Сварщик", "Строительство").await;
    let approved_id = post_job(&board, "Прораб", "Строительство").await;
    call(
        &board.admin,
        request("PUT", &format!("/{approved_id}/approve"), Some(&board.admin_auth), None),
    )
    .await;

    for id in [pending_id, approved_id] {
        let (status, body) = call(
            &board.admin,
            request("DELETE", &format!("/{id}"), Some(&board.admin_auth), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "job deleted");
    }

    let (_, public) = call(&board.public, request("GET", "/", None, None)).await;
    assert!(ids(&public).is_empty());
    let (_, pending) = call(
        &board.admin,
        request("GET", "/", Some(&board.admin_auth), None),
    )
    .await;
    assert!(ids(&pending).is_empty());

    let (status, body) = call(
        &board.admin,
        request("DELETE", &format!("/{pending_id}"), Some(&board.admin_auth), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "job not found");
}

#[tokio::test]
async fn test_admin_routes_reject_non_admins() {
    let board = board();
    let id = post_job(&board, "Прораб", "Строительство").await;

    for (method, uri) in [
        ("GET", "/".to_string()),
        ("PUT", format!("/{id}/approve")),
        ("DELETE", format!("/{id}")),
    ] {
        let (status, body) = call(&board.admin, request(method, &uri, None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body["message"], "no token provided");

        let (status, body) = call(
            &board.admin,
            request(method, &uri, Some(&board.user_auth), None),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{method} {uri}");
        assert_eq!(body["message"], "insufficient permissions");
    }

    // Still pending after the rejected attempts
    let (_, pending) = call(
        &board.admin,
        request("GET", "/", Some(&board.admin_auth), None),
    )
    .await;
    assert_eq!(ids(&pending), [id]);
}

// ============================================================================
// Public listing
// ============================================================================

#[tokio::test]
async fn test_public_listing_filters_and_orders() {
    let board = board();
    let first = post_job(&board, "Прораб участка", "Строительство").await;
    let second = post_job(&board, "Электрик", "Электромонтаж").await;
    let third = post_job(&board, "Помощник прораба", "Строительство").await;
    for id in [first, second, third] {
        call(
            &board.admin,
            request("PUT", &format!("/{id}/approve"), Some(&board.admin_auth), None),
        )
        .await;
    }

    let (_, all) = call(&board.public, request("GET", "/?category=all", None, None)).await;
    assert_eq!(ids(&all), [third, second, first]);

    // search=прораб
    let (_, found) = call(
        &board.public,
        request(
            "GET",
            "/?search=%D0%BF%D1%80%D0%BE%D1%80%D0%B0%D0%B1",
            None,
            None,
        ),
    )
    .await;
    assert_eq!(ids(&found), [third, first]);

    // category=Электромонтаж
    let (_, found) = call(
        &board.public,
        request(
            "GET",
            "/?category=%D0%AD%D0%BB%D0%B5%D0%BA%D1%82%D1%80%D0%BE%D0%BC%D0%BE%D0%BD%D1%82%D0%B0%D0%B6",
            None,
            None,
        ),
    )
    .await;
    assert_eq!(ids(&found), [second]);
}
