#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;
use ucsb_course_api::entities::Entity;
use ucsb_course_api::extractors::{ROLES_HEADER, USER_HEADER};
use ucsb_course_api::{resource_routes, AppError, InMemoryRepository, Repository};

pub const USER: &str = "ROLE_USER";
pub const ADMIN: &str = "ROLE_ADMIN,ROLE_USER";

#[derive(Default, Debug)]
pub struct Calls {
    pub find_all: AtomicUsize,
    pub find_by_id: AtomicUsize,
    pub save: AtomicUsize,
    pub delete: AtomicUsize,
}

/// In-memory repository that counts every call, so tests can assert what a handler touched.
pub struct RecordingRepository<E> {
    inner: InMemoryRepository<E>,
    pub calls: Calls,
    pub saved: std::sync::Mutex<Vec<E>>,
}

impl<E: Entity> RecordingRepository<E> {
    pub fn with_rows(rows: impl IntoIterator<Item = E>) -> Arc<Self> {
        Arc::new(RecordingRepository {
            inner: InMemoryRepository::with_rows(rows),
            calls: Calls::default(),
            saved: std::sync::Mutex::new(Vec::new()),
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::with_rows(Vec::new())
    }

    pub fn saves(&self) -> usize {
        self.calls.save.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.calls.delete.load(Ordering::SeqCst)
    }

    pub fn lookups(&self) -> usize {
        self.calls.find_by_id.load(Ordering::SeqCst)
    }

    pub fn listings(&self) -> usize {
        self.calls.find_all.load(Ordering::SeqCst)
    }

    pub fn last_saved(&self) -> Option<E> {
        self.saved.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for RecordingRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>, AppError> {
        self.calls.find_all.fetch_add(1, Ordering::SeqCst);
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, AppError> {
        self.calls.find_by_id.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn save(&self, entity: E) -> Result<E, AppError> {
        self.calls.save.fetch_add(1, Ordering::SeqCst);
        self.saved.lock().unwrap().push(entity.clone());
        self.inner.save(entity).await
    }

    async fn delete(&self, entity: &E) -> Result<(), AppError> {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(entity).await
    }
}

pub fn router<E: Entity>(repo: &Arc<RecordingRepository<E>>) -> Router {
    let repo: Arc<dyn Repository<E>> = repo.clone();
    resource_routes(repo)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or_else(|e| panic!("body is not JSON ({}): {}", e, self.body))
    }
}

/// Send one request. `roles` None means anonymous.
pub async fn send(router: &Router, method: Method, uri: &str, roles: Option<&str>, body: Option<String>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(roles) = roles {
        builder = builder
            .header(ROLES_HEADER, roles)
            .header(USER_HEADER, "cgaucho@ucsb.edu");
    }
    let body = match body {
        Some(json) => {
            builder = builder
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::CONTENT_LENGTH, json.len());
            Body::from(json)
        }
        None => Body::empty(),
    };
    let response = router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    TestResponse {
        status,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(router: &Router, uri: &str, roles: Option<&str>) -> TestResponse {
    send(router, Method::GET, uri, roles, None).await
}

pub async fn post(router: &Router, uri: &str, roles: Option<&str>) -> TestResponse {
    send(router, Method::POST, uri, roles, None).await
}

pub async fn put(router: &Router, uri: &str, roles: Option<&str>, body: String) -> TestResponse {
    send(router, Method::PUT, uri, roles, Some(body)).await
}

pub async fn delete(router: &Router, uri: &str, roles: Option<&str>) -> TestResponse {
    send(router, Method::DELETE, uri, roles, None).await
}
