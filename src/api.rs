//! HTTP client for the timetable backend.

use std::path::Path;
use std::time::Duration;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;
use crate::editor::{Request, Resource};
use crate::upload::UploadTarget;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{operation} failed with status {status}")]
    Status { operation: &'static str, status: StatusCode },

    #[error("invalid backend url: {0}")]
    Url(#[from] url::ParseError),

    #[error("backend url cannot carry a path: {0}")]
    BaseUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Deserialize)]
struct MessageReply {
    #[serde(default)]
    message: String,
}

/// Cheap to clone; the inner client shares one connection pool.
#[derive(Debug, Clone)]
pub struct Api {
    base_url: String,
    client: Client,
}

impl Api {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!(error = %e, "falling back to a default HTTP client");
            Client::new()
        });
        Self { base_url: base_url.into(), client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base url.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::BaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn greeting(&self) -> Result<String> {
        let response = self.client.get(self.endpoint(&[])?).send().await?;
        let reply: MessageReply = ensure_success(response, "greeting")?.json().await?;
        Ok(reply.message)
    }

    pub async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        let url = self.endpoint(&[R::COLLECTION])?;
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        Ok(ensure_success(response, "list")?.json().await?)
    }

    pub async fn create<R: Resource>(&self, record: &R) -> Result<()> {
        let url = self.endpoint(&[R::COLLECTION])?;
        debug!(%url, "POST");
        let response = self.client.post(url).json(record).send().await?;
        ensure_success(response, "create").map(drop)
    }

    pub async fn update<R: Resource>(&self, key: &str, record: &R) -> Result<()> {
        let url = self.endpoint(&[R::COLLECTION, key])?;
        debug!(%url, "PUT");
        let response = self.client.put(url).json(record).send().await?;
        ensure_success(response, "update").map(drop)
    }

    pub async fn delete<R: Resource>(&self, key: &str) -> Result<()> {
        let url = self.endpoint(&[R::COLLECTION, key])?;
        debug!(%url, "DELETE");
        let response = self.client.delete(url).send().await?;
        ensure_success(response, "delete").map(drop)
    }

    pub async fn write<R: Resource>(&self, request: Request<R>) -> Result<()> {
        match request {
            Request::List => self.list::<R>().await.map(drop),
            Request::Create(record) => self.create(&record).await,
            Request::Update { key, record } => self.update(&key, &record).await,
            Request::Delete(key) => self.delete::<R>(&key).await,
        }
    }

    /// Posts the file as multipart form data under the `file` field.
    pub async fn upload(&self, target: UploadTarget, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));

        let url = self.endpoint(&[target.endpoint()])?;
        debug!(%url, "POST multipart");
        let response = self.client.post(url).multipart(form).send().await?;
        let reply: MessageReply = ensure_success(response, "upload")?.json().await?;
        Ok(reply.message)
    }
}

/// Rejects anything that cannot serve as a base for endpoint paths.
pub fn validate_base_url(candidate: &str) -> Result<()> {
    let url = Url::parse(candidate.trim())?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::BaseUrl(candidate.to_string()));
    }
    Ok(())
}

fn ensure_success(response: Response, operation: &'static str) -> Result<Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status { operation, status });
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use axum::extract::{Multipart, Path as UrlPath};
    use axum::routing::{get, post, put};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;
    use super::*;
    use crate::app::state::{Department, Instructor};

    type Log = Arc<Mutex<Vec<String>>>;

    async fn serve(router: Router) -> Api {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Api::new(format!("http://{}", addr), Some(Duration::from_secs(5)))
    }

    fn departments_backend(log: Log) -> Router {
        let on_post = log.clone();
        let on_put = log.clone();
        let on_delete = log;
        Router::new()
            .route(
                "/departments",
                get(|| async { Json(json!([{ "dept_name": "CS" }, { "dept_name": "EE" }])) }).post(
                    move |Json(body): Json<Value>| {
                        let log = on_post.clone();
                        async move {
                            log.lock().unwrap().push(format!("POST {}", body));
                            StatusCode::CREATED
                        }
                    },
                ),
            )
            .route(
                "/departments/{name}",
                put(move |UrlPath(name): UrlPath<String>, Json(body): Json<Value>| {
                    let log = on_put.clone();
                    async move {
                        log.lock().unwrap().push(format!("PUT {} {}", name, body));
                        StatusCode::OK
                    }
                })
                .delete(move |UrlPath(name): UrlPath<String>| {
                    let log = on_delete.clone();
                    async move {
                        log.lock().unwrap().push(format!("DELETE {}", name));
                        StatusCode::OK
                    }
                }),
            )
    }

    #[test]
    fn endpoint_encodes_keys_and_keeps_base_path() {
        let api = Api::new("http://localhost:8001", None);
        assert_eq!(
            api.endpoint(&["departments", "Computer Science"]).unwrap().as_str(),
            "http://localhost:8001/departments/Computer%20Science"
        );
        assert_eq!(
            api.endpoint(&["instructor", "a/b"]).unwrap().as_str(),
            "http://localhost:8001/instructor/a%2Fb"
        );

        let nested = Api::new("http://scheduler.local/api/", None);
        assert_eq!(
            nested.endpoint(&["instructor"]).unwrap().as_str(),
            "http://scheduler.local/api/instructor"
        );
    }

    #[test]
    fn base_url_validation() {
        assert!(validate_base_url("http://localhost:8001").is_ok());
        assert!(validate_base_url("  https://scheduler.example.org/api ").is_ok());
        assert!(matches!(validate_base_url("localhost:8001"), Err(ApiError::BaseUrl(_))));
        assert!(matches!(validate_base_url("not a url"), Err(ApiError::Url(_))));
        assert!(matches!(validate_base_url("mailto:ops@example.org"), Err(ApiError::BaseUrl(_))));
    }

    #[tokio::test]
    async fn lists_departments() {
        let api = serve(departments_backend(Log::default())).await;
        let departments = api.list::<Department>().await.unwrap();
        let names: Vec<_> = departments.iter().map(|d| d.dept_name.as_str()).collect();
        assert_eq!(names, ["CS", "EE"]);
    }

    #[tokio::test]
    async fn writes_are_keyed_by_the_original_name() {
        let log = Log::default();
        let api = serve(departments_backend(log.clone())).await;

        api.write(Request::Create(Department { dept_name: "ME".into() })).await.unwrap();
        api.write(Request::Update {
            key: "Computer Science".into(),
            record: Department { dept_name: "Computing".into() },
        })
        .await
        .unwrap();
        api.write(Request::<Department>::Delete("EE".into())).await.unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                r#"POST {"dept_name":"ME"}"#.to_string(),
                r#"PUT Computer Science {"dept_name":"Computing"}"#.to_string(),
                "DELETE EE".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let router = Router::new().route(
            "/instructor",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR })
                .post(|| async { (StatusCode::BAD_REQUEST, "duplicate id") }),
        );
        let api = serve(router).await;

        let listed = api.list::<Instructor>().await;
        assert!(matches!(
            listed,
            Err(ApiError::Status { operation: "list", status }) if status == StatusCode::INTERNAL_SERVER_ERROR
        ));

        let created = api
            .create(&Instructor { id_number: "I-1".into(), name: "Ada".into(), dept: "CS".into() })
            .await;
        assert!(matches!(created, Err(ApiError::Status { status, .. }) if status == StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn upload_sends_one_file_field() {
        let log = Log::default();
        let on_upload = log.clone();
        let router = Router::new().route(
            "/upload",
            post(move |mut multipart: Multipart| {
                let log = on_upload.clone();
                async move {
                    while let Some(field) = multipart.next_field().await.unwrap() {
                        let name = field.name().unwrap_or_default().to_string();
                        let file_name = field.file_name().unwrap_or_default().to_string();
                        let bytes = field.bytes().await.unwrap();
                        log.lock().unwrap().push(format!("{}:{}:{}", name, file_name, bytes.len()));
                    }
                    Json(json!({ "message": "Instructors uploaded successfully" }))
                }
            }),
        );
        let api = serve(router).await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staff.xlsx");
        std::fs::write(&path, b"spreadsheet").unwrap();

        let message = api.upload(UploadTarget::Instructors, &path).await.unwrap();
        assert_eq!(message, "Instructors uploaded successfully");
        assert_eq!(*log.lock().unwrap(), vec!["file:staff.xlsx:11".to_string()]);
    }

    #[tokio::test]
    async fn upload_reports_status_and_missing_file() {
        let router = Router::new().route(
            "/upload_subjects",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": "bad sheet" }))) }),
        );
        let api = serve(router).await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subjects.xlsx");
        std::fs::write(&path, b"x").unwrap();
        assert!(matches!(
            api.upload(UploadTarget::Subjects, &path).await,
            Err(ApiError::Status { operation: "upload", .. })
        ));

        let missing = dir.path().join("gone.xlsx");
        assert!(matches!(api.upload(UploadTarget::Subjects, &missing).await, Err(ApiError::Io(_))));
    }

    #[tokio::test]
    async fn greeting_reads_root_message() {
        let router = Router::new().route("/", get(|| async { Json(json!({ "message": "Welcome to the Timetable API" })) }));
        let api = serve(router).await;
        assert_eq!(api.greeting().await.unwrap(), "Welcome to the Timetable API");
    }
}
