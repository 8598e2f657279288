use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use report_reader::errors::ReportError;
use report_reader::reader::{ReaderOptions, ReportServerReader, ReportsReader};

const COOKIE_NAME: &str = "sqlAuthCookie";
const COOKIE_VALUE: &str = "token-123";

const CATALOG: &str = r#"{
    "@odata.context": "http://rs/reports/api/v2.0/$metadata#PowerBIReports(Name,Path)",
    "value": [
        { "Id": "1", "Name": "Budget", "Path": "/Home/dev/Domains/Finance/Budget" },
        { "Id": "2", "Name": "Overview", "Path": "/Home/DEV/Overview" },
        { "Id": "3", "Name": "Budget", "Path": "/Home/prod/Domains/Finance/Budget" },
        { "Id": "4", "Name": "Sandbox", "Path": "/Home/development/Sandbox" }
    ]
}"#;

#[derive(Clone)]
struct MockReportServer {
    logons: Arc<Mutex<Vec<HashMap<String, String>>>>,
    issue_cookie: bool,
    catalog_status: StatusCode,
    catalog_body: &'static str,
}

impl MockReportServer {
    fn new() -> Self {
        Self {
            logons: Arc::new(Mutex::new(Vec::new())),
            issue_cookie: true,
            catalog_status: StatusCode::OK,
            catalog_body: CATALOG,
        }
    }
}

async fn logon(
    State(server): State<MockReportServer>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    server.logons.lock().unwrap().push(form);

    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, "ASP.NET_SessionId=s1; Path=/".parse().unwrap());
    if server.issue_cookie {
        headers.append(
            header::SET_COOKIE,
            format!("{}={}; Path=/; HttpOnly", COOKIE_NAME, COOKIE_VALUE).parse().unwrap(),
        );
    }
    (StatusCode::OK, headers, "logged on").into_response()
}

async fn catalog(
    State(server): State<MockReportServer>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let authenticated = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .map_or(false, |c| c.contains(&format!("{}={}", COOKIE_NAME, COOKIE_VALUE)));
    if !authenticated {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if query.get("$select").map(String::as_str) != Some("Name,Path") {
        return StatusCode::BAD_REQUEST.into_response();
    }

    (
        server.catalog_status,
        [(header::CONTENT_TYPE, "application/json")],
        server.catalog_body,
    )
        .into_response()
}

async fn spawn_server(server: MockReportServer) -> String {
    let app = Router::new()
        .route("/ReportServer/logon.aspx", post(logon))
        .route("/reports/api/v2.0/PowerBIReports", get(catalog))
        .with_state(server);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn make_options(base_url: &str) -> ReaderOptions {
    ReaderOptions {
        base_url: base_url.to_string(),
        ignore_cert_errors: false,
        cookie_name: COOKIE_NAME.to_string(),
        environment: "dev".to_string(),
        username: "svc-reports".to_string(),
        password: "s3cret&=".to_string(),
        timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn test_get_reports_filters_and_rewrites() {
    let base_url = spawn_server(MockReportServer::new()).await;
    let reader = ReportServerReader::new(make_options(&base_url));

    let listing = reader.get_reports().await.unwrap();

    assert_eq!(listing.reports.len(), 2);

    let budget = &listing.reports[0];
    assert_eq!(budget.name, "Budget");
    assert_eq!(budget.root_folder, "Finance");
    assert_eq!(
        budget.path,
        format!("{}/reports/powerbi/Home/dev/Domains/Finance/Budget?rs:embed=true", base_url)
    );

    let overview = &listing.reports[1];
    assert_eq!(overview.name, "Overview");
    assert_eq!(overview.root_folder, "/");
    assert_eq!(
        overview.path,
        format!("{}/reports/powerbi/Home/DEV/Overview?rs:embed=true", base_url)
    );
}

#[tokio::test]
async fn test_logon_sends_credentials_and_environment() {
    let server = MockReportServer::new();
    let logons = server.logons.clone();
    let base_url = spawn_server(server).await;

    let listing = ReportServerReader::new(make_options(&base_url))
        .get_reports()
        .await
        .unwrap();

    let logons = logons.lock().unwrap();
    assert_eq!(logons.len(), 1);
    assert_eq!(logons[0]["name"], "svc-reports");
    assert_eq!(logons[0]["password"], "s3cret&=");
    assert_eq!(logons[0]["env"], "dev");

    assert_eq!(listing.session_cookie.name, COOKIE_NAME);
    assert_eq!(listing.session_cookie.value, COOKIE_VALUE);
}

#[tokio::test]
async fn test_environment_override_changes_filter() {
    let base_url = spawn_server(MockReportServer::new()).await;
    let options = make_options(&base_url).with_environment("PROD").unwrap();

    let listing = ReportServerReader::new(options).get_reports().await.unwrap();

    assert_eq!(listing.reports.len(), 1);
    assert!(listing.reports[0].path.contains("/Home/prod/"));
}

#[tokio::test]
async fn test_missing_cookie_is_authentication_error() {
    let mut server = MockReportServer::new();
    server.issue_cookie = false;
    let base_url = spawn_server(server).await;

    let err = ReportServerReader::new(make_options(&base_url))
        .get_reports()
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::Authentication(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_wrong_cookie_name_is_authentication_error() {
    let base_url = spawn_server(MockReportServer::new()).await;
    let mut options = make_options(&base_url);
    options.cookie_name = "otherCookie".to_string();

    let err = ReportServerReader::new(options).get_reports().await.unwrap_err();

    assert!(matches!(err, ReportError::Authentication(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_malformed_catalog_is_deserialization_error() {
    let mut server = MockReportServer::new();
    server.catalog_body = "<html><body>Object moved</body></html>";
    let base_url = spawn_server(server).await;

    let err = ReportServerReader::new(make_options(&base_url))
        .get_reports()
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::Deserialization(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_catalog_server_error_is_network_error() {
    let mut server = MockReportServer::new();
    server.catalog_status = StatusCode::INTERNAL_SERVER_ERROR;
    let base_url = spawn_server(server).await;

    let err = ReportServerReader::new(make_options(&base_url))
        .get_reports()
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::Network(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = ReportServerReader::new(make_options(&format!("http://{}", addr)))
        .get_reports()
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::Network(_)), "got {:?}", err);
}
