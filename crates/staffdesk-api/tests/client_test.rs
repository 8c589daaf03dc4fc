#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use staffdesk_api::{
    ApiClient, CreateEducation, CreateStaff, Error, ProjectId, RoleId, SkillId, StaffId,
    TechnologyId, UpdateProjectStaff, WorkId,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client =
        ApiClient::from_reqwest(&format!("{}/api", server.uri()), reqwest::Client::new()).unwrap();
    (server, client)
}

// ── Staff ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_staff_sends_page_and_limit() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/staff"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "staff_id": 10, "staff_name": "Ada Lovelace", "email": "ada@example.com", "phone": "01000000000" },
                { "staff_id": 11, "staff_name": "Alan Turing", "title": "Engineer", "email": "alan@example.com", "phone": "01000000001" }
            ],
            "pagination": { "page": 2, "limit": 9, "total": 11 }
        })))
        .mount(&server)
        .await;

    let resp = client.list_staff(2, 9).await.unwrap();

    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[1].title.as_deref(), Some("Engineer"));
    let pagination = resp.pagination.unwrap();
    assert_eq!((pagination.page, pagination.limit, pagination.total), (2, 9, 11));
}

#[tokio::test]
async fn test_create_staff_posts_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/staff"))
        .and(body_json(json!({
            "staff_name": "Grace Hopper",
            "email": "grace@example.com",
            "phone": "+1 (555) 010-0000"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "staff_id": 42,
            "staff_name": "Grace Hopper",
            "email": "grace@example.com",
            "phone": "+1 (555) 010-0000"
        })))
        .mount(&server)
        .await;

    let created = client
        .create_staff(&CreateStaff {
            staff_name: "Grace Hopper".into(),
            email: "grace@example.com".into(),
            phone: "+1 (555) 010-0000".into(),
            ..CreateStaff::default()
        })
        .await
        .unwrap();

    assert_eq!(created.staff_id, StaffId(42));
}

#[tokio::test]
async fn test_get_staff_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/staff/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Staff not found" })))
        .mount(&server)
        .await;

    let err = client.get_staff(StaffId(99)).await.unwrap_err();

    assert!(err.is_not_found(), "expected 404, got: {err:?}");
    assert_eq!(err.server_message().as_deref(), Some("Staff not found"));
}

// ── Owner-scoped collections ────────────────────────────────────────

#[tokio::test]
async fn test_education_paths() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/education/staffid/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "education_id": 8, "staff_id": 3, "degree": "BSc", "institution": "Cairo University",
                "start_date": "2015-09-01", "end_date": "2019-06-30"
            }],
            "total": 1
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/education"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "education_id": 9, "staff_id": 3, "degree": "MSc", "institution": "ETH",
            "start_date": "2020-01-01"
        })))
        .mount(&server)
        .await;

    let listing = client.list_education_for_staff(StaffId(3)).await.unwrap();
    assert_eq!(listing.total, Some(1));
    assert!(listing.pagination.is_none());
    assert_eq!(listing.data[0].end_date.as_deref(), Some("2019-06-30"));

    let created = client
        .create_education(&CreateEducation {
            staff_id: StaffId(3),
            degree: "MSc".into(),
            institution: "ETH".into(),
            field_of_study: None,
            start_date: "2020-01-01".into(),
            end_date: None,
        })
        .await
        .unwrap();
    assert_eq!(created.end_date, None);
}

#[tokio::test]
async fn test_work_delete_uses_short_path() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/work/17"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_work(WorkId(17)).await.unwrap();
}

// ── Join collections ────────────────────────────────────────────────

#[tokio::test]
async fn test_staff_skill_link_and_unlink() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/staff-skill"))
        .and(body_json(json!({ "staff_id": 1, "skill_id": 5 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "data": [], "total": 0 })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/staff-skill"))
        .and(query_param("staff_id", "1"))
        .and(query_param("skill_id", "5"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.add_staff_skill(StaffId(1), SkillId(5)).await.unwrap();
    client.remove_staff_skill(StaffId(1), SkillId(5)).await.unwrap();
}

#[tokio::test]
async fn test_project_technology_unlink_query() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/project-technology"))
        .and(query_param("project_id", "2"))
        .and(query_param("technology_id", "7"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client
        .remove_project_technology(ProjectId(2), TechnologyId(7))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_project_staff_role() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/project-staff/12"))
        .and(body_json(json!({ "staff_role": "Architect" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "role_id": 12, "staff_id": 1, "project_id": 2,
            "project_name": "Atlas", "project_description": "Billing", "staff_role": "Architect"
        })))
        .mount(&server)
        .await;

    let row = client
        .update_project_staff(
            RoleId(12),
            &UpdateProjectStaff {
                staff_role: Some("Architect".into()),
                ..UpdateProjectStaff::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(row.project_name, "Atlas");
}

// ── CV ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_cv_html_unwraps_json_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/cv/html/4"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": "<h1>Ada</h1>" })),
        )
        .mount(&server)
        .await;

    assert_eq!(client.get_cv_html(StaffId(4)).await.unwrap(), "<h1>Ada</h1>");
}

#[tokio::test]
async fn test_cv_html_plain_body_is_verbatim() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/cv/html/4"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html><body>Ada</body></html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    assert_eq!(
        client.get_cv_html(StaffId(4)).await.unwrap(),
        "<html><body>Ada</body></html>"
    );
}

#[tokio::test]
async fn test_cv_pdf_returns_bytes() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/cv/pdf/4"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"%PDF-1.7".to_vec(), "application/pdf"))
        .mount(&server)
        .await;

    let pdf = client.get_cv_pdf(StaffId(4)).await.unwrap();
    assert_eq!(&pdf[..], b"%PDF-1.7");
}

// ── Failure modes ───────────────────────────────────────────────────

#[tokio::test]
async fn test_server_error_is_http_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/skill"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&server)
        .await;

    let err = client.list_skills(1, 10).await.unwrap_err();
    assert!(
        matches!(&err, Error::Http { status: 500, body } if body == "database down"),
        "expected Http 500, got: {err:?}"
    );
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/technology"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .mount(&server)
        .await;

    let err = client.list_technologies(1, 10).await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }), "got: {err:?}");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Reserve a port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = format!("http://{addr}/api");
    let client = ApiClient::from_reqwest(&base, reqwest::Client::new()).unwrap();
    let err = client.list_projects(1, 10).await.unwrap_err();

    assert!(err.is_network(), "expected network error, got: {err:?}");
}
