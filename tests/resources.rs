mod support;

use labctl::api::CreateSkillPathRequest;
use labctl::{AnyContent, ApiError, CancellationToken, Content, ContentKind};
use serde_json::json;
use support::*;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn skill_path_json(name: &str) -> serde_json::Value {
    json!({
        "createdAt": "2026-10-01T10:00:00Z",
        "updatedAt": "2026-10-01T10:00:00Z",
        "name": name,
        "title": "Sample skill path",
        "pageUrl": format!("https://labs.example.com/skill-paths/{name}")
    })
}

// -------------------------------------------------------------------------
// Skill paths
// -------------------------------------------------------------------------

#[tokio::test]
async fn create_skill_path_from_sample() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/skill-paths"))
        .and(body_json(json!({"name": "sp1", "sample": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(skill_path_json("sp1")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .create_skill_path(
            &CancellationToken::new(),
            &CreateSkillPathRequest {
                name: "sp1".to_string(),
                sample: true,
            },
        )
        .await
        .unwrap();

    assert_eq!(created.name(), "sp1");
    assert_eq!(created.kind(), ContentKind::SkillPath);
    assert_eq!(created.created_at, "2026-10-01T10:00:00Z");
    assert_eq!(
        created.page_url(),
        "https://labs.example.com/skill-paths/sp1"
    );
}

#[tokio::test]
async fn skill_path_endpoints_use_expected_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/skill-paths/sp1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(skill_path_json("sp1")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/skill-paths"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([skill_path_json("sp1"), skill_path_json("sp2")])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/skill-paths/authored"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([skill_path_json("sp2")])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/skill-paths/sp2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();

    let one = client.get_skill_path(&cancel, "sp1").await.unwrap();
    assert_eq!(one.title, "Sample skill path");

    let all = client.list_skill_paths(&cancel).await.unwrap();
    assert_eq!(all.len(), 2);

    let authored = client.list_authored_skill_paths(&cancel).await.unwrap();
    assert_eq!(authored.len(), 1);
    assert_eq!(authored[0].name, "sp2");

    client.delete_skill_path(&cancel, "sp2").await.unwrap();
}

#[tokio::test]
async fn get_missing_skill_path_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/skill-paths/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get_skill_path(&CancellationToken::new(), "ghost")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("Not Found"));
}

// -------------------------------------------------------------------------
// Other kinds
// -------------------------------------------------------------------------

#[tokio::test]
async fn authored_listings_hit_per_kind_endpoints() {
    let server = MockServer::start().await;
    for (kind, name) in [("challenges", "c1"), ("tutorials", "t1"), ("courses", "k1")] {
        Mock::given(method("GET"))
            .and(path(format!("/{kind}/authored")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": name}])))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let cancel = CancellationToken::new();

    let challenges = client.list_authored_challenges(&cancel).await.unwrap();
    assert_eq!(challenges[0].name(), "c1");
    assert_eq!(challenges[0].kind(), ContentKind::Challenge);

    let tutorials = client.list_authored_tutorials(&cancel).await.unwrap();
    assert_eq!(tutorials[0].name(), "t1");
    assert_eq!(tutorials[0].kind(), ContentKind::Tutorial);

    let courses = client.list_authored_courses(&cancel).await.unwrap();
    assert_eq!(courses[0].name(), "k1");
    assert_eq!(courses[0].kind(), ContentKind::Course);
    assert!(courses[0].modules.is_empty());
}

#[tokio::test]
async fn course_decodes_modules() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses/k1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "k1",
            "title": "Kubernetes",
            "tags": ["k8s"],
            "modules": [{"name": "intro", "title": "Intro"}, {"name": "pods", "title": "Pods"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let course = client
        .get_course(&CancellationToken::new(), "k1")
        .await
        .unwrap();
    assert_eq!(course.tags, ["k8s"]);
    let modules: Vec<_> = course.modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(modules, ["intro", "pods"]);
}

// -------------------------------------------------------------------------
// Kind dispatch
// -------------------------------------------------------------------------

#[tokio::test]
async fn create_content_dispatches_on_kind() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tutorials"))
        .and(body_json(json!({"name": "t9", "sample": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "t9"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let content = client
        .create_content(&CancellationToken::new(), ContentKind::Tutorial, "t9", false)
        .await
        .unwrap();
    assert!(matches!(content, AnyContent::Tutorial(_)));
    assert_eq!(content.kind(), ContentKind::Tutorial);
    assert_eq!(content.name(), "t9");
}

#[tokio::test]
async fn get_and_delete_content_dispatch_on_kind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/challenges/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "c1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/challenges/c1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    let content = client
        .get_content(&cancel, ContentKind::Challenge, "c1")
        .await
        .unwrap();
    assert_eq!(content.kind(), ContentKind::Challenge);
    client
        .delete_content(&cancel, ContentKind::Challenge, "c1")
        .await
        .unwrap();
}

#[tokio::test]
async fn dispatch_rejects_unfiltered_kind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get_content(&CancellationToken::new(), ContentKind::All, "x")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::UnsupportedKind(ContentKind::All)));
}
