use ghrepo_core::config::ApiConfig;
use ghrepo_core::resource;
use ghrepo_core::{Organization, ProviderConfig, RepositoryResource};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::test_utils::{config_fixture_path, demo_desired};

fn organization_for(server: &MockServer) -> Organization {
    let config = ProviderConfig {
        api: ApiConfig {
            base_url: server.uri(),
            token: Some("t0ken".to_string()),
            ..ApiConfig::default()
        },
        ..ProviderConfig::new("acme")
    };
    Organization::from_config(&config).unwrap()
}

fn demo_entity() -> serde_json::Value {
    json!({
        "name": "demo",
        "full_name": "acme/demo",
        "description": "",
        "homepage": "",
        "private": true,
        "has_issues": false,
        "has_wiki": false,
        "allow_merge_commit": true,
        "allow_squash_merge": true,
        "allow_rebase_merge": true,
        "has_downloads": false,
        "default_branch": "main",
        "ssh_url": "git@github.com:acme/demo.git",
        "svn_url": "https://github.com/acme/demo",
        "git_url": "git://github.com/acme/demo.git",
        "clone_url": "https://github.com/acme/demo.git"
    })
}

#[test]
fn test_minimal_config_fixture_builds_organization() {
    let config = ProviderConfig::load_from(&config_fixture_path("minimal.toml")).unwrap();
    let org = Organization::from_config(&config).unwrap();
    assert_eq!(org.name(), "acme");
}

#[tokio::test]
async fn test_create_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/orgs/acme/repos"))
        .and(header("authorization", "Bearer t0ken"))
        .and(body_partial_json(json!({ "name": "demo", "private": true })))
        .respond_with(ResponseTemplate::new(201).set_body_json(demo_entity()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(demo_entity()))
        .expect(1)
        .mount(&server)
        .await;

    let org = organization_for(&server);
    let mut repo = RepositoryResource::new(demo_desired());
    resource::create(&org, &mut repo, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(repo.id(), Some("demo"));
    assert!(repo.desired.private);
    assert_eq!(repo.desired.default_branch.as_deref(), Some("main"));
    assert_eq!(repo.computed.full_name, "acme/demo");
    assert_eq!(repo.computed.ssh_clone_url, "git@github.com:acme/demo.git");
}

#[tokio::test]
async fn test_read_over_http_handles_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/demo"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest/repos/repos#get-a-repository"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let org = organization_for(&server);
    let mut repo = RepositoryResource::seeded("demo");
    resource::read(&org, &mut repo, &CancellationToken::new())
        .await
        .unwrap();

    assert!(!repo.is_present());
}

#[tokio::test]
async fn test_update_over_http_sends_branch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/repos/acme/demo"))
        .and(body_partial_json(json!({ "default_branch": "develop" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(demo_entity()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(demo_entity()))
        .mount(&server)
        .await;

    let org = organization_for(&server);
    let mut repo = RepositoryResource::seeded("demo");
    let desired = ghrepo_core::DesiredState {
        default_branch: Some("develop".to_string()),
        ..demo_desired()
    };
    resource::update(&org, &mut repo, desired, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(repo.id(), Some("demo"));
}

#[tokio::test]
async fn test_delete_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/repos/acme/demo"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let org = organization_for(&server);
    let mut repo = RepositoryResource::seeded("demo");
    resource::delete(&org, &mut repo, &CancellationToken::new())
        .await
        .unwrap();

    assert!(!repo.is_present());
}
