//! Tests for the Octocrab profile gateway.

use rstest::{fixture, rstest};
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::OctocrabProfileGateway;
use crate::github::error::ProfileError;
use crate::github::gateway::ProfileGateway;
use crate::github::username::{ApiBase, Username};

struct ProfileGatewayFixture {
    runtime: Runtime,
    server: MockServer,
    gateway: OctocrabProfileGateway,
}

impl ProfileGatewayFixture {
    fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    fn mount(&self, mock: Mock) {
        self.block_on(mock.mount(&self.server));
    }
}

#[fixture]
fn username() -> Username {
    Username::parse("Grozard").expect("username should be valid")
}

#[fixture]
fn gateway_fixture() -> ProfileGatewayFixture {
    let runtime = Runtime::new().expect("runtime should start");
    let server = runtime.block_on(MockServer::start());
    let api_base = ApiBase::parse(&server.uri()).expect("mock server URI should parse");
    let gateway = {
        let _guard = runtime.enter();
        OctocrabProfileGateway::for_api_base(&api_base).expect("should create gateway")
    };
    ProfileGatewayFixture {
        runtime,
        server,
        gateway,
    }
}

#[rstest]
fn user_profile_maps_fields_from_response(
    gateway_fixture: ProfileGatewayFixture,
    username: Username,
) {
    gateway_fixture.mount(
        Mock::given(method("GET"))
            .and(path("/users/Grozard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "login": "Grozard",
                "bio": null,
                "location": "Egypt",
                "html_url": "https://example.invalid/ignored"
            }))),
    );

    let profile = gateway_fixture
        .block_on(gateway_fixture.gateway.user_profile(&username))
        .expect("request should succeed")
        .expect("profile should be present");

    assert_eq!(profile.username, username);
    assert_eq!(profile.bio, None, "null bio should stay absent");
    assert_eq!(profile.location.as_deref(), Some("Egypt"));
    assert_eq!(profile.profile_url(), "https://github.com/Grozard");
}

#[rstest]
fn user_profile_returns_none_on_not_found(
    gateway_fixture: ProfileGatewayFixture,
    username: Username,
) {
    gateway_fixture.mount(
        Mock::given(method("GET"))
            .and(path("/users/Grozard"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest/users/users"
            }))),
    );

    let result = gateway_fixture.block_on(gateway_fixture.gateway.user_profile(&username));

    assert_eq!(result, Ok(None), "404 should map to a missing profile");
}

#[rstest]
fn user_profile_treats_plain_text_not_found_as_missing(
    gateway_fixture: ProfileGatewayFixture,
    username: Username,
) {
    gateway_fixture.mount(
        Mock::given(method("GET"))
            .and(path("/users/Grozard"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here")),
    );

    let result = gateway_fixture.block_on(gateway_fixture.gateway.user_profile(&username));

    assert_eq!(result, Ok(None));
}

#[rstest]
fn user_profile_surfaces_other_statuses_as_api_errors(
    gateway_fixture: ProfileGatewayFixture,
    username: Username,
) {
    gateway_fixture.mount(
        Mock::given(method("GET"))
            .and(path("/users/Grozard"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(json!({ "message": "API rate limit exceeded" })),
            ),
    );

    let result = gateway_fixture.block_on(gateway_fixture.gateway.user_profile(&username));

    let Err(ProfileError::Api { message }) = result else {
        panic!("expected Api error, got {result:?}");
    };
    assert!(
        message.contains("API rate limit exceeded"),
        "GitHub message should be preserved: {message}"
    );
}

#[rstest]
fn user_profile_rejects_malformed_body(
    gateway_fixture: ProfileGatewayFixture,
    username: Username,
) {
    gateway_fixture.mount(
        Mock::given(method("GET"))
            .and(path("/users/Grozard"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json")),
    );

    let result = gateway_fixture.block_on(gateway_fixture.gateway.user_profile(&username));

    assert!(
        matches!(result, Err(ProfileError::Api { .. })),
        "expected Api error, got {result:?}"
    );
}

#[rstest]
fn user_repositories_preserves_api_order(
    gateway_fixture: ProfileGatewayFixture,
    username: Username,
) {
    gateway_fixture.mount(
        Mock::given(method("GET"))
            .and(path("/users/Grozard/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "name": "JoJo", "full_name": "Grozard/JoJo" },
                { "name": "Araki", "full_name": "Grozard/Araki" },
                { "name": "Stands", "full_name": "Grozard/Stands" }
            ]))),
    );

    let repositories = gateway_fixture
        .block_on(gateway_fixture.gateway.user_repositories(&username))
        .expect("request should succeed");

    let names: Vec<&str> = repositories.iter().map(|repo| repo.name.as_str()).collect();
    assert_eq!(names, vec!["JoJo", "Araki", "Stands"]);
}

#[rstest]
fn user_repositories_returns_empty_list(
    gateway_fixture: ProfileGatewayFixture,
    username: Username,
) {
    gateway_fixture.mount(
        Mock::given(method("GET"))
            .and(path("/users/Grozard/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([]))),
    );

    let repositories = gateway_fixture
        .block_on(gateway_fixture.gateway.user_repositories(&username))
        .expect("request should succeed");

    assert!(repositories.is_empty(), "expected no repositories");
}

#[rstest]
fn user_repositories_surfaces_server_errors(
    gateway_fixture: ProfileGatewayFixture,
    username: Username,
) {
    gateway_fixture.mount(
        Mock::given(method("GET"))
            .and(path("/users/Grozard/repos"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "message": "Server Error" })),
            ),
    );

    let result = gateway_fixture.block_on(gateway_fixture.gateway.user_repositories(&username));

    assert!(
        matches!(result, Err(ProfileError::Api { .. })),
        "expected Api error, got {result:?}"
    );
}

#[rstest]
fn user_repositories_treats_missing_list_as_error(
    gateway_fixture: ProfileGatewayFixture,
    username: Username,
) {
    gateway_fixture.mount(
        Mock::given(method("GET"))
            .and(path("/users/Grozard/repos"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })),
            ),
    );

    let result = gateway_fixture.block_on(gateway_fixture.gateway.user_repositories(&username));

    assert!(
        matches!(result, Err(ProfileError::Api { .. })),
        "expected Api error, got {result:?}"
    );
}

#[rstest]
fn unreachable_server_maps_to_network_error(username: Username) {
    let runtime = Runtime::new().expect("runtime should start");
    let api_base = ApiBase::parse("http://127.0.0.1:9").expect("address should parse");
    let gateway = {
        let _guard = runtime.enter();
        OctocrabProfileGateway::for_api_base(&api_base).expect("should create gateway")
    };

    let result = runtime.block_on(gateway.user_profile(&username));

    assert!(
        matches!(result, Err(ProfileError::Network { .. })),
        "expected Network error, got {result:?}"
    );
}
