//! Member operation integration tests.

use orbit_members::{
    ErrorKind, FindMemberQuery, IdentityData, MemberUpdate, SortDirection, UpdateOutcome,
};
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

use crate::common::TestFixture;

/// Full member lifecycle: create, fetch, update, delete.
#[tokio::test]
async fn test_member_lifecycle() {
    let fixture = TestFixture::create().await.expect("Failed to create test fixture");
    let payload = json!({
        "member": {"name": "Ada Lovelace"},
        "identity": {"source": "github", "username": "ada"}
    });

    Mock::given(method("POST"))
        .and(path(fixture.path("/members")))
        .and(body_json(&payload))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"data": {"id": "m1", "type": "member"}})),
        )
        .expect(1)
        .mount(&fixture.server)
        .await;

    Mock::given(method("GET"))
        .and(path(fixture.path("/members/m1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "m1", "type": "member", "attributes": {"name": "Ada Lovelace"}}
        })))
        .expect(1)
        .mount(&fixture.server)
        .await;

    Mock::given(method("PUT"))
        .and(path(fixture.path("/members/m1")))
        .and(body_json(json!({"member": {"bio": "Analyst"}})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&fixture.server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(fixture.path("/members/m1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let members = fixture.client.members();

    let created = members.create(&payload).await.expect("Create should succeed");
    let id = created["data"]["id"].as_str().expect("Created member should have an id");
    assert_eq!(id, "m1");

    let fetched = members.get(id).await.expect("Get should succeed");
    assert_eq!(fetched["data"]["attributes"]["name"], "Ada Lovelace");

    let updated = members
        .update_by_id(id, &json!({"member": {"bio": "Analyst"}}))
        .await
        .expect("Update should succeed");
    assert_eq!(updated, "member m1 updated");

    let deleted = members.delete(id).await.expect("Delete should succeed");
    assert_eq!(deleted, "member m1 deleted");
}

/// Pages are followed through `links.next` until it disappears.
#[tokio::test]
async fn test_list_pagination() {
    let fixture = TestFixture::create().await.expect("Failed to create test fixture");

    Mock::given(method("GET"))
        .and(path(fixture.path("/members")))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "a"}, {"id": "b"}],
            "included": [{"id": "i1", "type": "github_identity"}],
            "links": {"next": format!("{}?direction=DESC&items=2&page=2", fixture.url("/members"))}
        })))
        .expect(1)
        .mount(&fixture.server)
        .await;

    Mock::given(method("GET"))
        .and(path(fixture.path("/members")))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "c"}],
            "links": {"next": null}
        })))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let members = fixture.client.members();
    let mut seen = Vec::new();
    let mut page = Some(1);

    while let Some(number) = page {
        let result = members
            .list()
            .items(2)
            .direction(SortDirection::Descending)
            .page(number)
            .await
            .expect("List should succeed");

        seen.extend(result.data.iter().filter_map(|m| m["id"].as_str().map(str::to_string)));
        page = result.next_page;
    }

    assert_eq!(seen, vec!["a", "b", "c"]);
}

/// Find sends only the provided identity fields.
#[tokio::test]
async fn test_find_member() {
    let fixture = TestFixture::create().await.expect("Failed to create test fixture");

    Mock::given(method("GET"))
        .and(path(fixture.path("/members/find")))
        .and(query_param("source", "email"))
        .and(query_param("email", "ada@example.com"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "m1"}})),
        )
        .expect(1)
        .mount(&fixture.server)
        .await;

    let found = fixture
        .client
        .members()
        .find(&FindMemberQuery::new("email").email("ada@example.com"))
        .await
        .expect("Find should succeed");

    assert_eq!(found["data"]["id"], "m1");
}

/// Identities can be linked and unlinked.
#[tokio::test]
async fn test_identity_management() {
    let fixture = TestFixture::create().await.expect("Failed to create test fixture");
    let identity = IdentityData::new("discourse").source_host("forum.example.com").username("ada");
    let expected_body = json!({
        "source": "discourse",
        "source_host": "forum.example.com",
        "username": "ada"
    });

    Mock::given(method("POST"))
        .and(path(fixture.path("/members/m1/identities")))
        .and(body_json(&expected_body))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"data": {"id": "id1"}})),
        )
        .expect(1)
        .mount(&fixture.server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(fixture.path("/members/m1/identities")))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let members = fixture.client.members();

    let added = members.add_identity("m1", &identity).await.expect("Add should succeed");
    assert_eq!(added["data"]["id"], "id1");

    let removed = members.remove_identity("m1", &identity).await.expect("Remove should succeed");
    assert_eq!(removed, "identity on member m1 removed");
}

/// `update` dispatches to an id update or an upsert.
#[tokio::test]
async fn test_update_dispatch() {
    let fixture = TestFixture::create().await.expect("Failed to create test fixture");

    Mock::given(method("PUT"))
        .and(path(fixture.path("/members/m1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&fixture.server)
        .await;

    Mock::given(method("POST"))
        .and(path(fixture.path("/members")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "m2"}})),
        )
        .expect(1)
        .mount(&fixture.server)
        .await;

    let members = fixture.client.members();

    let by_id = members
        .update(MemberUpdate::ById { id: "m1".into(), data: json!({"member": {}}) })
        .await
        .expect("Update by id should succeed");
    assert_eq!(by_id, UpdateOutcome::Updated("member m1 updated".into()));

    let by_payload = members
        .update(MemberUpdate::ByPayload(json!({"identity": {"source": "github", "uid": "1"}})))
        .await
        .expect("Upsert should succeed");
    assert_eq!(by_payload, UpdateOutcome::Upserted(json!({"data": {"id": "m2"}})));
}

/// Invalid arguments never reach the server.
#[tokio::test]
async fn test_invalid_arguments_send_nothing() {
    let fixture = TestFixture::create().await.expect("Failed to create test fixture");
    let members = fixture.client.members();

    let errors = vec![
        members.create(&serde_json::Value::Null).await.expect_err("null data"),
        members.create(&123).await.expect_err("non-object data"),
        members.update_by_id("", &json!({})).await.expect_err("missing id"),
        members.get("").await.expect_err("missing id"),
        members.find(&FindMemberQuery::new("github")).await.expect_err("missing identifier"),
        members.add_identity("m1", &IdentityData::default()).await.expect_err("missing source"),
        members.delete("").await.expect_err("missing id"),
    ];

    for err in errors {
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "unexpected error: {}", err);
    }

    let received = fixture.server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty(), "No request should reach the server");
}

/// Server failures propagate as request errors.
#[tokio::test]
async fn test_server_error_propagates() {
    let fixture = TestFixture::create().await.expect("Failed to create test fixture");

    Mock::given(method("GET"))
        .and(path(fixture.path("/members")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&fixture.server)
        .await;

    let err = fixture.client.members().list().await.expect_err("500 should fail");

    assert_eq!(err.kind(), ErrorKind::Request);
    assert_eq!(err.status(), Some(500));
}
