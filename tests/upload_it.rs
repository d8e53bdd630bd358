// crates.io
use httpmock::prelude::*;
// self
use diffchecker::{client::DiffChecker, error::Error, expiry::Expiry, url::Url};

const EMAIL: &str = "user@example.com";
const PASSWORD: &str = "hunter2";
const TOKEN_BODY: &str = "{\"authToken\":\"T\"}";

fn build_client(server: &MockServer) -> DiffChecker {
	let origin =
		Url::parse(&server.base_url()).expect("Mock server origin should parse successfully.");

	DiffChecker::builder(EMAIL, PASSWORD)
		.api_origin(origin)
		.build()
		.expect("Client should build against the mock server.")
}

async fn mock_sessions(server: &MockServer) -> httpmock::Mock<'_> {
	server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/sessions")
				.header("content-type", "application/x-www-form-urlencoded")
				.body("email=user%40example.com&password=hunter2");
			then.status(200).header("content-type", "application/json").body(TOKEN_BODY);
		})
		.await
}

#[tokio::test]
async fn upload_composes_the_shareable_url() {
	let server = MockServer::start_async().await;
	let sessions = mock_sessions(&server).await;
	let diffs = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/diffs")
				.header("authorization", "Bearer T")
				.header("content-type", "application/x-www-form-urlencoded")
				.body("left=a&right=b&expiry=forever&title=t");
			then.status(201)
				.header("content-type", "application/json")
				.body("{\"slug\":\"abc123\"}");
		})
		.await;
	let client = build_client(&server);
	let url =
		client.upload("a", "b", "t").await.expect("Upload against the mocks should succeed.");

	assert_eq!(url.as_str(), "https://www.diffchecker.com/abc123");

	sessions.assert_async().await;
	diffs.assert_async().await;
}

#[tokio::test]
async fn empty_title_is_omitted_from_the_request() {
	let server = MockServer::start_async().await;
	let _sessions = mock_sessions(&server).await;
	let diffs = server
		.mock_async(|when, then| {
			when.method(POST).path("/diffs").body("left=a&right=b&expiry=forever");
			then.status(201)
				.header("content-type", "application/json")
				.body("{\"slug\":\"untitled\"}");
		})
		.await;
	let client = build_client(&server);
	let url = client
		.upload("a", "b", "")
		.await
		.expect("Upload with an empty title should succeed.");

	assert_eq!(url.as_str(), "https://www.diffchecker.com/untitled");

	diffs.assert_async().await;
}

#[tokio::test]
async fn title_with_spaces_is_form_encoded() {
	let server = MockServer::start_async().await;
	let _sessions = mock_sessions(&server).await;
	let diffs = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/diffs")
				.body("left=a&right=b&expiry=forever&title=release+notes");
			then.status(201)
				.header("content-type", "application/json")
				.body("{\"slug\":\"titled\"}");
		})
		.await;
	let client = build_client(&server);

	client
		.upload("a", "b", "release notes")
		.await
		.expect("Upload with a spaced title should succeed.");

	diffs.assert_async().await;
}

#[tokio::test]
async fn explicit_expiry_serializes_its_wire_token() {
	let server = MockServer::start_async().await;
	let _sessions = mock_sessions(&server).await;
	let diffs = server
		.mock_async(|when, then| {
			when.method(POST).path("/diffs").body("left=a&right=b&expiry=day&title=t");
			then.status(201)
				.header("content-type", "application/json")
				.body("{\"slug\":\"daily\"}");
		})
		.await;
	let client = build_client(&server);

	client
		.upload_with_expiry("a", "b", "t", Expiry::Day)
		.await
		.expect("Upload with a day expiry should succeed.");

	diffs.assert_async().await;
}

#[tokio::test]
async fn byte_payloads_produce_the_same_form_body_as_text() {
	let server = MockServer::start_async().await;
	let _sessions = mock_sessions(&server).await;
	let diffs = server
		.mock_async(|when, then| {
			when.method(POST).path("/diffs").body("left=a&right=b&expiry=forever&title=t");
			then.status(201)
				.header("content-type", "application/json")
				.body("{\"slug\":\"same\"}");
		})
		.await;
	let client = build_client(&server);

	client.upload("a", "b", "t").await.expect("Text upload should succeed.");
	client.upload_bytes(b"a", b"b", "t").await.expect("Byte upload should succeed.");

	diffs.assert_calls_async(2).await;
}

#[tokio::test]
async fn every_upload_performs_its_own_session_exchange() {
	let server = MockServer::start_async().await;
	let sessions = mock_sessions(&server).await;
	let _diffs = server
		.mock_async(|when, then| {
			when.method(POST).path("/diffs");
			then.status(201)
				.header("content-type", "application/json")
				.body("{\"slug\":\"again\"}");
		})
		.await;
	let client = build_client(&server);

	client.upload("a", "b", "t").await.expect("First upload should succeed.");
	client.upload("a", "b", "t").await.expect("Second upload should succeed.");

	sessions.assert_calls_async(2).await;
}

#[tokio::test]
async fn non_201_diff_status_fails_with_unexpected_status() {
	let server = MockServer::start_async().await;
	let _sessions = mock_sessions(&server).await;
	let _diffs = server
		.mock_async(|when, then| {
			when.method(POST).path("/diffs");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"slug\":\"ignored\"}");
		})
		.await;
	let client = build_client(&server);
	let err = client
		.upload("a", "b", "t")
		.await
		.expect_err("Upload should fail when the diff endpoint answers 200 instead of 201.");

	assert!(matches!(
		err,
		Error::UnexpectedStatus { endpoint: "diff", expected: 201, observed: 200 },
	));
}

#[tokio::test]
async fn missing_slug_fails_with_missing_field() {
	let server = MockServer::start_async().await;
	let _sessions = mock_sessions(&server).await;
	let _diffs = server
		.mock_async(|when, then| {
			when.method(POST).path("/diffs");
			then.status(201).header("content-type", "application/json").body("{}");
		})
		.await;
	let client = build_client(&server);
	let err = client
		.upload("a", "b", "t")
		.await
		.expect_err("Upload should fail when the diff body omits the slug.");

	assert!(matches!(err, Error::MissingField { endpoint: "diff", field: "slug" }));
}

#[tokio::test]
async fn non_string_slug_fails_with_malformed_response() {
	let server = MockServer::start_async().await;
	let _sessions = mock_sessions(&server).await;
	let _diffs = server
		.mock_async(|when, then| {
			when.method(POST).path("/diffs");
			then.status(201).header("content-type", "application/json").body("{\"slug\":42}");
		})
		.await;
	let client = build_client(&server);
	let err = client
		.upload("a", "b", "t")
		.await
		.expect_err("Upload should fail when the slug has the wrong type.");

	assert!(matches!(err, Error::MalformedResponse { endpoint: "diff", .. }));
}
