use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::json;

use super::*;
use crate::error::ApiError;
use crate::session::tests::MemorySessionStore;
use crate::session::SessionStore;
use crate::web::http::{
    HttpBody, HttpError, HttpMethod, HttpRequest, HttpResponseData, HttpTransport,
};
use lwsc_admin_shared::{LoginRequest, PageQuery};

// =========================================================
// Shared Mock Components
// =========================================================

/// Request log shared between the test body and the transport.
struct TestContext {
    log: RefCell<Vec<HttpRequest>>,
}

impl TestContext {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            log: RefCell::new(Vec::new()),
        })
    }

    fn requests_to(&self, fragment: &str) -> Vec<HttpRequest> {
        self.log
            .borrow()
            .iter()
            .filter(|r| r.url.contains(fragment))
            .cloned()
            .collect()
    }

    fn refresh_calls(&self) -> usize {
        self.requests_to("/auth/refresh-token").len()
    }
}

/// Transport that answers from a scripted handler and records every request.
struct ScriptedTransport {
    ctx: Rc<TestContext>,
    #[allow(clippy::type_complexity)]
    handler: Box<dyn Fn(&HttpRequest) -> Result<HttpResponseData, HttpError>>,
}

impl ScriptedTransport {
    fn new(
        ctx: Rc<TestContext>,
        handler: impl Fn(&HttpRequest) -> Result<HttpResponseData, HttpError> + 'static,
    ) -> Self {
        Self {
            ctx,
            handler: Box::new(handler),
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponseData, HttpError> {
        self.ctx.log.borrow_mut().push(req.clone());
        (self.handler)(&req)
    }
}

fn ok(body: serde_json::Value) -> HttpResponseData {
    HttpResponseData {
        status: 200,
        body: body.to_string(),
    }
}

fn status(code: u16, body: &str) -> HttpResponseData {
    HttpResponseData {
        status: code,
        body: body.to_string(),
    }
}

const BASE: &str = "http://api.test";

// =========================================================
// Bearer attachment
// =========================================================

#[tokio::test]
async fn attaches_stored_bearer_token() {
    let ctx = TestContext::new();
    let transport = ScriptedTransport::new(ctx.clone(), |_| Ok(ok(json!([]))));
    let session = MemorySessionStore::with_tokens(Some("abc"), None);
    let client = ApiClient::new(transport, session, BASE);

    client.users(&PageQuery::default()).await.unwrap();

    let reqs = ctx.requests_to("/users");
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].header("Authorization"), Some("Bearer abc"));
}

#[tokio::test]
async fn sends_no_bearer_when_storage_is_empty() {
    let ctx = TestContext::new();
    let transport = ScriptedTransport::new(ctx.clone(), |_| Ok(ok(json!([]))));
    let client = ApiClient::new(transport, MemorySessionStore::default(), BASE);

    client.users(&PageQuery::default()).await.unwrap();

    assert_eq!(ctx.log.borrow()[0].header("Authorization"), None);
}

// =========================================================
// Refresh-and-replay flow
// =========================================================

/// Handler: first request 401s, refresh succeeds, replay succeeds.
fn happy_refresh(req: &HttpRequest) -> Result<HttpResponseData, HttpError> {
    if req.url.contains("/auth/refresh-token") {
        return Ok(ok(json!({ "accessToken": "fresh" })));
    }
    match req.header("Authorization") {
        Some("Bearer fresh") => Ok(ok(json!({ "users": [{"id": "u1"}] }))),
        _ => Ok(status(401, "")),
    }
}

#[tokio::test]
async fn first_401_triggers_exactly_one_refresh_and_one_replay() {
    let ctx = TestContext::new();
    let transport = ScriptedTransport::new(ctx.clone(), happy_refresh);
    let session = MemorySessionStore::with_tokens(Some("stale"), Some("refresh-1"));
    let client = ApiClient::new(transport, session, BASE);

    let page = client.users(&PageQuery::default()).await.unwrap();
    assert_eq!(page.items.len(), 1);

    assert_eq!(ctx.refresh_calls(), 1);
    let user_reqs = ctx.requests_to("/users");
    assert_eq!(user_reqs.len(), 2);
    assert_eq!(user_reqs[0].header("Authorization"), Some("Bearer stale"));
    assert_eq!(user_reqs[1].header("Authorization"), Some("Bearer fresh"));

    // The refresh call itself must carry the stored refresh token.
    let refresh_req = &ctx.requests_to("/auth/refresh-token")[0];
    match &refresh_req.body {
        Some(HttpBody::Json(body)) => assert!(body.contains("refresh-1")),
        other => panic!("unexpected refresh body: {:?}", other),
    }
}

#[tokio::test]
async fn refresh_accepts_legacy_token_field_and_persists_it() {
    let ctx = TestContext::new();
    let transport = ScriptedTransport::new(ctx.clone(), |req| {
        if req.url.contains("/auth/refresh-token") {
            Ok(ok(json!({ "token": "legacy-fresh" })))
        } else if req.header("Authorization") == Some("Bearer legacy-fresh") {
            Ok(ok(json!([])))
        } else {
            Ok(status(401, ""))
        }
    });
    let session = MemorySessionStore::with_tokens(Some("stale"), Some("r"));
    let client = ApiClient::new(transport, session, BASE);

    client.users(&PageQuery::default()).await.unwrap();
    assert_eq!(
        client.session().access_token().as_deref(),
        Some("legacy-fresh")
    );
}

#[tokio::test]
async fn second_401_on_replay_does_not_refresh_again() {
    let ctx = TestContext::new();
    // Everything except the refresh endpoint keeps answering 401.
    let transport = ScriptedTransport::new(ctx.clone(), |req| {
        if req.url.contains("/auth/refresh-token") {
            Ok(ok(json!({ "accessToken": "fresh" })))
        } else {
            Ok(status(401, ""))
        }
    });
    let session = MemorySessionStore::with_tokens(Some("stale"), Some("r"));
    let client = ApiClient::new(transport, session, BASE);

    let err = client.users(&PageQuery::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));

    assert_eq!(ctx.refresh_calls(), 1);
    assert_eq!(ctx.requests_to("/users").len(), 2);
    // The replay failure is surfaced; the token pair is not wiped here.
    assert_eq!(client.session().refresh_token().as_deref(), Some("r"));
}

#[tokio::test]
async fn missing_refresh_token_logs_out_without_calling_refresh() {
    let ctx = TestContext::new();
    let transport = ScriptedTransport::new(ctx.clone(), |_| Ok(status(401, "")));
    let session = MemorySessionStore::with_tokens(Some("stale"), None);
    let client = ApiClient::new(transport, session, BASE);

    let err = client.users(&PageQuery::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(ctx.refresh_calls(), 0);
    assert_eq!(client.session().access_token(), None);
}

#[tokio::test]
async fn failed_refresh_clears_both_tokens() {
    let ctx = TestContext::new();
    let transport = ScriptedTransport::new(ctx.clone(), |req| {
        if req.url.contains("/auth/refresh-token") {
            Ok(status(403, r#"{"message":"refresh token revoked"}"#))
        } else {
            Ok(status(401, ""))
        }
    });
    let session = MemorySessionStore::with_tokens(Some("stale"), Some("revoked"));
    let client = ApiClient::new(transport, session, BASE);

    let err = client.users(&PageQuery::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(ctx.refresh_calls(), 1);
    assert_eq!(client.session().access_token(), None);
    assert_eq!(client.session().refresh_token(), None);
    // No replay was attempted after the failed refresh.
    assert_eq!(ctx.requests_to("/users").len(), 1);
}

// =========================================================
// End-to-end flows against the mock
// =========================================================

#[tokio::test]
async fn successful_login_yields_a_storable_token_pair() {
    let ctx = TestContext::new();
    let transport = ScriptedTransport::new(ctx.clone(), |req| {
        if req.url.contains("/auth/login") {
            Ok(ok(json!({ "accessToken": "a1", "refreshToken": "r1" })))
        } else {
            Ok(status(404, ""))
        }
    });
    let client = ApiClient::new(transport, MemorySessionStore::default(), BASE);

    let tokens = client
        .login(&LoginRequest {
            email: "admin@lwsc.io".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    crate::session::store_login(client.session(), &tokens);
    assert_eq!(client.session().access_token().as_deref(), Some("a1"));
    assert_eq!(client.session().refresh_token().as_deref(), Some("r1"));
}

#[tokio::test]
async fn rejected_login_stores_nothing() {
    let ctx = TestContext::new();
    let transport =
        ScriptedTransport::new(ctx.clone(), |_| Ok(status(401, r#"{"message":"bad"}"#)));
    let client = ApiClient::new(transport, MemorySessionStore::default(), BASE);

    let err = client
        .login(&LoginRequest {
            email: "admin@lwsc.io".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(client.session().access_token(), None);
    assert_eq!(client.session().refresh_token(), None);
}

/// Stateful mock backend holding a badge collection.
fn badge_backend(store: Rc<RefCell<Vec<serde_json::Value>>>) -> impl Fn(&HttpRequest) -> Result<HttpResponseData, HttpError> {
    move |req| {
        if req.method == HttpMethod::Delete {
            let id = json!(req.url.rsplit('/').next().unwrap_or_default());
            store.borrow_mut().retain(|b| b["_id"] != id);
            return Ok(ok(json!({})));
        }
        Ok(ok(json!({ "badges": store.borrow().clone() })))
    }
}

#[tokio::test]
async fn deleting_a_badge_removes_it_from_the_next_fetch() {
    let store = Rc::new(RefCell::new(vec![
        json!({"_id": "b1", "title": "First Log", "coinCost": 5}),
        json!({"_id": "b2", "title": "Streak", "coinCost": 10}),
    ]));
    let ctx = TestContext::new();
    let transport = ScriptedTransport::new(ctx.clone(), badge_backend(store));
    let session = MemorySessionStore::with_tokens(Some("t"), None);
    let client = ApiClient::new(transport, session, BASE);

    assert_eq!(client.badges().await.unwrap().items.len(), 2);

    client.delete_badge("b1").await.unwrap();

    let after = client.badges().await.unwrap();
    assert_eq!(after.items.len(), 1);
    assert_eq!(after.items[0].id, "b2");
}

// =========================================================
// Error body handling
// =========================================================

#[tokio::test]
async fn server_error_message_is_surfaced() {
    let ctx = TestContext::new();
    let transport = ScriptedTransport::new(ctx.clone(), |_| {
        Ok(status(422, r#"{"error":{"message":"name is required"}}"#))
    });
    let session = MemorySessionStore::with_tokens(Some("t"), None);
    let client = ApiClient::new(transport, session, BASE);

    let err = client.pain_locations().await.unwrap_err();
    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "name is required");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn network_failures_map_to_network_errors() {
    let ctx = TestContext::new();
    let transport = ScriptedTransport::new(ctx.clone(), |_| {
        Err(HttpError::NetworkError("connection refused".into()))
    });
    let session = MemorySessionStore::with_tokens(Some("t"), None);
    let client = ApiClient::new(transport, session, BASE);

    let err = client.badges().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[test]
fn query_string_encodes_pairs() {
    let qs = query_string(&[
        ("page".into(), "1".into()),
        ("search".into(), "a b&c".into()),
    ]);
    assert_eq!(qs, "page=1&search=a+b%26c");
}

#[test]
fn export_url_embeds_range_and_token() {
    let ctx = TestContext::new();
    let transport = ScriptedTransport::new(ctx, |_| Ok(ok(json!([]))));
    let session = MemorySessionStore::with_tokens(Some("tok"), None);
    let client = ApiClient::new(transport, session, BASE);

    let query = lwsc_admin_shared::LogQuery::new(3).with_range(
        chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
        chrono::NaiveDate::from_ymd_opt(2024, 1, 31),
    );
    let url = client.export_url(crate::api::LogKind::Mood, &query);

    assert!(url.starts_with("http://api.test/api/v1/admin/logs/mood/export?"));
    assert!(url.contains("from=2024-01-01"));
    assert!(url.contains("to=2024-01-31"));
    assert!(url.contains("token=tok"));
    // Pagination never leaks into export links.
    assert!(!url.contains("page="));
}
