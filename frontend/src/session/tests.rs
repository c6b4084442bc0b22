use super::*;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use std::cell::RefCell;

// =========================================================
// Test helpers
// =========================================================

/// Build an unsigned JWT with the given payload JSON.
fn fake_jwt(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
    format!("{}.{}.sig", header, body)
}

/// In-memory session store for host-side tests.
#[derive(Default)]
pub struct MemorySessionStore {
    access: RefCell<Option<String>>,
    refresh: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn with_tokens(access: Option<&str>, refresh: Option<&str>) -> Self {
        Self {
            access: RefCell::new(access.map(str::to_string)),
            refresh: RefCell::new(refresh.map(str::to_string)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn access_token(&self) -> Option<String> {
        self.access.borrow().clone()
    }

    fn set_access_token(&self, token: &str) {
        *self.access.borrow_mut() = Some(token.to_string());
    }

    fn refresh_token(&self) -> Option<String> {
        self.refresh.borrow().clone()
    }

    fn set_refresh_token(&self, token: &str) {
        *self.refresh.borrow_mut() = Some(token.to_string());
    }

    fn clear_access_token(&self) {
        *self.access.borrow_mut() = None;
    }

    fn clear(&self) {
        *self.access.borrow_mut() = None;
        *self.refresh.borrow_mut() = None;
    }
}

// =========================================================
// Claims decoding
// =========================================================

#[test]
fn decodes_exp_claim() {
    let token = fake_jwt(r#"{"exp":1700000000,"sub":"admin"}"#);
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.exp, Some(1_700_000_000));
    assert_eq!(claims.sub.as_deref(), Some("admin"));
}

#[test]
fn decodes_padded_payloads() {
    // Standard base64 with padding must also be accepted.
    let body = base64::engine::general_purpose::URL_SAFE.encode(br#"{"exp":42}"#);
    let token = format!("h.{}.s", body);
    assert_eq!(decode_claims(&token).unwrap().exp, Some(42));
}

#[test]
fn rejects_garbage_tokens() {
    assert_eq!(decode_claims("not-a-jwt"), Err(ClaimsError::Malformed));
    assert!(matches!(
        decode_claims("a.!!!.c"),
        Err(ClaimsError::Base64(_))
    ));
    let bad_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"pure noise"));
    assert!(matches!(decode_claims(&bad_json), Err(ClaimsError::Json(_))));
}

// =========================================================
// Expiry guard
// =========================================================

#[test]
fn past_exp_is_expired() {
    let claims = TokenClaims {
        exp: Some(999),
        ..Default::default()
    };
    assert!(is_expired(&claims, 1000));
}

#[test]
fn exp_one_second_in_the_future_is_valid() {
    let claims = TokenClaims {
        exp: Some(1001),
        ..Default::default()
    };
    assert!(!is_expired(&claims, 1000));
}

#[test]
fn missing_exp_is_not_expired() {
    assert!(!is_expired(&TokenClaims::default(), 1000));
}

#[test]
fn token_state_covers_missing_expired_and_valid() {
    let now = 1000;

    let empty = MemorySessionStore::default();
    assert_eq!(token_state(&empty, now), TokenState::Missing);

    let garbage = MemorySessionStore::with_tokens(Some("???"), None);
    assert_eq!(token_state(&garbage, now), TokenState::Expired);

    let stale = MemorySessionStore::with_tokens(Some(&fake_jwt(r#"{"exp":500}"#)), None);
    assert_eq!(token_state(&stale, now), TokenState::Expired);

    let live = MemorySessionStore::with_tokens(Some(&fake_jwt(r#"{"exp":1001}"#)), None);
    assert_eq!(token_state(&live, now), TokenState::Valid);
}

// =========================================================
// Login persistence
// =========================================================

#[test]
fn store_login_prefers_access_token_and_keeps_refresh() {
    let store = MemorySessionStore::default();
    let tokens: TokenResponse = serde_json::from_str(
        r#"{"accessToken":"acc","token":"legacy","refreshToken":"ref"}"#,
    )
    .unwrap();

    store_login(&store, &tokens);
    assert_eq!(store.access_token().as_deref(), Some("acc"));
    assert_eq!(store.refresh_token().as_deref(), Some("ref"));
}

#[test]
fn store_login_without_refresh_leaves_it_untouched() {
    let store = MemorySessionStore::with_tokens(None, Some("keep"));
    let tokens: TokenResponse = serde_json::from_str(r#"{"token":"acc"}"#).unwrap();

    store_login(&store, &tokens);
    assert_eq!(store.access_token().as_deref(), Some("acc"));
    assert_eq!(store.refresh_token().as_deref(), Some("keep"));
}
