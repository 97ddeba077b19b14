//! Client-side session state: the bearer-token cookie, the persisted user
//! profile, and the local-only `userContent` draft buffer.

use global_magazine_shared::{ContentKind, ContentRecord, Role, UserProfile};
use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

const TOKEN_COOKIE: &str = "token";
const USER_KEY: &str = "user";
const DRAFTS_KEY: &str = "userContent";
const TOKEN_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

/// Bearer token from the `token` cookie, if present.
pub fn token() -> Option<String> {
    let cookie = html_document()?.cookie().ok()?;
    cookie
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix("token="))
        .map(str::to_string)
        .filter(|value| !value.is_empty())
}

fn set_token_cookie(token: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!(
            "{TOKEN_COOKIE}={token}; max-age={TOKEN_MAX_AGE_SECS}; path=/; secure; samesite=strict"
        ));
    }
}

fn clear_token_cookie() {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!("{TOKEN_COOKIE}=; max-age=0; path=/"));
    }
}

/// Profile blob persisted at login. Absent for anonymous visitors.
pub fn current_user() -> Option<UserProfile> {
    LocalStorage::get(USER_KEY).ok()
}

pub fn is_authenticated() -> bool {
    token().is_some() && current_user().is_some()
}

/// True when the signed-in user's role is in `roles`.
pub fn has_role(roles: &[Role]) -> bool {
    current_user().is_some_and(|user| roles.contains(&user.role))
}

/// Persist a fresh session after login/register.
pub fn store_session(token: &str, user: &UserProfile) {
    set_token_cookie(token);
    let _ = LocalStorage::set(USER_KEY, user);
}

/// Clear the cookie and profile blob, then hard-navigate home so every
/// page remounts anonymous. No server-side invalidation call exists.
pub fn logout() {
    clear_token_cookie();
    LocalStorage::delete(USER_KEY);
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href("/");
    }
}

/// The `userContent` draft buffer: a client-only scratch list merged into
/// the dashboard view. It is never synced back to the server.
pub fn drafts() -> Vec<ContentRecord> {
    LocalStorage::get(DRAFTS_KEY).unwrap_or_default()
}

/// Insert or replace a draft by id.
pub fn save_draft(record: ContentRecord) {
    let mut drafts = drafts();
    match drafts.iter_mut().find(|existing| existing.id == record.id) {
        Some(existing) => *existing = record,
        None => drafts.push(record),
    }
    let _ = LocalStorage::set(DRAFTS_KEY, &drafts);
}

pub fn remove_draft(id: &str) {
    let drafts: Vec<ContentRecord> = drafts()
        .into_iter()
        .filter(|draft| draft.id != id)
        .collect();
    let _ = LocalStorage::set(DRAFTS_KEY, &drafts);
}

/// Id for a new local draft. The prefix keeps drafts recognizable next to
/// backend records and carries the content type for the edit route.
pub fn next_draft_id(kind: ContentKind) -> String {
    format!("draft-{}-{}", kind.slug(), js_sys::Date::now() as u64)
}

/// True for ids minted by [`next_draft_id`].
pub fn is_draft_id(id: &str) -> bool {
    id.starts_with("draft-")
}

/// Content type encoded in a draft id; unknown prefixes edit as articles.
pub fn draft_kind(id: &str) -> ContentKind {
    if id.starts_with("draft-news-") {
        ContentKind::News
    } else {
        ContentKind::Article
    }
}
