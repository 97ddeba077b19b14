#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use global_magazine_shared::envelope;
use global_magazine_shared::{Banner, ContentKind, ContentRecord, ContentStatus, UserProfile};
use serde::{Deserialize, Serialize};

#[cfg(feature = "mock")]
use crate::models;
#[cfg(not(feature = "mock"))]
use crate::{config::API_BASE, session};

/// Successful `/auth/login` and `/auth/register` body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(alias = "data")]
    pub user: UserProfile,
}

/// JSON payload for news/article create and update calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContentPayload {
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContentStatus>,
}

/// Metadata half of the multipart magazine/banner uploads (the `data`
/// field; files travel as separate multipart parts).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UploadMetadata {
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub author: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContentStatus>,
}

#[cfg(not(feature = "mock"))]
fn bearer() -> Result<String, String> {
    session::token()
        .map(|token| format!("Bearer {token}"))
        .ok_or_else(|| "You are signed out. Sign in again to continue.".to_string())
}

/// One GET against a collection endpoint, normalized through the shared
/// envelope priority list. Any non-2xx leaves the collection empty and
/// surfaces a short error string.
#[cfg(not(feature = "mock"))]
async fn get_records(kind: ContentKind, url: String) -> Result<Vec<ContentRecord>, String> {
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {:?}", e))?;

    Ok(envelope::records(kind.envelope_keys(), body))
}

/// Fetch every magazine issue.
pub async fn fetch_magazines() -> Result<Vec<ContentRecord>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_magazines());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_records(
            ContentKind::Magazine,
            format!("{}/magazines/getAllMagazine", API_BASE),
        )
        .await
    }
}

/// Fetch one magazine; a 404 is "not found", not an error.
pub async fn fetch_magazine(id: &str) -> Result<Option<ContentRecord>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_magazines().into_iter().find(|m| m.id == id));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!(
            "{}/magazines/getMagazineById/{}",
            API_BASE,
            urlencoding::encode(id)
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if response.status() == 404 {
            return Ok(None);
        }
        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))?;

        Ok(envelope::record(ContentKind::Magazine.envelope_keys(), body))
    }
}

pub async fn fetch_news() -> Result<Vec<ContentRecord>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_news());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_records(ContentKind::News, format!("{}/news/get-news", API_BASE)).await
    }
}

/// News published under one magazine issue.
pub async fn fetch_news_for_magazine(id: &str) -> Result<Vec<ContentRecord>, String> {
    #[cfg(feature = "mock")]
    {
        let _ = id;
        return Ok(models::mock_news().into_iter().take(3).collect());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_records(
            ContentKind::News,
            format!("{}/news/getMagazineId/{}", API_BASE, urlencoding::encode(id)),
        )
        .await
    }
}

pub async fn fetch_articles() -> Result<Vec<ContentRecord>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_articles());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_records(
            ContentKind::Article,
            format!("{}/articles/get-Article", API_BASE),
        )
        .await
    }
}

/// Articles published under one magazine issue.
pub async fn fetch_articles_for_magazine(id: &str) -> Result<Vec<ContentRecord>, String> {
    #[cfg(feature = "mock")]
    {
        let _ = id;
        return Ok(models::mock_articles().into_iter().take(3).collect());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_records(
            ContentKind::Article,
            format!(
                "{}/articles/getMagazineId/{}",
                API_BASE,
                urlencoding::encode(id)
            ),
        )
        .await
    }
}

pub async fn fetch_stories() -> Result<Vec<ContentRecord>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_stories());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_records(
            ContentKind::Story,
            format!("{}/stories/get-stories", API_BASE),
        )
        .await
    }
}

/// Fetch the collection backing one content type. Used by the shared
/// listing and detail pages.
pub async fn fetch_collection(kind: ContentKind) -> Result<Vec<ContentRecord>, String> {
    match kind {
        ContentKind::Magazine => fetch_magazines().await,
        ContentKind::News => fetch_news().await,
        ContentKind::Article => fetch_articles().await,
        ContentKind::Story => fetch_stories().await,
    }
}

pub async fn fetch_banners() -> Result<Vec<Banner>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_banners());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/general/get-banner", API_BASE);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))?;

        Ok(envelope::unwrap_collection(envelope::BANNER_KEYS, body)
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect())
    }
}

pub async fn login(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "mock")]
    {
        return models::mock_login(email, password);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/auth/login", API_BASE);
        let body = serde_json::json!({ "email": email, "password": password });

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| format!("Serialize error: {:?}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if response.status() == 401 {
            return Err("Invalid email or password.".to_string());
        }
        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))
    }
}

pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "mock")]
    {
        let _ = name;
        return models::mock_login(email, password);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/auth/register", API_BASE);
        let body = serde_json::json!({ "name": name, "email": email, "password": password });

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| format!("Serialize error: {:?}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))
    }
}

/// Newsletter signup from the footer.
pub async fn subscribe(email: &str) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = email;
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/general/subscribe", API_BASE);
        let body = serde_json::json!({ "email": email });

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| format!("Serialize error: {:?}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        Ok(())
    }
}

/// Multipart magazine upload: `image`, `pdf` and a `data` JSON blob. The
/// browser supplies the multipart boundary, so no Content-Type is set.
pub async fn upload_magazine(form: web_sys::FormData) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = form;
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/magazines/upload-magazine", API_BASE);
        send_authed_multipart(Request::post(&url), form).await
    }
}

pub async fn update_magazine(id: &str, form: web_sys::FormData) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = (id, form);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!(
            "{}/magazines/updateMagazine/{}",
            API_BASE,
            urlencoding::encode(id)
        );
        send_authed_multipart(Request::put(&url), form).await
    }
}

/// Logical delete. The backend models this as a PUT, not a DELETE.
pub async fn delete_magazine(id: &str) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = id;
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!(
            "{}/magazines/deleteMagazine/{}",
            API_BASE,
            urlencoding::encode(id)
        );
        send_authed_bare(Request::put(&url)).await
    }
}

pub async fn create_news(payload: &ContentPayload) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = payload;
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/news/create-news", API_BASE);
        send_authed_json(Request::post(&url), payload).await
    }
}

pub async fn update_news(id: &str, payload: &ContentPayload) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = (id, payload);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/news/updateNews/{}", API_BASE, urlencoding::encode(id));
        send_authed_json(Request::put(&url), payload).await
    }
}

pub async fn delete_news(id: &str) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = id;
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/news/deleteNews/{}", API_BASE, urlencoding::encode(id));
        send_authed_bare(Request::put(&url)).await
    }
}

pub async fn create_article(payload: &ContentPayload) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = payload;
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        // Endpoint casing follows the backend routes as they exist.
        let url = format!("{}/articles/create-Article", API_BASE);
        send_authed_json(Request::post(&url), payload).await
    }
}

pub async fn update_article(id: &str, payload: &ContentPayload) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = (id, payload);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!(
            "{}/articles/updateArticle/{}",
            API_BASE,
            urlencoding::encode(id)
        );
        send_authed_json(Request::put(&url), payload).await
    }
}

pub async fn delete_article(id: &str) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = id;
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!(
            "{}/articles/deleteArticle/{}",
            API_BASE,
            urlencoding::encode(id)
        );
        send_authed_bare(Request::put(&url)).await
    }
}

pub async fn upload_banner(form: web_sys::FormData) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = form;
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/general/upload-banner", API_BASE);
        send_authed_multipart(Request::post(&url), form).await
    }
}

pub async fn update_banner(id: &str, form: web_sys::FormData) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = (id, form);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!(
            "{}/general/updateBanner/{}",
            API_BASE,
            urlencoding::encode(id)
        );
        send_authed_multipart(Request::put(&url), form).await
    }
}

pub async fn delete_banner(id: &str) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = id;
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!(
            "{}/general/deleteBanner/{}",
            API_BASE,
            urlencoding::encode(id)
        );
        send_authed_bare(Request::put(&url)).await
    }
}

/// Delete dispatch used by the dashboard tables.
pub async fn delete_content(kind: ContentKind, id: &str) -> Result<(), String> {
    match kind {
        ContentKind::Magazine => delete_magazine(id).await,
        ContentKind::News => delete_news(id).await,
        ContentKind::Article => delete_article(id).await,
        ContentKind::Story => Err("Stories are managed by the backend.".to_string()),
    }
}

#[cfg(not(feature = "mock"))]
async fn send_authed_json<T: Serialize>(
    builder: gloo_net::http::RequestBuilder,
    payload: &T,
) -> Result<(), String> {
    let response = builder
        .header("Authorization", &bearer()?)
        .header("Content-Type", "application/json")
        .json(payload)
        .map_err(|e| format!("Serialize error: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

#[cfg(not(feature = "mock"))]
async fn send_authed_multipart(
    builder: gloo_net::http::RequestBuilder,
    form: web_sys::FormData,
) -> Result<(), String> {
    let response = builder
        .header("Authorization", &bearer()?)
        .body(form)
        .map_err(|e| format!("Request error: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

#[cfg(not(feature = "mock"))]
async fn send_authed_bare(builder: gloo_net::http::RequestBuilder) -> Result<(), String> {
    let response = builder
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}
