// Mock fixtures compiled in with `--features mock` so the UI can run
// without the backend.

#[cfg(feature = "mock")]
use global_magazine_shared::{Banner, ContentRecord, ContentStatus, Role, UserProfile};

#[cfg(feature = "mock")]
use crate::api::AuthResponse;

#[cfg(feature = "mock")]
const MOCK_CATEGORIES: &[&str] = &[
    "Business",
    "Culture",
    "Faishon",
    "Politics",
    "Sports",
    "Technology",
    "Travel",
];

#[cfg(feature = "mock")]
const MOCK_AUTHORS: &[&str] = &["Amara Okafor", "Jonas Feld", "Priya Nair", "Tomás Rivera"];

#[cfg(feature = "mock")]
fn record(prefix: &str, index: usize, title: String, description: String) -> ContentRecord {
    let category = MOCK_CATEGORIES[index % MOCK_CATEGORIES.len()].to_string();
    let author = MOCK_AUTHORS[index % MOCK_AUTHORS.len()].to_string();
    let image = if index % 3 == 0 {
        None
    } else {
        Some(crate::config::asset_path(&format!(
            "static/covers/{}-{}.jpg",
            prefix,
            index % 5 + 1
        )))
    };

    ContentRecord {
        id: format!("{}-{:03}", prefix, index),
        title,
        description,
        image,
        category,
        date: format!("2024-{:02}-{:02}", (index % 12).max(1), (index % 27) + 1),
        author,
        status: Some(if index % 5 == 0 {
            ContentStatus::Draft
        } else {
            ContentStatus::Published
        }),
        pdf: None,
    }
}

/// 12 magazine issues, each with a PDF for the flipbook viewer.
#[cfg(feature = "mock")]
pub fn mock_magazines() -> Vec<ContentRecord> {
    (1..=12)
        .map(|i| {
            let mut issue = record(
                "mag",
                i,
                format!("The Global Magazine — Issue {}", i),
                format!(
                    "<p>Issue {} gathers reporting and photography from four \
                     continents, with a cover feature on {}.</p>",
                    i,
                    MOCK_CATEGORIES[i % MOCK_CATEGORIES.len()].to_lowercase()
                ),
            );
            issue.pdf = Some(crate::config::asset_path(&format!(
                "static/issues/issue-{}.pdf",
                i
            )));
            issue
        })
        .collect()
}

/// 15 newsroom items across the category list.
#[cfg(feature = "mock")]
pub fn mock_news() -> Vec<ContentRecord> {
    (1..=15)
        .map(|i| {
            record(
                "news",
                i,
                format!("Briefing {}: what moved today", i),
                format!(
                    "<p>The short read on story {}. <b>Markets</b>, ministries \
                     and the street, in five minutes.</p>",
                    i
                ),
            )
        })
        .collect()
}

/// 10 long-form articles.
#[cfg(feature = "mock")]
pub fn mock_articles() -> Vec<ContentRecord> {
    (1..=10)
        .map(|i| {
            record(
                "article",
                i,
                format!("Long read {}: the slow version of the news", i),
                format!(
                    "<p>Article {} spends a month with the people behind the \
                     headline and comes back with the parts that did not fit \
                     a briefing.</p>",
                    i
                ),
            )
        })
        .collect()
}

/// 8 reader stories.
#[cfg(feature = "mock")]
pub fn mock_stories() -> Vec<ContentRecord> {
    (1..=8)
        .map(|i| {
            record(
                "story",
                i,
                format!("Dispatch {}: letters from readers", i),
                format!("<p>A reader writes from stop {} of the journey.</p>", i),
            )
        })
        .collect()
}

#[cfg(feature = "mock")]
pub fn mock_banners() -> Vec<Banner> {
    vec![Banner {
        id: "banner-001".to_string(),
        title: "The print annual is here".to_string(),
        image: Some(crate::config::asset_path("static/banners/annual.jpg")),
        link: Some("/magazines".to_string()),
    }]
}

/// Any credentials sign in; `admin@` addresses get the admin role so the
/// dashboard is reachable in mock mode.
#[cfg(feature = "mock")]
pub fn mock_login(email: &str, password: &str) -> Result<AuthResponse, String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Invalid email or password.".to_string());
    }

    let role = if email.starts_with("admin@") {
        Role::Admin
    } else if email.starts_with("creator@") {
        Role::Creator
    } else {
        Role::User
    };

    Ok(AuthResponse {
        token: format!("mock-token-{}", js_sys::Date::now() as u64),
        user: UserProfile {
            id: "user-001".to_string(),
            name: email.split('@').next().unwrap_or("reader").to_string(),
            email: email.to_string(),
            role,
        },
    })
}
