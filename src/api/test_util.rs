//! In-memory transport replaying canned responses.
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::client::{RawResponse, Transport};
use crate::config::ServerConfig;
use crate::error::ClientError;
use crate::models::{Author, Page, PageMeta, Post, Rating, Tag};

pub(crate) const TEST_BASE_URL: &str = "http://sankaku.test";

pub(crate) struct ScriptedTransport {
    config: ServerConfig,
    authorized: bool,
    responses: Mutex<VecDeque<RawResponse>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<RawResponse>) -> Self {
        Self::with_delay(responses, 0)
    }

    /// Same as [`ScriptedTransport::new`], but waits `delay_ms` after each page.
    pub fn with_delay(responses: Vec<RawResponse>, delay_ms: u64) -> Self {
        Self {
            config: ServerConfig {
                base_url: TEST_BASE_URL.to_string(),
                request_delay_ms: delay_ms,
                ..ServerConfig::default()
            },
            authorized: true,
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn unauthorized(responses: Vec<RawResponse>) -> Self {
        Self {
            authorized: false,
            ..Self::new(responses)
        }
    }

    /// Every url requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn config(&self) -> &ServerConfig {
        &self.config
    }

    fn is_authorized(&self) -> bool {
        self.authorized
    }

    async fn get(&self, url: &str) -> Result<RawResponse, ClientError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ClientError::invalid_response("no scripted response left"))
    }
}

pub(crate) fn post(id: u64) -> Post {
    Post {
        id,
        rating: Rating::Safe,
        author: Author {
            id: 1,
            name: String::from("artist"),
            avatar: String::from("https://s.sankakucomplex.com/data/avatars/1.jpg"),
        },
        sample_url: format!("https://v.sankakucomplex.com/data/sample/{id}.jpg"),
        sample_width: 1400,
        sample_height: 1000,
        preview_url: format!("https://v.sankakucomplex.com/data/preview/{id}.avif"),
        preview_width: 300,
        preview_height: 214,
        file_url: format!("https://v.sankakucomplex.com/data/{id}.png"),
        width: 2800,
        height: 2000,
        file_size: 1_048_576,
        file_type: String::from("image/png"),
        has_children: false,
        has_comments: false,
        has_notes: false,
        is_favorited: true,
        user_vote: None,
        parent_id: None,
        fav_count: 10,
        vote_count: 2,
        total_score: 9,
        tags: vec![Tag {
            id: 100,
            name: String::from("original"),
            tag_type: 3,
            count: 5000,
            rating: None,
        }],
        video_duration: None,
    }
}

/// A `200 OK` page holding posts `first..first + len`.
pub(crate) fn page(first: u64, len: usize, next: Option<&str>) -> RawResponse {
    let page = Page {
        meta: PageMeta {
            next: next.map(String::from),
        },
        data: (first..first + len as u64).map(post).collect(),
    };

    RawResponse::new(StatusCode::OK, serde_json::to_string(&page).unwrap())
}

pub(crate) fn profile(name: &str) -> RawResponse {
    RawResponse::new(
        StatusCode::OK,
        serde_json::json!({
            "success": true,
            "user": {
                "id": 77,
                "name": name,
                "email": "someone@example.com",
                "favorite_count": 43,
                "level": 20,
                "avatar": "https://s.sankakucomplex.com/data/avatars/77.jpg"
            }
        })
        .to_string(),
    )
}
