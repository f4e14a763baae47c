//! Data structs returned by the Sankaku API.
//!
//! All of them are plain read-only records deserialized straight from the JSON responses.
//! Keys the structs don't know about are ignored.
use serde::{Deserialize, Serialize};

pub use self::rating::Rating;

pub mod rating;

/// One page of the `/posts/keyset` endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Page {
    pub meta: PageMeta,
    pub data: Vec<Post>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    /// Opaque cursor pointing after the last post of this page. `None` on the last page.
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Post {
    pub id: u64,
    pub rating: Rating,
    pub author: Author,
    pub sample_url: String,
    pub sample_width: u32,
    pub sample_height: u32,
    pub preview_url: String,
    pub preview_width: u32,
    pub preview_height: u32,
    pub file_url: String,
    pub width: u32,
    pub height: u32,
    pub file_size: u64,
    pub file_type: String,
    pub has_children: bool,
    pub has_comments: bool,
    pub has_notes: bool,
    pub is_favorited: bool,
    #[serde(default)]
    pub user_vote: Option<i32>,
    #[serde(default)]
    pub parent_id: Option<u64>,
    pub fav_count: u32,
    pub vote_count: u32,
    pub total_score: i64,
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub video_duration: Option<f32>,
}

impl Post {
    #[inline]
    pub fn is_video(&self) -> bool {
        self.video_duration.is_some()
    }

    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| t.name.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: u64,
    pub name: String,
    pub avatar: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub tag_type: i32,
    pub count: u64,
    #[serde(default)]
    pub rating: Option<Rating>,
}

/// Categorizes the int-coded `type` field of a [`Tag`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TagKind {
    General,
    Artist,
    Studio,
    Copyright,
    Character,
    Genre,
    Medium,
    Meta,
    /// A code this crate doesn't know about.
    Other(i32),
}

impl From<i32> for TagKind {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::General,
            1 => Self::Artist,
            2 => Self::Studio,
            3 => Self::Copyright,
            4 => Self::Character,
            5 => Self::Genre,
            8 => Self::Medium,
            9 => Self::Meta,
            other => Self::Other(other),
        }
    }
}

impl Tag {
    #[inline]
    pub fn kind(&self) -> TagKind {
        TagKind::from(self.tag_type)
    }
}

/// Reduced projection of the `user` object returned by `/users/me`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub email: String,
    pub favorite_count: u64,
    pub id: u64,
    pub name: String,
}
