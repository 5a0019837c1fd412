#![forbid(unsafe_code)]
#![deny(unused_must_use, rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the VidTube public API.
//!
//! The client mirrors server records verbatim; these types only describe the
//! wire shape. Every field the server may omit is optional or defaulted so a
//! partial record still decodes, and both encodings the server uses for media
//! and owners (bare string or embedded object) decode into one type.
use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Uniform success envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Operation payload.
    pub data: T,
    /// Human-readable outcome message.
    #[serde(default)]
    pub message: Option<String>,
    /// Server-side success flag.
    #[serde(default)]
    pub success: bool,
    /// Echoed HTTP status, when the server includes it.
    #[serde(default)]
    pub status_code: Option<u16>,
}

impl<T> Envelope<T> {
    /// Wrap a payload in a successful envelope.
    #[must_use]
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: Some(message.into()),
            success: true,
            status_code: Some(200),
        }
    }

    /// Convert the payload while keeping the message metadata.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            data: f(self.data),
            message: self.message,
            success: self.success,
            status_code: self.status_code,
        }
    }
}

/// Failure body returned alongside non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Primary error text.
    #[serde(default)]
    pub error: Option<String>,
    /// Secondary message some handlers send instead of `error`.
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Best available user-facing message, ignoring blank strings.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        self.error
            .filter(|text| !text.trim().is_empty())
            .or_else(|| self.message.filter(|text| !text.trim().is_empty()))
    }
}

/// Hosted media asset (image or video file).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MediaRef {
    /// Bare URL string.
    Url(String),
    /// Object form with a URL and storage metadata.
    Asset(MediaAsset),
}

/// Object form of a hosted media asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaAsset {
    /// Public URL of the asset.
    pub url: String,
    /// Storage identifier, if exposed.
    #[serde(default, alias = "publicId")]
    pub public_id: Option<String>,
}

impl MediaRef {
    /// URL of the asset regardless of encoding.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Asset(asset) => &asset.url,
        }
    }
}

/// Owner reference: either a bare id or an embedded user summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Owner {
    /// Unpopulated owner id.
    Id(String),
    /// Populated owner record.
    User(Box<UserSummary>),
}

impl Owner {
    /// Identifier of the owner in either encoding.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::User(user) => &user.id,
        }
    }

    /// Embedded summary when the owner was populated.
    #[must_use]
    pub fn summary(&self) -> Option<&UserSummary> {
        match self {
            Self::Id(_) => None,
            Self::User(user) => Some(user),
        }
    }
}

/// Authenticated identity or fully loaded user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Unique handle.
    pub username: String,
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Profile picture.
    #[serde(default)]
    pub avatar: Option<MediaRef>,
    /// Channel banner.
    #[serde(default)]
    pub cover_image: Option<MediaRef>,
    /// Account creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Compact user record embedded in other entities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Server identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Unique handle.
    #[serde(default)]
    pub username: String,
    /// Display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Profile picture.
    #[serde(default)]
    pub avatar: Option<MediaRef>,
    /// Subscriber count when the endpoint aggregates it.
    #[serde(default)]
    pub subscribers_count: Option<u64>,
    /// Whether the viewer follows this user, when aggregated.
    #[serde(default)]
    pub is_subscribed: Option<bool>,
}

/// Channel page profile (`/users/c/{username}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelProfile {
    /// Base user record.
    #[serde(flatten)]
    pub user: User,
    /// Number of subscribers.
    #[serde(default)]
    pub subscribers_count: u64,
    /// Number of channels this user follows.
    #[serde(default)]
    pub channels_subscribed_to_count: u64,
    /// Whether the viewer follows the channel.
    #[serde(default)]
    pub is_subscribed: bool,
}

/// Uploaded video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Server identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Title.
    #[serde(default)]
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Poster image.
    #[serde(default)]
    pub thumbnail: Option<MediaRef>,
    /// Playable media.
    #[serde(default)]
    pub video_file: Option<MediaRef>,
    /// Length in seconds.
    #[serde(default)]
    pub duration: f64,
    /// View counter.
    #[serde(default)]
    pub views: u64,
    /// Uploader.
    #[serde(default)]
    pub owner: Option<Owner>,
    /// Visibility flag.
    #[serde(default)]
    pub is_published: bool,
    /// Upload time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Like counter on detail responses.
    #[serde(default)]
    pub likes_count: Option<u64>,
    /// Viewer like state on detail responses.
    #[serde(default)]
    pub is_liked: Option<bool>,
}

/// Comment attached to a video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Server identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Comment body.
    pub content: String,
    /// Author.
    #[serde(default)]
    pub owner: Option<Owner>,
    /// Video the comment belongs to.
    #[serde(default, alias = "videoId")]
    pub video: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Like counter.
    #[serde(default)]
    pub likes_count: u64,
    /// Viewer like state.
    #[serde(default)]
    pub is_liked: bool,
}

/// Micro-post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    /// Server identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Post body.
    pub content: String,
    /// Author.
    #[serde(default)]
    pub owner: Option<Owner>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Like counter.
    #[serde(default)]
    pub likes_count: u64,
    /// Viewer like state.
    #[serde(default)]
    pub is_liked: bool,
}

/// User playlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Server identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Playlist name.
    #[serde(default)]
    pub name: String,
    /// Playlist description.
    #[serde(default)]
    pub description: String,
    /// Member videos. Mutation responses may list bare ids, which are skipped.
    #[serde(default, deserialize_with = "populated_videos")]
    pub videos: Vec<Video>,
    /// Aggregate views across member videos.
    #[serde(default)]
    pub total_views: u64,
    /// Number of member videos.
    #[serde(default)]
    pub total_videos: u64,
    /// Playlist owner.
    #[serde(default)]
    pub owner: Option<Owner>,
    /// Last modification time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn populated_videos<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Video>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    #[allow(dead_code)]
    enum Entry {
        Populated(Video),
        Reference(IgnoredAny),
    }

    let entries = Vec::<Entry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            Entry::Populated(video) => Some(video),
            Entry::Reference(_) => None,
        })
        .collect())
}

/// Paginated list wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page in server order.
    pub docs: Vec<T>,
    /// Total number of items across pages.
    #[serde(default)]
    pub total_docs: u64,
    /// Whether another page follows.
    #[serde(default)]
    pub has_next_page: bool,
    /// One-based page number.
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Entry of the liked-videos listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LikedVideo {
    /// The liked video.
    #[serde(alias = "video")]
    pub liked_video: Video,
}

/// Result of a subscription toggle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionToggle {
    /// Subscription state after the toggle.
    pub subscribed: bool,
}

/// Channel followed by the viewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscribedChannel {
    /// Followed channel.
    pub subscribed_channel: ChannelSummary,
}

/// Channel summary with its most recent upload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    /// Server identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Unique handle.
    #[serde(default)]
    pub username: String,
    /// Display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Profile picture.
    #[serde(default)]
    pub avatar: Option<MediaRef>,
    /// Most recent upload, absent for channels without videos.
    #[serde(default)]
    pub latest_video: Option<Video>,
}

/// Subscriber of a channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSubscriber {
    /// Subscribing user.
    pub subscriber: UserSummary,
}

/// Aggregate channel statistics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    /// Number of uploads.
    #[serde(default)]
    pub total_videos: u64,
    /// Sum of views.
    #[serde(default)]
    pub total_views: u64,
    /// Number of subscribers.
    #[serde(default)]
    pub total_subscribers: u64,
    /// Sum of likes.
    #[serde(default)]
    pub total_likes: u64,
}

/// Login response payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Authenticated user.
    pub user: User,
    /// Bearer credential for later requests.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Credential used to mint new access tokens.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Token pair returned by the refresh endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// New bearer credential.
    pub access_token: String,
    /// Rotated refresh credential.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Acknowledgement of a comment deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeletedComment {
    /// Identifier of the removed comment.
    pub comment_id: String,
}

/// Acknowledgement of a tweet deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeletedTweet {
    /// Identifier of the removed tweet.
    pub tweet_id: String,
}

/// Publish flag after a visibility toggle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublishState {
    /// Visibility after the toggle.
    pub is_published: bool,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Email identifier, when logging in by email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Username identifier, when logging in by handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Account password.
    pub password: String,
}

/// Password change request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Current password.
    pub old_password: String,
    /// Replacement password.
    pub new_password: String,
}

/// Account details update body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    /// New display name.
    pub full_name: String,
    /// New contact email.
    pub email: String,
}

/// Refresh-token request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    /// Refresh credential.
    pub refresh_token: String,
}

/// Playlist create/update body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaylistRequest {
    /// Playlist name.
    pub name: String,
    /// Playlist description.
    pub description: String,
}

/// Body used by comment and tweet create/edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentRequest {
    /// Text body.
    pub content: String,
}

/// Sort direction for video listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortType {
    /// Query-string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Filters for the video listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoQuery {
    /// Restrict to one uploader.
    pub user_id: Option<String>,
    /// Free-text search.
    pub query: Option<String>,
    /// Sort field.
    pub sort_by: Option<String>,
    /// Sort direction.
    pub sort_type: Option<SortType>,
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl VideoQuery {
    /// Query pairs in a stable order. The sort pair is sent only when both
    /// halves are present; empty strings are skipped.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(user_id) = self.user_id.as_deref().filter(|v| !v.is_empty()) {
            pairs.push(("userId", user_id.to_string()));
        }
        if let Some(query) = self.query.as_deref().filter(|v| !v.is_empty()) {
            pairs.push(("query", query.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let (Some(sort_by), Some(sort_type)) =
            (self.sort_by.as_deref().filter(|v| !v.is_empty()), self.sort_type)
        {
            pairs.push(("sortBy", sort_by.to_string()));
            pairs.push(("sortType", sort_type.as_str().to_string()));
        }
        pairs
    }
}

/// Page cursor for comment listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// One-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl PageQuery {
    /// Query pairs for the cursor.
    #[must_use]
    pub fn to_pairs(self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}
