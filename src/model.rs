// src/model.rs
// Portal entities. Cross references (authors, sellers, hosts) are user ids
// resolved against the store by linear scan.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type UserId = String;

/// Anything the fixture store can hold: a record with a stable string id.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

macro_rules! impl_entity {
    ($($ty:ty),* $(,)?) => {
        $(impl Entity for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

// --- Users ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    Admin,
    Moderator,
    Contributor,
    Pro,
    Gold,
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Admin => "Admin",
            Badge::Moderator => "Moderator",
            Badge::Contributor => "Contributor",
            Badge::Pro => "Pro",
            Badge::Gold => "Gold",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub avatar: String,
    #[serde(default)]
    pub badge: Option<Badge>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub join_date: Option<String>,
    #[serde(default)]
    pub gear_list: Option<Vec<String>>,
}

impl User {
    /// First word of the display name, used for greetings.
    pub fn first_name(&self) -> &str {
        self.username.split_whitespace().next().unwrap_or(&self.username)
    }
}

// --- Forum ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: UserId,
    pub content: String,
    pub timestamp: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub author: UserId,
    pub replies: u32,
    pub views: u32,
    pub category: String,
    pub last_activity: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub posts: Vec<Post>,
}

// --- Products ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    New,
    #[serde(rename = "Open Box")]
    OpenBox,
    #[serde(rename = "Used - Excellent")]
    UsedExcellent,
    #[serde(rename = "Used - Good")]
    UsedGood,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecPair {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub currency: String,
    pub image: String,
    pub category: String,
    pub rating: f32,
    pub review_count: u32,
    pub affiliate_link: String,
    #[serde(default)]
    pub condition: Option<Condition>,
    /// Only present on pre-owned listings.
    #[serde(default)]
    pub seller: Option<UserId>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub specs: Option<Vec<SpecPair>>,
}

// --- Reviews ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewCategory {
    Headphones,
    #[serde(rename = "DAC/Amp")]
    DacAmp,
    Speakers,
    Accessories,
}

impl ReviewCategory {
    pub const ALL: [ReviewCategory; 4] = [
        ReviewCategory::Headphones,
        ReviewCategory::DacAmp,
        ReviewCategory::Speakers,
        ReviewCategory::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewCategory::Headphones => "Headphones",
            ReviewCategory::DacAmp => "DAC/Amp",
            ReviewCategory::Speakers => "Speakers",
            ReviewCategory::Accessories => "Accessories",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub title: String,
    pub product_name: String,
    pub image: String,
    /// 0..=5
    pub rating: u8,
    pub author: UserId,
    pub snippet: String,
    pub category: ReviewCategory,
    #[serde(default)]
    pub full_content: Option<String>,
}

// --- Chat ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender: UserId,
    pub content: String,
    pub timestamp: String,
    #[serde(default)]
    pub is_me: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DmConversation {
    pub id: String,
    /// The counterpart of the local viewer.
    pub user: UserId,
    pub last_message: String,
    pub timestamp: String,
    pub unread_count: u32,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

// --- Tours ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TourStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl fmt::Display for TourStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TourStatus::Open => "Open",
            TourStatus::InProgress => "In Progress",
            TourStatus::Completed => "Completed",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "North America")]
    NorthAmerica,
    Europe,
    Asia,
    Global,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Global => "Global",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourImpression {
    pub id: String,
    pub author: UserId,
    pub content: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: String,
    pub title: String,
    pub equipment_name: String,
    #[serde(default)]
    pub specs: Vec<SpecPair>,
    pub description: String,
    pub host: UserId,
    pub start_date: String,
    pub end_date: String,
    pub status: TourStatus,
    pub participants: u32,
    pub region: Region,
    pub image: String,
    #[serde(default)]
    pub impressions: Vec<TourImpression>,
    #[serde(default)]
    pub product_id: Option<String>,
}

// --- Notification feed ---

/// One entry of the bell menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: String,
    pub text: String,
    pub time: String,
    #[serde(default)]
    pub unread: bool,
}

impl_entity!(User, Thread, Product, Review, DmConversation, Tour, FeedItem);

// --- Placeholders shown for missing optional fields ---

pub const NO_BIO: &str = "No bio available.";
pub const NO_GEAR: &str = "No gear listed.";
pub const DEFAULT_JOIN_DATE: &str = "2023";
pub const NO_DESCRIPTION: &str =
    "Detailed description not available. This is a placeholder for the product description.";
pub const NO_SPECS_MARKET: &str = "Specs not available";
pub const NO_SPECS_GEARS: &str = "No specifications listed.";
pub const NO_PUBLIC_POSTS: &str = "This is a restricted area or contains no public posts.";
pub const NO_IMPRESSIONS: &str = "No impressions yet. Be the first to share your thoughts!";
pub const NO_REVIEWS_YET: &str = "No reviews yet. Be the first!";
pub const NO_FULL_CONTENT: &str = "Full review coming soon.";
