/**
 * Profile Handler Types
 *
 * Query strings and bodies for the `/users` endpoints, plus the search
 * filter they resolve to.
 */

use serde::{Deserialize, Serialize};

use crate::shared::validation::{deserialize_id, parse_id};
use crate::shared::{UserProfile, UserSummary};

/// `GET /users/readone?id=`
#[derive(Deserialize, Debug, Default)]
pub struct ReadOneQuery {
    #[serde(default)]
    pub id: Option<String>,
}

/// `GET /users/search?keyword=&id=`
#[derive(Deserialize, Debug, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// What a search query asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    /// Substring match on names, plus id equality when the keyword is numeric
    Keyword(String),
    /// A single row by id; `None` when the id given was not a usable number
    Id(Option<i64>),
    /// Every row, newest first
    All,
}

impl SearchFilter {
    /// A non-blank keyword wins over an id; an id wins over nothing
    pub fn from_query(query: &SearchQuery) -> Self {
        let keyword = query.keyword.as_deref().map(str::trim).unwrap_or_default();
        if !keyword.is_empty() {
            return SearchFilter::Keyword(keyword.to_string());
        }

        match query.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => SearchFilter::Id(parse_id(id)),
            _ => SearchFilter::All,
        }
    }
}

/// Search results envelope
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub status: String,
    pub data: Vec<UserSummary>,
}

impl SearchResponse {
    pub fn ok(data: Vec<UserSummary>) -> Self {
        Self {
            status: "ok".to_string(),
            data,
        }
    }
}

/// Admin account creation; the password is optional
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub fname: Option<String>,
    #[serde(default)]
    pub lname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Returned by `/users/create`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreatedUserResponse {
    pub status: String,
    pub user: UserProfile,
}

impl CreatedUserResponse {
    pub fn ok(user: UserProfile) -> Self {
        Self {
            status: "ok".to_string(),
            user,
        }
    }
}

/// Full profile overwrite
#[derive(Deserialize, Debug, Default)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub fname: Option<String>,
    #[serde(default)]
    pub lname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct DeleteUserRequest {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<i64>,
}
