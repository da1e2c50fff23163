// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain type for a single published post.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;
use uuid::Uuid;

/// Maximum post length in characters.
pub const MAX_POST_LEN: usize = 140;

/// A short post as stored on disk and shown in the timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: Uuid,
    pub username: String,
    /// Publication time, stored as UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub content: String,
    /// Usernames that liked this post.
    #[serde(default)]
    pub likes: Vec<String>,
}

impl Post {
    /// Build a new post stamped with a fresh id and the current UTC time.
    pub fn new(username: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            post_id: Uuid::new_v4(),
            username: username.into(),
            date: OffsetDateTime::now_utc(),
            content: content.into(),
            likes: Vec::new(),
        }
    }

    /// Timestamp formatted for the timeline (`DD/MM/YYYY HH:MM`).
    pub fn display_date(&self) -> String {
        let format = format_description!("[day]/[month]/[year] [hour]:[minute]");
        self.date
            .format(&format)
            .unwrap_or_else(|_| self.date.to_string())
    }

    /// Whether `username` has liked this post.
    pub fn liked_by(&self, username: &str) -> bool {
        self.likes.iter().any(|u| u == username)
    }

    /// Number of likes.
    pub fn likes_count(&self) -> usize {
        self.likes.len()
    }

    /// Add or remove a like for `username`.
    pub fn toggle_like(&mut self, username: &str) {
        if let Some(pos) = self.likes.iter().position(|u| u == username) {
            self.likes.remove(pos);
        } else {
            self.likes.push(username.to_string());
        }
    }
}

/// Validate post text before publishing. Returns a user-facing message on failure.
pub fn validate_content(text: &str) -> Result<(), String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("Please write something before publishing.".into());
    }
    if trimmed.chars().count() > MAX_POST_LEN {
        return Err(format!("Posts are limited to {MAX_POST_LEN} characters."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn validate_rejects_blank_content() {
        assert!(validate_content("   ").is_err());
        assert!(validate_content("").is_err());
    }

    #[test]
    fn validate_rejects_over_limit_content() {
        let text = "x".repeat(MAX_POST_LEN + 1);
        let err = validate_content(&text).unwrap_err();
        assert!(err.contains("140"));
    }

    #[test]
    fn validate_accepts_content_at_the_limit() {
        let text = "x".repeat(MAX_POST_LEN);
        assert!(validate_content(&text).is_ok());
    }

    #[test]
    fn display_date_uses_day_first_format() {
        let mut post = Post::new("alice", "hello");
        post.date = datetime!(2025-03-09 14:05:00 UTC);
        assert_eq!(post.display_date(), "09/03/2025 14:05");
    }

    #[test]
    fn toggle_like_adds_then_removes() {
        let mut post = Post::new("alice", "hello");
        post.toggle_like("bob");
        assert!(post.liked_by("bob"));
        assert_eq!(post.likes_count(), 1);

        post.toggle_like("bob");
        assert!(!post.liked_by("bob"));
        assert_eq!(post.likes_count(), 0);
    }
}
