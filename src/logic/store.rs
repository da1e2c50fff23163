// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! JSON-backed post store.
//!
//! Responsibilities:
//! - Load and persist the timeline as a single pretty-printed JSON file.
//! - Enforce the post length limit before anything reaches disk.
//! - Apply like toggles and deletions by post id.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::post::{MAX_POST_LEN, Post};

/// Default store location, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "chirp_posts.json";

/// On-disk layout: a single top-level object with a `posts` array.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    posts: Vec<Post>,
}

/// Handle to the post database file. Clones share one lock, so the
/// load-mutate-save cycle stays atomic across worker threads.
#[derive(Clone, Debug)]
pub struct PostStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl PostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Store at [`DEFAULT_STORE_FILE`] in the working directory.
    pub fn at_default_location() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all posts. A missing or empty file yields an empty timeline;
    /// malformed JSON is an error rather than silent data loss.
    pub fn load(&self) -> Result<Vec<Post>> {
        let _guard = self.lock();
        self.read_posts()
    }

    /// Append a post and persist the store.
    pub fn append(&self, post: &Post) -> Result<()> {
        ensure!(
            post.content.chars().count() <= MAX_POST_LEN,
            "post exceeds the {MAX_POST_LEN} character limit"
        );
        let _guard = self.lock();
        let mut posts = self.read_posts()?;
        posts.push(post.clone());
        self.save(&posts)
    }

    /// Remove the post with `id`. Errors when no such post exists.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let _guard = self.lock();
        let mut posts = self.read_posts()?;
        let before = posts.len();
        posts.retain(|p| p.post_id != id);
        if posts.len() == before {
            bail!("post ({id}) not found");
        }
        self.save(&posts)
    }

    /// Add or remove `username`'s like on the post with `id`.
    /// Returns the updated post.
    pub fn toggle_like(&self, id: Uuid, username: &str) -> Result<Post> {
        let _guard = self.lock();
        let mut posts = self.read_posts()?;
        let Some(post) = posts.iter_mut().find(|p| p.post_id == id) else {
            bail!("post ({id}) not found");
        };
        post.toggle_like(username);
        let updated = post.clone();
        self.save(&posts)?;
        Ok(updated)
    }

    /// A poisoned lock only means another thread panicked mid-write;
    /// the file itself is still the source of truth.
    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_posts(&self) -> Result<Vec<Post>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read post store at {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let file: StoreFile = serde_json::from_str(&content)
            .with_context(|| format!("post store at {} is not valid JSON", self.path.display()))?;
        Ok(file.posts)
    }

    fn save(&self, posts: &[Post]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create store directory {}", parent.display())
            })?;
        }
        let file = StoreFile {
            posts: posts.to_vec(),
        };
        let json = serde_json::to_string_pretty(&file).context("failed to encode post store")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write post store at {}", self.path.display()))?;
        Ok(())
    }
}
