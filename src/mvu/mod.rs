// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use uuid::Uuid;

use crate::logic::store::PostStore;
use crate::models::post::{Post, validate_content};
use crate::ui::components::composer::{self, ComposerModel, ComposerMsg};
use crate::ui::components::modal::{self, ModalModel, ModalMsg};
use crate::ui::components::timeline::{self, TimelineCommand, TimelineModel, TimelineMsg};

/// Top-level application state.
pub struct AppModel {
    /// Author name attached to published posts.
    pub username: String,
    /// Publish dialog visibility state.
    pub compose_modal: ModalModel,
    /// Draft text inside the publish dialog.
    pub composer: ComposerModel,
    /// Loaded timeline.
    pub timeline: TimelineModel,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl Default for AppModel {
    fn default() -> Self {
        Self {
            // Placeholder until the client grows real sessions.
            username: "guest".to_string(),
            compose_modal: ModalModel::default(),
            composer: ComposerModel::default(),
            timeline: TimelineModel::default(),
            status: None,
            error: None,
            pending_commands: 0,
        }
    }
}

/// Application messages routed through the update function.
pub enum Msg {
    Modal(ModalMsg),
    Composer(ComposerMsg),
    Timeline(TimelineMsg),
    PublishRequested,
    PublishCompleted(Result<Post, String>),
    TimelineLoaded(Result<Vec<Post>, String>),
    LikeCompleted(Result<Post, String>),
    DeleteCompleted(Result<Uuid, String>),
    DismissError,
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    LoadTimeline,
    AppendPost(Post),
    ToggleLike { id: Uuid, username: String },
    DeletePost(Uuid),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Modal(m) => modal::update(&mut model.compose_modal, m),
        Msg::Composer(m) => composer::update(&mut model.composer, m),
        Msg::Timeline(m) => {
            if let Some(cmd) = timeline::update(&mut model.timeline, m) {
                match cmd {
                    TimelineCommand::ToggleLike(id) => cmds.push(Command::ToggleLike {
                        id,
                        username: model.username.clone(),
                    }),
                    TimelineCommand::Delete(id) => cmds.push(Command::DeletePost(id)),
                }
            }
        }
        Msg::PublishRequested => match validate_for_publish(model) {
            Ok(post) => cmds.push(Command::AppendPost(post)),
            Err(err) => surface_event(model, err, true),
        },
        Msg::PublishCompleted(result) => match result {
            Ok(post) => {
                modal::update(&mut model.compose_modal, ModalMsg::CloseRequested);
                composer::update(&mut model.composer, ComposerMsg::Cleared);
                timeline::update(&mut model.timeline, TimelineMsg::Upserted(post));
                surface_event(model, "Post published.".to_string(), false);
            }
            Err(err) => surface_event(model, format!("Failed to publish post:\n\n{err}"), true),
        },
        Msg::TimelineLoaded(result) => match result {
            Ok(posts) => {
                let count = posts.len();
                timeline::update(&mut model.timeline, TimelineMsg::Loaded(posts));
                surface_event(model, format!("Loaded {count} post(s)."), false);
            }
            Err(err) => surface_event(model, format!("Failed to load timeline:\n\n{err}"), true),
        },
        Msg::LikeCompleted(result) => match result {
            Ok(post) => {
                timeline::update(&mut model.timeline, TimelineMsg::Upserted(post));
            }
            Err(err) => surface_event(model, format!("Failed to update like:\n\n{err}"), true),
        },
        Msg::DeleteCompleted(result) => match result {
            Ok(id) => {
                timeline::update(&mut model.timeline, TimelineMsg::Removed(id));
                surface_event(model, "Post deleted.".to_string(), false);
            }
            Err(err) => surface_event(model, format!("Failed to delete post:\n\n{err}"), true),
        },
        Msg::DismissError => model.error = None,
    }
}

/// Execute a command against the store and return the resulting message.
pub fn run_command(store: &PostStore, cmd: Command) -> Msg {
    match cmd {
        Command::LoadTimeline => Msg::TimelineLoaded(store.load().map_err(|e| format!("{e:#}"))),
        Command::AppendPost(post) => Msg::PublishCompleted(
            store
                .append(&post)
                .map(|_| post)
                .map_err(|e| format!("{e:#}")),
        ),
        Command::ToggleLike { id, username } => Msg::LikeCompleted(
            store
                .toggle_like(id, &username)
                .map_err(|e| format!("{e:#}")),
        ),
        Command::DeletePost(id) => {
            Msg::DeleteCompleted(store.delete(id).map(|_| id).map_err(|e| format!("{e:#}")))
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}

/// Validate the draft and build the post to be appended.
fn validate_for_publish(model: &AppModel) -> Result<Post, String> {
    validate_content(model.composer.text())?;
    Ok(Post::new(
        model.username.clone(),
        model.composer.text().trim().to_string(),
    ))
}
