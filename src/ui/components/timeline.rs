// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Timeline list with like and delete affordances.

use eframe::egui;
use uuid::Uuid;

use crate::models::post::Post;

/// UI model for the timeline. Posts are held newest-first.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct TimelineModel {
    posts: Vec<Post>,
}

/// Messages emitted by the timeline view or fed back from the store.
#[derive(Clone, Debug, PartialEq)]
pub enum TimelineMsg {
    /// Fresh snapshot from the store.
    Loaded(Vec<Post>),
    /// A post was created or changed; replace by id or insert in date order.
    Upserted(Post),
    /// A post was deleted from the store.
    Removed(Uuid),
    LikePressed(Uuid),
    DeletePressed(Uuid),
}

/// Store work requested by the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineCommand {
    ToggleLike(Uuid),
    Delete(Uuid),
}

impl TimelineModel {
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    fn insert_sorted(&mut self, post: Post) {
        let pos = self
            .posts
            .iter()
            .position(|p| p.date <= post.date)
            .unwrap_or(self.posts.len());
        self.posts.insert(pos, post);
    }
}

/// Apply a message to the model. Returns store work when the user asked for it.
pub fn update(model: &mut TimelineModel, msg: TimelineMsg) -> Option<TimelineCommand> {
    match msg {
        TimelineMsg::Loaded(mut posts) => {
            posts.sort_by(|a, b| b.date.cmp(&a.date));
            model.posts = posts;
            None
        }
        TimelineMsg::Upserted(post) => {
            model.posts.retain(|p| p.post_id != post.post_id);
            model.insert_sorted(post);
            None
        }
        TimelineMsg::Removed(id) => {
            model.posts.retain(|p| p.post_id != id);
            None
        }
        TimelineMsg::LikePressed(id) => Some(TimelineCommand::ToggleLike(id)),
        TimelineMsg::DeletePressed(id) => Some(TimelineCommand::Delete(id)),
    }
}

/// Render the timeline and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &TimelineModel, username: &str) -> Vec<TimelineMsg> {
    let mut msgs = Vec::new();

    if model.posts.is_empty() {
        ui.label(
            egui::RichText::new("Nothing here yet. Publish the first post!")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return msgs;
    }

    for post in &model.posts {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&post.username).strong());
                ui.label(
                    egui::RichText::new(post.display_date())
                        .small()
                        .color(egui::Color32::from_gray(110)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(
                            egui::RichText::new(egui_phosphor::regular::TRASH_SIMPLE)
                                .color(egui::Color32::from_gray(140)),
                        )
                        .on_hover_text("Delete post")
                        .clicked()
                    {
                        msgs.push(TimelineMsg::DeletePressed(post.post_id));
                    }
                });
            });
            ui.add_space(4.0);
            ui.label(&post.content);
            ui.add_space(4.0);
            render_like_button(ui, post, username, &mut msgs);
        });
        ui.add_space(8.0);
    }

    msgs
}

/// Heart toggle with like count.
fn render_like_button(
    ui: &mut egui::Ui,
    post: &Post,
    username: &str,
    msgs: &mut Vec<TimelineMsg>,
) {
    let liked = post.liked_by(username);
    let label = format!("{} {}", egui_phosphor::regular::HEART, post.likes_count());
    let hover = if liked { "Unlike" } else { "Like" };

    if ui
        .add(egui::Button::new(label).selected(liked))
        .on_hover_text(hover)
        .clicked()
    {
        msgs.push(TimelineMsg::LikePressed(post.post_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn post_at(username: &str, date: time::OffsetDateTime) -> Post {
        let mut post = Post::new(username, "content");
        post.date = date;
        post
    }

    #[test]
    fn loaded_sorts_newest_first() {
        let mut model = TimelineModel::default();
        let old = post_at("alice", datetime!(2025-01-01 10:00:00 UTC));
        let new = post_at("bob", datetime!(2025-06-01 10:00:00 UTC));

        update(
            &mut model,
            TimelineMsg::Loaded(vec![old.clone(), new.clone()]),
        );

        assert_eq!(model.posts(), &[new, old]);
    }

    #[test]
    fn upserted_inserts_in_date_order() {
        let mut model = TimelineModel::default();
        let old = post_at("alice", datetime!(2025-01-01 10:00:00 UTC));
        let new = post_at("bob", datetime!(2025-06-01 10:00:00 UTC));
        update(
            &mut model,
            TimelineMsg::Loaded(vec![old.clone(), new.clone()]),
        );

        let middle = post_at("carol", datetime!(2025-03-01 10:00:00 UTC));
        update(&mut model, TimelineMsg::Upserted(middle.clone()));

        assert_eq!(model.posts(), &[new, middle, old]);
    }

    #[test]
    fn upserted_replaces_an_existing_post() {
        let mut model = TimelineModel::default();
        let post = post_at("alice", datetime!(2025-01-01 10:00:00 UTC));
        update(&mut model, TimelineMsg::Loaded(vec![post.clone()]));

        let mut liked = post.clone();
        liked.toggle_like("bob");
        update(&mut model, TimelineMsg::Upserted(liked.clone()));

        assert_eq!(model.posts(), &[liked]);
    }

    #[test]
    fn removed_drops_the_matching_post() {
        let mut model = TimelineModel::default();
        let post = post_at("alice", datetime!(2025-01-01 10:00:00 UTC));
        update(&mut model, TimelineMsg::Loaded(vec![post.clone()]));

        update(&mut model, TimelineMsg::Removed(post.post_id));

        assert!(model.posts().is_empty());
    }

    #[test]
    fn like_and_delete_presses_request_store_work() {
        let mut model = TimelineModel::default();
        let id = Uuid::new_v4();

        assert_eq!(
            update(&mut model, TimelineMsg::LikePressed(id)),
            Some(TimelineCommand::ToggleLike(id))
        );
        assert_eq!(
            update(&mut model, TimelineMsg::DeletePressed(id)),
            Some(TimelineCommand::Delete(id))
        );
    }
}
