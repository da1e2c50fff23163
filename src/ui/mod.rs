// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the timeline.
//! Handles layout, the publish dialog, and wiring to the post store.

pub mod components;

use eframe::egui;

use crate::logic::store::PostStore;
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::composer::{self, ComposerAction};
use crate::ui::components::{modal, timeline};

/// Stateful egui application for browsing and publishing posts.
pub struct ChirpApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl Default for ChirpApp {
    fn default() -> Self {
        Self::with_store(PostStore::at_default_location())
    }
}

impl ChirpApp {
    /// Build the app around a specific store file and start loading it.
    pub fn with_store(store: PostStore) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().max(2))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let store = store.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(&store, cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        let mut app = Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        };

        if app.cmd_tx.send(Command::LoadTimeline).is_ok() {
            app.model.pending_commands += 1;
        }

        app
    }
}

impl eframe::App for ChirpApp {
    // Required by eframe 0.34; the runner still calls `update` each frame,
    // which is where all rendering for this app happens.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drives a single UI frame: processes incoming messages and commands,
    /// updates the model, and renders the top bar, timeline, dialogs, and
    /// status panel.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Process pending messages in arrival order; a publish must see the
        // draft edits queued in the same frame.
        let mut msgs = std::mem::take(&mut self.inbox);
        let commands = drain_inbox(&mut self.model, &mut msgs);
        self.inbox = msgs;
        for cmd in commands {
            if self.cmd_tx.send(cmd).is_ok() {
                self.model.pending_commands += 1;
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Timeline");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                    ui.separator();
                    self.render_publish_button(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_compose_modal(ctx);
        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                let tl_msgs = timeline::view(ui, &self.model.timeline, &self.model.username);
                self.inbox.extend(tl_msgs.into_iter().map(Msg::Timeline));
                ui.add_space(8.0);
            });
        });
    }
}

/// Apply queued messages in arrival order and collect the commands they enqueue.
fn drain_inbox(model: &mut AppModel, inbox: &mut Vec<Msg>) -> Vec<Command> {
    let mut commands = Vec::new();
    for msg in inbox.drain(..) {
        mvu::update(model, msg, &mut commands);
    }
    commands
}

impl ChirpApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    /// Render the publish trigger button; clicking it opens the compose dialog.
    fn render_publish_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(format!("{} Publish", egui_phosphor::regular::NOTE_PENCIL));
        if ui.add(button).on_hover_text("Write a new post").clicked() {
            self.inbox.push(Msg::Modal(modal::ModalMsg::OpenRequested));
        }
    }

    /// Render the publish dialog with the composer inside.
    fn render_compose_modal(&mut self, ctx: &egui::Context) {
        let mut composer_msgs = Vec::new();
        let mut composer_action = None;

        let modal_msgs = modal::view(ctx, &self.model.compose_modal, "New post", |ui| {
            let (msgs, action) = composer::view(ui, &self.model.composer);
            composer_msgs = msgs;
            composer_action = action;
        });

        self.inbox.extend(modal_msgs.into_iter().map(Msg::Modal));
        self.inbox
            .extend(composer_msgs.into_iter().map(Msg::Composer));
        match composer_action {
            Some(ComposerAction::Publish) => self.inbox.push(Msg::PublishRequested),
            Some(ComposerAction::Cancel) => self
                .inbox
                .push(Msg::Modal(modal::ModalMsg::CloseRequested)),
            None => {}
        }
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Something went wrong")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status/error message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0))
                        .on_hover_text(format!(
                            "{} task(s) running in background",
                            self.model.pending_commands
                        ));
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::composer::ComposerMsg;

    #[test]
    fn inbox_drains_in_arrival_order() {
        let mut model = AppModel::default();
        let mut inbox = vec![
            Msg::Composer(ComposerMsg::TextChanged("fresh draft".into())),
            Msg::PublishRequested,
        ];

        let commands = drain_inbox(&mut model, &mut inbox);

        assert!(inbox.is_empty());
        assert!(model.error.is_none(), "publish saw a stale draft");
        assert_eq!(commands.len(), 1);
        match &commands[0] {
            Command::AppendPost(post) => assert_eq!(post.content, "fresh draft"),
            _ => panic!("unexpected command"),
        }
    }
}
