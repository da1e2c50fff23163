// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Post composer shown inside the publish dialog.

use eframe::egui;

use crate::models::post::{MAX_POST_LEN, validate_content};

/// UI model for the composer, kept free of side effects.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ComposerModel {
    text: String,
}

/// Messages emitted by the composer view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComposerMsg {
    TextChanged(String),
    Cleared,
}

/// Interactions the composer surfaces to the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposerAction {
    Publish,
    Cancel,
}

impl ComposerModel {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Remaining characters before the limit; negative when over it.
    pub fn remaining(&self) -> i64 {
        MAX_POST_LEN as i64 - self.text.trim().chars().count() as i64
    }

    /// Whether the current draft may be published.
    pub fn is_publishable(&self) -> bool {
        validate_content(&self.text).is_ok()
    }
}

/// Apply a message to the model.
pub fn update(model: &mut ComposerModel, msg: ComposerMsg) {
    match msg {
        ComposerMsg::TextChanged(text) => model.text = text,
        ComposerMsg::Cleared => model.text.clear(),
    }
}

/// Render the composer and return messages plus any requested action.
pub fn view(
    ui: &mut egui::Ui,
    model: &ComposerModel,
) -> (Vec<ComposerMsg>, Option<ComposerAction>) {
    let mut msgs = Vec::new();
    let mut action = None;

    let mut text = model.text.clone();
    let response = ui.add(
        egui::TextEdit::multiline(&mut text)
            .hint_text("What's happening?")
            .desired_rows(4)
            .desired_width(320.0),
    );
    if response.changed() {
        msgs.push(ComposerMsg::TextChanged(text));
    }

    ui.add_space(4.0);
    let remaining = model.remaining();
    let counter_color = if remaining < 0 {
        ui.visuals().error_fg_color
    } else {
        egui::Color32::from_gray(110)
    };
    ui.label(
        egui::RichText::new(format!("{remaining} characters left"))
            .small()
            .color(counter_color),
    );

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let publish = egui::Button::new(format!(
            "{} Publish",
            egui_phosphor::regular::PAPER_PLANE_TILT
        ));
        if ui
            .add_enabled(model.is_publishable(), publish)
            .on_disabled_hover_text("Write something under the character limit")
            .clicked()
        {
            action = Some(ComposerAction::Publish);
        }

        if ui.button("Cancel").clicked() {
            action = Some(ComposerAction::Cancel);
        }
    });

    (msgs, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_draft_is_not_publishable() {
        let mut model = ComposerModel::default();
        update(&mut model, ComposerMsg::TextChanged("   ".into()));

        assert!(!model.is_publishable());
    }

    #[test]
    fn over_limit_draft_is_not_publishable() {
        let mut model = ComposerModel::default();
        update(
            &mut model,
            ComposerMsg::TextChanged("x".repeat(MAX_POST_LEN + 1)),
        );

        assert!(!model.is_publishable());
        assert_eq!(model.remaining(), -1);
    }

    #[test]
    fn draft_at_the_limit_is_publishable() {
        let mut model = ComposerModel::default();
        update(
            &mut model,
            ComposerMsg::TextChanged("x".repeat(MAX_POST_LEN)),
        );

        assert!(model.is_publishable());
        assert_eq!(model.remaining(), 0);
    }

    #[test]
    fn cleared_resets_the_draft() {
        let mut model = ComposerModel::default();
        update(&mut model, ComposerMsg::TextChanged("draft".into()));

        update(&mut model, ComposerMsg::Cleared);

        assert_eq!(model.text(), "");
        assert_eq!(model.remaining(), MAX_POST_LEN as i64);
    }
}
