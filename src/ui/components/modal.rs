// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Modal dialog component in an MVU-friendly shape.
//!
//! The model is a plain visibility flag; the view draws a dimmed backdrop and
//! a centered window with a close control. Clicks on the backdrop dismiss the
//! dialog, clicks inside the content do not.

use eframe::egui;

/// Visibility state owned by the modal container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalVisibility {
    #[default]
    Hidden,
    Visible,
}

/// Where a click landed relative to the open dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the dialog.
    Backdrop,
    /// The dialog window itself.
    Content,
}

/// UI model for a single modal dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalModel {
    visibility: ModalVisibility,
}

impl ModalModel {
    pub fn visibility(&self) -> ModalVisibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == ModalVisibility::Visible
    }
}

/// Messages emitted by the trigger control, the close control, and document clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalMsg {
    /// The trigger control was activated.
    OpenRequested,
    /// The close control was clicked.
    CloseRequested,
    /// A click landed somewhere while the dialog is open.
    Clicked(ClickTarget),
}

/// Apply a message to the model. Opening while visible is idempotent.
pub fn update(model: &mut ModalModel, msg: ModalMsg) {
    match msg {
        ModalMsg::OpenRequested => model.visibility = ModalVisibility::Visible,
        ModalMsg::CloseRequested => model.visibility = ModalVisibility::Hidden,
        ModalMsg::Clicked(ClickTarget::Backdrop) => model.visibility = ModalVisibility::Hidden,
        ModalMsg::Clicked(ClickTarget::Content) => {}
    }
}

/// Render the dialog when visible and return any messages triggered by user
/// interaction. `add_contents` fills the dialog body.
pub fn view(
    ctx: &egui::Context,
    model: &ModalModel,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> Vec<ModalMsg> {
    let mut msgs = Vec::new();
    if !model.is_visible() {
        return msgs;
    }

    let screen = ctx.screen_rect();

    // Backdrop first so the window registered below ends up on top of it;
    // its click response only fires when the click missed the dialog.
    let backdrop = egui::Area::new(egui::Id::new(title).with("backdrop"))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(96));
            ui.allocate_rect(screen, egui::Sense::click())
        });
    if backdrop.inner.clicked() {
        msgs.push(ModalMsg::Clicked(ClickTarget::Backdrop));
    }

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(egui_phosphor::regular::X)
                        .on_hover_text("Close")
                        .clicked()
                    {
                        msgs.push(ModalMsg::CloseRequested);
                    }
                });
            });
            ui.separator();
            ui.add_space(4.0);
            add_contents(ui);
        });

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_hidden() {
        let model = ModalModel::default();

        assert_eq!(model.visibility(), ModalVisibility::Hidden);
        assert!(!model.is_visible());
    }

    #[test]
    fn open_request_shows_the_dialog() {
        let mut model = ModalModel::default();

        update(&mut model, ModalMsg::OpenRequested);

        assert_eq!(model.visibility(), ModalVisibility::Visible);
    }

    #[test]
    fn close_request_hides_the_dialog() {
        let mut model = ModalModel::default();
        update(&mut model, ModalMsg::OpenRequested);

        update(&mut model, ModalMsg::CloseRequested);

        assert_eq!(model.visibility(), ModalVisibility::Hidden);
    }

    #[test]
    fn backdrop_click_hides_the_dialog() {
        let mut model = ModalModel::default();
        update(&mut model, ModalMsg::OpenRequested);

        update(&mut model, ModalMsg::Clicked(ClickTarget::Backdrop));

        assert_eq!(model.visibility(), ModalVisibility::Hidden);
    }

    #[test]
    fn content_click_keeps_the_dialog_visible() {
        let mut model = ModalModel::default();
        update(&mut model, ModalMsg::OpenRequested);

        update(&mut model, ModalMsg::Clicked(ClickTarget::Content));

        assert_eq!(model.visibility(), ModalVisibility::Visible);
    }

    #[test]
    fn repeated_open_requests_are_idempotent() {
        let mut model = ModalModel::default();

        update(&mut model, ModalMsg::OpenRequested);
        update(&mut model, ModalMsg::OpenRequested);
        update(&mut model, ModalMsg::OpenRequested);

        assert_eq!(model.visibility(), ModalVisibility::Visible);
    }

    #[test]
    fn visibility_tracks_the_latest_state_changing_message() {
        use ModalMsg::*;

        // Visible iff the last non-content-click message was an open request.
        let sequences: &[(&[ModalMsg], ModalVisibility)] = &[
            (&[], ModalVisibility::Hidden),
            (&[OpenRequested], ModalVisibility::Visible),
            (&[OpenRequested, CloseRequested], ModalVisibility::Hidden),
            (
                &[OpenRequested, Clicked(ClickTarget::Content), CloseRequested],
                ModalVisibility::Hidden,
            ),
            (
                &[
                    OpenRequested,
                    CloseRequested,
                    OpenRequested,
                    Clicked(ClickTarget::Content),
                ],
                ModalVisibility::Visible,
            ),
            (
                &[
                    OpenRequested,
                    Clicked(ClickTarget::Backdrop),
                    Clicked(ClickTarget::Content),
                ],
                ModalVisibility::Hidden,
            ),
            (
                &[CloseRequested, Clicked(ClickTarget::Backdrop)],
                ModalVisibility::Hidden,
            ),
            (
                &[
                    OpenRequested,
                    OpenRequested,
                    Clicked(ClickTarget::Backdrop),
                    OpenRequested,
                ],
                ModalVisibility::Visible,
            ),
        ];

        for (msgs, expected) in sequences {
            let mut model = ModalModel::default();
            for msg in msgs.iter() {
                update(&mut model, *msg);
            }
            assert_eq!(model.visibility(), *expected, "sequence {msgs:?}");
        }
    }
}
