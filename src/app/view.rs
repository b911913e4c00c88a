// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state, with a navigation bar on top.

use super::{App, Message, Screen};
use crate::ui::{about, settings};
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let content: Element<'_, Message> = match app.screen {
        Screen::Board => app.board.view(&app.i18n).map(Message::Board),
        Screen::Settings => settings::view(settings::ViewContext {
            i18n: &app.i18n,
            theme_mode: app.theme_mode,
            sort_order: app.sort_order,
            slideshow_enabled: app.slideshow_enabled,
            slideshow_interval: app.slideshow_interval,
        })
        .map(Message::Settings),
        Screen::About => about::view(&app.i18n),
    };

    Column::new()
        .push(navbar(app))
        .push(
            container(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn navbar(app: &App) -> Element<'_, Message> {
    let screens = [
        (Screen::Board, "nav-board"),
        (Screen::Settings, "nav-settings"),
        (Screen::About, "nav-about"),
    ];

    let mut bar = Row::new().spacing(8).padding(8);
    for (screen, key) in screens {
        let mut screen_button =
            button(text(app.i18n.tr(key))).on_press(Message::SwitchScreen(screen));
        screen_button = if screen == app.screen {
            screen_button.style(button::primary)
        } else {
            screen_button.style(button::secondary)
        };
        bar = bar.push(screen_button);
    }

    bar = bar.push(
        container(
            button(text(app.i18n.tr("nav-reload")))
                .style(button::secondary)
                .on_press(Message::Reload),
        )
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right),
    );

    bar.into()
}
