// SPDX-License-Identifier: MPL-2.0
//! About screen with application name, version, and license line.

use crate::i18n::fluent::I18n;
use iced::alignment::Horizontal;
use iced::widget::{text, Column};
use iced::{Element, Length};

/// Renders the about screen.
pub fn view<Message: 'static>(i18n: &I18n) -> Element<'_, Message> {
    Column::new()
        .spacing(12)
        .push(text(i18n.tr("about-title")).size(30))
        .push(text(format!("{} {}", i18n.tr("window-title"), env!("CARGO_PKG_VERSION"))))
        .push(text(i18n.tr("about-description")))
        .push(text(i18n.tr("about-license")))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
