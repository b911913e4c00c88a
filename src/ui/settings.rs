// SPDX-License-Identifier: MPL-2.0
//! Settings screen for language, theme, and board preferences.

use crate::config::SortOrder;
use crate::i18n::fluent::I18n;
use crate::ui::state::SlideshowInterval;
use crate::ui::theming::ThemeMode;
use iced::alignment::Horizontal;
use iced::widget::{button, checkbox, slider, text, Column, Row};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    SortOrderSelected(SortOrder),
    SlideshowToggled(bool),
    SlideshowIntervalChanged(u32),
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub sort_order: SortOrder,
    pub slideshow_enabled: bool,
    pub slideshow_interval: SlideshowInterval,
}

/// Returns the i18n key for a sort order's label.
fn sort_order_i18n_key(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Alphabetical => "sort-alphabetical",
        SortOrder::ModifiedDate => "sort-modified-date",
        SortOrder::CreatedDate => "sort-created-date",
    }
}

const SORT_ORDERS: [SortOrder; 3] = [
    SortOrder::Alphabetical,
    SortOrder::ModifiedDate,
    SortOrder::CreatedDate,
];

/// Renders the settings screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = text(ctx.i18n.tr("settings-title")).size(30);

    let mut language_column = Column::new()
        .push(text(ctx.i18n.tr("select-language-label")))
        .spacing(10);

    for locale in &ctx.i18n.available_locales {
        let display_name = locale.to_string();

        // Check for a translated language name, e.g. "language-name-en-US"
        let translated_name = ctx.i18n.tr(&format!("language-name-{}", locale));
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone()
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let is_current = ctx.i18n.current_locale() == locale;
        let mut language_button =
            button(text(button_text)).on_press(Message::LanguageSelected(locale.clone()));
        language_button = if is_current {
            language_button.style(button::primary)
        } else {
            language_button.style(button::secondary)
        };

        language_column = language_column.push(language_button);
    }

    let mut theme_row = Row::new().spacing(10);
    for mode in ThemeMode::ALL {
        let mut theme_button =
            button(text(ctx.i18n.tr(mode.i18n_key()))).on_press(Message::ThemeModeSelected(mode));
        theme_button = if mode == ctx.theme_mode {
            theme_button.style(button::primary)
        } else {
            theme_button.style(button::secondary)
        };
        theme_row = theme_row.push(theme_button);
    }
    let theme_column = Column::new()
        .spacing(10)
        .push(text(ctx.i18n.tr("settings-theme-label")))
        .push(theme_row);

    let mut sort_row = Row::new().spacing(10);
    for order in SORT_ORDERS {
        let mut sort_button = button(text(ctx.i18n.tr(sort_order_i18n_key(order))))
            .on_press(Message::SortOrderSelected(order));
        sort_button = if order == ctx.sort_order {
            sort_button.style(button::primary)
        } else {
            sort_button.style(button::secondary)
        };
        sort_row = sort_row.push(sort_button);
    }
    let sort_column = Column::new()
        .spacing(10)
        .push(text(ctx.i18n.tr("settings-sort-label")))
        .push(sort_row);

    let interval = ctx.slideshow_interval.value();
    let slideshow_column = Column::new()
        .spacing(10)
        .push(text(ctx.i18n.tr("settings-slideshow-label")))
        .push(
            checkbox(ctx.slideshow_enabled)
                .label(ctx.i18n.tr("settings-slideshow-enabled"))
                .on_toggle(Message::SlideshowToggled),
        )
        .push(
            Row::new()
                .spacing(10)
                .push(text(ctx.i18n.tr("settings-slideshow-interval")))
                .push(
                    slider(
                        crate::config::MIN_SLIDESHOW_INTERVAL_SECS
                            ..=crate::config::MAX_SLIDESHOW_INTERVAL_SECS,
                        interval,
                        Message::SlideshowIntervalChanged,
                    )
                    .width(Length::Fixed(220.0)),
                )
                .push(text(format!("{interval} s"))),
        );

    Column::new()
        .push(title)
        .push(language_column)
        .push(theme_column)
        .push(sort_column)
        .push(slideshow_column)
        .spacing(20)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
