//! Labelled input and output widgets

use iced::widget::{column, container, scrollable, text, text_input};
use iced::{Background, Border, Element, Length, Padding};

use super::theme::DarkTheme;

/// Single-line input bound to a document value
pub fn input<'a, Message: Clone + 'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let field = text_input(placeholder, value)
        .on_input(on_input)
        .on_submit(on_submit)
        .padding(Padding::new(10.0))
        .size(15)
        .style(|_theme, _status| text_input::Style {
            background: Background::Color(DarkTheme::SURFACE),
            border: Border {
                color: DarkTheme::BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            icon: DarkTheme::TEXT_MUTED,
            placeholder: DarkTheme::TEXT_PLACEHOLDER,
            value: DarkTheme::TEXT,
            selection: DarkTheme::PRIMARY,
        });

    column![text(label).size(12).color(DarkTheme::TEXT_MUTED), field]
        .spacing(4)
        .into()
}

/// Scrollable read-only panel showing rendered container text
pub fn output<'a, Message: 'a>(content: String, empty_hint: &'a str) -> Element<'a, Message> {
    let body = if content.trim().is_empty() {
        text(empty_hint).size(14).color(DarkTheme::TEXT_MUTED)
    } else {
        text(content).size(15).color(DarkTheme::TEXT)
    };

    container(scrollable(container(body).padding(12)).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::FillPortion(1))
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::SURFACE)),
            border: Border::default().rounded(8),
            ..Default::default()
        })
        .into()
}
