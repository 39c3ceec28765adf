// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::config::BackgroundTheme;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::zoom_view::{self, ViewEnv};
use iced::widget::{button, container, row, text, Container, Stack};
use iced::{Border, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub zoom_view: &'a zoom_view::State,
    pub background_theme: BackgroundTheme,
    pub dark_mode: bool,
    /// i18n key of the notification currently shown, if any.
    pub notification: Option<&'a str>,
}

/// Renders the zoomable view with the notification banner on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = ctx
        .zoom_view
        .view(ViewEnv {
            i18n: ctx.i18n,
            background_theme: ctx.background_theme,
            dark_mode: ctx.dark_mode,
        })
        .map(Message::ZoomView);

    let mut stack = Stack::new().push(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if let Some(key) = ctx.notification {
        stack = stack.push(notification_banner(ctx.i18n, key));
    }

    stack.into()
}

fn notification_banner<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let color = if key.starts_with("error-") {
        palette::ERROR_500
    } else {
        palette::WARNING_500
    };

    let banner = container(
        row![
            text(i18n.tr(key)).size(typography::BODY).width(Length::Fill),
            button(text("×").size(typography::BODY)).on_press(Message::DismissNotification),
        ]
        .spacing(spacing::XS)
        .align_y(iced::Alignment::Center),
    )
    .padding(spacing::XS)
    .width(Length::Fill)
    .style(move |_theme: &Theme| container::Style {
        background: Some(color.into()),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..container::Style::default()
    });

    container(banner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}
