// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection.

use crate::config::BackgroundTheme;
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// Built-in iced theme for the effective mode.
#[must_use]
pub fn iced_theme(dark: bool) -> Theme {
    if dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Colors of the info bar drawn over the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayColors {
    pub background: Color,
    pub text: Color,
}

impl OverlayColors {
    #[must_use]
    pub fn new(dark: bool) -> Self {
        let (base, alpha) = if dark {
            (palette::BLACK, opacity::OVERLAY_STRONG)
        } else {
            (palette::GRAY_900, opacity::OVERLAY_MEDIUM)
        };
        Self {
            background: Color { a: alpha, ..base },
            text: palette::WHITE,
        }
    }
}

/// Solid fill behind the image, or `None` when a checkerboard is drawn instead.
#[must_use]
pub fn background_fill(theme: BackgroundTheme) -> Option<Color> {
    match theme {
        BackgroundTheme::Light => Some(palette::GRAY_100),
        BackgroundTheme::Dark => Some(palette::GRAY_900),
        BackgroundTheme::Checkerboard => None,
    }
}
