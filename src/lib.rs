// SPDX-License-Identifier: MPL-2.0
//! `pinch_lens` shows one image and lets the user pinch-zoom it.
//!
//! A two-finger touch pinch (or a vertical mouse drag standing in for one)
//! scales the image about the point where the gesture started; releasing the
//! gesture eases the image back to rest.
//!
//! - [`gesture`] - Recognizers and the interpreter turning pinches into transform signals
//! - [`ui`] - The zoomable view and its rendering
//! - [`app`] - Iced application root
//! - [`config`], [`i18n`], [`media`], [`error`] - Settings, translations, image loading, errors

pub mod app;
pub mod config;
pub mod error;
pub mod gesture;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
