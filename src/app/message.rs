// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::zoom_view;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    ZoomView(zoom_view::Message),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    DismissNotification,
}

/// Runtime flags passed in from the command line when launching the app.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP 47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to show instead of the sample image.
    pub file_path: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
}
