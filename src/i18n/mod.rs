// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded from `assets/i18n/` at build time.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Variable substitution through [`fluent::I18n::tr_with_args`]
//! - Fallback to `en-US` when a key is missing from the selected locale

pub mod fluent;
