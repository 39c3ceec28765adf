// SPDX-License-Identifier: MPL-2.0
//! Reusable drawing helpers.
//!
//! - [`checkerboard`] - Transparency checkerboard background pattern for
//!   displaying images with alpha channels

pub mod checkerboard;
