// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod db;
mod index;
mod metrics;
mod photo;

pub use db::{DbVersionResponse, db_test};
pub use index::{APP_GREETING, PHOTO_GREETING, app_index, photo_index};
pub use metrics::metrics_handler;
pub use photo::{ProcessResponse, process_photo};
