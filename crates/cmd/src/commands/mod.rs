// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod check;
pub mod config;
pub mod env;
pub mod export;
pub mod sites;
pub mod url;

pub use check::check_command;
pub use config::{ConfigArgs, config_command};
pub use env::env_command;
pub use export::export_command;
pub use sites::sites_command;
pub use url::url_command;
