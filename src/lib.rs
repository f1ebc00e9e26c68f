pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod pages;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{LocalAssetStore, ResendSender};
pub use crate::api::{build_router, AppState};
pub use crate::app::Site;
pub use crate::config::SiteConfig;
pub use crate::core::annotate::{annotate, annotate_line, split_quoted_title, Segment};
pub use crate::core::contact::{ContactError, ContactService};
pub use crate::core::slug::{slugify, AssetKind, ImageRef, ImageStatus};
pub use crate::domain::model::Profile;
pub use crate::utils::error::{Result, SiteError};
