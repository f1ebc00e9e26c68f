//! Page view models built from the read-only profile.
//!
//! Each page takes a slice of the [`Profile`](crate::domain::model::Profile),
//! runs labels through the slug resolver and summaries through an annotator,
//! and returns a serializable view. Nothing here writes back to the profile.

pub mod about;
pub mod academics;
pub mod experience;
pub mod profile;

use crate::core::annotate::Paragraph;
use crate::core::slug::{resolve_image, AssetKind, ImageRef};
use crate::domain::model::Experience;
use crate::domain::ports::AssetStore;
use serde::Serialize;

/// A company/organization card shared by the experience and academics pages.
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub company: String,
    pub role: String,
    pub timeframe: Option<String>,
    pub location: Option<String>,
    pub status: Option<&'static str>,
    pub link: Option<String>,
    pub starred: bool,
    pub logo: ImageRef,
    pub summary: Vec<Paragraph>,
}

impl Card {
    pub(crate) async fn from_experience<S: AssetStore>(
        store: &S,
        entry: &Experience,
        summary: Vec<Paragraph>,
    ) -> Self {
        Self {
            company: entry.company.clone(),
            role: entry.role.clone(),
            timeframe: Some(entry.timeframe.clone()),
            location: Some(entry.location.clone()),
            status: entry.status.map(|s| s.label()),
            link: entry.link.clone(),
            starred: false,
            logo: resolve_image(store, AssetKind::Logo, &entry.company).await,
            summary,
        }
    }
}
