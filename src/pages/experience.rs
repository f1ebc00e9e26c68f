use super::Card;
use crate::core::annotate::annotate;
use crate::domain::model::{ExperienceCategory, Profile};
use crate::domain::ports::AssetStore;
use crate::utils::error::{Result, SiteError};
use serde::Serialize;
use std::str::FromStr;

/// Tabs on the experience page. Harvard roles live on the academics page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceFilter {
    #[default]
    All,
    Industry,
    Research,
    Other,
}

impl ExperienceFilter {
    pub const ALL: [ExperienceFilter; 4] = [
        ExperienceFilter::All,
        ExperienceFilter::Industry,
        ExperienceFilter::Research,
        ExperienceFilter::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExperienceFilter::All => "All",
            ExperienceFilter::Industry => "Industry",
            ExperienceFilter::Research => "Research",
            ExperienceFilter::Other => "Other",
        }
    }

    pub fn matches(self, category: ExperienceCategory) -> bool {
        if category == ExperienceCategory::Harvard {
            return false;
        }
        match self {
            ExperienceFilter::All => true,
            ExperienceFilter::Industry => category == ExperienceCategory::Industry,
            ExperienceFilter::Research => category == ExperienceCategory::Research,
            ExperienceFilter::Other => category == ExperienceCategory::Other,
        }
    }
}

impl FromStr for ExperienceFilter {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        ExperienceFilter::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| SiteError::ValidationError {
                message: format!("Unknown experience filter '{}'", s),
            })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterTab {
    pub key: ExperienceFilter,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperiencePage {
    pub filters: Vec<FilterTab>,
    pub entries: Vec<Card>,
}

pub async fn build<S: AssetStore>(
    profile: &Profile,
    store: &S,
    filter: ExperienceFilter,
) -> ExperiencePage {
    let mut entries = Vec::new();
    for entry in profile.experience.iter().filter(|e| filter.matches(e.category)) {
        let summary = annotate(&entry.summary, &profile.title_links);
        entries.push(Card::from_experience(store, entry, summary).await);
    }

    let filters = ExperienceFilter::ALL
        .into_iter()
        .map(|key| FilterTab {
            key,
            label: key.label(),
            active: key == filter,
        })
        .collect();

    ExperiencePage { filters, entries }
}
