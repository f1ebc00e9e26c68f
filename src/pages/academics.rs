use super::Card;
use crate::core::annotate::split_quoted_titles;
use crate::core::slug::{resolve_image, AssetKind};
use crate::domain::model::{ExperienceCategory, ExperienceStatus, Profile};
use crate::domain::ports::AssetStore;
use serde::Serialize;

/// Number of leading Harvard roles that get a star.
const STARRED_ROLES: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct ClassGroupView {
    pub name: String,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AcademicsPage {
    pub items: Vec<Card>,
    pub class_groups: Vec<ClassGroupView>,
}

pub async fn build<S: AssetStore>(profile: &Profile, store: &S) -> AcademicsPage {
    let mut items = Vec::new();

    for (idx, role) in profile.experience_in(ExperienceCategory::Harvard).enumerate() {
        let summary = split_quoted_titles(&role.summary);
        let mut card = Card::from_experience(store, role, summary).await;
        card.starred = idx < STARRED_ROLES;
        items.push(card);
    }

    for org in &profile.organizations {
        items.push(Card {
            company: org.name.clone(),
            role: "Member".to_string(),
            timeframe: None,
            location: None,
            status: Some(ExperienceStatus::Current.label()),
            link: org.link.clone(),
            starred: false,
            logo: resolve_image(store, AssetKind::Logo, &org.name).await,
            summary: Vec::new(),
        });
    }

    // Profile order wins inside each group.
    let class_groups = profile
        .class_groups
        .iter()
        .map(|group| ClassGroupView {
            name: group.name.clone(),
            classes: profile
                .classes
                .iter()
                .filter(|c| group.classes.contains(c))
                .cloned()
                .collect(),
        })
        .collect();

    AcademicsPage {
        items,
        class_groups,
    }
}
