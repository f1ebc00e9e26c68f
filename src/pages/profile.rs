use crate::domain::model::{ContactInfo, Profile, SkillCategory};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub title: String,
    pub one_liner: String,
    pub location: String,
    pub contact: ContactInfo,
    pub highlights: Vec<String>,
    pub skills: Vec<SkillCategory>,
}

pub fn build(profile: &Profile) -> ProfileSummary {
    ProfileSummary {
        name: profile.name.clone(),
        title: profile.title.trim().to_string(),
        one_liner: profile.one_liner.clone(),
        location: profile.location.clone(),
        contact: profile.contact.clone(),
        highlights: profile.highlights.clone(),
        skills: profile.skills.clone(),
    }
}
