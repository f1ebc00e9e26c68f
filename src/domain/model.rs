use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Literal title → URL, consulted by the annotator.
pub type TitleLinkMap = BTreeMap<String, String>;

/// The site owner's biography. Loaded once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub one_liner: String,
    pub location: String,
    pub contact: ContactInfo,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub socials: Socials,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub class_groups: Vec<ClassGroup>,
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub interests: Vec<Interest>,
    #[serde(default)]
    pub songs: Vec<Song>,
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub title_links: TitleLinkMap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub linkedin: Option<String>,
    pub resume: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Socials {
    pub github: Option<String>,
    pub spotify: Option<String>,
    pub instagram: Option<String>,
    pub scholar: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceCategory {
    Industry,
    Research,
    Other,
    Harvard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceStatus {
    Current,
    Upcoming,
}

impl ExperienceStatus {
    pub fn label(self) -> &'static str {
        match self {
            ExperienceStatus::Current => "Current",
            ExperienceStatus::Upcoming => "Upcoming",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub summary: String,
    pub timeframe: String,
    pub location: String,
    pub category: ExperienceCategory,
    pub status: Option<ExperienceStatus>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassGroup {
    pub name: String,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interest {
    pub name: String,
    pub details: Option<InterestDetails>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterestDetails {
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub organizations: Vec<LinkedName>,
    #[serde(default)]
    pub awards: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedName {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub url: String,
}

/// Contact form submission as received from the client. Missing and `null`
/// fields both arrive as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A fully composed message handed to an [`crate::domain::ports::EmailSender`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}
