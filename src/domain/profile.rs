use crate::domain::model::{Experience, ExperienceCategory, Profile};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use std::path::Path;

impl Profile {
    /// Load the profile data file (TOML).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            SiteError::TomlParseError { message, .. } => SiteError::TomlParseError {
                source_name: path.as_ref().display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SiteError::TomlParseError {
            source_name: "profile".to_string(),
            message: e.to_string(),
        })
    }

    /// Entries with the given tag, in profile order.
    pub fn experience_in(
        &self,
        category: ExperienceCategory,
    ) -> impl Iterator<Item = &Experience> + '_ {
        self.experience.iter().filter(move |e| e.category == category)
    }

    pub fn interest(&self, name: &str) -> Option<&crate::domain::model::Interest> {
        self.interests.iter().find(|i| i.name == name)
    }
}

impl Validate for Profile {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("name", &self.name)?;
        validation::validate_email("contact.email", &self.contact.email)?;
        if let Some(linkedin) = &self.contact.linkedin {
            validation::validate_link("contact.linkedin", linkedin)?;
        }
        if let Some(resume) = &self.contact.resume {
            validation::validate_link("contact.resume", resume)?;
        }

        for (idx, entry) in self.experience.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("experience[{}].company", idx),
                &entry.company,
            )?;
            if let Some(link) = &entry.link {
                validation::validate_link(&format!("experience[{}].link", idx), link)?;
            }
        }

        for (title, url) in &self.title_links {
            if title.is_empty() {
                return Err(SiteError::InvalidConfigValueError {
                    field: "title_links".to_string(),
                    value: url.clone(),
                    reason: "Title keys cannot be empty".to_string(),
                });
            }
            validation::validate_url(&format!("title_links[{:?}]", title), url)?;
        }

        for group in &self.class_groups {
            for class in &group.classes {
                if !self.classes.contains(class) {
                    return Err(SiteError::InvalidConfigValueError {
                        field: format!("class_groups[{:?}]", group.name),
                        value: class.clone(),
                        reason: "Class is not listed in `classes`".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
