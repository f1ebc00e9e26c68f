//! Wiring: config file → profile, asset store, contact service.

use crate::adapters::{LocalAssetStore, ResendSender};
use crate::api::AppState;
use crate::config::SiteConfig;
use crate::core::contact::{ContactService, Mailbox};
use crate::domain::model::Profile;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Everything the server needs, loaded and validated.
pub struct Site {
    pub config: SiteConfig,
    pub profile: Profile,
    pub public_dir: PathBuf,
    pub contact: ContactService,
}

impl Site {
    /// Load the config at `config_path`. Relative paths inside it resolve
    /// against the config file's directory.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        let config = SiteConfig::from_file(config_path)?;
        config.validate()?;

        let base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let profile_path = config.resolve_path(&base_dir, &config.site.profile_path);
        let public_dir = config.resolve_path(&base_dir, &config.site.public_dir);

        tracing::info!("Loading profile from {}", profile_path.display());
        let profile = Profile::from_file(&profile_path)?;
        profile.validate()?;

        let contact = Self::contact_service(&config, &profile)?;

        Ok(Self {
            config,
            profile,
            public_dir,
            contact,
        })
    }

    fn contact_service(config: &SiteConfig, profile: &Profile) -> Result<ContactService> {
        let mailbox = match &config.email {
            Some(email) => Mailbox {
                from: email.from.clone(),
                to: email.to.clone(),
            },
            None => Mailbox {
                from: profile.contact.email.clone(),
                to: profile.contact.email.clone(),
            },
        };

        match config.email_api_key() {
            Some(key) => {
                tracing::info!("Email API key is configured (length: {})", key.len());
                let sender =
                    ResendSender::new(config.email_base_url(), key, config.email_timeout())?;
                Ok(ContactService::new(Arc::new(sender), mailbox))
            }
            None => {
                tracing::warn!("No email API key configured; contact form will be unavailable");
                Ok(ContactService::unconfigured(mailbox))
            }
        }
    }

    pub fn into_state(self) -> AppState<LocalAssetStore> {
        AppState::new(
            self.profile,
            LocalAssetStore::new(self.public_dir),
            self.contact,
        )
    }
}
