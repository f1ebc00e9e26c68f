pub mod annotate;
pub mod contact;
pub mod slug;

pub use crate::domain::model::{ContactRequest, OutgoingEmail, Profile, TitleLinkMap};
pub use crate::domain::ports::{AssetStore, EmailSender};
pub use crate::utils::error::Result;
