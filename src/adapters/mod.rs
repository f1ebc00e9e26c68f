// Adapters layer: concrete implementations of the domain ports.

pub mod assets;
pub mod resend;

pub use assets::LocalAssetStore;
pub use resend::ResendSender;
