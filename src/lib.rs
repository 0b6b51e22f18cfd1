//! Innkeep - Hearthstone card lookups for Discord
//!
//! Keeps the collectible card catalog from HearthstoneJSON in memory and
//! turns single cards into Discord embeds.

pub mod api;
pub mod cache;
pub mod card_embed;
pub mod config;
pub mod embed;
pub mod error;
pub mod formatters;
pub mod models;

// Re-export commonly used items
pub use api::{load_catalog, CatalogFile, CatalogSource, HearthstoneClient};
pub use cache::{build_index, CardCache, CardIndex};
pub use card_embed::{CardEmbed, CardImage, CardText, EmbedKind, RenderEmbed};
pub use config::Config;
pub use embed::{Embed, EmbedField, EmbedFooter, EmbedMedia, SUCCESS_GREEN};
pub use error::{ApiError, ApiResult, CardError, CardResult};
pub use models::CardRecord;
