//! Card embeds: a shared base over one card record plus the two variants
//! that turn it into a Discord embed.

use crate::embed::{Embed, SUCCESS_GREEN};
use crate::error::CardResult;
use crate::formatters::{format_card_text, join_bullets, title_case};
use crate::models::CardRecord;
use serde_json::Value;

pub const IMAGE_TEMPLATE: &str =
    "https://art.hearthstonejson.com/v1/render/latest/enUS/512x/{card_id}.png";
pub const CARD_VIEW_TEMPLATE: &str = "https://hearthpwn.com/{card_id}";

pub fn image_url(card_id: &str) -> String {
    IMAGE_TEMPLATE.replace("{card_id}", card_id)
}

pub fn detail_url(card_id: &str) -> String {
    CARD_VIEW_TEMPLATE.replace("{card_id}", card_id)
}

/// A card plus the embed being built for it
#[derive(Debug, Clone)]
pub struct CardEmbed {
    card: CardRecord,
    card_id: String,
    embed: Embed,
}

impl CardEmbed {
    /// Fails with `MissingField` when the record has no `name` or `id`
    pub fn new(card: CardRecord) -> CardResult<Self> {
        let name = card.get_display("name")?;
        let card_id = card.get_display("id")?;
        let embed = Embed::rich(name, detail_url(&card_id));
        Ok(Self {
            card,
            card_id,
            embed,
        })
    }

    /// Attribute by snake_case alias, see [`CardRecord::get`]
    pub fn get(&self, name: &str) -> CardResult<&Value> {
        self.card.get(name)
    }

    pub fn get_display(&self, name: &str) -> CardResult<String> {
        self.card.get_display(name)
    }

    pub fn has(&self, key: &str) -> bool {
        self.card.has(key)
    }

    pub fn card(&self) -> &CardRecord {
        &self.card
    }

    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    pub fn image_url(&self) -> String {
        image_url(&self.card_id)
    }

    pub fn detail_url(&self) -> String {
        detail_url(&self.card_id)
    }

    /// The embed as built so far (title and link only until rendered)
    pub fn embed(&self) -> &Embed {
        &self.embed
    }
}

pub trait RenderEmbed {
    fn base(&self) -> &CardEmbed;

    fn render(&self) -> CardResult<Embed>;
}

/// Full-size card image and nothing else
#[derive(Debug, Clone)]
pub struct CardImage(CardEmbed);

impl CardImage {
    pub fn new(card: CardRecord) -> CardResult<Self> {
        CardEmbed::new(card).map(Self)
    }
}

impl RenderEmbed for CardImage {
    fn base(&self) -> &CardEmbed {
        &self.0
    }

    fn render(&self) -> CardResult<Embed> {
        let mut embed = self.0.embed.clone();
        embed.set_image(self.0.image_url());
        Ok(embed)
    }
}

/// The default embed: stats line, rules text, thumbnail and a metadata footer
#[derive(Debug, Clone)]
pub struct CardText(CardEmbed);

impl CardText {
    pub fn new(card: CardRecord) -> CardResult<Self> {
        CardEmbed::new(card).map(Self)
    }

    /// `4 mana • 3/5 • Beast`; stats and race only for minions
    pub fn type_line(&self) -> CardResult<String> {
        let card = &self.0;
        let mut parts = vec![format!("{} mana", card.get_display("cost")?)];
        if card.get("type")?.as_str() == Some("MINION") {
            parts.push(format!(
                "{}/{}",
                card.get_display("attack")?,
                card.get_display("health")?
            ));
            if card.has("race") {
                parts.push(title_case(&card.get_display("race")?));
            }
        }
        Ok(join_bullets(&parts))
    }

    pub fn text_line(&self) -> CardResult<String> {
        Ok(format_card_text(&self.0.get_display("text")?))
    }

    /// `Minion • Mage • Epic • Tgt`
    pub fn footer_line(&self) -> CardResult<String> {
        let card = &self.0;
        let parts = [
            title_case(&card.get_display("type")?),
            title_case(&card.get_display("card_class")?),
            title_case(&card.get_display("rarity")?),
            title_case(&card.get_display("set")?),
        ];
        Ok(join_bullets(&parts))
    }
}

impl RenderEmbed for CardText {
    fn base(&self) -> &CardEmbed {
        &self.0
    }

    fn render(&self) -> CardResult<Embed> {
        let mut embed = self.0.embed.clone();
        embed.add_field(self.type_line()?, self.text_line()?);
        embed.color = Some(SUCCESS_GREEN);
        embed.set_thumbnail(self.0.image_url());
        embed.set_footer(self.footer_line()?);
        log::debug!("Rendered text embed for {}", self.0.card_id);
        Ok(embed)
    }
}

/// Which variant a caller asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedKind {
    Image,
    #[default]
    Text,
}

impl EmbedKind {
    pub fn render(self, card: CardRecord) -> CardResult<Embed> {
        match self {
            EmbedKind::Image => CardImage::new(card)?.render(),
            EmbedKind::Text => CardText::new(card)?.render(),
        }
    }
}

#[cfg(test)]
#[path = "card_embed_tests.rs"]
mod tests;
