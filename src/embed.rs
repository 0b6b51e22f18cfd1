//! Discord embed object, serialized in the shape the message API expects

use serde::{Deserialize, Serialize};

/// `Colour.green()` in Discord's palette, used for successful lookups
pub const SUCCESS_GREEN: u32 = 0x2ECC71;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedMedia {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
}

impl Embed {
    /// A bare `rich` embed with only title and link
    pub fn rich(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: "rich".to_string(),
            title: title.into(),
            url: url.into(),
            image: None,
            thumbnail: None,
            fields: Vec::new(),
            footer: None,
            color: None,
        }
    }

    pub fn set_image(&mut self, url: impl Into<String>) {
        self.image = Some(EmbedMedia { url: url.into() });
    }

    pub fn set_thumbnail(&mut self, url: impl Into<String>) {
        self.thumbnail = Some(EmbedMedia { url: url.into() });
    }

    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: false,
        });
    }

    pub fn set_footer(&mut self, text: impl Into<String>) {
        self.footer = Some(EmbedFooter { text: text.into() });
    }

    /// Plain-text preview for terminals and logs
    pub fn to_plain_text(&self) -> String {
        let mut output = format!("{}\n{}\n", self.title, self.url);
        for field in &self.fields {
            output.push_str(&format!("\n{}\n{}\n", field.name, field.value));
        }
        if let Some(ref image) = self.image {
            output.push_str(&format!("\nImage: {}\n", image.url));
        }
        if let Some(ref thumbnail) = self.thumbnail {
            output.push_str(&format!("Thumbnail: {}\n", thumbnail.url));
        }
        if let Some(ref footer) = self.footer {
            output.push_str(&format!("\n{}\n", footer.text));
        }
        output
    }
}
