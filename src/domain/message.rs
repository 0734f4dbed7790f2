use serde_json::{Map, Value};

use crate::domain::validation::ValidationError;
use crate::domain::value::MediaUrl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Template selector nested inside `MEDIA` payloads (`tmmtype`).
pub enum MediaKind {
    QuickReply,
    Poll,
}

impl MediaKind {
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::QuickReply => "QUICK_REPLY",
            Self::Poll => "POLL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Quick-reply button behavior.
pub enum ButtonKind {
    Postback,
    Link,
}

impl ButtonKind {
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::Postback => "POSTBACK",
            Self::Link => "URL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Whether a poll accepts one choice or several.
pub enum PollKind {
    Single,
    Multi,
}

impl PollKind {
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Multi => "MULTI",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickReplyButton {
    pub payload: String,
    pub name: String,
    pub kind: ButtonKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOption {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PollImage {
    pub url: MediaUrl,
    pub ratio: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Poll {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: PollImage,
    pub kind: PollKind,
    pub options: Vec<PollOption>,
    pub button_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationPin {
    pub lat: f64,
    pub lon: f64,
    pub title: String,
    pub description: String,
    pub zoom_level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalAddress {
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub name: String,
    pub surname: String,
    pub phone_numbers: Vec<String>,
    pub addresses: Vec<PostalAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub filename: String,
    pub url: MediaUrl,
}

#[derive(Debug, Clone, PartialEq)]
/// One outbound message, one variant per kind the API understands.
///
/// Use the constructors below; they validate the free-form parts. Quick
/// replies and polls go over the wire as `MEDIA` entries with a nested
/// template, everything else as its own tag. [`Message::custom`] is the
/// escape hatch for kinds this crate does not wrap: its fields are passed
/// through to the server unchecked.
pub enum Message {
    Text {
        text: String,
    },
    Image {
        url: MediaUrl,
        size: u64,
        ratio: String,
    },
    Audio {
        url: MediaUrl,
        size: u64,
    },
    Video {
        url: MediaUrl,
        size: u64,
        ratio: String,
    },
    Sticker {
        url: MediaUrl,
        item_id: u64,
    },
    Caps {
        url: MediaUrl,
        item_id: u64,
        size: u64,
        ratio: String,
    },
    Location(LocationPin),
    Line,
    Contact(ContactCard),
    Document(DocumentRef),
    QuickReply {
        postback_id: String,
        buttons: Vec<QuickReplyButton>,
    },
    Poll(Poll),
    Custom {
        tag: String,
        fields: Map<String, Value>,
    },
}

impl Message {
    /// Plain text.
    pub fn text(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::Empty { field: "message" });
        }
        Ok(Self::Text { text })
    }

    pub fn image(url: MediaUrl, size: u64, ratio: impl Into<String>) -> Self {
        Self::Image {
            url,
            size,
            ratio: ratio.into(),
        }
    }

    pub fn audio(url: MediaUrl, size: u64) -> Self {
        Self::Audio { url, size }
    }

    pub fn video(url: MediaUrl, size: u64, ratio: impl Into<String>) -> Self {
        Self::Video {
            url,
            size,
            ratio: ratio.into(),
        }
    }

    pub fn sticker(url: MediaUrl, item_id: u64) -> Self {
        Self::Sticker { url, item_id }
    }

    /// Animated sticker.
    pub fn caps(url: MediaUrl, item_id: u64, size: u64, ratio: impl Into<String>) -> Self {
        Self::Caps {
            url,
            item_id,
            size,
            ratio: ratio.into(),
        }
    }

    pub fn location(pin: LocationPin) -> Self {
        Self::Location(pin)
    }

    /// Conversation divider marker; carries no fields.
    pub fn line() -> Self {
        Self::Line
    }

    pub fn contact(card: ContactCard) -> Result<Self, ValidationError> {
        if card.name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        Ok(Self::Contact(card))
    }

    pub fn document(document: DocumentRef) -> Result<Self, ValidationError> {
        if document.filename.trim().is_empty() {
            return Err(ValidationError::Empty { field: "filename" });
        }
        Ok(Self::Document(document))
    }

    pub fn quick_reply(
        postback_id: impl Into<String>,
        buttons: Vec<QuickReplyButton>,
    ) -> Result<Self, ValidationError> {
        let postback_id = postback_id.into();
        if postback_id.trim().is_empty() {
            return Err(ValidationError::Empty { field: "postbackid" });
        }
        if buttons.is_empty() {
            return Err(ValidationError::NoButtons);
        }
        Ok(Self::QuickReply {
            postback_id,
            buttons,
        })
    }

    pub fn poll(poll: Poll) -> Result<Self, ValidationError> {
        if poll.title.trim().is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        if poll.options.is_empty() {
            return Err(ValidationError::NoOptions);
        }
        Ok(Self::Poll(poll))
    }

    /// A message kind this crate does not wrap: caller supplies the wire
    /// tag and the entry fields verbatim.
    pub fn custom(
        tag: impl Into<String>,
        fields: Map<String, Value>,
    ) -> Result<Self, ValidationError> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(ValidationError::Empty { field: "type" });
        }
        Ok(Self::Custom { tag, fields })
    }

    /// Wire value of the composition entry's `type` field.
    pub fn wire_type(&self) -> &str {
        match self {
            Self::Text { .. } => "TEXT",
            Self::Image { .. } => "IMAGE",
            Self::Audio { .. } => "AUDIO",
            Self::Video { .. } => "VIDEO",
            Self::Sticker { .. } => "STICKER",
            Self::Caps { .. } => "CAPS",
            Self::Location(_) => "LOCATION",
            Self::Line => "LINE",
            Self::Contact(_) => "CONTACT",
            Self::Document(_) => "DOCUMENT",
            Self::QuickReply { .. } | Self::Poll(_) => "MEDIA",
            Self::Custom { tag, .. } => tag,
        }
    }
}
