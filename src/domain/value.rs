use rand::Rng;
use std::fmt;
use url::Url;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// BiP API account username, used for HTTP basic auth.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// BiP API account password, used for HTTP basic auth.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient phone number, normalized to the wire `address` form.
///
/// The API addresses individual recipients as `"90"` followed by the last
/// ten digits of the subscriber number. [`Msisdn::new`] trims the input,
/// strips one leading `+`, requires the rest to be at least ten ASCII
/// digits, and stores the normalized address. Anything shorter or
/// non-numeric is rejected instead of being truncated into a malformed
/// address.
pub struct Msisdn(String);

impl Msisdn {
    /// Wire field name carrying the normalized value (`address`).
    pub const FIELD: &'static str = "address";

    /// Country-code prefix applied during normalization.
    pub const PREFIX: &'static str = "90";

    /// Minimum number of digits accepted.
    pub const MIN_DIGITS: usize = 10;

    /// Create a validated, normalized [`Msisdn`].
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::MsisdnNotNumeric {
                input: trimmed.to_owned(),
            });
        }
        if digits.len() < Self::MIN_DIGITS {
            return Err(ValidationError::MsisdnTooShort {
                min: Self::MIN_DIGITS,
                actual: digits.len(),
            });
        }

        let last_ten = &digits[digits.len() - Self::MIN_DIGITS..];
        Ok(Self(format!("{}{last_ten}", Self::PREFIX)))
    }

    /// The normalized wire address (`"90" + last ten digits`).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Msisdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Opaque recipient identifier handed out by the platform.
///
/// Sent verbatim as the wire `address`; invariant: non-empty after trimming.
pub struct RecipientHash(String);

impl RecipientHash {
    pub const FIELD: &'static str = "address";

    /// Create a validated [`RecipientHash`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated hash.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Per-request correlation token (`txnid`).
///
/// A four-digit random integer, serialized as a string. Collisions are
/// possible and unmanaged; this is not a dedup key.
pub struct TransactionId(u16);

impl TransactionId {
    /// Wire field name (`txnid`).
    pub const FIELD: &'static str = "txnid";

    pub const MIN: u16 = 1000;
    pub const MAX: u16 = 9999;

    /// Create a transaction id from a known value.
    pub fn new(value: u16) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::TxnidOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Draw a fresh random transaction id.
    pub fn random() -> Self {
        Self(rand::thread_rng().gen_range(Self::MIN..=Self::MAX))
    }

    /// Get the underlying integer value.
    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// URL of a media item (image, audio, video, sticker, document).
///
/// Invariant: parses as an absolute URL.
pub struct MediaUrl(Url);

impl MediaUrl {
    pub const FIELD: &'static str = "url";

    /// Parse and validate a media URL.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = value.as_ref().trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let url = Url::parse(raw).map_err(|_| ValidationError::InvalidUrl {
            input: raw.to_owned(),
        })?;
        Ok(Self(url))
    }

    /// The URL in serialized form.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
