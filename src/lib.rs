//! Typed Rust client for the BiP messaging HTTP API.
//!
//! The design is layered: a domain layer of strong types (receivers,
//! message kinds, validated values), a transport layer for the nested
//! JSON wire schema, and a small client layer issuing one authenticated
//! POST per send. The [`Bip`] facade wires the broadcast (`all`) and
//! addressed (`single`, `multi`) clients for a deployment environment.
//!
//! ```rust,no_run
//! use bip::{Bip, Environment, Msisdn};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), bip::BipError> {
//!     let bip = Bip::new(Environment::Production, "service-user", "...")?;
//!     let to = Msisdn::new("905551234567")?;
//!     let receipt = bip.single.send_text(to, "hello").await?;
//!     println!("txnid: {}, http: {}", receipt.txnid, receipt.http_status);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Auth, Bip, BipClient, BipClientBuilder, BipError, Environment, GroupClient, MemberClient,
    SendReceipt,
};
pub use domain::{
    ButtonKind, ContactCard, DocumentRef, LocationPin, MediaKind, MediaUrl, Message, Msisdn,
    Password, Poll, PollImage, PollKind, PollOption, PostalAddress, QuickReplyButton, Receiver,
    RecipientHash, TransactionId, Username, ValidationError,
};
