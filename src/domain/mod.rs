//! Domain layer: strong types with validation and invariants (no I/O).

mod message;
mod receiver;
mod validation;
mod value;

pub use message::{
    ButtonKind, ContactCard, DocumentRef, LocationPin, MediaKind, Message, Poll, PollImage,
    PollKind, PollOption, PostalAddress, QuickReplyButton,
};
pub use receiver::Receiver;
pub use validation::ValidationError;
pub use value::{MediaUrl, Msisdn, Password, RecipientHash, TransactionId, Username};
