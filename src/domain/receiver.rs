use crate::domain::value::{Msisdn, RecipientHash};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Where a message is delivered.
///
/// `AllMembers` broadcasts to every member of the pre-configured group and
/// carries no address on the wire; the other two variants address one
/// recipient by phone number or by the platform's opaque hash.
pub enum Receiver {
    AllMembers,
    Msisdn(Msisdn),
    Hash(RecipientHash),
}

impl Receiver {
    /// Wire value of the `receiver.type` field.
    pub fn wire_type(&self) -> &'static str {
        match self {
            Self::AllMembers => "ALL_MEMBERS",
            Self::Msisdn(_) => "MSISDN",
            Self::Hash(_) => "HASH",
        }
    }

    /// Wire value of the `receiver.address` field, absent for broadcasts.
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::AllMembers => None,
            Self::Msisdn(msisdn) => Some(msisdn.as_str()),
            Self::Hash(hash) => Some(hash.as_str()),
        }
    }
}
