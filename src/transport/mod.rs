//! Transport layer: wire-format details (payload serialization).

mod send;

pub use send::encode_send_payload;
