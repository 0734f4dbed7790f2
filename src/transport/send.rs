use serde_json::{Map, Value, json};

use crate::domain::{MediaKind, Message, Receiver, TransactionId};

/// Encode one send request into the provider's JSON body.
///
/// The envelope is `{txnid, receiver, composition: {list: [entry]}}` with
/// exactly one composition entry, tagged with the message kind.
pub fn encode_send_payload(txnid: TransactionId, receiver: &Receiver, message: &Message) -> Value {
    json!({
        "txnid": txnid.to_string(),
        "receiver": encode_receiver(receiver),
        "composition": {
            "list": [encode_entry(message)],
        },
    })
}

fn encode_receiver(receiver: &Receiver) -> Value {
    let mut obj = Map::new();
    obj.insert("type".to_owned(), json!(receiver.wire_type()));
    if let Some(address) = receiver.address() {
        obj.insert("address".to_owned(), json!(address));
    }
    Value::Object(obj)
}

fn encode_entry(message: &Message) -> Value {
    let mut entry = Map::new();
    entry.insert("type".to_owned(), json!(message.wire_type()));

    match message {
        Message::Text { text } => {
            entry.insert("message".to_owned(), json!(text));
        }
        Message::Image { url, size, ratio } => {
            entry.insert("message".to_owned(), json!(url.as_str()));
            entry.insert("size".to_owned(), json!(size));
            entry.insert("ratio".to_owned(), json!(ratio));
        }
        Message::Audio { url, size } => {
            entry.insert("message".to_owned(), json!(url.as_str()));
            entry.insert("size".to_owned(), json!(size));
        }
        Message::Video { url, size, ratio } => {
            entry.insert("message".to_owned(), json!(url.as_str()));
            entry.insert("size".to_owned(), json!(size));
            entry.insert("ratio".to_owned(), json!(ratio));
        }
        Message::Sticker { url, item_id } => {
            entry.insert("message".to_owned(), json!(url.as_str()));
            entry.insert("itemid".to_owned(), json!(item_id));
        }
        Message::Caps {
            url,
            item_id,
            size,
            ratio,
        } => {
            entry.insert("message".to_owned(), json!(url.as_str()));
            entry.insert("itemid".to_owned(), json!(item_id));
            entry.insert("ratio".to_owned(), json!(ratio));
            entry.insert("size".to_owned(), json!(size));
        }
        Message::Location(pin) => {
            entry.insert(
                "location".to_owned(),
                json!({
                    "lat": pin.lat,
                    "lon": pin.lon,
                    "title": pin.title,
                    "desc": pin.description,
                    "zoomlevel": pin.zoom_level,
                }),
            );
        }
        Message::Line => {}
        Message::Contact(card) => {
            entry.insert("name".to_owned(), json!(card.name));
            entry.insert("surname".to_owned(), json!(card.surname));
            entry.insert("phonenumbers".to_owned(), json!(card.phone_numbers));
            let addresses = card
                .addresses
                .iter()
                .map(|it| {
                    json!({
                        "address": it.address,
                        "postalcode": it.postal_code,
                        "city": it.city,
                        "country": it.country,
                    })
                })
                .collect::<Vec<_>>();
            entry.insert("addresses".to_owned(), json!(addresses));
        }
        Message::Document(document) => {
            entry.insert(
                "document".to_owned(),
                json!({
                    "filename": document.filename,
                    "filepath": document.url.as_str(),
                }),
            );
        }
        Message::QuickReply {
            postback_id,
            buttons,
        } => {
            let button_list = buttons
                .iter()
                .map(|it| {
                    json!({
                        "type": it.kind.wire_value(),
                        "name": it.name,
                        "payload": it.payload,
                    })
                })
                .collect::<Vec<_>>();
            entry.insert(
                "tmmtype".to_owned(),
                json!(MediaKind::QuickReply.wire_value()),
            );
            entry.insert(
                "quickreplytmm".to_owned(),
                json!({
                    "buttonlist": button_list,
                    "postbackid": postback_id,
                }),
            );
        }
        Message::Poll(poll) => {
            let option_list = poll
                .options
                .iter()
                .map(|it| {
                    json!({
                        "optionid": it.id,
                        "name": it.name,
                    })
                })
                .collect::<Vec<_>>();
            entry.insert("tmmtype".to_owned(), json!(MediaKind::Poll.wire_value()));
            entry.insert(
                "polltmm".to_owned(),
                json!({
                    "title": poll.title,
                    "description": poll.description,
                    "polltype": poll.kind.wire_value(),
                    "image": {
                        "url": poll.image.url.as_str(),
                        "ratio": poll.image.ratio,
                    },
                    "optionlist": option_list,
                    "pollid": poll.id,
                    "buttonname": poll.button_name,
                }),
            );
        }
        Message::Custom { fields, .. } => {
            // Caller fields win on key collision, including "type".
            for (key, value) in fields {
                entry.insert(key.clone(), value.clone());
            }
        }
    }

    Value::Object(entry)
}
