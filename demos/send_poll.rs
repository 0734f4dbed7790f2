use std::io;

use bip::{Bip, Environment, MediaUrl, Poll, PollImage, PollKind, PollOption};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let username = std::env::var("BIP_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BIP_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("BIP_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BIP_PASSWORD environment variable is required",
        )
    })?;

    let bip = Bip::new(Environment::Sandbox, username, password)?;

    let poll = Poll {
        id: "lunch-1".to_owned(),
        title: "Lunch?".to_owned(),
        description: "Vote before noon".to_owned(),
        image: PollImage {
            url: MediaUrl::new("https://cdn.example.com/lunch.png")?,
            ratio: "1:1".to_owned(),
        },
        kind: PollKind::Single,
        options: vec![
            PollOption {
                id: 1,
                name: "Pizza".to_owned(),
            },
            PollOption {
                id: 2,
                name: "Kebap".to_owned(),
            },
        ],
        button_name: "Vote".to_owned(),
    };

    let receipt = bip.all.send_poll(poll).await?;
    println!(
        "txnid: {}, http status: {}",
        receipt.txnid, receipt.http_status
    );

    Ok(())
}
