use std::io;

use bip::{Bip, Environment, Msisdn};

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
    let phone_raw = std::env::var("BIP_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BIP_PHONE environment variable is required",
        )
    })?;
    let message =
        std::env::var("BIP_MESSAGE").unwrap_or_else(|_| "Hello from the bip demo.".to_owned());

    let bip = Bip::new(Environment::Sandbox, username, password)?;
    let to = Msisdn::new(phone_raw)?;

    let receipt = bip.single.send_text(to, message).await?;
    println!(
        "txnid: {}, http status: {}, body: {:?}",
        receipt.txnid, receipt.http_status, receipt.body
    );

    Ok(())
}
