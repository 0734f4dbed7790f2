//! Client layer: endpoint configuration, authentication, and the send path.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use serde_json::{Map, Value};

use crate::domain::{
    ContactCard, DocumentRef, LocationPin, MediaUrl, Message, Msisdn, Password, Poll,
    QuickReplyButton, Receiver, TransactionId, Username, ValidationError,
};
use crate::transport::encode_send_payload;

const PRODUCTION_SINGLE_ENDPOINT: &str = "https://ws.bip.com/cmserver/sendmsg";
const PRODUCTION_MULTI_ENDPOINT: &str = "https://ws.bip.com/cmserver/sendmultimsg";
const SANDBOX_SINGLE_ENDPOINT: &str = "https://sandbox-ws.bip.com/cmserver/sendmsg";
const SANDBOX_MULTI_ENDPOINT: &str = "https://sandbox-ws.bip.com/cmserver/sendmultimsg";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        auth: &'a Auth,
        body: &'a Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        auth: &'a Auth,
        body: &'a Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .basic_auth(auth.username(), Some(auth.password()))
                .json(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// HTTP basic-auth credential pair for the BiP API.
pub struct Auth {
    username: Username,
    password: Password,
}

impl Auth {
    /// Create validated basic-auth credentials.
    pub fn basic(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    /// Borrow the validated username.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Named deployment, resolved to the endpoint pair at construction.
///
/// `single_url` serves one-recipient (and broadcast) sends, `multi_url`
/// serves the multi-recipient service. `Custom` covers self-hosted
/// gateways.
pub enum Environment {
    Production,
    Sandbox,
    Custom { single_url: String, multi_url: String },
}

impl Environment {
    /// Endpoint for single-recipient and broadcast sends.
    pub fn single_url(&self) -> &str {
        match self {
            Self::Production => PRODUCTION_SINGLE_ENDPOINT,
            Self::Sandbox => SANDBOX_SINGLE_ENDPOINT,
            Self::Custom { single_url, .. } => single_url,
        }
    }

    /// Endpoint for multi-recipient sends.
    pub fn multi_url(&self) -> &str {
        match self {
            Self::Production => PRODUCTION_MULTI_ENDPOINT,
            Self::Sandbox => SANDBOX_MULTI_ENDPOINT,
            Self::Custom { multi_url, .. } => multi_url,
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by the send operations.
pub enum BipError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of one accepted send.
///
/// The provider defines no response schema for this endpoint, so the raw
/// body is surfaced rather than parsed. `txnid` is the correlation token
/// that went out with the request.
pub struct SendReceipt {
    pub txnid: TransactionId,
    pub http_status: u16,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
/// Builder for [`BipClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct BipClientBuilder {
    auth: Auth,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl BipClientBuilder {
    /// Create a builder pointed at the production single-send endpoint.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            endpoint: PRODUCTION_SINGLE_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the send endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`BipClient`].
    pub fn build(self) -> Result<BipClient, BipError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| BipError::Transport(Box::new(err)))?;

        Ok(BipClient {
            auth: self.auth,
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Core send client: one endpoint, one credential pair.
///
/// Every send builds one JSON payload with a fresh transaction id and
/// issues exactly one POST. Addressing is explicit via [`Receiver`]; the
/// [`GroupClient`] and [`MemberClient`] presets fix it for you.
pub struct BipClient {
    auth: Auth,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for BipClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BipClient")
            .field("auth", &self.auth)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl BipClient {
    /// Create a client for the given endpoint.
    pub fn new(auth: Auth, endpoint: impl Into<String>) -> Self {
        Self {
            auth,
            endpoint: endpoint.into(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> BipClientBuilder {
        BipClientBuilder::new(auth)
    }

    /// Send one message to the given receiver.
    ///
    /// Errors:
    /// - [`BipError::Transport`] when the POST itself fails,
    /// - [`BipError::HttpStatus`] for non-2xx HTTP responses.
    pub async fn send(
        &self,
        receiver: &Receiver,
        message: &Message,
    ) -> Result<SendReceipt, BipError> {
        let txnid = TransactionId::random();
        let payload = encode_send_payload(txnid, receiver, message);

        debug!(
            "POST {} txnid={txnid} type={} receiver={}",
            self.endpoint,
            message.wire_type(),
            receiver.wire_type()
        );

        let response = self
            .http
            .post_json(&self.endpoint, &self.auth, &payload)
            .await
            .map_err(BipError::Transport)?;

        if !(200..=299).contains(&response.status) {
            return Err(BipError::HttpStatus {
                status: response.status,
                body: non_empty(response.body),
            });
        }

        Ok(SendReceipt {
            txnid,
            http_status: response.status,
            body: non_empty(response.body),
        })
    }
}

fn non_empty(body: String) -> Option<String> {
    if body.trim().is_empty() { None } else { Some(body) }
}

#[derive(Debug, Clone)]
/// Broadcast preset: every send goes to all members of the group, so no
/// method takes a receiver.
pub struct GroupClient {
    client: BipClient,
}

impl GroupClient {
    pub fn new(client: BipClient) -> Self {
        Self { client }
    }

    pub async fn send_text(&self, text: impl Into<String>) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::AllMembers, &Message::text(text)?)
            .await
    }

    pub async fn send_image(
        &self,
        image: MediaUrl,
        size: u64,
        ratio: impl Into<String>,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::AllMembers, &Message::image(image, size, ratio))
            .await
    }

    pub async fn send_audio(&self, audio: MediaUrl, size: u64) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::AllMembers, &Message::audio(audio, size))
            .await
    }

    pub async fn send_video(
        &self,
        video: MediaUrl,
        size: u64,
        ratio: impl Into<String>,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::AllMembers, &Message::video(video, size, ratio))
            .await
    }

    pub async fn send_sticker(
        &self,
        sticker: MediaUrl,
        item_id: u64,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::AllMembers, &Message::sticker(sticker, item_id))
            .await
    }

    pub async fn send_caps(
        &self,
        caps: MediaUrl,
        item_id: u64,
        size: u64,
        ratio: impl Into<String>,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(
                &Receiver::AllMembers,
                &Message::caps(caps, item_id, size, ratio),
            )
            .await
    }

    pub async fn send_location(&self, pin: LocationPin) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::AllMembers, &Message::location(pin))
            .await
    }

    pub async fn send_line(&self) -> Result<SendReceipt, BipError> {
        self.client.send(&Receiver::AllMembers, &Message::line()).await
    }

    pub async fn send_contact(&self, card: ContactCard) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::AllMembers, &Message::contact(card)?)
            .await
    }

    pub async fn send_document(&self, document: DocumentRef) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::AllMembers, &Message::document(document)?)
            .await
    }

    pub async fn send_quick_reply(
        &self,
        postback_id: impl Into<String>,
        buttons: Vec<QuickReplyButton>,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(
                &Receiver::AllMembers,
                &Message::quick_reply(postback_id, buttons)?,
            )
            .await
    }

    pub async fn send_poll(&self, poll: Poll) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::AllMembers, &Message::poll(poll)?)
            .await
    }

    pub async fn send_custom(
        &self,
        tag: impl Into<String>,
        fields: Map<String, Value>,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::AllMembers, &Message::custom(tag, fields)?)
            .await
    }
}

#[derive(Debug, Clone)]
/// Addressed preset: every send takes the recipient's phone number.
///
/// For HASH-addressed recipients use [`MemberClient::send_to`] with an
/// explicit [`Receiver`].
pub struct MemberClient {
    client: BipClient,
}

impl MemberClient {
    pub fn new(client: BipClient) -> Self {
        Self { client }
    }

    /// Send with an explicit receiver, for addressing modes the per-kind
    /// methods do not cover.
    pub async fn send_to(
        &self,
        receiver: &Receiver,
        message: &Message,
    ) -> Result<SendReceipt, BipError> {
        self.client.send(receiver, message).await
    }

    pub async fn send_text(
        &self,
        to: Msisdn,
        text: impl Into<String>,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::Msisdn(to), &Message::text(text)?)
            .await
    }

    pub async fn send_image(
        &self,
        to: Msisdn,
        image: MediaUrl,
        size: u64,
        ratio: impl Into<String>,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::Msisdn(to), &Message::image(image, size, ratio))
            .await
    }

    pub async fn send_audio(
        &self,
        to: Msisdn,
        audio: MediaUrl,
        size: u64,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::Msisdn(to), &Message::audio(audio, size))
            .await
    }

    pub async fn send_video(
        &self,
        to: Msisdn,
        video: MediaUrl,
        size: u64,
        ratio: impl Into<String>,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::Msisdn(to), &Message::video(video, size, ratio))
            .await
    }

    pub async fn send_sticker(
        &self,
        to: Msisdn,
        sticker: MediaUrl,
        item_id: u64,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::Msisdn(to), &Message::sticker(sticker, item_id))
            .await
    }

    pub async fn send_caps(
        &self,
        to: Msisdn,
        caps: MediaUrl,
        item_id: u64,
        size: u64,
        ratio: impl Into<String>,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(
                &Receiver::Msisdn(to),
                &Message::caps(caps, item_id, size, ratio),
            )
            .await
    }

    pub async fn send_location(
        &self,
        to: Msisdn,
        pin: LocationPin,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::Msisdn(to), &Message::location(pin))
            .await
    }

    pub async fn send_line(&self, to: Msisdn) -> Result<SendReceipt, BipError> {
        self.client.send(&Receiver::Msisdn(to), &Message::line()).await
    }

    pub async fn send_contact(
        &self,
        to: Msisdn,
        card: ContactCard,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::Msisdn(to), &Message::contact(card)?)
            .await
    }

    pub async fn send_document(
        &self,
        to: Msisdn,
        document: DocumentRef,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::Msisdn(to), &Message::document(document)?)
            .await
    }

    pub async fn send_quick_reply(
        &self,
        to: Msisdn,
        postback_id: impl Into<String>,
        buttons: Vec<QuickReplyButton>,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(
                &Receiver::Msisdn(to),
                &Message::quick_reply(postback_id, buttons)?,
            )
            .await
    }

    pub async fn send_poll(&self, to: Msisdn, poll: Poll) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::Msisdn(to), &Message::poll(poll)?)
            .await
    }

    pub async fn send_custom(
        &self,
        to: Msisdn,
        tag: impl Into<String>,
        fields: Map<String, Value>,
    ) -> Result<SendReceipt, BipError> {
        self.client
            .send(&Receiver::Msisdn(to), &Message::custom(tag, fields)?)
            .await
    }
}

#[derive(Debug, Clone)]
/// Top-level handle wiring one credential pair to the environment's
/// endpoint pair.
///
/// `all` broadcasts to the group, `single` addresses one member, `multi`
/// addresses members through the multi-recipient service.
pub struct Bip {
    pub all: GroupClient,
    pub single: MemberClient,
    pub multi: MemberClient,
}

impl Bip {
    /// Create a handle for the given environment and credentials.
    pub fn new(
        environment: Environment,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, BipError> {
        Self::with_auth(environment, Auth::basic(username, password)?)
    }

    /// Create a handle from already-validated credentials.
    pub fn with_auth(environment: Environment, auth: Auth) -> Result<Self, BipError> {
        debug!(
            "bip client initialized for {} (single: {}, multi: {})",
            auth.username(),
            environment.single_url(),
            environment.multi_url()
        );

        let single = BipClient::builder(auth.clone())
            .endpoint(environment.single_url())
            .build()?;
        let multi = BipClient::builder(auth)
            .endpoint(environment.multi_url())
            .build()?;

        Ok(Self {
            all: GroupClient::new(single.clone()),
            single: MemberClient::new(single),
            multi: MemberClient::new(multi),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use crate::domain::{ButtonKind, RecipientHash};

    use super::*;

    #[derive(Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    struct FakeTransportState {
        last_url: Option<String>,
        last_username: Option<String>,
        last_body: Option<Value>,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_url: None,
                    last_username: None,
                    last_body: None,
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn last_request(&self) -> (Option<String>, Option<String>, Option<Value>) {
            let state = self.state.lock().unwrap();
            (
                state.last_url.clone(),
                state.last_username.clone(),
                state.last_body.clone(),
            )
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_json<'a>(
            &'a self,
            url: &'a str,
            auth: &'a Auth,
            body: &'a Value,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, response_body) = {
                    let mut state = self.state.lock().unwrap();
                    state.last_url = Some(url.to_owned());
                    state.last_username = Some(auth.username().to_owned());
                    state.last_body = Some(body.clone());
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse {
                    status,
                    body: response_body,
                })
            })
        }
    }

    fn make_client(transport: FakeTransport) -> BipClient {
        BipClient {
            auth: Auth::basic("bot", "secret").unwrap(),
            endpoint: "https://example.invalid/cmserver/sendmsg".to_owned(),
            http: Arc::new(transport),
        }
    }

    #[tokio::test]
    async fn send_posts_payload_and_returns_receipt() {
        let transport = FakeTransport::new(200, r#"{"result":"ok"}"#);
        let client = make_client(transport.clone());

        let receiver = Receiver::Msisdn(Msisdn::new("905551234567").unwrap());
        let message = Message::text("hello").unwrap();
        let receipt = client.send(&receiver, &message).await.unwrap();

        assert_eq!(receipt.http_status, 200);
        assert_eq!(receipt.body.as_deref(), Some(r#"{"result":"ok"}"#));

        let (url, username, body) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/cmserver/sendmsg")
        );
        assert_eq!(username.as_deref(), Some("bot"));

        let body = body.unwrap();
        assert_eq!(body["receiver"], json!({"type": "MSISDN", "address": "905551234567"}));
        assert_eq!(
            body["composition"]["list"],
            json!([{"type": "TEXT", "message": "hello"}])
        );
        assert_eq!(body["txnid"], json!(receipt.txnid.to_string()));
    }

    #[tokio::test]
    async fn send_maps_non_success_http_status() {
        let transport = FakeTransport::new(401, "unauthorized");
        let client = make_client(transport);

        let err = client
            .send(&Receiver::AllMembers, &Message::line())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BipError::HttpStatus {
                status: 401,
                body: Some(_)
            }
        ));
    }

    #[tokio::test]
    async fn send_maps_empty_error_body_to_none() {
        let transport = FakeTransport::new(503, "   ");
        let client = make_client(transport);

        let err = client
            .send(&Receiver::AllMembers, &Message::line())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BipError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn empty_success_body_becomes_none() {
        let transport = FakeTransport::new(202, "");
        let client = make_client(transport);

        let receipt = client
            .send(&Receiver::AllMembers, &Message::line())
            .await
            .unwrap();
        assert_eq!(receipt.http_status, 202);
        assert_eq!(receipt.body, None);
    }

    #[tokio::test]
    async fn each_send_draws_a_fresh_four_digit_txnid() {
        let transport = FakeTransport::new(200, "");
        let client = make_client(transport.clone());

        for _ in 0..5 {
            let receipt = client
                .send(&Receiver::AllMembers, &Message::line())
                .await
                .unwrap();
            let value = receipt.txnid.value();
            assert!((TransactionId::MIN..=TransactionId::MAX).contains(&value));

            let (_, _, body) = transport.last_request();
            assert_eq!(body.unwrap()["txnid"], json!(value.to_string()));
        }
    }

    #[tokio::test]
    async fn group_client_broadcasts_without_an_address() {
        let transport = FakeTransport::new(200, "");
        let group = GroupClient::new(make_client(transport.clone()));

        group.send_text("hi").await.unwrap();
        let (_, _, body) = transport.last_request();
        let body = body.unwrap();
        assert_eq!(body["receiver"], json!({"type": "ALL_MEMBERS"}));
        assert!(body["receiver"].get("address").is_none());

        group.send_line().await.unwrap();
        let (_, _, body) = transport.last_request();
        assert_eq!(
            body.unwrap()["composition"]["list"],
            json!([{"type": "LINE"}])
        );
    }

    #[tokio::test]
    async fn group_client_sends_quick_replies_as_media() {
        let transport = FakeTransport::new(200, "");
        let group = GroupClient::new(make_client(transport.clone()));

        let buttons = vec![QuickReplyButton {
            payload: "yes".to_owned(),
            name: "Yes".to_owned(),
            kind: ButtonKind::Postback,
        }];
        group.send_quick_reply("pb-1", buttons).await.unwrap();

        let (_, _, body) = transport.last_request();
        let entry = &body.unwrap()["composition"]["list"][0];
        assert_eq!(entry["type"], json!("MEDIA"));
        assert_eq!(entry["tmmtype"], json!("QUICK_REPLY"));
        assert_eq!(
            entry["quickreplytmm"]["buttonlist"],
            json!([{"type": "POSTBACK", "name": "Yes", "payload": "yes"}])
        );
    }

    #[tokio::test]
    async fn member_client_normalizes_the_recipient() {
        let transport = FakeTransport::new(200, "");
        let member = MemberClient::new(make_client(transport.clone()));

        let to = Msisdn::new("+905551234567").unwrap();
        member.send_text(to, "hello").await.unwrap();

        let (_, _, body) = transport.last_request();
        assert_eq!(
            body.unwrap()["receiver"],
            json!({"type": "MSISDN", "address": "905551234567"})
        );
    }

    #[tokio::test]
    async fn member_client_reaches_hash_recipients_via_send_to() {
        let transport = FakeTransport::new(200, "");
        let member = MemberClient::new(make_client(transport.clone()));

        let receiver = Receiver::Hash(RecipientHash::new("a1b2c3d4").unwrap());
        member
            .send_to(&receiver, &Message::text("hi").unwrap())
            .await
            .unwrap();

        let (_, _, body) = transport.last_request();
        assert_eq!(
            body.unwrap()["receiver"],
            json!({"type": "HASH", "address": "a1b2c3d4"})
        );
    }

    #[tokio::test]
    async fn member_client_send_custom_passes_fields_through() {
        let transport = FakeTransport::new(200, "");
        let member = MemberClient::new(make_client(transport.clone()));

        let mut fields = Map::new();
        fields.insert("message".to_owned(), json!("https://cdn.example.com/x.gif"));
        let to = Msisdn::new("905551234567").unwrap();
        member.send_custom(to, "GIF", fields).await.unwrap();

        let (_, _, body) = transport.last_request();
        assert_eq!(
            body.unwrap()["composition"]["list"][0],
            json!({"type": "GIF", "message": "https://cdn.example.com/x.gif"})
        );
    }

    #[test]
    fn auth_constructors_validate_inputs() {
        assert!(Auth::basic("  ", "secret").is_err());
        assert!(Auth::basic("bot", "").is_err());
        assert!(Auth::basic("bot", "secret").is_ok());
    }

    #[test]
    fn environments_resolve_to_endpoint_pairs() {
        assert_eq!(
            Environment::Production.single_url(),
            "https://ws.bip.com/cmserver/sendmsg"
        );
        assert_eq!(
            Environment::Production.multi_url(),
            "https://ws.bip.com/cmserver/sendmultimsg"
        );
        assert_eq!(
            Environment::Sandbox.single_url(),
            "https://sandbox-ws.bip.com/cmserver/sendmsg"
        );

        let custom = Environment::Custom {
            single_url: "https://gw.example.com/send".to_owned(),
            multi_url: "https://gw.example.com/sendmulti".to_owned(),
        };
        assert_eq!(custom.single_url(), "https://gw.example.com/send");
        assert_eq!(custom.multi_url(), "https://gw.example.com/sendmulti");
    }

    #[test]
    fn builder_endpoint_override_is_applied() {
        let client = BipClient::builder(Auth::basic("bot", "secret").unwrap())
            .endpoint("https://example.invalid/send")
            .build()
            .unwrap();
        assert_eq!(client.endpoint, "https://example.invalid/send");
    }

    #[test]
    fn facade_wires_the_endpoint_pair() {
        let bip = Bip::new(
            Environment::Custom {
                single_url: "https://gw.example.com/send".to_owned(),
                multi_url: "https://gw.example.com/sendmulti".to_owned(),
            },
            "bot",
            "secret",
        )
        .unwrap();

        assert_eq!(bip.all.client.endpoint, "https://gw.example.com/send");
        assert_eq!(bip.single.client.endpoint, "https://gw.example.com/send");
        assert_eq!(bip.multi.client.endpoint, "https://gw.example.com/sendmulti");
    }

    #[test]
    fn facade_rejects_blank_credentials() {
        let err = Bip::new(Environment::Production, "", "secret").unwrap_err();
        assert!(matches!(err, BipError::Validation(_)));
    }
}
