//! Typed access to the RHN XML-RPC API
//!
//! [`ChannelApi`] is the seam between the reporter and the network: the
//! production [`RpcClient`] speaks XML-RPC over blocking HTTPS, tests
//! substitute a fake. Three remote methods are exposed, matching the RHN
//! Classic API: `auth.login`, `channel.listSoftwareChannels` and
//! `channel.software.getDetails`.

use std::time::Duration;

use url::Url;

use crate::channel::{ChannelDetails, ChannelSummary};
use crate::error::{Result, RhnError};
use crate::xmlrpc::{parse_response, MethodCall, Value};

/// Default API hostname.
pub const DEFAULT_SERVER: &str = "rhn.redhat.com";

/// Path of the XML-RPC endpoint on the server.
pub const RPC_PATH: &str = "/rpc/api/";

const HTTP_TIMEOUT_SECS: u64 = 60;

/// Opaque session credential returned by `auth.login`, passed back on every
/// subsequent call.
#[derive(Debug, Clone)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The three remote operations the reporter needs.
pub trait ChannelApi {
    /// Open a session with the given credentials.
    fn authenticate(&self, username: &str, password: &str) -> Result<SessionToken>;

    /// Fetch the full list of software channels visible to the session.
    fn list_channels(&self, session: &SessionToken) -> Result<Vec<ChannelSummary>>;

    /// Fetch the detail record for one channel.
    fn channel_details(&self, session: &SessionToken, label: &str) -> Result<ChannelDetails>;
}

/// Blocking XML-RPC client for one RHN server.
#[derive(Debug)]
pub struct RpcClient {
    endpoint: Url,
    http: reqwest::blocking::Client,
}

impl RpcClient {
    /// Build a client for `https://<server>/rpc/api/`.
    pub fn connect(server: &str) -> Result<Self> {
        let endpoint = Url::parse(&format!("https://{server}{RPC_PATH}"))?;
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self { endpoint, http })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST one method call and decode the response document.
    fn call(&self, call: &MethodCall) -> Result<Value> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header("Content-Type", "text/xml")
            .body(call.to_xml())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(RhnError::HttpStatus { status });
        }

        let body = response.text()?;
        parse_response(&body)
    }
}

impl ChannelApi for RpcClient {
    fn authenticate(&self, username: &str, password: &str) -> Result<SessionToken> {
        let call = MethodCall::new("auth.login").arg(username).arg(password);
        let value = self.call(&call)?;
        let token = value.as_str().ok_or_else(|| RhnError::MalformedResponse {
            message: "auth.login did not return a session token".to_string(),
        })?;
        Ok(SessionToken::new(token))
    }

    fn list_channels(&self, session: &SessionToken) -> Result<Vec<ChannelSummary>> {
        let call = MethodCall::new("channel.listSoftwareChannels").arg(session.as_str());
        let value = self.call(&call)?;
        let records = value.as_array().ok_or_else(|| RhnError::MalformedResponse {
            message: "channel list is not an array".to_string(),
        })?;
        records.iter().map(ChannelSummary::from_value).collect()
    }

    fn channel_details(&self, session: &SessionToken, label: &str) -> Result<ChannelDetails> {
        let call = MethodCall::new("channel.software.getDetails")
            .arg(session.as_str())
            .arg(label);
        ChannelDetails::from_value(&self.call(&call)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_from_server_name() {
        let client = RpcClient::connect("satellite.example.com").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://satellite.example.com/rpc/api/"
        );
    }

    #[test]
    fn default_server_endpoint() {
        let client = RpcClient::connect(DEFAULT_SERVER).unwrap();
        assert_eq!(client.endpoint().as_str(), "https://rhn.redhat.com/rpc/api/");
    }

    #[test]
    fn rejects_unparseable_server_name() {
        assert!(matches!(
            RpcClient::connect("bad host"),
            Err(RhnError::InvalidServer(_))
        ));
    }
}
