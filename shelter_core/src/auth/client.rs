use super::error::{self, Error};
use super::login;
use url::Url;

/// The server we talk to if nobody says otherwise.
pub const DEFAULT_SERVER: &str = "http://api.localhost";

/// Client for the auth API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    /// The server to connect to. Should only be the protocol and domain, e.g.
    /// `http://api.localhost`.
    pub server: String,
}

impl Client {
    /// Construct a new client
    pub fn new(server: String) -> Self {
        Self { server }
    }

    /// Log into the server. Sends exactly one request; nothing is retried.
    ///
    /// ## Errors
    ///
    /// - `Error::UrlParse` if `server` is not a valid base URL
    /// - `Error::Http` if the request could not be completed
    /// - `Error::LoginFailed` if the server answered with anything but a 2xx
    pub async fn login(&self, client: &reqwest::Client, req: &login::Req) -> error::Result<()> {
        let url = Url::parse(&self.server)?.join(login::PATH)?;

        // `json` sets `Content-Type: application/json` for us.
        Self::handle_response(client.post(url).json(req)).await
    }

    /// Send a request and look only at the status category. The body is
    /// never read.
    async fn handle_response(req: reqwest::RequestBuilder) -> error::Result<()> {
        let resp = req.send().await?;

        let status = resp.status();

        if status.is_success() {
            Ok(())
        } else {
            tracing::debug!(%status, "login rejected");
            Err(Error::LoginFailed)
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER.to_string())
    }
}
