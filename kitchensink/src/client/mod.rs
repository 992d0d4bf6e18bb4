use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use shared::config::Config;
use shared::{Error, Result};
use shared_http::api::{ErrorResponse, Member};
use tracing::{debug, info, warn};

use crate::timer;

/// REST client for the `members` resource.
///
/// Cheap to clone; clones share one connection pool and the same immutable
/// [`Config`].
#[derive(Clone, Debug)]
pub struct MemberClient {
    client: Client,
    config: Config,
}

impl MemberClient {
    pub fn new(config: Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl PartialEq for MemberClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl MemberClient {
    /// GET /members
    pub async fn list_members(&self) -> Result<Vec<Member>> {
        let url = self.url(&[])?;
        debug!("Fetching members from {}", url);
        let body = self
            .execute(self.client.get(url))
            .await
            .inspect_err(|e| warn!("Error fetching members: {}", e))?;
        decode(&body)
    }

    /// GET /members/{id}
    pub async fn get_member(&self, id: &str) -> Result<Member> {
        let url = self.url(&[id])?;
        debug!("Fetching member {} from {}", id, url);
        let body = self
            .execute(self.client.get(url))
            .await
            .inspect_err(|e| warn!("Error fetching member {}: {}", id, e))?;
        decode(&body)
    }

    /// GET /members/email/{email}
    pub async fn find_member_by_email(&self, email: &str) -> Result<Member> {
        let url = self.url(&["email", email])?;
        debug!("Looking up member by email at {}", url);
        let body = self
            .execute(self.client.get(url))
            .await
            .inspect_err(|e| warn!("Error looking up member {}: {}", email, e))?;
        decode(&body)
    }

    /// POST /members. Any id on `member` is left out of the body.
    pub async fn create_member(&self, member: &Member) -> Result<Member> {
        let url = self.url(&[])?;
        debug!("Creating member with email: {}", member.email);
        let body = self
            .execute(self.client.post(url).json(&member.without_id()))
            .await
            .inspect_err(|e| warn!("Error creating member: {}", e))?;
        let created: Member = decode(&body)?;
        info!("Member created with id: {}", created.id().unwrap_or("<none>"));
        Ok(created)
    }

    /// PUT /members/{id} with the full representation.
    pub async fn update_member(&self, id: &str, member: &Member) -> Result<Member> {
        let url = self.url(&[id])?;
        debug!("Updating member {}", id);
        let body = self
            .execute(self.client.put(url).json(member))
            .await
            .inspect_err(|e| warn!("Error updating member {}: {}", id, e))?;
        let updated = decode(&body)?;
        info!("Member updated: {}", id);
        Ok(updated)
    }

    /// DELETE /members/{id}. The response body is ignored.
    pub async fn delete_member(&self, id: &str) -> Result<()> {
        let url = self.url(&[id])?;
        debug!("Deleting member {}", id);
        self.execute(self.client.delete(url))
            .await
            .inspect_err(|e| warn!("Error deleting member {}: {}", id, e))?;
        info!("Member deleted with id: {}", id);
        Ok(())
    }

    /// `{api_base_url}/members` followed by `segments`, each percent-encoded.
    /// Empty, `.` and `..` segments are rejected; they would address the
    /// collection instead of a member.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|s| matches!(**s, "" | "." | ".."))
        {
            return Err(Error::InvalidUrl(format!("invalid path segment: {bad:?}")));
        }
        let members_url = self.config.members_url();
        let mut url = Url::parse(&members_url)
            .map_err(|e| Error::InvalidUrl(format!("{members_url}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(members_url.clone()))?
            .extend(segments);
        Ok(url)
    }

    /// Sends the request and reads the body, bounded by the configured
    /// timeout. Non-2xx statuses become [`Error::Server`].
    async fn execute(&self, request: RequestBuilder) -> Result<String> {
        let limit = self.config.timeout;
        let exchange = async {
            let response = request.send().await.map_err(|e| transport_error(e, limit))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| transport_error(e, limit))?;

            if status.is_success() {
                Ok(body)
            } else {
                Err(Error::Server {
                    status: status.as_u16(),
                    message: ErrorResponse::from_body(&body).message,
                })
            }
        };

        timer::within(limit, exchange)
            .await
            .unwrap_or(Err(Error::Timeout(limit)))
    }
}

fn transport_error(err: reqwest::Error, limit: std::time::Duration) -> Error {
    if err.is_timeout() {
        Error::Timeout(limit)
    } else {
        Error::Transport(err.to_string())
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::Decode(e.to_string()))
}
