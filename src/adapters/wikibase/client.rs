//! Authenticated HTTP client for the MediaWiki Action API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::adapters::wikibase::models::{
    extract_entity_id, ClaimSet, ClaimsResponse, CreateClaimResponse, CreateOutcome,
    EditEntityResponse, EntityPayload, ItemValue, LoginOutcome, LoginResponse, SearchResponse,
    StructuredValue, TokenResponse, TokenSet, DEFAULT_LANGUAGE,
};
use crate::adapters::wikibase::store::EntityStore;
use crate::config::WikibaseConfig;
use crate::domain::{EntityId, PropertyId, Result, WikibaseError};

/// Client for a single authenticated Wikibase session.
///
/// Connecting performs the full login handshake; the resulting client
/// carries the session cookies in its HTTP client and the CSRF edit
/// token negotiated for this session. All write actions are authorized
/// with that token.
///
/// # Examples
///
/// ```no_run
/// use colophon::adapters::wikibase::WikibaseClient;
/// use colophon::config::load_config;
///
/// # async fn run() -> colophon::domain::Result<()> {
/// let config = load_config("colophon.toml")?;
/// let store = WikibaseClient::connect(&config.wikibase).await?;
/// # Ok(())
/// # }
/// ```
pub struct WikibaseClient {
    api_url: String,
    client: Client,
    edit_token: String,
}

impl WikibaseClient {
    /// Connects to the configured Wikibase instance and authenticates.
    ///
    /// The handshake is three requests: fetch a login token, log in with
    /// the configured bot credentials, then fetch the CSRF edit token
    /// that authorizes writes. The session cookies issued during login
    /// bind the edit token to this client.
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoint and credentials for the target instance
    ///
    /// # Errors
    ///
    /// Returns [`WikibaseError::AuthenticationFailed`] when the instance
    /// rejects the credentials, and a connection or response error when
    /// the handshake cannot be completed.
    pub async fn connect(config: &WikibaseConfig) -> Result<Self> {
        let api_url = config.api_url();
        info!(api_url = %api_url, "connecting to Wikibase");

        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| WikibaseError::ConnectionFailed(e.to_string()))?;

        let login_token = Self::fetch_login_token(&client, &api_url).await?;
        Self::login(&client, &api_url, config, &login_token).await?;
        let edit_token = Self::fetch_edit_token(&client, &api_url).await?;

        info!(username = %config.username, "authenticated with Wikibase");

        Ok(Self {
            api_url,
            client,
            edit_token,
        })
    }

    async fn fetch_login_token(client: &Client, api_url: &str) -> Result<String> {
        let tokens = Self::fetch_tokens(client, api_url, Some("login")).await?;
        match tokens.logintoken {
            Some(token) => {
                debug!("login token obtained");
                Ok(token)
            }
            None => Err(WikibaseError::InvalidResponse(
                "token query returned no login token".to_string(),
            )
            .into()),
        }
    }

    async fn fetch_edit_token(client: &Client, api_url: &str) -> Result<String> {
        let tokens = Self::fetch_tokens(client, api_url, None).await?;
        match tokens.csrftoken {
            Some(token) => {
                debug!("edit token obtained");
                Ok(token)
            }
            None => Err(WikibaseError::InvalidResponse(
                "token query returned no edit token".to_string(),
            )
            .into()),
        }
    }

    async fn fetch_tokens(
        client: &Client,
        api_url: &str,
        token_type: Option<&str>,
    ) -> Result<TokenSet> {
        let mut query = vec![("action", "query"), ("meta", "tokens"), ("format", "json")];
        if let Some(token_type) = token_type {
            query.push(("type", token_type));
        }

        let response = client
            .get(api_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| WikibaseError::ConnectionFailed(e.to_string()))?;

        let parsed = Self::parse_json::<TokenResponse>(response).await?;
        Ok(parsed.query.tokens)
    }

    async fn login(
        client: &Client,
        api_url: &str,
        config: &WikibaseConfig,
        login_token: &str,
    ) -> Result<()> {
        let form = [
            ("action", "login"),
            ("format", "json"),
            ("lgname", config.username.as_str()),
            ("lgpassword", config.password.expose_secret().as_ref()),
            ("lgtoken", login_token),
        ];

        let response = client
            .post(api_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| WikibaseError::ConnectionFailed(e.to_string()))?;

        let parsed = Self::parse_json::<LoginResponse>(response).await?;
        let LoginOutcome { result, reason } = parsed.login;
        if result != "Success" {
            return Err(WikibaseError::AuthenticationFailed(reason.unwrap_or(result)).into());
        }

        debug!("session login succeeded");
        Ok(())
    }

    /// Posts a `wbcreateclaim` form with the given serialized value.
    async fn create_claim(
        &self,
        subject: &EntityId,
        property: &PropertyId,
        value: &str,
    ) -> Result<()> {
        let form = [
            ("action", "wbcreateclaim"),
            ("format", "json"),
            ("entity", subject.as_str()),
            ("snaktype", "value"),
            ("bot", "1"),
            ("token", self.edit_token.as_str()),
            ("property", property.as_str()),
            ("value", value),
        ];

        let response = self
            .client
            .post(&self.api_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| WikibaseError::ConnectionFailed(e.to_string()))?;

        let parsed = Self::parse_json::<CreateClaimResponse>(response).await?;
        if let Some(error) = parsed.error {
            return Err(WikibaseError::EditRejected {
                code: error.code,
                info: error.info,
            }
            .into());
        }
        if parsed.success.is_none() {
            return Err(WikibaseError::InvalidResponse(
                "claim response carried neither success nor an error".to_string(),
            )
            .into());
        }

        debug!(subject = %subject, property = %property, "claim written");
        Ok(())
    }

    async fn parse_json<T>(response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WikibaseError::InvalidResponse(format!(
                "request failed with status {}: {}",
                status, body
            ))
            .into());
        }

        response.json::<T>().await.map_err(|e| {
            WikibaseError::InvalidResponse(format!("failed to parse response body: {}", e)).into()
        })
    }
}

#[async_trait]
impl EntityStore for WikibaseClient {
    async fn create_entity(&self, payload: &EntityPayload) -> Result<CreateOutcome> {
        let data = serde_json::to_string(payload)?;
        let form = [
            ("action", "wbeditentity"),
            ("format", "json"),
            ("new", "item"),
            ("token", self.edit_token.as_str()),
            ("data", data.as_str()),
        ];

        let response = self
            .client
            .post(&self.api_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| WikibaseError::ConnectionFailed(e.to_string()))?;

        let parsed = Self::parse_json::<EditEntityResponse>(response).await?;
        if let Some(error) = parsed.error {
            // A duplicate label/description rejection names the clashing
            // item; converge on it instead of failing the run.
            if let Some(existing) = extract_entity_id(&error.info) {
                info!(entity_id = %existing, code = %error.code, "item already exists, reusing");
                return Ok(CreateOutcome::Existing(existing));
            }
            return Err(WikibaseError::EditRejected {
                code: error.code,
                info: error.info,
            }
            .into());
        }

        match parsed.entity {
            Some(entity) => {
                info!(entity_id = %entity.id, label = ?payload.label(), "item created");
                Ok(CreateOutcome::Created(entity.id))
            }
            None => Err(WikibaseError::InvalidResponse(
                "edit response carried neither an entity nor an error".to_string(),
            )
            .into()),
        }
    }

    async fn read_claims(&self, entity: &EntityId) -> Result<ClaimSet> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "wbgetclaims"),
                ("format", "json"),
                ("entity", entity.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WikibaseError::ConnectionFailed(e.to_string()))?;

        let parsed = Self::parse_json::<ClaimsResponse>(response).await?;
        let claims = parsed.into_claim_set();
        debug!(entity_id = %entity, properties = claims.len(), "claims read");
        Ok(claims)
    }

    async fn search_entity(&self, query: &str) -> Result<Option<EntityId>> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "wbsearchentities"),
                ("format", "json"),
                ("search", query),
                ("language", DEFAULT_LANGUAGE),
                ("type", "item"),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(|e| WikibaseError::ConnectionFailed(e.to_string()))?;

        let parsed = Self::parse_json::<SearchResponse>(response).await?;
        Ok(parsed.search.into_iter().next().map(|hit| hit.id))
    }

    async fn write_statement_item(
        &self,
        subject: &EntityId,
        property: &PropertyId,
        target: &EntityId,
    ) -> Result<()> {
        let value = serde_json::to_string(&ItemValue::new(target))?;
        self.create_claim(subject, property, &value).await
    }

    async fn write_statement_string(
        &self,
        subject: &EntityId,
        property: &PropertyId,
        value: &str,
    ) -> Result<()> {
        // JSON-encode so quoting and escaping are handled for us.
        let value = serde_json::to_string(value)?;
        self.create_claim(subject, property, &value).await
    }

    async fn write_statement_structured(
        &self,
        subject: &EntityId,
        property: &PropertyId,
        value: &StructuredValue,
    ) -> Result<()> {
        let value = serde_json::to_string(value)?;
        self.create_claim(subject, property, &value).await
    }
}
