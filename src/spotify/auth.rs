use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header};

use crate::{
    error::{Res, VibeError},
    types::Token,
};

/// Exchanges a client id and secret for an application access token.
///
/// Implements the OAuth 2.0 client credentials grant: the credentials travel
/// as an HTTP Basic `Authorization` header and the form body carries
/// `grant_type=client_credentials`. The returned token only grants access to
/// public catalog data, which is all vibebox reads.
///
/// # Arguments
///
/// * `http` - Client used for the request
/// * `token_url` - Token endpoint, normally `https://accounts.spotify.com/api/token`
/// * `client_id` - Application client id
/// * `client_secret` - Application client secret
///
/// # Returns
///
/// - `Ok(Token)` - Token with a non-empty `access_token`
/// - `Err(VibeError::Auth)` - Network failure, non-2xx status, or a body
///   without an access token
///
/// # Example
///
/// ```
/// let token = request_token(&Client::new(), DEFAULT_TOKEN_URL, "id", "secret").await?;
/// println!("Token valid for {} seconds", token.expires_in);
/// ```
pub async fn request_token(
    http: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Res<Token> {
    let response = http
        .post(token_url)
        .header(header::AUTHORIZATION, basic_auth_header(client_id, client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| VibeError::Auth(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(VibeError::Auth(format!(
            "token endpoint answered {}: {}",
            status, body
        )));
    }

    let token = response
        .json::<Token>()
        .await
        .map_err(|e| VibeError::Auth(format!("unexpected token response: {}", e)))?;

    if token.access_token.is_empty() {
        return Err(VibeError::Auth("token response has an empty access_token".into()));
    }

    tracing::debug!(expires_in = token.expires_in, "obtained access token");
    Ok(token)
}

/// `Basic base64(client_id:client_secret)`
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials.as_bytes()))
}
