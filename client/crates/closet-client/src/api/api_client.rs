use crate::api::models::{
    CsrfTokenResponse, LoginResponse, PasswordResetResponse, SignupRequest, SignupResponse,
    TokenResponse,
};
use crate::api::{error_body, paths};
use crate::navigation::OtpPurpose;
use crate::{ClientError, ClientResult};

use std::time::Duration;

use closet_config::ApiConfig;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the ClosetAI REST API
///
/// Knows how to address the backend and interpret its responses. Session
/// policy (credential checks, CSRF, expiry) lives in `RequestHelper`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    auth_scheme: String,
    csrf_header: String,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client from the `[api]` config section.
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_scheme: config.auth_scheme.clone(),
            csrf_header: config.csrf_header.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn csrf_header(&self) -> &str {
        &self.csrf_header
    }

    /// Resolve a server-relative path (e.g. an uploaded picture) to a full URL.
    pub fn absolute_url(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            path_or_url.to_string()
        } else if path_or_url.starts_with('/') {
            format!("{}{}", self.base_url, path_or_url)
        } else {
            format!("{}/{}", self.base_url, path_or_url)
        }
    }

    /// Where the browser goes for Google sign-in.
    pub fn google_login_url(&self) -> String {
        self.absolute_url(paths::GOOGLE_LOGIN)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        self.client.request(method, &url)
    }

    pub(crate) fn authorize(&self, req: RequestBuilder, credential: &str) -> RequestBuilder {
        req.header(
            reqwest::header::AUTHORIZATION,
            format!("{} {}", self.auth_scheme, credential),
        )
    }

    /// Execute request and decode the body.
    ///
    /// Non-2xx responses become `ClientError::Api`, carrying the server's
    /// message when the body is JSON and has one. An empty success body
    /// decodes as JSON `null`.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("json"));
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = if is_json {
                error_body::extract_error_message(&body)
            } else {
                None
            };
            debug!("Request failed with status {status}");
            return Err(ClientError::api(status.as_u16(), message));
        }

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(Value::Null)?);
        }

        Ok(serde_json::from_slice(&body)?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::POST, path).json(body);
        self.execute(req).await
    }

    // =========================================================================
    // Authentication (no session required)
    // =========================================================================

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        self.post_json(paths::LOGIN, &LoginRequest { email, password })
            .await
    }

    pub async fn signup(&self, request: &SignupRequest) -> ClientResult<SignupResponse> {
        self.post_json(paths::SIGNUP, request).await
    }

    pub async fn verify_otp(
        &self,
        user_id: &str,
        code: &str,
        purpose: OtpPurpose,
    ) -> ClientResult<TokenResponse> {
        #[derive(Serialize)]
        struct VerifyOtpRequest<'a> {
            user_id: &'a str,
            code: &'a str,
            purpose: OtpPurpose,
        }

        self.post_json(
            paths::VERIFY_OTP,
            &VerifyOtpRequest {
                user_id,
                code,
                purpose,
            },
        )
        .await
    }

    pub async fn request_password_reset(&self, email: &str) -> ClientResult<PasswordResetResponse> {
        #[derive(Serialize)]
        struct PasswordResetRequest<'a> {
            email: &'a str,
        }

        self.post_json(paths::PASSWORD_RESET, &PasswordResetRequest { email })
            .await
    }

    pub async fn confirm_password_reset(
        &self,
        user_id: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> ClientResult<TokenResponse> {
        #[derive(Serialize)]
        struct PasswordResetConfirmRequest<'a> {
            user_id: &'a str,
            new_password: &'a str,
            confirm_password: &'a str,
        }

        self.post_json(
            paths::PASSWORD_RESET_CONFIRM,
            &PasswordResetConfirmRequest {
                user_id,
                new_password,
                confirm_password,
            },
        )
        .await
    }

    /// Fetch an anti-forgery token for the given credential.
    pub async fn fetch_csrf_token(&self, credential: &str) -> ClientResult<String> {
        let req = self.authorize(self.request(Method::GET, paths::CSRF_TOKEN), credential);
        let response: CsrfTokenResponse = self.execute(req).await?;
        Ok(response.csrf_token)
    }
}
