use crate::api::ApiClient;
use crate::navigation::{Navigator, Route};
use crate::request::{AccessKind, RequestBody};
use crate::session::SessionContext;
use crate::{ClientError, ClientResult};

use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::Method;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Uniform policy for every session-scoped call a screen makes.
///
/// - No stored credential: no request is sent, the user is sent to login.
/// - The credential goes in the Authorization header; writes also carry
///   the stored anti-forgery token when there is one.
/// - A 401 clears the session and sends the user to login.
/// - Nothing is retried.
#[derive(Clone)]
pub struct RequestHelper {
    api: ApiClient,
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
}

impl RequestHelper {
    pub fn new(api: ApiClient, session: SessionContext, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            api,
            session,
            navigator,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(Method::GET, path, RequestBody::Empty).await
    }

    pub async fn create<T: DeserializeOwned>(&self, path: &str, body: RequestBody) -> ClientResult<T> {
        self.send(Method::POST, path, body).await
    }

    pub async fn update<T: DeserializeOwned>(&self, path: &str, body: RequestBody) -> ClientResult<T> {
        self.send(Method::PATCH, path, body).await
    }

    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let _: serde_json::Value = self.send(Method::DELETE, path, RequestBody::Empty).await?;
        Ok(())
    }

    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> ClientResult<T> {
        let access = AccessKind::from(&method);

        let credential = match self.session.credential().await {
            Ok(Some(credential)) => credential,
            Ok(None) => return Err(self.require_login(access)),
            Err(e) => {
                warn!("Could not read stored credential: {e}");
                return Err(self.require_login(access));
            }
        };

        let mut req = self.api.request(method, path);
        req = self.api.authorize(req, &credential);

        if access.is_write() {
            match self.session.csrf_token().await {
                Ok(Some(token)) => req = req.header(self.api.csrf_header(), token),
                Ok(None) => debug!("No anti-forgery token stored, sending {path} without it"),
                Err(e) => warn!("Could not read anti-forgery token: {e}"),
            }
        }

        let req = body.apply(req)?;

        match self.api.execute(req).await {
            Err(ClientError::Api { status, .. }) if status == StatusCode::UNAUTHORIZED.as_u16() => {
                self.expire_session().await;
                Err(ClientError::auth_expired(status))
            }
            other => other,
        }
    }

    /// Fetch and store a fresh anti-forgery token. Failures are logged and
    /// ignored; the server decides whether a write without one is acceptable.
    /// Without a stored credential nothing is sent and no redirect happens;
    /// the next helper call does the redirect.
    pub async fn refresh_csrf_token(&self) -> Option<String> {
        let credential = match self.session.credential().await {
            Ok(Some(credential)) => credential,
            Ok(None) => {
                debug!("No stored credential, skipping anti-forgery token refresh");
                return None;
            }
            Err(e) => {
                warn!("Could not read stored credential: {e}");
                return None;
            }
        };

        match self.api.fetch_csrf_token(&credential).await {
            Ok(token) => {
                if let Err(e) = self.session.store_csrf_token(&token).await {
                    warn!("Could not persist anti-forgery token: {e}");
                }
                Some(token)
            }
            Err(e) => {
                warn!("Could not fetch anti-forgery token: {e}");
                None
            }
        }
    }

    fn require_login(&self, access: AccessKind) -> ClientError {
        info!("No stored credential for {access} request, redirecting to login");
        self.navigator.navigate(Route::Login);
        ClientError::missing_credential()
    }

    async fn expire_session(&self) {
        info!("Server rejected the stored credential, clearing session");
        if let Err(e) = self.session.clear().await {
            warn!("Could not clear session after rejection: {e}");
        }
        self.navigator.navigate(Route::Login);
    }
}
