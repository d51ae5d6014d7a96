//! Request extractors shared by the todo handlers.

use axum::extract::{FromRequestParts, OriginalUri};
use axum::http::header::HOST;
use axum::http::request::Parts;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Absolute URL the current request was sent to.
///
/// Built from the un-nested request path and an origin taken from, in order:
/// the configured `PUBLIC_URL`, the request authority or `Host` header, and
/// finally `http://localhost`.
#[derive(Debug, Clone)]
pub struct RequestUrl(pub Url);

impl FromRequestParts<AppState> for RequestUrl {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map(|original| original.0.path().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());

        let origin = match &state.config.public_url {
            Some(public) => public.clone(),
            None => {
                let authority = parts
                    .uri
                    .authority()
                    .map(|a| a.as_str().to_string())
                    .or_else(|| {
                        parts
                            .headers
                            .get(HOST)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string)
                    })
                    .unwrap_or_else(|| "localhost".to_string());
                let scheme = parts.uri.scheme_str().unwrap_or("http");
                format!("{scheme}://{authority}")
            }
        };

        let url = Url::parse(&format!("{origin}{path}")).map_err(|e| {
            tracing::debug!(error = %e, %origin, %path, "Unparseable request URL");
            AppError::BadRequest(format!("Invalid request URL: {e}"))
        })?;

        Ok(RequestUrl(url))
    }
}
