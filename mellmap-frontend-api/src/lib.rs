use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod places;
mod util;

pub use self::places::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{message} ({http_status})")]
    Api { http_status: u16, message: String },
}

impl Error {
    /// The message sent by the backend, if any.
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            Self::Fetch(_) => None,
        }
    }
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

/// Any 2xx answer counts as success, including 204 without a body.
const fn is_success(http_status: u16) -> bool {
    matches!(http_status, 200..=299)
}

fn api_error(http_status: u16, body: Option<mellmap_boundary::Error>, status_text: String) -> Error {
    let message = body.map_or(status_text, |err| err.error);
    log::debug!("Request failed with status {http_status}: {message}");
    Error::Api {
        http_status,
        message,
    }
}

async fn into_api_error(response: Response) -> Error {
    let body = response.json::<mellmap_boundary::Error>().await.ok();
    api_error(response.status(), body, response.status_text())
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if is_success(response.status()) {
        Ok(response.json().await?)
    } else {
        Err(into_api_error(response).await)
    }
}

/// For mutations whose success body carries nothing of interest.
pub async fn into_unit(response: Response) -> Result<()> {
    if is_success(response.status()) {
        Ok(())
    } else {
        Err(into_api_error(response).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_2xx_status_is_a_success() {
        assert!(is_success(200));
        assert!(is_success(201));
        assert!(is_success(204));
        assert!(!is_success(199));
        assert!(!is_success(304));
        assert!(!is_success(404));
        assert!(!is_success(500));
    }

    #[test]
    fn prefer_backend_message_over_status_text() {
        let body = mellmap_boundary::Error {
            error: "Заведение не найдено".into(),
        };
        let err = api_error(404, Some(body), "Not Found".into());
        assert_eq!(err.api_message(), Some("Заведение не найдено"));
        assert_eq!(
            api_error(502, None, "Bad Gateway".into()),
            Error::Api {
                http_status: 502,
                message: "Bad Gateway".into()
            }
        );
    }
}
