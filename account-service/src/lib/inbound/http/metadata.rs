use std::convert::Infallible;
use std::net::SocketAddr;

use axum::async_trait;
use axum::extract::ConnectInfo;
use axum::extract::FromRequestParts;
use http::header;
use http::request::Parts;
use http::HeaderMap;

use crate::domain::authentication::models::ClientMetadata;

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Provenance of the current request, recorded on login sessions.
#[derive(Debug, Clone)]
pub struct RequestMetadata(pub ClientMetadata);

#[async_trait]
impl<S> FromRequestParts<S> for RequestMetadata
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self(client_metadata(&parts.headers, peer)))
    }
}

/// Peer address wins over `x-forwarded-for`; missing values become empty strings.
pub fn client_metadata(headers: &HeaderMap, peer: Option<SocketAddr>) -> ClientMetadata {
    let client_ip = peer
        .map(|addr| addr.ip().to_string())
        .or_else(|| forwarded_for(headers))
        .unwrap_or_default();

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    ClientMetadata {
        client_ip,
        user_agent,
    }
}

fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    headers
        .get(FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    #[test]
    fn test_peer_address_takes_precedence() {
        let mut headers = HeaderMap::new();
        headers.insert(FORWARDED_FOR, HeaderValue::from_static("203.0.113.7"));
        headers.insert(header::USER_AGENT, HeaderValue::from_static("curl/8"));

        let metadata = client_metadata(&headers, Some("10.0.0.1:5000".parse().unwrap()));
        assert_eq!(metadata.client_ip, "10.0.0.1");
        assert_eq!(metadata.user_agent, "curl/8");
    }

    #[test]
    fn test_falls_back_to_first_forwarded_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            FORWARDED_FOR,
            HeaderValue::from_static(" 203.0.113.7 , 198.51.100.2"),
        );

        let metadata = client_metadata(&headers, None);
        assert_eq!(metadata.client_ip, "203.0.113.7");
        assert_eq!(metadata.user_agent, "");
    }

    #[test]
    fn test_unknown_origin() {
        let metadata = client_metadata(&HeaderMap::new(), None);
        assert_eq!(metadata, ClientMetadata::default());
    }
}
