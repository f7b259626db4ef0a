//! Resolve a comic through the structured `info.0.json` endpoint.

use crate::comic::{ComicMetadata, ResolvedComic};
use crate::http::{CurlClient, HttpClient};
use crate::matcher::ComicReference;

use super::{ResolveError, Resolver};

pub struct JsonResolver<C = CurlClient> {
    client: C,
    base_url: String,
}

impl JsonResolver<CurlClient> {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(CurlClient, base_url)
    }
}

impl<C: HttpClient> JsonResolver<C> {
    pub fn with_client(client: C, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/{id}/info.0.json`
    pub fn lookup_url(&self, identifier: &str) -> String {
        format!("{}/{}/info.0.json", self.base_url, identifier)
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

impl<C: HttpClient> Resolver for JsonResolver<C> {
    fn resolve(&self, reference: &ComicReference) -> Result<ResolvedComic, ResolveError> {
        let url = self.lookup_url(&reference.identifier);
        let response = self.client.get(&url)?;
        tracing::trace!(
            "received JSON info from {}: {}",
            url,
            String::from_utf8_lossy(&response.body)
        );
        let metadata: ComicMetadata = serde_json::from_slice(&response.body)
            .map_err(|source| ResolveError::Decode { url, source })?;
        Ok(ResolvedComic::Metadata(metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::testing::StaticClient;
    use crate::resolver::ResolveErrorKind;

    const FIXTURE: &str = r#"{"month": "10", "num": 2057, "link": "", "year": "2018", "news": "", "safe_title": "Internal Monologues", "transcript": "", "alt": "Haha, just kidding, everyone's already been hacked. I wonder if today's the day we find out about it.", "img": "https://imgs.xkcd.com/comics/internal_monologues.png", "title": "Internal Monologues", "day": "10"}"#;

    fn reference(id: &str) -> ComicReference {
        ComicReference {
            raw_url: format!("https://xkcd.com/{}/", id),
            identifier: id.to_string(),
        }
    }

    #[test]
    fn lookup_url_interpolates_identifier() {
        let r = JsonResolver::new("https://xkcd.com/");
        assert_eq!(r.lookup_url("2057"), "https://xkcd.com/2057/info.0.json");
    }

    #[test]
    fn resolves_fixture() {
        let r = JsonResolver::with_client(StaticClient::ok(FIXTURE), "https://xkcd.com");
        let comic = r.resolve(&reference("2057")).unwrap();
        match comic {
            ResolvedComic::Metadata(m) => {
                assert_eq!(m.id, 2057);
                assert_eq!(m.safe_title, "Internal Monologues");
            }
            other => panic!("expected metadata, got {:?}", other),
        }
        assert_eq!(
            r.client().requested(),
            vec!["https://xkcd.com/2057/info.0.json".to_string()]
        );
    }

    #[test]
    fn transport_failure_is_network_error() {
        let r = JsonResolver::with_client(
            StaticClient::failing(curl::Error::new(6)),
            "https://xkcd.com",
        );
        let err = r.resolve(&reference("2057")).unwrap_err();
        assert_eq!(err.kind(), ResolveErrorKind::Network);
    }

    #[test]
    fn non_json_body_is_decode_error() {
        let r = JsonResolver::with_client(
            StaticClient::status(404, "<html>Not Found</html>"),
            "https://xkcd.com",
        );
        let err = r.resolve(&reference("99999")).unwrap_err();
        assert_eq!(err.kind(), ResolveErrorKind::Decode);
        assert!(err.to_string().contains("99999/info.0.json"));
    }

    #[test]
    fn status_is_not_inspected_when_body_decodes() {
        let r = JsonResolver::with_client(StaticClient::status(500, FIXTURE), "https://xkcd.com");
        assert!(r.resolve(&reference("2057")).is_ok());
    }

    #[test]
    fn truncated_json_is_decode_error() {
        let r = JsonResolver::with_client(StaticClient::ok(r#"{"num": 20"#), "https://xkcd.com");
        let err = r.resolve(&reference("20")).unwrap_err();
        assert!(matches!(err, ResolveError::Decode { .. }));
    }
}
