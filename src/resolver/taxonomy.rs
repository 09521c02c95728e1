// Tue Jan 13 2026 - Alex

use super::error::{LookupError, LookupResult};
use super::extract::find_species_entry;
use super::NameResolver;
use crate::config::Config;
use crate::names::{QueryName, ResolvedName, QUERY_SEPARATOR};
use log::debug;
use std::time::{Duration, Instant};

pub const NAME_PLACEHOLDER: &str = "{name}";

/// Scrapes the taxonomy browser page for one query.
pub struct TaxonomyBrowserClient {
    endpoint: String,
    http_client: ureq::Agent,
}

impl TaxonomyBrowserClient {
    pub fn new(config: &Config) -> Self {
        let http_client = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(&config.user_agent)
            .build();

        Self {
            endpoint: config.endpoint.clone(),
            http_client,
        }
    }

    /// Each separator-delimited word is percent-encoded; the separator stays literal.
    pub fn url_for(&self, query: &QueryName) -> String {
        let encoded = query
            .segments()
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join(QUERY_SEPARATOR);

        self.endpoint.replace(NAME_PLACEHOLDER, &encoded)
    }

    fn fetch(&self, url: &str) -> LookupResult<String> {
        let response = self.http_client.get(url).call()?;
        response
            .into_string()
            .map_err(|e| LookupError::Parse(format!("unreadable response body: {}", e)))
    }
}

impl NameResolver for TaxonomyBrowserClient {
    fn lookup(&self, query: &QueryName) -> LookupResult<ResolvedName> {
        let url = self.url_for(query);
        let started = Instant::now();

        let body = self.fetch(&url)?;
        debug!("GET {} -> {} bytes in {:?}", url, body.len(), started.elapsed());

        let entry = find_species_entry(&body).ok_or(LookupError::NotFound)?;
        ResolvedName::from_canonical(&entry).ok_or_else(|| {
            LookupError::Parse(format!("species entry has no usable text: {:?}", entry))
        })
    }

    fn name(&self) -> &str {
        "taxonomy-browser"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::normalize;
    use crate::resolver::LookupErrorKind;
    use httpmock::prelude::*;

    const BROWSER_PATH: &str = "/Taxonomy/Browser/wwwtax.cgi";

    fn client_for(server: &MockServer) -> TaxonomyBrowserClient {
        let endpoint = format!("{}{}?name={{name}}", server.base_url(), BROWSER_PATH);
        TaxonomyBrowserClient::new(&Config::default().with_endpoint(endpoint).with_timeouts(2, 5))
    }

    #[test]
    fn test_url_for_query() {
        let client = TaxonomyBrowserClient::new(&Config::default());
        let url = client.url_for(&normalize("Escherichia coli"));
        assert_eq!(
            url,
            "https://www.ncbi.nlm.nih.gov/Taxonomy/Browser/wwwtax.cgi?name=Escherichia%20coli"
        );
    }

    #[test]
    fn test_url_encodes_reserved_characters() {
        let config = Config::default().with_endpoint("http://localhost/tax?name={name}&lvl=3");
        let client = TaxonomyBrowserClient::new(&config);
        let url = client.url_for(&normalize("Bad[Name] sp&x"));
        assert_eq!(url, "http://localhost/tax?name=Bad%5BName%5D%20sp%26x&lvl=3");
    }

    #[test]
    fn test_unreachable_host_is_network_error() {
        let config = Config::default()
            .with_endpoint("http://127.0.0.1:9/tax?name={name}")
            .with_timeouts(1, 1);
        let client = TaxonomyBrowserClient::new(&config);

        let err = client.lookup(&normalize("Escherichia coli")).unwrap_err();
        assert_eq!(err.kind(), LookupErrorKind::NetworkError);
    }

    #[test]
    fn test_species_anchor_becomes_resolved_name() {
        let server = MockServer::start();

        let page = server.mock(|when, then| {
            when.method(GET)
                .path(BROWSER_PATH)
                .query_param("name", "Clostridium difficile");
            then.status(200)
                .header("content-type", "text/html")
                .body(
                    r#"<html><body><table><tr><td>
                    <a title="genus" href="/g">Clostridioides</a>
                    <a title="species" href="/s"><strong>Clostridioides [Clostridium] difficile</strong></a>
                    </td></tr></table></body></html>"#,
                );
        });

        let resolved = client_for(&server).lookup(&normalize("Clostridium_difficile")).unwrap();

        page.assert();
        assert_eq!(resolved.as_str(), "Clostridioides_Clostridium_difficile");
    }

    #[test]
    fn test_page_without_species_anchor_is_not_found() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path(BROWSER_PATH);
            then.status(200)
                .header("content-type", "text/html")
                .body("<html><body>No result found in the Taxonomy database</body></html>");
        });

        let err = client_for(&server).lookup(&normalize("Nonexistent beast")).unwrap_err();
        assert_eq!(err.kind(), LookupErrorKind::NotFound);
    }

    #[test]
    fn test_error_status_is_http_status() {
        for status in [404, 503] {
            let server = MockServer::start();

            server.mock(|when, then| {
                when.method(GET).path(BROWSER_PATH);
                then.status(status).body("unavailable");
            });

            let err = client_for(&server).lookup(&normalize("Escherichia coli")).unwrap_err();
            assert_eq!(err.kind(), LookupErrorKind::HttpStatus, "status {}", status);
        }
    }
}
