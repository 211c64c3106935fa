// API client module: a small blocking HTTP client for the equran.id
// Quran API and the hadith API. Every call is a single GET whose JSON
// envelope is handed back to the caller as-is, including envelopes in
// which the API reports an error (unknown surah, hadith not found, range
// too large). Only transport failures are returned as `Err`.

use crate::config::{HADITH_API_BASE, QURAN_API_BASE, USER_AGENT};
use crate::error::TransportError;
use crate::models::{Envelope, Hadith, HadithBook, HadithPage, Surah, Tafsir};
use crate::range::HadithRange;
use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::Client;
use reqwest::Url;
use serde::de::DeserializeOwned;

/// Holds a reqwest blocking client and the base URLs of both APIs.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    quran_base: Url,
    hadith_base: Url,
}

impl ApiClient {
    /// Create a client against the public API endpoints.
    pub fn new() -> Result<Self> {
        Self::with_base_urls(QURAN_API_BASE, HADITH_API_BASE)
    }

    /// Create a client against custom endpoints, e.g. a local mock server.
    pub fn with_base_urls(quran_base: &str, hadith_base: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            quran_base: parse_base(quran_base)?,
            hadith_base: parse_base(hadith_base)?,
        })
    }

    /// `GET /surat`: every surah, without ayat.
    pub fn surah_list(&self) -> Result<Envelope<Vec<Surah>>, TransportError> {
        self.get(endpoint(&self.quran_base, &["surat"]), None)
    }

    /// `GET /surat/{n}`: one surah including its ayat.
    pub fn surah(&self, number: u32) -> Result<Envelope<Surah>, TransportError> {
        self.get(
            endpoint(&self.quran_base, &["surat", &number.to_string()]),
            None,
        )
    }

    /// `GET /tafsir/{n}`.
    pub fn tafsir(&self, number: u32) -> Result<Envelope<Tafsir>, TransportError> {
        self.get(
            endpoint(&self.quran_base, &["tafsir", &number.to_string()]),
            None,
        )
    }

    /// `GET /books`: the available hadith collections.
    pub fn hadith_books(&self) -> Result<Envelope<Vec<HadithBook>>, TransportError> {
        self.get(endpoint(&self.hadith_base, &["books"]), None)
    }

    /// `GET /books/{book}/{n}`.
    pub fn hadith(&self, book: &str, number: u32) -> Result<Envelope<Hadith>, TransportError> {
        self.get(
            endpoint(&self.hadith_base, &["books", book, &number.to_string()]),
            None,
        )
    }

    /// `GET /books/{book}?range=a-b`. The server refuses spans above 300
    /// with a code 400 envelope.
    pub fn hadith_range(
        &self,
        book: &str,
        range: HadithRange,
    ) -> Result<Envelope<HadithPage>, TransportError> {
        self.get(
            endpoint(&self.hadith_base, &["books", book]),
            Some(("range", range.to_string())),
        )
    }

    fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        query: Option<(&str, String)>,
    ) -> Result<Envelope<T>, TransportError> {
        let mut req = self.client.get(url.clone());
        if let Some(pair) = &query {
            req = req.query(&[pair]);
        }
        debug!("GET {url} query={query:?}");
        let res = req.send()?;
        let status = res.status();
        let body = res.text()?;
        debug!("{url} -> {status} ({} bytes)", body.len());
        Envelope::from_json(&body, status.as_u16()).map_err(|source| TransportError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

fn parse_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid API base URL {raw:?}"))?;
    if url.cannot_be_a_base() {
        anyhow::bail!("API base URL {raw:?} cannot take a path");
    }
    Ok(url)
}

/// Append percent-encoded path segments to a base URL.
fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_keeps_base_path() {
        let base = Url::parse(QURAN_API_BASE).unwrap();
        assert_eq!(
            endpoint(&base, &["surat", "2"]).as_str(),
            "https://equran.id/api/v2/surat/2"
        );
    }

    #[test]
    fn endpoint_on_bare_host() {
        let base = Url::parse("http://127.0.0.1:1234").unwrap();
        assert_eq!(
            endpoint(&base, &["books", "bukhari", "1"]).as_str(),
            "http://127.0.0.1:1234/books/bukhari/1"
        );
    }

    #[test]
    fn endpoint_encodes_segments() {
        let base = Url::parse(HADITH_API_BASE).unwrap();
        assert_eq!(
            endpoint(&base, &["books", "a/b c"]).as_str(),
            "https://api.hadith.gading.dev/books/a%2Fb%20c"
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(ApiClient::with_base_urls("not a url", HADITH_API_BASE).is_err());
        assert!(ApiClient::with_base_urls(QURAN_API_BASE, "mailto:someone@example.com").is_err());
    }
}
