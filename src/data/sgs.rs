//! SGS (Banco Central do Brasil) API integration.

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::SgsConfig;
use crate::domain::RawRecord;
use crate::error::AppError;

const BODY_SNIPPET_LEN: usize = 200;

/// Source of raw SGS records (so tests can inject fakes instead of the network).
pub trait SeriesSource {
    /// Fetch raw records for series `code` between `start` and `end` (`DD/MM/YYYY`).
    fn get_data(&self, code: u32, start: &str, end: &str) -> Result<Vec<RawRecord>, AppError>;
}

impl<F> SeriesSource for F
where
    F: Fn(u32, &str, &str) -> Result<Vec<RawRecord>, AppError>,
{
    fn get_data(&self, code: u32, start: &str, end: &str) -> Result<Vec<RawRecord>, AppError> {
        self(code, start, end)
    }
}

/// Blocking HTTP client for the SGS JSON endpoint.
pub struct SgsClient {
    client: Client,
    base_url: String,
}

impl SgsClient {
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(SgsConfig::from_env()?)
    }

    pub fn new(config: SgsConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("sgs-series/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::invalid_arg(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    pub fn series_url(&self, code: u32) -> String {
        format!("{}/bcdata.sgs.{code}/dados", self.base_url)
    }
}

impl SeriesSource for SgsClient {
    fn get_data(&self, code: u32, start: &str, end: &str) -> Result<Vec<RawRecord>, AppError> {
        let url = self.series_url(code);
        debug!(%url, code, start, end, "requesting SGS series");

        let resp = self
            .client
            .get(&url)
            .query(&[("formato", "json"), ("dataInicial", start), ("dataFinal", end)])
            .send()
            .map_err(|e| AppError::Request {
                code,
                msg: e.to_string(),
            })?;

        let status = resp.status();
        let body = resp.text().map_err(|e| AppError::Request {
            code,
            msg: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(AppError::Status {
                code,
                status: status.as_u16(),
                body: snippet(&body),
            });
        }

        let records: Vec<RawRecord> = serde_json::from_str(&body).map_err(|e| AppError::Decode {
            code,
            msg: format!("{e}; body: {}", snippet(&body)),
        })?;

        debug!(code, records = records.len(), "received SGS records");
        Ok(records)
    }
}

fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(BODY_SNIPPET_LEN) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_url_embeds_code() {
        let config = SgsConfig::default().with_base_url("http://example.test/").unwrap();
        let client = SgsClient::new(config).unwrap();
        assert_eq!(client.series_url(12), "http://example.test/bcdata.sgs.12/dados");
    }

    #[test]
    fn closures_act_as_sources() {
        let source = |code: u32, start: &str, end: &str| -> Result<Vec<RawRecord>, AppError> {
            assert_eq!((code, start, end), (433, "01/01/2020", "31/12/2020"));
            Ok(vec![RawRecord::new("01/01/2020", "0.21")])
        };
        let records = source.get_data(433, "01/01/2020", "31/12/2020").unwrap();
        assert_eq!(records, vec![RawRecord::new("01/01/2020", "0.21")]);
    }

    #[test]
    fn snippet_truncates_long_bodies() {
        let long = "x".repeat(500);
        let out = snippet(&long);
        assert_eq!(out.len(), BODY_SNIPPET_LEN + 3);
        assert!(out.ends_with("..."));
        assert_eq!(snippet("  short  "), "short");
    }
}
