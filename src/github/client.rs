use std::time::Duration;

use crate::error::{Result, SigninGuardError};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("signin-guard/", env!("CARGO_PKG_VERSION"));

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// Perform a GET request and return the response body.
    fn get(&self, url: &str) -> Result<String>;

    /// Perform a POST request with a JSON body and return the response body.
    fn post(&self, url: &str, body: &str) -> Result<String>;
}

/// Production HTTP client using reqwest.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
    token: String,
}

#[cfg(not(tarpaulin_include))]
impl ReqwestClient {
    /// Build a client that authenticates every request with the given token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS backend fails to initialize.
    pub fn new(token: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SigninGuardError::Host(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: token.to_string(),
        })
    }

    fn check_status(url: &str, response: reqwest::blocking::Response) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(SigninGuardError::Host(format!(
                "Request to {url} failed: HTTP {status}"
            )));
        }

        response
            .text()
            .map_err(|e| SigninGuardError::Host(format!("Failed to read response from {url}: {e}")))
    }

    fn map_send_error(url: &str, e: &reqwest::Error) -> SigninGuardError {
        if e.is_timeout() {
            SigninGuardError::Host(format!("Request timeout for {url}"))
        } else if e.is_connect() {
            SigninGuardError::Host(format!("Failed to connect to {url}"))
        } else {
            SigninGuardError::Host(format!("Request to {url} failed: {e}"))
        }
    }
}

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .send()
            .map_err(|e| Self::map_send_error(url, &e))?;

        Self::check_status(url, response)
    }

    fn post(&self, url: &str, body: &str) -> Result<String> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .map_err(|e| Self::map_send_error(url, &e))?;

        Self::check_status(url, response)
    }
}
