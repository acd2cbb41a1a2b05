use std::time::Duration;

use reqwest::blocking;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::server::{SavePoint, SavedPoints};
use crate::store::Point;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Connection(#[from] reqwest::Error),
    #[error("{status}: {body}")]
    Status {
        status: StatusCode,
        body: String
    }
}

/// Blocking client for the point store. Requests carry no timeout, so a
/// call returns only once the service answers or the connection fails.
pub struct PointClient {
    base_url: String,
    http: blocking::Client
}

impl PointClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stores `point` and returns every point the service now holds.
    pub fn save_point(&self, point: Point) -> Result<Vec<Point>, ClientError> {
        let response = self.http
            .post(format!("{}/save_point", self.base_url))
            .json(&SavePoint::from(point))
            .send()?;

        let saved: SavedPoints = Self::decode(response)?;
        Ok(saved.points)
    }

    pub fn points(&self) -> Result<Vec<Point>, ClientError> {
        let response = self.http
            .get(format!("{}/get_points", self.base_url))
            .send()?;

        Self::decode(response)
    }

    fn decode<T: DeserializeOwned>(response: blocking::Response) -> Result<T, ClientError> {
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let client = PointClient::new("http://127.0.0.1:5000/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
    }
}
