use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

#[derive(Serialize)]
pub struct ShortenResponse {
    pub result: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
