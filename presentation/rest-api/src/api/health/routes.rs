use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;
use crate::config::version::VERSION;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SystemInfo {
    /// Environment the server was started in
    pub environment: String,
    /// Service version from Cargo.toml
    pub version: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Always "available" while the server answers
    pub status: String,
    pub system_info: SystemInfo,
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    environment: String,
}

impl Api {
    pub fn new(environment: String) -> Self {
        Self { environment }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Reports availability together with the environment and version.
    #[oai(path = "/v1/healthcheck", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "available".to_string(),
            system_info: SystemInfo {
                environment: self.environment.clone(),
                version: VERSION.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    #[tokio::test]
    async fn should_report_availability_and_environment() {
        let service = OpenApiService::new(Api::new("staging".to_string()), "test", "1.0");
        let client = TestClient::new(Route::new().nest("/", service));

        let response = client.get("/v1/healthcheck").send().await;

        response.assert_status(StatusCode::OK);
        response
            .assert_json(json!({
                "status": "available",
                "system_info": {
                    "environment": "staging",
                    "version": VERSION,
                }
            }))
            .await;
    }
}
