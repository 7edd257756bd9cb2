use poem_openapi::{OpenApi, payload::Json};

use crate::api::diagnostics::dto::DiagnosticsResponse;
use crate::api::tags::ApiTags;
use crate::setup::diagnostics::Diagnostics;

pub struct DiagnosticsApi {
    diagnostics: Diagnostics,
}

impl DiagnosticsApi {
    pub fn new(diagnostics: Diagnostics) -> Self {
        Self { diagnostics }
    }
}

#[OpenApi]
impl DiagnosticsApi {
    /// Runtime and connection pool figures
    #[oai(path = "/debug/vars", method = "get", tag = "ApiTags::Diagnostics")]
    async fn vars(&self) -> Json<DiagnosticsResponse> {
        Json(self.diagnostics.snapshot().into())
    }
}
