// Re-export the proto module from the shared `api-shared` crate so callers
// can reference `api_grpc::service::pb`.
pub use api_shared::pb;

use api_shared::{auth, convert, HealthService};
use std::sync::Arc;
use tonic::service::Interceptor;
use tonic::{Request, Response, Status};

use api_shared::pb::{
    sirs_server::Sirs, EvaluateReq, EvaluateRes, FormRes, HealthRes, ReferenceReq, ReferenceRes,
};
use sirs_core::{Assessment, CriteriaService, SirsError};

/// API key interceptor for gRPC requests
///
/// Checks the `x-api-key` metadata against the key configured at startup. With no key
/// configured every request is rejected unless unauthenticated access was explicitly allowed.
#[derive(Clone, Debug)]
pub struct ApiKeyInterceptor {
    expected_key: Option<Arc<str>>,
    allow_unauthenticated: bool,
}

impl ApiKeyInterceptor {
    /// `allow_unauthenticated` only applies while `expected_key` is `None`.
    pub fn new(expected_key: Option<&str>, allow_unauthenticated: bool) -> Self {
        Self {
            expected_key: expected_key.map(Arc::from),
            allow_unauthenticated,
        }
    }
}

impl Interceptor for ApiKeyInterceptor {
    fn call(&mut self, req: Request<()>) -> Result<Request<()>, Status> {
        if self.expected_key.is_none() && self.allow_unauthenticated {
            return Ok(req);
        }

        let api_key = req
            .metadata()
            .get("x-api-key")
            .and_then(|v| v.to_str().ok());

        auth::validate_api_key(api_key, self.expected_key.as_deref())?;
        Ok(req)
    }
}

#[derive(Default, Clone)]
pub struct SirsService {
    criteria_service: CriteriaService,
}

#[tonic::async_trait]
impl Sirs for SirsService {
    async fn health(&self, _req: Request<()>) -> Result<Response<HealthRes>, Status> {
        Ok(Response::new(HealthService::check_health()))
    }

    async fn form(&self, _req: Request<()>) -> Result<Response<FormRes>, Status> {
        Ok(Response::new(convert::form_res(
            self.criteria_service.questions(),
        )))
    }

    async fn evaluate(&self, req: Request<EvaluateReq>) -> Result<Response<EvaluateRes>, Status> {
        let assessment = Assessment::from(req.into_inner());
        let evaluation = self.criteria_service.evaluate(&assessment);
        Ok(Response::new(evaluation.into()))
    }

    async fn reference(
        &self,
        req: Request<ReferenceReq>,
    ) -> Result<Response<ReferenceRes>, Status> {
        let req = req.into_inner();
        match self.criteria_service.reference(&req.section) {
            Ok(section) => Ok(Response::new(section.into())),
            Err(e @ SirsError::UnknownSection(_)) => Err(Status::not_found(e.to_string())),
            Err(e) => Err(Status::internal(format!("Failed to load reference: {}", e))),
        }
    }
}
