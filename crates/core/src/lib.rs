//! # SIRS Core
//!
//! Core logic for the SIRS, Sepsis and Septic Shock criteria calculator.
//!
//! This crate contains the pure classification and the static content around it:
//! - Assessment answers and the criteria derived from them
//! - Classification against the SIRS ladder
//! - Form questions and reference text
//! - Startup configuration for the servers
//!
//! **No API concerns**: HTTP/gRPC servers, authentication and terminal I/O belong in `api-grpc`,
//! `api-rest`, `api-shared` or `sirs-cli`.

pub mod assessment;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluator;
pub mod form;
pub mod reference;

pub use assessment::{Assessment, Criteria, Field};
pub use config::ServerConfig;
pub use error::{SirsError, SirsResult};
pub use evaluator::{evaluate, Evaluation, Outcome, Severity, Stage};
pub use form::{Question, FORM_QUESTIONS};
pub use reference::ReferenceSection;
pub use sirs_types::{Answer, AnswerError};

/// Criteria evaluation service used by the API and CLI adapters.
///
/// Holds no state; every call evaluates a fresh assessment.
#[derive(Debug, Default, Clone, Copy)]
pub struct CriteriaService;

impl CriteriaService {
    /// Creates a new instance of CriteriaService.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an assessment and logs the selected stage.
    pub fn evaluate(&self, assessment: &Assessment) -> Evaluation {
        let evaluation = evaluate(assessment);
        tracing::debug!(
            sirs_count = evaluation.criteria.sirs_count,
            stage = %evaluation.outcome.stage(),
            severity = %evaluation.outcome.severity(),
            "evaluated assessment"
        );
        evaluation
    }

    /// Returns the form questions in order.
    pub fn questions(&self) -> &'static [Question] {
        &FORM_QUESTIONS
    }

    /// Looks up a reference section by name.
    ///
    /// # Errors
    ///
    /// Returns `SirsError::UnknownSection` if `name` is not a known section.
    pub fn reference(&self, name: &str) -> SirsResult<ReferenceSection> {
        name.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_matches_pure_evaluator() {
        let service = CriteriaService::new();
        let assessment = Assessment {
            respiratory_abnormal: true,
            wbc_abnormal: true,
            organ_dysfunction_or_hypoperfusion: true,
            ..Default::default()
        };
        assert_eq!(service.evaluate(&assessment), evaluate(&assessment));
        assert_eq!(
            service.evaluate(&assessment).outcome.stage(),
            Stage::SevereSepsis
        );
    }

    #[test]
    fn test_service_reference_lookup() {
        let service = CriteriaService::new();
        assert_eq!(
            service.reference("evidence").unwrap(),
            ReferenceSection::Evidence
        );
        assert!(service.reference("nope").is_err());
        assert_eq!(service.questions().len(), 8);
    }
}
