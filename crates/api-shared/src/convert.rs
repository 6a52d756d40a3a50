//! Translation between `sirs-core` types and the protobuf wire types.

use crate::pb;
use sirs_core::{Assessment, Evaluation, Question, ReferenceSection};

impl From<pb::EvaluateReq> for Assessment {
    fn from(req: pb::EvaluateReq) -> Self {
        Assessment {
            temperature_abnormal: req.temperature_abnormal,
            heart_rate_elevated: req.heart_rate_elevated,
            respiratory_abnormal: req.respiratory_abnormal,
            wbc_abnormal: req.wbc_abnormal,
            infection_suspected: req.infection_suspected,
            organ_dysfunction_or_hypoperfusion: req.organ_dysfunction_or_hypoperfusion,
            refractory_hypotension: req.refractory_hypotension,
            multi_organ_failure: req.multi_organ_failure,
        }
    }
}

impl From<Evaluation> for pb::EvaluateRes {
    fn from(evaluation: Evaluation) -> Self {
        let Evaluation { criteria, outcome } = evaluation;
        pb::EvaluateRes {
            sirs_count: u32::from(criteria.sirs_count),
            has_sirs: criteria.has_sirs,
            has_sepsis: criteria.has_sepsis,
            has_severe_sepsis: criteria.has_severe_sepsis,
            has_septic_shock: criteria.has_septic_shock,
            has_mods: criteria.has_mods,
            stage: outcome.stage().to_string(),
            severity: outcome.severity().to_string(),
            headline: outcome.headline().to_string(),
            guidance: outcome.guidance().unwrap_or_default().to_string(),
            text: outcome.text(),
        }
    }
}

impl From<&Question> for pb::Question {
    fn from(question: &Question) -> Self {
        pb::Question {
            field: question.field.to_string(),
            section: question.section.to_string(),
            prompt: question.prompt.to_string(),
        }
    }
}

impl From<ReferenceSection> for pb::ReferenceRes {
    fn from(section: ReferenceSection) -> Self {
        pb::ReferenceRes {
            section: section.slug().to_string(),
            title: section.title().to_string(),
            body: section.body().to_string(),
        }
    }
}

/// Builds the form response from the question list.
pub fn form_res(questions: &[Question]) -> pb::FormRes {
    pb::FormRes {
        questions: questions.iter().map(pb::Question::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sirs_core::{evaluate, FORM_QUESTIONS};

    #[test]
    fn test_request_maps_every_field() {
        let req = pb::EvaluateReq {
            temperature_abnormal: true,
            heart_rate_elevated: false,
            respiratory_abnormal: true,
            wbc_abnormal: false,
            infection_suspected: true,
            organ_dysfunction_or_hypoperfusion: false,
            refractory_hypotension: true,
            multi_organ_failure: false,
        };
        let assessment = Assessment::from(req);
        assert!(assessment.temperature_abnormal);
        assert!(assessment.respiratory_abnormal);
        assert!(assessment.infection_suspected);
        assert!(assessment.refractory_hypotension);
        assert_eq!(assessment.sirs_count(), 2);
    }

    #[test]
    fn test_response_for_septic_shock_with_sepsis() {
        let assessment = Assessment {
            temperature_abnormal: true,
            respiratory_abnormal: true,
            infection_suspected: true,
            refractory_hypotension: true,
            ..Default::default()
        };
        let res = pb::EvaluateRes::from(evaluate(&assessment));
        assert_eq!(res.sirs_count, 2);
        assert!(res.has_septic_shock && res.has_sepsis);
        assert_eq!(res.stage, "septic_shock");
        assert_eq!(res.severity, "warning");
        assert!(!res.guidance.is_empty());
        assert_eq!(res.text, format!("{} {}", res.headline, res.guidance));
    }

    #[test]
    fn test_response_without_guidance_has_empty_guidance() {
        let res = pb::EvaluateRes::from(evaluate(&Assessment::default()));
        assert_eq!(res.stage, "sirs_not_met");
        assert_eq!(res.severity, "info");
        assert!(res.guidance.is_empty());
        assert_eq!(res.text, res.headline);
    }

    #[test]
    fn test_form_res_keeps_question_order() {
        let res = form_res(&FORM_QUESTIONS);
        assert_eq!(res.questions.len(), FORM_QUESTIONS.len());
        assert_eq!(res.questions[0].field, "temperature_abnormal");
        assert_eq!(res.questions[7].field, "multi_organ_failure");
    }

    #[test]
    fn test_reference_res() {
        let res = pb::ReferenceRes::from(ReferenceSection::NextSteps);
        assert_eq!(res.section, "next-steps");
        assert_eq!(res.title, "Next Steps");
        assert!(res.body.contains("MANAGEMENT"));
    }
}
