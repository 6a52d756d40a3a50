//! The questions asked on the calculator form.

use crate::assessment::Field;
use serde::Serialize;

pub const SIRS_SECTION: &str =
    "Systemic inflammatory response syndrome (SIRS) Criteria (≥2 meets SIRS definition)";
pub const SEPSIS_SECTION: &str = "Sepsis Criteria (SIRS + Source of Infection)";
pub const SEVERE_SEPSIS_SECTION: &str =
    "Severe Sepsis Criteria (Organ Dysfunction, Hypotension, or Hypoperfusion)";
pub const SEPTIC_SHOCK_SECTION: &str = "Septic Shock Criteria";
pub const MODS_SECTION: &str = "Multiple Organ Dysfunction Syndrome Criteria";

/// A single yes/no question and the input it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub field: Field,
    pub section: &'static str,
    pub prompt: &'static str,
}

/// All questions in the order the form presents them.
pub const FORM_QUESTIONS: [Question; 8] = [
    Question {
        field: Field::TemperatureAbnormal,
        section: SIRS_SECTION,
        prompt: "Temp >38°C (100.4°F) or <36°C (96.8°F)?",
    },
    Question {
        field: Field::HeartRateElevated,
        section: SIRS_SECTION,
        prompt: "Heart Rate >90 bpm?",
    },
    Question {
        field: Field::RespiratoryAbnormal,
        section: SIRS_SECTION,
        prompt: "Respiratory rate >20 or PaCO₂ <32 mm Hg?",
    },
    Question {
        field: Field::WbcAbnormal,
        section: SIRS_SECTION,
        prompt: "WBC >12,000/mm³, <4,000/mm³, or >10% bands?",
    },
    Question {
        field: Field::InfectionSuspected,
        section: SEPSIS_SECTION,
        prompt: "Suspected or present source of infection",
    },
    Question {
        field: Field::OrganDysfunctionOrHypoperfusion,
        section: SEVERE_SEPSIS_SECTION,
        prompt: "Lactic acidosis, SBP <90 or SBP drop ≥40 mm Hg of normal",
    },
    Question {
        field: Field::RefractoryHypotension,
        section: SEPTIC_SHOCK_SECTION,
        prompt: "Severe sepsis with hypotension, despite adequate fluid resuscitation",
    },
    Question {
        field: Field::MultiOrganFailure,
        section: MODS_SECTION,
        prompt: "Evidence of ≥2 organs failing",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_cover_every_field_in_order() {
        let fields: Vec<Field> = FORM_QUESTIONS.iter().map(|q| q.field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn test_sirs_questions_share_a_section() {
        for question in FORM_QUESTIONS.iter() {
            assert_eq!(
                question.section == SIRS_SECTION,
                question.field.is_sirs_criterion(),
                "{}",
                question.field
            );
        }
    }
}
