//! Assessment inputs and the criteria derived from them.
//!
//! An [`Assessment`] holds the raw yes/no answers from the form. [`Criteria`] is computed from
//! it on demand and is never stored alongside the answers, so the downstream flags can only be
//! true when SIRS is met.

use crate::constants::SIRS_THRESHOLD;
use crate::error::SirsResult;
use serde::{Deserialize, Serialize};
use sirs_types::Answer;

/// One form input, in the order the form asks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    TemperatureAbnormal,
    HeartRateElevated,
    RespiratoryAbnormal,
    WbcAbnormal,
    InfectionSuspected,
    OrganDysfunctionOrHypoperfusion,
    RefractoryHypotension,
    MultiOrganFailure,
}

impl Field {
    /// Every field in form order.
    pub const ALL: [Field; 8] = [
        Field::TemperatureAbnormal,
        Field::HeartRateElevated,
        Field::RespiratoryAbnormal,
        Field::WbcAbnormal,
        Field::InfectionSuspected,
        Field::OrganDysfunctionOrHypoperfusion,
        Field::RefractoryHypotension,
        Field::MultiOrganFailure,
    ];

    /// Returns the snake_case name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::TemperatureAbnormal => "temperature_abnormal",
            Field::HeartRateElevated => "heart_rate_elevated",
            Field::RespiratoryAbnormal => "respiratory_abnormal",
            Field::WbcAbnormal => "wbc_abnormal",
            Field::InfectionSuspected => "infection_suspected",
            Field::OrganDysfunctionOrHypoperfusion => "organ_dysfunction_or_hypoperfusion",
            Field::RefractoryHypotension => "refractory_hypotension",
            Field::MultiOrganFailure => "multi_organ_failure",
        }
    }

    /// Whether this field is one of the four SIRS sub-criteria.
    pub fn is_sirs_criterion(self) -> bool {
        matches!(
            self,
            Field::TemperatureAbnormal
                | Field::HeartRateElevated
                | Field::RespiratoryAbnormal
                | Field::WbcAbnormal
        )
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The answers collected for a single evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// Temp >38°C (100.4°F) or <36°C (96.8°F)
    pub temperature_abnormal: bool,
    /// Heart rate >90 bpm
    pub heart_rate_elevated: bool,
    /// Respiratory rate >20 or PaCO₂ <32 mm Hg
    pub respiratory_abnormal: bool,
    /// WBC >12,000/mm³, <4,000/mm³, or >10% bands
    pub wbc_abnormal: bool,
    /// Suspected or present source of infection
    pub infection_suspected: bool,
    /// Lactic acidosis, SBP <90 or SBP drop ≥40 mm Hg of normal
    pub organ_dysfunction_or_hypoperfusion: bool,
    /// Hypotension despite adequate fluid resuscitation
    pub refractory_hypotension: bool,
    /// Evidence of ≥2 organs failing
    pub multi_organ_failure: bool,
}

impl Assessment {
    /// Returns the answer recorded for `field`.
    pub fn get(&self, field: Field) -> bool {
        match field {
            Field::TemperatureAbnormal => self.temperature_abnormal,
            Field::HeartRateElevated => self.heart_rate_elevated,
            Field::RespiratoryAbnormal => self.respiratory_abnormal,
            Field::WbcAbnormal => self.wbc_abnormal,
            Field::InfectionSuspected => self.infection_suspected,
            Field::OrganDysfunctionOrHypoperfusion => self.organ_dysfunction_or_hypoperfusion,
            Field::RefractoryHypotension => self.refractory_hypotension,
            Field::MultiOrganFailure => self.multi_organ_failure,
        }
    }

    /// Records `value` for `field`.
    pub fn set(&mut self, field: Field, value: bool) {
        let slot = match field {
            Field::TemperatureAbnormal => &mut self.temperature_abnormal,
            Field::HeartRateElevated => &mut self.heart_rate_elevated,
            Field::RespiratoryAbnormal => &mut self.respiratory_abnormal,
            Field::WbcAbnormal => &mut self.wbc_abnormal,
            Field::InfectionSuspected => &mut self.infection_suspected,
            Field::OrganDysfunctionOrHypoperfusion => {
                &mut self.organ_dysfunction_or_hypoperfusion
            }
            Field::RefractoryHypotension => &mut self.refractory_hypotension,
            Field::MultiOrganFailure => &mut self.multi_organ_failure,
        };
        *slot = value;
    }

    /// Builder-style variant of [`Assessment::set`] taking a form answer.
    pub fn with_answer(mut self, field: Field, answer: Answer) -> Self {
        self.set(field, answer.is_yes());
        self
    }

    /// Parses a typed answer and records it for `field`.
    ///
    /// # Errors
    ///
    /// Returns `SirsError::InvalidAnswer` if `text` is not a yes/no answer; the assessment is left
    /// unchanged.
    pub fn record(&mut self, field: Field, text: &str) -> SirsResult<Answer> {
        let answer: Answer = text.parse()?;
        self.set(field, answer.is_yes());
        Ok(answer)
    }

    /// Number of SIRS sub-criteria answered yes (0 to 4).
    pub fn sirs_count(&self) -> u8 {
        Field::ALL
            .iter()
            .filter(|f| f.is_sirs_criterion() && self.get(**f))
            .count() as u8
    }

    /// Derives the criteria flags for this assessment.
    pub fn criteria(&self) -> Criteria {
        let sirs_count = self.sirs_count();
        let has_sirs = sirs_count >= SIRS_THRESHOLD;

        Criteria {
            sirs_count,
            has_sirs,
            has_sepsis: has_sirs && self.infection_suspected,
            has_severe_sepsis: has_sirs && self.organ_dysfunction_or_hypoperfusion,
            has_septic_shock: has_sirs && self.refractory_hypotension,
            has_mods: has_sirs && self.multi_organ_failure,
        }
    }
}

/// Criteria derived from an [`Assessment`].
///
/// Only constructed by [`Assessment::criteria`]; every flag after `has_sirs` implies `has_sirs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Criteria {
    pub sirs_count: u8,
    pub has_sirs: bool,
    pub has_sepsis: bool,
    pub has_severe_sepsis: bool,
    pub has_septic_shock: bool,
    pub has_mods: bool,
}

#[cfg(test)]
pub(crate) fn all_assessments() -> impl Iterator<Item = Assessment> {
    (0u16..1 << Field::ALL.len()).map(|bits| {
        let mut assessment = Assessment::default();
        for (i, field) in Field::ALL.iter().enumerate() {
            assessment.set(*field, bits & (1 << i) != 0);
        }
        assessment
    })
}
