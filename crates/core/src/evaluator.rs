//! Classification of an assessment against the SIRS ladder.
//!
//! The ladder is walked from the most severe stage down and the first matching stage wins:
//! multiple organ dysfunction, septic shock, severe sepsis, sepsis, SIRS. Every stage above SIRS
//! additionally carries the sepsis management guidance when the patient also meets sepsis.

use crate::assessment::{Assessment, Criteria};
use crate::constants::{
    MODS_HEADLINE, SEPSIS_GUIDANCE, SEPSIS_HEADLINE, SEPTIC_SHOCK_HEADLINE,
    SEVERE_SEPSIS_HEADLINE, SIRS_HEADLINE, SIRS_NOT_MET_NOTICE,
};
use serde::Serialize;

/// How prominently an outcome should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position on the diagnostic ladder, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    SirsNotMet,
    Sirs,
    Sepsis,
    SevereSepsis,
    SepticShock,
    MultipleOrganDysfunction,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::SirsNotMet => "sirs_not_met",
            Stage::Sirs => "sirs",
            Stage::Sepsis => "sepsis",
            Stage::SevereSepsis => "severe_sepsis",
            Stage::SepticShock => "septic_shock",
            Stage::MultipleOrganDysfunction => "multiple_organ_dysfunction",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single message selected for an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    stage: Stage,
    sepsis_guidance: bool,
}

impl Outcome {
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Whether the sepsis management guidance accompanies the headline.
    pub fn has_guidance(&self) -> bool {
        self.sepsis_guidance
    }

    /// Informational below sepsis, warning from sepsis upwards.
    pub fn severity(&self) -> Severity {
        match self.stage {
            Stage::SirsNotMet | Stage::Sirs => Severity::Info,
            _ => Severity::Warning,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self.stage {
            Stage::SirsNotMet => SIRS_NOT_MET_NOTICE,
            Stage::Sirs => SIRS_HEADLINE,
            Stage::Sepsis => SEPSIS_HEADLINE,
            Stage::SevereSepsis => SEVERE_SEPSIS_HEADLINE,
            Stage::SepticShock => SEPTIC_SHOCK_HEADLINE,
            Stage::MultipleOrganDysfunction => MODS_HEADLINE,
        }
    }

    pub fn guidance(&self) -> Option<&'static str> {
        self.sepsis_guidance.then_some(SEPSIS_GUIDANCE)
    }

    /// Headline followed by the guidance, if any.
    pub fn text(&self) -> String {
        match self.guidance() {
            Some(guidance) => format!("{} {}", self.headline(), guidance),
            None => self.headline().to_owned(),
        }
    }
}

/// Serialises the rendered outcome: stage, severity, headline, guidance (null when absent) and
/// the full text.
impl Serialize for Outcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Outcome", 5)?;
        state.serialize_field("stage", &self.stage)?;
        state.serialize_field("severity", &self.severity())?;
        state.serialize_field("headline", self.headline())?;
        state.serialize_field("guidance", &self.guidance())?;
        state.serialize_field("text", &self.text())?;
        state.end()
    }
}

/// Result of evaluating an assessment: the derived criteria and the selected outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub criteria: Criteria,
    pub outcome: Outcome,
}

/// Selects the outcome for already-derived criteria.
pub fn classify(criteria: &Criteria) -> Outcome {
    let stage = if !criteria.has_sirs {
        Stage::SirsNotMet
    } else if criteria.has_mods {
        Stage::MultipleOrganDysfunction
    } else if criteria.has_septic_shock {
        Stage::SepticShock
    } else if criteria.has_severe_sepsis {
        Stage::SevereSepsis
    } else if criteria.has_sepsis {
        Stage::Sepsis
    } else {
        Stage::Sirs
    };

    Outcome {
        stage,
        sepsis_guidance: stage >= Stage::Sepsis && criteria.has_sepsis,
    }
}

/// Evaluates an assessment.
pub fn evaluate(assessment: &Assessment) -> Evaluation {
    let criteria = assessment.criteria();
    Evaluation {
        criteria,
        outcome: classify(&criteria),
    }
}
