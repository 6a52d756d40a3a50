//! Constants used throughout the SIRS core crate.
//!
//! Thresholds, default addresses and the outcome wording live here so every adapter renders the
//! same text.

/// Number of positive SIRS sub-criteria needed to meet SIRS.
pub const SIRS_THRESHOLD: u8 = 2;

/// Default gRPC bind address.
pub const DEFAULT_GRPC_ADDR: &str = "0.0.0.0:50051";

/// Default REST bind address.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Notice shown when the patient does not meet SIRS.
pub const SIRS_NOT_MET_NOTICE: &str =
    "This patient does not meet SIRS criteria. For other causes of shock, see the Next Steps section.";

pub const SIRS_HEADLINE: &str = "This patient meets SIRS criteria.";

pub const SEPSIS_HEADLINE: &str = "This patient meets sepsis criteria.";

pub const SEVERE_SEPSIS_HEADLINE: &str = "This patient meets severe sepsis criteria.";

pub const SEPTIC_SHOCK_HEADLINE: &str = "This patient meets septic shock criteria.";

pub const MODS_HEADLINE: &str = "This patient meets multiple organ dysfunction syndrome criteria.";

/// Management guidance appended whenever the patient also meets sepsis.
pub const SEPSIS_GUIDANCE: &str = "Follow your guidelines for sepsis, which typically include \
aggressive fluid resuscitation, early, broad-spectrum antibiotics, ICU consultation, CVP \
evaluation, and occasionally pressors and transfusion.";
