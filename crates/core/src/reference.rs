//! Static reference content shown alongside the calculator.
//!
//! The bodies are markdown and are reproduced verbatim from the MDCalc "SIRS, Sepsis, and Septic
//! Shock Criteria" calculator that this tool is built from.

use crate::error::{SirsError, SirsResult};
use serde::Serialize;

/// A block of reference text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceSection {
    Instructions,
    NextSteps,
    Evidence,
    CreatorInsights,
    Credits,
}

impl ReferenceSection {
    pub const ALL: [ReferenceSection; 5] = [
        ReferenceSection::Instructions,
        ReferenceSection::NextSteps,
        ReferenceSection::Evidence,
        ReferenceSection::CreatorInsights,
        ReferenceSection::Credits,
    ];

    /// Kebab-case name used in URLs and on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            ReferenceSection::Instructions => "instructions",
            ReferenceSection::NextSteps => "next-steps",
            ReferenceSection::Evidence => "evidence",
            ReferenceSection::CreatorInsights => "creator-insights",
            ReferenceSection::Credits => "credits",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReferenceSection::Instructions => "Instructions",
            ReferenceSection::NextSteps => "Next Steps",
            ReferenceSection::Evidence => "Evidence",
            ReferenceSection::CreatorInsights => "Creator Insights",
            ReferenceSection::Credits => "Credits",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            ReferenceSection::Instructions => INSTRUCTIONS,
            ReferenceSection::NextSteps => NEXT_STEPS,
            ReferenceSection::Evidence => EVIDENCE,
            ReferenceSection::CreatorInsights => CREATOR_INSIGHTS,
            ReferenceSection::Credits => CREDITS,
        }
    }
}

impl std::str::FromStr for ReferenceSection {
    type Err = SirsError;

    fn from_str(s: &str) -> SirsResult<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ReferenceSection::ALL
            .into_iter()
            .find(|section| section.slug() == wanted)
            .ok_or_else(|| SirsError::UnknownSection(s.trim().to_owned()))
    }
}

impl std::fmt::Display for ReferenceSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

const INSTRUCTIONS: &str = "\
**INSTRUCTIONS**

Answer the questions and scroll down to see the results.

**Note**: sepsis definitions are evolving and difficult to finalize without a gold standard. \
These criteria are what is reported and the literature is listed, but note that nuances exist \
for all sepsis definitions and can differ locally, regionally, nationally, and internationally, \
as well as in clinical vs administrative vs research settings. Sepsis-3 Consensus Definitions \
are frequently cited as one paradigm.

For patients under 18, please use the Pediatric SIRS, Sepsis, and Septic Shock Criteria.";

const CREDITS: &str = "\
**Credits**

This calculator is built off an [MDCalc app](https://www.mdcalc.com/calc/1096/sirs-sepsis-septic-shock-criteria).
Much of the text in this app is taken verbatim from that app.";

const NEXT_STEPS: &str = "\
**MANAGEMENT**
- When a patient presents with two or more *SIRS* criteria but with hemodynamic stability \
(i.e. blood pressure at baseline), a clinical assessment must be made to determine the \
possibility of an infectious etiology.
- If an infection is suspected or confirmed, the patient is diagnosed with *Sepsis* and a \
lactate level is obtained to determine the degree of hypoperfusion and inflammation. A \
lactate level ≥4 mmol/L is considered diagnostic for *Severe Sepsis*, and aggressive management \
with broad spectrum antibiotics, intravenous fluids, and vasopressors should be initiated \
(aka *EGDT*).
- Patients that present with a suspected or confirmed infection AND hemodynamic instability \
should immediately be treated for *Septic Shock*. While SIRS criteria will likely be present in \
these patients, aggressive management should not be delayed while waiting for laboratory values \
such as the WBC or lactate.
- The management of *Severe Sepsis* and *Septic Shock* is the topic of intense research and scrutiny.
- While *Early Goal Directed Therapy* has been advocated in the *Surviving Sepsis Guidelines*, there \
remains controversy as to which of the bundled interventions are necessary.
- Recent studies have showed *EGDT* not to be better than \"usual care\", and called for significant \
amendments to currently used sepsis protocols.
- To date, most experts agree that early recognition of *Sepsis*, *Severe Sepsis*, and *Septic Shock*, \
and early administration of broad spectrum and organism specific antibiotic are the most critical \
actions.
- There remains controversy in the type of fluids that should be used, \
their quantity, and the timing of vasopressors and/or inotropes.

**CRITICAL ACTIONS**
- Assess all patients with 2 or more *SIRS* criteria for the possibility of an infectious etiology.
- Screen for *Severe Sepsis* by obtaining a lactate level on patients with *Sepsis*, \
that are elderly, immunocompromised, or ill appearing.
- Some experts recommend obtaining a lactate level on all patients in whom blood cultures are sent. \
This is institution dependent however and not mandated in any guidelines.
- When *Severe Sepsis* or *Septic Shock* are identified, initiate broad spectrum antibiotics immediately. \
These antibiotics should be organism specific and therefore institutional antibiograms should be used.
- The *Surviving Sepsis Campaign Guidelines* recommend initiation of antimicrobials within one hour from the time \
of recognition of *Severe Sepsis* or *Septic Shock*, or within three hours of the patient’s arrival to the hospital.";

const EVIDENCE: &str = "\
**FORMULA**

Series of Yes/No questions.

**FACTS & FIGURES**
- SIRS - 2 YES answers meets criteria.
- Sepsis Criteria - 2 YES of SIRS + Suspected Source of Infection.
- Severe Sepsis Criteria - 2 YES of SIRS + Lactic Acidosis, SBP.
- Multiple Organ Dysfunction Syndrome - 2 YES of SIRS + Evidence of ≥ 2 Organs Failing.
Check with your own hospital for its sepsis guidelines, sepsis 'bundle' or sepsis algorithm. \
Two excellent sepsis references ([1](https://emcrit.org/squirt/severe-sepsis-resources/), \
[2](https://crashingpatient.com/wp-content/pdf/Loma%20Linda%20STOP%20Sepsis%20Bundle.pdf)) \
come from the [EMCrit](https://emcrit.org/) website.

**EVIDENCE APPRAISAL**
- [This paper](https://pubmed.ncbi.nlm.nih.gov/1303622/) was released after the first consensus \
conference in 1991. The goal of this conference was to standardize the use of terms such as \
“SIRS”, “sepsis”, “severe sepsis”, and “septic shock” to facilitate enrollment of patients in \
clinical trials.
- In 2001, the International Sepsis Definitions Conference expanded on these definitions by \
adding additional elements such as laboratory data. See [here](https://pubmed.ncbi.nlm.nih.gov/12682500/).

**LITERATURE**

ORIGINAL/PRIMARY REFERENCE
- [International Guidelines for Management of Severe Sepsis and Septic Shock: \
2012](https://content.guidelinecentral.com/guideline/get/pdf/3525)
- Bone RC, Balk RA, Cerra FB, Dellinger RP, Fein AM, Knaus WA, Schein RM, Sibbald WJ. \
[Definitions for sepsis and organ failure and guidelines for the use of innovative therapies in \
sepsis.](https://pubmed.ncbi.nlm.nih.gov/1303622/) The ACCP/SCCM Consensus Conference Committee. \
American College of Chest Physicians/Society of Critical Care Medicine.Chest. 1992 \
Jun;101(6):1644-55.

CLINICAL PRACTICE GUIDELINES
- [Surviving Sepsis Campaign: International Guidelines for Management of Sepsis and Septic \
Shock](https://journals.lww.com/ccmjournal/Fulltext/2021/11000/Surviving_Sepsis_Campaign__International.21.aspx): \
Critical Care Medicine

OTHER REFERENCES
- [Surviving Sepsis Campaign Responds to ProCESS Trial](https://www.icnarc.org/DataServices/Attachments/Download/3d1bc8e1-1ed1-e311-a997-d48564544b14).
- Levy MM, Fink MP, Marshall JC, et al. [2001 SCCM/ESICM/ACCP/ATS/SIS International Sepsis \
Definitions Conference](https://pubmed.ncbi.nlm.nih.gov/12682500/). Crit Care Med. \
2003;31(4):1250–1256.";

const CREATOR_INSIGHTS: &str = "\
### From the creator Dr. Robert A. Balk

**Why did you issue the consensus statement on the SIRS Criteria and Septic protocol? \
Was there a clinical experience that inspired you to update these guidelines for clinicians?**

The American College of Chest Physicians and the Society of Critical Care Medicine convened \
the first sepsis definitions conference in 1991 to help researchers define a population of severe \
septic patients who would be suitable for enrollment in clinical trials of new investigational agents \
that were thought to be able to block the proinflammatory cascade, and thus improve \
survival of patients with severe sepsis and septic shock. To accomplish this goal, the conference \
participants aimed to use readily available clinical signs, symptoms and basic laboratory studies \
that would then support a rapid diagnosis. The trade-off for such a sensitive group of parameters \
that would alert physicians to the early manifestations of severe sepsis and septic shock was \
a group of criteria that lacked a great deal of specificity. It was also recognized that the same \
clinical signs, symptoms and laboratory data seen in patients with severe sepsis and septic shock \
were also present in other populations of critically ill patients with other proinflammatory conditions\
, such as trauma, burns, pancreatitis, etc. It was therefore decided to define the patients with a \
documented or highly suspicious infection that results in a systemic inflammatory response as having \
sepsis. In the ICU, sepsis patients would typically manifest organ dysfunction (severe sepsis) \
or septic shock, with or without multiple organ dysfunction syndrome.
The second goal of the consensus conference was to facilitate better communication in the literature \
and scientific communication (including on rounds) which will enhance future comparative efforts \
among clinical trials and facilitate outcome comparisons of septic populations.

**What pearls, pitfalls and/or tips do you have for users of the SIRS Criteria? Are there cases \
in which they have been applied, interpreted, or used inappropriately?**

Users of the SIRS - Sepsis criteria need to understand that they are overly sensitive to identify \
potential patients as early as possible, but the criteria lack specificity. The 2001 international \
sepsis definition conference attempted to enhance the utility and specificity of the definition \
by including additional signs, symptoms, laboratory data, biomarkers and physiologic parameters. \
Unfortunately, we are still awaiting the perfect clinical definition that has both high sensitivity \
and specificity for severe sepsis and septic shock.

For example, if you believe the patient has an infection AND meets the SIRS criteria, then the \
patient may be septic. Infection is likely its most useful application. The score is designed \
to be sensitive, but not specific. It's meant to help with early diagnosis. SIRS was not designed \
to be algorithmic, such as: if you have a score of X, you must do Y. Rather, it's a table of points to \
see whether or not the patient has any of these criteria. You then apply that result to the specific \
clinical scenario.

**What recommendations do you have for health care providers once they have applied the SIRS Criteria? \
Are there any adjustments or updates you would make to the criteria given recent changes in medicine?**

Investigators are continuing to refine the SIRS - Sepsis criteria and make them more clinically useful. \
The current approach has involved the use of various biomarkers to facilitate the identification \
of patients with a high likelihood of bacterial infection and/or high risk for morbidity and mortality. \
Some of the current biomarkers under evaluation include procalcitonin, C-reactive protein, \
proadrenalmodulin, N-terminal BNP and lactate.

**Other comments? Any new research or papers on this topic in the pipeline?**

The future will likely include significant refinements in the SIRS criteria using biomarkers and PCR or \
nanotechnology to improve the specificity of the diagnosis and provide the information \
in a more rapid fashion.

**ABOUT THE CREATOR**

Robert A. Balk, MD, is a professor and practicing physician in pulmonology, internal medicine and \
critical care at Rush University Medical Center. His research interests include septic shock, acute \
lung injury, acute respiratory distress syndrome and ventilator-associated pneumonia.

*To view Dr. Robert A. Balk's publications, visit \
[PubMed](https://pubmed.ncbi.nlm.nih.gov/?term=Balk+RA%5BAuthor%5D)*.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_section_names() {
        assert_eq!(
            "next-steps".parse::<ReferenceSection>().unwrap(),
            ReferenceSection::NextSteps
        );
        assert_eq!(
            "Creator_Insights".parse::<ReferenceSection>().unwrap(),
            ReferenceSection::CreatorInsights
        );
        for section in ReferenceSection::ALL {
            assert_eq!(section.slug().parse::<ReferenceSection>().unwrap(), section);
        }
    }

    #[test]
    fn test_unknown_section_is_an_error() {
        let err = "glossary".parse::<ReferenceSection>().unwrap_err();
        assert!(matches!(err, SirsError::UnknownSection(ref s) if s == "glossary"));
    }

    #[test]
    fn test_bodies_keep_their_headings() {
        assert!(ReferenceSection::NextSteps.body().starts_with("**MANAGEMENT**"));
        assert!(ReferenceSection::NextSteps
            .body()
            .contains("**CRITICAL ACTIONS**"));
        assert!(ReferenceSection::Evidence.body().contains("**LITERATURE**"));
        assert!(ReferenceSection::CreatorInsights
            .body()
            .contains("**ABOUT THE CREATOR**"));
    }

    #[test]
    fn test_continuation_lines_leave_no_runs_of_spaces() {
        for section in ReferenceSection::ALL {
            assert!(!section.body().contains("  "), "{section}");
        }
    }
}
