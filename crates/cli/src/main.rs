use clap::{Parser, Subcommand};
use sirs_core::{
    Answer, Assessment, CriteriaService, Evaluation, Field, Question, Severity, SirsResult,
};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sirs")]
#[command(about = "SIRS, Sepsis, and Septic Shock Criteria calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate answers given as flags (unanswered questions count as No)
    Evaluate {
        /// Temp >38°C (100.4°F) or <36°C (96.8°F)
        #[arg(long, default_value_t = Answer::No)]
        temperature: Answer,
        /// Heart rate >90 bpm
        #[arg(long, default_value_t = Answer::No)]
        heart_rate: Answer,
        /// Respiratory rate >20 or PaCO₂ <32 mm Hg
        #[arg(long, default_value_t = Answer::No)]
        respiratory: Answer,
        /// WBC >12,000/mm³, <4,000/mm³, or >10% bands
        #[arg(long, default_value_t = Answer::No)]
        wbc: Answer,
        /// Suspected or present source of infection
        #[arg(long, default_value_t = Answer::No)]
        infection: Answer,
        /// Lactic acidosis, SBP <90 or SBP drop ≥40 mm Hg of normal
        #[arg(long, default_value_t = Answer::No)]
        hypoperfusion: Answer,
        /// Hypotension despite adequate fluid resuscitation
        #[arg(long, default_value_t = Answer::No)]
        refractory_hypotension: Answer,
        /// Evidence of ≥2 organs failing
        #[arg(long, default_value_t = Answer::No)]
        organ_failure: Answer,
        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Answer the form questions interactively
    Prompt {
        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the form questions
    Questions,
    /// Show reference text (instructions, next-steps, evidence, creator-insights, credits)
    Reference {
        /// Section name
        section: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("sirs=warn".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let service = CriteriaService::new();

    match cli.command {
        Some(Commands::Evaluate {
            temperature,
            heart_rate,
            respiratory,
            wbc,
            infection,
            hypoperfusion,
            refractory_hypotension,
            organ_failure,
            json,
        }) => {
            let assessment = Assessment::default()
                .with_answer(Field::TemperatureAbnormal, temperature)
                .with_answer(Field::HeartRateElevated, heart_rate)
                .with_answer(Field::RespiratoryAbnormal, respiratory)
                .with_answer(Field::WbcAbnormal, wbc)
                .with_answer(Field::InfectionSuspected, infection)
                .with_answer(Field::OrganDysfunctionOrHypoperfusion, hypoperfusion)
                .with_answer(Field::RefractoryHypotension, refractory_hypotension)
                .with_answer(Field::MultiOrganFailure, organ_failure);
            print_evaluation(&service.evaluate(&assessment), json)?;
        }
        Some(Commands::Prompt { json }) => {
            let stdin = io::stdin();
            let assessment = prompt_assessment(service.questions(), stdin.lock(), io::stdout())?;
            println!();
            print_evaluation(&service.evaluate(&assessment), json)?;
        }
        Some(Commands::Questions) => {
            let mut section = "";
            for question in service.questions() {
                if question.section != section {
                    section = question.section;
                    println!("{}", section);
                }
                println!("  --{:<24} {}", flag_name(question.field), question.prompt);
            }
        }
        Some(Commands::Reference { section }) => {
            println!("{}", reference_text(&service, &section)?);
        }
        None => {
            println!("Use 'sirs --help' for commands");
        }
    }

    Ok(())
}

/// The `evaluate` flag that fills `field`.
fn flag_name(field: Field) -> &'static str {
    match field {
        Field::TemperatureAbnormal => "temperature",
        Field::HeartRateElevated => "heart-rate",
        Field::RespiratoryAbnormal => "respiratory",
        Field::WbcAbnormal => "wbc",
        Field::InfectionSuspected => "infection",
        Field::OrganDysfunctionOrHypoperfusion => "hypoperfusion",
        Field::RefractoryHypotension => "refractory-hypotension",
        Field::MultiOrganFailure => "organ-failure",
    }
}

/// Asks each question on `output` and reads the answers from `input`.
///
/// A blank line answers "No", as does end of input. Unrecognised answers are asked again.
fn prompt_assessment<R: BufRead, W: Write>(
    questions: &[Question],
    mut input: R,
    mut output: W,
) -> io::Result<Assessment> {
    let mut assessment = Assessment::default();
    let mut section = "";

    for question in questions {
        if question.section != section {
            section = question.section;
            writeln!(output, "\n{}", section)?;
        }

        loop {
            write!(output, "{} [no/yes]: ", question.prompt)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 || line.trim().is_empty() {
                assessment.set(question.field, false);
                break;
            }
            match assessment.record(question.field, &line) {
                Ok(_) => break,
                Err(e) => writeln!(output, "{}", e)?,
            }
        }
    }

    Ok(assessment)
}

/// Title and body of the named reference section.
fn reference_text(service: &CriteriaService, name: &str) -> SirsResult<String> {
    let section = service.reference(name)?;
    Ok(format!("{}\n\n{}", section.title(), section.body()))
}

fn render(evaluation: &Evaluation) -> String {
    let label = match evaluation.outcome.severity() {
        Severity::Info => "INFO",
        Severity::Warning => "WARNING",
    };
    format!(
        "SIRS criteria met: {} of 4\n[{}] {}",
        evaluation.criteria.sirs_count,
        label,
        evaluation.outcome.text()
    )
}

fn evaluation_json(evaluation: &Evaluation) -> serde_json::Result<String> {
    serde_json::to_string_pretty(evaluation)
}

fn print_evaluation(evaluation: &Evaluation, json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", evaluation_json(evaluation)?);
    } else {
        println!("{}", render(evaluation));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sirs_core::{SirsError, Stage, FORM_QUESTIONS};
    use std::io::Cursor;

    #[test]
    fn test_evaluate_flags_parse() {
        let cli = Cli::try_parse_from([
            "sirs",
            "evaluate",
            "--temperature",
            "yes",
            "--wbc",
            "Y",
            "--organ-failure",
            "true",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Evaluate {
                temperature,
                heart_rate,
                wbc,
                organ_failure,
                json,
                ..
            }) => {
                assert_eq!(temperature, Answer::Yes);
                assert_eq!(heart_rate, Answer::No);
                assert_eq!(wbc, Answer::Yes);
                assert_eq!(organ_failure, Answer::Yes);
                assert!(!json);
            }
            _ => panic!("expected evaluate"),
        }
    }

    #[test]
    fn test_evaluate_rejects_bad_answer() {
        assert!(Cli::try_parse_from(["sirs", "evaluate", "--infection", "maybe"]).is_err());
    }

    #[test]
    fn test_prompt_reads_answers_in_order() {
        let input = Cursor::new("yes\n\nY\nno\nyes\nno\nno\nno\n");
        let mut output = Vec::new();
        let assessment = prompt_assessment(&FORM_QUESTIONS, input, &mut output).unwrap();

        assert!(assessment.temperature_abnormal);
        assert!(!assessment.heart_rate_elevated);
        assert!(assessment.respiratory_abnormal);
        assert!(assessment.infection_suspected);
        let evaluation = CriteriaService::new().evaluate(&assessment);
        assert_eq!(evaluation.outcome.stage(), Stage::Sepsis);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Heart Rate >90 bpm?"));
        assert!(transcript.contains("Septic Shock Criteria"));
    }

    #[test]
    fn test_prompt_reasks_unrecognised_answers() {
        let input = Cursor::new("perhaps\nyes\n");
        let mut output = Vec::new();
        let assessment = prompt_assessment(&FORM_QUESTIONS[..1], input, &mut output).unwrap();
        assert!(assessment.temperature_abnormal);

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("Temp >38°C").count(), 2);
        assert!(transcript.contains("invalid answer: unrecognised answer \"perhaps\""));
    }

    #[test]
    fn test_prompt_end_of_input_answers_no() {
        let assessment =
            prompt_assessment(&FORM_QUESTIONS, Cursor::new("yes\n"), io::sink()).unwrap();
        assert!(assessment.temperature_abnormal);
        assert_eq!(assessment.sirs_count(), 1);
        assert!(!assessment.multi_organ_failure);
    }

    #[test]
    fn test_render_labels_severity() {
        let service = CriteriaService::new();
        let negative = render(&service.evaluate(&Assessment::default()));
        assert!(negative.starts_with("SIRS criteria met: 0 of 4\n[INFO]"));

        let shock = Assessment {
            heart_rate_elevated: true,
            wbc_abnormal: true,
            refractory_hypotension: true,
            ..Default::default()
        };
        let rendered = render(&service.evaluate(&shock));
        assert!(rendered.contains("[WARNING] This patient meets septic shock criteria."));
    }

    #[test]
    fn test_json_output_includes_rendered_outcome() {
        let assessment = Assessment {
            temperature_abnormal: true,
            respiratory_abnormal: true,
            infection_suspected: true,
            ..Default::default()
        };
        let json = evaluation_json(&CriteriaService::new().evaluate(&assessment)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["criteria"]["sirs_count"], 2);
        assert_eq!(value["outcome"]["stage"], "sepsis");
        assert_eq!(value["outcome"]["severity"], "warning");
        assert_eq!(
            value["outcome"]["headline"],
            "This patient meets sepsis criteria."
        );
        assert!(value["outcome"]["guidance"].is_string());
        assert!(value["outcome"]["text"]
            .as_str()
            .unwrap()
            .starts_with("This patient meets sepsis criteria."));
    }

    #[test]
    fn test_reference_unknown_section_is_an_error() {
        let service = CriteriaService::new();
        let err = reference_text(&service, "glossary").unwrap_err();
        assert!(matches!(err, SirsError::UnknownSection(ref s) if s == "glossary"));

        let text = reference_text(&service, "next-steps").unwrap();
        assert!(text.starts_with("Next Steps\n\n"));
    }

    #[test]
    fn test_every_field_has_a_flag() {
        for field in Field::ALL {
            let flag = format!("--{}", flag_name(field));
            assert!(
                Cli::try_parse_from(["sirs", "evaluate", flag.as_str(), "yes"]).is_ok(),
                "{flag}"
            );
        }
    }
}
