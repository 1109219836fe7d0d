use crate::infra::InputKind;
use cardio_risk::assessment::{Assessment, AssessmentService, FieldName};
use cardio_risk::config::AppConfig;
use cardio_risk::error::AppError;
use cardio_risk::ingest::{extract_fields, RawFields};
use cardio_risk::telemetry;
use clap::Args;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Input file: .csv export, .json record, or OCR/PDF text
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the extracted fields instead of a report (text input only)
    #[arg(long)]
    pub(crate) extract_only: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        input,
        extract_only,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let service = AssessmentService::new(config.assessment);

    let kind = if extract_only {
        InputKind::Text
    } else {
        InputKind::from_path(&input)
    };

    match kind {
        InputKind::CsvBatch => {
            let reader = BufReader::new(File::open(&input)?);
            let assessments = service.assess_batch_csv(reader)?;
            for (index, assessment) in assessments.iter().enumerate() {
                println!("Patient {}", index + 1);
                print_assessment(assessment);
                println!();
            }
        }
        InputKind::JsonRecord => {
            let contents = std::fs::read_to_string(&input)?;
            let object: serde_json::Map<String, serde_json::Value> =
                serde_json::from_str(&contents)
                    .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
            let assessment = service.assess(&RawFields::from_json(&object))?;
            print_assessment(&assessment);
        }
        InputKind::Text if extract_only => {
            let contents = std::fs::read_to_string(&input)?;
            let fields = extract_fields(&contents);
            for field in FieldName::ordered() {
                println!("{:<15} {}", field, fields.get(field).unwrap_or("-"));
            }
            let missing = fields.missing();
            if !missing.is_empty() {
                let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
                println!("\nMissing: {}", names.join(", "));
            }
        }
        InputKind::Text => {
            let contents = std::fs::read_to_string(&input)?;
            let outcome = service.assess_text(&contents)?;
            print_assessment(&outcome.assessment);
        }
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let service = AssessmentService::default();
    let assessment = service.assess(&sample_patient())?;

    println!("Cardiovascular risk demo");
    println!("Sample patient: 60 y/o male, typical angina, downsloping ST segment\n");
    print_assessment(&assessment);
    Ok(())
}

fn print_assessment(assessment: &Assessment) {
    for warning in &assessment.warnings {
        println!("Warning: {warning}");
    }
    print!("{}", assessment.report);
}

pub(crate) fn sample_patient() -> RawFields {
    RawFields::new()
        .with(FieldName::Age, "60")
        .with(FieldName::Sex, "M")
        .with(FieldName::ChestPainType, "TA")
        .with(FieldName::RestingBp, "150")
        .with(FieldName::Cholesterol, "250")
        .with(FieldName::FastingBs, "1")
        .with(FieldName::RestingEcg, "ST")
        .with(FieldName::MaxHr, "100")
        .with(FieldName::ExerciseAngina, "Y")
        .with(FieldName::Oldpeak, "2.5")
        .with(FieldName::StSlope, "Down")
}
