use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{
    ChestPainType, Coded, ExerciseAngina, FieldName, PatientRecord, RestingEcg, Sex, StSlope,
};
use crate::assessment::service::AssessmentService;
use crate::config::AssessmentConfig;
use crate::ingest::RawFields;

/// Every rule that can fire does: 1+2+2+1+1+2+1+1+2+2 = 15.
pub(super) fn reference_record() -> PatientRecord {
    PatientRecord {
        age: 60,
        sex: Coded::Known(Sex::Male),
        chest_pain_type: Coded::Known(ChestPainType::TypicalAngina),
        resting_bp: 150,
        cholesterol: 250,
        fasting_bs: true,
        resting_ecg: Coded::Known(RestingEcg::StTAbnormality),
        max_hr: 100,
        exercise_angina: Coded::Known(ExerciseAngina::Yes),
        oldpeak: 2.5,
        st_slope: Coded::Known(StSlope::Down),
    }
}

/// No rule fires.
pub(super) fn baseline_record() -> PatientRecord {
    PatientRecord {
        age: 40,
        sex: Coded::Known(Sex::Male),
        chest_pain_type: Coded::Known(ChestPainType::NonAnginalPain),
        resting_bp: 120,
        cholesterol: 180,
        fasting_bs: false,
        resting_ecg: Coded::Known(RestingEcg::Normal),
        max_hr: 170,
        exercise_angina: Coded::Known(ExerciseAngina::No),
        oldpeak: 0.0,
        st_slope: Coded::Known(StSlope::Up),
    }
}

pub(super) fn reference_raw() -> RawFields {
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

pub(super) fn reference_json() -> Value {
    serde_json::json!({
        "age": 60,
        "sex": "M",
        "ChestPainType": "TA",
        "RestingBP": 150,
        "Cholesterol": 250,
        "FastingBS": 1,
        "RestingECG": "ST",
        "MaxHR": 100,
        "ExerciseAngina": "Y",
        "Oldpeak": 2.5,
        "ST_Slope": "Down"
    })
}

pub(super) const REFERENCE_TEXT: &str = "Age: 45 Sex: M ChestPainType: ATA RestingBP: 130 Cholesterol: 210 FastingBS: 0 RestingECG: Normal MaxHR: 150 ExerciseAngina: N Oldpeak: 1.2 ST_Slope: Flat";

/// Rows scoring High (15), Minimal (0) and Moderate (4), in that order.
pub(super) const THREE_ROW_CSV: &str = "Age,Sex,ChestPainType,RestingBP,Cholesterol,FastingBS,RestingECG,MaxHR,ExerciseAngina,Oldpeak,ST_Slope,HeartDisease\n\
60,M,TA,150,250,1,ST,100,Y,2.5,Down,1\n\
40,M,NAP,120,180,0,Normal,170,N,0.0,Up,0\n\
45,M,ATA,130,210,0,Normal,150,N,1.2,Flat,0\n";

pub(super) fn service() -> AssessmentService {
    AssessmentService::new(AssessmentConfig::default())
}

pub(super) fn service_with_limit(max_batch_rows: usize) -> AssessmentService {
    AssessmentService::new(AssessmentConfig { max_batch_rows })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json body")
}
