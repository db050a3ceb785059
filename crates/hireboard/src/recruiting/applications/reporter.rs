use super::domain::PositionApplication;
use crate::recruiting::positions::Position;

const DEFAULT_FIELDS: [&str; 3] = ["applicant_name", "applicant_email", "submitted_at"];

/// CSV export over a position's applications: applicant columns first, then
/// one column per attached question, in question order.
pub struct ApplicationReporter<'a> {
    position: &'a Position,
    fields: Vec<String>,
}

impl<'a> ApplicationReporter<'a> {
    pub fn new(position: &'a Position) -> Self {
        Self::with_fields(
            position,
            DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
        )
    }

    /// Narrow the applicant columns to an explicit selection. Question
    /// columns always follow.
    pub fn with_fields(position: &'a Position, fields: Vec<String>) -> Self {
        Self { position, fields }
    }

    pub fn headers(&self) -> Vec<String> {
        let mut headers = self.fields.clone();
        headers.extend(
            self.position
                .ordered_questions()
                .iter()
                .map(|row| row.question.short_name.clone()),
        );
        headers
    }

    pub fn to_csv(&self, applications: &[PositionApplication]) -> Result<String, ReportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(self.headers())?;

        for application in applications {
            let mut record: Vec<String> = self
                .fields
                .iter()
                .map(|field| applicant_field(application, field))
                .collect();

            for row in self.position.ordered_questions() {
                let value = application
                    .answers
                    .iter()
                    .find(|answer| answer.short_name == row.question.short_name)
                    .and_then(|answer| answer.value.clone())
                    .unwrap_or_default();
                record.push(value);
            }

            writer.write_record(&record)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|err| ReportError::Buffer(err.to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

fn applicant_field(application: &PositionApplication, field: &str) -> String {
    match field {
        "applicant_name" => application.applicant_name.clone(),
        "applicant_email" => application.applicant_email.clone(),
        "submitted_at" => application.submitted_at.to_rfc3339(),
        "application_id" => application.id.0.clone(),
        _ => String::new(),
    }
}

/// Error raised while rendering the export.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv buffer: {0}")]
    Buffer(String),
    #[error("csv output was not valid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
