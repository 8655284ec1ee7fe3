//! Intake form validation.
//!
//! The pipeline only runs on a `ValidatedForm`. Every failing field is
//! reported at once so the form layer can mark all of them.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use lupon_model::{FormData, IncidentInfo, ValidatedForm};
use thiserror::Error;

/// Formats accepted for a date/time without an offset.
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// A single failing form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Incident summary must be at least {min} characters (got {actual})")]
    SummaryTooShort { min: usize, actual: usize },

    #[error("Incident location is required")]
    MissingLocation,

    #[error("Incident date and time is required")]
    MissingDateTime,

    #[error("Invalid incident date and time: {0}")]
    InvalidDateTime(String),
}

impl ValidationError {
    /// Form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::SummaryTooShort { .. } => "summary",
            Self::MissingLocation => "location",
            Self::MissingDateTime | Self::InvalidDateTime(_) => "dateTime",
        }
    }
}

/// All failing fields of one form; never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} form field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Errors for a single field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.field() == field)
    }
}

/// Validation thresholds.
#[derive(Debug, Clone)]
pub struct ValidationRules {
    /// Minimum trimmed summary length, in characters
    pub min_summary_chars: usize,
    /// Zone used for date/times entered without an offset
    pub timezone: Tz,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_summary_chars: 30,
            timezone: chrono_tz::Asia::Manila,
        }
    }
}

/// Parse an incident date/time.
///
/// RFC 3339 values keep their offset; values without one are read as
/// local time in `timezone`.
pub fn parse_date_time(raw: &str, timezone: Tz) -> Result<DateTime<Utc>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingDateTime);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| timezone.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| ValidationError::InvalidDateTime(raw.to_string()))
}

/// Validate a raw intake form.
///
/// The summary and location are stored trimmed of surrounding
/// whitespace; every other field is copied unchanged.
pub fn validate(form: &FormData, rules: &ValidationRules) -> Result<ValidatedForm, ValidationErrors> {
    let mut errors = Vec::new();

    let summary = form.summary.trim();
    let summary_chars = summary.chars().count();
    if summary_chars < rules.min_summary_chars {
        errors.push(ValidationError::SummaryTooShort {
            min: rules.min_summary_chars,
            actual: summary_chars,
        });
    }

    let location = form.location.trim();
    if location.is_empty() {
        errors.push(ValidationError::MissingLocation);
    }

    let date_time = match parse_date_time(&form.date_time, rules.timezone) {
        Ok(dt) => Some(dt),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match date_time {
        Some(date_time) if errors.is_empty() => Ok(ValidatedForm {
            case_id: form.case_id.clone(),
            date_received: form.date_received.clone(),
            complainant: form.complainant.clone(),
            respondents: form.respondents.clone(),
            incident: IncidentInfo {
                summary: summary.to_string(),
                location: location.to_string(),
                date_time,
            },
        }),
        _ => Err(ValidationErrors { errors }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_form() -> FormData {
        FormData {
            summary: "Someone took my neighbor's carabao while I was sleeping".to_string(),
            location: "Purok 3, San Pedro City".to_string(),
            date_time: "2024-05-01T20:00".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form() {
        let validated = validate(&valid_form(), &ValidationRules::default()).unwrap();
        assert_eq!(validated.incident.location, "Purok 3, San Pedro City");
        assert_eq!(
            validated.incident.date_time,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_summary_boundary() {
        let rules = ValidationRules::default();
        let mut form = valid_form();

        form.summary = "a".repeat(29);
        let errors = validate(&form, &rules).unwrap_err();
        assert_eq!(
            errors.errors(),
            &[ValidationError::SummaryTooShort { min: 30, actual: 29 }]
        );

        form.summary = format!("  {}  ", "a".repeat(30));
        assert!(validate(&form, &rules).is_ok());
    }

    #[test]
    fn test_trims_summary_and_location() {
        let mut form = valid_form();
        form.summary = "  Someone took my neighbor's carabao while I was sleeping\n".to_string();
        form.location = "  Purok 3, San Pedro City  ".to_string();
        form.complainant.name = Some("  Juan dela Cruz ".to_string());

        let validated = validate(&form, &ValidationRules::default()).unwrap();
        assert_eq!(
            validated.incident.summary,
            "Someone took my neighbor's carabao while I was sleeping"
        );
        assert_eq!(validated.incident.location, "Purok 3, San Pedro City");
        assert_eq!(validated.complainant.name.as_deref(), Some("  Juan dela Cruz "));
    }

    #[test]
    fn test_reports_every_failing_field() {
        let form = FormData {
            summary: "too short".to_string(),
            location: "   ".to_string(),
            date_time: String::new(),
            ..Default::default()
        };
        let errors = validate(&form, &ValidationRules::default()).unwrap_err();
        let fields: Vec<_> = errors.errors().iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["summary", "location", "dateTime"]);
        assert_eq!(errors.for_field("dateTime").next(), Some(&ValidationError::MissingDateTime));
    }

    #[test]
    fn test_unparseable_date_time() {
        let mut form = valid_form();
        form.date_time = "last Tuesday".to_string();
        let errors = validate(&form, &ValidationRules::default()).unwrap_err();
        assert_eq!(
            errors.errors(),
            &[ValidationError::InvalidDateTime("last Tuesday".to_string())]
        );
    }

    #[test]
    fn test_parse_date_time_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let manila = chrono_tz::Asia::Manila;
        assert_eq!(parse_date_time("2024-05-01T20:00", manila).unwrap(), expected);
        assert_eq!(parse_date_time("2024-05-01 20:00:00", manila).unwrap(), expected);
        assert_eq!(parse_date_time("2024-05-01T12:00:00Z", manila).unwrap(), expected);
        assert_eq!(parse_date_time("2024-05-01T20:00:00+08:00", manila).unwrap(), expected);
    }
}
