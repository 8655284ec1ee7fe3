//! Report assembly.

use lupon_model::{
    CaseCategory, CaseReport, LegalRecord, MediationStrategy, PartyInfo, PartyQuestions,
    ValidatedForm,
};

/// Title used when the complainant has no name.
pub const DEFAULT_CASE_TITLE: &str = "Barangay Mediation Case";

/// Derive the report title from the complainant.
pub fn case_title(complainant: &PartyInfo) -> String {
    match complainant.display_name() {
        Some(name) => format!("{} Case", name),
        None => DEFAULT_CASE_TITLE.to_string(),
    }
}

/// Compose a report from validated form data and the sections derived
/// from `category`.
///
/// Callers must compute `analysis`, `mediation` and `questions` from the
/// same `category`; `ReportPipeline` does.
pub fn assemble(
    form: &ValidatedForm,
    category: CaseCategory,
    analysis: &LegalRecord,
    mediation: MediationStrategy,
    questions: PartyQuestions,
) -> CaseReport {
    let respondents = form
        .respondents
        .iter()
        .filter(|r| !r.is_blank())
        .cloned()
        .collect();

    CaseReport {
        case_id: form.case_id.clone(),
        date_received: form.date_received.clone(),
        complainant: form.complainant.clone(),
        respondents,
        incident: form.incident.clone(),
        case_title: case_title(&form.complainant),
        category,
        analysis: analysis.clone(),
        mediation,
        questions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lupon_model::IncidentInfo;
    use pretty_assertions::assert_eq;

    fn form() -> ValidatedForm {
        ValidatedForm {
            case_id: Some("BC-2024-017".to_string()),
            date_received: Some("2024-05-02".to_string()),
            complainant: PartyInfo::named("Maria Santos"),
            respondents: vec![
                PartyInfo::named("Pedro Reyes"),
                PartyInfo::default(),
                PartyInfo {
                    address: Some("Purok 5".to_string()),
                    ..Default::default()
                },
            ],
            incident: IncidentInfo {
                summary: "The neighbor's dog keeps entering our garden at night".to_string(),
                location: "Purok 4".to_string(),
                date_time: Utc.with_ymd_and_hms(2024, 6, 3, 1, 0, 0).unwrap(),
            },
        }
    }

    fn build(form: &ValidatedForm) -> CaseReport {
        let record = LegalRecord {
            nature: "General Barangay Dispute".to_string(),
            description: String::new(),
            violations: Vec::new(),
            jurisprudence: Vec::new(),
            counters: Vec::new(),
        };
        assemble(
            form,
            CaseCategory::General,
            &record,
            MediationStrategy::default(),
            PartyQuestions::default(),
        )
    }

    #[test]
    fn test_case_title() {
        assert_eq!(case_title(&PartyInfo::named("Maria Santos")), "Maria Santos Case");
        assert_eq!(case_title(&PartyInfo::named("   ")), DEFAULT_CASE_TITLE);
        assert_eq!(case_title(&PartyInfo::default()), DEFAULT_CASE_TITLE);
    }

    #[test]
    fn test_blank_respondents_dropped() {
        let report = build(&form());
        assert_eq!(report.respondents.len(), 2);
        assert_eq!(report.respondents[0].display_name(), Some("Pedro Reyes"));
        assert_eq!(report.respondents[1].address.as_deref(), Some("Purok 5"));
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let form = form();
        assert_eq!(build(&form), build(&form));
    }

    #[test]
    fn test_copies_form_fields() {
        let form = form();
        let report = build(&form);
        assert_eq!(report.case_id, form.case_id);
        assert_eq!(report.date_received, form.date_received);
        assert_eq!(report.incident, form.incident);
        assert_eq!(report.case_title, "Maria Santos Case");
        assert_eq!(report.category, CaseCategory::General);
    }
}
