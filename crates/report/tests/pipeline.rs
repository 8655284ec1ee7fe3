use lupon_model::{CaseCategory, FormData, PartyInfo, Role};
use lupon_report::{
    generate_report, HtmlRenderer, ReportPipeline, Stage, ValidationError, ValidationRules,
};
use pretty_assertions::assert_eq;

fn carabao_form() -> FormData {
    FormData {
        case_id: Some("BC-2024-017".to_string()),
        date_received: Some("2024-05-02".to_string()),
        complainant: PartyInfo::named("Maria Santos"),
        respondents: vec![PartyInfo::named("Pedro Reyes"), PartyInfo::default()],
        summary: "Someone took my neighbor's carabao while I was sleeping".to_string(),
        location: "Purok 3, San Pedro City".to_string(),
        date_time: "2024-05-01T20:00".to_string(),
    }
}

#[test]
fn carabao_theft_end_to_end() {
    let report = generate_report(&carabao_form(), &ValidationRules::default()).unwrap();

    assert_eq!(report.category, CaseCategory::Theft);
    assert_eq!(report.case_title, "Maria Santos Case");
    assert_eq!(report.analysis.nature, "Theft / Qualified Theft");
    assert!(report
        .mediation
        .issues
        .iter()
        .any(|i| i == "Return of the allegedly stolen property or restitution of its value"));

    let first = &report.questions.complainant.open_ended[0];
    assert!(first.contains("Purok 3, San Pedro City"));
    assert!(first.contains("May 1, 2024 at 8:00 PM"));

    assert_eq!(report.respondents, vec![PartyInfo::named("Pedro Reyes")]);
}

#[test]
fn questions_have_three_per_group_for_both_roles() {
    let report = generate_report(&carabao_form(), &ValidationRules::default()).unwrap();
    for role in [Role::Complainant, Role::Respondent] {
        for (_, questions) in report.questions.for_role(role).groups() {
            assert_eq!(questions.len(), 3);
        }
    }
}

#[test]
fn short_summary_produces_no_report() {
    let mut form = carabao_form();
    form.summary = "Someone took my neighbor's cow".to_string();
    assert_eq!(form.summary.chars().count(), 30);
    assert!(generate_report(&form, &ValidationRules::default()).is_ok());

    form.summary = "Someone took my neighbor's ox.".chars().take(29).collect();
    assert_eq!(form.summary.chars().count(), 29);

    let mut pipeline = ReportPipeline::default();
    let errors = pipeline
        .generate_and_render(&form, &HtmlRenderer::default())
        .unwrap_err();
    assert_eq!(
        errors.errors(),
        &[ValidationError::SummaryTooShort { min: 30, actual: 29 }]
    );
    assert_eq!(pipeline.stage(), Stage::Idle);
}

#[test]
fn generation_is_deterministic() {
    let rules = ValidationRules::default();
    let first = generate_report(&carabao_form(), &rules).unwrap();
    let second = generate_report(&carabao_form(), &rules).unwrap();
    assert_eq!(first, second);
}

#[test]
fn report_serializes_with_camel_case_fields() {
    let report = generate_report(&carabao_form(), &ValidationRules::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["category"], "theft");
    assert_eq!(json["caseTitle"], "Maria Santos Case");
    assert_eq!(json["incident"]["location"], "Purok 3, San Pedro City");
    assert!(json["questions"]["respondent"]["openEnded"].is_array());
}
