//! Guide questions for the mediation hearing.
//!
//! Every set holds five groups of three questions. Only the first
//! open-ended question is a template; it names the incident location and
//! the incident date/time in Philippine Standard Time.

use chrono::{DateTime, Utc};
use chrono_tz::Asia::Manila;
use lupon_model::{CaseCategory, PartyQuestions, QuestionSet, Role};

/// Substituted when the form carries no location.
pub const LOCATION_PLACEHOLDER: &str = "the location";

const OPEN_ENDED_FOLLOW_UPS: [&str; 2] = [
    "How has this incident affected you and your family?",
    "What would you like to see happen as a result of this mediation?",
];

const CLARIFYING: [&str; 3] = [
    "Who else was present or witnessed what happened?",
    "What exactly was said or done, and in what order?",
    "Have there been earlier incidents or disagreements between you and the other party?",
];

const REFLECTIVE: [&str; 3] = [
    "It sounds like this situation has caused you real distress; is that a fair description?",
    "What do you think the other party might be feeling about this?",
    "Looking back, is there anything you wish had been done differently?",
];

const EXPLORATORY: [&str; 3] = [
    "What options do you think could fairly resolve this matter?",
    "What would you need from the other party to consider this settled?",
    "How would you like your relationship with the other party to be from now on?",
];

const CONSCIENCE: [&str; 3] = [
    "As a member of this community, what do you believe is the right thing to do here?",
    "How would you want to be treated if you were in the other party's place?",
    "What example would you like to set for your family and neighbors in how this is resolved?",
];

/// Format an incident timestamp in Philippine Standard Time,
/// e.g. "May 1, 2024 at 8:00 PM".
pub fn format_incident_time(date_time: &DateTime<Utc>) -> String {
    date_time
        .with_timezone(&Manila)
        .format("%B %-d, %Y at %-I:%M %p")
        .to_string()
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Generate the guide questions for one party.
///
/// The wording is currently the same for every category and both roles;
/// both are accepted so per-case variation can be added without changing
/// callers.
pub fn generate_questions(
    category: CaseCategory,
    role: Role,
    location: &str,
    date_time: Option<DateTime<Utc>>,
) -> QuestionSet {
    tracing::trace!(category = ?category, role = ?role, "Generating guide questions");

    let location = match location.trim() {
        "" => LOCATION_PLACEHOLDER,
        trimmed => trimmed,
    };
    let when = date_time
        .as_ref()
        .map(format_incident_time)
        .unwrap_or_default();

    let mut open_ended = vec![format!(
        "Can you describe in your own words what happened at {} on {}?",
        location, when
    )];
    open_ended.extend(owned(&OPEN_ENDED_FOLLOW_UPS));

    QuestionSet {
        open_ended,
        clarifying: owned(&CLARIFYING),
        reflective: owned(&REFLECTIVE),
        exploratory: owned(&EXPLORATORY),
        conscience: owned(&CONSCIENCE),
    }
}

/// Generate question sets for both parties.
pub fn generate_party_questions(
    category: CaseCategory,
    location: &str,
    date_time: Option<DateTime<Utc>>,
) -> PartyQuestions {
    PartyQuestions {
        complainant: generate_questions(category, Role::Complainant, location, date_time),
        respondent: generate_questions(category, Role::Respondent, location, date_time),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn may_first_8pm_manila() -> DateTime<Utc> {
        // 20:00 in Manila (UTC+8)
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_every_group_has_three_questions() {
        for category in CaseCategory::ALL {
            for role in [Role::Complainant, Role::Respondent] {
                let set = generate_questions(category, role, "Purok 3", Some(may_first_8pm_manila()));
                for (heading, questions) in set.groups() {
                    assert_eq!(questions.len(), 3, "{} for {:?}/{:?}", heading, category, role);
                }
            }
        }
    }

    #[test]
    fn test_first_question_interpolates_location_and_time() {
        let set = generate_questions(
            CaseCategory::Theft,
            Role::Complainant,
            "Purok 3, San Pedro City",
            Some(may_first_8pm_manila()),
        );
        assert_eq!(
            set.open_ended[0],
            "Can you describe in your own words what happened at Purok 3, San Pedro City on May 1, 2024 at 8:00 PM?"
        );
    }

    #[test]
    fn test_missing_location_and_time() {
        let set = generate_questions(CaseCategory::General, Role::Respondent, "  ", None);
        assert_eq!(
            set.open_ended[0],
            "Can you describe in your own words what happened at the location on ?"
        );
    }

    #[test]
    fn test_roles_share_wording() {
        let both = generate_party_questions(CaseCategory::Injury, "Sitio Maligaya", None);
        assert_eq!(both.complainant, both.respondent);
    }

    #[test]
    fn test_format_converts_to_manila() {
        let utc_midnight = Utc.with_ymd_and_hms(2024, 12, 31, 16, 30, 0).unwrap();
        assert_eq!(format_incident_time(&utc_midnight), "January 1, 2025 at 12:30 AM");
    }
}
