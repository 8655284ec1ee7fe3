//! Keyword classification of incident summaries.
//!
//! Maps a free-text summary to a `CaseCategory` by walking an ordered
//! cascade of keyword rules. The first rule that matches wins, so the
//! order of `RULES` is the precedence when keywords from several
//! categories appear in the same summary:
//! Theft > Threat > Defamation > Injury > General.

use lupon_model::CaseCategory;
use once_cell::sync::Lazy;
use regex::Regex;

/// Keyword stems per category, in precedence order.
///
/// Each stem matches at the start of a word and may continue, so
/// `takin` covers "taking" and `intimidat` covers "intimidation".
/// A stem inside a longer word does not match: "unhurt", "moral" and
/// "problem" trigger no rule.
pub const RULES: &[(CaseCategory, &[&str])] = &[
    (
        CaseCategory::Theft,
        &[
            "steal", "theft", "stole", "rob", "robbed", "take", "took", "taken", "takin",
            "missing",
        ],
    ),
    (CaseCategory::Threat, &["threat", "kill", "hurt", "intimidat"]),
    (
        CaseCategory::Defamation,
        &["defam", "slander", "insult", "libel", "oral"],
    ),
    (
        CaseCategory::Injury,
        &["injur", "hit", "punch", "physical", "attack"],
    ),
];

/// A compiled keyword rule.
struct Rule {
    category: CaseCategory,
    pattern: Regex,
}

static COMPILED: Lazy<Vec<Rule>> = Lazy::new(|| {
    RULES
        .iter()
        .map(|(category, stems)| {
            let alternation = stems
                .iter()
                .map(|s| regex::escape(s))
                .collect::<Vec<_>>()
                .join("|");
            Rule {
                category: *category,
                pattern: Regex::new(&format!(r"\b(?:{})", alternation))
                    .expect("keyword stems are escaped literals"),
            }
        })
        .collect()
});

/// Classify an incident summary.
///
/// Summaries that match no rule, including empty ones, are `General`.
pub fn classify(summary: &str) -> CaseCategory {
    match matched_keyword(summary) {
        Some((category, keyword)) => {
            tracing::debug!(category = ?category, keyword = %keyword, "Summary classified");
            category
        }
        None => {
            tracing::debug!("No keyword rule matched, falling back to general");
            CaseCategory::General
        }
    }
}

/// Find the winning rule and the text it matched.
pub fn matched_keyword(summary: &str) -> Option<(CaseCategory, String)> {
    let lowered = summary.to_lowercase();

    COMPILED.iter().find_map(|rule| {
        rule.pattern
            .find(&lowered)
            .map(|m| (rule.category, m.as_str().to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theft_keywords() {
        assert_eq!(
            classify("Someone took my neighbor's carabao while I was sleeping"),
            CaseCategory::Theft
        );
        assert_eq!(classify("My bicycle went MISSING from the yard"), CaseCategory::Theft);
        assert_eq!(classify("He was taking coconuts from our lot"), CaseCategory::Theft);
        assert_eq!(classify("They STOLE my phone"), CaseCategory::Theft);
    }

    #[test]
    fn test_each_category() {
        assert_eq!(classify("He threatened to burn our house"), CaseCategory::Threat);
        assert_eq!(classify("She tried to intimidate my mother"), CaseCategory::Threat);
        assert_eq!(classify("He posted defamatory remarks about me"), CaseCategory::Defamation);
        assert_eq!(classify("She insulted me in front of the market vendors"), CaseCategory::Defamation);
        assert_eq!(classify("I was punched near the basketball court"), CaseCategory::Injury);
        assert_eq!(classify("My son was injured during the fight"), CaseCategory::Injury);
        assert_eq!(
            classify("The neighbor plays loud music every night until dawn"),
            CaseCategory::General
        );
    }

    #[test]
    fn test_precedence() {
        // Theft outranks injury
        assert_eq!(classify("He hit me and stole my wallet"), CaseCategory::Theft);
        // Threat outranks defamation
        assert_eq!(classify("He insulted me and threatened my family"), CaseCategory::Threat);
        // Defamation outranks injury
        assert_eq!(classify("She slandered me and then attacked me"), CaseCategory::Defamation);
    }

    #[test]
    fn test_empty_summary_is_general() {
        assert_eq!(classify(""), CaseCategory::General);
        assert_eq!(classify("   "), CaseCategory::General);
    }

    #[test]
    fn test_stems_anchor_at_word_start() {
        // "problem" contains "rob", "white" contains "hit", "moral" contains "oral"
        assert_eq!(
            classify("There is a moral problem with the white fence"),
            CaseCategory::General
        );
    }

    #[test]
    fn test_every_stem_maps_to_its_category() {
        for (category, stems) in RULES {
            for stem in *stems {
                let summary = format!("the {} thing", stem);
                assert_eq!(classify(&summary), *category, "stem {:?}", stem);
            }
        }
    }

    #[test]
    fn test_stem_inside_word() {
        assert_eq!(classify("He claims moral damages"), CaseCategory::General);
        assert_eq!(classify("Luckily the child was unhurt"), CaseCategory::General);
        assert_eq!(classify("He kept hitting him with a stick"), CaseCategory::Injury);
    }

    #[test]
    fn test_matched_keyword() {
        let (category, keyword) = matched_keyword("They were shouting threats at night").unwrap();
        assert_eq!(category, CaseCategory::Threat);
        assert_eq!(keyword, "threat");
        assert_eq!(matched_keyword("a quiet afternoon"), None);
    }

    #[test]
    fn test_rules_cover_every_non_general_category() {
        let ruled: Vec<_> = RULES.iter().map(|(c, _)| *c).collect();
        assert_eq!(&ruled[..], &CaseCategory::ALL[..4]);
    }
}
