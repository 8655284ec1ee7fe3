//! Legal knowledge base for barangay complaints.
//!
//! One immutable `LegalRecord` per `CaseCategory`: the legal nature of the
//! case, provisions the respondent may have violated, supporting decisions,
//! and counter-charges the respondent may raise. Built once on first use
//! and shared read-only for the life of the process.

use lupon_model::{CaseCategory, CaseCitation, LegalRecord, Provision};
use once_cell::sync::Lazy;

/// Records for every category. Field access is by exhaustive `match`,
/// so adding a category without a record does not compile.
struct KnowledgeBase {
    theft: LegalRecord,
    threat: LegalRecord,
    defamation: LegalRecord,
    injury: LegalRecord,
    general: LegalRecord,
}

static KNOWLEDGE_BASE: Lazy<KnowledgeBase> = Lazy::new(|| KnowledgeBase {
    theft: theft(),
    threat: threat(),
    defamation: defamation(),
    injury: injury(),
    general: general(),
});

/// Look up the legal record for a category.
pub fn lookup(category: CaseCategory) -> &'static LegalRecord {
    let kb = &*KNOWLEDGE_BASE;
    match category {
        CaseCategory::Theft => &kb.theft,
        CaseCategory::Threat => &kb.threat,
        CaseCategory::Defamation => &kb.defamation,
        CaseCategory::Injury => &kb.injury,
        CaseCategory::General => &kb.general,
    }
}

/// Every record, in category order.
pub fn records() -> impl Iterator<Item = (CaseCategory, &'static LegalRecord)> {
    CaseCategory::ALL.into_iter().map(|c| (c, lookup(c)))
}

// ============================================================================
// Shared counter-charges
// ============================================================================

fn unjust_vexation() -> Provision {
    Provision::new(
        "Unjust Vexation",
        "Article 287, paragraph 2, Revised Penal Code",
        "Any act that annoys, irritates, torments or disturbs another without lawful \
         justification, including the filing of baseless complaints meant to harass.",
        "Arresto menor or a fine, or both",
    )
}

fn perjury() -> Provision {
    Provision::new(
        "Perjury",
        "Article 183, Revised Penal Code",
        "Knowingly making untruthful statements under oath or in an affidavit upon a \
         material matter before a competent person authorized to administer an oath.",
        "Arresto mayor in its maximum period to prisión correccional in its minimum period",
    )
}

// ============================================================================
// Records
// ============================================================================

fn theft() -> LegalRecord {
    LegalRecord {
        nature: "Theft / Qualified Theft".to_string(),
        description: "The taking of personal property belonging to another, with intent to \
                      gain and without the owner's consent, accomplished without violence \
                      against or intimidation of persons nor force upon things."
            .to_string(),
        violations: vec![
            Provision::new(
                "Theft",
                "Article 308, Revised Penal Code",
                "Committed by any person who, with intent to gain but without violence \
                 against or intimidation of persons nor force upon things, takes personal \
                 property of another without the latter's consent; also covers the finder \
                 of lost property who fails to deliver it to the owner or the authorities.",
                "Graduated by the value of the property taken under Article 309, as amended \
                 by Republic Act No. 10951; from arresto menor up to prisión mayor",
            ),
            Provision::new(
                "Qualified Theft",
                "Article 310, Revised Penal Code",
                "Theft committed by a domestic servant or with grave abuse of confidence, or \
                 where the property stolen is a motor vehicle, mail matter, large cattle, \
                 coconuts taken from a plantation, or fish taken from a fishpond.",
                "The penalty next higher by two degrees than that prescribed for simple theft",
            ),
            Provision::new(
                "Cattle Rustling",
                "Presidential Decree No. 533 (Anti-Cattle Rustling Law of 1974)",
                "The taking away by any means, method or scheme, without the consent of the \
                 owner or raiser, of any cow, carabao, horse, mule, ass or other domesticated \
                 member of the bovine family, whether or not for profit or gain.",
                "Prisión mayor in its maximum period to reclusión temporal in its medium \
                 period if committed without violence against or intimidation of persons",
            ),
        ],
        jurisprudence: vec![
            CaseCitation::new(
                "Valenzuela v. People, G.R. No. 160188 (2007)",
                "Theft has no frustrated stage; it is consummated the moment the offender \
                 gains possession of the thing, even if he has no opportunity to dispose of it.",
            ),
            CaseCitation::new(
                "Roque v. People, G.R. No. 138954 (2004)",
                "Grave abuse of confidence that qualifies theft requires a relation of trust \
                 between the offender and the owner that made the taking possible.",
            ),
        ],
        counters: vec![
            Provision::new(
                "Incriminating Innocent Person",
                "Article 363, Revised Penal Code",
                "Any act, not constituting perjury, which directly tends to impute to an \
                 innocent person the commission of a crime, such as planting evidence.",
                "Arresto menor",
            ),
            perjury(),
            unjust_vexation(),
        ],
    }
}

fn threat() -> LegalRecord {
    LegalRecord {
        nature: "Grave Threats / Light Threats".to_string(),
        description: "Threatening another with the infliction upon his person, honor, property \
                      or family of a wrong, whether or not amounting to a crime, with or without \
                      a demand or condition."
            .to_string(),
        violations: vec![
            Provision::new(
                "Grave Threats",
                "Article 282, Revised Penal Code",
                "Threatening another with a wrong amounting to a crime against his person, \
                 honor or property or that of his family, whether or not a condition is \
                 demanded and whether or not the offender attains his purpose.",
                "Depends on whether a condition was imposed and attained; up to the penalty \
                 one degree lower than that for the crime threatened",
            ),
            Provision::new(
                "Light Threats",
                "Article 283, Revised Penal Code",
                "Threatening another with a wrong not amounting to a crime, where a demand for \
                 money or other condition is imposed, even if not unlawful.",
                "Arresto mayor",
            ),
            Provision::new(
                "Other Light Threats",
                "Article 285, Revised Penal Code",
                "Drawing or threatening with a weapon in a quarrel other than in lawful \
                 self-defense, or orally threatening another in the heat of anger with a \
                 harm not constituting a crime.",
                "Arresto menor or a fine",
            ),
        ],
        jurisprudence: vec![
            CaseCitation::new(
                "Reyes v. People, G.R. Nos. L-21528 and L-21529 (1969)",
                "Shouting threats of death at the complainant during a demonstration, \
                 creating fear for his safety, constitutes grave threats.",
            ),
            CaseCitation::new(
                "Caluag v. People, G.R. No. 171511 (2009)",
                "Pointing a gun at the offended party while uttering a threat to kill \
                 supports a conviction for grave threats.",
            ),
        ],
        counters: vec![
            unjust_vexation(),
            Provision::new(
                "Alarms and Scandals",
                "Article 155, Revised Penal Code",
                "Causing disturbance or scandal in public places while intoxicated or \
                 otherwise, or discharging a firearm in a public place to cause alarm.",
                "Arresto menor or a fine",
            ),
            perjury(),
        ],
    }
}

fn defamation() -> LegalRecord {
    LegalRecord {
        nature: "Oral Defamation (Slander) / Libel".to_string(),
        description: "Public and malicious imputation of a crime, vice or defect, real or \
                      imaginary, tending to cause the dishonor, discredit or contempt of a \
                      person, whether spoken, written, or done by deed."
            .to_string(),
        violations: vec![
            Provision::new(
                "Libel",
                "Articles 353 and 355, Revised Penal Code",
                "Defamation committed by means of writing, printing, radio, painting, \
                 theatrical exhibition or any similar means.",
                "Prisión correccional in its minimum and medium periods or a fine, or both",
            ),
            Provision::new(
                "Oral Defamation (Slander)",
                "Article 358, Revised Penal Code",
                "Defamation committed orally; graded as serious or slight according to the \
                 words used, the relation of the parties and the surrounding circumstances.",
                "Arresto mayor maximum to prisión correccional minimum if serious; arresto \
                 menor or a fine if slight",
            ),
            Provision::new(
                "Slander by Deed",
                "Article 359, Revised Penal Code",
                "Any act, not included in another crime, that casts dishonor, discredit or \
                 contempt upon another person, such as slapping in public.",
                "Arresto mayor maximum to prisión correccional minimum if serious; arresto \
                 menor or a fine if not",
            ),
            Provision::new(
                "Cyber Libel",
                "Section 4(c)(4), Republic Act No. 10175 (Cybercrime Prevention Act of 2012)",
                "Libel as defined in Article 355 committed through a computer system or any \
                 similar means, including social media posts.",
                "One degree higher than that provided for libel under the Revised Penal Code",
            ),
        ],
        jurisprudence: vec![
            CaseCitation::new(
                "Villanueva v. People, G.R. No. 160351 (2006)",
                "Whether oral defamation is grave or slight depends on the expressions used, \
                 the personal relations of the parties and the circumstances of the case.",
            ),
            CaseCitation::new(
                "Disini v. Secretary of Justice, G.R. No. 203335 (2014)",
                "Cyber libel is constitutional as applied to the original author of the \
                 post, but not to those who merely receive or react to it.",
            ),
        ],
        counters: vec![
            Provision::new(
                "Oral Defamation (Slander)",
                "Article 358, Revised Penal Code",
                "Available where the complainant also uttered defamatory words against the \
                 respondent during the same exchange.",
                "Arresto menor or a fine if slight",
            ),
            Provision::new(
                "Intriguing Against Honor",
                "Article 364, Revised Penal Code",
                "Any intrigue whose principal purpose is to blemish the honor or reputation \
                 of another person, such as spreading rumors of unknown source.",
                "Arresto menor or a fine",
            ),
            unjust_vexation(),
        ],
    }
}

fn injury() -> LegalRecord {
    LegalRecord {
        nature: "Physical Injuries".to_string(),
        description: "Inflicting physical harm upon another without intent to kill, graded by \
                      the gravity of the injury and the period of medical attendance or \
                      incapacity for labor."
            .to_string(),
        violations: vec![
            Provision::new(
                "Serious Physical Injuries",
                "Article 263, Revised Penal Code",
                "Wounding, beating or assaulting another resulting in insanity, loss of a \
                 body part or its use, deformity, or illness or incapacity for labor of more \
                 than thirty days.",
                "From arresto mayor up to prisión mayor depending on the consequence",
            ),
            Provision::new(
                "Less Serious Physical Injuries",
                "Article 265, Revised Penal Code",
                "Physical injuries that incapacitate the offended party for labor, or require \
                 medical attendance, for ten days or more but not more than thirty days.",
                "Arresto mayor",
            ),
            Provision::new(
                "Slight Physical Injuries and Maltreatment",
                "Article 266, Revised Penal Code",
                "Physical injuries that incapacitate the offended party for labor, or require \
                 medical attendance, for one to nine days, or ill-treatment by deed without \
                 causing injury.",
                "Arresto menor or a fine",
            ),
        ],
        jurisprudence: vec![
            CaseCitation::new(
                "Pentecostes v. People, G.R. No. 167766 (2010)",
                "Where intent to kill is not proven beyond reasonable doubt, the offender is \
                 liable only for physical injuries according to their gravity.",
            ),
            CaseCitation::new(
                "People v. Nugas, G.R. No. 172606 (2011)",
                "Self-defense requires unlawful aggression by the victim; without it, the \
                 justifying circumstance cannot be appreciated.",
            ),
        ],
        counters: vec![
            Provision::new(
                "Slight Physical Injuries",
                "Article 266, Revised Penal Code",
                "Available where the complainant was the aggressor or both parties traded \
                 blows in the same incident.",
                "Arresto menor or a fine",
            ),
            Provision::new(
                "Grave Threats",
                "Article 282, Revised Penal Code",
                "Available where the complainant threatened the respondent before or after \
                 the physical confrontation.",
                "Depends on whether a condition was imposed and attained",
            ),
            unjust_vexation(),
        ],
    }
}

fn general() -> LegalRecord {
    LegalRecord {
        nature: "General Barangay Dispute".to_string(),
        description: "A dispute between residents subject to amicable settlement before the \
                      Lupong Tagapamayapa under the Katarungang Pambarangay."
            .to_string(),
        violations: vec![Provision::new(
            "Katarungang Pambarangay",
            "Sections 399-422, Republic Act No. 7160 (Local Government Code of 1991)",
            "Disputes between individuals residing in the same city or municipality must \
             first undergo mediation before the Punong Barangay and, failing that, \
             conciliation before the Pangkat ng Tagapagkasundo.",
            "No complaint may be filed in court or any government office without a \
             certification to file action from the Lupon secretary (Section 412)",
        )],
        jurisprudence: Vec::new(),
        counters: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_is_total() {
        for category in CaseCategory::ALL {
            let record = lookup(category);
            assert!(!record.nature.is_empty());
            assert!(!record.violations.is_empty());
        }
    }

    #[test]
    fn test_specific_categories_have_citations_and_counters() {
        for category in [
            CaseCategory::Theft,
            CaseCategory::Threat,
            CaseCategory::Defamation,
            CaseCategory::Injury,
        ] {
            let record = lookup(category);
            assert!(!record.jurisprudence.is_empty(), "{:?}", category);
            assert!(!record.counters.is_empty(), "{:?}", category);
        }
    }

    #[test]
    fn test_general_has_no_citations_or_counters() {
        let record = lookup(CaseCategory::General);
        assert!(record.jurisprudence.is_empty());
        assert!(record.counters.is_empty());
        assert!(record.description.contains("Lupong Tagapamayapa"));
    }

    #[test]
    fn test_theft_record() {
        let record = lookup(CaseCategory::Theft);
        assert_eq!(record.nature, "Theft / Qualified Theft");
        let titles: Vec<_> = record.violations.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Theft", "Qualified Theft", "Cattle Rustling"]);
    }

    #[test]
    fn test_lookup_returns_shared_record() {
        let first = lookup(CaseCategory::Injury);
        let second = lookup(CaseCategory::Injury);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_records_in_category_order() {
        let categories: Vec<_> = records().map(|(c, _)| c).collect();
        assert_eq!(categories, CaseCategory::ALL.to_vec());
    }
}
