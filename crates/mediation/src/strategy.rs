//! Mediation strategy per case category.

use lupon_model::{CaseCategory, MediationStrategy};

/// Objectives shared by every category.
///
/// Kept as a separate table so categories can diverge later without
/// touching `strategize`'s signature.
const OBJECTIVES: [&str; 5] = [
    "Restore open and respectful communication between the parties",
    "Identify the underlying interests and needs of each party",
    "Explore options for settlement acceptable to both parties",
    "Reach a voluntary written amicable settlement (kasunduan)",
    "Prevent recurrence of the conflict and preserve harmony in the community",
];

/// Category-specific guidance.
struct Guidance {
    issues: &'static [&'static str],
    not_for_mediation: &'static [&'static str],
    outcomes: &'static [&'static str],
}

const THEFT: Guidance = Guidance {
    issues: &[
        "Return of the allegedly stolen property or restitution of its value",
        "Clarification of ownership of the property in question",
        "Acknowledgment of the taking and assurance that it will not be repeated",
        "Compensation for losses or inconvenience arising from the taking",
    ],
    not_for_mediation: &[
        "Theft where the value taken makes the offense punishable by imprisonment exceeding \
         one year or a fine exceeding P5,000 (Section 408, R.A. No. 7160)",
        "Qualified theft and cattle rustling, whose penalties exceed barangay authority",
        "Cases where the respondent is a public officer and the taking relates to official functions",
    ],
    outcomes: &[
        "Return of the property within an agreed period",
        "Payment of the property's value in full or in installments",
        "Written apology and undertaking not to repeat the act",
        "Certification to file action if no settlement is reached",
    ],
};

const THREAT: Guidance = Guidance {
    issues: &[
        "The specific words or acts perceived as threatening and their context",
        "Assurance of safety for the complainant and family",
        "The underlying dispute that gave rise to the threat",
        "Conduct of the parties toward each other going forward",
    ],
    not_for_mediation: &[
        "Grave threats punishable by imprisonment exceeding one year",
        "Threats made with firearms or other deadly weapons",
        "Situations where a party faces imminent danger requiring police protection",
    ],
    outcomes: &[
        "Apology and express retraction of the threat",
        "Undertaking to refrain from contact or harassment",
        "Agreed rules of conduct in shared spaces",
        "Monitoring by barangay officials for an agreed period",
    ],
};

const DEFAMATION: Guidance = Guidance {
    issues: &[
        "The exact statements made, where, and to whom",
        "Harm to the complainant's reputation and relationships",
        "Whether the statements were true, exaggerated or misunderstood",
        "Removal or correction of written or online posts",
    ],
    not_for_mediation: &[
        "Libel and cyber libel, which are punishable by imprisonment exceeding one year",
        "Statements made by public officers in the discharge of official duties",
        "Disputes between residents of non-adjoining cities or municipalities",
    ],
    outcomes: &[
        "Apology made in the same forum where the statement was made",
        "Retraction or deletion of the offending posts",
        "Undertaking to refrain from further remarks",
        "Restoration of working relations between the families",
    ],
};

const INJURY: Guidance = Guidance {
    issues: &[
        "Medical expenses and lost income arising from the injuries",
        "Who initiated the confrontation and why",
        "Safety of the parties in future encounters",
        "The underlying conflict that escalated into violence",
    ],
    not_for_mediation: &[
        "Serious physical injuries punishable by imprisonment exceeding one year",
        "Violence against women and their children (R.A. No. 9262)",
        "Cases where the injured party is still under medical care and the extent of injury is unknown",
    ],
    outcomes: &[
        "Reimbursement of medical expenses and lost wages",
        "Apology and commitment to non-violence",
        "Agreement to avoid provocation and unnecessary contact",
        "Referral to counseling or community support programs",
    ],
};

const GENERAL: Guidance = Guidance {
    issues: &[
        "The core disagreement as each party understands it",
        "The interests behind each party's position",
        "Practical arrangements both parties can accept",
        "Channels for raising future concerns before they escalate",
    ],
    not_for_mediation: &[
        "Offenses punishable by imprisonment exceeding one year or a fine exceeding P5,000",
        "Disputes where one party is the government or a public officer acting officially",
        "Disputes involving real property located in different cities or municipalities",
        "Cases needing urgent court action, such as habeas corpus or support pendente lite",
    ],
    outcomes: &[
        "Written amicable settlement signed before the Lupon",
        "Agreed schedule for carrying out each party's commitments",
        "Follow-up meeting to confirm compliance",
        "Certification to file action if conciliation fails",
    ],
};

fn guidance(category: CaseCategory) -> &'static Guidance {
    match category {
        CaseCategory::Theft => &THEFT,
        CaseCategory::Threat => &THREAT,
        CaseCategory::Defamation => &DEFAMATION,
        CaseCategory::Injury => &INJURY,
        CaseCategory::General => &GENERAL,
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build the mediation strategy for a category.
///
/// Order is fixed; two calls with the same category are equal.
pub fn strategize(category: CaseCategory) -> MediationStrategy {
    let guidance = guidance(category);

    MediationStrategy {
        objectives: owned(&OBJECTIVES),
        issues: owned(guidance.issues),
        not_for_mediation: owned(guidance.not_for_mediation),
        outcomes: owned(guidance.outcomes),
    }
}
