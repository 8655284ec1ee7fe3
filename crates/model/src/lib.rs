//! Core domain model for Lupon barangay case intake.
//!
//! This crate defines the fundamental types used throughout the system:
//! - `CaseCategory`: The classification that keys every downstream lookup
//! - `LegalRecord`: Provisions, penalties and citations for a category
//! - `MediationStrategy` / `QuestionSet`: Guidance for the mediator
//! - `FormData` / `ValidatedForm`: Intake form values before and after validation
//! - `CaseReport`: The assembled report handed to a renderer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseCategory {
    /// Taking of property
    Theft,
    /// Threats or intimidation
    Threat,
    /// Slander, libel, insults
    Defamation,
    /// Physical injuries
    Injury,
    /// Anything else subject to barangay conciliation
    General,
}

impl Default for CaseCategory {
    fn default() -> Self {
        Self::General
    }
}

impl CaseCategory {
    /// Every category, in classifier precedence order.
    pub const ALL: [CaseCategory; 5] = [
        Self::Theft,
        Self::Threat,
        Self::Defamation,
        Self::Injury,
        Self::General,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Theft => "Theft",
            Self::Threat => "Threat",
            Self::Defamation => "Defamation",
            Self::Injury => "Physical Injury",
            Self::General => "General Dispute",
        }
    }
}

impl From<&str> for CaseCategory {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "theft" => Self::Theft,
            "threat" | "threats" => Self::Threat,
            "defamation" => Self::Defamation,
            "injury" | "injuries" => Self::Injury,
            _ => Self::General,
        }
    }
}

/// Which side of the dispute a question set is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Complainant,
    Respondent,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Complainant => "Complainant",
            Self::Respondent => "Respondent",
        }
    }
}

/// A statutory or ordinance provision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provision {
    /// Offense or remedy name
    pub title: String,
    /// Statute/ordinance reference (e.g., "Article 308, Revised Penal Code")
    pub basis: String,
    /// What the provision covers
    pub text: String,
    /// Penalty in descriptive form
    pub penalty: String,
}

impl Provision {
    pub fn new(
        title: impl Into<String>,
        basis: impl Into<String>,
        text: impl Into<String>,
        penalty: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            basis: basis.into(),
            text: text.into(),
            penalty: penalty.into(),
        }
    }
}

/// A decided case relevant to a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseCitation {
    pub title: String,
    pub summary: String,
}

impl CaseCitation {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
        }
    }
}

/// Legal analysis for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalRecord {
    /// Legal nature of the case (e.g., "Theft / Qualified Theft")
    pub nature: String,

    pub description: String,

    /// Provisions the respondent may have violated
    pub violations: Vec<Provision>,

    /// Supporting decisions
    #[serde(default)]
    pub jurisprudence: Vec<CaseCitation>,

    /// Counter-charges available to the respondent
    #[serde(default)]
    pub counters: Vec<Provision>,
}

/// Mediation guidance for one category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediationStrategy {
    pub objectives: Vec<String>,
    pub issues: Vec<String>,
    pub not_for_mediation: Vec<String>,
    pub outcomes: Vec<String>,
}

/// Guide questions for one party.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSet {
    pub open_ended: Vec<String>,
    pub clarifying: Vec<String>,
    pub reflective: Vec<String>,
    pub exploratory: Vec<String>,
    pub conscience: Vec<String>,
}

impl QuestionSet {
    /// Question groups paired with their display headings, in report order.
    pub fn groups(&self) -> [(&'static str, &[String]); 5] {
        [
            ("Open-Ended Questions", self.open_ended.as_slice()),
            ("Clarifying Questions", self.clarifying.as_slice()),
            ("Reflective Questions", self.reflective.as_slice()),
            ("Exploratory Questions", self.exploratory.as_slice()),
            ("Appeal to Conscience", self.conscience.as_slice()),
        ]
    }
}

/// Question sets for both parties.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartyQuestions {
    pub complainant: QuestionSet,
    pub respondent: QuestionSet,
}

impl PartyQuestions {
    pub fn for_role(&self, role: Role) -> &QuestionSet {
        match role {
            Role::Complainant => &self.complainant,
            Role::Respondent => &self.respondent,
        }
    }
}

/// Contact details of a complainant or respondent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartyInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl PartyInfo {
    /// Create a party with only a name, for testing and CLI flags.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// True when no field carries any text.
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.phone, &self.email, &self.address]
            .iter()
            .all(|field| field.as_deref().map_or(true, |s| s.trim().is_empty()))
    }

    /// Trimmed name, if one was entered.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Raw intake form values, exactly as entered.
///
/// UI layers read their fields into this struct and hand it to the
/// report pipeline; nothing here has been validated yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,

    /// Date the complaint was received (free text, e.g. "2024-05-02")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_received: Option<String>,

    #[serde(default)]
    pub complainant: PartyInfo,

    #[serde(default)]
    pub respondents: Vec<PartyInfo>,

    /// Free-text incident summary
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub location: String,

    /// Date/time of the incident as typed (e.g. "2024-05-01T20:00")
    #[serde(default)]
    pub date_time: String,
}

/// Validated incident details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentInfo {
    pub summary: String,
    pub location: String,
    pub date_time: DateTime<Utc>,
}

/// Intake form that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedForm {
    pub case_id: Option<String>,
    pub date_received: Option<String>,
    pub complainant: PartyInfo,
    pub respondents: Vec<PartyInfo>,
    pub incident: IncidentInfo,
}

/// The assembled case report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_received: Option<String>,

    pub complainant: PartyInfo,

    /// Respondents with at least one non-empty field, in form order
    pub respondents: Vec<PartyInfo>,

    pub incident: IncidentInfo,

    pub case_title: String,

    /// Classification every derived section was computed from
    pub category: CaseCategory,

    pub analysis: LegalRecord,

    pub mediation: MediationStrategy,

    pub questions: PartyQuestions,
}
