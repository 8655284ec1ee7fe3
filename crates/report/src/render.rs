//! Report renderers.
//!
//! The pipeline only knows the `ReportRenderer` trait; export, print and
//! display formats live behind it.

use lupon_mediation::format_incident_time;
use lupon_model::{CaseCitation, CaseReport, PartyInfo, Provision, QuestionSet, Role};

/// Trait for turning a finished report into an output document.
pub trait ReportRenderer {
    /// The output type (usually a String document)
    type Output;

    /// Render a report
    fn render(&self, report: &CaseReport) -> Self::Output;
}

/// Escape text for inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const STYLESHEET: &str = r#"
body { font-family: Georgia, "Times New Roman", serif; margin: 2rem auto; max-width: 52rem; color: #222; }
h1 { border-bottom: 2px solid #333; padding-bottom: .3rem; }
h2 { margin-top: 2rem; color: #1f3a5f; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #bbb; padding: .4rem .6rem; text-align: left; vertical-align: top; }
.provision { margin-bottom: 1rem; }
.basis, .penalty { color: #555; font-size: .95em; }
.meta { color: #555; }
@media print {
  .no-print { display: none; }
  body { margin: 0; max-width: none; }
  h2 { page-break-after: avoid; }
}
"#;

/// Standalone printable HTML document.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    /// Include a "Print" button (hidden when printing)
    pub print_button: bool,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self { print_button: true }
    }
}

impl HtmlRenderer {
    fn list(out: &mut String, items: &[String]) {
        if items.is_empty() {
            out.push_str("<p><em>None.</em></p>\n");
            return;
        }
        out.push_str("<ul>\n");
        for item in items {
            out.push_str(&format!("  <li>{}</li>\n", escape_html(item)));
        }
        out.push_str("</ul>\n");
    }

    fn provisions(out: &mut String, provisions: &[Provision]) {
        if provisions.is_empty() {
            out.push_str("<p><em>None.</em></p>\n");
            return;
        }
        for p in provisions {
            out.push_str(&format!(
                "<div class=\"provision\">\n  <strong>{}</strong>\n  <div class=\"basis\">{}</div>\n  <p>{}</p>\n  <div class=\"penalty\">Penalty: {}</div>\n</div>\n",
                escape_html(&p.title),
                escape_html(&p.basis),
                escape_html(&p.text),
                escape_html(&p.penalty)
            ));
        }
    }

    fn citations(out: &mut String, citations: &[CaseCitation]) {
        if citations.is_empty() {
            out.push_str("<p><em>None.</em></p>\n");
            return;
        }
        out.push_str("<ul>\n");
        for c in citations {
            out.push_str(&format!(
                "  <li><strong>{}</strong> &mdash; {}</li>\n",
                escape_html(&c.title),
                escape_html(&c.summary)
            ));
        }
        out.push_str("</ul>\n");
    }

    fn party_row(out: &mut String, label: &str, party: &PartyInfo) {
        let cell = |v: &Option<String>| escape_html(v.as_deref().unwrap_or(""));
        out.push_str(&format!(
            "  <tr><th>{}</th><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            label,
            cell(&party.name),
            cell(&party.phone),
            cell(&party.email),
            cell(&party.address)
        ));
    }

    fn questions(out: &mut String, role: Role, set: &QuestionSet) {
        out.push_str(&format!("<h3>For the {}</h3>\n", role.label()));
        for (heading, questions) in set.groups() {
            out.push_str(&format!("<h4>{}</h4>\n<ol>\n", heading));
            for q in questions {
                out.push_str(&format!("  <li>{}</li>\n", escape_html(q)));
            }
            out.push_str("</ol>\n");
        }
    }
}

impl ReportRenderer for HtmlRenderer {
    type Output = String;

    fn render(&self, report: &CaseReport) -> String {
        let title = escape_html(&report.case_title);
        let mut out = String::with_capacity(16 * 1024);

        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", title));
        out.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLESHEET));

        if self.print_button {
            out.push_str("<button class=\"no-print\" onclick=\"window.print()\">Print</button>\n");
        }

        out.push_str(&format!("<h1>{}</h1>\n<p class=\"meta\">", title));
        if let Some(id) = &report.case_id {
            out.push_str(&format!("Case No. {} &middot; ", escape_html(id)));
        }
        if let Some(received) = &report.date_received {
            out.push_str(&format!("Received {} &middot; ", escape_html(received)));
        }
        out.push_str(&format!("Classification: {}</p>\n", report.category.label()));

        // Parties
        out.push_str("<h2>Parties</h2>\n<table>\n");
        out.push_str("  <tr><th></th><th>Name</th><th>Phone</th><th>Email</th><th>Address</th></tr>\n");
        Self::party_row(&mut out, "Complainant", &report.complainant);
        for (i, respondent) in report.respondents.iter().enumerate() {
            Self::party_row(&mut out, &format!("Respondent {}", i + 1), respondent);
        }
        out.push_str("</table>\n");

        // Incident
        out.push_str("<h2>Incident</h2>\n<table>\n");
        out.push_str(&format!(
            "  <tr><th>Date and Time</th><td>{}</td></tr>\n",
            escape_html(&format_incident_time(&report.incident.date_time))
        ));
        out.push_str(&format!(
            "  <tr><th>Location</th><td>{}</td></tr>\n",
            escape_html(&report.incident.location)
        ));
        out.push_str(&format!(
            "  <tr><th>Summary</th><td>{}</td></tr>\n</table>\n",
            escape_html(&report.incident.summary)
        ));

        // Legal analysis
        let analysis = &report.analysis;
        out.push_str("<h2>Legal Analysis</h2>\n");
        out.push_str(&format!(
            "<p><strong>Nature of the case:</strong> {}</p>\n<p>{}</p>\n",
            escape_html(&analysis.nature),
            escape_html(&analysis.description)
        ));
        out.push_str("<h3>Possible Violations</h3>\n");
        Self::provisions(&mut out, &analysis.violations);
        out.push_str("<h3>Relevant Jurisprudence</h3>\n");
        Self::citations(&mut out, &analysis.jurisprudence);
        out.push_str("<h3>Possible Counter-Charges</h3>\n");
        Self::provisions(&mut out, &analysis.counters);

        // Mediation strategy
        let mediation = &report.mediation;
        out.push_str("<h2>Mediation Strategy</h2>\n<h3>Objectives</h3>\n");
        Self::list(&mut out, &mediation.objectives);
        out.push_str("<h3>Issues to Address</h3>\n");
        Self::list(&mut out, &mediation.issues);
        out.push_str("<h3>Not for Mediation</h3>\n");
        Self::list(&mut out, &mediation.not_for_mediation);
        out.push_str("<h3>Possible Outcomes</h3>\n");
        Self::list(&mut out, &mediation.outcomes);

        // Guide questions
        out.push_str("<h2>Guide Questions</h2>\n");
        for role in [Role::Complainant, Role::Respondent] {
            Self::questions(&mut out, role, report.questions.for_role(role));
        }

        out.push_str("</body>\n</html>\n");
        out
    }
}

/// Plain-text report for terminals.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer;

impl TextRenderer {
    fn section(out: &mut String, heading: &str, items: &[String]) {
        out.push_str(&format!("\n{}:\n", heading));
        if items.is_empty() {
            out.push_str("  (none)\n");
        }
        for item in items {
            out.push_str(&format!("  - {}\n", item));
        }
    }

    fn party(party: &PartyInfo) -> String {
        [&party.name, &party.phone, &party.email, &party.address]
            .iter()
            .filter_map(|f| f.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl ReportRenderer for TextRenderer {
    type Output = String;

    fn render(&self, report: &CaseReport) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n{}\n", report.case_title, "=".repeat(report.case_title.chars().count())));
        if let Some(id) = &report.case_id {
            out.push_str(&format!("Case No.:       {}\n", id));
        }
        if let Some(received) = &report.date_received {
            out.push_str(&format!("Received:       {}\n", received));
        }
        out.push_str(&format!("Classification: {}\n", report.category.label()));
        out.push_str(&format!("Complainant:    {}\n", Self::party(&report.complainant)));
        for respondent in &report.respondents {
            out.push_str(&format!("Respondent:     {}\n", Self::party(respondent)));
        }
        out.push_str(&format!(
            "Incident:       {} at {}\n\n{}\n",
            format_incident_time(&report.incident.date_time),
            report.incident.location,
            report.incident.summary
        ));

        let analysis = &report.analysis;
        out.push_str(&format!("\nNature: {}\n{}\n", analysis.nature, analysis.description));
        let violations: Vec<String> = analysis
            .violations
            .iter()
            .map(|p| format!("{} ({}). Penalty: {}", p.title, p.basis, p.penalty))
            .collect();
        Self::section(&mut out, "Possible violations", &violations);
        let jurisprudence: Vec<String> = analysis
            .jurisprudence
            .iter()
            .map(|c| format!("{}: {}", c.title, c.summary))
            .collect();
        Self::section(&mut out, "Jurisprudence", &jurisprudence);
        let counters: Vec<String> = analysis
            .counters
            .iter()
            .map(|p| format!("{} ({})", p.title, p.basis))
            .collect();
        Self::section(&mut out, "Possible counter-charges", &counters);

        let mediation = &report.mediation;
        Self::section(&mut out, "Objectives", &mediation.objectives);
        Self::section(&mut out, "Issues", &mediation.issues);
        Self::section(&mut out, "Not for mediation", &mediation.not_for_mediation);
        Self::section(&mut out, "Possible outcomes", &mediation.outcomes);

        for role in [Role::Complainant, Role::Respondent] {
            for (heading, questions) in report.questions.for_role(role).groups() {
                Self::section(&mut out, &format!("{} - {}", role.label(), heading), questions);
            }
        }

        out
    }
}
