//! The "generate report" state machine.
//!
//! ```text
//! Idle → Validating ─┬─ Invalid → Idle
//!                    └─ Classifying → Analyzing → Assembling → Rendered
//! ```
//!
//! Classification runs once per request and the resulting category feeds
//! every derived section of the report.

use crate::assemble::assemble;
use crate::render::ReportRenderer;
use crate::validate::{validate, ValidationErrors, ValidationRules};
use lupon_classify::classify;
use lupon_knowledge::lookup;
use lupon_mediation::{generate_party_questions, strategize};
use lupon_model::{CaseReport, FormData};

/// Where a generation request currently is.
///
/// `Idle`, `Assembling` and `Rendered` are the states a request settles
/// in; the others are only passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Validating,
    Invalid,
    Classifying,
    Analyzing,
    Assembling,
    Rendered,
}

impl Default for Stage {
    fn default() -> Self {
        Self::Idle
    }
}

/// Configuration for the report pipeline.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub rules: ValidationRules,
}

/// Runs generation requests and tracks the last stage reached.
#[derive(Debug, Default)]
pub struct ReportPipeline {
    config: PipelineConfig,
    stage: Stage,
}

impl ReportPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            stage: Stage::Idle,
        }
    }

    /// Last stage reached: `Idle` after a rejected form, `Assembling`
    /// after `generate`, `Rendered` after `generate_and_render`.
    ///
    /// `Assembling` is final for callers that take the report without
    /// rendering it; the next request starts over from `Validating`.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn enter(&mut self, stage: Stage) {
        tracing::debug!(from = ?self.stage, to = ?stage, "Report pipeline transition");
        self.stage = stage;
    }

    /// Validate the form and assemble a report.
    pub fn generate(&mut self, form: &FormData) -> Result<CaseReport, ValidationErrors> {
        self.enter(Stage::Validating);
        let validated = match validate(form, &self.config.rules) {
            Ok(validated) => validated,
            Err(errors) => {
                self.enter(Stage::Invalid);
                for error in errors.errors() {
                    tracing::warn!(field = error.field(), "{}", error);
                }
                self.enter(Stage::Idle);
                return Err(errors);
            }
        };

        self.enter(Stage::Classifying);
        let category = classify(&validated.incident.summary);

        self.enter(Stage::Analyzing);
        let analysis = lookup(category);
        let mediation = strategize(category);
        let questions = generate_party_questions(
            category,
            &validated.incident.location,
            Some(validated.incident.date_time),
        );

        self.enter(Stage::Assembling);
        let report = assemble(&validated, category, analysis, mediation, questions);

        tracing::info!(
            case_title = %report.case_title,
            category = ?category,
            respondents = report.respondents.len(),
            "Case report assembled"
        );

        Ok(report)
    }

    /// Generate a report and hand it to `renderer`.
    pub fn generate_and_render<R: ReportRenderer>(
        &mut self,
        form: &FormData,
        renderer: &R,
    ) -> Result<R::Output, ValidationErrors> {
        let report = self.generate(form)?;
        let output = renderer.render(&report);
        self.enter(Stage::Rendered);
        Ok(output)
    }
}

/// One-shot generation with the given rules.
pub fn generate_report(form: &FormData, rules: &ValidationRules) -> Result<CaseReport, ValidationErrors> {
    ReportPipeline::new(PipelineConfig {
        rules: rules.clone(),
    })
    .generate(form)
}
