//! Case report generation.
//!
//! Turns a raw intake form into a `CaseReport`:
//! validate → classify → look up analysis, strategy and questions → assemble.
//! Rendering sits behind the `ReportRenderer` capability so the pipeline
//! never depends on a presentation format.

pub mod assemble;
pub mod pipeline;
pub mod render;
pub mod validate;

pub use assemble::{assemble, case_title, DEFAULT_CASE_TITLE};
pub use pipeline::{generate_report, PipelineConfig, ReportPipeline, Stage};
pub use render::{escape_html, HtmlRenderer, ReportRenderer, TextRenderer};
pub use validate::{parse_date_time, validate, ValidationError, ValidationErrors, ValidationRules};
