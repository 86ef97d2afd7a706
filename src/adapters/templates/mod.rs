//! Compiled HTML templates
//!
//! Templates live in `templates/` and are compiled into the binary by
//! askama. Nag templates are looked up by file name so configuration can
//! pick one per policy.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::core::error::TemplateError;
use crate::core::models::ReminderItem;
use crate::core::ports::{EnvelopeContext, NagContext, TemplateRenderer};

/// Envelope wrapped around every message
pub const ENVELOPE_TEMPLATE: &str = "common.html";

/// Nag templates available to configuration
pub const NAG_TEMPLATES: [&str; 2] = ["tracking_nag.html", "regression_nag.html"];

#[derive(askama::Template)]
#[template(path = "common.html")]
struct Common<'a> {
    message: &'a str,
    query_url: Option<&'a str>,
    has_table: bool,
}

#[derive(askama::Template)]
#[template(path = "tracking_nag.html")]
struct TrackingNag<'a> {
    date: NaiveDate,
    extra: &'a BTreeMap<String, String>,
    data: &'a [ReminderItem],
}

#[derive(askama::Template)]
#[template(path = "regression_nag.html")]
struct RegressionNag<'a> {
    date: NaiveDate,
    extra: &'a BTreeMap<String, String>,
    data: &'a [ReminderItem],
}

/// Renderer over the compiled template set
#[derive(Debug, Clone, Copy, Default)]
pub struct CompiledTemplates;

impl CompiledTemplates {
    /// Whether a nag template is registered under `name`
    #[must_use]
    pub fn has_nag_template(name: &str) -> bool {
        NAG_TEMPLATES.contains(&name)
    }
}

fn render_as(name: &str, template: &impl askama::Template) -> Result<String, TemplateError> {
    template.render().map_err(|e| TemplateError::Render {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

impl TemplateRenderer for CompiledTemplates {
    fn render_nag(&self, name: &str, context: &NagContext) -> Result<String, TemplateError> {
        match name {
            "tracking_nag.html" => render_as(
                name,
                &TrackingNag {
                    date: context.date,
                    extra: &context.extra,
                    data: &context.data,
                },
            ),
            "regression_nag.html" => render_as(
                name,
                &RegressionNag {
                    date: context.date,
                    extra: &context.extra,
                    data: &context.data,
                },
            ),
            _ => Err(TemplateError::NotFound(name.to_string())),
        }
    }

    fn render_envelope(&self, context: &EnvelopeContext) -> Result<String, TemplateError> {
        render_as(
            ENVELOPE_TEMPLATE,
            &Common {
                message: &context.message,
                query_url: context.query_url.as_deref(),
                has_table: context.has_table,
            },
        )
    }
}
