//! Process flagged issues and send reminders

use std::path::Path;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use log::warn;

use relnag::adapters::templates::NAG_TEMPLATES;
use relnag::adapters::{CompiledTemplates, JsonDirectory, SmtpMailer, load_issues};
use relnag::config::Config;
use relnag::core::services::NagRun;
use relnag::output::{OutputMode, RunOutput};
use relnag::paths;

/// Run one nag pass over the issues in `issues`
pub fn run(
    config_path: &Path,
    issues: &Path,
    phonebook: Option<&Path>,
    date: Option<NaiveDate>,
    title: Option<&str>,
    dry_run: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;

    let phonebook = phonebook
        .map(Path::to_path_buf)
        .or_else(|| config.phonebook.clone())
        .unwrap_or_else(paths::default_phonebook);
    let directory = JsonDirectory::load(&phonebook)?;
    let candidates = load_issues(issues)?;

    let policy = config.policy();
    if let Some(template) = policy.template.as_deref() {
        if !CompiledTemplates::has_nag_template(template) {
            warn!("unknown nag template {template}; available: {}", NAG_TEMPLATES.join(", "));
        }
    } else {
        warn!("no nag template configured, no messages will be prepared");
    }

    let mailer = match &config.smtp {
        Some(smtp) if !dry_run => {
            SmtpMailer::from_config(smtp).context("failed to set up SMTP transport")?
        },
        _ => SmtpMailer::offline(),
    };

    let settings = config.delivery_settings();
    let calendar = config.calendar();
    let renderer = CompiledTemplates;
    let nag = NagRun {
        directory: &directory,
        calendar: &calendar,
        renderer: &renderer,
        mailer: &mailer,
        policy: &policy,
        settings: &settings,
        today: date.unwrap_or_else(|| Local::now().date_naive()),
    };

    let title = title.unwrap_or(&config.nag.title);
    let report = nag.execute(&candidates, title, dry_run)?;

    RunOutput {
        dry_run,
        send_enabled: settings.send,
        report,
    }
    .render(mode);

    Ok(())
}
