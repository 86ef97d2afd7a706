//! Fake implementations of port traits for testing
//!
//! These fakes provide deterministic behavior for unit testing
//! without real I/O operations.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use chrono::NaiveDate;
use relnag::core::error::{CalendarError, DeliveryError, ResolutionError, TemplateError};
use relnag::core::models::OutgoingMail;
use relnag::core::ports::{
    Directory, EnvelopeContext, Mailer, NagContext, ReleaseCalendar, TemplateRenderer,
};

/// In-memory org chart
///
/// ```text
/// vp@corp.com            (VP)
/// └── dir@corp.com       (director)
///     ├── lead@corp.com
///     │   ├── dev@corp.com   (alias dev@bugs.corp.org)
///     │   └── dev2@corp.com
///     └── lead2@corp.com
///         └── qa@corp.com
/// ```
pub struct FakeDirectory {
    managers: HashMap<String, String>,
    members: HashSet<String>,
    aliases: HashMap<String, String>,
    directors: HashSet<String>,
    vps: HashSet<String>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        let managers: HashMap<String, String> = [
            ("dev@corp.com", "lead@corp.com"),
            ("dev2@corp.com", "lead@corp.com"),
            ("qa@corp.com", "lead2@corp.com"),
            ("lead@corp.com", "dir@corp.com"),
            ("lead2@corp.com", "dir@corp.com"),
            ("dir@corp.com", "vp@corp.com"),
        ]
        .into_iter()
        .map(|(p, m)| (p.to_string(), m.to_string()))
        .collect();

        let mut members: HashSet<String> = managers.keys().cloned().collect();
        members.insert("vp@corp.com".to_string());

        Self {
            managers,
            members,
            aliases: HashMap::from([("dev@bugs.corp.org".to_string(), "dev@corp.com".to_string())]),
            directors: HashSet::from(["dir@corp.com".to_string()]),
            vps: HashSet::from(["vp@corp.com".to_string()]),
        }
    }

    /// Add a member whose chain ends at themselves (no manager)
    pub fn with_orphan(mut self, email: &str) -> Self {
        self.members.insert(email.to_string());
        self
    }

    fn resolve(&self, email: &str) -> String {
        self.aliases.get(email).cloned().unwrap_or_else(|| email.to_string())
    }

    fn chain(&self, email: &str) -> Vec<String> {
        let mut chain = Vec::new();
        let mut current = self.resolve(email);
        while let Some(manager) = self.managers.get(&current) {
            chain.push(manager.clone());
            current = manager.clone();
        }
        chain
    }

    fn known(&self, email: &str) -> Result<String, ResolutionError> {
        let email = self.resolve(email);
        if self.members.contains(&email) {
            Ok(email)
        } else {
            Err(ResolutionError::UnknownPerson(email))
        }
    }
}

impl Directory for FakeDirectory {
    fn is_org_member(&self, email: &str) -> bool {
        self.members.contains(&self.resolve(email))
    }

    fn canonical_email(&self, email: &str) -> String {
        self.resolve(email)
    }

    fn is_under(&self, email: &str, org_unit: &str) -> bool {
        let email = self.resolve(email);
        email == org_unit || self.chain(&email).iter().any(|m| m == org_unit)
    }

    fn nth_line_manager(&self, email: &str, n: usize) -> Result<String, ResolutionError> {
        let email = self.known(email)?;
        self.chain(&email)
            .get(n - 1)
            .cloned()
            .ok_or(ResolutionError::NoManager { email, level: n })
    }

    fn director_email(&self, email: &str) -> Result<String, ResolutionError> {
        let email = self.known(email)?;
        self.chain(&email)
            .into_iter()
            .find(|m| self.directors.contains(m) || self.vps.contains(m))
            .ok_or(ResolutionError::NoDirector(email))
    }

    fn vp_email(&self, email: &str) -> Result<String, ResolutionError> {
        let email = self.known(email)?;
        self.chain(&email)
            .into_iter()
            .find(|m| self.vps.contains(m))
            .ok_or(ResolutionError::NoVp(email))
    }
}

/// Calendar with a single release date
pub struct FixedCalendar(pub NaiveDate);

impl ReleaseCalendar for FixedCalendar {
    fn next_release_date(&self, _reference: NaiveDate) -> Result<NaiveDate, CalendarError> {
        Ok(self.0)
    }
}

/// Mailer that records every call
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(OutgoingMail, bool)>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(OutgoingMail, bool)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Mailer for RecordingMailer {
    fn send(&self, mail: &OutgoingMail, dryrun: bool) -> Result<(), DeliveryError> {
        if self.fail {
            return Err(DeliveryError::Transport("connection refused".to_string()));
        }
        self.sent.lock().unwrap().push((mail.clone(), dryrun));
        Ok(())
    }
}

/// Renderer that lists item ids, and knows a single template name
pub struct StubRenderer;

pub const STUB_TEMPLATE: &str = "stub.html";

impl TemplateRenderer for StubRenderer {
    fn render_nag(&self, name: &str, context: &NagContext) -> Result<String, TemplateError> {
        if name != STUB_TEMPLATE {
            return Err(TemplateError::NotFound(name.to_string()));
        }
        let ids: Vec<&str> = context.data.iter().map(|i| i.id.as_str()).collect();
        Ok(format!("{}|{}", context.date, ids.join(",")))
    }

    fn render_envelope(&self, context: &EnvelopeContext) -> Result<String, TemplateError> {
        Ok(format!("[{}]", context.message))
    }
}

/// Stub renderer whose envelope fails after the first message
#[derive(Default)]
pub struct FlakyEnvelopeRenderer {
    envelopes: Mutex<usize>,
}

impl TemplateRenderer for FlakyEnvelopeRenderer {
    fn render_nag(&self, name: &str, context: &NagContext) -> Result<String, TemplateError> {
        StubRenderer.render_nag(name, context)
    }

    fn render_envelope(&self, context: &EnvelopeContext) -> Result<String, TemplateError> {
        let mut envelopes = self.envelopes.lock().unwrap();
        *envelopes += 1;
        if *envelopes > 1 {
            return Err(TemplateError::Render {
                name: "envelope".to_string(),
                reason: "unbalanced tag".to_string(),
            });
        }
        StubRenderer.render_envelope(context)
    }
}
