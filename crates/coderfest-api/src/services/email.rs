//! Confirmation email service.
//!
//! Sends the registration confirmation to the team leader over SMTP, with
//! the event coordinator in CC. Sending is best-effort; callers log failures
//! and never let them affect the request outcome.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;
use tracing::info;

use coderfest_core::constants::{EVENT_DATE, EVENT_NAME, EVENT_ORGANIZER, EVENT_VENUE};
use coderfest_core::{Config, Registration};

/// SMTP-backed confirmation mailer. `None` from [`EmailService::from_config`]
/// means email is disabled or unconfigured and confirmations are skipped.
#[derive(Clone)]
pub struct EmailService {
    mailer: Arc<AsyncSmtpTransport<Tokio1Executor>>,
    from: String,
    coordinator: Option<String>,
}

impl EmailService {
    /// Create the service from config. Returns `None` when email is disabled
    /// or SMTP host/from are not configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        if !config.email_enabled() {
            tracing::debug!("Confirmation emails disabled (EMAIL_ENABLED=false)");
            return None;
        }
        let host = config.smtp_host()?;
        let from = config.smtp_from()?.to_string();
        let credentials = match (config.smtp_user(), config.smtp_password()) {
            (Some(u), Some(p)) => Some((u.to_string(), p.to_string())),
            _ => None,
        };

        let service = Self::new(
            host,
            config.smtp_port(),
            config.smtp_tls(),
            credentials,
            from,
            config.coordinator_email().map(String::from),
        )
        .ok()?;

        tracing::info!(
            host = %host,
            port = config.smtp_port(),
            tls = config.smtp_tls(),
            "Email service initialized"
        );
        Some(service)
    }

    /// Build a mailer against an explicit SMTP endpoint.
    pub fn new(
        host: &str,
        port: u16,
        tls: bool,
        credentials: Option<(String, String)>,
        from: String,
        coordinator: Option<String>,
    ) -> Result<Self, String> {
        let builder = if tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host).map_err(|e| e.to_string())?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
        };
        let builder = builder.port(port);
        let builder = match credentials {
            Some((user, password)) => builder.credentials(Credentials::new(user, password)),
            None => builder,
        };

        Ok(Self {
            mailer: Arc::new(builder.build()),
            from,
            coordinator,
        })
    }

    /// Send the confirmation for an accepted registration to the team leader,
    /// CC the coordinator when configured.
    pub async fn send_confirmation(&self, registration: &Registration) -> Result<(), String> {
        let from_addr: Mailbox = self
            .from
            .parse()
            .map_err(|e| format!("Invalid SMTP_FROM: {}", e))?;
        let to_addr: Mailbox = registration
            .leader_email
            .parse()
            .map_err(|e| format!("Invalid leader email: {}", e))?;

        let mut builder = Message::builder()
            .from(from_addr)
            .to(to_addr)
            .subject(format!(
                "Registration Confirmed - {} | Team: {}",
                EVENT_NAME, registration.team_name
            ));
        let cc_addr: Option<Mailbox> = self.coordinator.as_ref().and_then(|c| c.parse().ok());
        if let Some(cc) = cc_addr {
            builder = builder.cc(cc);
        }

        let email = builder
            .header(ContentType::TEXT_PLAIN)
            .body(confirmation_body(registration))
            .map_err(|e| e.to_string())?;

        self.mailer.send(email).await.map_err(|e| e.to_string())?;
        info!(
            registration_id = %registration.registration_id,
            "Confirmation email delivered to SMTP relay"
        );
        Ok(())
    }
}

/// Plain-text confirmation body: registration details, team roster, and
/// event information.
fn confirmation_body(registration: &Registration) -> String {
    let mut body = String::new();
    body.push_str(&format!(
        "Registration Confirmed - {}\n\n\
         Your team has been successfully registered for {}!\n\n",
        EVENT_NAME, EVENT_NAME
    ));

    body.push_str("Registration Details\n");
    body.push_str(&format!(
        "  Registration ID: {}\n  Team Name: {}\n  Team Leader: {}\n  College: {}\n  Contact: {}\n\n",
        registration.registration_id,
        registration.team_name,
        registration.leader_name,
        registration.college_name,
        registration.leader_contact
    ));

    body.push_str("Team Members\n");
    for (i, student) in registration.students.iter().enumerate() {
        body.push_str(&format!(
            "  Student {}: {} (Email: {} | Contact: {})\n",
            i + 1,
            student.name,
            student.email,
            student.contact
        ));
    }

    body.push_str(&format!(
        "\nEvent Details\n  Date: {}\n  Venue: {}\n  Organized by: {}\n\n",
        EVENT_DATE, EVENT_VENUE, EVENT_ORGANIZER
    ));

    body.push_str(
        "What to Expect\n\
         - AI tools are allowed and encouraged\n\
         - High-speed WiFi facility available\n\
         - Complimentary refreshments\n\
         - Certificates for all participants\n\
         - Exciting prizes for winners\n\n\
         Important Notes\n\
         - Save this email for your records\n\
         - Further details will be shared closer to the event date\n\
         - Bring your student ID cards on the event day\n\n\
         This is an automated confirmation email.\n",
    );

    body
}
