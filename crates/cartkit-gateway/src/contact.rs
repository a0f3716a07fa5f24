//! Contact message orchestration.
//!
//! Far simpler than checkout: no payment, no view transitions. The honeypot
//! rule and the always-restore-the-submit-control contract are the same.

use crate::error::GatewayError;
use crate::ui::{ContactStatus, StoreUi};
use crate::webhook::WebhookSink;
use cartkit_commerce::checkout::{ContactForm, ContactPayload, WebhookPayload};
use cartkit_commerce::StoreError;
use chrono::Utc;

/// Label on the submit control while a message is in flight.
pub const SEND_BUSY_LABEL: &str = "Sending...";

/// How one contact submission ended.
#[derive(Debug)]
pub enum ContactOutcome {
    /// Delivered; the form was reset.
    Sent,
    /// Discarded by the honeypot; nothing surfaced.
    Rejected(StoreError),
    /// Delivery failed; error status shown, no other side effects.
    Failed(GatewayError),
}

/// Run one contact submission to completion.
pub async fn send(
    form: &mut ContactForm,
    webhook: &dyn WebhookSink,
    ui: &dyn StoreUi,
) -> ContactOutcome {
    if let Err(err) = form.validate() {
        tracing::debug!("contact submission discarded by honeypot");
        return ContactOutcome::Rejected(err);
    }

    ui.submit_busy(SEND_BUSY_LABEL);

    let payload = WebhookPayload::Contact(ContactPayload::assemble(form, Utc::now()));
    match webhook.deliver(&payload).await {
        Ok(()) => {
            ui.contact_status(ContactStatus::Sent);
            form.reset();
            ui.submit_ready();
            ContactOutcome::Sent
        }
        Err(err) => {
            tracing::warn!(%err, "contact message delivery failed");
            ui.contact_status(ContactStatus::Failed);
            ui.submit_ready();
            ContactOutcome::Failed(GatewayError::ContactDeliveryFailed(err))
        }
    }
}
