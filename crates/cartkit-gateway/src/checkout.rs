//! Checkout orchestration.
//!
//! Coordinates one submit attempt end to end: ordered validation, the charge,
//! the order notification, and the view transition. Nothing here propagates
//! as a panic or an unhandled error; every exit path is a [`SubmitOutcome`]
//! plus the matching UI surface calls, and the submit control is restored on
//! every path that disabled it.

use crate::config::StoreConfig;
use crate::error::GatewayError;
use crate::payment::{ChargeRequest, PaymentError, PaymentProvider, PaymentReference};
use crate::ui::{Notice, StoreUi};
use crate::webhook::WebhookSink;
use cartkit_commerce::cart::{Cart, CartDisplay};
use cartkit_commerce::checkout::{CheckoutForm, OrderPayload, ViewState, WebhookPayload};
use cartkit_commerce::StoreError;
use chrono::Utc;

/// Label on the submit control while a submission is in flight.
pub const SUBMIT_BUSY_LABEL: &str = "Verifying...";

const EMPTY_CART_ALERT: &str = "Cart is empty";
const NOT_COMPLETED_ALERT: &str = "Transaction was not completed.";

/// How one submit attempt ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Payment made and order notification delivered.
    Completed { reference: PaymentReference },
    /// Validation stopped the attempt before any money moved.
    Rejected(StoreError),
    /// A collaborator failed; see the error for whether funds moved.
    Failed(GatewayError),
}

impl SubmitOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitOutcome::Completed { .. })
    }
}

/// Run one checkout submission to completion.
///
/// The caller is expected to have the checkout view open; the cart and view
/// are only touched on the full success path.
pub async fn submit(
    config: &StoreConfig,
    cart: &mut Cart,
    view: &mut ViewState,
    form: &mut CheckoutForm,
    payment: &dyn PaymentProvider,
    webhook: &dyn WebhookSink,
    ui: &dyn StoreUi,
) -> SubmitOutcome {
    match form.validate(cart.subtotal(), &config.delivery_locality) {
        Ok(()) => ui.set_lga_error_visible(false),
        Err(err @ StoreError::IneligibleLocality(_)) => {
            ui.set_lga_error_visible(true);
            return SubmitOutcome::Rejected(err);
        }
        Err(StoreError::BotDetected) => {
            // Silent by contract: no alert, no toast, no error text.
            tracing::debug!("checkout submission discarded by honeypot");
            return SubmitOutcome::Rejected(StoreError::BotDetected);
        }
        Err(err) => {
            ui.alert(EMPTY_CART_ALERT);
            return SubmitOutcome::Rejected(err);
        }
    }

    ui.submit_busy(SUBMIT_BUSY_LABEL);

    let request = ChargeRequest::new(config, &form.email, &form.phone, cart.subtotal());
    let reference = match payment.charge(request).await {
        Ok(reference) => reference,
        Err(PaymentError::Abandoned) => {
            tracing::info!("payment popup dismissed without completing");
            ui.submit_ready();
            ui.alert(NOT_COMPLETED_ALERT);
            return SubmitOutcome::Failed(GatewayError::Payment(PaymentError::Abandoned));
        }
        Err(err) => {
            tracing::warn!(%err, "charge attempt failed");
            ui.submit_ready();
            ui.alert(&err.to_string());
            return SubmitOutcome::Failed(GatewayError::Payment(err));
        }
    };

    tracing::info!(%reference, "payment confirmed, notifying order intake");
    let payload = WebhookPayload::Order(OrderPayload::assemble(form, cart, reference.as_str(), Utc::now()));

    match webhook.deliver(&payload).await {
        Ok(()) => {
            cart.clear();
            ui.toast(Notice::CartCleared);
            ui.render_cart(&CartDisplay::from_cart(cart));
            form.reset();
            if let Err(err) = view.complete() {
                tracing::warn!(%err, "order completed outside the checkout view");
            }
            ui.submit_ready();
            tracing::info!(%reference, "order placed");
            SubmitOutcome::Completed { reference }
        }
        Err(err) => {
            // Funds have already moved; the order stands even though the
            // notification did not get through. Cart and view stay put.
            tracing::error!(%reference, %err, "order notification failed after payment");
            ui.submit_ready();
            ui.alert(&format!(
                "Payment successful! But we had trouble sending the notification. \
                 Please contact us with Ref: {}",
                reference
            ));
            SubmitOutcome::Failed(GatewayError::OrderDeliveryFailed {
                reference,
                source: err,
            })
        }
    }
}
