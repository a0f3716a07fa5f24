//! Collaborator ports and checkout orchestration for CartKit.
//!
//! The impure half of the system: the traits the storefront talks through
//! (payment provider, webhook sink, UI surface), the reqwest-backed webhook
//! client, and the orchestrators that coordinate validation, payment, and
//! order notification. All state mutation funnels through [`Storefront`],
//! the single-actor session that owns the cart and the view.

pub mod checkout;
pub mod config;
pub mod contact;
pub mod error;
pub mod payment;
pub mod session;
pub mod ui;
pub mod webhook;

pub use checkout::SubmitOutcome;
pub use config::StoreConfig;
pub use contact::ContactOutcome;
pub use error::GatewayError;
pub use payment::{ChargeRequest, PaymentError, PaymentProvider, PaymentReference};
pub use session::Storefront;
pub use ui::{ContactStatus, Notice, StoreUi};
pub use webhook::{WebhookClient, WebhookError, WebhookSink};
