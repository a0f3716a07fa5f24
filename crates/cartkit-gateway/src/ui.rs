//! UI surface port.
//!
//! Everything the orchestration layer says to the user goes through this
//! trait: toasts, blocking alerts, the removal confirmation prompt, cart
//! re-renders, and the submit-control busy state. Keeping it behind a trait
//! lets tests script the confirmation prompt and assert on exactly what was
//! surfaced.

use async_trait::async_trait;
use cartkit_commerce::cart::CartDisplay;

/// Informational notifications (toast-style, non-blocking).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A product landed in the cart.
    ItemAdded { name: String },
    /// A new line item opened at a bulk minimum rather than a single unit.
    MinimumApplied { name: String, minimum: i64 },
    /// The cart was emptied.
    CartCleared,
}

impl Notice {
    /// The text shown to the user.
    pub fn message(&self) -> String {
        match self {
            Notice::ItemAdded { name } => format!("{} added", name),
            Notice::MinimumApplied { name, minimum } => {
                format!("Minimum order for {} is {}", name, minimum)
            }
            Notice::CartCleared => "Cart cleared".to_string(),
        }
    }
}

/// Outcome text for the contact form status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    Sent,
    Failed,
}

impl ContactStatus {
    /// The text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            ContactStatus::Sent => "Message sent successfully!",
            ContactStatus::Failed => "Error sending message.",
        }
    }
}

/// The rendering and notification surface the storefront drives.
#[async_trait]
pub trait StoreUi: Send + Sync {
    /// Show a non-blocking notice.
    fn toast(&self, notice: Notice);

    /// Show a blocking alert.
    fn alert(&self, message: &str);

    /// Ask whether an at-minimum item should be removed outright.
    async fn confirm_removal(&self, name: &str, minimum: i64) -> bool;

    /// Replace the rendered cart with a freshly derived display.
    fn render_cart(&self, display: &CartDisplay);

    /// Show or hide the inline delivery-locality error.
    fn set_lga_error_visible(&self, visible: bool);

    /// Disable the submit control and relabel it (e.g. "Verifying...").
    fn submit_busy(&self, label: &str);

    /// Re-enable the submit control and restore its label.
    fn submit_ready(&self);

    /// Update the contact form status line.
    fn contact_status(&self, status: ContactStatus);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_messages() {
        let notice = Notice::MinimumApplied {
            name: "Ice Block".to_string(),
            minimum: 20,
        };
        assert_eq!(notice.message(), "Minimum order for Ice Block is 20");
        assert_eq!(
            Notice::ItemAdded {
                name: "Ice Block".to_string()
            }
            .message(),
            "Ice Block added"
        );
        assert_eq!(Notice::CartCleared.message(), "Cart cleared");
    }

    #[test]
    fn test_contact_status_messages() {
        assert_eq!(ContactStatus::Sent.message(), "Message sent successfully!");
        assert_eq!(ContactStatus::Failed.message(), "Error sending message.");
    }
}
