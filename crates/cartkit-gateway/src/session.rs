//! Storefront session.
//!
//! The single actor that owns the cart, the view state, and the catalog, and
//! maps user actions to pure cart transitions plus their UI effects. Seasonal
//! pricing is applied to the catalog once, when the session starts.

use crate::checkout::{self, SubmitOutcome};
use crate::config::StoreConfig;
use crate::contact::{self, ContactOutcome};
use crate::payment::PaymentProvider;
use crate::ui::{Notice, StoreUi};
use crate::webhook::WebhookSink;
use cartkit_commerce::cart::{AddOutcome, Cart, CartDisplay, DecreaseOutcome};
use cartkit_commerce::catalog::{apply_seasonal_pricing, ProductTag};
use cartkit_commerce::checkout::{CheckoutForm, ContactForm, ViewState};
use cartkit_commerce::ProductId;
use chrono::{Datelike, Utc};

const EMPTY_CART_ALERT: &str = "Cart is empty!";

/// A running storefront: cart, view, catalog, and the three collaborator
/// ports.
pub struct Storefront<P, W, U> {
    config: StoreConfig,
    catalog: Vec<ProductTag>,
    cart: Cart,
    view: ViewState,
    payment: P,
    webhook: W,
    ui: U,
}

impl<P, W, U> Storefront<P, W, U>
where
    P: PaymentProvider,
    W: WebhookSink,
    U: StoreUi,
{
    /// Start a session, pricing the catalog for the current calendar month.
    pub fn new(config: StoreConfig, catalog: Vec<ProductTag>, payment: P, webhook: W, ui: U) -> Self {
        Self::with_starting_month(config, catalog, Utc::now().month0(), payment, webhook, ui)
    }

    /// Start a session with an explicit zero-based month, for deterministic
    /// pricing in tests and replays.
    pub fn with_starting_month(
        config: StoreConfig,
        mut catalog: Vec<ProductTag>,
        month0: u32,
        payment: P,
        webhook: W,
        ui: U,
    ) -> Self {
        let touched = apply_seasonal_pricing(&mut catalog, month0);
        tracing::info!(month0, touched, "seasonal pricing applied");
        Self {
            config,
            catalog,
            cart: Cart::new(),
            view: ViewState::default(),
            payment,
            webhook,
            ui,
        }
    }

    /// Current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current view state.
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// The catalog with seasonal pricing applied.
    pub fn catalog(&self) -> &[ProductTag] {
        &self.catalog
    }

    fn refresh(&self) {
        self.ui.render_cart(&CartDisplay::from_cart(&self.cart));
    }

    /// Add a catalog product to the cart by id. Unknown ids and tags with a
    /// non-positive price are ignored, mirroring the guard on the product
    /// control's attributes.
    pub fn add_to_cart(&mut self, id: &str) {
        let Some(tag) = self.catalog.iter().find(|t| t.id.as_str() == id).cloned() else {
            tracing::warn!(id, "add-to-cart for unknown product");
            return;
        };
        if tag.name.is_empty() || tag.unit_price.amount() <= 0 {
            tracing::warn!(id, "add-to-cart with incomplete product tag");
            return;
        }

        if let AddOutcome::Inserted { minimum } = self.cart.add(&tag) {
            if minimum > 1 {
                self.ui.toast(Notice::MinimumApplied {
                    name: tag.name.clone(),
                    minimum,
                });
            }
        }
        self.refresh();
        self.ui.toast(Notice::ItemAdded { name: tag.name });
    }

    /// Increment a line item's quantity.
    pub fn increase_quantity(&mut self, id: &str) {
        self.cart.increase(&ProductId::new(id));
        self.refresh();
    }

    /// Decrement a line item's quantity; at the minimum this asks the user
    /// whether to drop the item entirely.
    pub async fn decrease_quantity(&mut self, id: &str) {
        let id = ProductId::new(id);
        if let DecreaseOutcome::AtMinimum { name, minimum } = self.cart.decrease(&id) {
            if self.ui.confirm_removal(&name, minimum).await {
                self.cart.remove(&id);
            }
        }
        self.refresh();
    }

    /// Remove a line item outright.
    pub fn remove_item(&mut self, id: &str) {
        self.cart.remove(&ProductId::new(id));
        self.refresh();
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.refresh();
        self.ui.toast(Notice::CartCleared);
    }

    /// Open the modal on the cart view, re-rendering first.
    pub fn open_cart(&mut self) {
        self.refresh();
        self.view.open();
    }

    /// Hide the modal; cart and form state stay as they are.
    pub fn close(&mut self) {
        self.view.close();
    }

    /// Move from cart review to the checkout form; an empty cart gets a
    /// blocking alert instead.
    pub fn proceed_to_checkout(&mut self) {
        if self.cart.is_empty() {
            self.ui.alert(EMPTY_CART_ALERT);
            return;
        }
        if let Err(err) = self.view.proceed() {
            tracing::warn!(%err, "proceed ignored");
        }
    }

    /// Return from the checkout form to cart review.
    pub fn back_to_cart(&mut self) {
        if let Err(err) = self.view.back() {
            tracing::warn!(%err, "back ignored");
        }
    }

    /// Submit the checkout form: validation, payment, order notification.
    pub async fn submit_order(&mut self, form: &mut CheckoutForm) -> SubmitOutcome {
        checkout::submit(
            &self.config,
            &mut self.cart,
            &mut self.view,
            form,
            &self.payment,
            &self.webhook,
            &self.ui,
        )
        .await
    }

    /// Submit the contact form.
    pub async fn send_contact_message(&mut self, form: &mut ContactForm) -> ContactOutcome {
        contact::send(form, &self.webhook, &self.ui).await
    }
}
