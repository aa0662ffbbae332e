//! Three-step checkout wizard and order totals.
//!
//! No payment is processed. The wizard collects contact, address and
//! shipping details, then turns the cart into an [`OrderConfirmation`].

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::{Email, EmailError, Price};

/// Sales tax rate applied to the subtotal.
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Express shipping fee.
pub const EXPRESS_SHIPPING: Decimal = Decimal::from_parts(1299, 0, 0, false, 2);

/// A checkout wizard step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    #[default]
    Information,
    Shipping,
    Payment,
}

impl CheckoutStep {
    pub const ALL: [Self; 3] = [Self::Information, Self::Shipping, Self::Payment];

    /// 1-based step number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Information => 1,
            Self::Shipping => 2,
            Self::Payment => 3,
        }
    }

    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Information),
            2 => Some(Self::Shipping),
            3 => Some(Self::Payment),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Information => "checkout.information",
            Self::Shipping => "checkout.shipping",
            Self::Payment => "checkout.payment",
        }
    }

    /// The step a "back" button returns to.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Information => None,
            Self::Shipping => Some(Self::Information),
            Self::Payment => Some(Self::Shipping),
        }
    }

    /// Whether the step indicator may jump from `self` to `target`.
    ///
    /// Only earlier steps are reachable; forward moves go through the step
    /// forms.
    #[must_use]
    pub fn can_jump_to(self, target: Self) -> bool {
        target < self
    }

    /// Steps before the current one are shown as completed.
    #[must_use]
    pub fn is_completed(self, current: Self) -> bool {
        self < current
    }
}

/// Shipping method chosen in step 2.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
}

impl ShippingMethod {
    pub const ALL: [Self; 2] = [Self::Standard, Self::Express];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(Self::Standard),
            "express" => Some(Self::Express),
            _ => None,
        }
    }

    #[must_use]
    pub const fn price(self) -> Price {
        match self {
            Self::Standard => Price::zero(),
            Self::Express => Price::usd(EXPRESS_SHIPPING),
        }
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Standard => "checkout.shipping_method.standard",
            Self::Express => "checkout.shipping_method.express",
        }
    }

    #[must_use]
    pub const fn time_key(self) -> &'static str {
        match self {
            Self::Standard => "checkout.shipping_method.standard_time",
            Self::Express => "checkout.shipping_method.express_time",
        }
    }
}

/// Countries offered in the address form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[default]
    US,
    CA,
    UK,
    AE,
    SA,
}

impl Country {
    pub const ALL: [Self; 5] = [Self::US, Self::CA, Self::UK, Self::AE, Self::SA];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::US => "US",
            Self::CA => "CA",
            Self::UK => "UK",
            Self::AE => "AE",
            Self::SA => "SA",
        }
    }

    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Translation key for the country name.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::US => "countries.US",
            Self::CA => "countries.CA",
            Self::UK => "countries.UK",
            Self::AE => "countries.AE",
            Self::SA => "countries.SA",
        }
    }
}

/// Order totals for the summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl OrderTotals {
    /// Tax is 8% of the subtotal rounded to cents, half away from zero.
    #[must_use]
    pub fn compute(subtotal: Price, method: ShippingMethod) -> Self {
        let tax = Price::new(
            (subtotal.amount * TAX_RATE)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            subtotal.currency_code,
        );
        let shipping = method.price();
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// Validation failures in the checkout forms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("unknown country: {0}")]
    UnknownCountry(String),
    #[error("the cart is empty")]
    EmptyCart,
}

/// Contact and address details from step 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Information {
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl Information {
    /// Check the fields needed to ship an order.
    ///
    /// # Errors
    ///
    /// Returns the first missing or malformed field.
    pub fn validate(&self) -> Result<Email, CheckoutError> {
        let email = Email::parse(&self.email)?;
        require(&self.first_name, "first_name")?;
        require(&self.last_name, "last_name")?;
        require(&self.address, "address")?;
        require(&self.city, "city")?;
        if Country::parse(&self.country).is_none() {
            return Err(CheckoutError::UnknownCountry(self.country.clone()));
        }
        Ok(email)
    }
}

/// Card details from step 3. Never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaymentDetails {
    pub card_number: String,
    pub card_name: String,
    pub expiry: String,
    pub cvv: String,
}

impl PaymentDetails {
    /// Presence check only; nothing is charged.
    ///
    /// # Errors
    ///
    /// Returns the first empty field.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        require(&self.card_number, "card_number")?;
        require(&self.card_name, "card_name")?;
        require(&self.expiry, "expiry")?;
        require(&self.cvv, "cvv")
    }
}

fn require(value: &str, field: &'static str) -> Result<(), CheckoutError> {
    if value.trim().is_empty() {
        Err(CheckoutError::Missing(field))
    } else {
        Ok(())
    }
}

/// Wizard state kept in the session between steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub step: CheckoutStep,
    pub information: Information,
    pub shipping_method: ShippingMethod,
}

impl CheckoutForm {
    /// Store step 1 and advance to shipping.
    ///
    /// # Errors
    ///
    /// Returns a validation error and stays on step 1.
    pub fn submit_information(&mut self, information: Information) -> Result<(), CheckoutError> {
        let result = information.validate();
        self.information = information;
        result?;
        self.step = CheckoutStep::Shipping;
        Ok(())
    }

    /// Store step 2 and advance to payment.
    pub fn submit_shipping(&mut self, method: ShippingMethod) {
        self.shipping_method = method;
        self.step = CheckoutStep::Payment;
    }

    /// Jump back via the step indicator. Returns whether the step changed.
    pub fn jump_to(&mut self, target: CheckoutStep) -> bool {
        if self.step.can_jump_to(target) {
            self.step = target;
            true
        } else {
            false
        }
    }

    /// The selected country, defaulting to US.
    #[must_use]
    pub fn country(&self) -> Country {
        Country::parse(&self.information.country).unwrap_or_default()
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub number: String,
    pub email: String,
    pub totals: OrderTotals,
    pub item_count: u32,
}

impl OrderConfirmation {
    /// Final validation before an order is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty cart, incomplete information or
    /// missing card fields.
    pub fn place(
        form: &CheckoutForm,
        payment: &PaymentDetails,
        totals: OrderTotals,
        item_count: u32,
        sequence: u32,
    ) -> Result<Self, CheckoutError> {
        if item_count == 0 {
            return Err(CheckoutError::EmptyCart);
        }
        let email = form.information.validate()?;
        payment.validate()?;
        Ok(Self {
            number: order_number(sequence),
            email: email.as_str().to_owned(),
            totals,
            item_count,
        })
    }
}

/// Printable order number (e.g., `SQ-004217`).
#[must_use]
pub fn order_number(sequence: u32) -> String {
    format!("SQ-{:06}", sequence % 1_000_000)
}
