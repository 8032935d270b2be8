//! # Invoice
//!
//! The printable receipt handed to a customer after payment.
//!
//! ## Lifecycle
//! ```text
//! OrderSummary ──┐
//! Customer ──────┼──► Invoice::new() ──► render() ──► stdout
//! Payment ───────┘        │
//!                         ├── reference: fresh UUID v4
//!                         └── issued_at: local time
//! ```
//!
//! Invoices are never persisted; the reference exists only on paper.

use chrono::{DateTime, Local};
use std::fmt;
use uuid::Uuid;

use crate::types::{Customer, OrderSummary, Payment};

/// A rendered-on-demand receipt for one paid order.
#[derive(Debug, Clone)]
pub struct Invoice {
    pub reference: Uuid,
    pub issued_at: DateTime<Local>,
    pub customer: Customer,
    pub summary: OrderSummary,
    pub payment: Payment,
}

impl Invoice {
    /// Creates an invoice with a new reference, stamped with the current
    /// local time.
    pub fn new(customer: Customer, summary: OrderSummary, payment: Payment) -> Self {
        Invoice::with_reference(Uuid::new_v4(), Local::now(), customer, summary, payment)
    }

    /// Creates an invoice with an explicit reference and timestamp.
    pub fn with_reference(
        reference: Uuid,
        issued_at: DateTime<Local>,
        customer: Customer,
        summary: OrderSummary,
        payment: Payment,
    ) -> Self {
        Invoice {
            reference,
            issued_at,
            customer,
            summary,
            payment,
        }
    }

    /// Renders the receipt text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Order Invoice ---")?;
        writeln!(f, "Invoice Reference: {}", self.reference)?;
        writeln!(
            f,
            "Date and Time: {}",
            self.issued_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "Customer Name: {}", self.customer.name)?;
        writeln!(
            f,
            "Customer Address: {}",
            self.customer.address.as_deref().unwrap_or("")
        )?;
        writeln!(
            f,
            "Customer Contact Number: {}",
            self.customer.contact_info.as_deref().unwrap_or("")
        )?;

        writeln!(f)?;
        writeln!(f, "Ordered Items:")?;
        for line in &self.summary.lines {
            writeln!(
                f,
                "{} (x{}) - {} each",
                line.name, line.quantity, line.unit_price
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Net Total: {}", self.summary.total)?;
        writeln!(f, "Amount Paid: {}", self.payment.tendered)?;
        writeln!(f, "Change: {}", self.payment.change)?;
        writeln!(f)?;
        write!(f, "--- Thank you for your order! ---")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::OrderLineDetail;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn sample_summary() -> OrderSummary {
        let mut summary = OrderSummary::default();
        summary.push(OrderLineDetail {
            name: "Burger".to_string(),
            quantity: 2,
            unit_price: Money::from_cents(599),
        });
        summary.push(OrderLineDetail {
            name: "Pizza".to_string(),
            quantity: 1,
            unit_price: Money::from_cents(899),
        });
        summary
    }

    fn sample_customer() -> Customer {
        Customer {
            id: 7,
            name: "Ada".to_string(),
            address: Some("12 Analytical Way".to_string()),
            contact_info: Some("555-0100".to_string()),
        }
    }

    #[test]
    fn test_render_layout() {
        let summary = sample_summary();
        let payment = Payment::tender(summary.total, Money::from_cents(2500)).unwrap();
        let invoice = Invoice::with_reference(
            Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap(),
            Local.with_ymd_and_hms(2026, 10, 18, 12, 30, 5).unwrap(),
            sample_customer(),
            summary,
            payment,
        );

        let expected = "\
--- Order Invoice ---
Invoice Reference: 67e55044-10b1-426f-9247-bb680e5fe0c8
Date and Time: 2026-10-18 12:30:05
Customer Name: Ada
Customer Address: 12 Analytical Way
Customer Contact Number: 555-0100

Ordered Items:
Burger (x2) - $5.99 each
Pizza (x1) - $8.99 each

Net Total: $20.97
Amount Paid: $25.00
Change: $4.03

--- Thank you for your order! ---";

        assert_eq!(invoice.render(), expected);
    }

    #[test]
    fn test_fresh_reference_is_valid_and_unique() {
        let summary = sample_summary();
        let payment = Payment::tender(summary.total, summary.total).unwrap();

        let first = Invoice::new(sample_customer(), summary.clone(), payment);
        let second = Invoice::new(sample_customer(), summary, payment);

        assert_ne!(first.reference, second.reference);
        assert_eq!(first.reference.get_version_num(), 4);

        let rendered = first.render();
        let reference_line = rendered
            .lines()
            .find_map(|l| l.strip_prefix("Invoice Reference: "))
            .unwrap();
        assert!(Uuid::parse_str(reference_line).is_ok());
        assert!(rendered.contains("Net Total: $20.97"));
    }

    #[test]
    fn test_missing_contact_details_render_blank() {
        let summary = sample_summary();
        let payment = Payment::tender(summary.total, summary.total).unwrap();
        let customer = Customer {
            address: None,
            contact_info: None,
            ..sample_customer()
        };

        let rendered = Invoice::new(customer, summary, payment).render();
        assert!(rendered.contains("Customer Address: \n"));
        assert!(rendered.contains("Customer Contact Number: \n"));
        assert!(rendered.contains("Change: $0.00"));
    }
}
