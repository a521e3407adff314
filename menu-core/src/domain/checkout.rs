//! Checkout
//!
//! Builds the prefilled WhatsApp order message. This is a manual hand-off:
//! nothing confirms delivery, so the cart is left untouched.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use super::cart::CartLine;
use super::entity::{MenuError, MenuResult};
use super::menu_item::{format_price, round_cents};

const WHATSAPP_BASE: &str = "https://wa.me";

/// Details typed into the checkout form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

impl CustomerDetails {
    /// Every required field left blank, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [("name", &self.name), ("phone", &self.phone), ("address", &self.address)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    pub fn validate(&self) -> MenuResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MenuError::MissingFields(missing))
        }
    }
}

/// A composed order ready to be opened
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOrder {
    pub message: String,
    pub url: String,
    pub total: f64,
}

/// Validate the customer and cart, then compose the message and URL
pub fn build_checkout(
    customer: &CustomerDetails,
    lines: &[CartLine],
    restaurant_name: &str,
    whatsapp_number: &str,
) -> MenuResult<CheckoutOrder> {
    customer.validate()?;
    if lines.is_empty() {
        return Err(MenuError::EmptyCart);
    }

    let total = round_cents(lines.iter().map(|line| line.unit_price * f64::from(line.quantity)).sum());
    let message = compose_message(customer, lines, restaurant_name, total);
    let url = whatsapp_url(whatsapp_number, &message)?;
    log::info!("checkout composed: {} lines, total {}", lines.len(), format_price(total));

    Ok(CheckoutOrder { message, url, total })
}

fn compose_message(customer: &CustomerDetails, lines: &[CartLine], restaurant_name: &str, total: f64) -> String {
    let mut message = if restaurant_name.trim().is_empty() {
        String::from("*New Order*\n")
    } else {
        format!("*New Order - {}*\n", restaurant_name.trim())
    };

    message.push_str(&format!("Name: {}\n", customer.name.trim()));
    message.push_str(&format!("Phone: {}\n", customer.phone.trim()));
    message.push_str(&format!("Address: {}\n", customer.address.trim()));
    if !customer.notes.trim().is_empty() {
        message.push_str(&format!("Notes: {}\n", customer.notes.trim()));
    }

    message.push('\n');
    for (index, line) in lines.iter().enumerate() {
        message.push_str(&format!(
            "{}. {} x {} ({}) - {}\n",
            index + 1,
            line.quantity,
            line.name,
            line.size.label(),
            format_price(line.subtotal())
        ));
    }
    message.push_str(&format!("\n*Total: {}*", format_price(total)));
    message
}

/// `https://wa.me/<digits>?text=<message>`
pub fn whatsapp_url(number: &str, message: &str) -> MenuResult<String> {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(MenuError::InvalidInput("no WhatsApp number configured".to_string()));
    }
    Ok(format!(
        "{}/{}?text={}",
        WHATSAPP_BASE,
        digits,
        utf8_percent_encode(message, NON_ALPHANUMERIC)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MenuItem, SizeVariant};

    fn customer() -> CustomerDetails {
        CustomerDetails {
            name: "Nimal".to_string(),
            phone: "077 123 4567".to_string(),
            address: "12 Lake Road".to_string(),
            notes: String::new(),
        }
    }

    fn lines() -> Vec<CartLine> {
        vec![
            CartLine::new(&MenuItem::new("b1", "Burger", 10.0), SizeVariant::Large, 2),
            CartLine::new(&MenuItem::new("s1", "Soda", 2.5), SizeVariant::Small, 1),
        ]
    }

    #[test]
    fn test_missing_fields_listed_in_order() {
        let details = CustomerDetails {
            name: "  ".to_string(),
            phone: "0771234567".to_string(),
            ..Default::default()
        };
        assert_eq!(details.missing_fields(), vec!["name", "address"]);
        let err = details.validate().unwrap_err();
        assert_eq!(err.to_string(), "please fill in: name, address");
    }

    #[test]
    fn test_blocks_missing_customer_fields() {
        let result = build_checkout(&CustomerDetails::default(), &lines(), "Spice Route", "94771234567");
        assert!(matches!(result, Err(MenuError::MissingFields(fields)) if fields.len() == 3));
    }

    #[test]
    fn test_blocks_empty_cart() {
        let result = build_checkout(&customer(), &[], "Spice Route", "94771234567");
        assert!(matches!(result, Err(MenuError::EmptyCart)));
    }

    #[test]
    fn test_message_itemizes_order() {
        let order = build_checkout(&customer(), &lines(), "Spice Route", "94771234567").unwrap();
        assert_eq!(order.total, 30.5);
        assert!(order.message.starts_with("*New Order - Spice Route*\n"));
        assert!(order.message.contains("1. 2 x Burger (Large) - $28.00\n"));
        assert!(order.message.contains("2. 1 x Soda (Small) - $2.50\n"));
        assert!(order.message.ends_with("*Total: $30.50*"));
        assert!(!order.message.contains("Notes:"));
    }

    #[test]
    fn test_url_encodes_message_and_strips_number() {
        let order = build_checkout(&customer(), &lines(), "", "+94 (77) 123-4567").unwrap();
        assert!(order.url.starts_with("https://wa.me/94771234567?text="));
        assert!(!order.url.contains(' '));
        assert!(!order.url.contains('\n'));
        assert!(order.url.contains("%0A"));
    }

    #[test]
    fn test_requires_destination_number() {
        assert!(matches!(whatsapp_url("n/a", "hi"), Err(MenuError::InvalidInput(_))));
    }
}
