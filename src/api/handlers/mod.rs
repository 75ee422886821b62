//! HTTP request handlers.

use once_cell::sync::Lazy;
use regex::Regex;

pub mod apartment_handler;
pub mod booking_handler;
pub mod guest_handler;
pub mod health_handler;
pub mod hotel_handler;
pub mod session_handler;

pub use apartment_handler::apartment_routes;
pub use booking_handler::booking_routes;
pub use guest_handler::guest_routes;
pub use health_handler::health_routes;
pub use hotel_handler::hotel_routes;
pub use session_handler::{private_routes, session_routes};

/// Digits with an optional leading `+`
pub(crate) static PHONE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]+$").expect("valid phone number regex"));

#[cfg(test)]
mod tests {
    use super::PHONE_NUMBER;

    #[test]
    fn phone_number_pattern() {
        assert!(PHONE_NUMBER.is_match("+79991234567"));
        assert!(PHONE_NUMBER.is_match("89991234567"));
        assert!(!PHONE_NUMBER.is_match("+7 999 123"));
        assert!(!PHONE_NUMBER.is_match("phone"));
    }
}
