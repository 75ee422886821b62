//! Bookings and the stay-period pricing rules.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::apartment::Apartment;
use crate::constants::DATE_FORMAT;
use crate::error::{DomainError, DomainResult};
use crate::guest::Guest;

/// Validated arrival/departure pair covering at least one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayPeriod {
    arrival: NaiveDate,
    departure: NaiveDate,
}

impl StayPeriod {
    /// Build a period from two dates. Departure must fall after arrival.
    pub fn new(arrival: NaiveDate, departure: NaiveDate) -> DomainResult<Self> {
        if departure <= arrival {
            return Err(DomainError::validation(
                "date_departure must be later than date_arrival",
            ));
        }
        Ok(Self { arrival, departure })
    }

    /// Parse `YYYY-MM-DD` dates.
    pub fn parse(arrival: &str, departure: &str) -> DomainResult<Self> {
        let arrival = parse_date("date_arrival", arrival)?;
        let departure = parse_date("date_departure", departure)?;
        Self::new(arrival, departure)
    }

    pub fn arrival(&self) -> NaiveDate {
        self.arrival
    }

    pub fn departure(&self) -> NaiveDate {
        self.departure
    }

    /// Whole nights between arrival and departure, always positive.
    pub fn nights(&self) -> i64 {
        (self.departure - self.arrival).num_days()
    }

    /// Total price of the stay at the given nightly rate.
    pub fn quote(&self, price_per_night: i32) -> DomainResult<i64> {
        if price_per_night < 0 {
            return Err(DomainError::validation("price per night cannot be negative"));
        }
        self.nights()
            .checked_mul(i64::from(price_per_night))
            .ok_or_else(|| DomainError::validation("booking price is out of range"))
    }
}

fn parse_date(field: &str, value: &str) -> DomainResult<NaiveDate> {
    let invalid =
        || DomainError::validation(format!("{field} must be a date in YYYY-MM-DD format"));

    let value = value.trim();
    // chrono accepts unpadded months and days, so the shape is checked first
    if !is_padded_date(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// `NNNN-NN-NN`
fn is_padded_date(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Booking request as received from a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub phone_number: String,
    pub apartment_id: i32,
    pub date_arrival: String,
    pub date_departure: String,
}

/// A stored booking row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Booking {
    pub id: i32,
    pub operation_date: DateTime<Utc>,
    pub apartment_id: i32,
    pub guest_id: i32,
    /// Total price for the whole stay
    #[cfg_attr(feature = "openapi", schema(example = 300))]
    pub price: i64,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "2024-06-01"))]
    pub date_arrival: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "2024-06-04"))]
    pub date_departure: NaiveDate,
}

/// A booking with the guest and apartment it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingDetails {
    pub id: i32,
    pub operation_date: DateTime<Utc>,
    pub price: i64,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "2024-06-01"))]
    pub date_arrival: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "2024-06-04"))]
    pub date_departure: NaiveDate,
    #[serde(rename = "user")]
    pub guest: Guest,
    pub apartment: Apartment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_nights_at_one_hundred_costs_three_hundred() {
        let period = StayPeriod::parse("2024-06-01", "2024-06-04").unwrap();
        assert_eq!(period.nights(), 3);
        assert_eq!(period.quote(100).unwrap(), 300);
    }

    #[test]
    fn nights_span_month_boundaries() {
        let period = StayPeriod::parse("2024-02-27", "2024-03-02").unwrap();
        assert_eq!(period.nights(), 4);
    }

    #[test]
    fn rejects_unpadded_dates() {
        let err = StayPeriod::parse("2024-6-1", "2024-06-04").unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m.contains("date_arrival")));

        let err = StayPeriod::parse("2024-06-01", "2024-06-4").unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m.contains("date_departure")));
    }

    #[test]
    fn rejects_malformed_dates() {
        let err = StayPeriod::parse("01.06.2024", "2024-06-04").unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m.contains("date_arrival")));

        let err = StayPeriod::parse("2024-06-01", "2024-13-01").unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m.contains("date_departure")));
    }

    #[test]
    fn rejects_empty_and_reversed_periods() {
        assert!(matches!(
            StayPeriod::parse("2024-06-04", "2024-06-04"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            StayPeriod::parse("2024-06-04", "2024-06-01"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn quote_rejects_negative_rate() {
        let period = StayPeriod::parse("2024-06-01", "2024-06-02").unwrap();
        assert!(period.quote(-1).is_err());
        assert_eq!(period.quote(0).unwrap(), 0);
    }

    #[test]
    fn quote_does_not_overflow_for_long_stays() {
        let period = StayPeriod::parse("0001-01-01", "9999-12-31").unwrap();
        let price = period.quote(i32::MAX).unwrap();
        assert_eq!(price, period.nights() * i64::from(i32::MAX));
    }
}
