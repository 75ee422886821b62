//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Dates
// =============================================================================

/// Calendar date format accepted for arrival and departure dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Guests
// =============================================================================

/// Minimum phone number length (digits and an optional leading `+`)
pub const MIN_PHONE_LENGTH: u64 = 11;

/// Maximum phone number length
pub const MAX_PHONE_LENGTH: u64 = 14;

/// Minimum last name length
pub const MIN_LAST_NAME_LENGTH: u64 = 3;

/// Maximum last name length
pub const MAX_LAST_NAME_LENGTH: u64 = 20;

/// Maximum first name length
pub const MAX_FIRST_NAME_LENGTH: u64 = 20;

// =============================================================================
// Hotels
// =============================================================================

/// Minimum length of country, city and street names
pub const MIN_ADDRESS_PART_LENGTH: u64 = 2;

/// Maximum length of country, city and street names
pub const MAX_ADDRESS_PART_LENGTH: u64 = 40;

/// Maximum length of a house number
pub const MAX_HOUSE_LENGTH: u64 = 10;

/// Maximum hotel name length
pub const MAX_HOTEL_NAME_LENGTH: u64 = 100;

/// Lowest star rating
pub const MIN_STARS: i32 = 1;

/// Highest star rating
pub const MAX_STARS: i32 = 5;

// =============================================================================
// Apartments
// =============================================================================

/// Maximum apartment name length
pub const MAX_APARTMENT_NAME_LENGTH: u64 = 40;

/// Smallest bed count for an apartment
pub const MIN_BED_COUNT: i32 = 1;

/// Largest bed count for an apartment
pub const MAX_BED_COUNT: i32 = 10;

/// Apartment classes seeded into the lookup table
pub const APARTMENT_CLASSES: &[&str] = &["standard", "comfort", "lux", "suite"];
