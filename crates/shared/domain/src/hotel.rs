//! Hotel aggregate: a hotel and the address it owns.

use serde::{Deserialize, Serialize};

/// Postal address owned by exactly one hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Address {
    pub id: i32,
    #[cfg_attr(feature = "openapi", schema(example = "Russia"))]
    pub country: String,
    #[cfg_attr(feature = "openapi", schema(example = "Kazan"))]
    pub city: String,
    #[cfg_attr(feature = "openapi", schema(example = "Baumana"))]
    pub street: String,
    #[cfg_attr(feature = "openapi", schema(example = "12a"))]
    pub house: String,
}

/// Hotel entity with its address populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Hotel {
    pub id: i32,
    #[cfg_attr(feature = "openapi", schema(example = "Grand Volga"))]
    pub name: String,
    pub address: Address,
    #[cfg_attr(feature = "openapi", schema(example = 4))]
    pub stars_count: i32,
    pub description: String,
    #[cfg_attr(feature = "openapi", schema(example = "/static/hotels/grand-volga.jpg"))]
    pub header_image_address: String,
}

/// Address data for a hotel write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub country: String,
    pub city: String,
    pub street: String,
    pub house: String,
}

/// Hotel data for create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHotel {
    pub name: String,
    pub address: NewAddress,
    pub stars_count: i32,
    pub description: String,
    pub header_image_address: String,
}

/// Column a hotel listing is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum HotelSortField {
    #[default]
    Id,
    Name,
    StarsCount,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Hotel listing criteria
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelFilter {
    pub country: Option<String>,
    pub city: Option<String>,
    pub sort_by: HotelSortField,
    pub sort_order: SortOrder,
}
