//! Apartments, their lookup classes and their images.

use serde::{Deserialize, Serialize};

/// Fixed lookup entry describing the comfort level of an apartment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApartmentClass {
    pub id: i32,
    #[cfg_attr(feature = "openapi", schema(example = "lux"))]
    pub class_name: String,
}

/// The hotel an apartment belongs to, reduced to what listings show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HotelRef {
    pub id: i32,
    pub name: String,
}

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Apartment {
    pub id: i32,
    #[cfg_attr(feature = "openapi", schema(example = "Room 204"))]
    pub name: String,
    pub hotel: HotelRef,
    pub apartment_class: ApartmentClass,
    /// Availability flag, cleared when the apartment is booked
    pub is_free: bool,
    #[cfg_attr(feature = "openapi", schema(example = 2))]
    pub bed_count: i32,
    /// Price of one night
    #[serde(rename = "price")]
    #[cfg_attr(feature = "openapi", schema(example = 100))]
    pub price_per_night: i32,
}

/// Apartment creation data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApartment {
    pub name: String,
    pub bed_count: i32,
    pub price_per_night: i32,
    pub apartment_class_id: i32,
    pub hotel_id: i32,
}

/// Image attached to an apartment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApartmentImage {
    pub id: i32,
    pub apartment_id: i32,
    #[cfg_attr(feature = "openapi", schema(example = "/static/apartments/204-1.jpg"))]
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApartmentImage {
    pub apartment_id: i32,
    pub address: String,
}

/// Apartment listing criteria. `None` fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApartmentFilter {
    pub hotel_id: Option<i32>,
    pub is_free: Option<bool>,
    pub bed_count: Option<i32>,
    pub class_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_exposed_as_price() {
        let apartment = Apartment {
            id: 7,
            name: "Room 7".to_string(),
            hotel: HotelRef {
                id: 1,
                name: "Grand".to_string(),
            },
            apartment_class: ApartmentClass {
                id: 3,
                class_name: "lux".to_string(),
            },
            is_free: true,
            bed_count: 2,
            price_per_night: 100,
        };

        let json = serde_json::to_value(&apartment).unwrap();
        assert_eq!(json["price"], 100);
        assert_eq!(json["hotel"]["name"], "Grand");
        assert_eq!(json["apartment_class"]["class_name"], "lux");
    }
}
