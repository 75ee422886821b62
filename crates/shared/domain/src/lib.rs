//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! guests, hotels with their owned addresses, apartments and their lookup
//! classes, and bookings with the stay-period pricing rules.

pub mod apartment;
pub mod booking;
pub mod constants;
pub mod error;
pub mod guest;
pub mod hotel;

pub use apartment::{
    Apartment, ApartmentClass, ApartmentFilter, ApartmentImage, HotelRef, NewApartment,
    NewApartmentImage,
};
pub use booking::{Booking, BookingDetails, NewBooking, StayPeriod};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use guest::{Guest, NewGuest};
pub use hotel::{Address, Hotel, HotelFilter, HotelSortField, NewAddress, NewHotel, SortOrder};
