//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod address;
pub mod apartment;
pub mod apartment_class;
pub mod apartment_image;
pub mod guest;
pub mod hotel;
pub mod transact;
