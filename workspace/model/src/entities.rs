//! This file serves as the root for all SeaORM entity modules.
//! The dashboard reads a single pre-computed forecast table; the entity
//! here mirrors that table's columns one to one.

pub mod inquiry_forecast;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::inquiry_forecast::Entity as InquiryForecast;
}
