//! Routers de la API

pub mod area_routes;
pub mod booking_routes;
pub mod map_routes;
pub mod wizard_routes;
