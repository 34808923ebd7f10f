//! Controladores de la API

pub mod area_controller;
pub mod booking_controller;
pub mod map_controller;
pub mod wizard_controller;
