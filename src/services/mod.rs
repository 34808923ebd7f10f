//! Servicios de negocio e integraciones externas

pub mod booking_service;
pub mod directions_service;
pub mod map_view_service;
