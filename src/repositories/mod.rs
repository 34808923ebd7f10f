//! Repositorios de acceso a datos
//!
//! Cada repositorio envuelve el pool de PostgreSQL y expone las
//! operaciones tipadas de su tabla. Ninguna operación usa transacciones.

pub mod area_repository;
pub mod booking_repository;
pub mod slot_repository;
pub mod vehicle_repository;
