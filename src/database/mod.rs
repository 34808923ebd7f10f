//! Acceso a la base de datos

pub mod connection;

pub use connection::DatabaseConnection;
