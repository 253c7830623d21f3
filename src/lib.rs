pub mod config;
pub mod db;
pub mod routes;
pub mod services;
pub mod types;
