pub mod client;
pub mod config;
pub mod domain;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod shell;
