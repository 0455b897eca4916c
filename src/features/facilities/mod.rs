pub mod implementations;
pub mod models;
pub mod repository;
pub mod schemas;
