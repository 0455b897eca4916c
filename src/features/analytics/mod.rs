pub mod implementations;
pub mod schemas;
