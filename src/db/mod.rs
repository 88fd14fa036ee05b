pub mod connection;
pub mod entities;
pub mod executor;
pub mod seed;
