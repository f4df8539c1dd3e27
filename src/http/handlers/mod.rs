//! Route handlers, grouped by resource. Each module registers its routes through `configure`.

pub mod addresses;
pub mod admin;
pub mod cart;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod sellers;
pub mod users;
