//! Shared application services, catalogue access and the storefront session.

pub mod catalog;
pub mod context;
pub mod domain;
pub mod storefront;

#[cfg(test)]
mod test;
