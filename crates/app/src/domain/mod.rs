//! Vitrine Domain Concerns

pub mod products;
