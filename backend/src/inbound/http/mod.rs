//! HTTP inbound adapter exposing REST endpoints.

pub mod beneficiaries;
pub mod health;
pub mod plans;
pub(crate) mod respond;
pub mod state;
#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod validation;
