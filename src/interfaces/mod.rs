//! Adapters between the domain model and the PxPay wire format.

pub mod xml;
