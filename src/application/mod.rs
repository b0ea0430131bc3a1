//! Application layer orchestrating the PxPay request/response lifecycle.
//!
//! This module defines the `PxPayGateway`, the entry point for authorize,
//! purchase and their completion counterparts. Each pair runs through one
//! shared flow keyed by `OperationKind`.

pub mod gateway;
