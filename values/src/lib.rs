//! # TokenLens Values
//!
//! Transport-agnostic value types shared by every TokenLens entry point.
//!
//! The HTTP layer, tests, and any future transport all speak the same
//! [`RequestValue`] / [`ResponseValue`] pair, so the backend never knows or
//! cares how a request arrived.

pub mod error;
pub mod request;
pub mod response;

pub use error::{ValueError, ValueResult};
pub use request::RequestValue;
pub use response::{
    BackendInfo, BackendResult, ColoredToken, HealthStatus, ResponseValue, TokenizeResponse,
};
