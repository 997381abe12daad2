pub mod account;
pub mod aggregate;
pub mod approval;
pub mod booking;
pub mod directory;
pub mod error;
pub mod order;
pub mod payment;
pub mod response;
pub mod review;
pub mod taxonomy;

#[cfg(test)]
mod test_support;

pub use error::ServiceError;
