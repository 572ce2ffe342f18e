#![no_std]

mod contract;
mod coverage;
mod errors;
mod storage;
mod types;

pub use contract::{InsuranceVerificationContract, InsuranceVerificationContractClient};
pub use coverage::required_coverage;
pub use errors::InsuranceError;
pub use types::InsurancePolicy;
