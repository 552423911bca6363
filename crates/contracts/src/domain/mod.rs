pub mod a001_customer;
pub mod common;
