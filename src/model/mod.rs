pub mod employee;
pub mod service;
