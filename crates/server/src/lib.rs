pub mod biodata;
pub mod errors;
pub mod openapi;
pub mod programs;
pub mod responses;
pub mod routes;
pub mod startup;

pub use startup::run;
