//! Input validation rules shared by the transports

pub mod validation;
