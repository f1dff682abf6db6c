pub mod diagnosis;
pub mod exam;
pub mod labs;
mod lenient;
pub mod mode;
pub mod patient;
pub mod risk;
pub mod vitals;
