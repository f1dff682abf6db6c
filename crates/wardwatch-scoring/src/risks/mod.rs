pub mod aki;
pub mod bleeding;
pub mod cardiac_arrest;
pub mod delirium;
pub mod electrolyte;
pub mod falls;
pub mod malnutrition;
pub mod medication_harm;
pub mod pressure_ulcer;
pub mod respiratory_failure;
pub mod sepsis;
pub mod vte;
