pub mod acs;
pub mod dka;
pub mod heart_failure;
pub mod pneumonia;
pub mod pulmonary_embolism;
pub mod stroke;
