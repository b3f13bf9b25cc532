pub mod calculator;
pub mod collaborator;
pub mod engine;
