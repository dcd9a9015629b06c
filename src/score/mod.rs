pub mod priority;
pub mod requirement;
pub mod scorer;
