pub mod concavity;
pub mod guides;
pub mod sweep;
