pub mod treats;

pub use treats::TreatGenerator;
