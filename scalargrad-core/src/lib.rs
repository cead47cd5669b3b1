// Déclare les modules principaux de la crate
pub mod autograd;
pub mod ops;
pub mod scalar;
pub mod scalar_data;

pub mod nn;

// Ré-exporte les types centraux pour qu'ils soient accessibles directement
// via `scalargrad_core::Scalar` etc.
pub use ops::Op;
pub use scalar::Scalar;

pub mod error;
pub use error::ScalarGradError;
