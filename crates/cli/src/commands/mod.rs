pub mod validate;

pub use validate::ValidateRequest;
