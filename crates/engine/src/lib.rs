//! Validation pipeline for a Maven-style repository: list artifacts,
//! compare their SHA-1 against the sidecar checksum file, remove the ones
//! that do not match.

mod digest;
mod extract;
mod finder;
mod remover;

#[cfg(test)]
mod mocks;

pub use digest::{DigestCalculator, Sha1Calculator, sha1_hex};
pub use extract::{DigestExtractor, SidecarExtractor, parse_sidecar, sidecar_name};
pub use finder::{InvalidFileFinder, is_relevant_for_validation};
pub use remover::Remover;
