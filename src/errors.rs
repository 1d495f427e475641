//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`VitrineError`] covers all failure modes:
//! - Uniform configuration errors (unknown names, mismatched value types)
//! - Geometry parameter validation errors
//! - Showcase composition errors
//!
//! All of these are construction-time failures. Per-frame operations never
//! fail by contract; a driver whose target is gone is a no-op for that frame.
//!
//! # Usage
//!
//! Public fallible APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, VitrineError>`.

use thiserror::Error;

/// The main error type for the vitrine crate.
#[derive(Error, Debug)]
pub enum VitrineError {
    // ========================================================================
    // Material & Uniform Errors
    // ========================================================================
    /// A uniform name not present in the material's declared set.
    #[error("Unknown uniform '{name}' on material '{material}'")]
    UnknownUniform {
        /// Shader name of the material
        material: &'static str,
        /// The rejected uniform name
        name: String,
    },

    /// A uniform value whose type does not match the declared field type.
    #[error("Uniform '{name}' expects {expected}, got {found}")]
    UniformTypeMismatch {
        /// The uniform field name
        name: String,
        /// Declared WGSL type of the field
        expected: String,
        /// WGSL type of the rejected value
        found: &'static str,
    },

    // ========================================================================
    // Geometry Errors
    // ========================================================================
    /// A geometry parameter outside its valid range.
    #[error("Invalid geometry parameter: {0}")]
    InvalidGeometry(String),

    /// Raw vertex data with inconsistent attribute lengths or bad indices.
    #[error("Malformed geometry data: {0}")]
    MalformedGeometry(String),

    // ========================================================================
    // Composition Errors
    // ========================================================================
    /// A showcase configuration that cannot produce a valid scene.
    #[error("Invalid showcase configuration: {0}")]
    InvalidConfig(String),
}

/// Alias for `Result<T, VitrineError>`.
pub type Result<T> = std::result::Result<T, VitrineError>;
