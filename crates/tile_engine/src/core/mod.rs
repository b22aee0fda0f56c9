//! # Core Engine Module
//!
//! Shared configuration for the engine subsystems.
//!
//! ## Organization
//!
//! - **Config**: Engine and physics configuration
//! - **Foundation**: Low-level utilities (math, collections, time, logging)

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    EngineConfig,
    PhysicsConfig,
    Config,
    ConfigError,
};
