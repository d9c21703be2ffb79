//! Domain Layer
//!
//! Pure launcher logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Setup state (completion records)
//! - `value_objects/` - Immutable value types (Interpreter, VirtualEnv, CommandSpec)
//! - `services/` - Step gating and the file patcher
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or touches the file system
//! 2. **Explicit context** - Every command carries its own environment changes
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
