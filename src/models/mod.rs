//! Modelos del sistema
//!
//! Entidades del plan de viaje. Se construyen por request y no se persisten.

pub mod trip;
