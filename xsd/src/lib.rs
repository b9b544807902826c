//! Schema document access for XSD diagrams: the parsed document with its schema-wide settings,
//! lookup tables for named constructs, and small helpers for occurrence ranges, annotations and
//! qualified names.

pub mod annotation;
pub mod builtins;
pub mod error;
pub mod particle;
pub mod registry;
pub mod schema;
pub mod values;
pub mod xstypes;

pub use error::XsdError;
pub use particle::{Cardinality, MaxOccurs};
pub use registry::{Registry, TypeDefinition};
pub use schema::SchemaModel;
pub use xstypes::QName;
