//! Entity ↔ model mappers

mod comment;
mod flag;
mod reaction;
