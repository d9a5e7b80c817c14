//! Syllabus domain: the record model, the reply parser, local persistence,
//! and HTML export.

pub mod export;
pub mod parser;
pub mod record;
pub mod store;
