pub mod document;
pub mod labeler;
pub mod repository;
pub mod resolver;
pub mod roster;

pub use crate::domain::ports::{ConfigProvider, DocumentSource, LabelSink};
