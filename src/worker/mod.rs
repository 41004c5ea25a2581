//! Background loader thread for fetching the dataset.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with span propagation
//! - `handler`: Loader thread handle and fetch loop

pub mod handler;
pub mod messages;

pub use handler::Loader;
pub use messages::{LoaderRequest, LoaderResponse};
