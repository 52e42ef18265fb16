pub mod controller;
pub mod router;
pub mod scope;
pub mod service;

pub use scope::TodoScope;
