// Adapters layer: concrete implementations for external collaborators
// (template engine, device classifier).

pub mod classifier;
pub mod tera_engine;
