pub mod schema;
pub mod snapshot;
pub mod view;
