mod store;

pub use store::{ProductLink, Store};
