pub mod config;
pub mod error;
pub mod pipeline;
pub mod server;
pub mod sources;

#[cfg(test)]
pub(crate) mod testing;
