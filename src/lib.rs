pub mod comparator;
pub mod config;
pub mod consts;
pub mod emitter;
pub mod error;
pub mod sampler;
pub mod table;
