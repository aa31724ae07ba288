pub mod address;
pub mod arpa;
pub mod block;
pub mod classify;
pub mod error;
pub mod family;
pub mod mask;
pub mod prefix;
pub mod validate;
