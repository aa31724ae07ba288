pub mod reverse_dns;
pub mod subnet;
