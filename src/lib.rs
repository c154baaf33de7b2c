// Library for tests to access modules

pub mod auth;
pub mod config;
pub mod counters;
pub mod models;
pub mod probes;
pub mod registry;
pub mod routes;
pub mod status;
pub mod sysinfo_repo;
pub mod version;
