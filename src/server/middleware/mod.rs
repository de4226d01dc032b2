//! Request helpers shared by the route handlers

mod helpers;

pub use helpers::{DEFAULT_CLIENT_IP, client_ip};
