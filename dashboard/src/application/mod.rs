// Application layer - facades organized by persona
// Orchestrates domain logic through ports, never talks HTTP directly

pub mod auth;
pub mod data;
pub mod super_admin;
pub mod ports;
