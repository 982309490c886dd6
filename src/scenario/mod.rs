pub mod solar_system;
