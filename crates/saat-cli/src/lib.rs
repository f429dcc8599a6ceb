pub mod config;
pub mod demo;
pub mod logging;
pub mod narrator;
pub mod runner;
