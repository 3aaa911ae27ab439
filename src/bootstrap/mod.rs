//! Tracker application bootstrapping.
//!
//! This module includes all the functions to build the application, its dependencies, and run the jobs.
//!
//! Jobs are tasks executed concurrently. The HTTP statistics server and the
//! torrent cleanup job can be enabled or disabled in the configuration.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;
