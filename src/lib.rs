//! Announcement board service for the school management system.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
