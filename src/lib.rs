//! Laudo Cautelar server library.
//!
//! Vehicle pre-purchase inspection reports with automatic IPA scoring
//! (Índice de Procedência Automotiva), photo attachments, and inspector
//! account management.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod services;
