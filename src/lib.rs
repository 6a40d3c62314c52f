//! Habitude - Habit Tracking API
//!
//! This crate implements a habit tracker with reinforcement chains:
//! habits carry either a reward or a link to a "pleasant" habit, and
//! owners receive periodic chat reminders.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
