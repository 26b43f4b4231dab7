#![forbid(unsafe_code)]

//! Core: pixel geometry, host capabilities, timeline primitives, and host
//! events for the SwipeDeck gallery widget.

pub mod capability;
pub mod event;
pub mod geometry;
pub mod timeline;
