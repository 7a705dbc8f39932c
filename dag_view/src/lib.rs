//! Caller-side concerns of drawing a block DAG.
//!
//! [`block_dag`] recomputes everything on every call. This crate decides what to draw and when a
//! previous result can be reused.

pub use crate::{
    latest_layout::{LatestLayout, Ticket},
    layout_cache::LayoutCache,
    view_options::ViewOptions,
};

mod latest_layout;
mod layout_cache;
mod view_options;
