//! Styleguide discovery and aggregation.
//!
//! This crate walks template roots for the reserved styleguide directory,
//! turns template files into [`Component`] records via the doc pipeline in
//! `vitrine-parser`, groups them into [`Module`]s by top-level folder, and
//! assembles the rendering context an authorized user's index page is built
//! from.
//!
//! Host-framework concerns are injected at the seams:
//!
//! - [`LinkResolver`] produces routed URLs (index / module / component).
//! - [`GuideCache`] holds a built guide between requests.
//! - [`AccessPolicy`] decides who may see the styleguide at all.

pub mod access;
pub mod cache;
pub mod component;
pub mod discover;
pub mod error;
pub mod guide;
pub mod links;
pub mod naming;
pub mod view;
pub mod walker;

pub use access::{AccessPolicy, StaffAccess, UserProfile};
pub use cache::{GuideCache, MemoryCache};
pub use component::{Component, Module};
pub use error::CatalogError;
pub use guide::{Styleguide, StyleguideLoader};
pub use links::{LinkResolver, PathLinks};
pub use view::{RenderContext, StyleguideView, ViewOutcome};
