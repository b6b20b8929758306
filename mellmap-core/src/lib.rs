#![deny(missing_debug_implementations)]

//! # mellmap-core
//!
//! Platform agnostic logic of the catalog viewer and the admin console.
//!
//! Nothing in here touches the DOM or the network, so everything
//! can be tested natively.

pub mod breakfast;
pub mod carousel;
pub mod console;
pub mod district;
pub mod filter;
pub mod form;
pub mod geo;
pub mod overlay;
pub mod photo;
pub mod price;
pub mod sort;
pub mod task;

pub use mellmap_boundary as boundary;
