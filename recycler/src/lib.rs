//! A headless virtualized list engine that recycles a bounded set of view slots.
//!
//! For host-side glue (enable/disable lifecycle, scroll-to requests, an in-memory scroll
//! surface), see the `recycler-adapter` crate.
//!
//! The engine shows an arbitrarily long list through a fixed pool of view objects. The number of
//! live views and the work done per frame depend on the viewport size, never on the list
//! length. The pieces are:
//!
//! - [`ExtentResolver`]: fixed, measured, or viewport-derived item extent
//! - [`compute_window`] and [`ScrollGate`]: the index window to bind, and when to recompute it
//! - [`SlotPool`]: a LIFO free list of slots backed by a [`SlotFactory`]
//! - [`SlotBindingManager`]: position-stable reconciliation of slots against a window
//! - [`UpdateScheduler`]: coalescing of triggers into one pass per tick
//!
//! It is UI-agnostic. A host is expected to provide:
//! - a [`SlotFactory`] producing handles that implement [`SlotHandle`]
//! - a [`LayoutSource`] reporting viewport size, scroll offset and content width
//! - a call to [`VirtualList::tick`] once per frame
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod binding;
mod error;
mod extent;
mod layout;
mod list;
mod options;
mod pool;
mod scheduler;
mod slot;
mod state;
mod types;
mod window;


pub use binding::{BindLayout, BindingReport, SlotBindingManager};
pub use error::ListError;
pub use extent::{ExtentResolver, MIN_EXTENT, measure_prototype, resolve_extent, total_extent};
pub use layout::LayoutSource;
pub use list::VirtualList;
pub use options::{
    DEFAULT_BUFFER_SIZE, DEFAULT_ITEM_EXTENT, DEFAULT_TOTAL_COUNT, ItemRealizedCallback,
    ListOptions,
};
pub use pool::SlotPool;
pub use scheduler::{Trigger, UpdateScheduler, UpdateState};
pub use slot::{Slot, SlotFactory, SlotHandle};
pub use state::ListState;
pub use types::{Align, Extent, Window};
pub use window::{ScrollGate, UPDATE_THRESHOLD, clamp_scroll_offset, compute_window};
