//! List engine for MarketDesk admin screens.
//!
//! Takes the full record collection fetched for a screen plus the current
//! criteria and computes the page to render:
//!
//! ```text
//! records ──filter──▶ matches ──sort──▶ ordered ──page──▶ visible window
//! ```
//!
//! - [`ListView`]: the pure pipeline, bound to a record schema
//! - [`FilterCriteria`], [`SortKey`], [`PageWindow`]: the criteria
//! - [`ListState`]: per-screen state that resets to page 1 when criteria change
//! - [`Selection`]: rows ticked for batch actions
//! - [`ListConfig`]: page size tiers and the default sort
//!
//! No stage performs I/O or keeps state between calls, so results are
//! safe to memoise on identical inputs. Debouncing keystroke-driven calls
//! is the caller's job.

mod config;
mod criteria;
mod error;
mod state;
mod view;

pub use config::{ListConfig, PAGE_SIZE_TIERS};
pub use criteria::{Choice, FilterCriteria, NumericRange, PageWindow, SortDirection, SortKey, ALL};
pub use error::{ListError, ListResult};
pub use state::{ListState, Selection};
pub use view::{paginate, total_pages, ListPage, ListQuery, ListView};
