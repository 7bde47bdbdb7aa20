//! Built-in observing catalogs: cities, bright stars and asterisms.
//!
//! All tables are `'static` slices compiled into the binary. They are never
//! mutated, so any number of threads may read them without coordination.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`lookup`] | [`Named`] trait and case-insensitive [`find_by_name`] |
//! | [`cities`] | [`City`] table and [`find_city`] |
//! | [`stars`] | [`Star`] table, [`find_star`], brightness ordering |
//! | [`asterisms`] | [`Asterism`] table, [`find_asterism`], member resolution |
//! | [`validate`] | Startup sanity checks returning [`CatalogIssue`]s |
//!
//! # Quick Start
//!
//! ```
//! use stargaze_catalog::{find_city, find_star};
//!
//! let beijing = find_city("北京").unwrap();
//! assert_eq!(beijing.name, "Beijing");
//!
//! let vega = find_star("vega").unwrap();
//! assert_eq!(vega.zh, "织女一");
//! assert!(stargaze_catalog::validate().is_empty());
//! ```

pub mod asterisms;
pub mod cities;
pub mod lookup;
pub mod stars;
pub mod validate;

pub use asterisms::{find_asterism, Asterism, ASTERISMS};
pub use cities::{find_city, City, CITIES};
pub use lookup::{find_by_name, Named};
pub use stars::{find_star, stars_by_magnitude, Star, STARS};
pub use validate::{validate, validate_tables, CatalogIssue};
