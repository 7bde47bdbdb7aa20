//! Star visibility for cities around the world, in English or Chinese.
//!
//! Ties the catalog tables to the coordinate transform and adds the
//! application concerns: localized messages, the saved language preference,
//! and table/JSON rendering for the `stargaze` binary.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`observe`] | [`Observer`], [`ObservingConfig`], per-star and per-asterism visibility |
//! | [`i18n`] | [`Locale`](i18n::Locale), [`LocaleConfig`](i18n::LocaleConfig), embedded message tables, localized names |
//! | [`locale_store`] | [`LocaleStore`]: saved language preference on disk |
//! | [`report`] | [`Report`](report::Report) rendering to tables or JSON |
//! | [`error`] | [`Error`] and [`Result`] |
//!
//! # Quick Start
//!
//! ```
//! use stargaze::{Observer, ObservingConfig};
//! use stargaze_time::Instant;
//!
//! let at: Instant = "2024-03-21T04:00:00Z".parse()?;
//! let princeton = Observer::for_city("普林斯顿")?;
//! let vega = princeton.star("Vega", &at, &ObservingConfig::with_min_altitude(5.0))?;
//! assert!(vega.visible);
//! # Ok::<(), stargaze::Error>(())
//! ```

pub mod error;
pub mod i18n;
pub mod locale_store;
pub mod observe;
pub mod report;

pub use error::{Error, Result};
pub use locale_store::LocaleStore;
pub use observe::{AsterismVisibility, Observer, ObservingConfig, StarVisibility};
