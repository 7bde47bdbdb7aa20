//! Joins the catalogs with the coordinate transform: which stars can a given
//! city see at a given instant?

use crate::{Error, Result};
use rayon::prelude::*;
use serde::Serialize;
use stargaze_catalog::{find_asterism, find_city, find_star, Asterism, City, Star, STARS};
use stargaze_coords::{compute_horizontal, is_visible, HorizontalCoordinate, DEFAULT_MIN_ALTITUDE_DEG};
use stargaze_core::GeoCoordinate;
use stargaze_time::Instant;
use tracing::debug;

/// Observing conditions shared by every query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObservingConfig {
    /// Stars must be strictly above this altitude to count as visible.
    pub min_altitude_deg: f64,
}

impl ObservingConfig {
    pub const fn with_min_altitude(min_altitude_deg: f64) -> Self {
        Self { min_altitude_deg }
    }
}

impl Default for ObservingConfig {
    fn default() -> Self {
        Self::with_min_altitude(DEFAULT_MIN_ALTITUDE_DEG)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StarVisibility {
    pub star: &'static Star,
    pub position: HorizontalCoordinate,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsterismVisibility {
    pub asterism: &'static Asterism,
    pub members: Vec<StarVisibility>,
}

impl AsterismVisibility {
    pub fn visible_count(&self) -> usize {
        self.members.iter().filter(|m| m.visible).count()
    }

    pub fn total(&self) -> usize {
        self.members.len()
    }

    pub fn is_fully_visible(&self) -> bool {
        !self.members.is_empty() && self.visible_count() == self.total()
    }

    /// At least one member up, but not all of them.
    pub fn is_partially_visible(&self) -> bool {
        let count = self.visible_count();
        count > 0 && count < self.total()
    }
}

/// An observer standing in a catalog city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub city: &'static City,
}

impl Observer {
    pub fn new(city: &'static City) -> Self {
        Self { city }
    }

    pub fn for_city(name: &str) -> Result<Self> {
        let city = find_city(name).ok_or_else(|| Error::UnknownCity(name.trim().to_string()))?;
        debug!(query = name, city = city.name, "resolved city");
        Ok(Self::new(city))
    }

    pub fn location(&self) -> GeoCoordinate {
        self.city.location()
    }

    pub fn observe(&self, star: &'static Star, instant: &Instant, config: &ObservingConfig) -> StarVisibility {
        let position = compute_horizontal(
            instant,
            self.city.latitude_deg,
            self.city.longitude_deg,
            star.right_ascension_deg,
            star.declination_deg,
        );
        StarVisibility {
            star,
            position,
            visible: is_visible(position.altitude_deg, config.min_altitude_deg),
        }
    }

    /// Looks up `star` by id or Chinese name and observes it.
    pub fn star(&self, star: &str, instant: &Instant, config: &ObservingConfig) -> Result<StarVisibility> {
        let entry = find_star(star).ok_or_else(|| Error::UnknownStar(star.trim().to_string()))?;
        debug!(query = star, star = entry.id, "resolved star");
        Ok(self.observe(entry, instant, config))
    }

    /// Every catalog star, in catalog order.
    pub fn sky(&self, instant: &Instant, config: &ObservingConfig) -> Vec<StarVisibility> {
        STARS
            .par_iter()
            .map(|star| self.observe(star, instant, config))
            .collect()
    }

    /// Up to `limit` visible stars that have a magnitude, brightest first.
    pub fn brightest_visible(
        &self,
        instant: &Instant,
        config: &ObservingConfig,
        limit: usize,
    ) -> Vec<StarVisibility> {
        let mut ranked: Vec<_> = self
            .sky(instant, config)
            .into_iter()
            .filter(|entry| entry.visible && entry.star.magnitude.is_some())
            .collect();
        ranked.sort_by(|a, b| {
            let a = a.star.magnitude.unwrap_or(f64::INFINITY);
            let b = b.star.magnitude.unwrap_or(f64::INFINITY);
            a.total_cmp(&b)
        });
        ranked.truncate(limit);
        ranked
    }

    pub fn asterism(
        &self,
        asterism: &str,
        instant: &Instant,
        config: &ObservingConfig,
    ) -> Result<AsterismVisibility> {
        let entry = find_asterism(asterism)
            .ok_or_else(|| Error::UnknownAsterism(asterism.trim().to_string()))?;
        let members = entry
            .resolve_members()
            .map_err(|issue| Error::InvalidCatalog(vec![issue]))?
            .into_iter()
            .map(|star| self.observe(star, instant, config))
            .collect();
        Ok(AsterismVisibility {
            asterism: entry,
            members,
        })
    }
}
