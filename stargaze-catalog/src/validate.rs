//! Startup checks over the catalog tables.
//!
//! Lookups never fail loudly, so bad table data would otherwise surface only
//! as NaN positions or silently missing asterism members. [`validate`] finds
//! those problems up front; deciding what to do about them is up to the
//! application.

use crate::asterisms::{Asterism, ASTERISMS};
use crate::cities::{City, CITIES};
use crate::lookup::find_by_name;
use crate::stars::{Star, STARS};
use stargaze_core::angle::{
    validate_declination, validate_latitude, validate_longitude, validate_right_ascension,
};
use stargaze_core::{AstroError, AstroResult};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogIssue {
    #[error("city {city}: {source}")]
    InvalidCity {
        city: &'static str,
        source: AstroError,
    },

    #[error("star {star}: {source}")]
    InvalidStar {
        star: &'static str,
        source: AstroError,
    },

    #[error("{table}: name '{name}' is used by both {first} and {second}")]
    DuplicateName {
        table: &'static str,
        name: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("asterism {asterism} has no members")]
    EmptyAsterism { asterism: &'static str },

    #[error("asterism {asterism}: unknown member star '{member}'")]
    UnknownMember {
        asterism: &'static str,
        member: &'static str,
    },
}

/// Checks the built-in tables. An empty result means the catalog is usable.
pub fn validate() -> Vec<CatalogIssue> {
    validate_tables(CITIES, STARS, ASTERISMS)
}

/// Checks arbitrary tables: coordinate ranges, name uniqueness within each
/// table (case-insensitive, aliases included) and asterism membership.
pub fn validate_tables(cities: &[City], stars: &[Star], asterisms: &[Asterism]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    for city in cities {
        if let Err(source) = check_city(city) {
            issues.push(CatalogIssue::InvalidCity {
                city: city.name,
                source,
            });
        }
    }
    for star in stars {
        if let Err(source) = check_star(star) {
            issues.push(CatalogIssue::InvalidStar {
                star: star.id,
                source,
            });
        }
    }

    check_unique(
        "cities",
        cities.iter().map(|c| (c.name, c.aliases.iter().copied())),
        &mut issues,
    );
    check_unique(
        "stars",
        stars.iter().map(|s| (s.id, std::iter::once(s.zh))),
        &mut issues,
    );
    check_unique(
        "asterisms",
        asterisms.iter().map(|a| (a.id, std::iter::once(a.zh))),
        &mut issues,
    );

    for asterism in asterisms {
        if asterism.members.is_empty() {
            issues.push(CatalogIssue::EmptyAsterism {
                asterism: asterism.id,
            });
        }
        for &member in asterism.members {
            if find_by_name(stars, member).is_none() {
                issues.push(CatalogIssue::UnknownMember {
                    asterism: asterism.id,
                    member,
                });
            }
        }
    }

    issues
}

fn check_city(city: &City) -> AstroResult<()> {
    validate_latitude(city.latitude_deg)?;
    validate_longitude(city.longitude_deg)?;
    Ok(())
}

fn check_star(star: &Star) -> AstroResult<()> {
    validate_right_ascension(star.right_ascension_deg, false)?;
    validate_declination(star.declination_deg)?;
    match star.magnitude {
        Some(mag) if !mag.is_finite() => Err(AstroError::not_finite("magnitude", mag)),
        _ => Ok(()),
    }
}

fn check_unique<I, A>(table: &'static str, entries: I, issues: &mut Vec<CatalogIssue>)
where
    I: Iterator<Item = (&'static str, A)>,
    A: Iterator<Item = &'static str>,
{
    let mut seen: HashMap<String, &'static str> = HashMap::new();
    for (owner, aliases) in entries {
        for name in std::iter::once(owner).chain(aliases) {
            let key = name.trim().to_lowercase();
            match seen.get(&key) {
                Some(&first) if first != owner => issues.push(CatalogIssue::DuplicateName {
                    table,
                    name,
                    first,
                    second: owner,
                }),
                Some(_) => {}
                None => {
                    seen.insert(key, owner);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert_eq!(validate(), Vec::new());
    }

    #[test]
    fn test_bad_coordinates() {
        let cities = [City {
            name: "Nowhere",
            aliases: &[],
            latitude_deg: 91.0,
            longitude_deg: 0.0,
            country: None,
        }];
        let stars = [Star {
            id: "Ghost",
            zh: "鬼",
            right_ascension_deg: f64::NAN,
            declination_deg: 0.0,
            magnitude: None,
        }];
        let issues = validate_tables(&cities, &stars, &[]);
        assert_eq!(issues.len(), 2);
        assert!(matches!(
            &issues[0],
            CatalogIssue::InvalidCity { city: "Nowhere", source } if source.quantity() == "latitude"
        ));
        assert!(matches!(
            &issues[1],
            CatalogIssue::InvalidStar { star: "Ghost", source } if source.quantity() == "right ascension"
        ));
    }

    #[test]
    fn test_non_finite_magnitude() {
        let stars = [Star {
            id: "Flare",
            zh: "耀",
            right_ascension_deg: 10.0,
            declination_deg: 10.0,
            magnitude: Some(f64::INFINITY),
        }];
        let issues = validate_tables(&[], &stars, &[]);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].to_string().starts_with("star Flare: magnitude"));
    }

    #[test]
    fn test_duplicate_alias_across_entries() {
        fn city(name: &'static str, aliases: &'static [&'static str]) -> City {
            City {
                name,
                aliases,
                latitude_deg: 0.0,
                longitude_deg: 0.0,
                country: None,
            }
        }
        let cities = [city("Alpha", &["AB"]), city("Beta", &["ab"])];
        let issues = validate_tables(&cities, &[], &[]);
        assert_eq!(
            issues,
            vec![CatalogIssue::DuplicateName {
                table: "cities",
                name: "ab",
                first: "Alpha",
                second: "Beta",
            }]
        );
    }

    #[test]
    fn test_asterism_membership() {
        let asterisms = [
            Asterism {
                id: "Lonely",
                zh: "孤",
                members: &[],
            },
            Asterism {
                id: "Lost",
                zh: "失",
                members: &["Vega", "Nibiru"],
            },
        ];
        let issues = validate_tables(&[], STARS, &asterisms);
        assert_eq!(
            issues,
            vec![
                CatalogIssue::EmptyAsterism { asterism: "Lonely" },
                CatalogIssue::UnknownMember {
                    asterism: "Lost",
                    member: "Nibiru"
                },
            ]
        );
    }
}
