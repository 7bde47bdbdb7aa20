use crate::lookup::{find_by_name, Named};
use crate::stars::{Star, STARS};
use crate::validate::CatalogIssue;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A named group of stars, listed by star id in display order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Asterism {
    pub id: &'static str,
    pub zh: &'static str,
    pub members: &'static [&'static str],
}

impl Asterism {
    /// Member stars from the built-in star table, in declared order.
    pub fn resolve_members(&self) -> Result<Vec<&'static Star>, CatalogIssue> {
        self.resolve_members_in(STARS)
    }

    /// Member stars from `stars`, in declared order. Fails on the first
    /// member id with no matching entry.
    pub fn resolve_members_in<'a>(&self, stars: &'a [Star]) -> Result<Vec<&'a Star>, CatalogIssue> {
        self.members
            .iter()
            .map(|&member| {
                find_by_name(stars, member).ok_or(CatalogIssue::UnknownMember {
                    asterism: self.id,
                    member,
                })
            })
            .collect()
    }

    pub fn display_name(&self) -> String {
        let mut name = String::with_capacity(self.id.len() + 2);
        for (i, ch) in self.id.chars().enumerate() {
            if i > 0 && ch.is_uppercase() {
                name.push(' ');
            }
            name.push(ch);
        }
        name
    }
}

impl Named for Asterism {
    fn name(&self) -> &str {
        self.id
    }

    fn aliases(&self) -> &[&'static str] {
        std::slice::from_ref(&self.zh)
    }
}

pub static ASTERISMS: &[Asterism] = &[
    Asterism {
        id: "SpringTriangle",
        zh: "春季大三角",
        members: &["Arcturus", "Spica", "Regulus"],
    },
    Asterism {
        id: "SummerTriangle",
        zh: "夏季大三角",
        members: &["Vega", "Altair", "Deneb"],
    },
    Asterism {
        id: "WinterTriangle",
        zh: "冬季大三角",
        members: &["Sirius", "Betelgeuse", "Procyon"],
    },
    Asterism {
        id: "AutumnSquare",
        zh: "秋季四边形",
        members: &["Alpheratz", "Scheat", "Markab", "Algenib"],
    },
    Asterism {
        id: "BigDipper",
        zh: "北斗七星",
        members: &["Dubhe", "Alioth", "Alkaid"],
    },
    Asterism {
        id: "PleiadesGroup",
        zh: "昴星团",
        members: &["Pleiades"],
    },
];

/// Looks up an asterism by id or Chinese name.
pub fn find_asterism(query: &str) -> Option<&'static Asterism> {
    find_by_name(ASTERISMS, query)
}
