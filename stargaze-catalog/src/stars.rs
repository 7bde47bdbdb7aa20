use crate::lookup::{find_by_name, Named};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A fixed point on the sky, J2000 right ascension and declination in degrees.
///
/// `magnitude` is `None` for cluster centres and pattern members whose
/// brightness is not tracked. Such entries still have usable positions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Star {
    pub id: &'static str,
    pub zh: &'static str,
    pub right_ascension_deg: f64,
    pub declination_deg: f64,
    pub magnitude: Option<f64>,
}

impl Star {
    /// English display name: the id with underscores shown as spaces.
    pub fn display_name(&self) -> String {
        self.id.replace('_', " ")
    }

    pub fn has_magnitude(&self) -> bool {
        self.magnitude.is_some()
    }
}

impl Named for Star {
    fn name(&self) -> &str {
        self.id
    }

    fn aliases(&self) -> &[&'static str] {
        std::slice::from_ref(&self.zh)
    }
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} RA={:.3}° Dec={:+.3}°",
            self.id, self.right_ascension_deg, self.declination_deg
        )?;
        if let Some(mag) = self.magnitude {
            write!(f, " mag={:.2}", mag)?;
        }
        Ok(())
    }
}

const fn star(id: &'static str, zh: &'static str, ra: f64, dec: f64, mag: f64) -> Star {
    Star {
        id,
        zh,
        right_ascension_deg: ra,
        declination_deg: dec,
        magnitude: Some(mag),
    }
}

const fn marker(id: &'static str, zh: &'static str, ra: f64, dec: f64) -> Star {
    Star {
        id,
        zh,
        right_ascension_deg: ra,
        declination_deg: dec,
        magnitude: None,
    }
}

pub static STARS: &[Star] = &[
    star("Sirius", "天狼星", 101.287, -16.716, -1.46),
    star("Vega", "织女一", 279.234, 38.783, 0.03),
    star("Canopus", "老人星", 95.987, -52.695, -0.72),
    star("Castor", "北河二", 113.649, 31.888, 1.6),
    star("Pollux", "北河三", 116.329, 28.026, 1.1),
    star("Capella", "五车二", 79.172, 45.998, 0.08),
    star("Alpha_Cen", "南门二", 219.902, -60.835, -0.27),
    star("Fomalhaut", "北落师门", 344.412, -29.622, 1.16),
    star("Altair", "河鼓二", 297.695, 8.868, 0.77),
    star("Deneb", "天津四", 310.358, 45.280, 1.25),
    star("Antares", "心宿二", 247.351, -26.432, 1.09),
    star("Betelgeuse", "参宿四", 88.792, 7.407, 0.5),
    star("Alphard", "星宿一", 141.896, -8.658, 2.0),
    star("Aldebaran", "毕宿五", 68.980, 16.509, 0.86),
    star("Spica", "角宿一", 201.298, -11.161, 1.0),
    star("Rigel", "参宿七", 78.634, -8.201, 0.13),
    star("Procyon", "南河三", 114.825, 5.225, 0.40),
    star("Regulus", "轩辕十四", 152.093, 11.967, 1.35),
    star("Arcturus", "大角", 213.915, 19.182, -0.05),
    star("Polaris", "勾陈一", 37.954, 89.264, 1.97),
    // seasonal pattern members
    marker("Denebola", "五帝座一", 177.264, 14.572),
    marker("Alpheratz", "壁宿二", 2.096, 29.090),
    marker("Scheat", "室宿二", 345.0, 28.083),
    marker("Markab", "室宿一", 346.190, 15.205),
    marker("Algenib", "壁宿一", 3.308, 15.183),
    // cluster centre
    marker("Pleiades", "昴星团", 56.75, 24.12),
    // Big Dipper, three representative stars
    marker("Dubhe", "天枢", 165.46, 61.75),
    marker("Alioth", "玉衡", 193.51, 55.96),
    marker("Alkaid", "摇光", 206.89, 49.31),
];

/// Looks up a star by id or Chinese name.
pub fn find_star(query: &str) -> Option<&'static Star> {
    find_by_name(STARS, query)
}

/// Stars with a known magnitude, brightest (lowest magnitude) first.
/// Entries without a magnitude are left out.
pub fn stars_by_magnitude() -> Vec<&'static Star> {
    let mut ranked: Vec<&'static Star> = STARS.iter().filter(|s| s.has_magnitude()).collect();
    ranked.sort_by(|a, b| {
        let a = a.magnitude.unwrap_or(f64::INFINITY);
        let b = b.magnitude.unwrap_or(f64::INFINITY);
        a.total_cmp(&b)
    });
    ranked
}
