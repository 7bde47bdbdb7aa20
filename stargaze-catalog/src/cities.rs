use crate::lookup::{find_by_name, Named};
use stargaze_core::GeoCoordinate;

#[cfg(feature = "serde")]
use serde::Serialize;

/// An observing site. Longitude is east-positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct City {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// ISO 3166-1 alpha-2 code.
    pub country: Option<&'static str>,
}

impl City {
    pub fn location(&self) -> GeoCoordinate {
        GeoCoordinate::new_unchecked(self.latitude_deg, self.longitude_deg)
    }
}

impl Named for City {
    fn name(&self) -> &str {
        self.name
    }

    fn aliases(&self) -> &[&'static str] {
        self.aliases
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.country {
            Some(country) => write!(f, "{}, {} ({})", self.name, country, self.location()),
            None => write!(f, "{} ({})", self.name, self.location()),
        }
    }
}

macro_rules! city {
    ($name:literal, [$($alias:literal),*], $lat:literal, $lon:literal, $country:literal) => {
        City {
            name: $name,
            aliases: &[$($alias),*],
            latitude_deg: $lat,
            longitude_deg: $lon,
            country: Some($country),
        }
    };
}

pub static CITIES: &[City] = &[
    city!("Princeton", ["普林斯顿"], 40.343, -74.651, "US"),
    city!("New York", ["纽约", "NYC"], 40.7128, -74.006, "US"),
    city!("Los Angeles", ["洛杉矶", "LA"], 34.0522, -118.2437, "US"),
    city!("San Francisco", ["旧金山", "SF"], 37.7749, -122.4194, "US"),
    city!("Chicago", ["芝加哥"], 41.8781, -87.6298, "US"),
    city!("Toronto", ["多伦多"], 43.6532, -79.3832, "CA"),
    city!("Vancouver", ["温哥华"], 49.2827, -123.1207, "CA"),
    city!("Mexico City", ["墨西哥城"], 19.4326, -99.1332, "MX"),
    city!("São Paulo", ["聖保羅", "圣保罗", "Sao Paulo"], -23.5505, -46.6333, "BR"),
    city!("London", ["伦敦"], 51.5074, -0.1278, "GB"),
    city!("Paris", ["巴黎"], 48.8566, 2.3522, "FR"),
    city!("Berlin", ["柏林"], 52.52, 13.405, "DE"),
    city!("Rome", ["罗马"], 41.9028, 12.4964, "IT"),
    city!("Moscow", ["莫斯科"], 55.7558, 37.6173, "RU"),
    city!("Istanbul", ["伊斯坦布尔"], 41.0082, 28.9784, "TR"),
    city!("Dubai", ["迪拜"], 25.2048, 55.2708, "AE"),
    city!("Delhi", ["德里", "新德里", "New Delhi"], 28.6139, 77.2090, "IN"),
    city!("Mumbai", ["孟买", "Bombay"], 19.0760, 72.8777, "IN"),
    city!("Bengaluru", ["班加罗尔", "Bangalore"], 12.9716, 77.5946, "IN"),
    city!("Beijing", ["北京"], 39.9042, 116.4074, "CN"),
    city!("Shanghai", ["上海"], 31.2304, 121.4737, "CN"),
    city!("Shenzhen", ["深圳"], 22.5431, 114.0579, "CN"),
    city!("Guangzhou", ["广州"], 23.1291, 113.2644, "CN"),
    city!("Hong Kong", ["香港", "HK"], 22.3193, 114.1694, "HK"),
    city!("Tokyo", ["东京"], 35.6762, 139.6503, "JP"),
    city!("Seoul", ["首尔", "漢城", "汉城"], 37.5665, 126.9780, "KR"),
    city!("Singapore", ["新加坡"], 1.3521, 103.8198, "SG"),
    city!("Sydney", ["悉尼"], -33.8688, 151.2093, "AU"),
    city!("Melbourne", ["墨尔本"], -37.8136, 144.9631, "AU"),
];

/// Looks up a city by English name or any alias (Chinese names, short forms).
pub fn find_city(query: &str) -> Option<&'static City> {
    find_by_name(CITIES, query)
}
