//! Rendering of query results as localized tables or JSON.

use crate::i18n::{asterism_name, city_name, direction_name, star_name, t, t_args, LocaleConfig};
use crate::observe::{AsterismVisibility, Observer, ObservingConfig, StarVisibility};
use crate::Result;
use serde::Serialize;
use stargaze_catalog::{CITIES, STARS};
use stargaze_time::Instant;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Text(String),
    Table {
        title: Option<String>,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        footer: Option<String>,
    },
    Json(serde_json::Value),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Text(text) => f.write_str(text),
            Output::Table {
                title,
                headers,
                rows,
                footer,
            } => {
                if let Some(title) = title {
                    writeln!(f, "{title}\n")?;
                }
                write_table(f, headers, rows)?;
                if let Some(footer) = footer {
                    write!(f, "\n{footer}")?;
                }
                Ok(())
            }
            Output::Json(value) => {
                let text = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
        }
    }
}

fn write_table(f: &mut fmt::Formatter<'_>, headers: &[String], rows: &[Vec<String>]) -> fmt::Result {
    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            let hw = headers[i].chars().count();
            let rw = rows
                .iter()
                .map(|r| r.get(i).map_or(0, |s| s.chars().count()))
                .max()
                .unwrap_or(0);
            hw.max(rw)
        })
        .collect();

    let write_row = |f: &mut fmt::Formatter<'_>, cells: &[String]| -> fmt::Result {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            let pad = widths.get(i).copied().unwrap_or(0).saturating_sub(cell.chars().count());
            if i == 0 {
                line.push_str(cell);
                line.push_str(&" ".repeat(pad));
            } else {
                line.push_str("  ");
                line.push_str(&" ".repeat(pad));
                line.push_str(cell);
            }
        }
        writeln!(f, "{}", line.trim_end())
    };

    write_row(f, headers)?;
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    write_row(f, &rule)?;
    for row in rows {
        write_row(f, row)?;
    }
    Ok(())
}

/// What a query was asked about: where, when, and how high is high enough.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub observer: &'a Observer,
    pub instant: &'a Instant,
    pub config: &'a ObservingConfig,
}

#[derive(Serialize)]
struct Envelope<T: Serialize> {
    city: &'static str,
    latitude_deg: f64,
    longitude_deg: f64,
    time: String,
    min_altitude_deg: f64,
    #[serde(flatten)]
    body: T,
}

#[derive(Serialize)]
struct StarRow {
    id: &'static str,
    name: String,
    altitude_deg: f64,
    azimuth_deg: f64,
    direction: &'static str,
    magnitude: Option<f64>,
    visible: bool,
}

#[derive(Serialize)]
struct SkyBody {
    visible_count: usize,
    stars: Vec<StarRow>,
}

#[derive(Serialize)]
struct AsterismBody {
    asterism: &'static str,
    name: String,
    visible_count: usize,
    fully_visible: bool,
    partially_visible: bool,
    members: Vec<StarRow>,
}

/// Renders results in one language and one output format.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub locale: &'a LocaleConfig,
    pub format: OutputFormat,
}

impl<'a> Report<'a> {
    pub fn new(locale: &'a LocaleConfig, format: OutputFormat) -> Self {
        Self { locale, format }
    }

    pub fn star(&self, ctx: &Context<'_>, result: &StarVisibility) -> Result<Output> {
        match self.format {
            OutputFormat::Json => self.json(ctx, self.star_row(result)),
            OutputFormat::Table => {
                let key = if result.visible { "star.visible" } else { "star.hidden" };
                let line = t_args(
                    self.locale,
                    key,
                    &[
                        ("star", &star_name(self.locale.current, result.star)),
                        ("alt", &format!("{:+.2}", result.position.altitude_deg)),
                        ("az", &format!("{:.2}", result.position.azimuth_deg)),
                        ("dir", &self.direction(result)),
                    ],
                );
                Ok(Output::Text(format!("{}\n{}", self.header(ctx), line)))
            }
        }
    }

    pub fn sky(&self, ctx: &Context<'_>, results: &[StarVisibility]) -> Result<Output> {
        let visible_count = results.iter().filter(|r| r.visible).count();
        let summary = t_args(
            self.locale,
            "sky.summary",
            &[("count", &visible_count), ("total", &results.len())],
        );
        self.star_list(ctx, results, visible_count, summary)
    }

    /// The output of [`Observer::brightest_visible`](crate::Observer::brightest_visible):
    /// every row is visible, so the footer names the count rather than a ratio.
    pub fn brightest(&self, ctx: &Context<'_>, results: &[StarVisibility]) -> Result<Output> {
        let visible_count = results.iter().filter(|r| r.visible).count();
        let summary = t_args(self.locale, "sky.brightest", &[("count", &visible_count)]);
        self.star_list(ctx, results, visible_count, summary)
    }

    fn star_list(
        &self,
        ctx: &Context<'_>,
        results: &[StarVisibility],
        visible_count: usize,
        summary: String,
    ) -> Result<Output> {
        match self.format {
            OutputFormat::Json => self.json(
                ctx,
                SkyBody {
                    visible_count,
                    stars: results.iter().map(|r| self.star_row(r)).collect(),
                },
            ),
            OutputFormat::Table => {
                let footer = if visible_count == 0 {
                    t_args(
                        self.locale,
                        "sky.none_visible",
                        &[("min_alt", &ctx.config.min_altitude_deg)],
                    )
                } else {
                    summary
                };
                Ok(self.star_table(ctx, results, footer))
            }
        }
    }

    pub fn asterism(&self, ctx: &Context<'_>, result: &AsterismVisibility) -> Result<Output> {
        let name = asterism_name(self.locale.current, result.asterism);
        match self.format {
            OutputFormat::Json => self.json(
                ctx,
                AsterismBody {
                    asterism: result.asterism.id,
                    name,
                    visible_count: result.visible_count(),
                    fully_visible: result.is_fully_visible(),
                    partially_visible: result.is_partially_visible(),
                    members: result.members.iter().map(|r| self.star_row(r)).collect(),
                },
            ),
            OutputFormat::Table => {
                let key = if result.is_fully_visible() {
                    "asterism.full"
                } else if result.is_partially_visible() {
                    "asterism.partial"
                } else {
                    "asterism.hidden"
                };
                let footer = t_args(
                    self.locale,
                    key,
                    &[
                        ("asterism", &name),
                        ("count", &result.visible_count()),
                        ("total", &result.total()),
                    ],
                );
                Ok(self.star_table(ctx, &result.members, footer))
            }
        }
    }

    pub fn cities(&self) -> Result<Output> {
        match self.format {
            OutputFormat::Json => Ok(Output::Json(serde_json::to_value(CITIES)?)),
            OutputFormat::Table => {
                let rows = CITIES
                    .iter()
                    .map(|city| {
                        vec![
                            city_name(self.locale.current, city).to_string(),
                            city.country.unwrap_or("").to_string(),
                            format!("{:+.4}", city.latitude_deg),
                            format!("{:+.4}", city.longitude_deg),
                        ]
                    })
                    .collect();
                Ok(Output::Table {
                    title: None,
                    headers: self.headers(&["field.city", "field.country", "field.latitude", "field.longitude"]),
                    rows,
                    footer: None,
                })
            }
        }
    }

    pub fn stars(&self) -> Result<Output> {
        match self.format {
            OutputFormat::Json => Ok(Output::Json(serde_json::to_value(STARS)?)),
            OutputFormat::Table => {
                let rows = STARS
                    .iter()
                    .map(|star| {
                        vec![
                            star_name(self.locale.current, star),
                            format!("{:.3}", star.right_ascension_deg),
                            format!("{:+.3}", star.declination_deg),
                            format_magnitude(star.magnitude),
                        ]
                    })
                    .collect();
                Ok(Output::Table {
                    title: None,
                    headers: self.headers(&["field.star", "field.ra", "field.dec", "field.magnitude"]),
                    rows,
                    footer: None,
                })
            }
        }
    }

    /// A single localized message, e.g. `lang.current`, as text or JSON.
    pub fn message(&self, key: &str, locale: crate::i18n::Locale) -> Output {
        match self.format {
            OutputFormat::Json => Output::Json(serde_json::json!({ "lang": locale })),
            OutputFormat::Table => Output::Text(t_args(self.locale, key, &[("locale", &locale)])),
        }
    }

    fn header(&self, ctx: &Context<'_>) -> String {
        t_args(
            self.locale,
            "observe.header",
            &[
                ("city", &city_name(self.locale.current, ctx.observer.city)),
                ("time", ctx.instant),
                ("min_alt", &ctx.config.min_altitude_deg),
            ],
        )
    }

    fn headers(&self, keys: &[&str]) -> Vec<String> {
        keys.iter().map(|key| t(self.locale, key).to_string()).collect()
    }

    fn direction(&self, result: &StarVisibility) -> String {
        direction_name(self.locale, result.position.cardinal_direction())
    }

    fn star_table(&self, ctx: &Context<'_>, results: &[StarVisibility], footer: String) -> Output {
        let yes = t(self.locale, "yes");
        let no = t(self.locale, "no");
        let rows = results
            .iter()
            .map(|r| {
                vec![
                    star_name(self.locale.current, r.star),
                    format!("{:+.2}", r.position.altitude_deg),
                    format!("{:.2}", r.position.azimuth_deg),
                    self.direction(r),
                    format_magnitude(r.star.magnitude),
                    if r.visible { yes } else { no }.to_string(),
                ]
            })
            .collect();
        Output::Table {
            title: Some(self.header(ctx)),
            headers: self.headers(&[
                "field.star",
                "field.altitude",
                "field.azimuth",
                "field.direction",
                "field.magnitude",
                "field.visible",
            ]),
            rows,
            footer: Some(footer),
        }
    }

    fn star_row(&self, result: &StarVisibility) -> StarRow {
        StarRow {
            id: result.star.id,
            name: star_name(self.locale.current, result.star),
            altitude_deg: result.position.altitude_deg,
            azimuth_deg: result.position.azimuth_deg,
            direction: result.position.cardinal_direction(),
            magnitude: result.star.magnitude,
            visible: result.visible,
        }
    }

    fn json<T: Serialize>(&self, ctx: &Context<'_>, body: T) -> Result<Output> {
        let envelope = Envelope {
            city: ctx.observer.city.name,
            latitude_deg: ctx.observer.city.latitude_deg,
            longitude_deg: ctx.observer.city.longitude_deg,
            time: ctx.instant.to_string(),
            min_altitude_deg: ctx.config.min_altitude_deg,
            body,
        };
        Ok(Output::Json(serde_json::to_value(envelope)?))
    }
}

fn format_magnitude(magnitude: Option<f64>) -> String {
    magnitude.map_or_else(|| "-".to_string(), |mag| format!("{mag:+.2}"))
}
