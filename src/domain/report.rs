//! Fixed report datasets and the export format tag.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TrackerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    pub month: &'static str,
    pub emails: u32,
    pub calls: u32,
    pub social_posts: u32,
}

pub const COMMUNICATION_TRENDS: [TrendPoint; 4] = [
    TrendPoint { month: "Jan", emails: 65, calls: 45, social_posts: 30 },
    TrendPoint { month: "Feb", emails: 75, calls: 55, social_posts: 40 },
    TrendPoint { month: "Mar", emails: 85, calls: 35, social_posts: 50 },
    TrendPoint { month: "Apr", emails: 95, calls: 65, social_posts: 45 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendSeries {
    Emails,
    Calls,
    SocialPosts,
}

impl TrendSeries {
    pub const ALL: [TrendSeries; 3] = [TrendSeries::Emails, TrendSeries::Calls, TrendSeries::SocialPosts];

    pub fn title(&self) -> &'static str {
        match self {
            TrendSeries::Emails => "emails",
            TrendSeries::Calls => "calls",
            TrendSeries::SocialPosts => "linkedinPosts",
        }
    }

    pub fn value(&self, point: &TrendPoint) -> u32 {
        match self {
            TrendSeries::Emails => point.emails,
            TrendSeries::Calls => point.calls,
            TrendSeries::SocialPosts => point.social_posts,
        }
    }

    /// `(x, y)` pairs with x = month index, ready for a line chart.
    pub fn points(&self, trend: &[TrendPoint]) -> Vec<(f64, f64)> {
        trend
            .iter()
            .enumerate()
            .map(|(idx, point)| (idx as f64, f64::from(self.value(point))))
            .collect()
    }
}

/// Largest value across all series; the chart's y bound.
pub fn trend_peak(trend: &[TrendPoint]) -> u32 {
    trend
        .iter()
        .flat_map(|point| TrendSeries::ALL.iter().map(move |series| series.value(point)))
        .max()
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodShare {
    pub name: &'static str,
    pub value: u32,
}

pub const METHOD_DISTRIBUTION: [MethodShare; 4] = [
    MethodShare { name: "Email", value: 400 },
    MethodShare { name: "Phone Call", value: 300 },
    MethodShare { name: "LinkedIn Post", value: 200 },
    MethodShare { name: "Visit", value: 100 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(TrackerError::InvalidExportFormat(other.to_string())),
        }
    }
}
