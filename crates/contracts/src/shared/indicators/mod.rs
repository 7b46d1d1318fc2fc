use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Display metadata
// ---------------------------------------------------------------------------

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Percent { decimals: u8 },
    Integer,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Money { currency } => format!("{}{}", currency, group_thousands(value, 2)),
            ValueFormat::Percent { decimals } => {
                format!("{:.*}%", *decimals as usize, value)
            }
            ValueFormat::Integer => group_thousands(value, 0),
        }
    }
}

/// `12340.5` with 2 decimals becomes `12,340.50`
fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

impl IndicatorStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            IndicatorStatus::Good => "stat-card stat-card--success",
            IndicatorStatus::Bad => "stat-card stat-card--error",
            IndicatorStatus::Warning => "stat-card stat-card--warning",
            IndicatorStatus::Neutral => "stat-card",
        }
    }
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// One number on a summary card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatTile {
    pub label: String,
    /// Icon name understood by the frontend `icon()` helper
    pub icon: String,
    pub value: f64,
    pub format: ValueFormat,
    pub status: IndicatorStatus,
}

impl StatTile {
    pub fn new(label: &str, icon: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            value,
            format: ValueFormat::Integer,
            status: IndicatorStatus::Neutral,
        }
    }

    pub fn with_format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_status(mut self, status: IndicatorStatus) -> Self {
        self.status = status;
        self
    }

    pub fn display_value(&self) -> String {
        self.format.format(self.value)
    }
}

/// Labeled numeric series fed to a bar chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub points: Vec<(String, f64)>,
}

impl ChartSeries {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            points: Vec::new(),
        }
    }

    pub fn point(mut self, label: impl Into<String>, value: f64) -> Self {
        self.points.push((label.into(), value));
        self
    }

    /// Largest value, 0 for an empty series
    pub fn max(&self) -> f64 {
        self.points
            .iter()
            .map(|(_, v)| *v)
            .fold(0.0, f64::max)
    }

    /// Value as a fraction of the series maximum, for bar heights
    pub fn ratio(&self, value: f64) -> f64 {
        let max = self.max();
        if max <= 0.0 {
            0.0
        } else {
            (value / max).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_formats() {
        assert_eq!(ValueFormat::Integer.format(12340.0), "12,340");
        assert_eq!(ValueFormat::Integer.format(560.0), "560");
        assert_eq!(
            ValueFormat::Money {
                currency: "$".into()
            }
            .format(1200.0),
            "$1,200.00"
        );
        assert_eq!(ValueFormat::Percent { decimals: 1 }.format(12.8), "12.8%");
    }

    #[test]
    fn test_chart_ratio() {
        let series = ChartSeries::new("Traffic").point("Jan", 50.0).point("Feb", 200.0);
        assert_eq!(series.max(), 200.0);
        assert_eq!(series.ratio(50.0), 0.25);
        assert_eq!(ChartSeries::new("Empty").ratio(10.0), 0.0);
    }
}
