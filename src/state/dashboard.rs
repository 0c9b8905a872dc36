//! Sensor classification for the dashboard telemetry cards.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// How a reading sits relative to its comfort band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorLevel {
    Low,
    Normal,
    High,
}

/// Classified reading, ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorStatus {
    pub level: SensorLevel,
    pub label: &'static str,
    /// Fill fraction for the reading's progress bar, 0..=100.
    pub percentage: f64,
}

struct SensorBand {
    low: f64,
    high: f64,
    labels: [&'static str; 3],
}

fn band_for(kind: &str) -> SensorBand {
    match kind {
        "TEMPERATURE" => SensorBand {
            low: 18.0,
            high: 24.0,
            labels: ["Cold", "Comfortable", "Warm"],
        },
        "HUMIDITY" => SensorBand {
            low: 30.0,
            high: 60.0,
            labels: ["Dry", "Optimal", "Humid"],
        },
        "CO2" => SensorBand {
            low: 0.0,
            high: 800.0,
            labels: ["Fresh", "Good", "Ventilate!"],
        },
        "ENERGY_USAGE" => SensorBand {
            low: 0.0,
            high: 200.0,
            labels: ["Low", "Normal", "High"],
        },
        _ => SensorBand {
            low: 0.0,
            high: 100.0,
            labels: ["Low", "Normal", "High"],
        },
    }
}

/// Classify a sensor reading against the band for its kind.
///
/// CO2 is special-cased: lower is strictly better, with 600 ppm as the
/// fresh-air cutoff.
pub fn classify(kind: &str, value: f64) -> SensorStatus {
    let band = band_for(kind);
    let range = band.high - band.low;
    let percentage = (((value - band.low) / range) * 100.0).clamp(0.0, 100.0);

    if kind == "CO2" {
        return if value <= 600.0 {
            SensorStatus { level: SensorLevel::Low, label: band.labels[0], percentage }
        } else if value <= 800.0 {
            SensorStatus { level: SensorLevel::Normal, label: band.labels[1], percentage }
        } else {
            SensorStatus { level: SensorLevel::High, label: band.labels[2], percentage }
        };
    }

    if value < band.low {
        SensorStatus { level: SensorLevel::Low, label: band.labels[0], percentage: 20.0 }
    } else if value <= band.high {
        SensorStatus { level: SensorLevel::Normal, label: band.labels[1], percentage }
    } else {
        SensorStatus { level: SensorLevel::High, label: band.labels[2], percentage: 100.0 }
    }
}

/// Icon glyph for a sensor kind.
pub fn icon_for(kind: &str) -> &'static str {
    match kind {
        "TEMPERATURE" => "\u{1f321}\u{fe0f}",
        "HUMIDITY" => "\u{1f4a7}",
        "CO2" => "\u{1f32c}\u{fe0f}",
        "ENERGY_USAGE" => "\u{26a1}",
        _ => "\u{1f4ca}",
    }
}
