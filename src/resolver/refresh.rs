//! Minimum-refresh-rate derivation.
//!
//! The driver needs a minimum panel refresh rate; it is normally derived
//! from the declared update interval, and only set explicitly when the
//! display is driven by the external rendering engine (update interval
//! `never`).

use crate::models::{RawDisplayConfig, UpdateInterval};

use super::report::{ConfigError, ConfigErrorKind, ValidationReport};

/// Default refresh rate when nothing usable is declared, in Hz.
const DEFAULT_REFRESH_HZ: u32 = 60;
/// Derived rates are clamped into this range (matches the schema range
/// for an explicit `min_refresh_rate`).
const MIN_REFRESH_HZ: u32 = 40;
const MAX_REFRESH_HZ: u32 = 200;

/// Derives the effective minimum refresh rate, in Hz.
///
/// Rules, in order:
/// 1. An explicit `min_refresh_rate` together with a real (non-`never`)
///    `update_interval` is a conflict — the rate is otherwise derived
///    from the interval and the two cannot be reconciled.
/// 2. An explicit rate is used verbatim.
/// 3. No interval, `never`, or a zero interval defaults to 60 Hz.
/// 4. Otherwise `1000 / interval_ms`, rounded half-away-from-zero
///    (`f64::round`, so 16 ms -> 62.5 -> 63) and clamped into [40, 200].
///
/// Pure function of its inputs: the same declaration always derives the
/// same rate.
pub fn derive_min_refresh_rate(raw: &RawDisplayConfig) -> Result<u32, ValidationReport> {
    let interval_ms = raw.update_interval.and_then(|i| i.as_millis());

    if raw.min_refresh_rate.is_some() && interval_ms.is_some() {
        let mut report = ValidationReport::new();
        report.add(ConfigError::new(
            ConfigErrorKind::ConflictingTiming,
            "min_refresh_rate",
            "Cannot set both 'min_refresh_rate' and 'update_interval' (except 'never'). \
             Refresh rate is auto-calculated from update_interval. \
             Remove 'min_refresh_rate' or use 'update_interval: never'.",
        ));
        return Err(report);
    }

    if let Some(rate) = raw.min_refresh_rate {
        return Ok(rate);
    }

    Ok(match raw.update_interval {
        None | Some(UpdateInterval::Never) | Some(UpdateInterval::Millis(0)) => DEFAULT_REFRESH_HZ,
        Some(UpdateInterval::Millis(ms)) => {
            let derived = (1000.0 / f64::from(ms)).round() as u32;
            derived.clamp(MIN_REFRESH_HZ, MAX_REFRESH_HZ)
        }
    })
}
