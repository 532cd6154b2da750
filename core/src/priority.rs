//! Seat-claim priority scoring.
//!
//! Pure and total: any role, distance, and usage state produce a finite
//! score with no clamping. Higher means a stronger claim on a scarce seat;
//! the ascending end of the same ordering is who gets offered WFH first.

use crate::roster::Role;

/// Commute distance at which the distance factor reaches its nominal
/// maximum of 2.0. Longer commutes extrapolate past it rather than clamp.
pub const DISTANCE_NORMALIZER_KM: f64 = 20.0;

/// Weight on the unused fraction of the monthly WFH quota.
const UNUSED_QUOTA_WEIGHT: f64 = 5.0;

/// Bonus when no WFH day has been taken this month.
const UNTOUCHED_QUOTA_BONUS: f64 = 3.0;

/// Bonus when under a quarter of the quota is used.
const LIGHT_USAGE_BONUS: f64 = 2.0;
const LIGHT_USAGE_THRESHOLD: f64 = 0.25;

/// Score one employee's claim on office presence.
///
/// `monthly_used` is `None` when the employee has no tracked count this
/// month; the WFH factor then contributes nothing.
pub fn priority_score(role: Role, distance_km: f64, monthly_used: Option<u32>) -> f64 {
    let distance_factor = (distance_km / DISTANCE_NORMALIZER_KM) * 2.0;

    let wfh_factor = match monthly_used {
        None => 0.0,
        Some(used) => {
            let limit = role.monthly_wfh_limit();
            if limit == 0 {
                // No quota to ration against (unknown role).
                0.0
            } else {
                let used_pct = f64::from(used) / f64::from(limit);
                let mut factor = (1.0 - used_pct) * UNUSED_QUOTA_WEIGHT;
                if used == 0 {
                    factor += UNTOUCHED_QUOTA_BONUS;
                } else if used_pct < LIGHT_USAGE_THRESHOLD {
                    factor += LIGHT_USAGE_BONUS;
                }
                factor
            }
        }
    };

    role.base_score() + distance_factor + wfh_factor
}
