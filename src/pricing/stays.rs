//! Stay length for property bookings.

use chrono::NaiveDate;

use super::error::PricingError;

/// Number of nights between check-in and check-out.
///
/// Check-out must fall strictly after check-in; a same-day stay is not a
/// bookable night.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> Result<i32, PricingError> {
    let nights = check_out.signed_duration_since(check_in).num_days();
    if nights <= 0 {
        return Err(PricingError::InvalidStay {
            check_in,
            check_out,
        });
    }
    i32::try_from(nights).map_err(|_| PricingError::InvalidStay {
        check_in,
        check_out,
    })
}
