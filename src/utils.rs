//! Utility functions for the Option-Ladder-Optimizer library.

use chrono::NaiveDate;
use optionstratlib::OptionStyle;

/// Formats a calendar date as an exchange-style expiry code in `DMMMYY` format.
///
/// Leading zeroes on the day are dropped, matching the convention used by
/// crypto option venues (e.g. `1AUG25`, `27JUN25`).
///
/// # Arguments
///
/// * `date` - The expiry date to format
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use option_ladder_optimizer::utils::format_expiry_code;
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 27).unwrap();
/// assert_eq!(format_expiry_code(date), "27JUN25");
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// assert_eq!(format_expiry_code(date), "1AUG25");
/// ```
#[must_use]
pub fn format_expiry_code(date: NaiveDate) -> String {
    let code = date.format("%d%b%y").to_string().to_uppercase();
    code.strip_prefix('0').map_or(code.clone(), String::from)
}

/// Builds the instrument code for a single option contract.
///
/// The code follows the `UNDERLYING-EXPIRY-STRIKE-STYLE` convention
/// (e.g. `BTC-27JUN25-54000-P`) and is used as the highlight key that
/// display layers match against their rendered option chain.
///
/// # Arguments
///
/// * `underlying` - The underlying asset symbol (e.g., "BTC")
/// * `expiry` - The expiry code (e.g., "27JUN25")
/// * `strike` - The strike price
/// * `style` - Call or put
///
/// # Examples
///
/// ```rust
/// use option_ladder_optimizer::utils::instrument_code;
/// use optionstratlib::OptionStyle;
///
/// let code = instrument_code("BTC", "27JUN25", 54000.0, OptionStyle::Put);
/// assert_eq!(code, "BTC-27JUN25-54000-P");
/// ```
#[must_use]
pub fn instrument_code(underlying: &str, expiry: &str, strike: f64, style: OptionStyle) -> String {
    let style_tag = match style {
        OptionStyle::Call => 'C',
        OptionStyle::Put => 'P',
    };
    format!("{underlying}-{expiry}-{strike}-{style_tag}")
}
