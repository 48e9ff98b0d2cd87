//! # Shared Utility Functions
//!
//! Currency helpers used by the client and by anything rendering bills.
//!
//! ## Units
//!
//! The backend and Razorpay only ever see **paise** (integer minor units).
//! Rupees exist on the client for input and display:
//! - [`rupees_to_paise`] - Convert an entered whole-rupee amount for the wire
//! - [`paise_to_rupees`] - Whole-rupee part of a paise amount
//! - [`format_inr`] - Render paise as `₹1,500.50`
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_inr, rupees_to_paise};
//!
//! let paise = rupees_to_paise(1500).expect("fits in u64");
//! assert_eq!(paise, 150_000);
//! assert_eq!(format_inr(paise), "₹1,500.00");
//! ```

/// Number of paise in one rupee
pub const PAISE_PER_RUPEE: u64 = 100;

/// Convert whole rupees to paise.
///
/// Returns `None` when the result would overflow `u64`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::rupees_to_paise;
///
/// assert_eq!(rupees_to_paise(0), Some(0));
/// assert_eq!(rupees_to_paise(1000), Some(100_000));
/// assert_eq!(rupees_to_paise(u64::MAX), None);
/// ```
pub fn rupees_to_paise(rupees: u64) -> Option<u64> {
    rupees.checked_mul(PAISE_PER_RUPEE)
}

/// Whole-rupee part of a paise amount (the paise remainder is dropped).
pub fn paise_to_rupees(paise: u64) -> u64 {
    paise / PAISE_PER_RUPEE
}

/// Format a paise amount as rupees with thousands separators and two decimals.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_inr;
///
/// assert_eq!(format_inr(0), "₹0.00");
/// assert_eq!(format_inr(150_050), "₹1,500.50");
/// assert_eq!(format_inr(123_456_789), "₹1,234,567.89");
/// ```
pub fn format_inr(paise: u64) -> String {
    let rupees = paise_to_rupees(paise).to_string();
    let fraction = paise % PAISE_PER_RUPEE;

    // Add commas to integer part
    let mut grouped = String::new();
    for (i, ch) in rupees.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("₹{}.{:02}", grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupee_round_trip_is_exact() {
        for rupees in [0, 1, 99, 100, 1000, 5000, 123_456, u64::MAX / PAISE_PER_RUPEE] {
            let paise = rupees_to_paise(rupees).expect("amount should fit in test");
            assert_eq!(paise_to_rupees(paise), rupees);
        }
    }

    #[test]
    fn test_rupees_to_paise_overflow() {
        assert_eq!(rupees_to_paise(u64::MAX / PAISE_PER_RUPEE + 1), None);
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(5), "₹0.05");
        assert_eq!(format_inr(100_000), "₹1,000.00");
        assert_eq!(format_inr(99_999), "₹999.99");
        assert_eq!(format_inr(500_000_000), "₹5,000,000.00");
    }
}
