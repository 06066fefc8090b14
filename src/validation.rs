//! Validation helpers for payroll-adjacent personal data.
//!
//! This module validates and normalizes the two identity fields that
//! accompany Kenyan payroll records: the 8-digit national ID number and
//! Kenyan mobile phone numbers in their common written forms
//! (`+254712345678`, `254712345678`, `0712345678`, `712345678`).
//!
//! Phone numbers normalize to E.164 form with the `+254` country code.

/// Strips an optional Kenyan country prefix from a phone number.
///
/// Recognizes `+254`, `254`, and a leading `0`; anything else is returned
/// unchanged and treated as a bare local part.
fn strip_country_prefix(phone: &str) -> &str {
    if let Some(rest) = phone.strip_prefix("+254") {
        rest
    } else if let Some(rest) = phone.strip_prefix("254") {
        rest
    } else if let Some(rest) = phone.strip_prefix('0') {
        rest
    } else {
        phone
    }
}

/// Removes all whitespace from a phone number.
fn remove_whitespace(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validates a Kenyan national ID number.
///
/// A valid national ID is exactly 8 ASCII digits with no other characters.
///
/// # Arguments
///
/// * `id` - The national ID string to check
///
/// # Returns
///
/// `true` if the ID is exactly 8 digits.
///
/// # Examples
///
/// ```
/// use payroll_engine::validation::validate_national_id;
///
/// assert!(validate_national_id("12345678"));
/// assert!(!validate_national_id("1234567"));
/// assert!(!validate_national_id("1234567a"));
/// ```
pub fn validate_national_id(id: &str) -> bool {
    id.len() == 8 && id.chars().all(|c| c.is_ascii_digit())
}

/// Validates a Kenyan mobile phone number.
///
/// Accepts an optional country prefix (`+254` or `254`) or a leading `0`,
/// followed by a 9-digit local part starting with `7` or `1`. Internal
/// whitespace is ignored.
///
/// # Arguments
///
/// * `phone` - The phone number string to check
///
/// # Returns
///
/// `true` if the number is a valid Kenyan mobile number in any accepted
/// written form.
///
/// # Examples
///
/// ```
/// use payroll_engine::validation::validate_phone_number;
///
/// assert!(validate_phone_number("0712345678"));
/// assert!(validate_phone_number("+254 712 345 678"));
/// assert!(!validate_phone_number("071234567"));
/// ```
pub fn validate_phone_number(phone: &str) -> bool {
    let cleaned = remove_whitespace(phone);
    let local = strip_country_prefix(&cleaned);

    local.len() == 9
        && (local.starts_with('7') || local.starts_with('1'))
        && local.chars().all(|c| c.is_ascii_digit())
}

/// Normalizes a phone number to E.164 form with the `+254` country code.
///
/// Strips whitespace and any recognized prefix (`+254`, `254`, leading
/// `0`), then prepends `+254`. The formatter performs no validation;
/// callers that need strict correctness should check the input with
/// [`validate_phone_number`] first.
///
/// # Arguments
///
/// * `phone` - The phone number string to normalize
///
/// # Returns
///
/// The number in `+254XXXXXXXXX` form.
///
/// # Examples
///
/// ```
/// use payroll_engine::validation::format_phone_number;
///
/// assert_eq!(format_phone_number("0712345678"), "+254712345678");
/// assert_eq!(format_phone_number("254712345678"), "+254712345678");
/// assert_eq!(format_phone_number("+254712345678"), "+254712345678");
/// ```
pub fn format_phone_number(phone: &str) -> String {
    let cleaned = remove_whitespace(phone);

    format!("+254{}", strip_country_prefix(&cleaned))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // VAL-001: national ID - exactly 8 digits passes
    // ==========================================================================
    #[test]
    fn test_val_001_national_id_eight_digits() {
        assert!(validate_national_id("12345678"));
        assert!(validate_national_id("00000000"));
        assert!(validate_national_id("98765432"));
    }

    // ==========================================================================
    // VAL-002: national ID - wrong length fails
    // ==========================================================================
    #[test]
    fn test_val_002_national_id_wrong_length() {
        assert!(!validate_national_id("1234567"));
        assert!(!validate_national_id("123456789"));
        assert!(!validate_national_id(""));
    }

    // ==========================================================================
    // VAL-003: national ID - non-digit characters fail
    // ==========================================================================
    #[test]
    fn test_val_003_national_id_non_digits() {
        assert!(!validate_national_id("1234567a"));
        assert!(!validate_national_id("1234 567"));
        assert!(!validate_national_id("12-34567"));
    }

    // ==========================================================================
    // VAL-004: phone number - all accepted prefixes validate
    // ==========================================================================
    #[test]
    fn test_val_004_phone_accepted_prefixes() {
        assert!(validate_phone_number("0712345678"));
        assert!(validate_phone_number("254712345678"));
        assert!(validate_phone_number("+254712345678"));
        assert!(validate_phone_number("712345678"));
    }

    // ==========================================================================
    // VAL-005: phone number - local parts starting with 1 validate
    // ==========================================================================
    #[test]
    fn test_val_005_phone_one_prefix_local_part() {
        assert!(validate_phone_number("0112345678"));
        assert!(validate_phone_number("+254112345678"));
    }

    // ==========================================================================
    // VAL-006: phone number - internal whitespace is ignored
    // ==========================================================================
    #[test]
    fn test_val_006_phone_whitespace_ignored() {
        assert!(validate_phone_number("+254 712 345 678"));
        assert!(validate_phone_number("0712 345 678"));
    }

    // ==========================================================================
    // VAL-007: phone number - wrong lengths fail
    // ==========================================================================
    #[test]
    fn test_val_007_phone_wrong_length() {
        assert!(!validate_phone_number("071234567"));
        assert!(!validate_phone_number("07123456789"));
        assert!(!validate_phone_number(""));
    }

    // ==========================================================================
    // VAL-008: phone number - invalid local parts fail
    // ==========================================================================
    #[test]
    fn test_val_008_phone_invalid_local_part() {
        // Local part must start with 7 or 1
        assert!(!validate_phone_number("0812345678"));
        assert!(!validate_phone_number("254212345678"));

        // Non-digit characters
        assert!(!validate_phone_number("07123a5678"));
    }

    // ==========================================================================
    // VAL-009: phone formatter - all accepted forms normalize identically
    // ==========================================================================
    #[test]
    fn test_val_009_format_normalizes_accepted_forms() {
        assert_eq!(format_phone_number("0712345678"), "+254712345678");
        assert_eq!(format_phone_number("254712345678"), "+254712345678");
        assert_eq!(format_phone_number("+254712345678"), "+254712345678");
        assert_eq!(format_phone_number("712345678"), "+254712345678");
    }

    // ==========================================================================
    // VAL-010: phone formatter - strips whitespace before normalizing
    // ==========================================================================
    #[test]
    fn test_val_010_format_strips_whitespace() {
        assert_eq!(format_phone_number("0712 345 678"), "+254712345678");
        assert_eq!(format_phone_number(" +254 712 345 678 "), "+254712345678");
    }

    // ==========================================================================
    // VAL-011: phone formatter - does not validate
    // ==========================================================================
    #[test]
    fn test_val_011_format_does_not_validate() {
        // Garbage in, prefixed garbage out
        assert_eq!(format_phone_number("999"), "+254999");
    }
}
