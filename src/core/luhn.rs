//! Luhn checksum validation for card numbers
//!
//! Pure functions with no state. Malformed input (empty strings, anything
//! other than ASCII digits) is reported as invalid rather than raised.

/// Check whether a digit string satisfies the Luhn checksum
///
/// Every second digit counting from the rightmost is doubled (subtracting 9
/// when the result exceeds 9) and all digits are summed; the number is valid
/// when the sum is divisible by 10.
///
/// # Examples
///
/// ```
/// use card_ledger::core::luhn;
///
/// assert!(luhn::is_valid("4111111111111111"));
/// assert!(!luhn::is_valid("4111111111111112"));
/// assert!(!luhn::is_valid("4111-1111-1111-1111"));
/// ```
pub fn is_valid(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    for (position, byte) in digits.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return false;
        }
        let digit = u32::from(byte - b'0');
        sum = (sum + weigh(digit, position % 2 == 1)) % 10;
    }

    sum == 0
}

/// Check whether the decimal digits of an integer satisfy the Luhn checksum
pub fn is_valid_number(number: u64) -> bool {
    is_valid(&number.to_string())
}

/// Compute the Luhn check digit for a payload
///
/// Returns the digit that, appended to `payload`, yields a valid number,
/// or `None` if the payload is empty or contains anything but ASCII digits.
pub fn check_digit(payload: &str) -> Option<u8> {
    if payload.is_empty() {
        return None;
    }

    let mut sum = 0u32;
    // The check digit occupies position 0, so payload digits start at 1.
    for (position, byte) in payload.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return None;
        }
        let digit = u32::from(byte - b'0');
        sum = (sum + weigh(digit, position % 2 == 0)) % 10;
    }

    Some(((10 - sum) % 10) as u8)
}

fn weigh(digit: u32, doubled: bool) -> u32 {
    if !doubled {
        return digit;
    }
    let doubled = digit * 2;
    if doubled > 9 {
        doubled - 9
    } else {
        doubled
    }
}
