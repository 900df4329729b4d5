pub const OTP_LEN: usize = 6;

/// Verification code typed one digit per box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OtpCode {
    digits: [Option<char>; OTP_LEN],
}

impl OtpCode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn digit(&self, index: usize) -> String {
        self.digits
            .get(index)
            .copied()
            .flatten()
            .map(String::from)
            .unwrap_or_default()
    }

    /// Applies the raw value of box `index` and returns the box to focus next.
    ///
    /// Only the last typed character counts, so typing over a filled box
    /// replaces its digit. An empty value clears the box.
    pub fn input(&mut self, index: usize, value: &str) -> Option<usize> {
        if index >= OTP_LEN {
            return None;
        }
        match value.chars().last() {
            None => {
                self.digits[index] = None;
                None
            }
            Some(c) if c.is_ascii_digit() => {
                self.digits[index] = Some(c);
                (index + 1 < OTP_LEN).then_some(index + 1)
            }
            Some(_) => None,
        }
    }

    /// Backspace in box `index`: clears it if filled, otherwise steps back.
    pub fn backspace(&mut self, index: usize) -> Option<usize> {
        if index >= OTP_LEN {
            return None;
        }
        if self.digits[index].is_some() {
            self.digits[index] = None;
            return None;
        }
        index.checked_sub(1)
    }

    /// Fills boxes from the leading digits of pasted text. Returns the
    /// first empty box, or the last box when the code is full.
    pub fn paste(&mut self, text: &str) -> usize {
        let digits: Vec<char> = text
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .take_while(|c| c.is_ascii_digit())
            .take(OTP_LEN)
            .collect();
        for (slot, digit) in self.digits.iter_mut().zip(digits) {
            *slot = Some(digit);
        }
        self.digits
            .iter()
            .position(Option::is_none)
            .unwrap_or(OTP_LEN - 1)
    }

    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }

    pub fn code(&self) -> String {
        self.digits.iter().flatten().collect()
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(code: &str) -> OtpCode {
        let mut otp = OtpCode::new();
        for (i, c) in code.chars().enumerate() {
            otp.input(i, &c.to_string());
        }
        otp
    }

    #[test]
    fn digit_advances_focus_until_last_box() {
        let mut otp = OtpCode::new();
        for i in 0..OTP_LEN - 1 {
            assert_eq!(otp.input(i, "7"), Some(i + 1));
        }
        assert_eq!(otp.input(OTP_LEN - 1, "7"), None);
        assert!(otp.is_complete());
    }

    #[test]
    fn non_digits_are_ignored() {
        let mut otp = OtpCode::new();
        assert_eq!(otp.input(0, "a"), None);
        assert_eq!(otp.digit(0), "");
        otp.input(1, "4");
        assert_eq!(otp.input(1, "4x"), None);
        assert_eq!(otp.digit(1), "4");
    }

    #[test]
    fn typing_over_a_box_keeps_the_last_digit() {
        let mut otp = OtpCode::new();
        otp.input(2, "3");
        assert_eq!(otp.input(2, "39"), Some(3));
        assert_eq!(otp.digit(2), "9");
    }

    #[test]
    fn backspace_on_empty_box_steps_back() {
        let mut otp = OtpCode::new();
        for i in 1..OTP_LEN {
            assert_eq!(otp.backspace(i), Some(i - 1));
        }
        assert_eq!(otp.backspace(0), None);
    }

    #[test]
    fn backspace_on_filled_box_clears_in_place() {
        let mut otp = filled("123456");
        assert_eq!(otp.backspace(3), None);
        assert_eq!(otp.digit(3), "");
        assert!(!otp.is_complete());
        assert_eq!(otp.backspace(3), Some(2));
    }

    #[test]
    fn complete_only_when_every_box_has_a_digit() {
        let mut otp = filled("12345");
        assert!(!otp.is_complete());
        otp.input(5, "6");
        assert!(otp.is_complete());
        assert_eq!(otp.code(), "123456");
        otp.input(0, "");
        assert!(!otp.is_complete());
    }

    #[test]
    fn paste_fills_from_the_start() {
        let mut otp = OtpCode::new();
        assert_eq!(otp.paste(" 123-456 "), OTP_LEN - 1);
        assert_eq!(otp.code(), "123456");

        let mut partial = OtpCode::new();
        assert_eq!(partial.paste("98"), 2);
        assert_eq!(partial.code(), "98");

        let mut junk = OtpCode::new();
        assert_eq!(junk.paste("abc"), 0);
        assert_eq!(junk.code(), "");
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut otp = OtpCode::new();
        assert_eq!(otp.input(OTP_LEN, "1"), None);
        assert_eq!(otp.backspace(OTP_LEN), None);
        assert_eq!(otp, OtpCode::new());
    }

    #[test]
    fn clear_resets_all_boxes() {
        let mut otp = filled("123456");
        otp.clear();
        assert_eq!(otp, OtpCode::new());
    }
}
