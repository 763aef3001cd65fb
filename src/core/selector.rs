use crate::core::queries::{QUESTION_1_QUERY, QUESTION_2_QUERY};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    One,
    Two,
}

impl Question {
    /// Odd selectors get Question 1, even ones (including 0) get Question 2.
    pub fn for_selector(selector: u32) -> Self {
        if selector % 2 == 1 {
            Question::One
        } else {
            Question::Two
        }
    }

    pub fn for_registration(reg_no: &str) -> (u32, Self) {
        let selector = extract_last_two_digits(reg_no);
        (selector, Self::for_selector(selector))
    }

    pub fn query(&self) -> &'static str {
        match self {
            Question::One => QUESTION_1_QUERY,
            Question::Two => QUESTION_2_QUERY,
        }
    }

    pub fn parity(&self) -> &'static str {
        match self {
            Question::One => "odd",
            Question::Two => "even",
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Question::One => write!(f, "Question 1"),
            Question::Two => write!(f, "Question 2"),
        }
    }
}

/// Numeric value of the last two ASCII digits in `reg_no`, ignoring every
/// other character. Returns 0 when there are no digits at all.
pub fn extract_last_two_digits(reg_no: &str) -> u32 {
    let digits: Vec<u32> = reg_no.chars().filter_map(|c| c.to_digit(10)).collect();

    match digits.as_slice() {
        [] => 0,
        [only] => *only,
        [.., tens, ones] => tens * 10 + ones,
    }
}
