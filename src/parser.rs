//! Parser parses numbers represented in decimal scientific format.

use crate::common::buf::DigitBuf;
use crate::defs::Magnitude;
use crate::defs::Sign;
use crate::defs::MAX_MAGNITUDE;
use core::str::Chars;

/// Exponent is not accumulated beyond this value. Any larger exponent gives infinity or zero anyway.
const EXPONENT_LIMIT: Magnitude = MAX_MAGNITUDE * 10;

pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    mantissa_bytes: DigitBuf,
    e: Magnitude,
    inf: bool,
    nan: bool,
    valid: bool,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            mantissa_bytes: DigitBuf::new(),
            e: 0,
            inf: false,
            nan: false,
            valid: false,
        }
    }

    /// Returns next character of a string in lower case,
    /// or None if string end reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next().map(|c| c.to_ascii_lowercase());
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    /// Returns the current character as a decimal digit.
    fn cur_digit(&self) -> Option<u8> {
        self.cur_ch.and_then(|c| c.to_digit(10)).map(|d| d as u8)
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_inf(&self) -> bool {
        self.inf
    }

    pub fn is_nan(&self) -> bool {
        self.nan
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns mantissa digits, sign, and exponent.
    /// The parsed value is `0.d1d2d3... * 10^e`, where `di` are the mantissa digits.
    /// The first digit is never zero. For zero, the digits are empty.
    pub fn raw_parts(&self) -> (&DigitBuf, Sign, Magnitude) {
        (&self.mantissa_bytes, self.sign, self.e)
    }
}

/// Parse a decimal number, `nan`, `inf`, or `infinity`.
/// The whole string must be consumed for the result to be valid.
pub fn parse(s: &str) -> ParserState<'_> {
    let mut parser_state = ParserState::new(s);
    let mut ch = parser_state.next_char();

    // sign
    if let Some(c) = ch {
        match c {
            '+' => ch = parser_state.next_char(),
            '-' => {
                parser_state.sign = Sign::Neg;
                ch = parser_state.next_char()
            }
            _ => {}
        };
    }

    if let Some(c) = ch {
        match c {
            'i' => parse_inf(&mut parser_state),
            'n' => parse_nan(&mut parser_state),
            '.' | '0'..='9' => parse_num(&mut parser_state),
            _ => {}
        };
    }

    // trailing characters
    if parser_state.cur_char().is_some() {
        parser_state.valid = false;
    }

    parser_state
}

/// Consumes characters of `word` starting from the current character.
fn consume_word(parser_state: &mut ParserState, word: &str) -> bool {
    for w in word.chars() {
        if parser_state.cur_char() != Some(w) {
            return false;
        }
        parser_state.next_char();
    }
    true
}

fn parse_inf(parser_state: &mut ParserState) {
    if consume_word(parser_state, "inf")
        && (parser_state.cur_char().is_none() || consume_word(parser_state, "inity"))
    {
        parser_state.inf = true;
        parser_state.valid = true;
    }
}

fn parse_nan(parser_state: &mut ParserState) {
    if consume_word(parser_state, "nan") {
        parser_state.nan = true;
        parser_state.valid = true;
    }
}

fn parse_num(parser_state: &mut ParserState) {
    let (int_len, skip_cnt1) = parse_digits(parser_state, true, true);
    if Some('.') == parser_state.cur_char() {
        parser_state.next_char();
    }
    let (frac_len, skip_cnt2) = parse_digits(parser_state, int_len == 0, false);

    if frac_len == 0 && int_len == 0 && skip_cnt1 == 0 && skip_cnt2 == 0 {
        return;
    }

    parser_state.valid = true;

    if Some('e') == parser_state.cur_char() {
        parser_state.next_char();
        parse_exp(parser_state);
    }

    if parser_state.mantissa_bytes.is_empty() {
        // just zeroes
        parser_state.e = 0;
    } else if int_len != 0 {
        parser_state.e = parser_state.e.saturating_add(int_len as Magnitude);
    } else {
        parser_state.e = parser_state.e.saturating_sub(skip_cnt2 as Magnitude);
    }
}

fn parse_digits(parser_state: &mut ParserState, skip_zeroes: bool, int: bool) -> (usize, usize) {
    let mut len = 0;
    let mut skip_cnt = 0;
    if skip_zeroes {
        // skip leading zeroes
        while let Some(0) = parser_state.cur_digit() {
            skip_cnt += 1;
            if !int {
                len += 1; // for fractional part count length
            }
            parser_state.next_char();
        }
    }
    while let Some(d) = parser_state.cur_digit() {
        parser_state.mantissa_bytes.push(d);
        len += 1;
        parser_state.next_char();
    }
    if skip_cnt == len {
        // just zeroes
        len = 0;
    }
    (len, skip_cnt)
}

fn parse_exp(parser_state: &mut ParserState) {
    let mut neg = false;
    match parser_state.cur_char() {
        Some('+') => {
            parser_state.next_char();
        }
        Some('-') => {
            neg = true;
            parser_state.next_char();
        }
        _ => {}
    };

    let mut e: Magnitude = 0;
    let mut len = 0;
    while let Some(d) = parser_state.cur_digit() {
        e = (e * 10 + d as Magnitude).min(EXPONENT_LIMIT);
        len += 1;
        parser_state.next_char();
    }

    if len == 0 {
        parser_state.valid = false;
    }

    parser_state.e = if neg { -e } else { e };
}
