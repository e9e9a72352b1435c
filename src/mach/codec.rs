use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Number and text conversions
///
/// FOCAL prints numbers like C's `% -.9G`: nine significant digits, a
/// leading space in place of a plus sign, trailing zeros dropped.
pub fn number_to_string(d: f64) -> String {
    if d == 0.0 {
        return " 0".to_string();
    }
    if d.is_nan() {
        return " NAN".to_string();
    }
    let sign = if d.is_sign_negative() { '-' } else { ' ' };
    if d.is_infinite() {
        return format!("{}INF", sign);
    }
    let d = d.abs();
    let sci = format!("{:.8e}", d);
    let mut parts = sci.splitn(2, 'e');
    let mantissa = parts.next().unwrap_or("");
    let exponent = parts.next().and_then(|e| e.parse::<i32>().ok()).unwrap_or(0);
    let body = if exponent < -4 || exponent >= 9 {
        format!(
            "{}E{}{:02}",
            strip_zeros(mantissa),
            if exponent < 0 { '-' } else { '+' },
            exponent.abs()
        )
    } else {
        strip_zeros(&format!("{:.*}", (8 - exponent) as usize, d)).to_string()
    };
    format!("{}{}", sign, body)
}

/// Renders a number through the TYPE format register, where `6.2` means
/// width 6 and two decimals. The digits after the point are read as a
/// whole number, so `8.04` asks for four decimals.
pub fn format_number(d: f64, format: f64) -> String {
    let width = format.trunc() as usize;
    let text = format.to_string();
    let precision = match text.find('.') {
        Some(dot) => text[dot + 1..].parse::<usize>().unwrap_or(0),
        None => 0,
    };
    format!("{:w$.p$}", d, w = width, p = precision)
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// The DEC 6-bit teletype code of a character.
pub fn char_code(c: char) -> u32 {
    let n = c as u32;
    match c {
        '@'..='Z' => n - '@' as u32,
        '0'..='9' => n - '0' as u32,
        ':'..='?' => n + 22,
        '['..='_' => n - 58,
        ' '..='/' => n + 8,
        _ => 0,
    }
}

/// Reads text typed at an ASK as a number. Letters count as their
/// teletype codes and are strung together positionally, so `A1` is 11
/// and `ZZ` is 286. The first `E` anywhere starts the exponent, so `YES`
/// is `Y` times ten to the `S`. A second `E` is an error.
pub fn string_to_number(s: &str) -> Result<f64> {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return Ok(0.0);
    }
    let mut e_location: Option<usize> = None;
    let mut p_location: Option<usize> = None;
    for (i, &c) in chars.iter().enumerate() {
        if c == '.' {
            if p_location.is_some() {
                return Err(error!(InvalidString; "MORE THAN ONE PERIOD"));
            }
            p_location = Some(i);
        } else if c == 'E' || c == 'e' {
            if e_location.is_some() {
                return Err(error!(InvalidString; "MORE THAN ONE E"));
            }
            e_location = Some(i);
        }
    }
    let e_location = e_location.unwrap_or_else(|| chars.len());
    let p_location = match p_location {
        Some(p) if p < e_location => p,
        Some(_) => return Err(error!(InvalidString; "PERIOD IN EXPONENT")),
        None => e_location,
    };

    let mut mantissa_sign = 1.0;
    let mut integer = 0.0;
    for &c in &chars[..p_location] {
        let val = match c {
            '-' => {
                mantissa_sign = -mantissa_sign;
                0
            }
            '+' => {
                mantissa_sign = 1.0;
                0
            }
            _ => digit_value(c)?,
        };
        integer = integer * 10.0 + val as f64;
    }

    let mut fraction = 0.0;
    let fraction_start = (p_location + 1).min(e_location);
    for &c in &chars[fraction_start..e_location] {
        fraction = fraction * 10.0 + digit_value(c)? as f64;
    }
    let fraction_len = e_location - fraction_start;

    let mut exponent_sign = 1.0;
    let mut exponent = 0.0;
    let exponent_start = (e_location + 1).min(chars.len());
    for &c in &chars[exponent_start..] {
        let val = match c {
            '-' => {
                exponent_sign = -exponent_sign;
                0
            }
            '+' => {
                exponent_sign = 1.0;
                0
            }
            _ => digit_value(c)?,
        };
        exponent = exponent * 10.0 + val as f64;
    }

    let value = integer * mantissa_sign + fraction / 10f64.powi(fraction_len as i32);
    Ok(value * 10f64.powf(exponent * exponent_sign))
}

fn digit_value(c: char) -> Result<u32> {
    if c.is_ascii_digit() {
        Ok(c as u32 - '0' as u32)
    } else if c.is_ascii_alphabetic() {
        Ok(char_code(c))
    } else {
        Err(error!(InvalidString; "INVALID CHARACTER"))
    }
}
