//! Human readable values

use imgmeta_common::math::apex_to_f_number;
use imgmeta_common::orientation::Orientation;
use imgmeta_common::registry::Print;

use crate::Value;

/// Interprets a value as defined by the print function of its tag
///
/// Falls back to the raw string if the value does not have the expected
/// shape.
pub fn human_value(print: Print, value: &Value) -> String {
    interpret(print, value).unwrap_or_else(|| value.to_raw_string())
}

fn interpret(print: Print, value: &Value) -> Option<String> {
    match print {
        Print::Value | Print::Comment | Print::Utf16 => None,
        Print::Orientation => {
            let v = single_u16(value)?;
            Some(match Orientation::try_from(v) {
                Ok(orientation) => orientation.position().to_string(),
                Err(_) => unknown(v),
            })
        }
        Print::ResolutionUnit => Some(lookup(
            single_u16(value)?,
            &[(1, "none"), (2, "inch"), (3, "cm")],
        )),
        Print::ExposureTime => {
            let r = single_rational(value)?;
            let (n, d) = r;
            if d == 0 {
                return None;
            }
            Some(if n == 0 {
                String::from("0 s")
            } else if n < d && d.checked_rem(n) == Some(0) {
                format!("1/{} s", d.checked_div(n)?)
            } else if n >= d {
                format!("{:.1} s", f64::from(n) / f64::from(d))
            } else {
                format!("{n}/{d} s")
            })
        }
        Print::FNumber => {
            let f = single_f64(value)?;
            Some(format!("F{f:.1}"))
        }
        Print::Aperture => {
            let apex = single_f64(value)?;
            Some(format!("F{:.1}", apex_to_f_number(apex)))
        }
        Print::FocalLength => {
            let f = single_f64(value)?;
            Some(format!("{f:.1} mm"))
        }
        Print::ExposureProgram => Some(lookup(
            single_u16(value)?,
            &[
                (0, "Not defined"),
                (1, "Manual"),
                (2, "Auto"),
                (3, "Aperture priority"),
                (4, "Shutter priority"),
                (5, "Creative program"),
                (6, "Action program"),
                (7, "Portrait mode"),
                (8, "Landscape mode"),
            ],
        )),
        Print::MeteringMode => Some(lookup(
            single_u16(value)?,
            &[
                (0, "Unknown"),
                (1, "Average"),
                (2, "Center weighted average"),
                (3, "Spot"),
                (4, "Multi-spot"),
                (5, "Multi-segment"),
                (6, "Partial"),
                (255, "Other"),
            ],
        )),
        Print::Flash => Some(flash(single_u16(value)?)),
        Print::ColorSpace => Some(lookup(
            single_u16(value)?,
            &[(1, "sRGB"), (2, "Adobe RGB"), (0xFFFF, "Uncalibrated")],
        )),
        Print::YCbCrPositioning => Some(lookup(
            single_u16(value)?,
            &[(1, "Centered"), (2, "Co-sited")],
        )),
        Print::Version => {
            let (Value::Undefined(v) | Value::Byte(v)) = value else {
                return None;
            };
            let s = std::str::from_utf8(v).ok()?;
            if s.len() != 4 || !s.bytes().all(|x| x.is_ascii_digit()) {
                return None;
            }
            let major: u8 = s.get(0..2)?.parse().ok()?;
            Some(format!("{major}.{}", s.get(2..4)?))
        }
        Print::GpsCoordinate => {
            let v = value.as_rationals()?;
            let [deg, min, sec] = v else {
                return None;
            };
            let f = |r: &imgmeta_common::rational::URational| r.to_f64();
            Some(format!(
                "{} deg {}' {}\"",
                f(deg)?,
                f(min)?,
                (f(sec)? * 100.).round() / 100.
            ))
        }
    }
}

fn single_u16(value: &Value) -> Option<u16> {
    match value {
        Value::Short(v) if v.len() == 1 => v.first().copied(),
        _ => None,
    }
}

fn single_rational(value: &Value) -> Option<(u32, u32)> {
    match value.as_rationals()? {
        [r] => Some((r.numerator, r.denominator)),
        _ => None,
    }
}

fn single_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Rational(v) if v.len() == 1 => v.first()?.to_f64(),
        Value::SRational(v) if v.len() == 1 => v.first()?.to_f64(),
        _ => None,
    }
}

fn lookup(v: u16, names: &[(u16, &str)]) -> String {
    names
        .iter()
        .find(|(x, _)| *x == v)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| unknown(v))
}

fn unknown(v: u16) -> String {
    format!("({v})")
}

fn flash(v: u16) -> String {
    let mut s = String::from(if v & 1 == 1 { "Fired" } else { "No flash" });

    match (v >> 3) & 0b11 {
        1 => s.push_str(", compulsory"),
        3 => s.push_str(", auto"),
        _ => {}
    }

    if (v >> 1) & 0b11 == 0b11 {
        s.push_str(", return light detected");
    }

    if v & 0x40 != 0 {
        s.push_str(", red-eye reduction");
    }

    s
}
