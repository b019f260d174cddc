//! Runtime printf-style rendering. Templates are only known at runtime (the composer
//! splices tag, timestamp, and location verbs around the caller's template), so
//! `format!` can't be used here.
//!
//! Supported: `%v %s %d %f %e %x %X %o %b %q %t %c`, flags `-`, `+`, `0`, a width,
//! a `.precision`, and `%%`. Problems never abort rendering; they show up inline:
//! `%!d(MISSING)` for a missing operand, `%!d(text)` for an operand the verb can't
//! print, `%!(EXTRA a, b)` for leftovers and `%!(NOVERB)` for a trailing `%`.

use super::Value;
use std::fmt::Write;

/// Parsed `%[flags][width][.precision]verb` directive.
#[derive(Debug, Clone, Copy, Default)]
struct Directive {
    minus: bool,
    plus: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
    verb: char,
}

/// Renders `template`, consuming `args` left to right.
#[must_use]
pub fn render(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut chars = template.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let mut directive = Directive::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => directive.minus = true,
                '+' => directive.plus = true,
                '0' => directive.zero = true,
                _ => break,
            }
            chars.next();
        }
        directive.width = take_number(&mut chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            directive.precision = Some(take_number(&mut chars).unwrap_or(0));
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        directive.verb = verb;

        let Some(arg) = args.get(next_arg) else {
            let _ = write!(out, "%!{verb}(MISSING)");
            continue;
        };
        next_arg += 1;

        match format_operand(&directive, arg) {
            Some(text) => pad(&mut out, &directive, &text),
            None => {
                let _ = write!(out, "%!{verb}({arg})");
            }
        }
    }

    if next_arg < args.len() {
        let extra: Vec<String> = args[next_arg..].iter().map(ToString::to_string).collect();
        let _ = write!(out, "%!(EXTRA {})", extra.join(", "));
    }

    out
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
    }
    value
}

/// `None` means the verb doesn't apply to this operand.
fn format_operand(directive: &Directive, arg: &Value) -> Option<String> {
    let plus = directive.plus;
    match (directive.verb, arg) {
        ('v' | 's', Value::Str(s)) => Some(truncate(s, directive.precision)),
        ('v' | 's', Value::Float(x)) => Some(directive.precision.map_or_else(
            || signed(plus, *x < 0.0, x.to_string()),
            |p| signed(plus, *x < 0.0, format!("{x:.p$}")),
        )),
        ('v' | 's' | 'd', Value::Int(i)) => Some(signed(plus, *i < 0, i.to_string())),
        ('v' | 's' | 'd', Value::Uint(u)) => Some(signed(plus, false, u.to_string())),
        ('v' | 's' | 't', Value::Bool(b)) => Some(b.to_string()),
        ('v' | 's' | 'c', Value::Char(c)) => Some(c.to_string()),
        ('d', Value::Char(c)) => Some(u32::from(*c).to_string()),
        ('f', Value::Float(x)) => {
            let p = directive.precision.unwrap_or(6);
            Some(signed(plus, *x < 0.0, format!("{x:.p$}")))
        }
        ('e', Value::Float(x)) => {
            let p = directive.precision.unwrap_or(6);
            Some(signed(plus, *x < 0.0, exponent(&format!("{x:.p$e}"))))
        }
        ('x' | 'X' | 'o' | 'b', Value::Int(i)) => {
            let digits = radix(directive.verb, i.unsigned_abs());
            Some(signed(plus, *i < 0, digits))
        }
        ('x' | 'X' | 'o' | 'b', Value::Uint(u)) => Some(signed(plus, false, radix(directive.verb, *u))),
        ('x', Value::Str(s)) => Some(s.bytes().map(|b| format!("{b:02x}")).collect()),
        ('X', Value::Str(s)) => Some(s.bytes().map(|b| format!("{b:02X}")).collect()),
        ('q', Value::Str(s)) => Some(format!("{s:?}")),
        ('q', Value::Char(c)) => Some(format!("{c:?}")),
        ('c', Value::Int(i)) => u32::try_from(*i).ok().and_then(char::from_u32).map(String::from),
        ('c', Value::Uint(u)) => u32::try_from(*u).ok().and_then(char::from_u32).map(String::from),
        _ => None,
    }
}

/// Rust's `{:e}` writes `1.5e2`; printf convention is `1.5e+02`.
fn exponent(rust: &str) -> String {
    let Some((mantissa, exp)) = rust.split_once('e') else {
        return rust.to_string();
    };
    let (sign, digits) = exp.strip_prefix('-').map_or(("+", exp), |d| ("-", d));
    format!("{mantissa}e{sign}{digits:0>2}")
}

fn radix(verb: char, value: u64) -> String {
    match verb {
        'x' => format!("{value:x}"),
        'X' => format!("{value:X}"),
        'o' => format!("{value:o}"),
        _ => format!("{value:b}"),
    }
}

/// Digits arrive unsigned (or with a leading `-` from `to_string`); this normalizes the sign.
fn signed(plus: bool, negative: bool, digits: String) -> String {
    let magnitude = digits.strip_prefix('-').unwrap_or(&digits);
    if negative {
        format!("-{magnitude}")
    } else if plus {
        format!("+{magnitude}")
    } else {
        magnitude.to_string()
    }
}

fn truncate(s: &str, precision: Option<usize>) -> String {
    precision.map_or_else(|| s.to_string(), |p| s.chars().take(p).collect())
}

fn pad(out: &mut String, directive: &Directive, text: &str) {
    let len = text.chars().count();
    let Some(width) = directive.width.filter(|w| *w > len) else {
        out.push_str(text);
        return;
    };
    let fill = width - len;

    if directive.minus {
        out.push_str(text);
        out.extend(std::iter::repeat_n(' ', fill));
    } else if directive.zero && is_numeric_verb(directive.verb) {
        // Zeros go between the sign and the digits
        let (sign, digits) = match text.chars().next() {
            Some(c @ ('-' | '+')) => (Some(c), &text[1..]),
            _ => (None, text),
        };
        out.extend(sign);
        out.extend(std::iter::repeat_n('0', fill));
        out.push_str(digits);
    } else {
        out.extend(std::iter::repeat_n(' ', fill));
        out.push_str(text);
    }
}

const fn is_numeric_verb(verb: char) -> bool {
    matches!(verb, 'd' | 'f' | 'e' | 'x' | 'X' | 'o' | 'b' | 'v')
}
