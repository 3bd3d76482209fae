//! Spanish number words.
//!
//! Numbers are spelled band by band: a lookup for 0..=29, tens joined to the
//! unit with "y", irregular hundreds and a "mil" group for the thousands.
//! Anything at or above [`SPELL_LIMIT`] is returned as its digits.

use crate::token::{TokenSequence, WordToken};

/// First value without a Spanish spelling.
pub const SPELL_LIMIT: u32 = 10_000;

const UNITS_AND_TWENTIES: [&str; 30] = [
    "cero",
    "uno",
    "dos",
    "tres",
    "cuatro",
    "cinco",
    "seis",
    "siete",
    "ocho",
    "nueve",
    "diez",
    "once",
    "doce",
    "trece",
    "catorce",
    "quince",
    "dieciséis",
    "diecisiete",
    "dieciocho",
    "diecinueve",
    "veinte",
    "veintiuno",
    "veintidós",
    "veintitrés",
    "veinticuatro",
    "veinticinco",
    "veintiséis",
    "veintisiete",
    "veintiocho",
    "veintinueve",
];

/// Indexed by the tens digit; 0..=2 are covered by the lookup above.
const TENS: [&str; 10] = [
    "", "", "", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta", "noventa",
];

/// Indexed by the hundreds digit. Exactly 100 is "cien", handled separately.
const HUNDREDS: [&str; 10] = [
    "",
    "ciento",
    "doscientos",
    "trescientos",
    "cuatrocientos",
    "quinientos",
    "seiscientos",
    "setecientos",
    "ochocientos",
    "novecientos",
];

const HUNDRED_EXACT: &str = "cien";
const THOUSAND: &str = "mil";
const AND: &str = "y";
const MINUS: &str = "menos";

/// Spell `n` as Spanish number words.
///
/// Values from [`SPELL_LIMIT`] upwards have no spelling and come back as a
/// single token holding the decimal digits.
pub fn spell(n: u32) -> TokenSequence {
    let mut out = TokenSequence::new();
    spell_into(n, &mut out);
    out
}

/// Like [`spell`], with a leading "menos" for negative values.
pub fn spell_signed(n: i64) -> TokenSequence {
    match u32::try_from(n.unsigned_abs()) {
        Ok(magnitude) if magnitude < SPELL_LIMIT => {
            let mut out = TokenSequence::new();
            if n < 0 {
                out.push(MINUS);
            }
            spell_into(magnitude, &mut out);
            out
        }
        _ => std::iter::once(WordToken::from(n.to_string())).collect(),
    }
}

fn spell_into(n: u32, out: &mut TokenSequence) {
    match n {
        0..=29 => out.push(UNITS_AND_TWENTIES[n as usize]),
        30..=99 => {
            out.push(TENS[(n / 10) as usize]);
            let unit = n % 10;
            if unit != 0 {
                out.push(AND);
                spell_into(unit, out);
            }
        }
        100 => out.push(HUNDRED_EXACT),
        101..=999 => {
            out.push(HUNDREDS[(n / 100) as usize]);
            let rest = n % 100;
            if rest != 0 {
                spell_into(rest, out);
            }
        }
        1000..=9999 => {
            let thousands = n / 1000;
            if thousands != 1 {
                spell_into(thousands, out);
            }
            out.push(THOUSAND);
            let rest = n % 1000;
            if rest != 0 {
                spell_into(rest, out);
            }
        }
        _ => out.push(n.to_string()),
    }
}
