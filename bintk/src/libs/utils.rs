use color_eyre::eyre::{eyre, OptionExt};
use color_eyre::Result;

use crate::error::BintkError::{GenotypeCodeError, MarkerNameError, MissingSymbolError};
use crate::structs::{Genotype, MISSING_CODES};

/// Parsed marker name: scaffold, start, width and source count
pub type MarkerName<'a> = (&'a str, u64, u64, u64);

//NOTE: Matches the same names as `^(.+)[_-](\d+)(:\d+:\d+)?$`, the scaffold part is greedy
// Names are in the format [scaffold]_[start] or [scaffold]_[start]:[width]:[count]
pub fn parse_marker_name(name: &str) -> Result<MarkerName<'_>> {
    let err = || eyre!(MarkerNameError(name.into()));

    // The width and count suffix is split off from the right, scaffolds may contain ':'
    let mut name_split = name.rsplitn(3, ':');
    let (location, width, count) = match (name_split.next(), name_split.next(), name_split.next()) {
        (Some(count), Some(width), Some(location)) => match (parse_digits(width), parse_digits(count)) {
            (Some(width), Some(count)) => (location, width, count),
            _ => (name, 1, 1),
        },
        _ => (name, 1, 1),
    };

    let split_at = location.rfind(|c: char| c == '_' || c == '-').ok_or_else(err)?;
    let (scaffold, start) = (&location[..split_at], &location[split_at + 1..]);

    if scaffold.is_empty() {
        return Err(err());
    }

    let start = parse_digits(start).ok_or_else(err)?;

    if start == 0 || width == 0 || count == 0 {
        return Err(err());
    }

    // The marker end has to fit in a u64
    start.checked_add(width).ok_or_else(err)?;

    Ok((scaffold, start, width, count))
}

fn parse_digits(value: &str) -> Option<u64> {
    match !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        true => value.parse::<u64>().ok(),
        false => None,
    }
}

pub fn parse_genotype(marker: &str, code: &str) -> Result<Genotype> {
    Genotype::from_code(code).ok_or_eyre(GenotypeCodeError((marker.into(), code.into())))
}

pub fn check_missing_symbol(symbol: &str) -> Result<()> {
    match MISSING_CODES.contains(&symbol) {
        true => Ok(()),
        false => Err(eyre!(MissingSymbolError(symbol.into()))),
    }
}
