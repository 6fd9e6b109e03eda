//! Day 4: Passport Processing

use crate::utils::input::groups;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 4, tags = ["2020", "parsing", "validation"])]
pub struct Solver;

/// Short tag of a passport field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FieldTag {
    /// Birth year
    Byr,
    /// Issue year
    Iyr,
    /// Expiration year
    Eyr,
    /// Height
    Hgt,
    /// Hair color
    Hcl,
    /// Eye color
    Ecl,
    /// Passport id
    Pid,
    /// Country id
    Cid,
}

impl FieldTag {
    pub fn is_required(self) -> bool {
        self != FieldTag::Cid
    }
}

const EYE_COLORS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

/// Why a passport field is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("missing required field {0}")]
    Missing(FieldTag),
    #[error("{field} {value:?} is not a four-digit year")]
    NotAYear { field: FieldTag, value: String },
    #[error("{field} {value} is outside {min}..={max}")]
    OutOfRange {
        field: FieldTag,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("height {0:?} is not a number followed by cm or in")]
    BadHeight(String),
    #[error("hair color {0:?} is not # followed by six lowercase hex digits")]
    BadHairColor(String),
    #[error("eye color {0:?} is not a known color")]
    BadEyeColor(String),
    #[error("passport id {0:?} is not nine digits")]
    BadPassportId(String),
}

fn check_range(field: FieldTag, value: u32, range: RangeInclusive<u32>) -> Result<(), FieldError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(FieldError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn validate_year(field: FieldTag, value: &str, range: RangeInclusive<u32>) -> Result<(), FieldError> {
    let year = Some(value)
        .filter(|v| v.len() == 4 && all_digits(v))
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| FieldError::NotAYear {
            field,
            value: value.to_string(),
        })?;
    check_range(field, year, range)
}

fn validate_height(value: &str) -> Result<(), FieldError> {
    let bad = || FieldError::BadHeight(value.to_string());
    let (number, range) = if let Some(cm) = value.strip_suffix("cm") {
        (cm, 150..=193)
    } else if let Some(inches) = value.strip_suffix("in") {
        (inches, 59..=76)
    } else {
        return Err(bad());
    };
    if !all_digits(number) {
        return Err(bad());
    }
    let height = number.parse().map_err(|_| bad())?;
    check_range(FieldTag::Hgt, height, range)
}

fn validate_hair_color(value: &str) -> Result<(), FieldError> {
    match value.strip_prefix('#') {
        Some(hex) if hex.len() == 6 && hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) => {
            Ok(())
        }
        _ => Err(FieldError::BadHairColor(value.to_string())),
    }
}

fn validate_eye_color(value: &str) -> Result<(), FieldError> {
    if EYE_COLORS.contains(&value) {
        Ok(())
    } else {
        Err(FieldError::BadEyeColor(value.to_string()))
    }
}

fn validate_passport_id(value: &str) -> Result<(), FieldError> {
    if value.len() == 9 && all_digits(value) {
        Ok(())
    } else {
        Err(FieldError::BadPassportId(value.to_string()))
    }
}

/// Check a single field value against the rule for its tag
pub fn validate_field(tag: FieldTag, value: &str) -> Result<(), FieldError> {
    match tag {
        FieldTag::Byr => validate_year(tag, value, 1920..=2002),
        FieldTag::Iyr => validate_year(tag, value, 2010..=2020),
        FieldTag::Eyr => validate_year(tag, value, 2020..=2030),
        FieldTag::Hgt => validate_height(value),
        FieldTag::Hcl => validate_hair_color(value),
        FieldTag::Ecl => validate_eye_color(value),
        FieldTag::Pid => validate_passport_id(value),
        FieldTag::Cid => Ok(()),
    }
}

/// One blank-line-delimited batch of `tag:value` pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Passport<'a> {
    fields: BTreeMap<FieldTag, &'a str>,
}

impl<'a> Passport<'a> {
    pub fn parse<I>(lines: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = BTreeMap::new();
        for token in lines.into_iter().flat_map(str::split_whitespace) {
            let (tag, value) = token
                .split_once(':')
                .ok_or_else(|| anyhow!("field {:?} is not tag:value", token))?;
            let tag = FieldTag::from_str(tag).map_err(|_| anyhow!("unknown field tag {:?}", tag))?;
            if fields.insert(tag, value).is_some() {
                return Err(anyhow!("duplicate field {}", tag));
            }
        }
        Ok(Self { fields })
    }

    pub fn get(&self, tag: FieldTag) -> Option<&'a str> {
        self.fields.get(&tag).copied()
    }

    /// Every required field is present
    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    /// Complete, and every present field passes its rule
    pub fn validate(&self) -> Result<(), FieldError> {
        if let Some(tag) = self.first_missing() {
            return Err(FieldError::Missing(tag));
        }
        self.fields
            .iter()
            .try_for_each(|(&tag, value)| validate_field(tag, value))
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn first_missing(&self) -> Option<FieldTag> {
        FieldTag::iter().find(|&tag| tag.is_required() && !self.fields.contains_key(&tag))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Passport<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        groups(input)
            .into_iter()
            .enumerate()
            .map(|(idx, group)| {
                Passport::parse(group).map_err(|e| anyhow!("(passport {}) {}", idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|p| p.is_complete()).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let valid = shared
            .iter()
            .enumerate()
            .filter(|(idx, passport)| match passport.validate() {
                Ok(()) => true,
                Err(e) => {
                    log::debug!("passport {} rejected: {}", idx + 1, e);
                    false
                }
            })
            .count();
        Ok(valid.to_string())
    }
}
