//! Command-line argument parsing.
//!
//! Options follow the imagemagick convention of a single leading `-`,
//! so this is hand-rolled rather than built on an argument parsing library.

use std::ffi::{OsStr, OsString};

use strum::{EnumString, IntoStaticStr, VariantArray};

use crate::{
    error::{ErrorKind, ThumbnailError},
    plan::Plan,
    tn_err,
};

pub const USAGE: &str = "thumbnail [options ...] <input> <output>";

#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Arg {
    Quality,
    Strip,
}

impl Arg {
    pub fn needs_value(&self) -> bool {
        match self {
            Arg::Quality => true,
            Arg::Strip => false,
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Arg::Quality => "JPEG compression level, 1 to 100",
            Arg::Strip => "do not copy the color profile to the thumbnail",
        }
    }

    fn apply(&self, plan: &mut Plan, value: Option<&OsStr>) -> Result<(), ThumbnailError> {
        let arg_string: &'static str = self.into();
        match (self, value) {
            (Arg::Quality, Some(value)) => {
                plan.modifiers.quality = Some(parse_quality(value).ok_or_else(|| {
                    tn_err!(
                        ErrorKind::Usage,
                        "invalid argument for option `-{arg_string}': {}",
                        value.to_string_lossy()
                    )
                })?);
            }
            (Arg::Strip, None) => plan.modifiers.strip = true,
            _ => {
                return Err(tn_err!(
                    ErrorKind::Usage,
                    "argument requires a value: -{arg_string}"
                ))
            }
        }
        Ok(())
    }
}

fn parse_quality(value: &OsStr) -> Option<u8> {
    let quality: u8 = value.to_str()?.trim().parse().ok()?;
    (1..=100).contains(&quality).then_some(quality)
}

/// Turns the full argument list, including `argv[0]`, into a [`Plan`].
pub fn parse_args(args: Vec<OsString>) -> Result<Plan, ThumbnailError> {
    let mut plan = Plan::default();
    let mut filenames = Vec::new();

    let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
    while let Some(raw_arg) = iter.next() {
        if !is_option(&raw_arg) {
            filenames.push(raw_arg);
            continue;
        }
        let name = raw_arg
            .to_str()
            .and_then(|s| s.strip_prefix('-'))
            .ok_or_else(|| {
                tn_err!(
                    ErrorKind::Usage,
                    "unrecognized option `{}'",
                    raw_arg.to_string_lossy()
                )
            })?;
        let arg = Arg::try_from(name)
            .map_err(|_| tn_err!(ErrorKind::Usage, "unrecognized option `-{name}'"))?;
        let value = if arg.needs_value() { iter.next() } else { None };
        arg.apply(&mut plan, value.as_deref())?;
    }

    let [input, output]: [OsString; 2] = filenames.try_into().map_err(|names: Vec<OsString>| {
        tn_err!(
            ErrorKind::Usage,
            "expected an input and an output filename, got {} filename(s)\nUsage: {USAGE}",
            names.len()
        )
    })?;
    plan.input = input;
    plan.output = output;
    Ok(plan)
}

/// Checks if the string starts with a single `-`.
/// Anything starting with two dashes, or a lone `-`, is treated as a filename.
fn is_option(arg: &OsStr) -> bool {
    let bytes = arg.as_encoded_bytes();
    bytes.len() > 1 && bytes[0] == b'-' && bytes[1] != b'-'
}
