//! Query parameter encodings for the application's synced cells.
//!
//! Every encoding omits its default and parses back exactly what it writes.
//! Floats use Rust's shortest round-trip formatting, so coordinates survive a
//! trip through the URL bit for bit.

use snape_model::{LonLat, Mode, Profile};

use crate::error::ParseError;
use crate::url_state::UrlParam;

pub const MODE_PARAM: &str = "mode";
pub const PROFILE_PARAM: &str = "profile";
pub const MIN_SCORE_PARAM: &str = "min_score";
pub const MAX_SCORE_PARAM: &str = "max_score";
pub const ABOUT_PARAM: &str = "about";

/// Scores are percentages.
pub const SCORE_RANGE: (u32, u32) = (0, 100);

pub fn mode_param(default: Mode) -> UrlParam<Mode> {
    UrlParam::new(
        MODE_PARAM,
        default,
        move |mode: &Mode| (*mode != default && mode.is_finite()).then(|| format_mode(mode)),
        parse_mode,
    )
}

pub fn profile_param(default: Profile) -> UrlParam<Profile> {
    UrlParam::new(
        PROFILE_PARAM,
        default,
        move |profile: &Profile| (*profile != default).then(|| profile.as_str().to_string()),
        parse_profile,
    )
}

pub fn score_param(name: &str, default: u32) -> UrlParam<u32> {
    UrlParam::new(
        name,
        default,
        move |score: &u32| (*score != default).then(|| score.to_string()),
        parse_score,
    )
}

pub fn flag_param(name: &str, default: bool) -> UrlParam<bool> {
    UrlParam::new(
        name,
        default,
        move |flag: &bool| (*flag != default).then(|| flag.to_string()),
        parse_flag,
    )
}

/// `title`, `score`, `debug` or `route:<lon>,<lat>;<lon>,<lat>`. Routes with a
/// non-finite endpoint have no URL form; [`mode_param`] omits them.
pub fn format_mode(mode: &Mode) -> String {
    match mode {
        Mode::Route { from, to } => {
            format!("route:{},{};{},{}", from.lon, from.lat, to.lon, to.lat)
        }
        other => other.name().to_string(),
    }
}

pub fn parse_mode(raw: &str) -> Result<Mode, ParseError> {
    match raw {
        "title" => return Ok(Mode::Title),
        "score" => return Ok(Mode::Score),
        "debug" => return Ok(Mode::Debug),
        _ => {}
    }
    let Some(endpoints) = raw.strip_prefix("route:") else {
        return Err(ParseError::malformed(raw, "unknown mode"));
    };
    let Some((from, to)) = endpoints.split_once(';') else {
        return Err(ParseError::malformed(raw, "route needs two endpoints"));
    };
    Ok(Mode::Route {
        from: parse_lon_lat(from)?,
        to: parse_lon_lat(to)?,
    })
}

fn parse_lon_lat(raw: &str) -> Result<LonLat, ParseError> {
    let Some((lon, lat)) = raw.split_once(',') else {
        return Err(ParseError::malformed(raw, "expected <lon>,<lat>"));
    };
    let point = LonLat::new(lon.parse()?, lat.parse()?);
    if !point.is_finite() {
        return Err(ParseError::malformed(raw, "coordinates must be finite"));
    }
    Ok(point)
}

pub fn parse_profile(raw: &str) -> Result<Profile, ParseError> {
    Ok(raw.parse::<Profile>()?)
}

/// A whole percentage. Rejects signs and padding so that only canonical
/// text is accepted.
pub fn parse_score(raw: &str) -> Result<u32, ParseError> {
    if raw.starts_with('+') || (raw.len() > 1 && raw.starts_with('0')) {
        return Err(ParseError::malformed(raw, "score must be canonical"));
    }
    let value: u32 = raw.parse()?;
    let (min, max) = SCORE_RANGE;
    if !(min..=max).contains(&value) {
        return Err(ParseError::OutOfRange { value, min, max });
    }
    Ok(value)
}

pub fn parse_flag(raw: &str) -> Result<bool, ParseError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::malformed(raw, "expected true or false")),
    }
}
