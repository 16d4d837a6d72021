// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line parsers for the points and queries files.
//!
//! Points file: `id latitude longitude`, whitespace-separated, one record
//! per line; any malformed line is fatal. Queries file: `minLat maxLat
//! minLon maxLon`; malformed lines are skipped by the caller. Note the file
//! order is latitude first while the index works in `(lon, lat)`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use thiserror::Error;
use tracing::info;
use waypoint_geo::{GeoBounds, GeoPoint, valid_latitude, valid_longitude};
use waypoint_index::GeoRecord;

/// A line that failed to parse; every variant carries the line verbatim.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected `id latitude longitude`, got: {0}")]
    PointFieldCount(String),

    #[error("expected `minLat maxLat minLon maxLon`, got: {0}")]
    QueryFieldCount(String),

    #[error("not a number: {0}")]
    NotANumber(String),

    #[error("latitude out of range: {0}")]
    LatitudeOutOfRange(String),

    #[error("longitude out of range: {0}")]
    LongitudeOutOfRange(String),

    #[error("not a valid bounding box: {0}")]
    InvalidBounds(String),
}

/// Parse one points-file line. Rejects out-of-range and non-finite
/// coordinates so nothing unvalidated ever reaches the index.
pub fn parse_point(line: &str) -> Result<GeoRecord, ParseError> {
    let mut fields = line.split_whitespace();
    let (Some(id), Some(lat), Some(lon), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(ParseError::PointFieldCount(line.to_owned()));
    };
    let lat: f64 = lat
        .parse()
        .map_err(|_| ParseError::NotANumber(line.to_owned()))?;
    let lon: f64 = lon
        .parse()
        .map_err(|_| ParseError::NotANumber(line.to_owned()))?;
    if !valid_latitude(lat) {
        return Err(ParseError::LatitudeOutOfRange(line.to_owned()));
    }
    if !valid_longitude(lon) {
        return Err(ParseError::LongitudeOutOfRange(line.to_owned()));
    }
    Ok(GeoRecord::new(id, lon, lat))
}

/// Parse one queries-file line into a validated box.
pub fn parse_query(line: &str) -> Result<GeoBounds, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [min_lat, max_lat, min_lon, max_lon] = fields[..] else {
        return Err(ParseError::QueryFieldCount(line.to_owned()));
    };
    let number = |field: &str| {
        field
            .parse::<f64>()
            .map_err(|_| ParseError::NotANumber(line.to_owned()))
    };
    let bounds = GeoBounds::new(
        GeoPoint::new(number(max_lon)?, number(max_lat)?),
        GeoPoint::new(number(min_lon)?, number(min_lat)?),
    );
    if !bounds.is_valid() {
        return Err(ParseError::InvalidBounds(line.to_owned()));
    }
    Ok(bounds)
}

/// Read the whole points file. Any malformed line aborts with the line and
/// its number in the error chain.
pub fn read_points(path: &Path) -> anyhow::Result<Vec<GeoRecord>> {
    let file = File::open(path)
        .with_context(|| format!("cannot open points file {}", path.display()))?;
    let mut records = Vec::new();
    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line =
            line.with_context(|| format!("cannot read points file {}", path.display()))?;
        let record = parse_point(&line)
            .with_context(|| format!("points file {}, line {}", path.display(), number + 1))?;
        records.push(record);
        if records.len() % 1_000_000 == 0 {
            info!(loaded = records.len(), "still loading points");
        }
    }
    Ok(records)
}
