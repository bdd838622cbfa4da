// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! WKT parser using nom combinators
//!
//! Parses well-known-text geometry into `geoviz-model` types. Keywords are
//! case-insensitive, an optional `Z` dimension marker is accepted after the
//! keyword, and every kind supports the `EMPTY` spelling.

use crate::error::{Result, WktError};
use geoviz_model::{
    Coord, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::{opt, recognize},
    multi::separated_list0,
    sequence::{delimited, pair, preceded},
    IResult, Parser,
};

// ============================================================================
// Parsing Primitives
// ============================================================================

/// Parse optional whitespace
fn ws(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace0(input)?;
    Ok((input, ()))
}

/// Parse a signed decimal number with optional exponent
fn number(input: &str) -> IResult<&str, f64> {
    let (input, num_str) = recognize((
        opt(char('-')),
        take_while1(|c: char| c.is_ascii_digit()),
        opt(pair(char('.'), take_while(|c: char| c.is_ascii_digit()))),
        opt((
            alt((char('e'), char('E'))),
            opt(alt((char('+'), char('-')))),
            take_while1(|c: char| c.is_ascii_digit()),
        )),
    ))
    .parse(input)?;

    // Use lexical-core for fast parsing
    let value: f64 = lexical_core::parse(num_str.as_bytes()).unwrap_or(0.0);
    Ok((input, value))
}

/// Parse one coordinate: `x y` with an optional third value
fn coord(input: &str) -> IResult<&str, Coord> {
    let (input, x) = number(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y) = number(input)?;
    let (input, z) = opt(preceded(multispace1, number)).parse(input)?;

    let coord = match z {
        Some(z) => Coord::xyz(x, y, z),
        None => Coord::xy(x, y),
    };
    Ok((input, coord))
}

/// Parse a single parenthesized coordinate
fn paren_coord(input: &str) -> IResult<&str, Coord> {
    delimited(pair(char('('), ws), coord, pair(ws, char(')'))).parse(input)
}

/// Parse a parenthesized coordinate sequence
fn coord_seq(input: &str) -> IResult<&str, Vec<Coord>> {
    delimited(
        pair(char('('), ws),
        separated_list0((ws, char(','), ws), coord),
        pair(ws, char(')')),
    )
    .parse(input)
}

/// Parse one ring as a linestring
fn ring(input: &str) -> IResult<&str, LineString> {
    let (input, coords) = coord_seq(input)?;
    Ok((input, LineString::new(coords)))
}

/// Parse a parenthesized ring list into a polygon
///
/// The first ring is the exterior; any further rings are holes.
fn ring_list(input: &str) -> IResult<&str, Polygon> {
    let (input, rings) = delimited(
        pair(char('('), ws),
        separated_list0((ws, char(','), ws), ring),
        pair(ws, char(')')),
    )
    .parse(input)?;

    let mut rings = rings.into_iter();
    let exterior = rings.next().unwrap_or_default();
    let interiors = rings.collect();
    Ok((input, Polygon::new(exterior, interiors)))
}

/// Parse an optional `Z` dimension marker after the keyword
fn dimension_marker(input: &str) -> IResult<&str, ()> {
    let (input, _) = opt(preceded(multispace1, tag_no_case("Z"))).parse(input)?;
    Ok((input, ()))
}

/// Parse the `EMPTY` keyword
fn empty_tag(input: &str) -> IResult<&str, ()> {
    let (input, _) = tag_no_case("EMPTY").parse(input)?;
    Ok((input, ()))
}

// ============================================================================
// Geometry Parsers
// ============================================================================

/// Parse `POINT (1 2)` or `POINT EMPTY`
///
/// The body is exactly one coordinate; longer lists fail the grammar
/// instead of being silently truncated.
fn point(input: &str) -> IResult<&str, Geometry> {
    let (input, _) = tag_no_case("POINT").parse(input)?;
    let (input, _) = dimension_marker(input)?;
    let (input, _) = ws(input)?;

    if let Ok((input, _)) = empty_tag(input) {
        return Ok((input, Geometry::Point(Point::empty())));
    }

    let (input, coord) = paren_coord(input)?;
    Ok((input, Geometry::Point(Point::new(coord))))
}

/// Parse `LINESTRING (0 0, 1 1)` or `LINESTRING EMPTY`
fn linestring(input: &str) -> IResult<&str, Geometry> {
    let (input, _) = tag_no_case("LINESTRING").parse(input)?;
    let (input, _) = dimension_marker(input)?;
    let (input, _) = ws(input)?;

    if let Ok((input, _)) = empty_tag(input) {
        return Ok((input, Geometry::LineString(LineString::default())));
    }

    let (input, coords) = coord_seq(input)?;
    Ok((input, Geometry::LineString(LineString::new(coords))))
}

/// Parse `POLYGON ((ring), (hole), ...)` or `POLYGON EMPTY`
fn polygon(input: &str) -> IResult<&str, Geometry> {
    let (input, _) = tag_no_case("POLYGON").parse(input)?;
    let (input, _) = dimension_marker(input)?;
    let (input, _) = ws(input)?;

    if let Ok((input, _)) = empty_tag(input) {
        return Ok((input, Geometry::Polygon(Polygon::default())));
    }

    let (input, polygon) = ring_list(input)?;
    Ok((input, Geometry::Polygon(polygon)))
}

/// Parse one multipoint member, parenthesized or bare
fn multipoint_member(input: &str) -> IResult<&str, Coord> {
    alt((paren_coord, coord)).parse(input)
}

/// Parse `MULTIPOINT ((1 1), (2 2))` or `MULTIPOINT (1 1, 2 2)`
fn multipoint(input: &str) -> IResult<&str, Geometry> {
    let (input, _) = tag_no_case("MULTIPOINT").parse(input)?;
    let (input, _) = dimension_marker(input)?;
    let (input, _) = ws(input)?;

    if let Ok((input, _)) = empty_tag(input) {
        return Ok((input, Geometry::MultiPoint(MultiPoint::default())));
    }

    let (input, coords) = delimited(
        pair(char('('), ws),
        separated_list0((ws, char(','), ws), multipoint_member),
        pair(ws, char(')')),
    )
    .parse(input)?;

    let points = coords.into_iter().map(|coord| Point::new(coord)).collect();
    Ok((input, Geometry::MultiPoint(MultiPoint::new(points))))
}

/// Parse `MULTILINESTRING ((0 0, 1 1), (2 2, 3 3))`
fn multilinestring(input: &str) -> IResult<&str, Geometry> {
    let (input, _) = tag_no_case("MULTILINESTRING").parse(input)?;
    let (input, _) = dimension_marker(input)?;
    let (input, _) = ws(input)?;

    if let Ok((input, _)) = empty_tag(input) {
        return Ok((input, Geometry::MultiLineString(MultiLineString::default())));
    }

    let (input, lines) = delimited(
        pair(char('('), ws),
        separated_list0((ws, char(','), ws), ring),
        pair(ws, char(')')),
    )
    .parse(input)?;

    Ok((input, Geometry::MultiLineString(MultiLineString::new(lines))))
}

/// Parse `MULTIPOLYGON (((ring)), ((ring)))`
fn multipolygon(input: &str) -> IResult<&str, Geometry> {
    let (input, _) = tag_no_case("MULTIPOLYGON").parse(input)?;
    let (input, _) = dimension_marker(input)?;
    let (input, _) = ws(input)?;

    if let Ok((input, _)) = empty_tag(input) {
        return Ok((input, Geometry::MultiPolygon(MultiPolygon::default())));
    }

    let (input, polygons) = delimited(
        pair(char('('), ws),
        separated_list0((ws, char(','), ws), ring_list),
        pair(ws, char(')')),
    )
    .parse(input)?;

    Ok((input, Geometry::MultiPolygon(MultiPolygon::new(polygons))))
}

/// Parse `GEOMETRYCOLLECTION (POINT (1 1), ...)`
fn geometry_collection(input: &str) -> IResult<&str, Geometry> {
    let (input, _) = tag_no_case("GEOMETRYCOLLECTION").parse(input)?;
    let (input, _) = dimension_marker(input)?;
    let (input, _) = ws(input)?;

    if let Ok((input, _)) = empty_tag(input) {
        return Ok((input, Geometry::Collection(Vec::new())));
    }

    let (input, members) = delimited(
        pair(char('('), ws),
        separated_list0((ws, char(','), ws), geometry),
        pair(ws, char(')')),
    )
    .parse(input)?;

    Ok((input, Geometry::Collection(members)))
}

/// Parse any geometry
fn geometry(input: &str) -> IResult<&str, Geometry> {
    alt((
        geometry_collection,
        multipolygon,
        multilinestring,
        multipoint,
        polygon,
        linestring,
        point,
    ))
    .parse(input)
}

// ============================================================================
// Entry Point
// ============================================================================

/// Parse a WKT string into a geometry
///
/// Surrounding whitespace is ignored; any other text after the geometry is
/// an error.
pub fn parse(input: &str) -> Result<Geometry> {
    let trimmed = input.trim_start();

    let (rest, geometry) = geometry(trimmed).map_err(|_| WktError::malformed(trimmed))?;

    let rest = rest.trim_start();
    if !rest.is_empty() {
        return Err(WktError::trailing_input(rest));
    }

    Ok(geometry)
}
