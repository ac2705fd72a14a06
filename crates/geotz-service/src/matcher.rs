//! Point-in-geometry tests for tile features.
//!
//! Polygons contain their boundary, so a point on a shared border matches
//! both neighbours. A dividing line claims the points on its designated side
//! within the tile it belongs to, plus the points exactly on it.

use geo::{Coord, Intersects, Line};
use geotz_core::ZoneId;
use geotz_data::{DividingLine, Feature, Geometry, Side};

/// ## Summary
/// Zones of every feature whose geometry matches `point`, in feature order.
/// `point` is `x` = longitude, `y` = latitude.
#[must_use]
pub fn matching_zones(point: Coord<f64>, features: &[Feature]) -> Vec<&ZoneId> {
    features
        .iter()
        .filter(|feature| geometry_matches(&feature.geometry, point))
        .map(|feature| &feature.zone)
        .collect()
}

/// ## Summary
/// Whether one geometry matches `point`. Empty or degenerate geometry never
/// matches.
#[must_use]
pub fn geometry_matches(geometry: &Geometry, point: Coord<f64>) -> bool {
    match geometry {
        Geometry::Polygon(polygon) => polygon.intersects(&point),
        Geometry::MultiPolygon(polygons) => polygons.intersects(&point),
        Geometry::Line(divider) => on_designated_side(divider, point),
        Geometry::Collection(members) => members
            .iter()
            .any(|member| geometry_matches(member, point)),
    }
}

fn on_designated_side(divider: &DividingLine, point: Coord<f64>) -> bool {
    let Some(orientation) = nearest_orientation(divider, point) else {
        return false;
    };
    match divider.side {
        Side::Left => orientation >= 0.0,
        Side::Right => orientation <= 0.0,
    }
}

/// ## Summary
/// Orientation of `point` against the part of the line closest to it:
/// positive on the left, negative on the right, zero on the line.
///
/// When the closest point is a vertex joining two segments, the turn there
/// decides. The side a turn bends towards is the inside of the corner and
/// needs the point on that side of both segments; the outer side needs
/// only one. Reversing the line and swapping the side gives the same answer.
fn nearest_orientation(divider: &DividingLine, point: Coord<f64>) -> Option<f64> {
    let segments: Vec<Line<f64>> = divider
        .line
        .lines()
        .filter(|segment| segment.start != segment.end)
        .collect();
    let (index, nearest) = segments
        .iter()
        .map(|segment| project(*segment, point))
        .enumerate()
        .min_by(|(_, a), (_, b)| a.distance_squared.total_cmp(&b.distance_squared))?;

    let segment = segments[index];
    let joined = match nearest.vertex {
        Some(Vertex::End) => segments
            .get(index + 1)
            .filter(|next| next.start == segment.end)
            .map(|next| (segment, *next)),
        Some(Vertex::Start) => index
            .checked_sub(1)
            .or_else(|| segments.len().checked_sub(1))
            .map(|previous| segments[previous])
            .filter(|previous| previous.end == segment.start && *previous != segment)
            .map(|previous| (previous, segment)),
        None => None,
    };

    Some(match joined {
        Some((incoming, outgoing)) => corner_orientation(incoming, outgoing, point),
        None => cross(segment.delta(), point - segment.start),
    })
}

/// Orientation at the vertex where `incoming` ends and `outgoing` starts.
fn corner_orientation(incoming: Line<f64>, outgoing: Line<f64>, point: Coord<f64>) -> f64 {
    let before = cross(incoming.delta(), point - incoming.start);
    let after = cross(outgoing.delta(), point - outgoing.start);
    let turn = cross(incoming.delta(), outgoing.delta());
    if turn > 0.0 {
        before.min(after)
    } else if turn < 0.0 {
        before.max(after)
    } else {
        before
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vertex {
    Start,
    End,
}

#[derive(Debug, Clone, Copy)]
struct Projection {
    distance_squared: f64,
    /// Set when the closest point on the segment is one of its endpoints.
    vertex: Option<Vertex>,
}

fn project(segment: Line<f64>, point: Coord<f64>) -> Projection {
    let delta = segment.delta();
    let offset = point - segment.start;
    let length_squared = delta.x.mul_add(delta.x, delta.y * delta.y);
    let t = delta.x.mul_add(offset.x, delta.y * offset.y) / length_squared;

    // Endpoints are taken as-is so segments sharing a vertex tie exactly.
    let (nearest, vertex) = if t <= 0.0 {
        (segment.start, Some(Vertex::Start))
    } else if t >= 1.0 {
        (segment.end, Some(Vertex::End))
    } else {
        (segment.start + delta * t, None)
    };
    let gap = point - nearest;
    Projection {
        distance_squared: gap.x.mul_add(gap.x, gap.y * gap.y),
        vertex,
    }
}

fn cross(a: Coord<f64>, b: Coord<f64>) -> f64 {
    a.x.mul_add(b.y, -(a.y * b.x))
}
