use std::fmt;

use solidmath::prelude::*;

use super::Polygon;

/// Output from cutting a polygon by a plane.
#[derive(Debug, Clone, PartialEq)]
pub enum PolygonCutOutput {
    /// The polygon lies in the cutting plane.
    Flush,
    /// The polygon is not flush with the cutting plane.
    NonFlush {
        /// Portion of the polygon behind the cutting plane, if any. If this
        /// is the whole polygon, then `outside` is `None` (but `intersection`
        /// may be `Some`).
        inside: Option<Polygon>,
        /// Portion of the polygon in front of the cutting plane, if any. If
        /// this is the whole polygon, then `inside` is `None` (but
        /// `intersection` may be `Some`).
        outside: Option<Polygon>,

        /// Intersection of the polygon with the cutting plane, if it is a
        /// segment. If `inside` and `outside` are both `Some`, then this is
        /// `Some`.
        intersection: Option<Segment>,
    },
}
impl fmt::Display for PolygonCutOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmt_option_polygon = |p: &Option<Polygon>| match p {
            Some(p) => format!("{} edges, area {}", p.edges().len(), p.area().base()),
            None => "<none>".to_string(),
        };

        match self {
            PolygonCutOutput::Flush => write!(f, "Flush"),
            PolygonCutOutput::NonFlush {
                inside,
                outside,
                intersection,
            } => write!(
                f,
                "NonFlush {{ inside: {}, outside: {}, intersection: {} }}",
                fmt_option_polygon(inside),
                fmt_option_polygon(outside),
                match intersection {
                    Some(s) => format!("{:?} to {:?}", s.base_point(), s.end_point()),
                    None => "<none>".to_string(),
                },
            ),
        }
    }
}
impl PolygonCutOutput {
    /// Constructs a result for a polygon `p` that is completely inside the
    /// cut.
    pub fn all_inside(p: Polygon, intersection: Option<Segment>) -> Self {
        Self::NonFlush {
            inside: Some(p),
            outside: None,
            intersection,
        }
    }
    /// Constructs a result for a polygon `p` that is completely outside the
    /// cut.
    pub fn all_outside(p: Polygon, intersection: Option<Segment>) -> Self {
        Self::NonFlush {
            inside: None,
            outside: Some(p),
            intersection,
        }
    }

    /// Returns whether the polygon was split into two pieces.
    pub fn is_split(&self) -> bool {
        matches!(
            self,
            Self::NonFlush {
                inside: Some(_),
                outside: Some(_),
                ..
            }
        )
    }

    /// Returns the portion of the polygon on the inside of the cut.
    pub fn inside(&self) -> Option<&Polygon> {
        match self {
            PolygonCutOutput::Flush => None,
            PolygonCutOutput::NonFlush { inside, .. } => inside.as_ref(),
        }
    }
    /// Returns the portion of the polygon on the outside of the cut.
    pub fn outside(&self) -> Option<&Polygon> {
        match self {
            PolygonCutOutput::Flush => None,
            PolygonCutOutput::NonFlush { outside, .. } => outside.as_ref(),
        }
    }
    /// Returns the segment where the polygon meets the cutting plane.
    pub fn intersection(&self) -> Option<Segment> {
        match self {
            PolygonCutOutput::Flush => None,
            PolygonCutOutput::NonFlush { intersection, .. } => *intersection,
        }
    }

    /// Returns an iterator containing `inside` and `outside`, ignoring `None`
    /// values.
    pub fn into_pieces(self) -> impl Iterator<Item = Polygon> {
        match self {
            PolygonCutOutput::Flush => itertools::chain(None, None),
            PolygonCutOutput::NonFlush {
                inside, outside, ..
            } => itertools::chain(inside, outside),
        }
    }
}
