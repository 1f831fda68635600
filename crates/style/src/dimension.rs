//! Defines length values and per-edge value sets.
use crate::parsers::{parse_dimension, parse_edges_shorthand, run_parser};
use flexure_types::{Edge, UNDEFINED, floats_equal};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    /// Not set. Distinct from zero: an undefined margin falls back to a
    /// shorthand, an undefined max size imposes no limit.
    #[default]
    Undefined,
    Points(f32),
    Percent(f32),
    Auto,
}

impl Dimension {
    /// Resolves against the size of the reference box.
    ///
    /// Percentages of an undefined reference size stay undefined; `Auto` and
    /// `Undefined` always resolve to the undefined sentinel.
    pub fn resolve(self, reference: f32) -> f32 {
        match self {
            Dimension::Points(v) => v,
            Dimension::Percent(p) => p * reference / 100.0,
            Dimension::Undefined | Dimension::Auto => UNDEFINED,
        }
    }

    /// Like [`Dimension::resolve`], except that `auto` margins contribute zero.
    pub fn resolve_margin(self, reference: f32) -> f32 {
        match self {
            Dimension::Auto => 0.0,
            other => other.resolve(reference),
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Dimension::Undefined)
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Dimension::Auto)
    }

    pub fn is_percent(self) -> bool {
        matches!(self, Dimension::Percent(_))
    }

    /// Unit equality with a float-tolerant value comparison.
    pub fn same_as(self, other: Dimension) -> bool {
        match (self, other) {
            (Dimension::Points(a), Dimension::Points(b)) => floats_equal(a, b),
            (Dimension::Percent(a), Dimension::Percent(b)) => floats_equal(a, b),
            (Dimension::Undefined, Dimension::Undefined) => true,
            (Dimension::Auto, Dimension::Auto) => true,
            _ => false,
        }
    }
}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Dimension::Undefined => 0u8.hash(state),
            Dimension::Points(v) => {
                1u8.hash(state);
                v.to_bits().hash(state);
            }
            Dimension::Percent(v) => {
                2u8.hash(state);
                v.to_bits().hash(state);
            }
            Dimension::Auto => 3u8.hash(state),
        }
    }
}

impl Eq for Dimension {}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Dimension::Points(value)
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DimensionVisitor;
        impl<'de> de::Visitor<'de> for DimensionVisitor {
            type Value = Dimension;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number, a string like '10', '50%' or 'auto', or a map")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Dimension, E> {
                Ok(Dimension::Points(v as f32))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Dimension, E> {
                Ok(Dimension::Points(v as f32))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Dimension, E> {
                Ok(Dimension::Points(v as f32))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Dimension, E> {
                Ok(Dimension::Undefined)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Dimension, E> {
                run_parser(parse_dimension, v).map_err(E::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Dimension, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let Some(key) = map.next_key::<String>()? else {
                    return Ok(Dimension::Undefined);
                };
                let value = match key.as_str() {
                    "points" | "pt" => Dimension::Points(map.next_value()?),
                    "percent" => Dimension::Percent(map.next_value()?),
                    other => return Err(de::Error::unknown_field(other, &["points", "percent"])),
                };
                Ok(value)
            }
        }
        deserializer.deserialize_any(DimensionVisitor)
    }
}

/// Nine-slot per-edge values (margin, padding, border or position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Edges([Dimension; Edge::COUNT]);

impl Edges {
    pub fn new() -> Self {
        Self::default()
    }

    /// All four sides set through the `all` slot.
    pub fn all(value: impl Into<Dimension>) -> Self {
        Self::new().with(Edge::All, value)
    }

    pub fn get(&self, edge: Edge) -> Dimension {
        self.0[edge.index()]
    }

    pub fn set(&mut self, edge: Edge, value: impl Into<Dimension>) {
        self.0[edge.index()] = value.into();
    }

    pub fn with(mut self, edge: Edge, value: impl Into<Dimension>) -> Self {
        self.set(edge, value);
        self
    }

    /// Looks an edge up through its shorthands: the edge itself, then
    /// `vertical`/`horizontal`, then `all`.
    ///
    /// Logical edges never fall back to `default`; an unset `start` stays
    /// undefined so the caller can try the physical side next.
    pub fn computed(&self, edge: Edge, default: Dimension) -> Dimension {
        let own = self.get(edge);
        if !own.is_undefined() {
            return own;
        }
        let axis_shorthand = match edge {
            Edge::Top | Edge::Bottom => Some(Edge::Vertical),
            Edge::Left | Edge::Right | Edge::Start | Edge::End => Some(Edge::Horizontal),
            _ => None,
        };
        if let Some(shorthand) = axis_shorthand {
            let value = self.get(shorthand);
            if !value.is_undefined() {
                return value;
            }
        }
        let all = self.get(Edge::All);
        if !all.is_undefined() {
            return all;
        }
        if matches!(edge, Edge::Start | Edge::End) {
            return Dimension::Undefined;
        }
        default
    }
}

impl<'de> Deserialize<'de> for Edges {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EdgesVisitor;
        impl<'de> de::Visitor<'de> for EdgesVisitor {
            type Value = Edges;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number, a shorthand like '10 20', or a map of edges")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Edges, E> {
                Ok(Edges::all(v as f32))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Edges, E> {
                Ok(Edges::all(v as f32))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Edges, E> {
                Ok(Edges::all(v as f32))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Edges, E> {
                parse_edges_shorthand(v).map_err(E::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Edges, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut edges = Edges::new();
                while let Some(edge) = map.next_key::<Edge>()? {
                    edges.set(edge, map.next_value::<Dimension>()?);
                }
                Ok(edges)
            }
        }
        deserializer.deserialize_any(EdgesVisitor)
    }
}
