//! Core value type for everything the tracer can render.
//!
//! [`Value`] is a closed set of tagged variants covering the capability set
//! the formatter dispatches on: scalars, ordered sequences, fixed-arity
//! sequences, sets, key-value mappings, text, and labeled tabular data.
//! Collection variants are persistent (`im`), so cloning is O(1).

use std::cmp::Ordering;
use std::fmt;
use std::fmt::Write as _;
use std::hash::{Hash, Hasher};
use std::mem;
use std::sync::Arc;

use crate::table::{Column, Table};

// =============================================================================
// Value
// =============================================================================

/// A value the tracer knows how to render.
///
/// The canonical debug representation of a value is [`Value::repr`]: an
/// unambiguous, reconstructible-where-possible rendering with strings quoted
/// and escaped. The `Display` impl is the human form (strings bare); the
/// `Debug` impl delegates to `repr`.
#[derive(Clone)]
pub enum Value {
    /// The nil value (represents absence).
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    Str(Arc<str>),
    /// Ordered sequence with identity order.
    List(im::Vector<Value>),
    /// Fixed-arity sequence.
    Tuple(im::Vector<Value>),
    /// Set of distinct values, iterated in sorted order.
    Set(im::OrdSet<Value>),
    /// Key-value mapping, iterated in key order.
    Map(im::OrdMap<Value, Value>),
    /// Two-dimensional labeled table.
    Table(Table),
    /// Single labeled column.
    Column(Column),
}

/// Runtime type tag of a [`Value`], used in return-value trace messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Nil.
    Nil,
    /// Boolean.
    Bool,
    /// Integer.
    Int,
    /// Float.
    Float,
    /// String.
    Str,
    /// Ordered sequence.
    List,
    /// Fixed-arity sequence.
    Tuple,
    /// Set.
    Set,
    /// Key-value mapping.
    Map,
    /// Labeled table.
    Table,
    /// Labeled column.
    Column,
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "Nil",
            Self::Bool => "Bool",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Str => "Str",
            Self::List => "List",
            Self::Tuple => "Tuple",
            Self::Set => "Set",
            Self::Map => "Map",
            Self::Table => "Table",
            Self::Column => "Column",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Returns the runtime type tag of this value.
    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Nil => TypeTag::Nil,
            Self::Bool(_) => TypeTag::Bool,
            Self::Int(_) => TypeTag::Int,
            Self::Float(_) => TypeTag::Float,
            Self::Str(_) => TypeTag::Str,
            Self::List(_) => TypeTag::List,
            Self::Tuple(_) => TypeTag::Tuple,
            Self::Set(_) => TypeTag::Set,
            Self::Map(_) => TypeTag::Map,
            Self::Table(_) => TypeTag::Table,
            Self::Column(_) => TypeTag::Column,
        }
    }

    /// Returns the length of this value, or `None` for values with no length
    /// concept (scalars).
    ///
    /// String length is measured in characters; table length is the row count.
    #[must_use]
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::Nil | Self::Bool(_) | Self::Int(_) | Self::Float(_) => None,
            Self::Str(s) => Some(s.chars().count()),
            Self::List(v) | Self::Tuple(v) => Some(v.len()),
            Self::Set(s) => Some(s.len()),
            Self::Map(m) => Some(m.len()),
            Self::Table(t) => Some(t.row_count()),
            Self::Column(c) => Some(c.len()),
        }
    }

    /// Returns true if this value is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the canonical debug representation of this value.
    ///
    /// Single-line, unambiguous: strings are quoted and escaped, sets carry a
    /// `#` sigil to distinguish them from maps, one-tuples carry a trailing
    /// comma. Tables and columns render as shape stubs; their full rendering
    /// is the formatter's job.
    #[must_use]
    pub fn repr(&self) -> String {
        let mut out = String::new();
        self.write_repr(&mut out);
        out
    }

    fn write_repr(&self, out: &mut String) {
        match self {
            Self::Nil => out.push_str("nil"),
            Self::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            Self::Int(i) => {
                let _ = write!(out, "{i}");
            }
            Self::Float(f) => {
                let _ = write!(out, "{f:?}");
            }
            Self::Str(s) => {
                let _ = write!(out, "{s:?}");
            }
            Self::List(items) => {
                out.push('[');
                Self::write_items(out, items.iter());
                out.push(']');
            }
            Self::Tuple(items) => {
                out.push('(');
                Self::write_items(out, items.iter());
                if items.len() == 1 {
                    out.push(',');
                }
                out.push(')');
            }
            Self::Set(items) => {
                out.push_str("#{");
                Self::write_items(out, items.iter());
                out.push('}');
            }
            Self::Map(entries) => {
                out.push('{');
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    key.write_repr(out);
                    out.push_str(": ");
                    value.write_repr(out);
                }
                out.push('}');
            }
            Self::Table(t) => {
                let (rows, cols) = t.shape();
                let _ = write!(out, "Table({rows}x{cols})");
            }
            Self::Column(c) => match c.name() {
                Some(name) => {
                    let _ = write!(out, "Column({name}, {})", c.len());
                }
                None => {
                    let _ = write!(out, "Column({})", c.len());
                }
            },
        }
    }

    fn write_items<'a>(out: &mut String, items: impl Iterator<Item = &'a Value>) {
        for (i, item) in items.enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            item.write_repr(out);
        }
    }

    // -------------------------------------------------------------------------
    // Constructors
    // -------------------------------------------------------------------------

    /// Creates a list from an iterator of values.
    #[must_use]
    pub fn list<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Creates a tuple from an iterator of values.
    #[must_use]
    pub fn tuple<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Self::Tuple(items.into_iter().collect())
    }

    /// Creates a set from an iterator of values.
    #[must_use]
    pub fn set<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Self::Set(items.into_iter().collect())
    }

    /// Creates a map from an iterator of key-value pairs.
    #[must_use]
    pub fn map<I: IntoIterator<Item = (Value, Value)>>(pairs: I) -> Self {
        Self::Map(pairs.into_iter().collect())
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Nil => 0,
            Self::Bool(_) => 1,
            Self::Int(_) => 2,
            Self::Float(_) => 3,
            Self::Str(_) => 4,
            Self::List(_) => 5,
            Self::Tuple(_) => 6,
            Self::Set(_) => 7,
            Self::Map(_) => 8,
            Self::Table(_) => 9,
            Self::Column(_) => 10,
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(Arc::from(s.as_str()))
    }
}

impl From<Table> for Value {
    fn from(t: Table) -> Self {
        Self::Table(t)
    }
}

impl From<Column> for Value {
    fn from(c: Column) -> Self {
        Self::Column(c)
    }
}

// =============================================================================
// Display / Debug
// =============================================================================

impl fmt::Display for Value {
    /// Human form: identical to [`Value::repr`] except top-level strings are
    /// bare.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            other => f.write_str(&other.repr()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

// =============================================================================
// Equality / Ordering / Hashing
// =============================================================================
//
// Value carries a total order (floats via `total_cmp`) so it can key the
// ordered persistent collections. Eq is defined as `cmp == Equal`, keeping
// the three traits mutually consistent.

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Nil, Self::Nil) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            (Self::List(a), Self::List(b)) | (Self::Tuple(a), Self::Tuple(b)) => {
                a.iter().cmp(b.iter())
            }
            (Self::Set(a), Self::Set(b)) => a.iter().cmp(b.iter()),
            (Self::Map(a), Self::Map(b)) => a.iter().cmp(b.iter()),
            (Self::Table(a), Self::Table(b)) => a.cmp(b),
            (Self::Column(a), Self::Column(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(i) => i.hash(state),
            Self::Float(f) => f.to_bits().hash(state),
            Self::Str(s) => s.hash(state),
            Self::List(items) | Self::Tuple(items) => {
                for item in items {
                    item.hash(state);
                }
            }
            Self::Set(items) => {
                for item in items {
                    item.hash(state);
                }
            }
            Self::Map(entries) => {
                for (key, value) in entries {
                    key.hash(state);
                    value.hash(state);
                }
            }
            Self::Table(t) => t.hash(state),
            Self::Column(c) => c.hash(state),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
