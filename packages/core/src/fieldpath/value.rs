//! Traversal cursor values and record field resolution
//!
//! [`Value`] is the evaluator's working value at one traversal step: a
//! tagged variant over every shape the record graph can expose. It exists
//! only for the duration of a single evaluation and borrows from the record
//! it walks.
//!
//! [`Record`] is the seam between the typed record model and the generic
//! evaluator: each record type carries an explicit two-tier resolution
//! table from field names to values, checked wire alias first, capitalized
//! declared name second.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

/// Literal rendered for benign absence.
pub const NONE: &str = "<none>";

/// The evaluator's working value at one traversal step.
#[derive(Debug, Clone)]
pub enum Value<'a> {
    /// Struct-like record with resolvable fields
    Record(&'a dyn Record),
    /// String-keyed map such as labels or annotations
    Map(&'a BTreeMap<String, String>),
    /// Ordered collection of member values
    List(Vec<Value<'a>>),
    /// String scalar
    Str(&'a str),
    /// Integer scalar
    Int(i64),
    /// Boolean scalar
    Bool(bool),
    /// Timestamp scalar
    Time(&'a DateTime<Utc>),
    /// Unset optional reference or missing entry
    Absent,
}

impl Value<'_> {
    /// Short shape name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Record(_) => "record",
            Value::Map(_) => "map",
            Value::List(_) => "list",
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::Time(_) => "timestamp",
            Value::Absent => "absent",
        }
    }

    /// Whether this value marks benign absence.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

/// Generic deterministic string conversion for rendered cells.
///
/// Scalars print directly, timestamps print RFC 3339, composites fall back
/// to their debug form (maps are ordered, so this stays deterministic), and
/// absence prints the `<none>` marker. This is not a JSON re-encoding.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Record(record) => write!(f, "{record:?}"),
            Value::Map(map) => write!(f, "{map:?}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Time(t) => f.write_str(&t.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Value::Absent => f.write_str(NONE),
        }
    }
}

/// Struct-like value whose fields the evaluator resolves by name.
///
/// Implementations are explicit resolution tables. [`Record::field`]
/// matches each field's wire alias exactly (the camelCase name the record
/// serializes under); [`Record::field_named`] matches the capitalized
/// declared name, e.g. `NodeName` or `PodIP`. Keeping the tiers separate
/// preserves the resolution order: alias first, capitalized name as
/// fallback.
pub trait Record: fmt::Debug {
    /// Tier-1 lookup by wire alias (e.g. `nodeName`).
    fn field(&self, alias: &str) -> Option<Value<'_>>;

    /// Tier-2 lookup by capitalized declared name (e.g. `NodeName`).
    fn field_named(&self, name: &str) -> Option<Value<'_>>;
}

/// Conversion of a record field into a traversal cursor.
///
/// `Option` converts through a single unwrap-or-absent rule: `None` becomes
/// [`Value::Absent`] wherever it appears, which is what lets the evaluator
/// short-circuit nil references uniformly.
pub trait ToValue {
    /// Borrow this field as a cursor value.
    fn to_value(&self) -> Value<'_>;
}

impl ToValue for String {
    fn to_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl ToValue for i32 {
    fn to_value(&self) -> Value<'_> {
        Value::Int(i64::from(*self))
    }
}

impl ToValue for i64 {
    fn to_value(&self) -> Value<'_> {
        Value::Int(*self)
    }
}

impl ToValue for DateTime<Utc> {
    fn to_value(&self) -> Value<'_> {
        Value::Time(self)
    }
}

impl ToValue for BTreeMap<String, String> {
    fn to_value(&self) -> Value<'_> {
        Value::Map(self)
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value<'_> {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Absent,
        }
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value<'_> {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}
