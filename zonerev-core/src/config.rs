//! Zone config rewriting
//!
//! A zone config is a sparse JSON object. Only the fields named below are
//! touched; everything else passes through untouched and in its original
//! position.

use crate::error::{Result, ZoneError};
use crate::rotate::reverse_path;
use crate::rules::{Fixup, RuleSet};
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, info};

/// Module identifier field
pub const MODULE_ID: &str = "module.id";
/// Zone identifier field
pub const ZONE_ID: &str = "zone.id";
/// Zone display name field
pub const ZONE_NAME: &str = "zone.name";
/// Identifier of the zone this one was reversed from
pub const ZONE_REVERSE_ID: &str = "zone.reverse_id";
/// Ordered list of path points
pub const ZONE_PATH: &str = "zone.path";
/// Index of the finish segment within the path
pub const ZONE_FINISH_INDEX: &str = "zone.finish_index";
/// Map display flag
pub const ZONE_MAP: &str = "zone.map";

/// A string field whose suffix no rule recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unconverted {
    /// Config field name
    pub field: &'static str,
    /// Value that was kept as is
    pub value: String,
}

impl fmt::Display for Unconverted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No automatic update possible for {}", self.value)
    }
}

/// A string field that was renamed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    /// Config field name
    pub field: &'static str,
    /// Previous value
    pub from: String,
    /// New value
    pub to: String,
}

/// What a reversal changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseReport {
    /// Number of points in the path
    pub path_len: usize,
    /// Finish index before reversal
    pub finish_index_before: i64,
    /// Finish index after reversal
    pub finish_index_after: i64,
    /// Fields renamed by a suffix rule
    pub renamed: Vec<Rename>,
    /// Fields no suffix rule applied to
    pub unconverted: Vec<Unconverted>,
    /// Value written to `zone.reverse_id`, if any
    pub reverse_id: Option<String>,
    /// New `zone.map` value, if the flag was present
    pub map: Option<bool>,
}

impl ReverseReport {
    /// Diagnostic lines for fields that could not be converted
    pub fn warnings(&self) -> impl Iterator<Item = String> + '_ {
        self.unconverted.iter().map(ToString::to_string)
    }
}

/// Mutable view over one zone's config object
#[derive(Debug)]
pub struct ZoneConfig<'a> {
    map: &'a mut Map<String, Value>,
}

impl<'a> ZoneConfig<'a> {
    /// Wrap a config object
    pub fn new(map: &'a mut Map<String, Value>) -> Self {
        Self { map }
    }

    /// Whether `field` is present, whatever its value
    pub fn has(&self, field: &str) -> bool {
        self.map.contains_key(field)
    }

    /// Reverse the zone in place.
    ///
    /// Required fields are checked before anything is written, so an error
    /// leaves the config unmodified.
    pub fn reverse(&mut self, rules: RuleSet) -> Result<ReverseReport> {
        let finish_index = self.finish_index()?;
        let points = self.path()?.clone();
        self.check_optional_types()?;

        let mut report = ReverseReport {
            path_len: points.len(),
            finish_index_before: finish_index,
            ..ReverseReport::default()
        };

        let rotation = reverse_path(points, finish_index)?;
        report.finish_index_after = rotation.finish_index;
        debug!(
            points = report.path_len,
            from = finish_index,
            to = rotation.finish_index,
            "rotated zone path"
        );
        self.map
            .insert(ZONE_PATH.to_string(), Value::Array(rotation.points));
        self.map.insert(
            ZONE_FINISH_INDEX.to_string(),
            Value::from(rotation.finish_index),
        );

        if let Some(module_id) = self.string_field(MODULE_ID)? {
            let new_id = rename(MODULE_ID, &module_id, rules, &mut report);
            self.map.insert(MODULE_ID.to_string(), Value::String(new_id));
        }

        if let Some(zone_id) = self.string_field(ZONE_ID)? {
            let new_id = rename(ZONE_ID, &zone_id, rules, &mut report);
            if new_id != zone_id {
                self.map
                    .insert(ZONE_REVERSE_ID.to_string(), Value::String(zone_id.clone()));
                self.map.insert(ZONE_ID.to_string(), Value::String(new_id));
                report.reverse_id = Some(zone_id);
            }
        }

        if let Some(name) = self.string_field(ZONE_NAME)? {
            let new_name = rename(ZONE_NAME, &name, rules, &mut report);
            self.map.insert(ZONE_NAME.to_string(), Value::String(new_name));
        }

        if let Some(Value::Bool(map)) = self.map.get_mut(ZONE_MAP) {
            *map = !*map;
            report.map = Some(*map);
            debug!(map = *map, "inverted zone.map");
        }

        info!(
            renamed = report.renamed.len(),
            unconverted = report.unconverted.len(),
            "zone reversed"
        );
        Ok(report)
    }

    fn finish_index(&self) -> Result<i64> {
        let value = self.required(ZONE_FINISH_INDEX)?;
        value.as_i64().ok_or(ZoneError::TypeMismatch {
            field: ZONE_FINISH_INDEX,
            expected: "integer",
            found: if value.is_u64() {
                "integer beyond the signed 64-bit range"
            } else {
                json_type_name(value)
            },
        })
    }

    fn path(&self) -> Result<&Vec<Value>> {
        let value = self.required(ZONE_PATH)?;
        value.as_array().ok_or(ZoneError::TypeMismatch {
            field: ZONE_PATH,
            expected: "array",
            found: json_type_name(value),
        })
    }

    fn required(&self, field: &'static str) -> Result<&Value> {
        self.map
            .get(field)
            .ok_or(ZoneError::MissingField { field })
    }

    fn string_field(&self, field: &'static str) -> Result<Option<String>> {
        match self.map.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(ZoneError::TypeMismatch {
                field,
                expected: "string",
                found: json_type_name(other),
            }),
        }
    }

    fn check_optional_types(&self) -> Result<()> {
        for field in [MODULE_ID, ZONE_ID, ZONE_NAME] {
            self.string_field(field)?;
        }
        match self.map.get(ZONE_MAP) {
            None | Some(Value::Bool(_)) => Ok(()),
            Some(other) => Err(ZoneError::TypeMismatch {
                field: ZONE_MAP,
                expected: "boolean",
                found: json_type_name(other),
            }),
        }
    }
}

fn rename(
    field: &'static str,
    value: &str,
    rules: RuleSet,
    report: &mut ReverseReport,
) -> String {
    match rules.fixup(value) {
        Fixup::Converted(new_value) => {
            debug!(field, from = value, to = %new_value, "renamed");
            report.renamed.push(Rename {
                field,
                from: value.to_string(),
                to: new_value.clone(),
            });
            new_value
        }
        Fixup::Unchanged => {
            report.unconverted.push(Unconverted {
                field,
                value: value.to_string(),
            });
            value.to_string()
        }
    }
}

/// Human-readable JSON type name
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
