//! Argument checks shared by lookup and submit
//!
//! Each check covers one step of the validation order; callers run them in
//! sequence so the first failing step decides the error.

use recordbase_core::{Error, FieldSpec, Result, Value, ValueSpec};

pub(crate) fn require_type(record_type: &str) -> Result<()> {
    if record_type.is_empty() {
        return Err(Error::TypeArgumentRequired);
    }
    Ok(())
}

/// Steps 2 and 3: the id must be supplied, then must be an integer
pub(crate) fn require_id(record_type: &str, id: &Value) -> Result<i64> {
    if !id.is_truthy() {
        return Err(Error::IdArgumentRequired {
            record_type: record_type.to_string(),
        });
    }
    id.as_int().ok_or_else(|| {
        Error::invalid_internal_id(
            record_type,
            format!("{:?} ({})", id.to_text(), id.type_name()),
        )
    })
}

pub(crate) fn require_fields(record_type: &str, id: i64, fields: &FieldSpec) -> Result<()> {
    if fields.is_empty() {
        return Err(Error::FieldsArgumentRequired {
            record_type: record_type.to_string(),
            id,
        });
    }
    Ok(())
}

pub(crate) fn require_values(
    record_type: &str,
    id: i64,
    fields: &FieldSpec,
    values: &ValueSpec,
) -> Result<()> {
    let reason = if values.is_missing() {
        "no values given".to_string()
    } else if values.len() != fields.len() {
        format!("{} fields but {} values", fields.len(), values.len())
    } else {
        return Ok(());
    };
    Err(Error::ValuesArgumentRequired {
        record_type: record_type.to_string(),
        id,
        reason,
    })
}
