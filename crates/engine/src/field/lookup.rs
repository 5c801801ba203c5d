//! Field lookup with `source.target` joins

use std::collections::HashMap;

use tracing::{debug, trace};

use recordbase_core::{
    FieldSpec, Predicate, Record, RecordTypeDescriptor, Result, Value, INTERNAL_ID_FIELD,
    JOIN_DELIMITER,
};

use super::validate::{require_fields, require_id, require_type};
use super::{FieldApi, FieldLookup, FieldValues};

/// Joined records keyed by source field code; `None` when the join found nothing
type JoinCache = HashMap<String, Option<Record>>;

impl FieldApi {
    /// Look up one or more fields of a record.
    ///
    /// With a single field name, returns the text form of the stored value.
    /// An absent field gives the empty string, the same text as a stored
    /// null, so absence cannot be told apart in this form; use the list
    /// form when it matters. With a list, returns every
    /// requested name mapped to its value; a name of the form
    /// `source.target` follows the join declared on `source` and reads
    /// `target` from the joined record.
    ///
    /// `text` is accepted for callers that ask for display values; values
    /// are returned as stored either way.
    ///
    /// # Errors
    ///
    /// Checked in order: `TypeArgumentRequired`, `IdArgumentRequired`,
    /// `InvalidInternalId` (id not an integer), `FieldsArgumentRequired`,
    /// `InvalidRecordType`, `InvalidInternalId` (no such record).
    pub fn lookup_field(
        &self,
        record_type: &str,
        id: impl Into<Value>,
        fields: impl Into<FieldSpec>,
        text: bool,
    ) -> Result<FieldLookup> {
        let id = id.into();
        let fields = fields.into();

        require_type(record_type)?;
        let id = require_id(record_type, &id)?;
        require_fields(record_type, id, &fields)?;
        let (descriptor, record) = self.load(record_type, id)?;

        debug!(
            target: "recordbase::lookup",
            record_type,
            id,
            fields = fields.len(),
            text,
            "Looking up fields"
        );

        let names = match fields {
            FieldSpec::Single(name) => {
                let text = record.get(&name).map(Value::to_text).unwrap_or_default();
                return Ok(FieldLookup::Text(text));
            }
            FieldSpec::List(names) => names,
        };

        let mut joins = JoinCache::new();
        let mut values = FieldValues::default();
        for name in &names {
            let value = match name.split_once(JOIN_DELIMITER) {
                Some((source, target)) => {
                    if !joins.contains_key(source) {
                        let joined = self.resolve_join(&descriptor, &record, source)?;
                        joins.insert(source.to_string(), joined);
                    }
                    joins
                        .get(source)
                        .and_then(Option::as_ref)
                        .and_then(|joined| joined.get(target))
                        .cloned()
                }
                None => record.get(name).cloned(),
            };
            values.insert(name, value);
        }

        Ok(FieldLookup::Values(values))
    }

    /// Text of a single field.
    ///
    /// Shorthand for [`FieldApi::lookup_field`] with one name.
    pub fn lookup_text(
        &self,
        record_type: &str,
        id: impl Into<Value>,
        field: &str,
    ) -> Result<String> {
        let found = self.lookup_field(record_type, id, FieldSpec::Single(field.to_string()), false)?;
        Ok(found.into_text().unwrap_or_default())
    }

    /// Values of several fields.
    ///
    /// Always uses the list form, so a single name still comes back as a
    /// mapping and may be a join path.
    pub fn lookup_values(
        &self,
        record_type: &str,
        id: impl Into<Value>,
        fields: impl Into<FieldSpec>,
    ) -> Result<FieldValues> {
        let fields = match fields.into() {
            FieldSpec::Single(name) if name.is_empty() => FieldSpec::List(Vec::new()),
            FieldSpec::Single(name) => FieldSpec::List(vec![name]),
            list => list,
        };
        let found = self.lookup_field(record_type, id, fields, false)?;
        Ok(found.into_values().unwrap_or_default())
    }

    /// Record joined through `source` on `record`, if every step resolves
    fn resolve_join(
        &self,
        descriptor: &RecordTypeDescriptor,
        record: &Record,
        source: &str,
    ) -> Result<Option<Record>> {
        let Some(target_type) = descriptor.join_target(source) else {
            trace!(
                target: "recordbase::lookup",
                record_type = %descriptor.code,
                source,
                "Field is not a join"
            );
            return Ok(None);
        };
        if self.db.metadata().lookup(target_type)?.is_none() {
            trace!(target: "recordbase::lookup", target_type, "Join target type not registered");
            return Ok(None);
        }
        let Some(key) = record.get(source) else {
            return Ok(None);
        };

        let joined = self
            .db
            .source()
            .find(target_type, &Predicate::eq(INTERNAL_ID_FIELD, key.clone()))
            .into_iter()
            .next();
        trace!(
            target: "recordbase::lookup",
            source,
            target_type,
            found = joined.is_some(),
            "Join resolved"
        );
        Ok(joined)
    }
}
