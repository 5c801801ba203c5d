//! Field submission

use tracing::{debug, warn};

use recordbase_core::{FieldSpec, Patch, Predicate, Result, Value, ValueSpec};

use super::validate::{require_fields, require_id, require_type, require_values};
use super::FieldApi;

impl FieldApi {
    /// Set fields on a record.
    ///
    /// `fields[i]` receives `values[i]`; a single field takes a single
    /// value. Values are stored as given, without checking them against the
    /// record type's descriptor, and join targets are never written.
    ///
    /// `do_sourcing` is accepted for callers that request dependent-field
    /// sourcing; no sourcing takes place.
    ///
    /// The read of the record and the write of the patch are separate store
    /// calls, so concurrent submissions to one record race field by field.
    ///
    /// # Errors
    ///
    /// Checked in order: `TypeArgumentRequired`, `IdArgumentRequired`,
    /// `InvalidInternalId` (id not an integer), `FieldsArgumentRequired`,
    /// `ValuesArgumentRequired`, `InvalidRecordType`, `InvalidInternalId`
    /// (no such record). Nothing is written when any check fails.
    pub fn submit_field(
        &self,
        record_type: &str,
        id: impl Into<Value>,
        fields: impl Into<FieldSpec>,
        values: impl Into<ValueSpec>,
        do_sourcing: bool,
    ) -> Result<()> {
        let id = id.into();
        let fields = fields.into();
        let values = values.into();

        require_type(record_type)?;
        let id = require_id(record_type, &id)?;
        require_fields(record_type, id, &fields)?;
        require_values(record_type, id, &fields, &values)?;
        let (_, record) = self.load(record_type, id)?;

        let patch: Patch = fields
            .names()
            .iter()
            .cloned()
            .zip(values.values().iter().cloned())
            .collect();

        let updated = self
            .db
            .source()
            .update(record_type, &Predicate::internal_id(record.id()), &patch);
        if updated == 0 {
            warn!(
                target: "recordbase::submit",
                record_type,
                id,
                "Record disappeared before update"
            );
        }

        debug!(
            target: "recordbase::submit",
            record_type,
            id,
            fields = patch.len(),
            do_sourcing,
            "Fields submitted"
        );
        Ok(())
    }
}
