/// Arrow schemas and batch builders for the core's output rows.
pub mod rows {
    use std::sync::Arc;

    use arrow::array::{
        ArrayRef, BooleanArray, Date32Array, StringArray, UInt32Array, UInt64Array,
    };
    use arrow::datatypes::{DataType, Date32Type, Field, Schema, SchemaRef};
    use arrow::error::ArrowError;
    use arrow::record_batch::RecordBatch;

    use crate::chief::ChiefTenure;
    use crate::decision::ResolvedDecision;
    use crate::justice::Justice;
    use crate::segment::SegmentSet;

    /// Justices as held by the registry.
    pub fn justices_schema() -> Schema {
        Schema::new(vec![
            Field::new("id", DataType::UInt32, false),
            Field::new("last_name", DataType::Utf8, false),
            Field::new("alias", DataType::Utf8, true),
            Field::new("start_term", DataType::Date32, false),
            Field::new("inactive_date", DataType::Date32, true),
            Field::new("chief_date", DataType::Date32, true),
        ])
    }

    /// Resolved decisions. `resolution` is one of resolved/unresolved/ambiguous.
    pub fn decisions_schema() -> Schema {
        Schema::new(vec![
            Field::new("id", DataType::Utf8, false),
            Field::new("date", DataType::Date32, false),
            Field::new("raw_ponente", DataType::Utf8, true),
            Field::new("per_curiam", DataType::Boolean, false),
            Field::new("justice_id", DataType::UInt32, true),
            Field::new("designation", DataType::Utf8, true),
            Field::new("resolution", DataType::Utf8, false),
        ])
    }

    pub fn segments_schema() -> Schema {
        Schema::new(vec![
            Field::new("id", DataType::Utf8, false),
            Field::new("decision_id", DataType::Utf8, false),
            Field::new("opinion_id", DataType::Utf8, false),
            Field::new("ordinal", DataType::UInt32, false),
            Field::new("position", DataType::Utf8, false),
            Field::new("text", DataType::Utf8, false),
            Field::new("char_count", DataType::UInt64, false),
        ])
    }

    pub fn chief_tenures_schema() -> Schema {
        Schema::new(vec![
            Field::new("justice_id", DataType::UInt32, false),
            Field::new("chief_start", DataType::Date32, false),
            Field::new("chief_end", DataType::Date32, true),
            Field::new("years_as_chief", DataType::UInt32, true),
        ])
    }

    fn batch(schema: Schema, columns: Vec<ArrayRef>) -> Result<RecordBatch, ArrowError> {
        let schema: SchemaRef = Arc::new(schema);
        RecordBatch::try_new(schema, columns)
    }

    pub fn justices_batch<'a>(
        justices: impl IntoIterator<Item = &'a Justice>,
    ) -> Result<RecordBatch, ArrowError> {
        let rows: Vec<&Justice> = justices.into_iter().collect();
        batch(
            justices_schema(),
            vec![
                Arc::new(UInt32Array::from_iter_values(rows.iter().map(|j| j.id))),
                Arc::new(StringArray::from_iter_values(rows.iter().map(|j| j.last_name.as_str()))),
                Arc::new(StringArray::from_iter(rows.iter().map(|j| j.alias.as_deref()))),
                Arc::new(Date32Array::from_iter_values(
                    rows.iter().map(|j| Date32Type::from_naive_date(j.start_term)),
                )),
                Arc::new(Date32Array::from_iter(
                    rows.iter().map(|j| j.inactive_date.map(Date32Type::from_naive_date)),
                )),
                Arc::new(Date32Array::from_iter(
                    rows.iter().map(|j| j.chief_date.map(Date32Type::from_naive_date)),
                )),
            ],
        )
    }

    pub fn decisions_batch(rows: &[ResolvedDecision]) -> Result<RecordBatch, ArrowError> {
        batch(
            decisions_schema(),
            vec![
                Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.decision.id.as_str()))),
                Arc::new(Date32Array::from_iter_values(
                    rows.iter().map(|r| Date32Type::from_naive_date(r.decision.date)),
                )),
                Arc::new(StringArray::from_iter(rows.iter().map(|r| r.decision.raw_ponente.as_deref()))),
                Arc::new(BooleanArray::from_iter(rows.iter().map(|r| Some(r.decision.per_curiam)))),
                Arc::new(UInt32Array::from_iter(rows.iter().map(|r| r.justice_id))),
                Arc::new(StringArray::from_iter(
                    rows.iter().map(|r| r.designation.map(|d| d.as_str())),
                )),
                Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.resolution.as_str()))),
            ],
        )
    }

    pub fn segments_batch(sets: &[SegmentSet]) -> Result<RecordBatch, ArrowError> {
        let rows: Vec<_> = sets
            .iter()
            .flat_map(|set| set.segments.iter().map(move |seg| (set, seg)))
            .collect();
        batch(
            segments_schema(),
            vec![
                Arc::new(StringArray::from_iter_values(
                    rows.iter().map(|(set, seg)| set.segment_id(seg)),
                )),
                Arc::new(StringArray::from_iter_values(
                    rows.iter().map(|(set, _)| set.decision_id.as_str()),
                )),
                Arc::new(StringArray::from_iter_values(
                    rows.iter().map(|(set, _)| set.opinion_id.as_str()),
                )),
                Arc::new(UInt32Array::from_iter_values(rows.iter().map(|(_, seg)| seg.ordinal()))),
                Arc::new(StringArray::from_iter_values(rows.iter().map(|(_, seg)| seg.position()))),
                Arc::new(StringArray::from_iter_values(rows.iter().map(|(_, seg)| seg.text()))),
                Arc::new(UInt64Array::from_iter_values(
                    rows.iter().map(|(_, seg)| seg.char_count() as u64),
                )),
            ],
        )
    }

    pub fn chief_tenures_batch(rows: &[ChiefTenure]) -> Result<RecordBatch, ArrowError> {
        batch(
            chief_tenures_schema(),
            vec![
                Arc::new(UInt32Array::from_iter_values(rows.iter().map(|t| t.justice_id))),
                Arc::new(Date32Array::from_iter_values(
                    rows.iter().map(|t| Date32Type::from_naive_date(t.chief_start)),
                )),
                Arc::new(Date32Array::from_iter(
                    rows.iter().map(|t| t.chief_end.map(Date32Type::from_naive_date)),
                )),
                Arc::new(UInt32Array::from_iter(rows.iter().map(|t| t.years_as_chief))),
            ],
        )
    }
}
