use models::service_record::Model;

use super::criteria::RecordCriteria;

/// Records satisfying every criterion, newest first. The input is left
/// untouched; records sharing a timestamp are ordered by descending id, the
/// same order Postgres returns them in.
pub fn filter_records(records: &[Model], criteria: &RecordCriteria) -> Vec<Model> {
    let mut out: Vec<Model> = records.iter().filter(|r| criteria.matches(r)).cloned().collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
    out
}
