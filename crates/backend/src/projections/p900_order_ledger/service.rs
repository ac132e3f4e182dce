use contracts::projections::p900_order_ledger::OrderRecord;
use contracts::shared::date_range::TimeWindow;

/// Rows whose purchase timestamp lies in `[window.start, window.end]`.
///
/// Order of `rows` is preserved. Applying the same window to the result
/// returns it unchanged.
pub fn filter_by_window<'a, I>(rows: I, window: &TimeWindow) -> Vec<&'a OrderRecord>
where
    I: IntoIterator<Item = &'a OrderRecord>,
{
    rows.into_iter()
        .filter(|r| window.contains(&r.order_purchase_timestamp))
        .collect()
}
