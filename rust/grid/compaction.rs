use crate::scheduling::Granularity;

/// Rendering hints for a placement of `span` column units.
///
/// Deterministic in `(granularity, span)`, never pixel measurement. Quarter
/// columns are 7-day buckets, so even a multi-week bar can be too narrow for
/// detail text; at day granularities only a single-day bar compacts, and
/// nothing is ever fully hidden.
pub(crate) fn hints(granularity: Granularity, span: u32) -> (bool, bool) {
    match granularity {
        Granularity::Quarter => (span <= 3, span <= 1),
        Granularity::Week | Granularity::Month => (span == 1, false),
    }
}

// UNIT TESTS

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_thresholds() {
        let options: Vec<(u32, bool, bool)> = vec![
            (1, true, true),
            (2, true, false),
            (3, true, false),
            (4, false, false),
            (13, false, false),
        ];
        for (span, compact, hidden) in options.iter() {
            assert_eq!(hints(Granularity::Quarter, *span), (*compact, *hidden));
        }
    }

    #[test]
    fn test_day_granularity_thresholds() {
        for granularity in [Granularity::Week, Granularity::Month] {
            assert_eq!(hints(granularity, 1), (true, false));
            assert_eq!(hints(granularity, 2), (false, false));
            assert_eq!(hints(granularity, 31), (false, false));
        }
    }
}
