use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Number of consecutive study days ending today or yesterday.
///
/// Returns 0 when there is no activity or the most recent activity is more
/// than one day before `today`.
pub fn streak_days<I>(activity_dates: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let dates: BTreeSet<NaiveDate> = activity_dates.into_iter().collect();

    let Some(&latest) = dates.iter().next_back() else {
        return 0;
    };

    let yesterday = today.pred_opt();
    let mut expected = if latest == today || Some(latest) == yesterday {
        latest
    } else {
        // Last activity is older than yesterday: streak is broken
        return 0;
    };

    let mut streak = 0;
    for date in dates.iter().rev() {
        if *date != expected {
            break;
        }
        streak += 1;
        match expected.pred_opt() {
            Some(prev) => expected = prev,
            None => break,
        }
    }

    streak
}
