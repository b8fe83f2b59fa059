use crate::expiry::record::MemberExpiryRecord;
use chrono::NaiveDate;
use dto::member_expiry_data::MemberExpiryData;
use log::{debug, error};

const DAYS_BEFORE_EXPIRY_NOTICE: i64 = 7;
const DAYS_AFTER_EXPIRY_NOTICE: i64 = 7;

/// What a member should be told about its membership expiry.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NotificationBucket {
    ExpiringIn7Days,
    ExpiresToday,
    ExpiredRecently { days_past: u32 },
    None,
}

impl NotificationBucket {
    pub fn is_notifiable(&self) -> bool {
        !matches!(self, NotificationBucket::None)
    }
}

/// Classify a membership from the number of whole days between `today` and its expiry.
/// Only the exact milestones (7 days before, expiry day) are notified ahead of the expiry,
/// while each of the 7 days following the expiry is.
pub fn classify(today: NaiveDate, expiry: NaiveDate) -> NotificationBucket {
    let diff_days = (expiry - today).num_days();
    match diff_days {
        DAYS_BEFORE_EXPIRY_NOTICE => NotificationBucket::ExpiringIn7Days,
        0 => NotificationBucket::ExpiresToday,
        diff_days if (-DAYS_AFTER_EXPIRY_NOTICE..=-1).contains(&diff_days) => {
            NotificationBucket::ExpiredRecently {
                days_past: diff_days.unsigned_abs() as u32,
            }
        }
        _ => NotificationBucket::None,
    }
}

/// Evaluate every member fetched from the club service.
/// Members that can't be evaluated are logged and skipped: they never prevent the others
/// from being evaluated. Only members to notify are returned, along with the number of skipped ones.
pub fn evaluate(
    today: NaiveDate,
    members: &[MemberExpiryData],
) -> (Vec<(MemberExpiryRecord, NotificationBucket)>, usize) {
    let mut skipped = 0;
    let classified = members
        .iter()
        .filter_map(|member| match MemberExpiryRecord::try_from(member) {
            Ok(record) => Some(record),
            Err(error) => {
                error!(
                    "Can't evaluate member, skipping [name: {:?}, expiry date: {:?}, error: {error}]",
                    member.name(),
                    member.expiry_date()
                );
                skipped += 1;
                None
            }
        })
        .map(|record| {
            let bucket = classify(today, *record.expiry_date());
            debug!(
                "Member evaluated [name: {}, expiry: {}, bucket: {bucket:?}]",
                record.name(),
                record.expiry_date_text()
            );
            (record, bucket)
        })
        .filter(|(_, bucket)| bucket.is_notifiable())
        .collect();

    (classified, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use parameterized::{ide, parameterized};

    ide!();

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    mod classify {
        use super::*;

        #[parameterized(
            expiry = {
                date(17, 6, 2024),
                date(10, 6, 2024),
                date(9, 6, 2024),
                date(5, 6, 2024),
                date(3, 6, 2024),
                date(2, 6, 2024),
                date(1, 6, 2024),
                date(16, 6, 2024),
                date(11, 6, 2024),
                date(18, 6, 2024),
            },
            expected_bucket = {
                NotificationBucket::ExpiringIn7Days,
                NotificationBucket::ExpiresToday,
                NotificationBucket::ExpiredRecently { days_past: 1 },
                NotificationBucket::ExpiredRecently { days_past: 5 },
                NotificationBucket::ExpiredRecently { days_past: 7 },
                NotificationBucket::None,
                NotificationBucket::None,
                NotificationBucket::None,
                NotificationBucket::None,
                NotificationBucket::None,
            }
        )]
        fn should_classify(expiry: NaiveDate, expected_bucket: NotificationBucket) {
            assert_eq!(expected_bucket, classify(today(), expiry));
        }

        #[test]
        fn should_classify_across_month_and_year_boundaries() {
            assert_eq!(
                NotificationBucket::ExpiringIn7Days,
                classify(date(28, 12, 2024), date(4, 1, 2025))
            );
            assert_eq!(
                NotificationBucket::ExpiredRecently { days_past: 2 },
                classify(date(1, 3, 2024), date(28, 2, 2024))
            );
        }

        #[test]
        fn should_classify_every_day_around_today() {
            for offset in 1..=7 {
                let expiry = today().checked_sub_days(Days::new(offset)).unwrap();
                assert_eq!(
                    NotificationBucket::ExpiredRecently {
                        days_past: offset as u32
                    },
                    classify(today(), expiry)
                );
            }
            for offset in 8..=400 {
                let before = today().checked_sub_days(Days::new(offset)).unwrap();
                let after = today().checked_add_days(Days::new(offset)).unwrap();
                assert_eq!(NotificationBucket::None, classify(today(), before));
                assert_eq!(NotificationBucket::None, classify(today(), after));
            }
        }

        #[test]
        fn should_be_idempotent() {
            let expiry = date(5, 6, 2024);
            assert_eq!(classify(today(), expiry), classify(today(), expiry));
        }
    }

    mod evaluate {
        use super::*;

        #[test]
        fn should_keep_only_members_to_notify() {
            let members = vec![
                MemberExpiryData::new_test(1, "17-06-2024"),
                MemberExpiryData::new_test(2, "10-06-2024"),
                MemberExpiryData::new_test(3, "05-06-2024"),
                MemberExpiryData::new_test(4, "01-06-2024"),
            ];

            let (classified, skipped) = evaluate(today(), &members);

            let buckets = classified
                .iter()
                .map(|(record, bucket)| (*record.id(), *bucket))
                .collect::<Vec<_>>();
            assert_eq!(
                vec![
                    (1, NotificationBucket::ExpiringIn7Days),
                    (2, NotificationBucket::ExpiresToday),
                    (3, NotificationBucket::ExpiredRecently { days_past: 5 }),
                ],
                buckets
            );
            assert_eq!(0, skipped);
        }

        #[test]
        fn should_skip_malformed_members_without_blocking_others() {
            let members = vec![
                MemberExpiryData::new_test(1, "not-a-date"),
                MemberExpiryData::new(None, None, Some("10-06-2024".to_owned())),
                MemberExpiryData::new(Some(3), None, None),
                MemberExpiryData::new_test(4, "10-06-2024"),
            ];

            let (classified, skipped) = evaluate(today(), &members);

            assert_eq!(1, classified.len());
            assert_eq!(4, *classified[0].0.id());
            assert_eq!(3, skipped);
        }
    }
}
