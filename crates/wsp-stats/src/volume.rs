//! Text volume (sum of `content_length`) grouped by sender, month and hour.

use std::collections::BTreeMap;

use chrono::{Datelike, Month, Timelike};
use serde::Serialize;
use wsp_core::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenderVolume {
    pub sender: String,
    pub chars: usize,
    pub messages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthVolume {
    /// 1 = January.
    pub month: u32,
    pub name: &'static str,
    pub chars: usize,
}

/// Per-sender totals, ordered by sender name.
///
/// System notifications count under their notification text, with zero
/// characters.
pub fn volume_by_sender(records: &[Record]) -> Vec<SenderVolume> {
    let mut totals: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for record in records {
        let entry = totals.entry(record.sender.as_str()).or_default();
        entry.0 += record.content_length;
        entry.1 += 1;
    }
    totals
        .into_iter()
        .map(|(sender, (chars, messages))| SenderVolume {
            sender: sender.to_owned(),
            chars,
            messages,
        })
        .collect()
}

/// Totals per calendar month, pooled across years, January first. Months
/// with no records are omitted.
pub fn volume_by_month(records: &[Record]) -> Vec<MonthVolume> {
    let mut totals = [None::<usize>; 12];
    for record in records {
        let slot = &mut totals[record.date.month0() as usize];
        *slot.get_or_insert(0) += record.content_length;
    }
    totals
        .iter()
        .enumerate()
        .filter_map(|(i, total)| {
            let chars = (*total)?;
            let month = i as u32 + 1;
            let name = Month::try_from(month as u8).ok()?.name();
            Some(MonthVolume { month, name, chars })
        })
        .collect()
}

/// Totals for each hour of the day, index 0 = midnight.
pub fn volume_by_hour(records: &[Record]) -> [usize; 24] {
    let mut hours = [0usize; 24];
    for record in records {
        hours[record.date.hour() as usize] += record.content_length;
    }
    hours
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn rec(month: u32, hour: u32, sender: &str, content: &str) -> Record {
        let date = NaiveDate::from_ymd_opt(2023, month, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        Record::new(date, sender, content)
    }

    #[test]
    fn senders_are_sorted_and_summed() {
        let records = [
            rec(1, 9, "Bo", "abc"),
            rec(1, 9, "Ana", "hola"),
            rec(2, 10, "Bo", "de"),
        ];
        assert_eq!(
            volume_by_sender(&records),
            vec![
                SenderVolume { sender: "Ana".into(), chars: 4, messages: 1 },
                SenderVolume { sender: "Bo".into(), chars: 5, messages: 2 },
            ]
        );
    }

    #[test]
    fn months_in_calendar_order() {
        let records = [rec(11, 9, "Ana", "xx"), rec(2, 9, "Ana", "y"), rec(11, 3, "Bo", "z")];
        let months = volume_by_month(&records);
        assert_eq!(
            months,
            vec![
                MonthVolume { month: 2, name: "February", chars: 1 },
                MonthVolume { month: 11, name: "November", chars: 3 },
            ]
        );
    }

    #[test]
    fn month_with_only_system_messages_is_present() {
        let months = volume_by_month(&[rec(5, 9, "Ana joined", "")]);
        assert_eq!(months.len(), 1);
        assert_eq!(months[0].chars, 0);
    }

    #[test]
    fn hours_bucket_by_hour_of_day() {
        let records = [rec(1, 0, "Ana", "a"), rec(1, 23, "Ana", "bcd"), rec(3, 23, "Bo", "e")];
        let hours = volume_by_hour(&records);
        assert_eq!(hours[0], 1);
        assert_eq!(hours[23], 4);
        assert_eq!(hours.iter().sum::<usize>(), 5);
    }
}
