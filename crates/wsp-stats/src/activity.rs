//! Sender × hour-of-day message counts, the data behind the activity heatmap.

use std::collections::BTreeMap;

use chrono::Timelike;
use serde::Serialize;
use wsp_core::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityMatrix {
    /// Row labels, sorted.
    pub senders: Vec<String>,
    /// `counts[row][hour]` = messages sent by `senders[row]` during `hour`.
    pub counts: Vec<[u32; 24]>,
}

impl ActivityMatrix {
    pub fn row(&self, sender: &str) -> Option<&[u32; 24]> {
        let idx = self.senders.iter().position(|s| s == sender)?;
        self.counts.get(idx)
    }

    /// Busiest (sender, hour) cell; ties go to the earliest row and hour.
    pub fn peak(&self) -> Option<(&str, u32, u32)> {
        let mut best: Option<(&str, u32, u32)> = None;
        for (sender, row) in self.senders.iter().zip(&self.counts) {
            for (hour, &count) in row.iter().enumerate() {
                if count > best.map_or(0, |(_, _, c)| c) {
                    best = Some((sender.as_str(), hour as u32, count));
                }
            }
        }
        best
    }
}

pub fn activity_matrix(records: &[Record]) -> ActivityMatrix {
    let mut rows: BTreeMap<&str, [u32; 24]> = BTreeMap::new();
    for record in records {
        rows.entry(record.sender.as_str()).or_insert([0; 24])[record.date.hour() as usize] += 1;
    }
    let (senders, counts): (Vec<String>, Vec<[u32; 24]>) = rows
        .into_iter()
        .map(|(sender, row)| (sender.to_owned(), row))
        .unzip();
    ActivityMatrix { senders, counts }
}
