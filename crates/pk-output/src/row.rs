//! Plain data row types written by the CSV backends.

use pk_sim::TickSummary;

use crate::report::{ActivityRecord, ParkgoerRecord};

/// Queueing and service time of one parkgoer at one activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisitCells {
    pub ticks_waited: u64,
    pub ticks_served: u64,
}

/// One parkgoer flattened into a CSV row.
///
/// `visits` is aligned with the activity column order the row was built
/// against; activities never visited hold zeroes.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkgoerRow {
    pub id:         u32,
    pub people:     u32,
    /// Privilege tags joined with `;`.
    pub privileges: String,
    pub spawned_at: u64,
    pub exited:     bool,
    pub free:       f64,
    pub wait:       f64,
    pub busy:       f64,
    pub visits:     Vec<VisitCells>,
}

impl ParkgoerRow {
    pub fn new<'a>(
        record: &ParkgoerRecord,
        exited: bool,
        columns: impl IntoIterator<Item = &'a ActivityRecord>,
    ) -> Self {
        let visits = columns
            .into_iter()
            .map(|activity| {
                record
                    .visit(activity.id)
                    .map(|v| VisitCells { ticks_waited: v.ticks_waited, ticks_served: v.ticks_served })
                    .unwrap_or_default()
            })
            .collect();
        Self {
            id:         record.id,
            people:     record.people,
            privileges: record.privileges.join(";"),
            spawned_at: record.spawned_at.0,
            exited,
            free:       record.proportions.free,
            wait:       record.proportions.wait,
            busy:       record.proportions.busy,
            visits,
        }
    }

    pub(crate) fn header<'a>(columns: impl IntoIterator<Item = &'a ActivityRecord>) -> Vec<String> {
        let mut header: Vec<String> = ["id", "people", "privileges", "spawned_at", "exited", "free", "wait", "busy"]
            .into_iter()
            .map(str::to_owned)
            .collect();
        for activity in columns {
            header.push(format!("{}_waited", activity.label));
            header.push(format!("{}_served", activity.label));
        }
        header
    }

    pub(crate) fn cells(&self) -> Vec<String> {
        let mut cells = vec![
            self.id.to_string(),
            self.people.to_string(),
            self.privileges.clone(),
            self.spawned_at.to_string(),
            (self.exited as u8).to_string(),
            self.free.to_string(),
            self.wait.to_string(),
            self.busy.to_string(),
        ];
        for visit in &self.visits {
            cells.push(visit.ticks_waited.to_string());
            cells.push(visit.ticks_served.to_string());
        }
        cells
    }
}

/// Population and flow counts for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickSummaryRow {
    pub tick:            u64,
    pub spawned_groups:  u64,
    pub spawned_people:  u64,
    pub exited_people:   u64,
    pub seated_people:   u64,
    pub released_people: u64,
    pub live_people:     u64,
    pub free_people:     u64,
    pub wait_people:     u64,
    pub busy_people:     u64,
}

impl TickSummaryRow {
    pub const HEADER: [&'static str; 10] = [
        "tick",
        "spawned_groups",
        "spawned_people",
        "exited_people",
        "seated_people",
        "released_people",
        "live_people",
        "free_people",
        "wait_people",
        "busy_people",
    ];

    pub(crate) fn cells(&self) -> [String; 10] {
        [
            self.tick.to_string(),
            self.spawned_groups.to_string(),
            self.spawned_people.to_string(),
            self.exited_people.to_string(),
            self.seated_people.to_string(),
            self.released_people.to_string(),
            self.live_people.to_string(),
            self.free_people.to_string(),
            self.wait_people.to_string(),
            self.busy_people.to_string(),
        ]
    }
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:            s.tick.0,
            spawned_groups:  s.spawned_groups,
            spawned_people:  s.spawned_people,
            exited_people:   s.exited_people,
            seated_people:   s.seated_people,
            released_people: s.released_people,
            live_people:     s.live_people,
            free_people:     s.free_people,
            wait_people:     s.wait_people,
            busy_people:     s.busy_people,
        }
    }
}
