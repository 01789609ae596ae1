//! `Report`: everything recorded during a run, gathered after the fact.
//!
//! ```text
//! Report
//! ├── parkgoers  { exited: [ParkgoerRecord], ongoing: [ParkgoerRecord] }
//! ├── activities { rides: [ActivityRecord], stations: { before, after } }
//! └── privilegeGroups: [PrivilegeGroup]
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use pk_activity::{Activity, ActivityRegistry, CapacityKind, ProcessSample, QueueSample};
use pk_agent::{Parkgoer, ParkgoerState, StateProportions};
use pk_core::{ActivityId, Tick};
use pk_sim::SimulationState;
use serde::Serialize;

use crate::writer::{CsvReportWriter, JsonReportWriter, ReportWriter};
use crate::OutputResult;

// ── Parkgoers ─────────────────────────────────────────────────────────────────

/// One logged tick of a parkgoer, with its target resolved to a label.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParkgoerSample {
    pub time:  Tick,
    pub state: ParkgoerState,
    pub next:  Option<String>,
}

/// Ticks a parkgoer spent queueing for and riding one activity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub activity:     ActivityId,
    pub label:        String,
    pub ticks_waited: u64,
    pub ticks_served: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkgoerRecord {
    pub id:          u32,
    pub people:      u32,
    pub privileges:  Vec<String>,
    pub spawned_at:  Tick,
    pub proportions: StateProportions,
    pub visits:      Vec<Visit>,
    pub record:      Vec<ParkgoerSample>,
}

impl ParkgoerRecord {
    fn build(parkgoer: &Parkgoer, registry: &ActivityRegistry) -> Self {
        let label = |id: ActivityId| registry.label(id).unwrap_or_default().to_owned();

        let mut visits: Vec<Visit> = Vec::new();
        for entry in parkgoer.history() {
            let Some(target) = entry.target else { continue };
            let visit = match visits.iter().position(|v| v.activity == target) {
                Some(i) => &mut visits[i],
                None => {
                    visits.push(Visit {
                        activity:     target,
                        label:        label(target),
                        ticks_waited: 0,
                        ticks_served: 0,
                    });
                    let last = visits.len() - 1;
                    &mut visits[last]
                }
            };
            match entry.state {
                ParkgoerState::Wait => visit.ticks_waited += 1,
                ParkgoerState::Busy => visit.ticks_served += 1,
                ParkgoerState::Free => {}
            }
        }

        Self {
            id:          parkgoer.id().0,
            people:      parkgoer.people(),
            privileges:  parkgoer.privileges().iter().cloned().collect(),
            spawned_at:  parkgoer.spawned_at(),
            proportions: parkgoer.state_proportions(),
            visits,
            record: parkgoer
                .history()
                .iter()
                .map(|h| ParkgoerSample {
                    time:  h.tick,
                    state: h.state,
                    next:  h.target.map(label),
                })
                .collect(),
        }
    }

    /// The visit to `activity`, if the parkgoer ever headed there.
    pub fn visit(&self, activity: ActivityId) -> Option<&Visit> {
        self.visits.iter().find(|v| v.activity == activity)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ParkgoerRecords {
    pub exited:  Vec<ParkgoerRecord>,
    pub ongoing: Vec<ParkgoerRecord>,
}

// ── Activities ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProcessRecord {
    pub capacity: u32,
    pub kind:     CapacityKind,
    pub record:   Vec<ProcessSample>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueRecord {
    pub privileges:    Vec<String>,
    /// Mean wait per person; `None` if nobody left the queue.
    pub mean_wait:     Option<f64>,
    pub served_people: usize,
    pub record:        Vec<QueueSample>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id:             ActivityId,
    pub label:          String,
    pub icon:           String,
    pub total_assigned: u64,
    pub processes:      Vec<ProcessRecord>,
    pub queues:         Vec<QueueRecord>,
}

impl ActivityRecord {
    fn build(id: ActivityId, activity: &Activity) -> Self {
        Self {
            id,
            label:          activity.label().to_owned(),
            icon:           activity.icon().to_owned(),
            total_assigned: activity.stats().total_assigned,
            processes: activity
                .processes()
                .iter()
                .map(|p| ProcessRecord {
                    capacity: p.capacity(),
                    kind:     p.kind(),
                    record:   p.record().to_vec(),
                })
                .collect(),
            queues: activity
                .queues()
                .iter()
                .map(|q| QueueRecord {
                    privileges:    q.privileges().iter().cloned().collect(),
                    mean_wait:     q.mean_wait(),
                    served_people: q.wait_times().len(),
                    record:        q.record().to_vec(),
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StationRecords {
    pub before: Vec<ActivityRecord>,
    pub after:  Vec<ActivityRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ActivityRecords {
    pub rides:    Vec<ActivityRecord>,
    pub stations: StationRecords,
}

impl ActivityRecords {
    /// Every activity in tick order: before-stations, rides, after-stations.
    pub fn iter(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.stations
            .before
            .iter()
            .chain(&self.rides)
            .chain(&self.stations.after)
    }
}

// ── Privilege groups ──────────────────────────────────────────────────────────

/// Parties and people sharing one exact privilege combination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PrivilegeGroup {
    pub privileges: Vec<String>,
    pub groups:     u64,
    pub people:     u64,
}

// ── Report ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub parkgoers:        ParkgoerRecords,
    pub activities:       ActivityRecords,
    pub privilege_groups: Vec<PrivilegeGroup>,
}

impl Report {
    /// Gather the records of `state`.  An unloaded state gives an empty
    /// report.
    pub fn build(state: &SimulationState) -> Self {
        let Some(registry) = state.activities() else {
            return Self::default();
        };
        let store = state.parkgoers();

        let records = |ids: &[ActivityId]| -> Vec<ActivityRecord> {
            ids.iter()
                .filter_map(|&id| registry.get(id).map(|a| ActivityRecord::build(id, a)))
                .collect()
        };

        let mut groups: BTreeMap<Vec<String>, (u64, u64)> = BTreeMap::new();
        for parkgoer in store.all() {
            let key: Vec<String> = parkgoer.privileges().iter().cloned().collect();
            let entry = groups.entry(key).or_default();
            entry.0 += 1;
            entry.1 += u64::from(parkgoer.people());
        }

        Self {
            parkgoers: ParkgoerRecords {
                exited:  store.exited().iter().map(|p| ParkgoerRecord::build(p, registry)).collect(),
                ongoing: store.live().map(|p| ParkgoerRecord::build(p, registry)).collect(),
            },
            activities: ActivityRecords {
                rides:    records(registry.rides()),
                stations: StationRecords {
                    before: records(registry.before_stations()),
                    after:  records(registry.after_stations()),
                },
            },
            privilege_groups: groups
                .into_iter()
                .map(|(privileges, (groups, people))| PrivilegeGroup { privileges, groups, people })
                .collect(),
        }
    }
}

// ── Export ────────────────────────────────────────────────────────────────────

impl Report {
    pub fn to_json_string(&self) -> OutputResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write the report as JSON to `path`, replacing any existing file.
    pub fn export_json(&self, path: &Path) -> OutputResult<()> {
        let mut writer = JsonReportWriter::new(BufWriter::new(File::create(path)?)).pretty();
        writer.write_report(self)?;
        writer.finish()
    }

    /// Write the per-parkgoer CSV projection to `path`.
    pub fn export_csv(&self, path: &Path) -> OutputResult<()> {
        let mut writer = CsvReportWriter::new(File::create(path)?);
        writer.write_report(self)?;
        writer.finish()
    }
}
