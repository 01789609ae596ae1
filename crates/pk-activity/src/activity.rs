//! `Activity`: one attraction or station: its queues, its processes, and
//! the two policies that connect them.
//!
//! # Per-tick sequence
//!
//! ```text
//! ① every Process ticks (finished cycles release their occupants)
//! ② choose idle processes to fill: all of them, or a rotating window
//! ③ for each chosen process: ask the consumer for queues until the process
//!    is full or nothing fits; start it if anyone was seated
//! ```
//!
//! Seat and release events are returned in a [`TickOutcome`] so the caller
//! can update the parkgoers they refer to.

use tracing::debug;

use pk_core::{Group, ParkgoerId, Point, Privileges, SimRng, Tick};

use crate::consume::{ConsumePolicy, Consumer, ConsumerKind};
use crate::{ActivityError, ActivityResult, AssignPolicy, BuildError, BuildResult, Process, Queue};

// ── Supporting types ──────────────────────────────────────────────────────────

/// Rotating subset of processes considered for filling each tick.
///
/// Bounds per-tick work for activities with many fast, small processes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RelativeWindow {
    pub size:   usize,
    pub cursor: usize,
}

impl RelativeWindow {
    /// `ceil(process_count² / total_duration)`.
    pub fn for_processes(process_count: usize, total_duration: f64) -> Self {
        let size = ((process_count * process_count) as f64 / total_duration).ceil() as usize;
        Self { size, cursor: 0 }
    }
}

/// Running counters kept for reports.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityStats {
    /// People (not parties) ever assigned to one of this activity's queues.
    pub total_assigned: u64,
}

/// Parties seated and released during one [`Activity::tick`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub seated:   Vec<Group>,
    pub released: Vec<Group>,
}

// ── Activity ──────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Activity {
    label:      String,
    icon:       String,
    position:   Point,
    popularity: f64,
    queues:     Vec<Queue>,
    processes:  Vec<Process>,
    assigner:   AssignPolicy,
    consumer:   Consumer,
    window:     Option<RelativeWindow>,
    stats:      ActivityStats,
}

impl Activity {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Probability in `(0, 1]` that a new parkgoer wants to visit.
    pub fn popularity(&self) -> f64 {
        self.popularity
    }

    pub fn queues(&self) -> &[Queue] {
        &self.queues
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn assigner(&self) -> AssignPolicy {
        self.assigner
    }

    pub fn consumer(&self) -> &Consumer {
        &self.consumer
    }

    pub fn window(&self) -> Option<RelativeWindow> {
        self.window
    }

    pub fn stats(&self) -> ActivityStats {
        self.stats
    }

    /// People currently waiting across all queues.
    pub fn queued_people(&self) -> u32 {
        self.queues.iter().map(Queue::len).sum()
    }

    /// People currently seated across all processes.
    pub fn processing_people(&self) -> u32 {
        self.processes.iter().map(Process::people).sum()
    }

    fn select_queue(&self, privileges: &Privileges) -> ActivityResult<usize> {
        self.assigner
            .select(&self.queues, privileges)
            .ok_or_else(|| ActivityError::NoAssignableQueue {
                activity:   self.label.clone(),
                privileges: privileges.iter().cloned().collect(),
            })
    }

    /// Enqueue an arriving party.  Returns the chosen queue index.
    pub fn assign(&mut self, group: Group, privileges: &Privileges, now: Tick) -> ActivityResult<usize> {
        let q = self.select_queue(privileges)?;
        self.queues[q].push(group, now);
        self.stats.total_assigned += u64::from(group.people);
        Ok(q)
    }

    /// Length of the queue `assign` would currently pick, without enqueuing.
    pub fn prospective_length(&self, privileges: &Privileges) -> ActivityResult<u32> {
        let q = self.select_queue(privileges)?;
        Ok(self.queues[q].len())
    }

    /// Where a waiting party should be drawn, if its queue has display
    /// geometry.
    pub fn waiting_position(&self, id: ParkgoerId) -> Option<Point> {
        self.queues.iter().find_map(|q| {
            let index = q.position_of(id)?;
            q.display().map(|d| d.slot_position(self.position, index + 1))
        })
    }

    /// Advance every process, then refill idle ones from the queues.
    pub fn tick(&mut self, now: Tick, rng: &mut SimRng) -> ActivityResult<TickOutcome> {
        let mut outcome = TickOutcome::default();

        for (i, process) in self.processes.iter_mut().enumerate() {
            let released = process.tick();
            if !released.is_empty() {
                debug!(activity = %self.label, process = i, parties = released.len(), "process_released");
                outcome.released.extend(released);
            }
        }

        for i in self.idle_candidates() {
            self.fill_process(i, now, rng, &mut outcome.seated)?;
        }

        Ok(outcome)
    }

    /// Indices of idle processes to try filling this tick.
    fn idle_candidates(&mut self) -> Vec<usize> {
        let n = self.processes.len();
        let processes = &self.processes;
        let range = match self.window.as_mut() {
            Some(w) => {
                let range = w.cursor..(w.cursor + w.size).min(n);
                w.cursor = (w.cursor + w.size) % n;
                range
            }
            None => 0..n,
        };
        range.filter(|&i| !processes[i].is_active()).collect()
    }

    fn fill_process(
        &mut self,
        index:  usize,
        now:    Tick,
        rng:    &mut SimRng,
        seated: &mut Vec<Group>,
    ) -> ActivityResult<()> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let process  = &mut self.processes[index];
        let queues   = &mut self.queues;
        let consumer = &mut self.consumer;

        consumer.begin_fill();
        while !process.is_full(None) {
            let Some(q) = consumer.select(process, queues) else {
                break;
            };
            let Some(group) = queues[q].pop(now) else {
                break;
            };
            process.seat(group)?;
            seated.push(group);
        }

        if !process.is_empty() {
            process.start(rng)?;
            debug!(
                activity = %self.label,
                process = index,
                people = process.people(),
                duration = process.target_duration(),
                "process_started"
            );
        }
        Ok(())
    }

    /// Append one snapshot per process and per queue.
    pub fn log(&mut self, now: Tick) {
        for process in &mut self.processes {
            process.log(now);
        }
        for queue in &mut self.queues {
            queue.log(now);
        }
    }
}

// ── ActivityBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Activity`].
///
/// # Defaults
///
/// | Method                   | Default          |
/// |--------------------------|------------------|
/// | `.icon(s)`               | `""`             |
/// | `.popularity(p)`         | `1.0`            |
/// | `.assigner(a)`           | `Privileged`     |
/// | `.consumer(c)`           | `Tiered`         |
/// | `.relative_processes(b)` | `false`          |
///
/// `build` fails unless at least one process and one queue were added.
pub struct ActivityBuilder {
    label:      String,
    icon:       String,
    position:   Point,
    popularity: f64,
    queues:     Vec<Queue>,
    processes:  Vec<Process>,
    assigner:   AssignPolicy,
    consumer:   ConsumerKind,
    relative:   bool,
}

impl ActivityBuilder {
    pub fn new(label: impl Into<String>, position: Point) -> Self {
        Self {
            label:      label.into(),
            icon:       String::new(),
            position,
            popularity: 1.0,
            queues:     Vec::new(),
            processes:  Vec::new(),
            assigner:   AssignPolicy::default(),
            consumer:   ConsumerKind::default(),
            relative:   false,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn popularity(mut self, popularity: f64) -> Self {
        self.popularity = popularity;
        self
    }

    pub fn process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    pub fn queue(mut self, queue: Queue) -> Self {
        self.queues.push(queue);
        self
    }

    pub fn assigner(mut self, assigner: AssignPolicy) -> Self {
        self.assigner = assigner;
        self
    }

    pub fn consumer(mut self, consumer: ConsumerKind) -> Self {
        self.consumer = consumer;
        self
    }

    /// Only consider a rotating window of processes each tick.
    pub fn relative_processes(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }

    pub fn build(self) -> BuildResult<Activity> {
        if self.processes.is_empty() {
            return Err(BuildError::NoProcesses(self.label));
        }
        if self.queues.is_empty() {
            return Err(BuildError::NoQueues(self.label));
        }

        let window = if self.relative {
            let total: f64 = self.processes.iter().map(|p| p.duration().base()).sum();
            if !(total.is_finite() && total > 0.0) {
                return Err(BuildError::RelativeWindow(self.label));
            }
            Some(RelativeWindow::for_processes(self.processes.len(), total))
        } else {
            None
        };

        let consumer = Consumer::new(self.consumer, self.queues.len());

        Ok(Activity {
            label:      self.label,
            icon:       self.icon,
            position:   self.position,
            popularity: self.popularity,
            queues:     self.queues,
            processes:  self.processes,
            assigner:   self.assigner,
            consumer,
            window,
            stats:      ActivityStats::default(),
        })
    }
}
