//! Trace model: the ordered, replayable record of one engine run.
//!
//! Each `Step` is a frozen fact about the algorithm's state at one instant.
//! Snapshots are deep copies taken at emission time; later mutation of the
//! live arrays never changes an already-emitted step. Consumers replay the
//! sequence at their own pace (table rendering, animation, log export).

use std::fmt;

use serde::{Serialize, Serializer};

/// Discriminant for a trace step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// State initialized, source seeded into the queue
    Init,
    /// Minimum (dist, node) entry popped from the queue
    Pop,
    /// Popped entry was stale (node already finalized)
    Skip,
    /// Node marked finalized
    Visit,
    /// Edge relaxation improved a tentative distance
    Relax,
    /// Edge relaxation offered no improvement
    NoRelax,
    /// Edge skipped because its target is already finalized
    RelaxSkip,
    /// Queue empty, run finished
    Done,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Init => "init",
            Action::Pop => "pop",
            Action::Skip => "skip",
            Action::Visit => "visit",
            Action::Relax => "relax",
            Action::NoRelax => "no_relax",
            Action::RelaxSkip => "relax_skip",
            Action::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// One recorded engine decision plus a snapshot of the state it was made in
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    /// 1-based, strictly increasing sequence number
    pub seq: usize,
    pub action: Action,
    /// Finished human-readable description of this action instance
    pub detail: String,
    /// Visited flags at the moment of this step
    pub visited: Vec<bool>,
    /// Tentative distances at the moment of this step (unreached = +inf,
    /// serialized to JSON as null)
    #[serde(serialize_with = "serialize_distances")]
    pub dist: Vec<f64>,
    /// Predecessor pointers at the moment of this step
    pub parent: Vec<Option<usize>>,
    /// Node this step concerns, `None` for `done`
    pub current: Option<usize>,
}

/// JSON has no infinity literal; unreached distances serialize as null.
pub fn serialize_distances<S>(dist: &[f64], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(dist.iter().map(|d| d.is_finite().then_some(*d)))
}

/// Render a distance for human output: "inf" for unreached nodes.
pub fn display_distance(d: f64) -> String {
    if d.is_finite() {
        format!("{}", d)
    } else {
        "inf".to_string()
    }
}
