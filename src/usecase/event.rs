use crate::domain::graph::Weight;
use crate::usecase::stats::RunStats;
use serde::Serialize;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphLoaded {
        nodes: usize,
        edges: usize,
        directed: bool,
        weighted: bool,
    },

    SccComputed {
        nodes: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
    },

    WccComputed {
        nodes: usize,
        components: usize,
    },

    PathSearched {
        from: String,
        to: String,
        found: bool,
    },

    ShortestPathComputed {
        from: String,
        to: String,
        total_weight: Option<Weight>,
        hops: usize,
    },

    SpanningTreeComputed {
        algorithm: String,
        edges: usize,
        total_weight: Weight,
    },

    TreeTraversed {
        root: String,
        visited: usize,
    },

    Finished {
        stats: RunStats,
    },
}

pub type EventSink = Option<mpsc::Sender<AppEvent>>;

pub(crate) async fn emit(sink: &EventSink, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
