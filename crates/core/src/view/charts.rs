use std::collections::HashMap;

use crate::models::chart::{ChartAnchor, ChartData};

/// Drawing backend for charts.
///
/// The adapter owns its chart instances; `ChartRegistry` makes sure an
/// anchor's previous instance is destroyed before a new one is created.
pub trait ChartAdapter {
    type Handle;

    fn create(&mut self, anchor: ChartAnchor, data: &ChartData) -> Self::Handle;

    fn destroy(&mut self, handle: Self::Handle);
}

/// Adapter for front ends without charts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopChartAdapter;

impl ChartAdapter for NoopChartAdapter {
    type Handle = ();

    fn create(&mut self, _anchor: ChartAnchor, _data: &ChartData) {}

    fn destroy(&mut self, _handle: ()) {}
}

/// At most one live chart per anchor.
pub struct ChartRegistry<C: ChartAdapter> {
    adapter: C,
    live: HashMap<ChartAnchor, C::Handle>,
}

impl<C: ChartAdapter> ChartRegistry<C> {
    pub fn new(adapter: C) -> Self {
        Self {
            adapter,
            live: HashMap::new(),
        }
    }

    /// Destroy whatever is bound to `anchor`, then draw `data` there.
    pub fn redraw(&mut self, anchor: ChartAnchor, data: &ChartData) {
        self.clear(anchor);
        let handle = self.adapter.create(anchor, data);
        self.live.insert(anchor, handle);
        tracing::debug!(?anchor, points = data.labels.len(), "Chart redrawn");
    }

    /// Destroy the chart bound to `anchor`, if any.
    pub fn clear(&mut self, anchor: ChartAnchor) -> bool {
        match self.live.remove(&anchor) {
            Some(handle) => {
                self.adapter.destroy(handle);
                true
            }
            None => false,
        }
    }

    pub fn is_live(&self, anchor: ChartAnchor) -> bool {
        self.live.contains_key(&anchor)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn adapter(&self) -> &C {
        &self.adapter
    }
}

impl<C: ChartAdapter> Drop for ChartRegistry<C> {
    fn drop(&mut self) {
        for (_, handle) in self.live.drain() {
            self.adapter.destroy(handle);
        }
    }
}
