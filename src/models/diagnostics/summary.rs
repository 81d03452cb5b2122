use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use uom::si::power::watt;

use crate::{
    models::thermal::collector::SimulationResult,
    support::{diagnosis::FaultLabel, units::round_to},
};

const HISTORY_LEN: usize = 20;
const RECENT_FAULTS_LEN: usize = 5;
const HEALTH_PENALTY_PER_FAULT: f64 = 5.0;

/// One simulation as plotted on the dashboard, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Percent.
    pub efficiency: f64,
    /// Watts.
    pub heat_gain: f64,
}

/// Running statistics over simulations and diagnoses.
///
/// Kept in memory only. The type is serializable so callers can persist it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationsSummary {
    total_simulations: u64,
    efficiency_sum: f64,
    recent_faults: VecDeque<FaultLabel>,
    history: VecDeque<HistoryPoint>,
}

impl OperationsSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a simulation and appends it to the history.
    pub fn record_simulation(&mut self, result: &SimulationResult) {
        let metrics = result.metrics();
        let efficiency = metrics.efficiency().percent();

        self.total_simulations += 1;
        self.efficiency_sum += efficiency;

        self.history.push_back(HistoryPoint {
            efficiency: round_to(efficiency, 2),
            heat_gain: round_to(metrics.heat_gain().get::<watt>(), 2),
        });
        if self.history.len() > HISTORY_LEN {
            self.history.pop_front();
        }
    }

    /// Remembers a diagnosed fault, most recent first.
    ///
    /// Normal operation is not recorded.
    pub fn record_diagnosis(&mut self, label: FaultLabel) {
        if label.is_normal() {
            return;
        }
        self.recent_faults.push_front(label);
        self.recent_faults.truncate(RECENT_FAULTS_LEN);
    }

    #[must_use]
    pub fn total_simulations(&self) -> u64 {
        self.total_simulations
    }

    /// Mean simulated efficiency in percent, or zero before any simulation.
    #[must_use]
    pub fn average_efficiency(&self) -> f64 {
        if self.total_simulations == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let count = self.total_simulations as f64;
            self.efficiency_sum / count
        }
    }

    /// 100 minus five points per recent fault, floored at zero.
    #[must_use]
    pub fn health_index(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let faults = self.recent_faults.len() as f64;
        (100.0 - HEALTH_PENALTY_PER_FAULT * faults).max(0.0)
    }

    /// Recent faults, most recent first.
    pub fn recent_faults(&self) -> impl Iterator<Item = FaultLabel> {
        self.recent_faults.iter().copied()
    }

    /// Recent simulations, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryPoint> {
        self.history.iter()
    }

    /// Clears counters and recent faults.
    ///
    /// The history is kept so trends remain visible across resets.
    pub fn reset(&mut self) {
        self.total_simulations = 0;
        self.efficiency_sum = 0.0;
        self.recent_faults.clear();
    }

    #[must_use]
    pub fn report(&self) -> SummaryReport {
        SummaryReport {
            total_simulations: self.total_simulations,
            system_health_index: round_to(self.health_index(), 1),
            average_efficiency: round_to(self.average_efficiency(), 1),
            recent_faults: self.recent_faults.iter().copied().collect(),
            history: self.history.iter().copied().collect(),
        }
    }
}

/// Dashboard view of an [`OperationsSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub total_simulations: u64,
    pub system_health_index: f64,
    pub average_efficiency: f64,
    pub recent_faults: Vec<FaultLabel>,
    pub history: Vec<HistoryPoint>,
}
