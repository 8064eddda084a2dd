use crate::chart::ChartLayout;
use crate::models::{DashboardStats, DetectionSummary};

pub const NO_RECENT_MESSAGE: &str = "No recent detections";
pub const RECENT_FAILED_MESSAGE: &str = "Failed to load recent detections";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    Loaded(DashboardStats),
    Failed,
}

impl DashboardState {
    /// Total, real and fake counters. Zero until stats arrive.
    pub fn counters(&self) -> (u64, u64, u64) {
        match self {
            DashboardState::Loaded(stats) => (stats.total, stats.real_count, stats.fake_count),
            _ => (0, 0, 0),
        }
    }

    /// Blank while loading; a failed load charts as zero counts.
    pub fn chart(&self) -> ChartLayout {
        match self {
            DashboardState::Loading => ChartLayout::blank(),
            _ => {
                let (_, real, fake) = self.counters();
                ChartLayout::for_counts(real, fake)
            }
        }
    }

    pub fn recent(&self) -> &[DetectionSummary] {
        match self {
            DashboardState::Loaded(stats) => &stats.recent,
            _ => &[],
        }
    }

    /// Message shown in place of the recent list, if any.
    pub fn recent_placeholder(&self) -> Option<&'static str> {
        match self {
            DashboardState::Loading => None,
            DashboardState::Loaded(stats) if stats.recent.is_empty() => Some(NO_RECENT_MESSAGE),
            DashboardState::Loaded(_) => None,
            DashboardState::Failed => Some(RECENT_FAILED_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::NO_DATA_MESSAGE;

    fn summary(result: &str) -> DetectionSummary {
        DetectionSummary {
            image_data: "AAAA".into(),
            result: result.into(),
            confidence: 91.0,
            timestamp: "2024-07-11T12:30:00".into(),
        }
    }

    #[test]
    fn test_loaded_counters_and_chart() {
        let state = DashboardState::Loaded(DashboardStats {
            total: 10,
            real_count: 3,
            fake_count: 7,
            recent: vec![summary("REAL"), summary("FAKE")],
        });
        assert_eq!(state.counters(), (10, 3, 7));
        assert_eq!(state.chart().bars().count(), 2);
        assert_eq!(state.recent().len(), 2);
        assert_eq!(state.recent_placeholder(), None);
    }

    #[test]
    fn test_empty_recent_list() {
        let state = DashboardState::Loaded(DashboardStats::default());
        assert_eq!(state.recent_placeholder(), Some(NO_RECENT_MESSAGE));
        assert_eq!(state.chart().texts().collect::<Vec<_>>(), vec![NO_DATA_MESSAGE]);
    }

    #[test]
    fn test_chart_blank_while_loading() {
        let chart = DashboardState::Loading.chart();
        assert!(chart.ops.is_empty());
        assert_eq!((chart.width, chart.height), (400, 200));
    }

    #[test]
    fn test_failed_load_degrades_to_placeholders() {
        let state = DashboardState::Failed;
        assert_eq!(state.counters(), (0, 0, 0));
        assert_eq!(state.chart().bars().count(), 0);
        assert_eq!(state.chart().texts().collect::<Vec<_>>(), vec![NO_DATA_MESSAGE]);
        assert_eq!(state.recent_placeholder(), Some(RECENT_FAILED_MESSAGE));
    }
}
