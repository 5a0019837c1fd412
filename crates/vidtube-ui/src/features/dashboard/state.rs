//! Channel owner dashboard.

use crate::core::store::Phase;
use vidtube_api_models::{ChannelStats, Video};

/// Dashboard slice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSlice {
    /// A fetch is in flight.
    pub loading: bool,
    /// Aggregate counters; `None` until loaded.
    pub stats: Option<ChannelStats>,
    /// Every upload of the signed-in channel, published or not.
    pub channel_videos: Vec<Video>,
}

/// Dashboard reducer inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardOp {
    /// Counter fetch.
    FetchStats(Phase<ChannelStats>),
    /// Upload listing.
    FetchVideos(Phase<Vec<Video>>),
}

/// Apply a dashboard op.
pub fn reduce(slice: &mut DashboardSlice, op: DashboardOp) {
    match op {
        DashboardOp::FetchStats(phase) => {
            slice.loading = !phase.is_settled();
            if let Phase::Fulfilled(stats) = phase {
                slice.stats = Some(stats);
            }
        }
        DashboardOp::FetchVideos(phase) => {
            slice.loading = !phase.is_settled();
            if let Phase::Fulfilled(videos) = phase {
                slice.channel_videos = videos;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::Failure;

    #[test]
    fn stats_replace_and_rejection_keeps_them() {
        let mut slice = DashboardSlice::default();
        let stats = ChannelStats {
            total_videos: 3,
            total_views: 90,
            total_subscribers: 4,
            total_likes: 7,
        };
        reduce(&mut slice, DashboardOp::FetchStats(Phase::Fulfilled(stats)));
        reduce(&mut slice, DashboardOp::FetchStats(Phase::Pending));
        assert!(slice.loading);
        reduce(&mut slice, DashboardOp::FetchStats(Phase::Rejected(Failure::default())));
        assert_eq!(slice.stats, Some(stats));
        assert!(!slice.loading);
    }
}
