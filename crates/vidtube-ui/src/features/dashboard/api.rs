//! Dashboard operations.

use crate::core::error::ApiResult;
use crate::core::http::Transport;
use crate::core::ledger::ResourceKey;
use crate::core::runner::{OpSpec, Services, run};
use crate::core::store::StoreAction;
use crate::features::dashboard::state::DashboardOp;
use vidtube_api_models::{ChannelStats, Envelope, Video};

const STATS_PATH: &str = "/dashboard/stats";
const VIDEOS_PATH: &str = "/dashboard/videos";

/// Load the signed-in channel's counters.
///
/// # Errors
/// Transport and server failures.
pub async fn fetch_channel_stats<T: Transport>(
    services: &Services<T>,
) -> ApiResult<Envelope<ChannelStats>> {
    run(
        services,
        OpSpec::fetch("fetch_channel_stats", ResourceKey::path(STATS_PATH)),
        |phase| StoreAction::Dashboard(DashboardOp::FetchStats(phase)),
        services.client.get(STATS_PATH, &[]),
    )
    .await
}

/// Load the signed-in channel's uploads.
///
/// # Errors
/// Transport and server failures.
pub async fn fetch_channel_videos<T: Transport>(
    services: &Services<T>,
) -> ApiResult<Envelope<Vec<Video>>> {
    run(
        services,
        OpSpec::fetch("fetch_channel_videos", ResourceKey::path(VIDEOS_PATH)),
        |phase| StoreAction::Dashboard(DashboardOp::FetchVideos(phase)),
        services.client.get(VIDEOS_PATH, &[]),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::runner::test_support::{stub_services, toast_texts};
    use serde_json::json;

    #[tokio::test]
    async fn stats_and_videos_land_in_slice() -> ApiResult<()> {
        let (services, stub) = stub_services(Some("tok"));
        stub.push_json(
            200,
            &json!({"data": {"totalVideos": 2, "totalViews": 40, "totalSubscribers": 1, "totalLikes": 3}, "success": true}),
        );
        stub.push_json(200, &json!({"data": [{"_id": "v1"}, {"_id": "v2", "isPublished": true}], "success": true}));

        fetch_channel_stats(&services).await?;
        fetch_channel_videos(&services).await?;

        let state = services.state();
        assert_eq!(state.dashboard.stats.map(|s| s.total_views), Some(40));
        assert_eq!(state.dashboard.channel_videos.len(), 2);
        assert!(stub.requests()[1].url.ends_with(VIDEOS_PATH));
        Ok(())
    }

    #[tokio::test]
    async fn unauthorized_stats_toast_and_leave_slice_empty() {
        let (services, stub) = stub_services(None);
        stub.push_json(401, &json!({"error": "Unauthorized request"}));
        assert!(fetch_channel_stats(&services).await.is_err());
        assert!(services.state().dashboard.stats.is_none());
        assert_eq!(toast_texts(&services), vec!["Unauthorized request".to_string()]);
    }
}
