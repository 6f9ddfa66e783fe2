//! Pagination over the athlete's activity listing.

use strava_client::{ActivitySummary, StravaClient};

use crate::error::{GearHoursError, GearHoursResult};

pub const DEFAULT_PAGE_SIZE: u32 = 100;
const INITIAL_PAGE: u32 = 1;

/// Retrieve every activity for the authenticated athlete, in API order.
///
/// Pages of `page_size` are requested until one comes back short (possibly
/// empty). The first failing page aborts the listing and nothing accumulated
/// so far is returned.
pub async fn list_all_activities<C>(
    client: &C,
    page_size: u32,
) -> GearHoursResult<Vec<ActivitySummary>>
where
    C: StravaClient + ?Sized,
{
    if page_size == 0 {
        return Err(GearHoursError::InvalidInput(
            "page size must be positive".into(),
        ));
    }

    let mut activities = Vec::new();
    for page in INITIAL_PAGE.. {
        let page_activities = client.list_activities_page(page, page_size).await?;
        let len = page_activities.len();
        tracing::debug!(page, len, "fetched activities page");

        activities.extend(page_activities);
        if len < page_size as usize {
            break;
        }
    }

    tracing::info!(total = activities.len(), "listed activities");
    Ok(activities)
}
