use strava_client::{GearSummary, StravaClient};

use crate::error::{GearHoursError, GearHoursResult};

/// Look up the authenticated athlete's gear by its exact display name.
///
/// Only the athlete's bikes are searched; the first match in listed order
/// wins. Profile fetch errors are returned as-is; only a missing name becomes
/// [`GearHoursError::GearNotFound`].
pub async fn resolve_gear_by_name<C>(client: &C, name: &str) -> GearHoursResult<GearSummary>
where
    C: StravaClient + ?Sized,
{
    let profile = client.get_athlete_profile().await?;
    let gear = profile
        .bikes
        .into_iter()
        .find(|g| g.name == name)
        .ok_or_else(|| GearHoursError::GearNotFound(name.to_string()))?;

    tracing::info!(gear_id = %gear.id, name, "resolved gear");
    Ok(gear)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockClient, gear};

    #[tokio::test]
    async fn returns_matching_bike() {
        let client = MockClient::new(vec![]);
        let out = resolve_gear_by_name(&client, "my best bike")
            .await
            .expect("gear");
        assert_eq!(out, client.profile.bikes[1]);
    }

    #[tokio::test]
    async fn unknown_name_is_not_found() {
        let client = MockClient::new(vec![]);
        let err = resolve_gear_by_name(&client, "garbage").await.unwrap_err();
        assert!(matches!(err, GearHoursError::GearNotFound(ref n) if n == "garbage"));
        assert_eq!(err.to_string(), "gear not found: garbage");
    }

    #[tokio::test]
    async fn match_is_case_sensitive() {
        let client = MockClient::new(vec![]);
        let res = resolve_gear_by_name(&client, "Road Bike").await;
        assert!(matches!(res, Err(GearHoursError::GearNotFound(_))));
    }

    #[tokio::test]
    async fn duplicate_names_return_first_listed() {
        let mut client = MockClient::new(vec![]);
        client.profile.bikes.push(gear("4", "road bike"));
        let out = resolve_gear_by_name(&client, "road bike").await.expect("gear");
        assert_eq!(out.id, "1");
    }

    #[tokio::test]
    async fn empty_bike_list_is_not_found() {
        let mut client = MockClient::new(vec![]);
        client.profile.bikes.clear();
        let err = resolve_gear_by_name(&client, "road bike").await.unwrap_err();
        assert_eq!(err.to_string(), "gear not found: road bike");
    }

    #[tokio::test]
    async fn profile_error_is_not_wrapped() {
        let mut client = MockClient::new(vec![]);
        client.fail_profile = true;
        let err = resolve_gear_by_name(&client, "road bike").await.unwrap_err();
        assert!(matches!(err, GearHoursError::Api(_)));
        assert_eq!(err.to_string(), "server error");
    }
}
