//! Cloud Resources - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::domain::a002_cloud_resource::ResourceMap;
use contracts::shared::error::ApiError;
use gloo_net::http::Request;
use serde::Serialize;

/// Query of `GET /cloud-resources`
#[derive(Debug, Serialize)]
struct CloudResourcesQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    providers: Option<&'a str>,
}

fn cloud_resources_path(providers: Option<&str>) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(&CloudResourcesQuery { providers }).map_err(ApiError::request)?;
    if qs.is_empty() {
        Ok("/cloud-resources".to_string())
    } else {
        Ok(format!("/cloud-resources?{}", qs))
    }
}

/// Получить инвентарь облачных ресурсов
pub async fn fetch_cloud_resources(providers: Option<&str>) -> Result<ResourceMap, ApiError> {
    let url = api_url(&cloud_resources_path(providers)?);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    let text = response.text().await.map_err(ApiError::network)?;
    serde_json::from_str::<ResourceMap>(&text).map_err(ApiError::decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_without_filter() {
        assert_eq!(cloud_resources_path(None).unwrap(), "/cloud-resources");
    }

    #[test]
    fn test_path_with_filter() {
        assert_eq!(
            cloud_resources_path(Some("aws")).unwrap(),
            "/cloud-resources?providers=aws"
        );
    }
}
