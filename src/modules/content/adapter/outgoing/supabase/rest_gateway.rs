//! PostgREST adapter for the entity gateway port.
//!
//! One client serves every entity type: the table name and sort column come
//! from the `EntityRecord` impl, so a single generic `EntityGateway<T>`
//! implementation covers the whole content schema.

use async_trait::async_trait;
use reqwest::RequestBuilder;
use uuid::Uuid;

use crate::content::adapter::outgoing::supabase::config::SupabaseConfig;
use crate::content::application::ports::outgoing::entity_gateway::{
    EntityGateway, EntityRecord, GatewayError, ListOrder,
};

fn order_query(order: ListOrder) -> String {
    let direction = if order.ascending { "asc" } else { "desc" };
    format!("{}.{}", order.column, direction)
}

#[derive(Clone)]
pub struct SupabaseGateway {
    http: reqwest::Client,
    base: String,
    api_key: String,
}

impl SupabaseGateway {
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base, table)
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn accept(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(GatewayError::Store(format!("{status}: {body}")))
    }
}

#[async_trait]
impl<T: EntityRecord> EntityGateway<T> for SupabaseGateway {
    async fn list(&self, order: ListOrder) -> Result<Vec<T>, GatewayError> {
        let order = order_query(order);
        let response = self
            .authed(self.http.get(self.table_url(T::TABLE)))
            .query(&[("select", "*"), ("order", order.as_str())])
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Self::accept(response)
            .await?
            .json::<Vec<T>>()
            .await
            .map_err(|e| GatewayError::Store(e.to_string()))
    }

    async fn upsert(&self, record: &T) -> Result<(), GatewayError> {
        let response = self
            .authed(self.http.post(self.table_url(T::TABLE)))
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(record)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Self::accept(response).await.map(|_| ())
    }

    async fn delete(&self, id: Uuid) -> Result<(), GatewayError> {
        let filter = format!("eq.{id}");
        let response = self
            .authed(self.http.delete(self.table_url(T::TABLE)))
            .query(&[("id", filter.as_str())])
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Self::accept(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::domain::entities::{TechStackItem, WorkExperience};

    #[test]
    fn test_order_query_directions() {
        assert_eq!(
            order_query(ListOrder::descending("order_index")),
            "order_index.desc"
        );
        assert_eq!(order_query(ListOrder::ascending("start_date")), "start_date.asc");
    }

    #[test]
    fn test_admin_order_policy_per_entity() {
        // Tech stack is the one entity listed lowest-first.
        assert!(TechStackItem::ADMIN_ORDER.ascending);
        assert!(!WorkExperience::ADMIN_ORDER.ascending);
    }

    #[test]
    fn test_table_url_shape() {
        let gateway = SupabaseGateway {
            http: reqwest::Client::new(),
            base: "https://proj.supabase.co".to_string(),
            api_key: "key".to_string(),
        };

        assert_eq!(
            gateway.table_url("work_experiences"),
            "https://proj.supabase.co/rest/v1/work_experiences"
        );
    }
}
