use std::collections::HashMap;
use std::marker::PhantomData;
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;
use crate::core::domain::Record;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Store;
use crate::utils::ddb::{item_to_value, parse_item, parse_number_attribute};

// DDBStore keeps one item per record keyed by numeric `id`. Ids come from an atomic counter
// item (`name` = table name) in the sequence table.
#[derive(Debug)]
pub struct DDBStore<Entity> {
    client: Client,
    table_name: String,
    sequence_table: String,
    _entity: PhantomData<fn() -> Entity>,
}

impl<Entity> DDBStore<Entity> {
    pub(crate) fn new(client: Client, table_name: &str, sequence_table: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            sequence_table: sequence_table.to_string(),
            _entity: PhantomData,
        }
    }

    async fn next_id(&self) -> LibraryResult<i64> {
        let sequence_table: &str = self.sequence_table.as_ref();
        let out = self.client
            .update_item()
            .table_name(sequence_table)
            .key("name", AttributeValue::S(self.table_name.clone()))
            .update_expression("ADD seq :one")
            .expression_attribute_values(":one", AttributeValue::N("1".to_string()))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await?;
        let attrs = out.attributes.unwrap_or_default();
        match parse_number_attribute("seq", &attrs) {
            0 => Err(LibraryError::persistence(
                format!("sequence for {} returned no value", self.table_name).as_str(), None, false)),
            id => Ok(id),
        }
    }
}

fn to_entity<Entity: DeserializeOwned>(map: &HashMap<String, AttributeValue>) -> LibraryResult<Entity> {
    Ok(serde_json::from_value(item_to_value(map))?)
}

fn to_item<Entity: Serialize>(entity: &Entity) -> LibraryResult<HashMap<String, AttributeValue>> {
    let val = serde_json::to_value(entity)?;
    Ok(parse_item(val)?)
}

#[async_trait]
impl<Entity> Store<Entity> for DDBStore<Entity>
    where Entity: Record + Serialize + DeserializeOwned + 'static {
    async fn scan(&self) -> LibraryResult<Vec<Entity>> {
        let table_name: &str = self.table_name.as_ref();
        let mut records = vec![];
        let mut exclusive_start_key = None;
        loop {
            let out = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(true)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await?;
            for item in out.items.as_ref().unwrap_or(&vec![]) {
                records.push(to_entity::<Entity>(item)?);
            }
            exclusive_start_key = out.last_evaluated_key().cloned();
            if exclusive_start_key.is_none() {
                break;
            }
        }
        records.sort_by_key(|e| e.id());
        Ok(records)
    }

    async fn fetch(&self, id: i64) -> LibraryResult<Option<Entity>> {
        let table_name: &str = self.table_name.as_ref();
        let out = self.client
            .get_item()
            .table_name(table_name)
            .key("id", AttributeValue::N(id.to_string()))
            .consistent_read(true)
            .send()
            .await?;
        match out.item {
            Some(ref map) => Ok(Some(to_entity(map)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, entity: &mut Entity) -> LibraryResult<()> {
        let table_name: &str = self.table_name.as_ref();
        entity.set_id(self.next_id().await?);
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(id)")
            .set_item(Some(to_item(entity)?))
            .send()
            .await.map(|_| ()).map_err(LibraryError::from)
    }

    async fn replace(&self, entity: &Entity) -> LibraryResult<()> {
        let table_name: &str = self.table_name.as_ref();
        let res = self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_exists(id)")
            .set_item(Some(to_item(entity)?))
            .send()
            .await;
        match res {
            Ok(_) => Ok(()),
            Err(SdkError::ServiceError(ctx)) if ctx.err().is_conditional_check_failed_exception() => {
                warn!(id = entity.id(), table = table_name, "skipped update of removed record");
                Ok(())
            }
            Err(err) => Err(LibraryError::from(err)),
        }
    }

    async fn remove(&self, id: i64) -> LibraryResult<()> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key("id", AttributeValue::N(id.to_string()))
            .send()
            .await.map(|_| ()).map_err(LibraryError::from)
    }
}
