use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    features::custom_fields::models::CustomFields,
    services::collection::{Entity, EntityKind},
};

#[derive(Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Condo,
    #[default]
    Apartment,
    Warehouse,
    Shoplot,
    House,
    Commercial,
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Eq, Default, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub address: Address,
    #[serde(rename = "type", default)]
    pub property_type: PropertyType,
    pub total_units: u32,
    pub occupied_units: u32,
    pub monthly_revenue: BigDecimal,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub custom_fields: CustomFields,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Entity for Property {
    const KIND: EntityKind = EntityKind::Property;

    fn id(&self) -> Uuid {
        self.id
    }
}
