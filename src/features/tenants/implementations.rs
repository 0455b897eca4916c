use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use shared::utilities::errors::AppError;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::features::tenants::{
    models::Tenant,
    schemas::{TenantIn, TenantPatch},
};

impl TenantIn {
    pub fn into_tenant(self, id: Uuid, now: DateTime<Utc>) -> Tenant {
        Tenant {
            id,
            property_id: self.property_id,
            unit_id: self.unit_id,
            name: self.name.trim().to_string(),
            email: non_blank(self.email),
            phone: non_blank(self.phone),
            monthly_rent: self.monthly_rent,
            balance: self.balance,
            status: self.status,
            lease_start: self.lease_start,
            lease_end: self.lease_end,
            custom_fields: self.custom_fields,
            created_at: now,
            updated_at: now,
        }
    }
}

impl TenantPatch {
    pub fn apply_to(self, tenant: &mut Tenant) {
        if let Some(property_id) = self.property_id {
            tenant.property_id = property_id;
        }
        if let Some(unit_id) = self.unit_id {
            tenant.unit_id = unit_id;
        }
        if let Some(name) = self.name {
            tenant.name = name.trim().to_string();
        }
        if let Some(email) = self.email {
            tenant.email = non_blank(email);
        }
        if let Some(phone) = self.phone {
            tenant.phone = non_blank(phone);
        }
        if let Some(monthly_rent) = self.monthly_rent {
            tenant.monthly_rent = monthly_rent;
        }
        if let Some(balance) = self.balance {
            tenant.balance = balance;
        }
        if let Some(status) = self.status {
            tenant.status = status;
        }
        if let Some(lease_start) = self.lease_start {
            tenant.lease_start = lease_start;
        }
        if let Some(lease_end) = self.lease_end {
            tenant.lease_end = lease_end;
        }
        if let Some(custom_fields) = self.custom_fields {
            tenant.custom_fields = custom_fields;
        }
    }
}

impl Tenant {
    pub fn verify(&self) -> Result<(), AppError> {
        if self.name.is_empty() {
            return Err(AppError::ValidationError(
                "Tenant name is required".to_string(),
            ));
        }

        if let Some(email) = &self.email
            && !email.validate_email()
        {
            return Err(AppError::ValidationError(format!(
                "Invalid email address {email}"
            )));
        }

        if self.monthly_rent < BigDecimal::from(0) {
            return Err(AppError::ValidationError(
                "Monthly rent cannot be negative".to_string(),
            ));
        }

        if let (Some(start), Some(end)) = (self.lease_start, self.lease_end)
            && end <= start
        {
            return Err(AppError::ValidationError(format!(
                "Lease end {end} must be after lease start {start}"
            )));
        }

        Ok(())
    }

    pub fn owes(&self) -> bool {
        self.balance > BigDecimal::from(0)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
