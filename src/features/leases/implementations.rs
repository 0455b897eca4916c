use bigdecimal::BigDecimal;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use shared::utilities::errors::AppError;
use uuid::Uuid;

use crate::features::leases::{
    models::{Lease, LeaseStatus},
    schemas::{LeaseIn, LeasePatch},
};

/// Last day of a `days`-long window starting at `today`, clamped to
/// `NaiveDate::MAX`. `None` for a negative window.
pub fn window_end(today: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days < 0 {
        return None;
    }
    Some(
        Duration::try_days(days)
            .and_then(|span| today.checked_add_signed(span))
            .unwrap_or(NaiveDate::MAX),
    )
}

/// Date-based lease status: expired once `end_date` has passed, expiring
/// while it falls within `window_days` of `today`, active otherwise.
pub fn classify_lease(end_date: NaiveDate, today: NaiveDate, window_days: i64) -> LeaseStatus {
    if end_date < today {
        LeaseStatus::Expired
    } else if window_end(today, window_days).is_some_and(|horizon| end_date <= horizon) {
        LeaseStatus::Expiring
    } else {
        LeaseStatus::Active
    }
}

impl LeaseIn {
    pub fn into_lease(
        self,
        id: Uuid,
        now: DateTime<Utc>,
        window_days: i64,
    ) -> Result<Lease, AppError> {
        let start_date = self.start_date.ok_or_else(|| {
            AppError::ValidationError("Lease start date is required".to_string())
        })?;
        let end_date = self
            .end_date
            .ok_or_else(|| AppError::ValidationError("Lease end date is required".to_string()))?;
        let status = self
            .status
            .unwrap_or_else(|| classify_lease(end_date, now.date_naive(), window_days));

        Ok(Lease {
            id,
            tenant_id: self.tenant_id,
            property_id: self.property_id,
            unit: self.unit.trim().to_string(),
            start_date,
            end_date,
            monthly_rent: self.monthly_rent,
            security_deposit: self.security_deposit,
            status,
            custom_fields: self.custom_fields,
            created_at: now,
            updated_at: now,
        })
    }
}

impl LeasePatch {
    /// Applies the patch. When the dates move without an explicit status,
    /// a non-terminated lease is reclassified against `today`.
    pub fn apply_to(self, lease: &mut Lease, today: NaiveDate, window_days: i64) {
        let dates_changed = self.start_date.is_some() || self.end_date.is_some();

        if let Some(tenant_id) = self.tenant_id {
            lease.tenant_id = tenant_id;
        }
        if let Some(property_id) = self.property_id {
            lease.property_id = property_id;
        }
        if let Some(unit) = self.unit {
            lease.unit = unit.trim().to_string();
        }
        if let Some(start_date) = self.start_date {
            lease.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            lease.end_date = end_date;
        }
        if let Some(monthly_rent) = self.monthly_rent {
            lease.monthly_rent = monthly_rent;
        }
        if let Some(security_deposit) = self.security_deposit {
            lease.security_deposit = security_deposit;
        }
        if let Some(custom_fields) = self.custom_fields {
            lease.custom_fields = custom_fields;
        }

        match self.status {
            Some(status) => lease.status = status,
            None if dates_changed => lease.status = lease.classify(today, window_days),
            None => {}
        }
    }
}

impl Lease {
    pub fn verify(&self) -> Result<(), AppError> {
        if self.end_date <= self.start_date {
            return Err(AppError::ValidationError(format!(
                "Lease end date {} must be after start date {}",
                self.end_date, self.start_date
            )));
        }

        let zero = BigDecimal::from(0);
        if self.monthly_rent < zero {
            return Err(AppError::ValidationError(
                "Monthly rent cannot be negative".to_string(),
            ));
        }
        if self.security_deposit < zero {
            return Err(AppError::ValidationError(
                "Security deposit cannot be negative".to_string(),
            ));
        }

        Ok(())
    }

    /// Status this lease should carry on `today`; `Terminated` is kept.
    pub fn classify(&self, today: NaiveDate, window_days: i64) -> LeaseStatus {
        match self.status {
            LeaseStatus::Terminated => LeaseStatus::Terminated,
            _ => classify_lease(self.end_date, today, window_days),
        }
    }

    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::utilities::config::DEFAULT_LEASE_EXPIRING_WINDOW_DAYS as WINDOW;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    fn lease(end_date: NaiveDate) -> Lease {
        LeaseIn {
            tenant_id: Uuid::new_v4(),
            property_id: Uuid::new_v4(),
            unit: "4C".to_string(),
            start_date: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            end_date: Some(end_date),
            monthly_rent: BigDecimal::from(1_200),
            ..Default::default()
        }
        .into_lease(Uuid::new_v4(), Utc::now(), WINDOW)
        .unwrap()
    }

    #[test]
    fn ten_days_out_is_expiring() {
        let end = today() + Duration::days(10);

        assert_eq!(classify_lease(end, today(), WINDOW), LeaseStatus::Expiring);
    }

    #[test]
    fn classification_boundaries() {
        let t = today();

        assert_eq!(classify_lease(t, t, WINDOW), LeaseStatus::Expiring);
        assert_eq!(classify_lease(t - Duration::days(1), t, WINDOW), LeaseStatus::Expired);
        assert_eq!(classify_lease(t + Duration::days(60), t, WINDOW), LeaseStatus::Expiring);
        assert_eq!(classify_lease(t + Duration::days(61), t, WINDOW), LeaseStatus::Active);
    }

    #[test]
    fn huge_window_clamps_instead_of_overflowing() {
        let t = today();

        assert_eq!(window_end(t, i64::MAX), Some(NaiveDate::MAX));
        assert_eq!(window_end(t, 200_000_000), Some(NaiveDate::MAX));
        assert_eq!(window_end(t, -1), None);
        assert_eq!(
            classify_lease(t + Duration::days(5_000), t, 200_000_000),
            LeaseStatus::Expiring
        );
        assert_eq!(classify_lease(t + Duration::days(5), t, -10), LeaseStatus::Active);
    }

    #[test]
    fn terminated_is_sticky() {
        let mut lease = lease(today() - Duration::days(30));
        lease.status = LeaseStatus::Terminated;

        assert_eq!(lease.classify(today(), WINDOW), LeaseStatus::Terminated);

        LeasePatch {
            end_date: Some(today() + Duration::days(400)),
            ..Default::default()
        }
        .apply_to(&mut lease, today(), WINDOW);
        assert_eq!(lease.status, LeaseStatus::Terminated);
    }

    #[test]
    fn missing_dates_are_rejected() {
        let err = LeaseIn::default()
            .into_lease(Uuid::new_v4(), Utc::now(), WINDOW)
            .unwrap_err();

        assert!(err.is_validation());
    }

    #[test]
    fn end_must_follow_start() {
        let mut lease = lease(today());
        lease.end_date = lease.start_date;

        assert!(lease.verify().unwrap_err().is_validation());
    }

    #[test]
    fn rejects_negative_deposit() {
        let mut lease = lease(today() + Duration::days(365));
        lease.security_deposit = BigDecimal::from(-1);

        assert!(lease.verify().is_err());
    }

    #[test]
    fn moving_dates_reclassifies() {
        let mut lease = lease(today() + Duration::days(365));
        lease.status = LeaseStatus::Active;

        LeasePatch {
            end_date: Some(today() + Duration::days(5)),
            ..Default::default()
        }
        .apply_to(&mut lease, today(), WINDOW);

        assert_eq!(lease.status, LeaseStatus::Expiring);
        assert_eq!(lease.days_remaining(today()), 5);
    }
}
