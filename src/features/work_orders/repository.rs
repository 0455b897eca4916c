use chrono::Utc;
use shared::utilities::errors::AppError;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use crate::{
    features::work_orders::{
        models::WorkOrder,
        schemas::{WorkOrderIn, WorkOrderPatch},
    },
    services::{collection::EntityKind, events::ChangeAction},
    utilities::app_state::DataContext,
};

impl DataContext {
    pub fn list_work_orders(&self) -> &[WorkOrder] {
        self.work_orders.list()
    }

    pub fn get_work_order(&self, id: Uuid) -> Option<&WorkOrder> {
        self.work_orders.get_by_id(id)
    }

    pub fn create_work_order(&mut self, input: WorkOrderIn) -> Result<WorkOrder, AppError> {
        input.validate()?;

        let now = Utc::now();
        let mut order = input.into_work_order(Uuid::new_v4(), now);
        self.ensure_property(order.property_id)?;
        order.stamp_completion(now.date_naive());
        order.verify()?;

        self.work_orders.insert(order.clone());
        self.persist(&self.work_orders);
        self.emit(EntityKind::WorkOrder, order.id, ChangeAction::Created);

        debug!("created work order {} ({:?}, {:?})", order.id, order.priority, order.status);
        Ok(order)
    }

    pub fn update_work_order(
        &mut self,
        id: Uuid,
        patch: WorkOrderPatch,
    ) -> Result<WorkOrder, AppError> {
        let mut order = self
            .work_orders
            .get_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(EntityKind::WorkOrder.to_string(), id))?;

        patch.validate()?;
        let now = Utc::now();
        patch.apply_to(&mut order);
        order.updated_at = now;
        self.ensure_property(order.property_id)?;
        order.stamp_completion(now.date_naive());
        order.verify()?;

        self.work_orders.replace(order.clone());
        self.persist(&self.work_orders);
        self.emit(EntityKind::WorkOrder, id, ChangeAction::Updated);

        debug!("updated work order {id}");
        Ok(order)
    }

    pub fn remove_work_order(&mut self, id: Uuid) -> Result<WorkOrder, AppError> {
        let order = self
            .work_orders
            .remove(id)
            .ok_or_else(|| AppError::not_found(EntityKind::WorkOrder.to_string(), id))?;

        self.persist(&self.work_orders);
        self.emit(EntityKind::WorkOrder, id, ChangeAction::Deleted);

        debug!("removed work order {id}");
        Ok(order)
    }
}
