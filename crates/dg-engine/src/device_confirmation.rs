//! Marks a device trusted once its out-of-band confirmation lands.

use crate::Result as EngineResult;

use dg_db::DeviceRepository;

use log::{debug, info};
use sqlx::SqlitePool;

/// Applies device confirmations reported back by the validation service.
pub struct DeviceConfirmation {
    devices: DeviceRepository,
}

impl DeviceConfirmation {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            devices: DeviceRepository::new(pool),
        }
    }

    /// Confirm one device record. Unknown ids and repeat confirmations are
    /// silent no-ops; confirmation never touches credentials.
    pub async fn confirm(&self, device_record_id: i64) -> EngineResult<()> {
        match self.devices.find_by_id(device_record_id).await? {
            Some(device) => {
                self.devices.mark_confirmed(device.id).await?;
                info!(
                    "Device {} confirmed for identity {}",
                    device.id, device.identity_id
                );
            }
            None => {
                debug!("Ignoring confirmation for unknown device record {device_record_id}");
            }
        }

        Ok(())
    }
}
