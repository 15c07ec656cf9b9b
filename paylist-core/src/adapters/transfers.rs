//! Transfers adapter - one instance per direction
//!
//! The transfers API returns sent and received transfers mixed together.
//! Each adapter keeps only its configured direction (in source order) and
//! renders dates with its own fixed granularity.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::format::{format_currency, DateStyle};
use crate::domain::result::Result;
use crate::domain::{ListItem, Select, Transfer, TransferDirection};
use crate::ports::{ItemsLoader, TransfersSource};

pub struct TransfersAdapter {
    source: Arc<dyn TransfersSource>,
    direction: TransferDirection,
    date_style: DateStyle,
    select: Select<Transfer>,
}

impl TransfersAdapter {
    pub fn new(
        source: Arc<dyn TransfersSource>,
        direction: TransferDirection,
        date_style: DateStyle,
        select: Select<Transfer>,
    ) -> Self {
        Self {
            source,
            direction,
            date_style,
            select,
        }
    }

    /// Sent transfers with long dates
    pub fn sent(source: Arc<dyn TransfersSource>, select: Select<Transfer>) -> Self {
        Self::new(source, TransferDirection::Sent, DateStyle::Long, select)
    }

    /// Received transfers with short dates
    pub fn received(source: Arc<dyn TransfersSource>, select: Select<Transfer>) -> Self {
        Self::new(source, TransferDirection::Received, DateStyle::Short, select)
    }

    fn to_item(&self, transfer: Transfer) -> ListItem {
        let amount = format_currency(transfer.amount, &transfer.currency_code);
        let title = format!("{} • {}", amount, transfer.description);

        let date = self.date_style.format(&transfer.date);
        let subtitle = match self.direction {
            TransferDirection::Sent => format!("Sent to: {} on {}", transfer.recipient, date),
            TransferDirection::Received => {
                format!("Received from: {} on {}", transfer.sender, date)
            }
        };

        ListItem::bound(title, subtitle, transfer, &self.select)
    }
}

#[async_trait]
impl ItemsLoader for TransfersAdapter {
    fn name(&self) -> &str {
        match self.direction {
            TransferDirection::Sent => "sent-transfers",
            TransferDirection::Received => "received-transfers",
        }
    }

    async fn load(&self) -> Result<Vec<ListItem>> {
        let transfers = self.source.fetch_transfers().await?;
        let total = transfers.len();

        let items: Vec<ListItem> = transfers
            .into_iter()
            .filter(|t| t.direction() == self.direction)
            .map(|t| self.to_item(t))
            .collect();

        debug!(total, kept = items.len(), direction = ?self.direction, "fetched transfers");
        Ok(items)
    }
}
