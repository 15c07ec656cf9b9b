//! Cards adapter

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::result::Result;
use crate::domain::{Card, ListItem, Select};
use crate::ports::{CardsSource, ItemsLoader};

/// Loads payment cards; title is the card number, subtitle the holder
pub struct CardsAdapter {
    source: Arc<dyn CardsSource>,
    select: Select<Card>,
}

impl CardsAdapter {
    pub fn new(source: Arc<dyn CardsSource>, select: Select<Card>) -> Self {
        Self { source, select }
    }
}

#[async_trait]
impl ItemsLoader for CardsAdapter {
    fn name(&self) -> &str {
        "cards"
    }

    async fn load(&self) -> Result<Vec<ListItem>> {
        let cards = self.source.fetch_cards().await?;
        debug!(count = cards.len(), "fetched cards");

        Ok(cards
            .into_iter()
            .map(|card| {
                let title = card.number.clone();
                let subtitle = card.holder.clone();
                ListItem::bound(title, subtitle, card, &self.select)
            })
            .collect())
    }
}
