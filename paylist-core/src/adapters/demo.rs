//! Demo data provider
//!
//! Serves a fixed set of contacts, cards and transfers so the app can be
//! explored without an API account. IDs are stable across runs.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{Card, Contact, Transfer};
use crate::ports::{CardsSource, ContactsCache, ContactsSource, TransfersSource};

/// Name the demo user goes by in transfers
pub const DEMO_USER: &str = "You";

fn demo_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 31, 18, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Generate demo contacts
pub fn generate_demo_contacts() -> Vec<Contact> {
    [
        ("Alice Johnson", "+1 (555) 010-2233"),
        ("Bob Martinez", "+1 (555) 010-4410"),
        ("Chloé Dubois", "+33 6 12 34 56 78"),
        ("Daniel Kim", "+82 10-1234-5678"),
        ("Emma Schmidt", "+49 151 2345678"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (name, phone))| Contact {
        id: Uuid::from_u128(0x1000 + i as u128),
        name: name.to_string(),
        phone: phone.to_string(),
    })
    .collect()
}

/// Generate demo cards
pub fn generate_demo_cards() -> Vec<Card> {
    [
        ("**** **** **** 4242", "Jordan Lee"),
        ("**** **** **** 1881", "Jordan Lee"),
        ("**** **** **** 0005", "Jordan Lee"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (number, holder))| Card {
        id: Uuid::from_u128(0x2000 + i as u128),
        number: number.to_string(),
        holder: holder.to_string(),
    })
    .collect()
}

/// Generate demo transfers, newest first, both directions mixed
pub fn generate_demo_transfers() -> Vec<Transfer> {
    let epoch = demo_epoch();
    let rows: [(&str, i64, &str, &str, bool, i64); 8] = [
        ("Dinner split", 4250, "USD", "Bob Martinez", true, 0),
        ("Concert tickets", 8000, "EUR", "Chloé Dubois", false, 1),
        ("Rent share", 65000, "USD", "Alice Johnson", true, 3),
        ("Birthday gift", 2500, "GBP", "Emma Schmidt", false, 6),
        ("Taxi", 1800000, "KRW", "Daniel Kim", true, 9),
        ("Groceries", 3715, "EUR", "Emma Schmidt", true, 12),
        ("Loan repayment", 20000, "USD", "Bob Martinez", false, 15),
        ("Coffee", 450, "USD", "Alice Johnson", false, 20),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (description, cents, currency, other, is_sender, days_ago))| {
            let scale = if *currency == "KRW" { 0 } else { 2 };
            let (sender, recipient) = if *is_sender {
                (DEMO_USER, *other)
            } else {
                (*other, DEMO_USER)
            };
            Transfer {
                id: Uuid::from_u128(0x3000 + i as u128),
                description: description.to_string(),
                amount: Decimal::new(*cents, scale),
                currency_code: currency.to_string(),
                date: epoch - Duration::days(*days_ago) - Duration::minutes(37 * i as i64),
                sender: sender.to_string(),
                recipient: recipient.to_string(),
                is_sender: *is_sender,
            }
        })
        .collect()
}

/// Demo source for all three collections
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoPaymentsProvider;

impl DemoPaymentsProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContactsSource for DemoPaymentsProvider {
    async fn fetch_contacts(&self) -> Result<Vec<Contact>> {
        Ok(generate_demo_contacts())
    }
}

#[async_trait]
impl CardsSource for DemoPaymentsProvider {
    async fn fetch_cards(&self) -> Result<Vec<Card>> {
        Ok(generate_demo_cards())
    }
}

#[async_trait]
impl TransfersSource for DemoPaymentsProvider {
    async fn fetch_transfers(&self) -> Result<Vec<Transfer>> {
        Ok(generate_demo_transfers())
    }
}

/// Wraps a source and fails its first `failures` fetches
///
/// Lets the demo show retries and cache fallback on demand. The countdown
/// is shared by every collection the wrapped source serves.
#[derive(Debug)]
pub struct Flaky<S> {
    inner: S,
    remaining: AtomicU32,
}

impl<S> Flaky<S> {
    pub fn new(inner: S, failures: u32) -> Self {
        Self {
            inner,
            remaining: AtomicU32::new(failures),
        }
    }

    /// Failures still to be injected
    pub fn remaining(&self) -> u32 {
        self.remaining.load(Ordering::SeqCst)
    }

    fn trip(&self) -> Result<()> {
        let tripped = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if tripped {
            Err(Error::network("simulated outage"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<S: ContactsSource> ContactsSource for Flaky<S> {
    async fn fetch_contacts(&self) -> Result<Vec<Contact>> {
        self.trip()?;
        self.inner.fetch_contacts().await
    }
}

#[async_trait]
impl<S: CardsSource> CardsSource for Flaky<S> {
    async fn fetch_cards(&self) -> Result<Vec<Card>> {
        self.trip()?;
        self.inner.fetch_cards().await
    }
}

#[async_trait]
impl<S: TransfersSource> TransfersSource for Flaky<S> {
    async fn fetch_transfers(&self) -> Result<Vec<Transfer>> {
        self.trip()?;
        self.inner.fetch_transfers().await
    }
}

/// Seed `cache` with the demo contacts
pub async fn seed_demo_cache(cache: &dyn ContactsCache) -> Result<()> {
    cache.save(&generate_demo_contacts()).await
}
