//! # Bill Cache
//!
//! Pending bills from the last successful fetch plus the resident's current
//! payment selection. A selection is either one pending bill or an ad-hoc
//! payment type with an amount in rupees; never both.

use chrono::{DateTime, Utc};
use shared::{format_inr, rupees_to_paise, BillType, PendingBill};

use crate::core::error::{AppError, Result};

/// What the resident is about to pay for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// An outstanding bill; type and amount come from the bill
    Bill(PendingBill),
    /// A payment not tied to a bill, amount entered in rupees
    AdHoc { bill_type: BillType, amount_rupees: u64 },
}

impl Default for Selection {
    fn default() -> Self {
        Selection::ad_hoc(BillType::Maintenance)
    }
}

impl Selection {
    /// Ad-hoc selection with the type's default amount
    pub fn ad_hoc(bill_type: BillType) -> Self {
        Selection::AdHoc {
            bill_type,
            amount_rupees: bill_type.default_amount_rupees(),
        }
    }

    pub fn bill_type(&self) -> BillType {
        match self {
            Selection::Bill(bill) => bill.bill_type,
            Selection::AdHoc { bill_type, .. } => *bill_type,
        }
    }

    pub fn bill_id(&self) -> Option<&str> {
        match self {
            Selection::Bill(bill) => Some(&bill.id),
            Selection::AdHoc { .. } => None,
        }
    }

    /// Amount in paise, the only unit that leaves the client
    pub fn amount_paise(&self) -> Result<u64> {
        match self {
            Selection::Bill(bill) => Ok(bill.amount),
            Selection::AdHoc { amount_rupees, .. } => rupees_to_paise(*amount_rupees)
                .ok_or_else(|| AppError::Validation("Amount is too large".to_string())),
        }
    }

    /// Amount for display, e.g. `₹1,000.00`
    pub fn display_amount(&self) -> String {
        match self {
            Selection::Bill(bill) => format_inr(bill.amount),
            Selection::AdHoc { amount_rupees, .. } => match rupees_to_paise(*amount_rupees) {
                Some(paise) => format_inr(paise),
                None => format!("₹{}", amount_rupees),
            },
        }
    }
}

/// In-memory cache of pending bills
#[derive(Debug, Clone, Default)]
pub struct BillCache {
    bills: Vec<PendingBill>,
    loading: bool,
    last_refreshed: Option<DateTime<Utc>>,
    selection: Selection,
}

impl BillCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bills(&self) -> &[PendingBill] {
        &self.bills
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Mark a refresh as in flight. Fails if one already is.
    pub fn begin_refresh(&mut self) -> Result<()> {
        if self.loading {
            return Err(AppError::State(
                "Bills are already being refreshed".to_string(),
            ));
        }
        self.loading = true;
        Ok(())
    }

    /// End a failed refresh; the cached bills stay as they were.
    pub fn abort_refresh(&mut self) {
        self.loading = false;
    }

    /// Replace the bill set wholesale.
    ///
    /// A selected bill survives only if the new set still contains it; otherwise
    /// the selection falls back to the default ad-hoc payment.
    pub fn replace(&mut self, bills: Vec<PendingBill>) {
        if let Selection::Bill(selected) = &self.selection {
            self.selection = match bills.iter().find(|b| b.id == selected.id) {
                Some(fresh) => Selection::Bill(fresh.clone()),
                None => Selection::default(),
            };
        }

        self.bills = bills;
        self.loading = false;
        self.last_refreshed = Some(Utc::now());
    }

    /// Select a cached bill by id, clearing any ad-hoc choice.
    pub fn select_bill(&mut self, bill_id: &str) -> Result<PendingBill> {
        let bill = self
            .bills
            .iter()
            .find(|b| b.id == bill_id)
            .cloned()
            .ok_or_else(|| AppError::State(format!("No pending bill with id {}", bill_id)))?;

        self.selection = Selection::Bill(bill.clone());
        Ok(bill)
    }

    /// Switch to an ad-hoc payment, clearing any selected bill.
    ///
    /// Without an explicit amount the type's default is used. Only the types in
    /// [`BillType::all`] can be paid ad hoc.
    pub fn select_ad_hoc(
        &mut self,
        bill_type: BillType,
        amount_rupees: Option<u64>,
    ) -> Result<()> {
        if !BillType::all().contains(&bill_type) {
            return Err(AppError::Validation(format!(
                "{} is not an available payment type",
                bill_type.label()
            )));
        }

        self.selection = Selection::AdHoc {
            bill_type,
            amount_rupees: amount_rupees.unwrap_or_else(|| bill_type.default_amount_rupees()),
        };
        Ok(())
    }

    /// Edit the ad-hoc amount. Rejected while a bill is selected.
    pub fn set_amount(&mut self, amount_rupees: u64) -> Result<()> {
        match &mut self.selection {
            Selection::AdHoc {
                amount_rupees: current,
                ..
            } => {
                *current = amount_rupees;
                Ok(())
            }
            Selection::Bill(_) => Err(AppError::State(
                "Amount is fixed by the selected bill".to_string(),
            )),
        }
    }

    /// Back to the default ad-hoc selection
    pub fn clear_selection(&mut self) {
        self.selection = Selection::default();
    }
}
