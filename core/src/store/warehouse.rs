//! Warehouse collections: main stock, van stock, consumption queue,
//! recycled parts, and purchase requests.

use super::DeskStore;
use crate::{
    error::{DeskError, DeskResult},
    warehouse::{ConsumptionEvent, PurchaseRequest, RecycledPart, StockItem, TechStock},
};

impl DeskStore {
    // ── Main stock ─────────────────────────────────────────

    pub fn insert_stock_item(&mut self, item: StockItem) {
        self.stock.push(item);
    }

    pub fn stock_items(&self) -> &[StockItem] {
        &self.stock
    }

    /// Substring search over sku + name + category + barcode.
    pub fn search_stock(&self, query: &str) -> Vec<&StockItem> {
        self.stock
            .iter()
            .filter(|i| {
                format!("{}{}{}{}", i.sku, i.name, i.category, i.barcode).contains(query)
            })
            .collect()
    }

    pub fn item_by_sku(&self, sku: &str) -> DeskResult<&StockItem> {
        self.stock
            .iter()
            .find(|i| i.sku == sku)
            .ok_or_else(|| DeskError::ItemNotFound {
                sku: sku.to_string(),
            })
    }

    pub fn sku_from_barcode(&self, barcode: &str) -> Option<String> {
        self.stock
            .iter()
            .find(|i| i.barcode == barcode)
            .map(|i| i.sku.clone())
    }

    /// Items at or below their minimum quantity.
    pub fn low_stock(&self) -> Vec<&StockItem> {
        self.stock.iter().filter(|i| i.is_low()).collect()
    }

    /// Deduct from main stock, flooring at zero.
    pub fn deduct_stock(&mut self, sku: &str, qty: u32) -> DeskResult<()> {
        let item = self
            .stock
            .iter_mut()
            .find(|i| i.sku == sku)
            .ok_or_else(|| DeskError::ItemNotFound {
                sku: sku.to_string(),
            })?;
        item.qty = item.qty.saturating_sub(qty);
        Ok(())
    }

    pub fn set_min_qty(&mut self, sku: &str, min_qty: u32) -> DeskResult<()> {
        let item = self
            .stock
            .iter_mut()
            .find(|i| i.sku == sku)
            .ok_or_else(|| DeskError::ItemNotFound {
                sku: sku.to_string(),
            })?;
        item.min_qty = min_qty;
        Ok(())
    }

    // ── Technician van stock ───────────────────────────────

    pub fn insert_tech_stock(&mut self, tech_stock: TechStock) {
        self.tech_stocks.push(tech_stock);
    }

    pub fn tech_qty(&self, technician_id: &str, sku: &str) -> u32 {
        self.tech_stocks
            .iter()
            .find(|ts| ts.technician_id == technician_id)
            .and_then(|ts| ts.items.get(sku).copied())
            .unwrap_or(0)
    }

    /// Add to a technician's van stock, creating the ledger on first use.
    pub fn add_to_tech_stock(&mut self, technician_id: &str, sku: &str, qty: u32) {
        let pos = match self
            .tech_stocks
            .iter()
            .position(|ts| ts.technician_id == technician_id)
        {
            Some(pos) => pos,
            None => {
                self.tech_stocks.push(TechStock {
                    technician_id: technician_id.to_string(),
                    items: Default::default(),
                });
                self.tech_stocks.len() - 1
            }
        };
        *self.tech_stocks[pos].items.entry(sku.to_string()).or_insert(0) += qty;
    }

    /// Remove from a technician's van stock, flooring at zero.
    pub fn remove_from_tech_stock(&mut self, technician_id: &str, sku: &str, qty: u32) {
        if let Some(ts) = self
            .tech_stocks
            .iter_mut()
            .find(|ts| ts.technician_id == technician_id)
        {
            if let Some(on_hand) = ts.items.get_mut(sku) {
                *on_hand = on_hand.saturating_sub(qty);
            }
        }
    }

    // ── Consumption queue ──────────────────────────────────

    /// Newest first, like the notification list on the desk.
    pub fn push_consumption(&mut self, event: ConsumptionEvent) {
        self.consumption.insert(0, event);
    }

    pub fn consumption_events(&self) -> &[ConsumptionEvent] {
        &self.consumption
    }

    // ── Recycled parts ─────────────────────────────────────

    pub fn push_recycled(&mut self, part: RecycledPart) {
        self.recycled.insert(0, part);
    }

    pub fn recycled_parts(&self) -> &[RecycledPart] {
        &self.recycled
    }

    pub(crate) fn recycled_mut(&mut self, id: &str) -> DeskResult<&mut RecycledPart> {
        self.recycled
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DeskError::RecycledPartNotFound { id: id.to_string() })
    }

    // ── Purchase requests ──────────────────────────────────

    pub fn push_purchase(&mut self, request: PurchaseRequest) {
        self.purchases.insert(0, request);
    }

    pub fn purchases(&self) -> &[PurchaseRequest] {
        &self.purchases
    }

    pub fn get_purchase(&self, id: &str) -> DeskResult<&PurchaseRequest> {
        self.purchases
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DeskError::PurchaseNotFound { id: id.to_string() })
    }

    pub(crate) fn purchase_mut(&mut self, id: &str) -> DeskResult<&mut PurchaseRequest> {
        self.purchases
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DeskError::PurchaseNotFound { id: id.to_string() })
    }
}
