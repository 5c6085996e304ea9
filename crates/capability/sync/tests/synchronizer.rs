use domain::{
    CostCategory, CostLineItem, DesignData, InventoryLedger, InventoryStatus, InventoryType,
    PowerLoadItem,
};
use pmb_sync::{
    COST_SYNC_NOTE_PREFIX, DEFAULT_UNIT, InventoryIdGenerator, InventorySyncMode, SyncReport,
    sync_cost_to_inventory, sync_power_to_cost,
};
use std::collections::HashSet;

fn power_design() -> DesignData {
    DesignData {
        calc_items: vec![
            PowerLoadItem::new("Router", 2, 480.0, 48.0),
            PowerLoadItem::new("Switch", 1, 120.0, 48.0),
        ],
        ..DesignData::default()
    }
}

#[test]
fn power_to_cost_creates_main_rows() {
    let mut design = power_design();
    let report = sync_power_to_cost(&mut design);
    assert_eq!(report, SyncReport { created: 2, skipped: 0 });

    let row = &design.cost_estimate_items[0];
    assert_eq!(row.category, CostCategory::Main);
    assert_eq!(row.item_name, "Router");
    assert_eq!(row.quantity, 2);
    assert_eq!(row.unit_price, 0.0);
    assert_eq!(row.unit, DEFAULT_UNIT);
}

#[test]
fn power_to_cost_twice_adds_nothing() {
    let mut design = power_design();
    sync_power_to_cost(&mut design);
    let second = sync_power_to_cost(&mut design);
    assert_eq!(second.created, 0);
    assert_eq!(design.cost_estimate_items.len(), 2);
}

#[test]
fn power_to_cost_dedupes_by_name_not_position() {
    let mut design = power_design();
    let mut priced = CostLineItem::new("Switch", 4, 900.0);
    priced.category = CostCategory::Aux;
    design.cost_estimate_items.push(priced);

    let report = sync_power_to_cost(&mut design);
    assert_eq!(report.created, 1);
    let switch = design
        .cost_estimate_items
        .iter()
        .find(|item| item.item_name == "Switch")
        .expect("switch");
    assert_eq!(switch.quantity, 4);
    assert_eq!(switch.unit_price, 900.0);
}

#[test]
fn power_to_cost_skips_unnamed_rows() {
    let mut design = power_design();
    design.calc_items.insert(1, PowerLoadItem::new("  ", 1, 10.0, 48.0));
    let report = sync_power_to_cost(&mut design);
    assert_eq!(report, SyncReport { created: 2, skipped: 1 });
}

#[test]
fn cost_to_inventory_appends_every_row() {
    let mut design = DesignData::default();
    let mut cable = CostLineItem::new("Cable", 3, 500.0);
    cable.item_code = "CB-01".to_string();
    cable.note = "Ưu tiên".to_string();
    design.cost_estimate_items = vec![CostLineItem::new("Rectifier", 2, 1000.0), cable];

    let mut ledger = InventoryLedger::new();
    let ids = InventoryIdGenerator::new();
    let report = sync_cost_to_inventory(&design, &mut ledger, InventorySyncMode::Append, &ids);
    assert_eq!(report.created, 2);

    let item = &ledger.items()[1];
    assert_eq!(item.item_code, "CB-01");
    assert_eq!(item.quantity, 3);
    assert_eq!(item.kind, InventoryType::Offline);
    assert_eq!(item.status, InventoryStatus::Planned);
    assert!(!item.transfer.is_transferred);
    assert_eq!(item.note, format!("{COST_SYNC_NOTE_PREFIX} Ưu tiên"));
    assert!(item.id.starts_with("sync_"));
    assert!(item.id.ends_with("_Cable"));
    assert_eq!(ledger.items()[0].note, COST_SYNC_NOTE_PREFIX);
}

#[test]
fn cost_to_inventory_twice_duplicates_entries() {
    let design = DesignData {
        cost_estimate_items: vec![
            CostLineItem::new("Rectifier", 2, 1000.0),
            CostLineItem::new("Cable", 3, 500.0),
            CostLineItem::new("Cable", 1, 500.0),
        ],
        ..DesignData::default()
    };
    let mut ledger = InventoryLedger::new();
    let ids = InventoryIdGenerator::new();

    sync_cost_to_inventory(&design, &mut ledger, InventorySyncMode::Append, &ids);
    sync_cost_to_inventory(&design, &mut ledger, InventorySyncMode::Append, &ids);
    assert_eq!(ledger.len(), 6);

    let unique: HashSet<&str> = ledger.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(unique.len(), 6);
}

#[test]
fn cost_to_inventory_skip_existing_is_idempotent() {
    let design = DesignData {
        cost_estimate_items: vec![
            CostLineItem::new("Rectifier", 2, 1000.0),
            CostLineItem::new("Cable", 3, 500.0),
        ],
        ..DesignData::default()
    };
    let mut ledger = InventoryLedger::new();
    let ids = InventoryIdGenerator::new();
    let mode = InventorySyncMode::from_dedupe(true);

    sync_cost_to_inventory(&design, &mut ledger, mode, &ids);
    let second = sync_cost_to_inventory(&design, &mut ledger, mode, &ids);
    assert_eq!(second.created, 0);
    assert_eq!(ledger.len(), 2);
}

#[test]
fn cost_to_inventory_skips_blank_rows_and_continues() {
    let design = DesignData {
        cost_estimate_items: vec![
            CostLineItem::new("Rectifier", 2, 1000.0),
            CostLineItem::new("", 1, 0.0),
            CostLineItem::new("Cable", 3, 500.0),
        ],
        ..DesignData::default()
    };
    let mut ledger = InventoryLedger::new();
    let report = sync_cost_to_inventory(
        &design,
        &mut ledger,
        InventorySyncMode::Append,
        &InventoryIdGenerator::new(),
    );
    assert_eq!(report, SyncReport { created: 2, skipped: 1 });
    assert_eq!(ledger.items()[1].item_name, "Cable");
}

#[test]
fn power_to_cost_zero_quantity_becomes_one() {
    let mut design = DesignData {
        calc_items: vec![PowerLoadItem::new("Spare ODF", 0, 0.0, 48.0)],
        ..DesignData::default()
    };
    let report = sync_power_to_cost(&mut design);
    assert_eq!(report, SyncReport { created: 1, skipped: 0 });
    assert_eq!(design.cost_estimate_items[0].quantity, 1);
    assert!(domain::validate_cost_items(&design.cost_estimate_items).is_ok());
}
