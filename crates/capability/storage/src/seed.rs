//! 演示站点数据
//!
//! 三个初始站点，供本地演示和测试使用。

use domain::{
    BatteryParams, Coordinates, DesignData, Equipment, EquipmentClass, InventoryItem,
    InventoryLedger, InventoryStatus, InventoryType, Rack, RectifierParams, Region, RoomParams,
    Site, SiteStatus, TransferState,
};

/// 构造演示站点列表。
pub fn demo_sites() -> Vec<Site> {
    vec![mong_cai(), nam_dinh(), ngoc_hoi()]
}

fn mong_cai() -> Site {
    let mut site = Site::new("1", "QNHW002", "Móng Cái", Region::North, SiteStatus::Planned);
    site.province = "Quảng Ninh".to_string();
    site.build_year = "2026".to_string();
    site.power = 60.0;
    site.racks = 12;
    site.manager = Some("Nguyễn Văn Quyền".to_string());
    site.branch_manager = Some("Nguyễn Văn Linh".to_string());
    site.building_type = "Cont".to_string();
    site.category = "Quốc tế".to_string();
    site.coordinates = Coordinates {
        lat: 21.521187,
        lng: 107.961813,
    };
    site.design_data = DesignData {
        racks: vec![Rack {
            id: "r1".to_string(),
            name: "Rack 1 (Nguồn)".to_string(),
            total_u: 42,
        }],
        equipments: vec![Equipment {
            id: "eq1".to_string(),
            rack_id: "r1".to_string(),
            name: "Nguồn Emerson 701".to_string(),
            model: "Netsure 701".to_string(),
            class: EquipmentClass::Dc,
            power_w: 200.0,
            start_u: 1,
            u_height: 5,
            color: Some("#3B82F6".to_string()),
        }],
        room_params: RoomParams {
            width: 3.0,
            length: 5.0,
            height: 3.0,
            temp_inside: 25.0,
            temp_outside: 40.0,
            equipment_heat_w: 0.0,
        },
        battery_params: BatteryParams {
            dc_load_w: 0.0,
            target_backup_time: 8.0,
            battery_voltage: 48.0,
            battery_ah: 100.0,
            efficiency: 0.9,
        },
        rect_params: RectifierParams {
            dc_load_w: 0.0,
            battery_ah: 0.0,
            rectifier_module_size: 3000.0,
        },
        ..DesignData::default()
    };
    site.inventory = InventoryLedger::from(vec![InventoryItem {
        id: "inv1".to_string(),
        item_code: "MPD-100".to_string(),
        item_name: "Máy phát điện Cummins 100kVA".to_string(),
        quantity: 1,
        unit: "Cái".to_string(),
        rated_power: Some(40.0),
        kind: InventoryType::Offline,
        status: InventoryStatus::Active,
        location: Some("Sân trạm".to_string()),
        note: String::new(),
        transfer: TransferState::default(),
    }]);
    site
}

fn nam_dinh() -> Site {
    let mut site = Site::new("2", "NBHW001", "Nam Định", Region::North, SiteStatus::Active);
    site.province = "Ninh Bình".to_string();
    site.build_year = "2013".to_string();
    site.power = 15.0;
    site.racks = 5;
    site.manager = Some("Nguyễn Văn Quyền".to_string());
    site.branch_manager = Some("Nguyễn Đình Dương".to_string());
    site.building_type = "Cont".to_string();
    site.category = "Repeater".to_string();
    site.coordinates = Coordinates {
        lat: 20.42027,
        lng: 106.16459,
    };
    site
}

fn ngoc_hoi() -> Site {
    let mut site = Site::new("3", "QNIW001", "Ngọc Hồi", Region::Central, SiteStatus::Active);
    site.province = "Quảng Ngãi".to_string();
    site.build_year = "2014".to_string();
    site.power = 12.0;
    site.racks = 5;
    site.building_type = "Cont".to_string();
    site.category = "Repeater".to_string();
    site.coordinates = Coordinates {
        lat: 14.704680,
        lng: 107.685551,
    };
    site
}
