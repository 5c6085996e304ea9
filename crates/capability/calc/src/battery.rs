//! 蓄电池选型。
//!
//! 需求容量 Ah = (P × t) / (U × η)，组数 = Ah / 单组容量。

use domain::BatteryParams;
use std::str::FromStr;

/// 浮点误差容限：理论组数与整数相差不超过该值时视为整数。
const STRING_COUNT_EPSILON: f64 = 1e-9;

/// 推荐组数取整规则。
///
/// 两套历史实现不一致：`Ceiling` 为标准向上取整（默认），
/// `FloorPlusOne` 为旧版“取整加一”，整数结果也会多一组。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StringRounding {
    #[default]
    Ceiling,
    FloorPlusOne,
}

/// 取整规则解析错误。
#[derive(Debug, thiserror::Error)]
#[error("unknown battery rounding: {0}")]
pub struct UnknownRounding(pub String);

impl FromStr for StringRounding {
    type Err = UnknownRounding;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ceiling" | "ceil" => Ok(Self::Ceiling),
            "floor-plus-one" | "floor_plus_one" | "floor+1" => Ok(Self::FloorPlusOne),
            other => Err(UnknownRounding(other.to_string())),
        }
    }
}

/// 蓄电池选型结果。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BatterySizing {
    /// 需求容量（Ah）。
    pub required_ah: f64,
    /// 理论组数。
    pub string_count: f64,
    /// 推荐组数。
    pub recommended_strings: u32,
}

/// 计算蓄电池选型。
///
/// U × η ≤ 0 时全部输出为 0；单组容量 ≤ 0 时组数为 0。
pub fn size_battery(params: &BatteryParams, rounding: StringRounding) -> BatterySizing {
    let denominator = params.battery_voltage * params.efficiency;
    if !denominator.is_finite() || denominator <= 0.0 {
        return BatterySizing::default();
    }
    let required_ah = params.dc_load_w * params.target_backup_time / denominator;
    if !required_ah.is_finite() || required_ah < 0.0 {
        return BatterySizing::default();
    }
    if !params.battery_ah.is_finite() || params.battery_ah <= 0.0 {
        return BatterySizing {
            required_ah,
            ..BatterySizing::default()
        };
    }
    let string_count = required_ah / params.battery_ah;
    BatterySizing {
        required_ah,
        string_count,
        recommended_strings: recommended_strings(string_count, rounding),
    }
}

/// 按取整规则计算推荐组数。
pub fn recommended_strings(string_count: f64, rounding: StringRounding) -> u32 {
    if !string_count.is_finite() || string_count < 0.0 {
        return 0;
    }
    let strings = match rounding {
        StringRounding::Ceiling => {
            let nearest = string_count.round();
            if nearest >= 1.0 && (string_count - nearest).abs() < STRING_COUNT_EPSILON {
                nearest
            } else {
                string_count.ceil()
            }
        }
        StringRounding::FloorPlusOne => string_count.floor() + 1.0,
    };
    strings.min(u32::MAX as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_keeps_exact_integers() {
        assert_eq!(recommended_strings(2.0, StringRounding::Ceiling), 2);
        assert_eq!(recommended_strings(2.0000000001, StringRounding::Ceiling), 2);
        assert_eq!(recommended_strings(2.01, StringRounding::Ceiling), 3);
        assert_eq!(recommended_strings(0.0, StringRounding::Ceiling), 0);
        assert_eq!(recommended_strings(1.9999999999, StringRounding::Ceiling), 2);
    }

    #[test]
    fn ceiling_gives_tiny_load_one_string() {
        assert_eq!(recommended_strings(1e-12, StringRounding::Ceiling), 1);
        assert_eq!(recommended_strings(0.3, StringRounding::Ceiling), 1);
    }

    #[test]
    fn floor_plus_one_adds_a_string() {
        assert_eq!(recommended_strings(2.0, StringRounding::FloorPlusOne), 3);
        assert_eq!(recommended_strings(1.78, StringRounding::FloorPlusOne), 2);
    }

    #[test]
    fn parses_rounding_names() {
        assert_eq!(
            "Ceiling".parse::<StringRounding>().expect("ceiling"),
            StringRounding::Ceiling
        );
        assert_eq!(
            "floor-plus-one".parse::<StringRounding>().expect("floor"),
            StringRounding::FloorPlusOne
        );
        assert!("round".parse::<StringRounding>().is_err());
    }
}
