//! Spending categories and payment methods
//!
//! Both are fixed enumerations offered by the entry form. Each variant has a
//! Chinese label (shown in the UI and written to CSV) and an English key
//! accepted on the command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a label matches no variant of a fixed enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}'")]
pub struct LabelParseError {
    pub kind: &'static str,
    pub value: String,
}

impl LabelParseError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// What the money was spent on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// 餐饮
    Food,
    /// 服饰
    Clothing,
    /// 娱乐
    Entertainment,
    /// 交通
    Transport,
    /// 学习
    Study,
    /// 住宿
    Housing,
    /// 医疗
    Medical,
    /// 其他
    Other,
}

impl Category {
    /// All categories in form order
    pub const ALL: [Category; 8] = [
        Self::Food,
        Self::Clothing,
        Self::Entertainment,
        Self::Transport,
        Self::Study,
        Self::Housing,
        Self::Medical,
        Self::Other,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "餐饮",
            Self::Clothing => "服饰",
            Self::Entertainment => "娱乐",
            Self::Transport => "交通",
            Self::Study => "学习",
            Self::Housing => "住宿",
            Self::Medical => "医疗",
            Self::Other => "其他",
        }
    }

    /// Stable English key
    pub fn key(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Clothing => "clothing",
            Self::Entertainment => "entertainment",
            Self::Transport => "transport",
            Self::Study => "study",
            Self::Housing => "housing",
            Self::Medical => "medical",
            Self::Other => "other",
        }
    }

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Food
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s || c.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| LabelParseError::new("category", s))
    }
}

/// How the expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// 支付宝
    Alipay,
    /// 微信
    Wechat,
    /// 现金
    Cash,
    /// 银行卡
    Card,
}

impl PaymentMethod {
    /// All payment methods in form order
    pub const ALL: [PaymentMethod; 4] = [Self::Alipay, Self::Wechat, Self::Cash, Self::Card];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Alipay => "支付宝",
            Self::Wechat => "微信",
            Self::Cash => "现金",
            Self::Card => "银行卡",
        }
    }

    /// Stable English key
    pub fn key(&self) -> &'static str {
        match self {
            Self::Alipay => "alipay",
            Self::Wechat => "wechat",
            Self::Cash => "cash",
            Self::Card => "card",
        }
    }

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::Alipay
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label() == s || p.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| LabelParseError::new("payment method", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_parse_is_case_insensitive_for_keys() {
        assert_eq!("Food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" 交通 ".parse::<Category>().unwrap(), Category::Transport);
    }

    #[test]
    fn test_unknown_category() {
        let err = "groceries".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category: 'groceries'");
    }

    #[test]
    fn test_payment_method_labels() {
        assert_eq!("微信".parse::<PaymentMethod>().unwrap(), PaymentMethod::Wechat);
        assert_eq!("CARD".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert_eq!(PaymentMethod::Cash.to_string(), "现金");
        assert!("paypal".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_index_matches_form_order() {
        assert_eq!(Category::Food.index(), 0);
        assert_eq!(Category::Other.index(), 7);
        assert_eq!(PaymentMethod::Card.index(), 3);
    }
}
