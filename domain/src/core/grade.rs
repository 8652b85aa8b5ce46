//! School grade value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Word-problem topics for 4th grade
const FOURTH_GRADE_TOPICS: &[&str] = &[
    "小数",
    "分数",
    "図形",
    "四則計算",
    "複合問題",
    "単位換算",
    "時間と時刻",
    "概数",
    "データの整理",
    "角度",
    "図形の分類",
    "平均",
    "小数の倍",
    "計算の工夫",
    "グラフ",
    "未知数を求める",
    "変わり方調べ",
];

/// Word-problem topics for 5th grade
const FIFTH_GRADE_TOPICS: &[&str] = &[
    "小数",
    "分数",
    "帯分数",
    "約分",
    "通分",
    "分数と小数の変換",
    "平面図形",
    "立体図形",
    "体積",
    "表面積",
    "四則計算",
    "複合問題",
    "単位換算",
    "時間と時刻",
    "概数",
    "データの整理",
    "割合",
    "百分率",
    "角度",
    "図形の分類",
    "平均",
    "小数の倍",
    "速さ",
    "計算の工夫",
    "グラフ",
    "未知数を求める",
    "変わり方調べ",
    "倍数と約数",
];

/// Elementary-school grade a problem set targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Grade {
    #[default]
    Fourth,
    Fifth,
}

impl Grade {
    pub const ALL: [Grade; 2] = [Grade::Fourth, Grade::Fifth];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Fourth => "4",
            Grade::Fifth => "5",
        }
    }

    /// Topic list the prompt builder samples from
    pub fn topics(&self) -> &'static [&'static str] {
        match self {
            Grade::Fourth => FOURTH_GRADE_TOPICS,
            Grade::Fifth => FIFTH_GRADE_TOPICS,
        }
    }

    pub fn available() -> Vec<&'static str> {
        Self::ALL.iter().map(|g| g.as_str()).collect()
    }

    pub fn is_supported(value: &str) -> bool {
        value.parse::<Grade>().is_ok()
    }

    pub(crate) fn supported_list() -> String {
        Self::available().join(", ")
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Grade {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4" => Ok(Grade::Fourth),
            "5" => Ok(Grade::Fifth),
            _ => Err(DomainError::UnsupportedGrade(s.to_string())),
        }
    }
}

impl Serialize for Grade {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Grade {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_grades() {
        assert_eq!("4".parse::<Grade>(), Ok(Grade::Fourth));
        assert_eq!("5".parse::<Grade>(), Ok(Grade::Fifth));
    }

    #[test]
    fn test_parse_rejects_other_grades() {
        assert!("3".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
        assert!(!Grade::is_supported("four"));
    }

    #[test]
    fn test_topic_lists_are_populated() {
        assert_eq!(Grade::Fourth.topics().len(), 17);
        assert_eq!(Grade::Fifth.topics().len(), 28);
        assert!(Grade::Fifth.topics().contains(&"速さ"));
        assert!(!Grade::Fourth.topics().contains(&"速さ"));
    }
}
