//! Fixed NEIS code tables: provincial education offices and meal kinds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Office {
    pub name: &'static str,
    pub code: &'static str,
}

pub const DEFAULT_OFFICE_CODE: &str = "K10";

pub static OFFICES: [Office; 17] = [
    Office { name: "서울특별시교육청", code: "B10" },
    Office { name: "부산광역시교육청", code: "C10" },
    Office { name: "대구광역시교육청", code: "D10" },
    Office { name: "인천광역시교육청", code: "E10" },
    Office { name: "광주광역시교육청", code: "F10" },
    Office { name: "대전광역시교육청", code: "G10" },
    Office { name: "울산광역시교육청", code: "H10" },
    Office { name: "세종특별자치시교육청", code: "I10" },
    Office { name: "경기도교육청", code: "J10" },
    Office { name: "강원도교육청", code: "K10" },
    Office { name: "충청북도교육청", code: "M10" },
    Office { name: "충청남도교육청", code: "N10" },
    Office { name: "전라북도교육청", code: "P10" },
    Office { name: "전라남도교육청", code: "Q10" },
    Office { name: "경상북도교육청", code: "R10" },
    Office { name: "경상남도교육청", code: "S10" },
    Office { name: "제주특별자치도교육청", code: "T10" },
];

#[must_use]
pub fn office_by_code(code: &str) -> Option<&'static Office> {
    OFFICES.iter().find(|o| o.code == code)
}

/// Position of [`DEFAULT_OFFICE_CODE`] in [`OFFICES`], resolved at compile time.
const DEFAULT_OFFICE_INDEX: usize = office_index(DEFAULT_OFFICE_CODE);

const fn office_index(code: &str) -> usize {
    let mut i = 0;
    while i < OFFICES.len() {
        if bytes_eq(OFFICES[i].code.as_bytes(), code.as_bytes()) {
            return i;
        }
        i += 1;
    }
    panic!("office code is not in OFFICES");
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// The office named by [`DEFAULT_OFFICE_CODE`].
#[must_use]
pub fn default_office() -> &'static Office {
    &OFFICES[DEFAULT_OFFICE_INDEX]
}

/// `MMEAL_SC_CODE` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealKind {
    #[serde(rename = "1")]
    Breakfast,
    #[default]
    #[serde(rename = "2")]
    Lunch,
    #[serde(rename = "3")]
    Dinner,
}

impl MealKind {
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Breakfast => "1",
            Self::Lunch => "2",
            Self::Dinner => "3",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "조식",
            Self::Lunch => "중식",
            Self::Dinner => "석식",
        }
    }
}
