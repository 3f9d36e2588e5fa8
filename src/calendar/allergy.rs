//! Allergen codes as published by the Ministry of Food and Drug Safety.

pub const ALLERGENS: [(u8, &str); 19] = [
    (1, "난류"),
    (2, "우유"),
    (3, "메밀"),
    (4, "땅콩"),
    (5, "대두"),
    (6, "밀"),
    (7, "고등어"),
    (8, "게"),
    (9, "새우"),
    (10, "돼지고기"),
    (11, "복숭아"),
    (12, "토마토"),
    (13, "아황산류"),
    (14, "호두"),
    (15, "닭고기"),
    (16, "쇠고기"),
    (17, "오징어"),
    (18, "조개류"),
    (19, "잣"),
];

#[must_use]
pub fn allergen_name(code: u8) -> Option<&'static str> {
    ALLERGENS.iter().find(|(c, _)| *c == code).map(|(_, name)| *name)
}

/// Names for a dotted code list such as `"5.6.13"`. Empty, non-numeric and
/// unknown segments are skipped.
#[must_use]
pub fn describe_codes(codes: &str) -> Vec<&'static str> {
    codes
        .split('.')
        .filter_map(|seg| seg.trim().parse::<u8>().ok())
        .filter_map(allergen_name)
        .collect()
}
