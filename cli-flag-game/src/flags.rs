//! Terminal artwork for flags

use flagquiz::ItemId;

/// ISO 3166-1 alpha-2 codes for country names the terminal can draw
const COUNTRY_CODES: &[(&str, &str)] = &[
    ("Estonia", "EE"),
    ("France", "FR"),
    ("Germany", "DE"),
    ("Ireland", "IE"),
    ("Italy", "IT"),
    ("Nigeria", "NG"),
    ("Poland", "PL"),
    ("Russia", "RU"),
    ("Spain", "ES"),
    ("UK", "GB"),
    ("US", "US"),
    ("Japan", "JP"),
    ("Chile", "CL"),
    ("Kenya", "KE"),
    ("Peru", "PE"),
    ("Brazil", "BR"),
    ("Canada", "CA"),
];

/// Flag emoji for a known country, built from regional indicator symbols
pub fn flag_artwork(item: &ItemId) -> Option<String> {
    let code = COUNTRY_CODES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(item.as_str()))
        .map(|(_, code)| *code)?;

    code.chars()
        .map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
        .collect()
}

/// What to show for a choice: the flag if one can be drawn, otherwise a masked label
pub fn choice_label(item: &ItemId, number: usize) -> String {
    flag_artwork(item).unwrap_or_else(|| format!("Flag #{}", number))
}
