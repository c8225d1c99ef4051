use crate::models::{
    Gender, SkiQuery, SkiSize, SkiStyle, SkillLevel, SnowboardQuery, SnowboardSize,
    SnowboardStyle, TurnRadius, WaistWidth,
};

/// Shoe size (EU) from which a wide board is recommended
const WIDE_BOARD_SHOE_SIZE: f32 = 44.0;

const SKI_MIN_LENGTH: i32 = 130;
const SKI_MAX_LENGTH: i32 = 195;

/// Base snowboard length range for a rider height
///
/// | height (cm) | range (cm) |
/// |-------------|------------|
/// | < 150       | 130–140    |
/// | 150–159     | 135–145    |
/// | 160–169     | 145–155    |
/// | 170–179     | 155–165    |
/// | 180–190     | 165–175    |
/// | > 190       | 175–185    |
fn snowboard_base_range(height_cm: u16) -> (i32, i32) {
    match height_cm {
        0..=149 => (130, 140),
        150..=159 => (135, 145),
        160..=169 => (145, 155),
        170..=179 => (155, 165),
        180..=190 => (165, 175),
        _ => (175, 185),
    }
}

fn snowboard_style_adjustment(style: Option<SnowboardStyle>) -> i32 {
    match style {
        Some(SnowboardStyle::Freestyle) => -3,
        Some(SnowboardStyle::Freeride) => 3,
        Some(SnowboardStyle::AllMountain) | None => 0,
    }
}

fn gender_adjustment(gender: Gender) -> i32 {
    match gender {
        Gender::Female => -3,
        Gender::Male => 0,
    }
}

/// Recommend a snowboard length range
///
/// The height bracket gives the base range, then style and gender shift
/// both ends by the same amount. A shoe size of 44 or more asks for a
/// wide board.
pub fn calculate_snowboard_size(query: &SnowboardQuery) -> SnowboardSize {
    let (base_min, base_max) = snowboard_base_range(query.height_cm);
    let style_adjust = snowboard_style_adjustment(query.style);
    let gender_adjust = gender_adjustment(query.gender);
    let adjust = style_adjust + gender_adjust;

    let min_length = to_length(base_min + adjust);
    let max_length = to_length(base_max + adjust);
    let wide = query.shoe_size >= WIDE_BOARD_SHOE_SIZE;

    let mut explanation = format!(
        "Height {} cm, weight {} kg: base range {}–{} cm.",
        query.height_cm, query.weight_kg, base_min, base_max
    );
    if style_adjust != 0 {
        explanation.push_str(&format!(" Riding style {:+} cm.", style_adjust));
    }
    if gender_adjust != 0 {
        explanation.push_str(&format!(" Women's board {:+} cm.", gender_adjust));
    }
    if wide {
        explanation.push_str(&format!(
            " Shoe size {} EU needs a wide (W) board.",
            query.shoe_size
        ));
    }

    tracing::debug!(
        "Snowboard size for {} cm: {}–{} cm (wide: {})",
        query.height_cm,
        min_length,
        max_length,
        wide
    );

    SnowboardSize {
        min_length,
        max_length,
        wide,
        explanation,
    }
}

fn ski_style_adjustment(style: Option<SkiStyle>) -> i32 {
    match style {
        Some(SkiStyle::Carving) => -3,
        Some(SkiStyle::Freeride) => 5,
        Some(SkiStyle::AllMountain) | None => 0,
    }
}

fn ski_level_adjustment(level: Option<SkillLevel>) -> i32 {
    match level {
        Some(SkillLevel::Beginner) => -5,
        Some(SkillLevel::Advanced) => 5,
        Some(SkillLevel::Intermediate) | None => 0,
    }
}

/// Heavier riders than `height - 100` kg get longer skis, lighter ones shorter
fn ski_weight_adjustment(height_cm: u16, weight_kg: u16) -> i32 {
    let reference = i32::from(height_cm) - 100;
    let deviation = i32::from(weight_kg) - reference;

    if deviation < -5 {
        -3
    } else if deviation > 5 {
        3
    } else {
        0
    }
}

/// Waist width and turn radius for a ski style
fn ski_geometry(style: Option<SkiStyle>) -> (WaistWidth, TurnRadius) {
    match style {
        Some(SkiStyle::Carving) => (
            WaistWidth { min_mm: None, max_mm: Some(75) },
            TurnRadius { min_m: 11, max_m: 13 },
        ),
        Some(SkiStyle::Freeride) => (
            WaistWidth { min_mm: Some(100), max_mm: None },
            TurnRadius { min_m: 16, max_m: 22 },
        ),
        Some(SkiStyle::AllMountain) | None => (
            WaistWidth { min_mm: Some(75), max_mm: Some(100) },
            TurnRadius { min_m: 13, max_m: 17 },
        ),
    }
}

/// Recommend a ski length range
///
/// Starts from `height - 12` cm, applies style, level and weight
/// adjustments, then opens a ±5 cm window clamped to 130–195 cm.
pub fn calculate_ski_size(query: &SkiQuery) -> SkiSize {
    let base = i32::from(query.height_cm) - 12;
    let style_adjust = ski_style_adjustment(query.style);
    let level_adjust = ski_level_adjustment(query.level);
    let weight_adjust = ski_weight_adjustment(query.height_cm, query.weight_kg);
    let center = base + style_adjust + level_adjust + weight_adjust;

    let min_length = to_length((center - 5).clamp(SKI_MIN_LENGTH, SKI_MAX_LENGTH));
    let max_length = to_length((center + 5).clamp(SKI_MIN_LENGTH, SKI_MAX_LENGTH));
    let (waist, radius) = ski_geometry(query.style);

    let mut explanation = format!("Height {} cm: base length {} cm.", query.height_cm, base);
    for (reason, value) in [
        ("Riding style", style_adjust),
        ("Skill level", level_adjust),
        ("Weight", weight_adjust),
    ] {
        if value != 0 {
            explanation.push_str(&format!(" {} {:+} cm.", reason, value));
        }
    }
    explanation.push_str(&format!(" Waist {}, turn radius {}.", waist, radius));

    tracing::debug!(
        "Ski size for {} cm / {} kg: {}–{} cm",
        query.height_cm,
        query.weight_kg,
        min_length,
        max_length
    );

    SkiSize {
        min_length,
        max_length,
        waist,
        radius,
        explanation,
    }
}

#[inline]
fn to_length(value: i32) -> u16 {
    value.clamp(0, i32::from(u16::MAX)) as u16
}
