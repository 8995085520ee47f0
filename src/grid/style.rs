use serde::{Deserialize, Serialize};

/// How each cell gets rendered into an animation frame.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum Style {
    /// Fill the entire 4x4 area with the cell's color.
    #[default]
    Fill,
    /// Fill a 3x3 area with the cell's color, leaving a 1 pixel black grid pattern between.
    Grid,
    /// Fill a 3x3 cross with the cell's color, leaving black space between.
    Cross,
}
