use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Granule, UnknownGranule};

/// A user-facing paste action that applies several granules at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GranuleBundle {
    Fills,
    Strokes,
    Effects,
    CornerRadius,
    Opacity,
    BlendMode,
    Position,
    Size,
    Rotation,
    AutoLayout,
    Constraints,
    LayoutGrids,
    TextContent,
    TextStyles,
    ExportSettings,
    All,
}

impl GranuleBundle {
    pub const ALL: &'static [GranuleBundle] = &[
        GranuleBundle::Fills,
        GranuleBundle::Strokes,
        GranuleBundle::Effects,
        GranuleBundle::CornerRadius,
        GranuleBundle::Opacity,
        GranuleBundle::BlendMode,
        GranuleBundle::Position,
        GranuleBundle::Size,
        GranuleBundle::Rotation,
        GranuleBundle::AutoLayout,
        GranuleBundle::Constraints,
        GranuleBundle::LayoutGrids,
        GranuleBundle::TextContent,
        GranuleBundle::TextStyles,
        GranuleBundle::ExportSettings,
        GranuleBundle::All,
    ];

    pub fn granules(self) -> &'static [Granule] {
        use Granule::*;
        match self {
            GranuleBundle::Fills => &[Fills],
            GranuleBundle::Strokes => &[
                Strokes,
                StrokeWeight,
                StrokeAlign,
                DashPattern,
                StrokeCap,
                StrokeJoin,
            ],
            GranuleBundle::Effects => &[Effects],
            GranuleBundle::CornerRadius => &[
                CornerRadius,
                TopLeftRadius,
                TopRightRadius,
                BottomLeftRadius,
                BottomRightRadius,
            ],
            GranuleBundle::Opacity => &[Opacity],
            GranuleBundle::BlendMode => &[BlendMode],
            GranuleBundle::Position => &[X, Y],
            GranuleBundle::Size => &[Width, Height],
            GranuleBundle::Rotation => &[Rotation],
            GranuleBundle::AutoLayout => &[
                PaddingLeft,
                PaddingRight,
                PaddingTop,
                PaddingBottom,
                ItemSpacing,
                PrimaryAxisAlignItems,
                CounterAxisAlignItems,
                LayoutMode,
                LayoutWrap,
            ],
            GranuleBundle::Constraints => &[Constraints],
            GranuleBundle::LayoutGrids => &[LayoutGrids],
            GranuleBundle::TextContent => &[Characters],
            GranuleBundle::TextStyles => &[
                TextStyleId,
                FontName,
                FontSize,
                LineHeight,
                LetterSpacing,
                ParagraphSpacing,
                ParagraphIndent,
                TextCase,
                TextDecoration,
            ],
            GranuleBundle::ExportSettings => &[ExportSettings],
            GranuleBundle::All => Granule::ALL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GranuleBundle::Fills => "fills",
            GranuleBundle::Strokes => "strokes",
            GranuleBundle::Effects => "effects",
            GranuleBundle::CornerRadius => "corner-radius",
            GranuleBundle::Opacity => "opacity",
            GranuleBundle::BlendMode => "blend-mode",
            GranuleBundle::Position => "position",
            GranuleBundle::Size => "size",
            GranuleBundle::Rotation => "rotation",
            GranuleBundle::AutoLayout => "auto-layout",
            GranuleBundle::Constraints => "constraints",
            GranuleBundle::LayoutGrids => "layout-grids",
            GranuleBundle::TextContent => "text-content",
            GranuleBundle::TextStyles => "text-styles",
            GranuleBundle::ExportSettings => "export-settings",
            GranuleBundle::All => "all",
        }
    }
}

impl fmt::Display for GranuleBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GranuleBundle {
    type Err = UnknownGranule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GranuleBundle::ALL
            .iter()
            .copied()
            .find(|bundle| bundle.as_str() == s)
            .ok_or_else(|| UnknownGranule(s.to_string()))
    }
}
