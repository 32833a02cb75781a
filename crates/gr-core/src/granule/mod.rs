//! Granules: the closed set of node attributes that can be copied and pasted.
//!
//! Every granule's string form is the exact property key the host uses on a
//! node, so the same identifier is used to read during extraction and to write
//! during paste.

mod bundle;
pub mod resolver;
pub mod setter;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::node::Capabilities;

pub use bundle::GranuleBundle;
pub use resolver::resolve_mixed;
pub use setter::{apply_granule, setter_for, ApplyError, Setter};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown granule: {0}")]
pub struct UnknownGranule(pub String);

/// Declares the granule enum together with its host key and the node
/// capability a node must have to expose it.
macro_rules! granules {
    ($($variant:ident => $key:literal, $capability:ident, $shape:ident;)*) => {
        /// One independently copy/paste-able node attribute.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Granule {
            $(
                #[serde(rename = $key)]
                $variant,
            )*
        }

        impl Granule {
            /// Every granule, in canonical order.
            pub const ALL: &'static [Granule] = &[$(Granule::$variant),*];

            /// Host property key.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Granule::$variant => $key,)*
                }
            }

            /// Capability a node kind must have for this property to exist on it.
            pub fn required_capability(self) -> Capabilities {
                match self {
                    $(Granule::$variant => Capabilities::$capability,)*
                }
            }

            /// Shape of the value the host stores under this key.
            pub fn shape(self) -> ValueShape {
                match self {
                    $(Granule::$variant => ValueShape::$shape,)*
                }
            }
        }

        impl FromStr for Granule {
            type Err = UnknownGranule;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok(Granule::$variant),)*
                    other => Err(UnknownGranule(other.to_string())),
                }
            }
        }
    };
}

granules! {
    Fills => "fills", GEOMETRY, Paints;
    Strokes => "strokes", GEOMETRY, Paints;
    Effects => "effects", BLEND, List;
    Rotation => "rotation", DIMENSION, Number;
    Opacity => "opacity", BLEND, Number;
    CornerRadius => "cornerRadius", CORNER, Number;
    TopLeftRadius => "topLeftRadius", RECTANGLE_CORNERS, Number;
    TopRightRadius => "topRightRadius", RECTANGLE_CORNERS, Number;
    BottomLeftRadius => "bottomLeftRadius", RECTANGLE_CORNERS, Number;
    BottomRightRadius => "bottomRightRadius", RECTANGLE_CORNERS, Number;
    StrokeWeight => "strokeWeight", GEOMETRY, Number;
    StrokeAlign => "strokeAlign", GEOMETRY, Keyword;
    DashPattern => "dashPattern", GEOMETRY, NumberList;
    StrokeCap => "strokeCap", GEOMETRY, Keyword;
    StrokeJoin => "strokeJoin", GEOMETRY, Keyword;
    StrokeMiterLimit => "strokeMiterLimit", GEOMETRY, Number;
    ItemSpacing => "itemSpacing", AUTO_LAYOUT, Number;
    PaddingLeft => "paddingLeft", AUTO_LAYOUT, Number;
    PaddingRight => "paddingRight", AUTO_LAYOUT, Number;
    PaddingTop => "paddingTop", AUTO_LAYOUT, Number;
    PaddingBottom => "paddingBottom", AUTO_LAYOUT, Number;
    LayoutMode => "layoutMode", AUTO_LAYOUT, Keyword;
    PrimaryAxisSizingMode => "primaryAxisSizingMode", AUTO_LAYOUT, Keyword;
    CounterAxisSizingMode => "counterAxisSizingMode", AUTO_LAYOUT, Keyword;
    PrimaryAxisAlignItems => "primaryAxisAlignItems", AUTO_LAYOUT, Keyword;
    CounterAxisAlignItems => "counterAxisAlignItems", AUTO_LAYOUT, Keyword;
    LayoutGrids => "layoutGrids", LAYOUT_GRIDS, List;
    Constraints => "constraints", CONSTRAINTS, Object;
    BlendMode => "blendMode", BLEND, Keyword;
    ExportSettings => "exportSettings", EXPORT, List;
    Characters => "characters", TEXT, Text;
    TextStyleId => "textStyleId", TEXT, Text;
    FillStyleId => "fillStyleId", GEOMETRY, Text;
    StrokeStyleId => "strokeStyleId", GEOMETRY, Text;
    EffectStyleId => "effectStyleId", BLEND, Text;
    FontName => "fontName", TEXT, FontName;
    FontSize => "fontSize", TEXT, Number;
    LineHeight => "lineHeight", TEXT, Object;
    LetterSpacing => "letterSpacing", TEXT, Object;
    ParagraphSpacing => "paragraphSpacing", TEXT, Number;
    ParagraphIndent => "paragraphIndent", TEXT, Number;
    ListSpacing => "listSpacing", TEXT, Number;
    TextCase => "textCase", TEXT, Keyword;
    TextDecoration => "textDecoration", TEXT, Keyword;
    X => "x", DIMENSION, Number;
    Y => "y", DIMENSION, Number;
    Width => "width", DIMENSION, Number;
    Height => "height", DIMENSION, Number;
    LayoutWrap => "layoutWrap", AUTO_LAYOUT, Keyword;
    LayoutAlign => "layoutAlign", LAYOUT_CHILD, Keyword;
    LayoutGrow => "layoutGrow", LAYOUT_CHILD, Number;
}

impl Granule {
    /// Style-id granules whose value is enriched with the style's name.
    pub fn is_style_id(self) -> bool {
        matches!(
            self,
            Granule::TextStyleId | Granule::FillStyleId | Granule::StrokeStyleId | Granule::EffectStyleId
        )
    }

    /// Paint-array granules whose bound variables are enriched with names.
    pub fn is_paint_array(self) -> bool {
        matches!(self, Granule::Fills | Granule::Strokes)
    }

    /// Text granules that require the target's font to be loaded before writing.
    pub fn is_text_property(self) -> bool {
        matches!(
            self,
            Granule::Characters
                | Granule::FontName
                | Granule::FontSize
                | Granule::LineHeight
                | Granule::LetterSpacing
                | Granule::ParagraphSpacing
                | Granule::ParagraphIndent
                | Granule::TextCase
                | Granule::TextDecoration
        )
    }

    /// Granules a text node can report per character range.
    pub fn is_range_sampled(self) -> bool {
        matches!(
            self,
            Granule::FontSize
                | Granule::FontName
                | Granule::LineHeight
                | Granule::LetterSpacing
                | Granule::TextDecoration
                | Granule::TextCase
                | Granule::Fills
                | Granule::TextStyleId
                | Granule::FillStyleId
                | Granule::ParagraphSpacing
                | Granule::ParagraphIndent
                | Granule::ListSpacing
        )
    }

    /// `width` / `height`, which paste applies through resize or sizing modes.
    pub fn is_size(self) -> bool {
        matches!(self, Granule::Width | Granule::Height)
    }
}

impl fmt::Display for Granule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a list of host keys, reporting the first unknown one.
pub fn parse_granules<I, S>(keys: I) -> Result<Vec<Granule>, UnknownGranule>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keys.into_iter().map(|k| k.as_ref().parse()).collect()
}

/// Shape of a granule's value, used by the setter table to validate before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// Finite number.
    Number,
    /// Non-empty enum-like string (`"INSIDE"`, `"HORIZONTAL"`).
    Keyword,
    /// Free text, may be empty (content, style ids).
    Text,
    /// Paint array.
    Paints,
    /// Array of numbers.
    NumberList,
    /// Any array.
    List,
    /// Any object.
    Object,
    /// `{ family, style }`.
    FontName,
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueShape::Number => "number",
            ValueShape::Keyword => "keyword",
            ValueShape::Text => "string",
            ValueShape::Paints => "paint array",
            ValueShape::NumberList => "number array",
            ValueShape::List => "array",
            ValueShape::Object => "object",
            ValueShape::FontName => "font name",
        };
        f.write_str(name)
    }
}
