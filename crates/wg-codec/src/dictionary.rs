//! Field dictionary — long field name ↔ short wire code.
//!
//! Codes are grouped by convention only: unprefixed for shared fields, `c*`
//! calendar, `k*` clock, `w*` weather. Changing an existing entry changes the
//! wire format.

use std::collections::HashMap;
use std::sync::LazyLock;
use wg_core::FieldFamily;

/// Key holding the widget type tag.
pub const TYPE_KEY: &str = "_";
/// Key holding the format version. Absent means version 1.
pub const VERSION_KEY: &str = "v";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Color,
    Bool,
    Number,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub code: &'static str,
    pub kind: FieldKind,
    pub family: FieldFamily,
}

const fn field(name: &'static str, code: &'static str, kind: FieldKind, family: FieldFamily) -> FieldSpec {
    FieldSpec { name, code, kind, family }
}

use self::FieldKind::{Bool, Color, Number, Text};
use wg_core::FieldFamily::{Calendar, Clock, Shared, Weather};

pub static FIELDS: &[FieldSpec] = &[
    field("primaryColor", "p", Color, Shared),
    field("backgroundColor", "b", Color, Shared),
    field("textColor", "t", Color, Shared),
    field("accentColor", "a", Color, Shared),
    field("borderColor", "bc", Color, Shared),
    field("borderRadius", "r", Number, Shared),
    field("showBorder", "sb", Bool, Shared),
    field("padding", "pd", Number, Shared),
    field("fontSize", "fs", Text, Shared),
    field("fontFamily", "ff", Text, Shared),
    field("style", "st", Text, Shared),
    field("transparent", "tr", Bool, Shared),
    field("defaultView", "cv", Text, Calendar),
    field("showWeekends", "cw", Bool, Calendar),
    field("startOfWeek", "cs", Text, Calendar),
    field("showWeekNumbers", "cn", Bool, Calendar),
    field("highlightToday", "ch", Bool, Calendar),
    field("todayColor", "ct", Color, Calendar),
    field("showSeconds", "ks", Bool, Clock),
    field("format24h", "kf", Bool, Clock),
    field("showDate", "kd", Bool, Clock),
    field("displayMode", "km", Text, Clock),
    field("timezone", "kz", Text, Clock),
    field("handColor", "kh", Color, Clock),
    field("units", "wu", Text, Weather),
    field("location", "wl", Text, Weather),
    field("showForecast", "wf", Bool, Weather),
    field("forecastDays", "wd", Number, Weather),
    field("showHumidity", "wh", Bool, Weather),
    field("showWind", "ww", Bool, Weather),
    field("iconColor", "wi", Color, Weather),
];

static BY_NAME: LazyLock<HashMap<&'static str, &'static FieldSpec>> =
    LazyLock::new(|| FIELDS.iter().map(|f| (f.name, f)).collect());

static BY_CODE: LazyLock<HashMap<&'static str, &'static FieldSpec>> =
    LazyLock::new(|| FIELDS.iter().map(|f| (f.code, f)).collect());

pub fn by_name(name: &str) -> Option<&'static FieldSpec> {
    BY_NAME.get(name).copied()
}

pub fn by_code(code: &str) -> Option<&'static FieldSpec> {
    BY_CODE.get(code).copied()
}

/// Color fields are recognised by name, not by value.
pub fn is_color_field(name: &str) -> bool {
    name.contains("Color")
}

/// Fields a widget of `family` carries: shared ones plus its own.
pub fn fields_for(family: Option<FieldFamily>) -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS
        .iter()
        .filter(move |f| f.family == Shared || Some(f.family) == family)
}
