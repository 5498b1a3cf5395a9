//! Per-field shortcut tables for enumerated string values.
//!
//! Each table is a bijection scoped to one field, so the same character can
//! stand for different values in different fields (`d` is `detailed` for
//! `style`, `digital` for `displayMode`, `day` for `defaultView`).

pub struct ShortcutTable {
    pub field: &'static str,
    /// (value, code)
    pub entries: &'static [(&'static str, &'static str)],
}

pub static TABLES: &[ShortcutTable] = &[
    ShortcutTable {
        field: "style",
        entries: &[
            ("modern-grid", "m"),
            ("classic", "c"),
            ("minimal", "n"),
            ("detailed", "d"),
            ("compact", "k"),
            ("card", "a"),
            ("glass", "g"),
        ],
    },
    ShortcutTable {
        field: "fontSize",
        entries: &[("small", "s"), ("medium", "m"), ("large", "l")],
    },
    ShortcutTable {
        field: "fontFamily",
        entries: &[("system", "s"), ("serif", "e"), ("monospace", "m")],
    },
    ShortcutTable {
        field: "defaultView",
        entries: &[("month", "m"), ("week", "w"), ("day", "d"), ("agenda", "a")],
    },
    ShortcutTable {
        field: "startOfWeek",
        entries: &[("sunday", "s"), ("monday", "m")],
    },
    ShortcutTable {
        field: "displayMode",
        entries: &[("digital", "d"), ("analog", "a"), ("both", "b")],
    },
    ShortcutTable {
        field: "units",
        entries: &[("celsius", "c"), ("fahrenheit", "f"), ("kelvin", "k")],
    },
];

pub fn table_for(field: &str) -> Option<&'static ShortcutTable> {
    TABLES.iter().find(|t| t.field == field)
}

/// Short code for `value` in `field`, if the field has one.
pub fn shorten(field: &str, value: &str) -> Option<&'static str> {
    table_for(field)?
        .entries
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, code)| *code)
}

/// Value behind `code` in `field`.
pub fn expand(field: &str, code: &str) -> Option<&'static str> {
    table_for(field)?
        .entries
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(value, _)| *value)
}
