//! Pure registry types (no filesystem access).

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

use crate::collation::locale_compare;
use crate::error::RegistryError;

/// Version stamped into every registry file.
pub const REGISTRY_VERSION: u32 = 1;

/// File name of the registry written at the themes root.
pub const REGISTRY_FILE_NAME: &str = "registry.json";

/// A recognized color role in a theme palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    OnPrimary,
    Secondary,
    OnSecondary,
    Tertiary,
    OnTertiary,
    Error,
    OnError,
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    Outline,
    Shadow,
    Hover,
    OnHover,
}

impl ColorRole {
    /// Every role, in the order palettes are written.
    pub const ALL: [ColorRole; 16] = [
        ColorRole::Primary,
        ColorRole::OnPrimary,
        ColorRole::Secondary,
        ColorRole::OnSecondary,
        ColorRole::Tertiary,
        ColorRole::OnTertiary,
        ColorRole::Error,
        ColorRole::OnError,
        ColorRole::Surface,
        ColorRole::OnSurface,
        ColorRole::SurfaceVariant,
        ColorRole::OnSurfaceVariant,
        ColorRole::Outline,
        ColorRole::Shadow,
        ColorRole::Hover,
        ColorRole::OnHover,
    ];

    /// The key used for this role in theme files and in the registry.
    pub const fn key(self) -> &'static str {
        match self {
            ColorRole::Primary => "mPrimary",
            ColorRole::OnPrimary => "mOnPrimary",
            ColorRole::Secondary => "mSecondary",
            ColorRole::OnSecondary => "mOnSecondary",
            ColorRole::Tertiary => "mTertiary",
            ColorRole::OnTertiary => "mOnTertiary",
            ColorRole::Error => "mError",
            ColorRole::OnError => "mOnError",
            ColorRole::Surface => "mSurface",
            ColorRole::OnSurface => "mOnSurface",
            ColorRole::SurfaceVariant => "mSurfaceVariant",
            ColorRole::OnSurfaceVariant => "mOnSurfaceVariant",
            ColorRole::Outline => "mOutline",
            ColorRole::Shadow => "mShadow",
            ColorRole::Hover => "mHover",
            ColorRole::OnHover => "mOnHover",
        }
    }
}

/// Light or dark half of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Dark,
    Light,
}

impl Variant {
    pub const fn key(self) -> &'static str {
        match self {
            Variant::Dark => "dark",
            Variant::Light => "light",
        }
    }

    /// Select this variant's sub-document, falling back to the whole
    /// document when the variant key is absent or falsy.
    pub fn select(self, document: &Value) -> &Value {
        match document.get(self.key()) {
            Some(v) if is_truthy(v) => v,
            _ => document,
        }
    }
}

/// JavaScript-style truthiness: `null`, `false`, `0`, `""` and NaN are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Rewrite numbers the way JavaScript prints them, at any depth.
///
/// `1.0` becomes `1`, `1e22` becomes `1e+22` and `1e-7` stays `1e-7`, so a
/// palette value reads the same as the number a JavaScript consumer sees.
/// Numbers outside the `f64` range are left as written.
pub fn normalize_numbers(value: &Value) -> Value {
    match value {
        Value::Number(n) => n
            .as_f64()
            .filter(|f| f.is_finite())
            .and_then(|f| serde_json::from_str::<Number>(&js_number_text(f)).ok())
            .map_or_else(|| value.clone(), Value::Number),
        Value::Array(items) => Value::Array(items.iter().map(normalize_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), normalize_numbers(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// JavaScript `Number::toString` for a finite value.
fn js_number_text(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let sign = if f < 0.0 { "-" } else { "" };

    // shortest round-trip digits, e.g. "1.2345e2"
    let sci = format!("{:e}", f.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // position of the decimal point relative to the digits
    let n = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat(n.unsigned_abs() as usize))
    } else {
        let e = n - 1;
        let e_sign = if e < 0 { '-' } else { '+' };
        let (head, tail) = digits.split_at(1);
        if tail.is_empty() {
            format!("{head}e{e_sign}{}", e.unsigned_abs())
        } else {
            format!("{head}.{tail}e{e_sign}{}", e.unsigned_abs())
        }
    };
    format!("{sign}{body}")
}

/// Colors for one variant, kept in `ColorRole::ALL` order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    colors: Vec<(ColorRole, Value)>,
}

impl Palette {
    /// Build a palette from a variant document.
    ///
    /// Only truthy values of recognized roles are copied, with numbers
    /// normalized by [`normalize_numbers`]. Anything that is not a JSON
    /// object yields an empty palette.
    pub fn from_variant(variant: &Value) -> Self {
        let Some(object) = variant.as_object() else {
            return Self::default();
        };

        let colors = ColorRole::ALL
            .into_iter()
            .filter_map(|role| {
                object
                    .get(role.key())
                    .filter(|v| is_truthy(v))
                    .map(|v| (role, normalize_numbers(v)))
            })
            .collect();

        Self { colors }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, role: ColorRole) -> Option<&Value> {
        self.colors
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.colors.len()))?;
        for (role, value) in &self.colors {
            map.serialize_entry(role.key(), value)?;
        }
        map.end()
    }
}

/// One theme in the registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryEntry {
    /// Theme name (the directory name)
    pub name: String,
    /// Path relative to the themes root (also the directory name)
    pub path: String,
    pub dark: Palette,
    pub light: Palette,
}

impl RegistryEntry {
    /// Extract an entry from a parsed theme document.
    pub fn from_document(dir_name: &str, document: &Value) -> Self {
        Self {
            name: dir_name.to_string(),
            path: dir_name.to_string(),
            dark: Palette::from_variant(Variant::Dark.select(document)),
            light: Palette::from_variant(Variant::Light.select(document)),
        }
    }
}

/// The consolidated registry written to `registry.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registry {
    pub version: u32,
    pub themes: Vec<RegistryEntry>,
}

impl Registry {
    /// Sort entries by name and stamp the current version.
    ///
    /// The sort is stable, so entries whose names compare equal keep their
    /// collection order.
    pub fn assemble(mut themes: Vec<RegistryEntry>) -> Self {
        themes.sort_by(|a, b| locale_compare(&a.name, &b.name));
        Self {
            version: REGISTRY_VERSION,
            themes,
        }
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn names(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    /// Render as 2-space indented JSON followed by a single newline.
    pub fn to_json_string(&self) -> Result<String, RegistryError> {
        let mut out = serde_json::to_string_pretty(self).map_err(RegistryError::Serialize)?;
        out.push('\n');
        Ok(out)
    }
}
