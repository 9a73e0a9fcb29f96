use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// ============================================================================
// Numeric-entry grammar
// ============================================================================

/// До трёх цифр целой части, необязательная точка, не больше одной цифры после неё.
/// Дробная цифра допустима только после точки, поэтому "1000" не проходит.
/// Цифры только ASCII: `\d` в `regex` по умолчанию совпадает с любыми Unicode-цифрами.
pub const MEASUREMENT_GRAMMAR: &str = r"^[0-9]{0,3}(\.[0-9]?)?$";

static MEASUREMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(MEASUREMENT_GRAMMAR).expect("measurement grammar is a valid regex"));

/// Проверка строки на соответствие грамматике ввода замера.
/// Пустая строка и одиночная точка допустимы.
pub fn is_valid_entry(text: &str) -> bool {
    MEASUREMENT_REGEX.is_match(text)
}

// ============================================================================
// Measurement kinds
// ============================================================================

/// Стандартные замеры снимка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementKind {
    Weight,
    Waist,
    Thighs,
    Arms,
}

impl MeasurementKind {
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementKind::Weight => "Weight",
            MeasurementKind::Waist => "Waist",
            MeasurementKind::Thighs => "Thighs",
            MeasurementKind::Arms => "Arms",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MeasurementKind::Weight => "kg",
            MeasurementKind::Waist | MeasurementKind::Thighs | MeasurementKind::Arms => "cm",
        }
    }

    /// All kinds in display order.
    pub fn all() -> [MeasurementKind; 4] {
        [
            MeasurementKind::Weight,
            MeasurementKind::Waist,
            MeasurementKind::Thighs,
            MeasurementKind::Arms,
        ]
    }
}

// ============================================================================
// Measurement value
// ============================================================================

/// Result of a single input attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Accepted,
    /// The stored text was left as it was.
    Rejected,
}

impl InputOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, InputOutcome::Accepted)
    }
}

/// What the field shows at its trailing edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trailing<'a> {
    ClearButton,
    UnitLabel(&'a str),
}

/// Значение поля замера: подпись, единица измерения и введённый текст.
///
/// `raw_text` всегда либо пуст, либо соответствует [`MEASUREMENT_GRAMMAR`]:
/// недопустимый ввод отбрасывается целиком, а не исправляется.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementValue {
    label: String,
    unit: String,
    raw_text: String,
}

impl MeasurementValue {
    pub fn new(label: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            unit: unit.into(),
            raw_text: String::new(),
        }
    }

    pub fn for_kind(kind: MeasurementKind) -> Self {
        Self::new(kind.label(), kind.unit())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Попытка заменить текст поля. Принимается только строка,
    /// целиком соответствующая грамматике.
    pub fn try_input(&mut self, proposed: &str) -> InputOutcome {
        if !is_valid_entry(proposed) {
            return InputOutcome::Rejected;
        }
        self.raw_text.clear();
        self.raw_text.push_str(proposed);
        InputOutcome::Accepted
    }

    pub fn clear(&mut self) {
        self.raw_text.clear();
    }

    /// Empty text is always flagged, even before the first interaction.
    pub fn is_error(&self) -> bool {
        self.raw_text.is_empty()
    }

    pub fn trailing(&self) -> Trailing<'_> {
        if self.raw_text.is_empty() {
            Trailing::UnitLabel(&self.unit)
        } else {
            Trailing::ClearButton
        }
    }

    /// Числовое значение; `None` для пустой строки и одиночной точки
    pub fn as_number(&self) -> Option<f64> {
        self.raw_text.parse().ok()
    }
}
