/// Text classification of a WMO weather code.
/// See: https://open-meteo.com/en/docs#weathervariables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionLabel {
    Clear,
    PartlyCloudy,
    Overcast,
    Fog,
    Rain,
    Snow,
    Thunderstorms,
    MixedConditions,
    Unknown,
}

// Ordered rule table, evaluated top to bottom. Any in-range code not listed
// falls through to MixedConditions; an absent code is Unknown.
const CODE_RULES: &[(&[i64], ConditionLabel)] = &[
    (&[0], ConditionLabel::Clear),
    (&[1, 2], ConditionLabel::PartlyCloudy),
    (&[3], ConditionLabel::Overcast),
    (&[45, 48], ConditionLabel::Fog),
    (&[51, 53, 55, 61, 63, 65, 80, 81, 82], ConditionLabel::Rain),
    (&[71, 73, 75, 85, 86], ConditionLabel::Snow),
    (&[95, 96, 99], ConditionLabel::Thunderstorms),
];

impl ConditionLabel {
    pub fn for_code(code: Option<i64>) -> Self {
        let Some(code) = code else {
            return Self::Unknown;
        };

        for (codes, label) in CODE_RULES {
            if codes.contains(&code) {
                return *label;
            }
        }

        Self::MixedConditions
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorms => "Thunderstorms",
            Self::MixedConditions => "Mixed Conditions",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for ConditionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
